//! # Snapshot Codecs
//!
//! Two interchangeable encodings of an ordered record list.
//!
//! ## JSON
//! ```text
//! [
//!   { "kind": "packaged", "id": 1, "name": "Bread", "category": "Bakery",
//!     "price_cents": 6000, "quantity": 15 },
//!   ...
//! ]
//! ```
//!
//! ## XML
//! ```text
//! <catalog>
//!   <product>
//!     <kind>bulk</kind>
//!     <id>3</id>
//!     ...
//!     <weight>100</weight>
//!   </product>
//! </catalog>
//! ```
//!
//! Both keep record order and the variant tag, so decode → encode
//! reproduces the original text.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PersistError, PersistResult};
use crate::record::ProductRecord;

#[derive(Serialize)]
#[serde(rename = "catalog")]
struct XmlCatalogOut<'a> {
    #[serde(rename = "product")]
    products: &'a [ProductRecord],
}

#[derive(Deserialize)]
#[serde(rename = "catalog")]
struct XmlCatalogIn {
    #[serde(rename = "product", default)]
    products: Vec<ProductRecord>,
}

/// Snapshot encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Xml,
}

impl SnapshotFormat {
    pub const ALL: [SnapshotFormat; 2] = [SnapshotFormat::Json, SnapshotFormat::Xml];

    /// Display name used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            SnapshotFormat::Json => "JSON",
            SnapshotFormat::Xml => "XML",
        }
    }

    /// File extension, without the dot.
    pub const fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Json => "json",
            SnapshotFormat::Xml => "xml",
        }
    }

    /// Infers the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> PersistResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("json") => Ok(SnapshotFormat::Json),
            Some("xml") => Ok(SnapshotFormat::Xml),
            _ => Err(PersistError::UnknownFormat(path.to_path_buf())),
        }
    }

    pub fn encode(&self, records: &[ProductRecord]) -> PersistResult<String> {
        match self {
            SnapshotFormat::Json => {
                serde_json::to_string_pretty(records).map_err(|e| self.encode_error(e))
            }
            SnapshotFormat::Xml => {
                let mut out = String::new();
                let mut ser = quick_xml::se::Serializer::new(&mut out);
                ser.indent(' ', 2);
                XmlCatalogOut { products: records }
                    .serialize(ser)
                    .map_err(|e| self.encode_error(e))?;
                Ok(out)
            }
        }
    }

    pub fn decode(&self, text: &str) -> PersistResult<Vec<ProductRecord>> {
        match self {
            SnapshotFormat::Json => serde_json::from_str(text).map_err(|e| self.decode_error(e)),
            SnapshotFormat::Xml => quick_xml::de::from_str::<XmlCatalogIn>(text)
                .map(|catalog| catalog.products)
                .map_err(|e| self.decode_error(e)),
        }
    }

    fn encode_error(&self, err: impl std::fmt::Display) -> PersistError {
        PersistError::Encode {
            format: self.name(),
            message: err.to_string(),
        }
    }

    fn decode_error(&self, err: impl std::fmt::Display) -> PersistError {
        PersistError::Decode {
            format: self.name(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn records() -> Vec<ProductRecord> {
        vec![
            ProductRecord {
                kind: "packaged".to_string(),
                id: 1,
                name: "Хлеб".to_string(),
                category: "Bakery & Co".to_string(),
                price_cents: 6000,
                quantity: Some(15),
                weight: None,
            },
            ProductRecord {
                kind: "bulk".to_string(),
                id: 3,
                name: "Poppy-seed bun".to_string(),
                category: "Bakery & Co".to_string(),
                price_cents: 2500,
                quantity: None,
                weight: Some(99.75),
            },
        ]
    }

    #[test]
    fn test_formats_decode_what_they_encode() {
        for format in SnapshotFormat::ALL {
            let text = format.encode(&records()).unwrap();
            let decoded = format.decode(&text).unwrap();
            assert_eq!(decoded, records(), "{} lost data", format.name());
        }
    }

    #[test]
    fn test_xml_shape() {
        let text = SnapshotFormat::Xml.encode(&records()).unwrap();

        assert!(text.starts_with("<catalog>"));
        assert_eq!(text.matches("<product>").count(), 2);
        assert!(text.contains("<kind>bulk</kind>"));
        assert!(text.contains("Bakery &amp; Co"));
        // Absent measures are omitted, not written empty.
        assert_eq!(text.matches("<weight>").count(), 1);
    }

    #[test]
    fn test_json_shape() {
        let text = SnapshotFormat::Json.encode(&records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value[0]["kind"], "packaged");
        assert_eq!(value[0]["quantity"], 15);
        assert!(value[0].get("weight").is_none());
        assert_eq!(value[1]["weight"], 99.75);
    }

    #[test]
    fn test_empty_list() {
        for format in SnapshotFormat::ALL {
            let text = format.encode(&[]).unwrap();
            assert!(format.decode(&text).unwrap().is_empty());
        }
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            SnapshotFormat::Json.decode("{not json"),
            Err(PersistError::Decode { format: "JSON", .. })
        ));
        assert!(matches!(
            SnapshotFormat::Xml.decode("<catalog><product><id>x</id></product></catalog>"),
            Err(PersistError::Decode { format: "XML", .. })
        ));
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            SnapshotFormat::from_path(&PathBuf::from("store.JSON")).unwrap(),
            SnapshotFormat::Json
        );
        assert_eq!(
            SnapshotFormat::from_path(&PathBuf::from("a/b/store.xml")).unwrap(),
            SnapshotFormat::Xml
        );
        assert!(SnapshotFormat::from_path(&PathBuf::from("store.csv")).is_err());
        assert!(SnapshotFormat::from_path(&PathBuf::from("store")).is_err());
    }
}
