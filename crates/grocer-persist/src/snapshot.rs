//! # Snapshots
//!
//! Save and load product collections and whole catalogs.
//!
//! ## Catalog Round Trip
//! ```text
//! save_catalog(store)                     load_catalog(path)
//!   store.all_products()                    read file
//!     │                                       │
//!     ▼                                       ▼
//!   ProductRecord::from                     format.decode
//!     │                                       │
//!     ▼                                       ▼
//!   format.encode ──► write file            Product::try_from ──► Store::add_product
//! ```

use std::fs;
use std::path::Path;

use grocer_core::{Product, ProductCollection, Store};
use tracing::{debug, info};

use crate::codec::SnapshotFormat;
use crate::error::{PersistError, PersistResult};
use crate::record::ProductRecord;

/// Encodes a collection in its current order.
pub fn encode_products(
    products: &ProductCollection,
    format: SnapshotFormat,
) -> PersistResult<String> {
    let records: Vec<ProductRecord> = products.iter().map(ProductRecord::from).collect();
    format.encode(&records)
}

/// Decodes snapshot text into a collection.
///
/// Records pass through [`ProductCollection::add`], so duplicate lots in a
/// hand-edited file merge.
pub fn decode_products(text: &str, format: SnapshotFormat) -> PersistResult<ProductCollection> {
    let records = format.decode(text)?;
    let products = records
        .into_iter()
        .map(Product::try_from)
        .collect::<PersistResult<Vec<Product>>>()?;
    Ok(ProductCollection::try_from_products(products)?)
}

/// Writes a collection to `path`.
pub fn save_products(
    products: &ProductCollection,
    path: impl AsRef<Path>,
    format: SnapshotFormat,
) -> PersistResult<()> {
    let path = path.as_ref();
    let text = encode_products(products, format)?;
    fs::write(path, text).map_err(|e| PersistError::io(path, e))?;

    info!(path = %path.display(), format = format.name(), products = products.len(), "Snapshot saved");
    Ok(())
}

/// Reads a collection from `path`.
pub fn load_products(path: impl AsRef<Path>, format: SnapshotFormat) -> PersistResult<ProductCollection> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PersistError::io(path, e))?;
    let products = decode_products(&text, format)?;

    debug!(path = %path.display(), format = format.name(), products = products.len(), "Snapshot read");
    Ok(products)
}

/// Writes every product in the store, category by category.
pub fn save_catalog(store: &Store, path: impl AsRef<Path>, format: SnapshotFormat) -> PersistResult<()> {
    save_products(&store.all_products(), path, format)
}

/// Rebuilds a store from a snapshot file.
///
/// Categories are recreated in the order their first product appears.
pub fn load_catalog(path: impl AsRef<Path>, format: SnapshotFormat) -> PersistResult<Store> {
    let path = path.as_ref();
    let products = load_products(path, format)?;

    let mut store = Store::new();
    for product in products {
        store.add_product(product)?;
    }

    info!(
        path = %path.display(),
        categories = store.categories().len(),
        products = store.product_count(),
        "Catalog loaded"
    );
    Ok(store)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use grocer_core::Money;

    fn demo_store() -> Store {
        let mut store = Store::new();
        store
            .add_product(Product::packaged(1, "Хлеб", "Хлебобулочные изд", Money::from_cents(6000), 10))
            .unwrap();
        store
            .add_product(Product::packaged(1, "Хлеб", "Хлебобулочные изд", Money::from_cents(6000), 5))
            .unwrap();
        store
            .add_product(Product::packaged(2, "Молоко", "Молочница", Money::from_cents(10000), 2))
            .unwrap();
        store
            .add_product(Product::bulk(3, "Булочка с маком", "Хлебобулочные изд", Money::from_cents(2500), 100.0))
            .unwrap();
        store
    }

    #[test]
    fn test_reencode_is_identical() {
        let store = demo_store();

        for format in SnapshotFormat::ALL {
            let first = encode_products(&store.all_products(), format).unwrap();
            let decoded = decode_products(&first, format).unwrap();
            let second = encode_products(&decoded, format).unwrap();
            assert_eq!(first, second, "{} snapshot changed on re-encode", format.name());
        }
    }

    #[test]
    fn test_formats_are_interchangeable() {
        let all = demo_store().all_products();

        let json = encode_products(&all, SnapshotFormat::Json).unwrap();
        let from_json = decode_products(&json, SnapshotFormat::Json).unwrap();
        let xml = encode_products(&from_json, SnapshotFormat::Xml).unwrap();
        let from_xml = decode_products(&xml, SnapshotFormat::Xml).unwrap();

        assert_eq!(from_xml, all);
    }

    #[test]
    fn test_save_and_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let store = demo_store();

        for format in SnapshotFormat::ALL {
            let path = dir.path().join(format!("store.{}", format.extension()));
            save_catalog(&store, &path, format).unwrap();

            let restored = load_catalog(&path, format).unwrap();
            assert_eq!(restored.categories(), store.categories());
            assert_eq!(restored.all_products(), store.all_products());
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert!(matches!(
            load_catalog(&path, SnapshotFormat::Json),
            Err(PersistError::Io { .. })
        ));
    }

    #[test]
    fn test_decode_merges_duplicate_records() {
        let text = r#"[
            {"kind":"packaged","id":1,"name":"Bread","category":"Bakery","price_cents":6000,"quantity":2},
            {"kind":"packaged","id":1,"name":"Bread","category":"Bakery","price_cents":6000,"quantity":3}
        ]"#;

        let products = decode_products(text, SnapshotFormat::Json).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products.iter().next().unwrap().measure.as_quantity(), Some(5));
    }

    #[test]
    fn test_decode_unknown_kind_fails() {
        let text = r#"[{"kind":"crate","id":1,"name":"Bread","category":"Bakery","price_cents":1}]"#;

        assert!(matches!(
            decode_products(text, SnapshotFormat::Json),
            Err(PersistError::UnknownVariant(_))
        ));
    }

    #[test]
    fn test_decode_overflowing_duplicates_fails() {
        let text = r#"[
            {"kind":"packaged","id":1,"name":"Bread","category":"Bakery","price_cents":6000,"quantity":9223372036854775807},
            {"kind":"packaged","id":1,"name":"Bread","category":"Bakery","price_cents":6000,"quantity":1}
        ]"#;

        assert!(matches!(
            decode_products(text, SnapshotFormat::Json),
            Err(PersistError::Rejected(_))
        ));
    }
}
