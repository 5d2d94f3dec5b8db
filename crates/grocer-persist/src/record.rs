//! # Product Records
//!
//! The on-disk shape of one product, shared by both encodings.
//!
//! ```text
//! ┌──────────────────────────────┬──────────────────────────────────────────┐
//! │  Field                       │  Notes                                   │
//! ├──────────────────────────────┼──────────────────────────────────────────┤
//! │  kind                        │  "packaged" | "bulk" (variant tag)       │
//! │  id, name, category          │  identity triple                         │
//! │  price_cents                 │  Money in minor units                    │
//! │  quantity                    │  packaged only                           │
//! │  weight                      │  bulk only                               │
//! └──────────────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! The tag is kept as a plain string so an unknown kind surfaces as
//! [`PersistError::UnknownVariant`] rather than a codec-specific message.

use grocer_core::validation::validate_product;
use grocer_core::{Measure, Money, Product, ProductIdentity, ProductKind};
use serde::{Deserialize, Serialize};

use crate::error::{PersistError, PersistResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub kind: String,
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let (quantity, weight) = match product.measure {
            Measure::Packaged { quantity } => (Some(quantity), None),
            Measure::Bulk { weight } => (None, Some(weight)),
        };

        ProductRecord {
            kind: product.kind().tag().to_string(),
            id: product.identity.id,
            name: product.identity.name.clone(),
            category: product.identity.category.clone(),
            price_cents: product.price.cents(),
            quantity,
            weight,
        }
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = PersistError;

    fn try_from(record: ProductRecord) -> PersistResult<Self> {
        let kind = ProductKind::from_tag(&record.kind)
            .ok_or_else(|| PersistError::UnknownVariant(record.kind.clone()))?;

        let measure = match kind {
            ProductKind::Packaged => Measure::Packaged {
                quantity: record.quantity.ok_or(PersistError::MissingMeasure {
                    id: record.id,
                    kind: kind.tag(),
                    field: "quantity",
                })?,
            },
            ProductKind::Bulk => Measure::Bulk {
                weight: record.weight.ok_or(PersistError::MissingMeasure {
                    id: record.id,
                    kind: kind.tag(),
                    field: "weight",
                })?,
            },
        };

        let product = Product {
            identity: ProductIdentity::new(record.id, record.name, record.category),
            price: Money::from_cents(record.price_cents),
            measure,
        };
        validate_product(&product)?;
        Ok(product)
    }
}
