//! # Receipt
//!
//! The printable record of a completed checkout.
//!
//! Receipt lines freeze the cart lines at the moment of sale, the way a
//! sale item snapshots its product: later catalog changes never alter a
//! receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Measure, Product};

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub measure: Measure,
    pub unit_price: Money,
    pub line_total: Money,
}

impl From<&Product> for ReceiptLine {
    fn from(product: &Product) -> Self {
        ReceiptLine {
            name: product.identity.name.clone(),
            measure: product.measure,
            unit_price: product.price,
            line_total: product.calculate_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub receipt_number: String,
    pub customer: String,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

impl Receipt {
    /// Builds a receipt from purchased products, in their order.
    pub fn new<'a, I>(customer: impl Into<String>, purchased: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let lines: Vec<ReceiptLine> = purchased.into_iter().map(ReceiptLine::from).collect();
        let total = lines.iter().map(|l| l.line_total).sum();
        let issued_at = Utc::now();

        Receipt {
            id: Uuid::new_v4(),
            receipt_number: receipt_number(issued_at),
            customer: customer.into(),
            lines,
            total,
            issued_at,
        }
    }

    /// Renders the receipt as plain text.
    ///
    /// `format_money` controls how amounts look. Lines are joined with `\n`,
    /// with no trailing newline.
    pub fn render<F>(&self, store_name: &str, format_money: F) -> String
    where
        F: Fn(Money) -> String,
    {
        let mut lines = vec![
            format!("----------- {} -----------", store_name),
            format!("Receipt: {}", self.receipt_number),
            format!("Date: {}", self.issued_at.format("%Y-%m-%d %H:%M:%S")),
            format!("Customer: {}", self.customer),
            "Items:".to_string(),
        ];
        lines.extend(self.lines.iter().map(|line| {
            format!(
                "- {} {} x {} = {}",
                line.name,
                line.measure,
                format_money(line.unit_price),
                format_money(line.line_total)
            )
        }));
        lines.push(format!("Total: {}", format_money(self.total)));
        lines.push("----------------------------".to_string());
        lines.join("\n")
    }
}

fn receipt_number(at: DateTime<Utc>) -> String {
    format!("{}-{:04}", at.format("%y%m%d-%H%M%S"), at.timestamp_subsec_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_lines_and_total() {
        let bread = Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 2);
        let buns = Product::bulk(3, "Poppy-seed bun", "Bakery", Money::from_cents(2500), 0.5);

        let receipt = Receipt::new("Ivan", [&bread, &buns]);

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].line_total.cents(), 12000);
        assert_eq!(receipt.lines[1].line_total.cents(), 1250);
        assert_eq!(receipt.total.cents(), 13250);
        assert_eq!(receipt.customer, "Ivan");
    }

    #[test]
    fn test_render() {
        let bread = Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 2);
        let receipt = Receipt::new("Ivan", [&bread]);

        let text = receipt.render("Corner Store", |m| format!("{} RUB", m));

        assert!(text.starts_with("----------- Corner Store -----------"));
        assert!(text.contains("Customer: Ivan"));
        assert!(text.contains("- Bread 2 pcs x 60.00 RUB = 120.00 RUB"));
        assert!(text.contains("Total: 120.00 RUB"));
    }

    #[test]
    fn test_render_layout() {
        let bread = Product::packaged(1, "Bread", "Bakery", Money::from_cents(6000), 2);
        let buns = Product::bulk(3, "Bun", "Bakery", Money::from_cents(2500), 0.5);
        let receipt = Receipt::new("Ivan", [&bread, &buns]);

        let text = receipt.render("Shop", |m| m.to_string());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[1], format!("Receipt: {}", receipt.receipt_number));
        assert!(lines[2].starts_with("Date: "));
        assert_eq!(lines[4], "Items:");
        assert_eq!(lines[5], "- Bread 2 pcs x 60.00 = 120.00");
        assert_eq!(lines[6], "- Bun 0.5 kg x 25.00 = 12.50");
        assert_eq!(lines[7], "Total: 132.50");
        assert_eq!(lines[8], "----------------------------");
        assert!(!text.ends_with('\n'));
    }
}
