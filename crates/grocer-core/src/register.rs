//! # Cash Register
//!
//! Checkout orchestration: cart total → payment → inventory decrement →
//! receipt → cart clear.
//!
//! ## All-or-Nothing Checkout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. total == 0 ?            ──► EmptyCart          (nothing mutated)    │
//! │  2. balance < total ?       ──► InsufficientFunds  (nothing mutated)    │
//! │  3. decrement a COPY of the store, line by line                         │
//! │       InvalidRemoval / not stocked ──► Err         (nothing mutated)    │
//! │  4. commit: store = copy, revenue += total, balance -= total            │
//! │  5. receipt from cart lines                                             │
//! │  6. cart cleared                ──► Completed(receipt)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::receipt::Receipt;
use crate::store::Store;

/// Result of a checkout that did not hit a collection error.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The cart total was zero; nothing happened.
    EmptyCart,
    /// The customer could not cover the total; nothing happened.
    InsufficientFunds { total: Money, balance: Money },
    /// Paid, stock decremented, cart cleared.
    Completed(Receipt),
}

/// Accrues revenue across checkouts.
#[derive(Debug, Clone, Default)]
pub struct CashRegister {
    revenue: Money,
}

impl CashRegister {
    pub fn new() -> Self {
        CashRegister::default()
    }

    pub fn revenue(&self) -> Money {
        self.revenue
    }

    /// Checks out `customer`'s cart against `store`.
    ///
    /// ## Errors
    /// - `CoreError::InvalidRemoval` if the store holds less than a cart line
    /// - `CoreError::ProductNotFound` if the store does not stock a cart line
    ///
    /// On error, store, cart, balance, and revenue are all unchanged.
    pub fn process_payment(
        &mut self,
        store: &mut Store,
        customer: &mut Customer,
    ) -> CoreResult<CheckoutOutcome> {
        let total = customer.cart().total();
        if total.is_zero() {
            info!(customer = %customer.name, "Cart is empty, nothing to check out");
            return Ok(CheckoutOutcome::EmptyCart);
        }

        if !customer.can_afford(total) {
            warn!(
                customer = %customer.name,
                total = %total,
                balance = %customer.balance(),
                "Insufficient funds, checkout abandoned"
            );
            return Ok(CheckoutOutcome::InsufficientFunds {
                total,
                balance: customer.balance(),
            });
        }

        let mut staged = store.clone();
        for line in customer.cart().items() {
            if !staged.remove_product(line)? {
                return Err(CoreError::ProductNotFound(line.identity.to_string()));
            }
        }

        // The balance check above makes this infallible.
        if !customer.pay(total) {
            return Ok(CheckoutOutcome::InsufficientFunds {
                total,
                balance: customer.balance(),
            });
        }
        *store = staged;
        self.revenue += total;

        let receipt = Receipt::new(customer.name.clone(), customer.cart().items());
        customer.cart_mut().clear();

        info!(
            customer = %customer.name,
            receipt = %receipt.receipt_number,
            total = %total,
            lines = receipt.lines.len(),
            revenue = %self.revenue,
            "Checkout completed"
        );

        Ok(CheckoutOutcome::Completed(receipt))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
