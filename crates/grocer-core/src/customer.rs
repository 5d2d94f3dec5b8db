//! # Customer
//!
//! A named shopper with a balance and exactly one cart.

use tracing::{info, warn};

use crate::cart::ShoppingCart;
use crate::money::Money;

#[derive(Debug, Clone)]
pub struct Customer {
    pub name: String,
    balance: Money,
    cart: ShoppingCart,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Customer {
            name: name.into(),
            balance,
            cart: ShoppingCart::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut ShoppingCart {
        &mut self.cart
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        self.balance >= amount
    }

    /// Debits `amount` if the balance covers it.
    ///
    /// ## Returns
    /// `false` (with a warning logged) when funds are insufficient; the
    /// balance is left unchanged.
    pub fn pay(&mut self, amount: Money) -> bool {
        if !self.can_afford(amount) {
            warn!(customer = %self.name, balance = %self.balance, amount = %amount, "Insufficient funds");
            return false;
        }

        self.balance -= amount;
        info!(customer = %self.name, amount = %amount, balance = %self.balance, "Payment accepted");
        true
    }

    /// Credits a positive `amount`.
    pub fn recharge(&mut self, amount: Money) -> bool {
        if !amount.is_positive() {
            warn!(customer = %self.name, amount = %amount, "Recharge amount must be positive");
            return false;
        }

        self.balance += amount;
        info!(customer = %self.name, balance = %self.balance, "Balance recharged");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_debits_balance() {
        let mut customer = Customer::new("Ivan", Money::from_cents(100_000));
        assert!(customer.pay(Money::from_cents(25_000)));
        assert_eq!(customer.balance().cents(), 75_000);
    }

    #[test]
    fn test_pay_exact_balance() {
        let mut customer = Customer::new("Ivan", Money::from_cents(500));
        assert!(customer.pay(Money::from_cents(500)));
        assert!(customer.balance().is_zero());
    }

    #[test]
    fn test_pay_insufficient_leaves_balance() {
        let mut customer = Customer::new("Ivan", Money::from_cents(500));
        assert!(!customer.pay(Money::from_cents(501)));
        assert_eq!(customer.balance().cents(), 500);
    }

    #[test]
    fn test_recharge() {
        let mut customer = Customer::new("Ivan", Money::zero());
        assert!(customer.recharge(Money::from_cents(1000)));
        assert!(!customer.recharge(Money::zero()));
        assert!(!customer.recharge(Money::from_cents(-5)));
        assert_eq!(customer.balance().cents(), 1000);
    }

    #[test]
    fn test_new_customer_has_empty_cart() {
        let customer = Customer::new("Ivan", Money::zero());
        assert!(customer.cart().is_empty());
    }
}
