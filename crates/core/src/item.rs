//! Stock item: price and remaining quantity for one selection.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Price and remaining quantity of one stocked product.
///
/// Price is fixed once the item exists. Quantity only goes down, and only
/// through [`Item::take`], which the machine calls while vending.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemFields")]
pub struct Item {
    price: f64,
    quantity: f64,
}

impl ValueObject for Item {}

/// Wire shape of an item; validated into [`Item`] on deserialization.
#[derive(Deserialize)]
struct ItemFields {
    price: f64,
    quantity: f64,
}

impl TryFrom<ItemFields> for Item {
    type Error = DomainError;

    fn try_from(fields: ItemFields) -> DomainResult<Self> {
        Item::new(fields.price, fields.quantity)
    }
}

impl Item {
    /// Build an item, rejecting negative or non-finite numbers.
    pub fn new(price: f64, quantity: f64) -> DomainResult<Self> {
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::validation(format!(
                "price must be a non-negative number, got {price}"
            )));
        }
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(DomainError::validation(format!(
                "quantity must be a non-negative number, got {quantity}"
            )));
        }
        Ok(Self { price, quantity })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn in_stock(&self) -> bool {
        self.quantity > 0.0
    }

    /// Total price of `quantity` units.
    pub fn total_price(&self, quantity: f64) -> f64 {
        self.price * quantity
    }

    /// Remove `quantity` units from stock without any bounds check.
    ///
    /// Callers decide whether the result may go below zero; the atomic vend
    /// path checks first, the legacy path does not.
    pub fn take(&mut self, quantity: f64) {
        self.quantity -= quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_accepts_zero_values() {
        let item = Item::new(0.0, 0.0).unwrap();
        assert_eq!(item.price(), 0.0);
        assert!(!item.in_stock());
    }

    #[test]
    fn new_rejects_negative_price() {
        let err = Item::new(-1.0, 3.0).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for negative price"),
        }
    }

    #[test]
    fn new_rejects_non_finite_quantity() {
        assert!(Item::new(1.0, f64::NAN).is_err());
        assert!(Item::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn take_reduces_quantity_and_keeps_price() {
        let mut item = Item::new(1.25, 5.0).unwrap();
        item.take(3.0);
        assert_eq!(item.quantity(), 2.0);
        assert_eq!(item.price(), 1.25);
        assert_eq!(item.total_price(2.0), 2.5);
    }

    #[test]
    fn deserializes_from_price_and_quantity_fields() {
        let item: Item = serde_json::from_str(r#"{"price": 1.5, "quantity": 4}"#).unwrap();
        assert_eq!(item, Item::new(1.5, 4.0).unwrap());
    }

    #[test]
    fn deserialization_enforces_validation() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"price": -2, "quantity": 4}"#);
        assert!(result.is_err());
        let missing: Result<Item, _> = serde_json::from_str(r#"{"price": 2}"#);
        assert!(missing.is_err());
    }

    proptest! {
        #[test]
        fn taking_at_most_the_stock_never_goes_negative(
            stock in 0u32..1_000,
            fraction in 0.0f64..=1.0,
        ) {
            let stock = f64::from(stock);
            let wanted = (stock * fraction).floor();
            let mut item = Item::new(2.0, stock).unwrap();
            item.take(wanted);
            prop_assert!(item.quantity() >= 0.0);
            prop_assert_eq!(item.quantity(), stock - wanted);
        }
    }
}
