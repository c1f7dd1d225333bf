//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two stock
//! items with the same price and quantity are the same item as far as the
//! machine is concerned.

/// Marker trait for value objects.
///
/// Value objects are **compared by value** and handed out by copy, so a
/// caller reading an [`Item`](crate::Item) out of the machine can never alter
/// the machine's own state through it.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: printable in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Item { price: f64, quantity: f64 }
///
/// impl ValueObject for Item {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
