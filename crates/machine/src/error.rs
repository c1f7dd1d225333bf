//! Vending errors.

use thiserror::Error;

pub type VendResult<T> = Result<T, VendingMachineError>;

/// Why a vend was refused.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VendingMachineError {
    /// The selection is not stocked in this machine.
    #[error("invalid selection")]
    InvalidSelection,

    /// Not enough units left to vend.
    #[error("out of stock")]
    OutOfStock,

    /// The deposited balance does not cover the price. `required` is the shortfall.
    #[error("insufficient funds: {required} more required")]
    InsufficientFunds { required: f64 },

    /// Requested quantity was zero, negative or not a number.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(f64),
}
