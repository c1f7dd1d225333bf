//! Inventory loading errors.

use thiserror::Error;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Failure to produce an inventory. Every variant aborts the whole load.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// The named resource could not be located.
    #[error("resource not found: {0}")]
    InvalidResource(String),

    /// The resource exists but is not a key/object mapping.
    #[error("resource could not be converted: {0}")]
    ConversionError(String),

    /// An entry's key does not name a selection.
    #[error("invalid inventory key: {0}")]
    InvalidKey(String),
}
