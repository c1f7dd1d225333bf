//! `vending-core` — vending domain building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no resource loading):
//! the closed selection catalog, the stock item value type and the shared
//! domain error.

pub mod error;
pub mod item;
pub mod selection;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use item::Item;
pub use selection::{AssetDirectory, DEFAULT_ICON_NAME, IconLookup, Selection};
pub use value_object::ValueObject;
