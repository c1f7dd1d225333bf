//! Inventory loading.
//!
//! Turns an untyped property-list resource into a typed inventory map. Two
//! steps, kept apart so either can be swapped: [`ResourceBundle`] locates and
//! parses the resource, [`InventoryUnarchiver`] validates its entries.

pub mod error;
pub mod resource;
pub mod unarchiver;

pub use error::{InventoryError, InventoryResult};
pub use resource::{
    BUNDLED_RESOURCE_NAME, RESOURCE_TYPE_JSON, RawDictionary, ResourceBundle, bundled_dictionary,
    dictionary_from_str,
};
pub use unarchiver::{Inventory, InventoryUnarchiver, bundled_inventory, load_inventory};
