//! Typed decode of a raw dictionary into an inventory map.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;
use vending_core::{Item, Selection};

use crate::error::{InventoryError, InventoryResult};
use crate::resource::{
    BUNDLED_RESOURCE_NAME, RESOURCE_TYPE_JSON, RawDictionary, ResourceBundle, bundled_dictionary,
};

/// Stocked products keyed by selection. Unstocked selections have no entry.
pub type Inventory = HashMap<Selection, Item>;

/// Converts raw dictionaries into validated inventories.
///
/// Two failure tiers:
/// - an entry whose value is not a `{price, quantity}` object is skipped
/// - a well-formed entry under a key that is not a selection aborts the load
#[derive(Debug, Default, Clone, Copy)]
pub struct InventoryUnarchiver;

impl InventoryUnarchiver {
    pub fn vending_inventory_from_dictionary(dictionary: &RawDictionary) -> InventoryResult<Inventory> {
        let mut inventory = Inventory::with_capacity(dictionary.len());
        let mut skipped = 0usize;

        for (key, value) in dictionary {
            // Shape first: a malformed entry is dropped before its key is looked at.
            let Some(item) = decode_item(key, value) else {
                skipped += 1;
                continue;
            };

            let selection = Selection::from_name(key)
                .map_err(|_| InventoryError::InvalidKey(key.clone()))?;

            inventory.insert(selection, item);
        }

        tracing::info!(loaded = inventory.len(), skipped, "inventory unarchived");
        Ok(inventory)
    }
}

fn decode_item(key: &str, value: &Value) -> Option<Item> {
    match Item::deserialize(value) {
        Ok(item) => Some(item),
        Err(e) => {
            tracing::debug!(key, error = %e, "skipping malformed inventory entry");
            None
        }
    }
}

/// Locate `name.of_type` in `bundle` and unarchive it.
pub fn load_inventory(bundle: &ResourceBundle, name: &str, of_type: &str) -> InventoryResult<Inventory> {
    let dictionary = bundle.dictionary_from_file(name, of_type)?;
    InventoryUnarchiver::vending_inventory_from_dictionary(&dictionary)
}

/// Unarchive the inventory compiled into this crate.
pub fn bundled_inventory() -> InventoryResult<Inventory> {
    tracing::debug!(
        resource = BUNDLED_RESOURCE_NAME,
        of_type = RESOURCE_TYPE_JSON,
        "loading bundled inventory"
    );
    let dictionary = bundled_dictionary()?;
    InventoryUnarchiver::vending_inventory_from_dictionary(&dictionary)
}
