//! Resource retrieval: locate a named property list and parse it into an
//! untyped dictionary.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{InventoryError, InventoryResult};

/// Untyped property list: string keys to arbitrary values.
pub type RawDictionary = Map<String, Value>;

/// Resource type understood by [`ResourceBundle::dictionary_from_file`].
pub const RESOURCE_TYPE_JSON: &str = "json";

/// Name of the inventory resource shipped with this crate.
pub const BUNDLED_RESOURCE_NAME: &str = "VendingInventory";

const BUNDLED_INVENTORY: &str = include_str!("../resources/VendingInventory.json");

/// A directory of named resources, addressed as `<name>.<type>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBundle {
    root: PathBuf,
}

impl ResourceBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of `name.of_type` inside the bundle, if such a file exists.
    pub fn path_for_resource(&self, name: &str, of_type: &str) -> Option<PathBuf> {
        let path = self.root.join(format!("{name}.{of_type}"));
        path.is_file().then_some(path)
    }

    /// Locate and parse a resource into a raw dictionary.
    pub fn dictionary_from_file(&self, name: &str, of_type: &str) -> InventoryResult<RawDictionary> {
        let Some(path) = self.path_for_resource(name, of_type) else {
            return Err(InventoryError::InvalidResource(format!("{name}.{of_type}")));
        };

        if !of_type.eq_ignore_ascii_case(RESOURCE_TYPE_JSON) {
            return Err(InventoryError::ConversionError(format!(
                "unsupported resource type: {of_type}"
            )));
        }

        let text = std::fs::read_to_string(&path).map_err(|e| {
            InventoryError::ConversionError(format!("{}: {e}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), "read inventory resource");
        dictionary_from_str(&text)
    }
}

/// Parse property-list text into a raw dictionary.
///
/// The top level must be an object; anything else is a conversion error.
pub fn dictionary_from_str(text: &str) -> InventoryResult<RawDictionary> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| InventoryError::ConversionError(e.to_string()))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(InventoryError::ConversionError(format!(
            "expected a mapping at the top level, found {}",
            kind_of(&other)
        ))),
    }
}

/// The inventory resource compiled into this crate.
pub fn bundled_dictionary() -> InventoryResult<RawDictionary> {
    dictionary_from_str(BUNDLED_INVENTORY)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
