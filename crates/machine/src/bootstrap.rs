//! Build a ready-to-use machine from configuration.

use thiserror::Error;
use vending_inventory::{
    InventoryError, RESOURCE_TYPE_JSON, ResourceBundle, bundled_inventory, load_inventory,
};

use crate::config::{ConfigError, MachineConfig};
use crate::machine::VendingMachine;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadMachineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Load the configured inventory and construct a machine around it.
///
/// With no `resource_dir` the inventory compiled into the crate is used.
pub fn load_machine(config: &MachineConfig) -> Result<VendingMachine, LoadMachineError> {
    config.validate()?;

    let inventory = match &config.resource_dir {
        Some(dir) => {
            let bundle = ResourceBundle::new(dir);
            load_inventory(&bundle, &config.resource_name, RESOURCE_TYPE_JSON)?
        }
        None => bundled_inventory()?,
    };

    tracing::info!(
        stocked = inventory.len(),
        balance = config.starting_balance,
        policy = %config.vend_policy,
        "vending machine ready"
    );
    Ok(VendingMachine::with_config(inventory, config))
}

/// [`load_machine`] with configuration read from the environment.
pub fn load_machine_from_env() -> Result<VendingMachine, LoadMachineError> {
    let config = MachineConfig::from_env()?;
    load_machine(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VendPolicy;
    use vending_core::{Item, Selection};

    #[test]
    fn loads_bundled_inventory_by_default() {
        let machine = load_machine(&MachineConfig::default()).unwrap();
        assert_eq!(machine.inventory().len(), 12);
        assert_eq!(machine.amount_deposited(), 10.0);
    }

    #[test]
    fn loads_inventory_from_resource_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("VendingInventory.json"),
            r#"{"Wrap": {"price": 3.5, "quantity": 2}, "Gum": {"price": 0.5}}"#,
        )
        .unwrap();

        let config = MachineConfig::default()
            .with_resource_dir(dir.path())
            .with_vend_policy(VendPolicy::Legacy);
        let machine = load_machine(&config).unwrap();

        assert_eq!(machine.inventory().len(), 1);
        assert_eq!(
            machine.item_for_current_selection(Selection::Wrap),
            Some(Item::new(3.5, 2.0).unwrap())
        );
        assert_eq!(machine.policy(), VendPolicy::Legacy);
    }

    #[test]
    fn missing_resource_surfaces_inventory_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = MachineConfig::default().with_resource_dir(dir.path());

        let err = load_machine(&config).unwrap_err();
        assert_eq!(
            err,
            LoadMachineError::Inventory(InventoryError::InvalidResource(
                "VendingInventory.json".to_string()
            ))
        );
    }

    #[test]
    fn invalid_balance_is_rejected_before_loading() {
        let config = MachineConfig::default().with_starting_balance(-5.0);
        match load_machine(&config).unwrap_err() {
            LoadMachineError::Config(_) => {}
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
