//! Vending machine aggregate.
//!
//! Owns an inventory and a deposited balance, and exposes the two mutating
//! operations a UI layer drives: `deposit` and `vend`.

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod machine;

pub use bootstrap::{LoadMachineError, load_machine, load_machine_from_env};
pub use config::{ConfigError, DEFAULT_STARTING_BALANCE, MachineConfig, VendPolicy};
pub use error::{VendResult, VendingMachineError};
pub use machine::VendingMachine;

pub use vending_core::{Item, Selection};
pub use vending_inventory::Inventory;
