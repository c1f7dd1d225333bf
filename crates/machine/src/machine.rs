use vending_core::{Item, Selection};
use vending_inventory::Inventory;

use crate::config::{MachineConfig, VendPolicy};
use crate::error::{VendResult, VendingMachineError};

/// Aggregate: one machine's stock and the customer's running balance.
///
/// Mutation goes through `&mut self`, so a caller sharing a machine across
/// threads must put its own lock around it.
#[derive(Debug, Clone, PartialEq)]
pub struct VendingMachine {
    inventory: Inventory,
    amount_deposited: f64,
    policy: VendPolicy,
}

impl VendingMachine {
    /// Machine with the default starting balance and the atomic vend policy.
    pub fn new(inventory: Inventory) -> Self {
        Self::with_config(inventory, &MachineConfig::default())
    }

    pub fn with_config(inventory: Inventory, config: &MachineConfig) -> Self {
        Self {
            inventory,
            amount_deposited: config.starting_balance,
            policy: config.vend_policy,
        }
    }

    /// The product catalog offered by every machine.
    pub fn selection(&self) -> &'static [Selection] {
        &Selection::ALL
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn amount_deposited(&self) -> f64 {
        self.amount_deposited
    }

    pub fn policy(&self) -> VendPolicy {
        self.policy
    }

    pub fn item_for_current_selection(&self, selection: Selection) -> Option<Item> {
        self.inventory.get(&selection).copied()
    }

    /// Add funds to the balance. Negative and non-finite amounts are ignored.
    pub fn deposit(&mut self, amount: f64) {
        if !amount.is_finite() || amount < 0.0 {
            tracing::warn!(amount, "ignoring invalid deposit");
            return;
        }
        self.amount_deposited += amount;
        tracing::info!(amount, balance = self.amount_deposited, "deposit accepted");
    }

    /// Dispense `quantity` units of `selection`, charging the balance.
    pub fn vend(&mut self, selection: Selection, quantity: f64) -> VendResult<()> {
        let result = match self.policy {
            VendPolicy::Atomic => self.vend_atomic(selection, quantity),
            VendPolicy::Legacy => self.vend_legacy(selection, quantity),
        };

        match &result {
            Ok(()) => tracing::info!(
                %selection,
                quantity,
                balance = self.amount_deposited,
                "vended"
            ),
            Err(e) => tracing::warn!(%selection, quantity, error = %e, "vend refused"),
        }
        result
    }

    fn vend_atomic(&mut self, selection: Selection, quantity: f64) -> VendResult<()> {
        let item = self
            .inventory
            .get_mut(&selection)
            .ok_or(VendingMachineError::InvalidSelection)?;

        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(VendingMachineError::InvalidQuantity(quantity));
        }
        if !item.in_stock() || item.quantity() < quantity {
            return Err(VendingMachineError::OutOfStock);
        }

        let total_price = item.total_price(quantity);
        if self.amount_deposited < total_price {
            return Err(VendingMachineError::InsufficientFunds {
                required: total_price - self.amount_deposited,
            });
        }

        item.take(quantity);
        self.amount_deposited -= total_price;
        Ok(())
    }

    fn vend_legacy(&mut self, selection: Selection, quantity: f64) -> VendResult<()> {
        let item = self
            .inventory
            .get_mut(&selection)
            .ok_or(VendingMachineError::InvalidSelection)?;

        if !item.in_stock() {
            return Err(VendingMachineError::OutOfStock);
        }

        // Committed before the funds check and kept if that check fails.
        item.take(quantity);

        let total_price = item.total_price(quantity);
        if self.amount_deposited >= total_price {
            self.amount_deposited -= total_price;
            Ok(())
        } else {
            Err(VendingMachineError::InsufficientFunds {
                required: total_price - self.amount_deposited,
            })
        }
    }
}
