//! Black-box session: load the bundled stock, take money, vend.

use vending_machine::{MachineConfig, Selection, VendPolicy, VendingMachineError, load_machine};

#[test]
fn customer_session_against_bundled_inventory() {
    vending_observability::init();

    let config = MachineConfig::default().with_starting_balance(0.0);
    let mut machine = load_machine(&config).unwrap();

    let soda = machine.item_for_current_selection(Selection::Soda).unwrap();
    let stock = soda.quantity();

    let err = machine.vend(Selection::Soda, 2.0).unwrap_err();
    let VendingMachineError::InsufficientFunds { required } = err else {
        panic!("Expected InsufficientFunds, got {err:?}");
    };
    assert_eq!(required, soda.price() * 2.0);

    machine.deposit(required);
    machine.vend(Selection::Soda, 2.0).unwrap();

    let after = machine.item_for_current_selection(Selection::Soda).unwrap();
    assert_eq!(after.quantity(), stock - 2.0);
    assert_eq!(after.price(), soda.price());
    assert_eq!(machine.amount_deposited(), 0.0);
}

#[test]
fn every_catalog_entry_is_offered() {
    let machine = load_machine(&MachineConfig::default()).unwrap();
    for selection in machine.selection() {
        assert!(machine.item_for_current_selection(*selection).is_some());
    }
}

#[test]
fn legacy_policy_reproduces_uncharged_decrement() {
    let config = MachineConfig::default()
        .with_starting_balance(0.0)
        .with_vend_policy(VendPolicy::Legacy);
    let mut machine = load_machine(&config).unwrap();
    let before = machine.item_for_current_selection(Selection::Chips).unwrap();

    assert!(machine.vend(Selection::Chips, 1.0).is_err());

    let after = machine.item_for_current_selection(Selection::Chips).unwrap();
    assert_eq!(after.quantity(), before.quantity() - 1.0);
    assert_eq!(machine.amount_deposited(), 0.0);
}
