//! Unit tests for the soft reset sequence

use crate::common::{Operation, create_mock_driver};
use crate::common::test_utils::create_mock_driver_with_delay_log;
use iim42652::Bank;

/// DEVICE_CONFIG register address (Bank 0)
const DEVICE_CONFIG: u8 = 0x11;

#[test]
fn test_reset_selects_bank0_before_reset_bit() {
    let (mut driver, interface) = create_mock_driver();

    // Park the device in another bank so the select is observable
    driver.select_bank(Bank::Bank3).unwrap();
    interface.clear_operations();

    driver.reset().unwrap();

    let ops = interface.operations();
    let first_select = ops
        .iter()
        .position(|op| matches!(op, Operation::BankSelect { to: Bank::Bank0, .. }))
        .expect("reset must select bank 0");
    let first_reset_write = ops
        .iter()
        .position(|op| {
            matches!(op, Operation::WriteRegister { address, value, .. }
                if *address == DEVICE_CONFIG && (*value & 0x01) != 0)
        })
        .expect("reset must set the soft reset bit");

    assert!(
        first_select < first_reset_write,
        "Bank 0 must be selected before the reset bit is touched"
    );
}

#[test]
fn test_reset_leaves_bit_clear() {
    let (mut driver, interface) = create_mock_driver();

    driver.reset().unwrap();

    assert_eq!(
        interface.get_register(Bank::Bank0, DEVICE_CONFIG) & 0x01,
        0,
        "Reset must not return while the reset bit is still set"
    );
}

#[test]
fn test_reset_polls_until_bit_clears() {
    let (mut driver, interface) = create_mock_driver();

    // Keep the bit set for three polls before the device clears it
    interface.set_reset_duration(3);
    interface.clear_operations();

    driver.reset().unwrap();

    // One read from the read-modify-write plus four polls (three observing
    // the bit set, the final one observing it cleared)
    assert_eq!(interface.read_count(Bank::Bank0, DEVICE_CONFIG), 5);
    assert_eq!(interface.get_register(Bank::Bank0, DEVICE_CONFIG) & 0x01, 0);
}

#[test]
fn test_reset_completes_immediately_when_device_is_fast() {
    let (mut driver, interface) = create_mock_driver();

    interface.clear_operations();
    driver.reset().unwrap();

    // Modify-read plus a single poll observing the cleared bit
    assert_eq!(interface.read_count(Bank::Bank0, DEVICE_CONFIG), 2);
}

#[test]
fn test_reset_settle_timing() {
    let (mut driver, _interface, delays) = create_mock_driver_with_delay_log();

    delays.clear();
    driver.reset().unwrap();

    let calls = delays.calls_ms();
    // 5 ms before setting the bit, 5 ms after, 5 ms between any further polls
    assert!(calls.len() >= 2);
    assert!(calls.iter().all(|&ms| ms == 5));
}

#[test]
fn test_reset_sleeps_between_polls() {
    let (mut driver, interface, delays) = create_mock_driver_with_delay_log();

    interface.set_reset_duration(3);
    delays.clear();

    driver.reset().unwrap();

    // Two settle waits around the bit write plus one sleep per unsuccessful poll
    assert_eq!(delays.calls_ms(), vec![5, 5, 5, 5, 5]);
}
