//! Unit tests for the WHO_AM_I identity check at construction

use crate::common::mock_interface::MockInterface;
use crate::common::test_utils::MockDelay;
use crate::common::{Operation, create_mock_driver};
use iim42652::{Bank, Error, Iim42652Driver, WHO_AM_I_VALUE};

#[test]
fn test_construction_succeeds_with_valid_id() {
    let (mut driver, _interface) = create_mock_driver();

    let who_am_i = driver.read_who_am_i().unwrap();
    assert_eq!(who_am_i, WHO_AM_I_VALUE);
    assert_eq!(who_am_i, 0x6F);
}

#[test]
fn test_construction_fails_with_wrong_id() {
    let interface = MockInterface::new();
    interface.set_who_am_i(0x42);

    let result = Iim42652Driver::new(interface, MockDelay);

    match result {
        Err(Error::InvalidDevice(actual)) => assert_eq!(actual, 0x42),
        _ => panic!("Expected InvalidDevice error"),
    }
}

#[test]
fn test_construction_fails_with_all_zeros() {
    // A missing device typically reads as 0x00
    let interface = MockInterface::new();
    interface.set_who_am_i(0x00);

    let result = Iim42652Driver::new(interface, MockDelay);
    assert!(matches!(result, Err(Error::InvalidDevice(0x00))));
}

#[test]
fn test_identity_failure_stops_before_further_access() {
    let interface = MockInterface::new();
    let interface_clone = interface.clone();
    interface.set_who_am_i(0xEA); // an ICM-20948 on the wrong bus

    let result = Iim42652Driver::new(interface, MockDelay);
    assert!(result.is_err());

    // No register writes besides the initial bank select: in particular no
    // soft reset (DEVICE_CONFIG) and no power-up (PWR_MGMT0)
    for op in interface_clone.operations() {
        if let Operation::WriteRegister { bank, address, .. } = op {
            panic!(
                "Unexpected register write after identity mismatch: bank {:?} address {:#04x}",
                bank, address
            );
        }
    }
    assert_eq!(interface_clone.get_register(Bank::Bank0, 0x4E), 0x00);
}

#[test]
fn test_read_who_am_i_selects_bank0() {
    let (mut driver, interface) = create_mock_driver();

    driver.select_bank(Bank::Bank2).unwrap();
    interface.clear_operations();

    driver.read_who_am_i().unwrap();

    assert_eq!(
        interface.operations()[0],
        Operation::BankSelect {
            from: Bank::Bank2,
            to: Bank::Bank0,
        }
    );
}
