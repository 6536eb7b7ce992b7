//! Unit tests for error handling and recovery
//!
//! Bus failures propagate unmodified through the driver as `Error::Bus`;
//! there is no retry or wrapping layer.

use crate::common::create_mock_driver;
use crate::common::mock_interface::{MockError, MockInterface};
use crate::common::test_utils::MockDelay;
use iim42652::{Error, Iim42652Driver, PowerConfig};

#[test]
fn test_read_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.read_accel();
    assert!(result.is_err(), "Read should fail when error is injected");
}

#[test]
fn test_read_failure_propagates_as_bus_error() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    match driver.read_temperature() {
        Err(Error::Bus(MockError::Communication)) => {}
        other => panic!("Expected Bus(Communication), got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_read();

    let result = driver.read_accel();
    assert!(result.is_err(), "First read should fail");

    interface.set_accel_data(100, 200, 300);

    // Subsequent read should succeed (error was only for one operation)
    let result = driver.read_accel();
    assert!(
        result.is_ok(),
        "Subsequent read should succeed after single failure"
    );
}

#[test]
fn test_write_failure_basic() {
    let (mut driver, interface) = create_mock_driver();

    interface.fail_next_write();

    let result = driver.set_power_config(PowerConfig::default());
    assert!(result.is_err(), "Write should fail when error is injected");
}

#[test]
fn test_construction_fails_on_bus_write_error() {
    let interface = MockInterface::new();
    // The very first access is the bank select write
    interface.fail_next_write();

    let result = Iim42652Driver::new(interface, MockDelay);
    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_construction_fails_on_bus_read_error() {
    let interface = MockInterface::new();
    // The WHO_AM_I read is the first read
    interface.fail_next_read();

    let result = Iim42652Driver::new(interface, MockDelay);
    assert!(matches!(result, Err(Error::Bus(_))));
}

#[test]
fn test_multiple_read_failures() {
    let (mut driver, interface) = create_mock_driver();

    for i in 0..3 {
        interface.fail_next_read();
        let result = driver.read_gyro();
        assert!(
            result.is_err(),
            "Read {} should fail when error is injected",
            i
        );
    }

    // Recovery should still work
    interface.set_gyro_data(100, 200, 300);
    assert!(driver.read_gyro().is_ok());
}
