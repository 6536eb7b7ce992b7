//! Unit tests for temperature sensor functionality
//!
//! Conversion formula: Temp_degC = (TEMP_DATA / 132.48) + 25

use crate::common::create_mock_driver;
use crate::common::test_utils::assert_float_eq;

#[test]
fn test_temperature_zero_raw_is_offset() {
    let (mut driver, interface) = create_mock_driver();

    // Raw value 0 reads exactly the 25 °C offset
    interface.set_temperature_data(0);
    let temp = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp, 25.0, 1e-4);
}

#[test]
fn test_temperature_conversion() {
    let (mut driver, interface) = create_mock_driver();

    // 13248 / 132.48 = 100 -> 125 °C
    interface.set_temperature_data(13248);
    let temp = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp, 125.0, 0.01);

    // -1325 / 132.48 ≈ -10 -> 15 °C
    interface.set_temperature_data(-1325);
    let temp = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp, 15.0, 0.01);
}

#[test]
fn test_temperature_operating_range() {
    let (mut driver, interface) = create_mock_driver();

    // Minimum operating temperature (-40 °C): raw = (-40 - 25) * 132.48 ≈ -8611
    interface.set_temperature_data(-8611);
    let temp_min = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp_min, -40.0, 0.01);

    // Maximum operating temperature (105 °C): raw = (105 - 25) * 132.48 ≈ 10598
    interface.set_temperature_data(10598);
    let temp_max = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp_max, 105.0, 0.01);
}

#[test]
fn test_temperature_read_raw() {
    let (mut driver, interface) = create_mock_driver();

    let expected_raw: i16 = 5000;
    interface.set_temperature_data(expected_raw);

    let raw = driver.read_temperature().unwrap();
    assert_eq!(raw, expected_raw, "Raw temperature should match");
}

#[test]
fn test_temperature_sequential_reads() {
    let (mut driver, interface) = create_mock_driver();

    for raw in [-8000i16, -100, 0, 100, 8000] {
        interface.set_temperature_data(raw);
        let temp = driver.read_temperature_celsius().unwrap();
        assert_float_eq(temp, f32::from(raw) / 132.48 + 25.0, 1e-3);
    }
}
