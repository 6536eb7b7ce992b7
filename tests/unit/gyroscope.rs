//! Unit tests for gyroscope reads and scaling
//!
//! Scaled readings assume the ±2000 °/s power-on full scale: 16.4 LSB/(°/s).

use crate::common::create_mock_driver;
use crate::common::test_utils::assert_float_eq;

#[test]
fn test_gyro_raw_read() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(10, -20, 30);

    let data = driver.read_gyro().unwrap();
    assert_eq!(data.x, 10);
    assert_eq!(data.y, -20);
    assert_eq!(data.z, 30);
}

#[test]
fn test_gyro_ten_dps_per_164_lsb() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(164, 0, -164);

    let gyro = driver.read_gyro_dps().unwrap();
    assert_float_eq(gyro.x, 10.0, 0.01);
    assert_float_eq(gyro.y, 0.0, 1e-4);
    assert_float_eq(gyro.z, -10.0, 0.01);
}

#[test]
fn test_gyro_scaling() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(1640, -3280, 8200);

    let gyro = driver.read_gyro_dps().unwrap();
    assert_float_eq(gyro.x, 100.0, 0.01);
    assert_float_eq(gyro.y, -200.0, 0.01);
    assert_float_eq(gyro.z, 500.0, 0.01);
}

#[test]
fn test_gyro_full_range() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_gyro_data(i16::MAX, i16::MIN, 0);

    let gyro = driver.read_gyro_dps().unwrap();
    // 32767 / 16.4 ≈ 1998 °/s
    assert_float_eq(gyro.x, 1998.0, 0.1);
    assert_float_eq(gyro.y, -1998.05, 0.1);
    assert_float_eq(gyro.z, 0.0, 1e-4);
}
