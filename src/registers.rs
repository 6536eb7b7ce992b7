//! Register definitions for the IIM-42652
//!
//! This module contains the register definitions for all banks of the IIM-42652.
//! The IIM-42652 uses a bank-switching architecture where registers at addresses
//! 0x00-0x7F have different meanings depending on which bank is selected via
//! `REG_BANK_SEL` (0x76). `REG_BANK_SEL` itself decodes identically in every
//! bank, so it can always be written regardless of the selected bank.
//!
//! ## Bank Architecture
//! - **Bank 0**: Primary configuration and sensor data
//! - **Bank 1**: Gyroscope static configuration and self-test data
//! - **Bank 2**: Accelerometer static configuration and self-test data
//! - **Bank 3**: Pad pull-up/pull-down configuration
//! - **Bank 4**: FDR, APEX, interrupt routing and user offset registers
//!
//! All registers that share addresses across banks use `ALLOW_ADDRESS_OVERLAP = true`.

device_driver::create_device!(
    device_name: Iim42652,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = BE;
        }

        // ==================== BANK 0 REGISTERS ====================
        // Primary configuration and sensor data

        /// DEVICE_CONFIG - Device Configuration (Bank 0, 0x11)
        register DeviceConfig {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Software reset. Self-clears when the reset completes
            soft_reset_config: bool = 0,
            reserved_3_1: uint = 1..4,
            /// SPI mode selection (0 = mode 0/3, 1 = mode 1/2)
            spi_mode: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// DRIVE_CONFIG - Pad Drive Strength (Bank 0, 0x13)
        register DriveConfig {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// SPI slew rate setting
            spi_slew_rate: uint = 0..3,
            /// I2C slew rate setting
            i2c_slew_rate: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// INT_CONFIG - Interrupt Pin Configuration (Bank 0, 0x14)
        register IntConfig {
            const ADDRESS = 0x14;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// INT1 polarity (0 = active low, 1 = active high)
            int1_polarity: bool = 0,
            /// INT1 drive circuit (0 = open drain, 1 = push-pull)
            int1_drive_circuit: bool = 1,
            /// INT1 mode (0 = pulsed, 1 = latched)
            int1_mode: bool = 2,
            /// INT2 polarity
            int2_polarity: bool = 3,
            /// INT2 drive circuit
            int2_drive_circuit: bool = 4,
            /// INT2 mode
            int2_mode: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// FIFO_CONFIG - FIFO Mode (Bank 0, 0x16)
        register FifoConfig {
            const ADDRESS = 0x16;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_5_0: uint = 0..6,
            /// FIFO mode (0 = bypass, 1 = stream, 2/3 = stop-on-full)
            fifo_mode: uint = 6..8,
        },

        /// TEMP_DATA1 - Temperature Data High Byte (Bank 0, 0x1D)
        register TempData1 {
            const ADDRESS = 0x1D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the 16-bit temperature value
            temp_data_high: uint = 0..8,
        },

        /// TEMP_DATA0 - Temperature Data Low Byte (Bank 0, 0x1E)
        register TempData0 {
            const ADDRESS = 0x1E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the 16-bit temperature value
            temp_data_low: uint = 0..8,
        },

        /// ACCEL_DATA_X1 - Accelerometer X-Axis High Byte (Bank 0, 0x1F)
        ///
        /// First register of the 6-byte accelerometer data block
        /// (X1, X0, Y1, Y0, Z1, Z0), big-endian per axis.
        register AccelDataX1 {
            const ADDRESS = 0x1F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the X-axis acceleration
            accel_data_x_high: uint = 0..8,
        },

        /// ACCEL_DATA_X0 - Accelerometer X-Axis Low Byte (Bank 0, 0x20)
        register AccelDataX0 {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the X-axis acceleration
            accel_data_x_low: uint = 0..8,
        },

        /// ACCEL_DATA_Y1 - Accelerometer Y-Axis High Byte (Bank 0, 0x21)
        register AccelDataY1 {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the Y-axis acceleration
            accel_data_y_high: uint = 0..8,
        },

        /// ACCEL_DATA_Y0 - Accelerometer Y-Axis Low Byte (Bank 0, 0x22)
        register AccelDataY0 {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the Y-axis acceleration
            accel_data_y_low: uint = 0..8,
        },

        /// ACCEL_DATA_Z1 - Accelerometer Z-Axis High Byte (Bank 0, 0x23)
        register AccelDataZ1 {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the Z-axis acceleration
            accel_data_z_high: uint = 0..8,
        },

        /// ACCEL_DATA_Z0 - Accelerometer Z-Axis Low Byte (Bank 0, 0x24)
        register AccelDataZ0 {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the Z-axis acceleration
            accel_data_z_low: uint = 0..8,
        },

        /// GYRO_DATA_X1 - Gyroscope X-Axis High Byte (Bank 0, 0x25)
        ///
        /// First register of the 6-byte gyroscope data block
        /// (X1, X0, Y1, Y0, Z1, Z0), big-endian per axis.
        register GyroDataX1 {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the X-axis angular rate
            gyro_data_x_high: uint = 0..8,
        },

        /// GYRO_DATA_X0 - Gyroscope X-Axis Low Byte (Bank 0, 0x26)
        register GyroDataX0 {
            const ADDRESS = 0x26;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the X-axis angular rate
            gyro_data_x_low: uint = 0..8,
        },

        /// GYRO_DATA_Y1 - Gyroscope Y-Axis High Byte (Bank 0, 0x27)
        register GyroDataY1 {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the Y-axis angular rate
            gyro_data_y_high: uint = 0..8,
        },

        /// GYRO_DATA_Y0 - Gyroscope Y-Axis Low Byte (Bank 0, 0x28)
        register GyroDataY0 {
            const ADDRESS = 0x28;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the Y-axis angular rate
            gyro_data_y_low: uint = 0..8,
        },

        /// GYRO_DATA_Z1 - Gyroscope Z-Axis High Byte (Bank 0, 0x29)
        register GyroDataZ1 {
            const ADDRESS = 0x29;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the Z-axis angular rate
            gyro_data_z_high: uint = 0..8,
        },

        /// GYRO_DATA_Z0 - Gyroscope Z-Axis Low Byte (Bank 0, 0x2A)
        register GyroDataZ0 {
            const ADDRESS = 0x2A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the Z-axis angular rate
            gyro_data_z_low: uint = 0..8,
        },

        /// TMST_FSYNCH - FSYNC Timestamp High Byte (Bank 0, 0x2B)
        register TmstFsynch {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the FSYNC timestamp
            tmst_fsync_data_high: uint = 0..8,
        },

        /// TMST_FSYNCL - FSYNC Timestamp Low Byte (Bank 0, 0x2C)
        register TmstFsyncl {
            const ADDRESS = 0x2C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the FSYNC timestamp
            tmst_fsync_data_low: uint = 0..8,
        },

        /// INT_STATUS - Interrupt Status (Bank 0, 0x2D)
        ///
        /// All bits clear on read.
        register IntStatus {
            const ADDRESS = 0x2D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// AGC ready interrupt
            agc_rdy_int: bool = 0,
            /// FIFO full interrupt
            fifo_full_int: bool = 1,
            /// FIFO watermark interrupt
            fifo_ths_int: bool = 2,
            /// Data ready interrupt
            data_rdy_int: bool = 3,
            /// Reset complete interrupt (set once after each soft reset)
            reset_done_int: bool = 4,
            /// PLL ready interrupt
            pll_rdy_int: bool = 5,
            /// UI FSYNC interrupt
            ui_fsync_int: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// FIFO_COUNTH - FIFO Count High Byte (Bank 0, 0x2E)
        register FifoCounth {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the FIFO byte/record count
            fifo_count_high: uint = 0..8,
        },

        /// FIFO_COUNTL - FIFO Count Low Byte (Bank 0, 0x2F)
        register FifoCountl {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the FIFO byte/record count
            fifo_count_low: uint = 0..8,
        },

        /// FIFO_DATA - FIFO Read Port (Bank 0, 0x30)
        register FifoData {
            const ADDRESS = 0x30;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// FIFO data port
            fifo_data: uint = 0..8,
        },

        /// APEX_DATA0 - Pedometer Step Count Low Byte (Bank 0, 0x31)
        register ApexData0 {
            const ADDRESS = 0x31;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the pedometer step count
            step_cnt_low: uint = 0..8,
        },

        /// APEX_DATA1 - Pedometer Step Count High Byte (Bank 0, 0x32)
        register ApexData1 {
            const ADDRESS = 0x32;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the pedometer step count
            step_cnt_high: uint = 0..8,
        },

        /// APEX_DATA2 - Pedometer Step Cadence (Bank 0, 0x33)
        register ApexData2 {
            const ADDRESS = 0x33;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Walk cadence in number of samples, format u6.2
            step_cadence: uint = 0..8,
        },

        /// APEX_DATA3 - Activity Classification (Bank 0, 0x34)
        register ApexData3 {
            const ADDRESS = 0x34;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Detected activity (0 = unknown, 1 = walk, 2 = run)
            activity_class: uint = 0..2,
            /// DMP is idle
            dmp_idle: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// APEX_DATA4 - Tap Detection Report (Bank 0, 0x35)
        register ApexData4 {
            const ADDRESS = 0x35;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Polarity of the tap pulse
            tap_dir: bool = 0,
            /// Axis of the detected tap
            tap_axis: uint = 1..3,
            /// Number of taps detected (1 = single, 2 = double)
            tap_num: uint = 3..5,
            reserved_7_5: uint = 5..8,
        },

        /// APEX_DATA5 - Double Tap Timing (Bank 0, 0x36)
        register ApexData5 {
            const ADDRESS = 0x36;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Time between the two taps of a double tap
            double_tap_timing: uint = 0..6,
            reserved_7_6: uint = 6..8,
        },

        /// INT_STATUS2 - Interrupt Status 2 (Bank 0, 0x37)
        register IntStatus2 {
            const ADDRESS = 0x37;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Wake-on-motion X-axis interrupt
            wom_x_int: bool = 0,
            /// Wake-on-motion Y-axis interrupt
            wom_y_int: bool = 1,
            /// Wake-on-motion Z-axis interrupt
            wom_z_int: bool = 2,
            /// Significant motion detection interrupt
            smd_int: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// INT_STATUS3 - Interrupt Status 3 (Bank 0, 0x38)
        register IntStatus3 {
            const ADDRESS = 0x38;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Tap detection interrupt
            tap_det_int: bool = 0,
            /// Sleep event interrupt
            sleep_int: bool = 1,
            /// Wake event interrupt
            wake_int: bool = 2,
            /// Tilt detection interrupt
            tilt_det_int: bool = 3,
            /// Step count overflow interrupt
            step_cnt_ovf_int: bool = 4,
            /// Step detection interrupt
            step_det_int: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// SIGNAL_PATH_RESET - Signal Path Reset (Bank 0, 0x4B)
        register SignalPathReset {
            const ADDRESS = 0x4B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_0: uint = 0..1,
            /// Flush the FIFO
            fifo_flush: bool = 1,
            /// Strobe the timestamp counter into TMSTVAL
            tmst_strobe: bool = 2,
            /// Abort and reset the ODR computation
            abort_and_reset: bool = 3,
            reserved_4: uint = 4..5,
            /// Enable DMP memory reset
            dmp_mem_reset_en: bool = 5,
            /// Start DMP initialization
            dmp_init_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INTF_CONFIG0 - Interface Configuration 0 (Bank 0, 0x4C)
        register IntfConfig0 {
            const ADDRESS = 0x4C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Interface disable (0b10 = disable SPI, 0b11 = disable I2C)
            ui_sifs_cfg: uint = 0..2,
            reserved_3_2: uint = 2..4,
            /// Sensor data endianness (0 = little, 1 = big)
            sensor_data_endian: bool = 4,
            /// FIFO count endianness
            fifo_count_endian: bool = 5,
            /// FIFO count unit (0 = bytes, 1 = records)
            fifo_count_rec: bool = 6,
            /// Hold last valid data when FIFO is empty
            fifo_hold_last_data_en: bool = 7,
        },

        /// INTF_CONFIG1 - Interface Configuration 1 (Bank 0, 0x4D)
        register IntfConfig1 {
            const ADDRESS = 0x4D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Clock source select (0 = internal RC, 1 = PLL when available)
            clksel: uint = 0..2,
            /// RTC clock input is required
            rtc_mode: bool = 2,
            /// Accelerometer low-power clock select
            accel_lp_clk_sel: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// PWR_MGMT0 - Power Management 0 (Bank 0, 0x4E)
        ///
        /// 200 us must elapse after any write to this register before
        /// another register write is issued.
        register PwrMgmt0 {
            const ADDRESS = 0x4E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer mode (0 = off, 2 = low power, 3 = low noise)
            accel_mode: uint = 0..2,
            /// Gyroscope mode (0 = off, 1 = standby, 3 = low noise)
            gyro_mode: uint = 2..4,
            /// Keep the RC oscillator powered while sensors are off
            idle: bool = 4,
            /// Temperature sensor disable
            temp_dis: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG0 - Gyroscope Configuration 0 (Bank 0, 0x4F)
        register GyroConfig0 {
            const ADDRESS = 0x4F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope output data rate
            gyro_odr: uint = 0..4,
            reserved_4: uint = 4..5,
            /// Gyroscope full-scale select (0 = ±2000 dps, power-on default)
            gyro_fs_sel: uint = 5..8,
        },

        /// ACCEL_CONFIG0 - Accelerometer Configuration 0 (Bank 0, 0x50)
        register AccelConfig0 {
            const ADDRESS = 0x50;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer output data rate
            accel_odr: uint = 0..4,
            reserved_4: uint = 4..5,
            /// Accelerometer full-scale select (0 = ±16 g, power-on default)
            accel_fs_sel: uint = 5..8,
        },

        /// GYRO_CONFIG1 - Gyroscope Configuration 1 (Bank 0, 0x51)
        register GyroConfig1 {
            const ADDRESS = 0x51;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope DEC2_M2 filter order
            gyro_dec2_m2_ord: uint = 0..2,
            /// Gyroscope UI filter order
            gyro_ui_filt_ord: uint = 2..4,
            reserved_4: uint = 4..5,
            /// Temperature sensor filter bandwidth
            temp_filt_bw: uint = 5..8,
        },

        /// GYRO_ACCEL_CONFIG0 - UI Filter Bandwidths (Bank 0, 0x52)
        register GyroAccelConfig0 {
            const ADDRESS = 0x52;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope UI filter bandwidth
            gyro_ui_filt_bw: uint = 0..4,
            /// Accelerometer UI filter bandwidth
            accel_ui_filt_bw: uint = 4..8,
        },

        /// ACCEL_CONFIG1 - Accelerometer Configuration 1 (Bank 0, 0x53)
        register AccelConfig1 {
            const ADDRESS = 0x53;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_0: uint = 0..1,
            /// Accelerometer DEC2_M2 filter order
            accel_dec2_m2_ord: uint = 1..3,
            /// Accelerometer UI filter order
            accel_ui_filt_ord: uint = 3..5,
            reserved_7_5: uint = 5..8,
        },

        /// TMST_CONFIG - Timestamp Configuration (Bank 0, 0x54)
        register TmstConfig {
            const ADDRESS = 0x54;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Timestamp register enable
            tmst_en: bool = 0,
            /// FSYNC timestamp enable
            tmst_fsync_en: bool = 1,
            /// Report the timestamp delta instead of the absolute value
            tmst_delta_en: bool = 2,
            /// Timestamp resolution (0 = 1 us, 1 = 16 us / RTC)
            tmst_res: bool = 3,
            /// Make the timestamp readable through TMSTVAL
            tmst_to_regs_en: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// APEX_CONFIG0 - APEX Feature Enables (Bank 0, 0x56)
        register ApexConfig0 {
            const ADDRESS = 0x56;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// DMP output data rate (0 = 25 Hz, 2 = 50 Hz)
            dmp_odr: uint = 0..2,
            reserved_2: uint = 2..3,
            /// Raise-to-wake enable
            r2w_en: bool = 3,
            /// Tilt detection enable
            tilt_enable: bool = 4,
            /// Pedometer enable
            ped_enable: bool = 5,
            /// Tap detection enable
            tap_enable: bool = 6,
            /// DMP power save mode
            dmp_power_save: bool = 7,
        },

        /// SMD_CONFIG - Significant Motion Detection (Bank 0, 0x57)
        register SmdConfig {
            const ADDRESS = 0x57;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// SMD mode (0 = off, 1 = WoM, 2 = short, 3 = long)
            smd_mode: uint = 0..2,
            reserved_2: uint = 2..3,
            /// WoM mode (0 = compare to initial sample, 1 = to previous)
            wom_mode: bool = 3,
            /// WoM interrupt mode (0 = OR of axes, 1 = AND of axes)
            wom_int_mode: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// FIFO_CONFIG1 - FIFO Content Configuration (Bank 0, 0x5F)
        register FifoConfig1 {
            const ADDRESS = 0x5F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Write accelerometer data to the FIFO
            fifo_accel_en: bool = 0,
            /// Write gyroscope data to the FIFO
            fifo_gyro_en: bool = 1,
            /// Write temperature data to the FIFO
            fifo_temp_en: bool = 2,
            /// Write FSYNC timestamps to the FIFO
            fifo_tmst_fsync_en: bool = 3,
            /// Extended 20-bit resolution packets
            fifo_hires_en: bool = 4,
            /// Trigger the watermark interrupt while count >= threshold
            fifo_wm_gt_th: bool = 5,
            /// Allow partial FIFO reads to resume
            fifo_resume_partial_rd: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// FIFO_CONFIG2 - FIFO Watermark Low Byte (Bank 0, 0x60)
        register FifoConfig2 {
            const ADDRESS = 0x60;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the FIFO watermark
            fifo_wm_low: uint = 0..8,
        },

        /// FIFO_CONFIG3 - FIFO Watermark High Byte (Bank 0, 0x61)
        register FifoConfig3 {
            const ADDRESS = 0x61;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper bits of the FIFO watermark
            fifo_wm_high: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// FSYNC_CONFIG - FSYNC Configuration (Bank 0, 0x62)
        register FsyncConfig {
            const ADDRESS = 0x62;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// FSYNC pin polarity
            fsync_polarity: bool = 0,
            /// Clear the UI FSYNC flag on the selected event
            fsync_ui_flag_clear_sel: bool = 1,
            reserved_3_2: uint = 2..4,
            /// Sensor register that tags the FSYNC event
            fsync_ui_sel: uint = 4..7,
            reserved_7: uint = 7..8,
        },

        /// INT_CONFIG0 - Interrupt Clear Configuration (Bank 0, 0x63)
        register IntConfig0 {
            const ADDRESS = 0x63;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// FIFO full interrupt clear option
            fifo_full_int_clear: uint = 0..2,
            /// FIFO watermark interrupt clear option
            fifo_ths_int_clear: uint = 2..4,
            /// Data ready interrupt clear option
            ui_drdy_int_clear: uint = 4..6,
            reserved_7_6: uint = 6..8,
        },

        /// INT_CONFIG1 - Interrupt Timing Configuration (Bank 0, 0x64)
        register IntConfig1 {
            const ADDRESS = 0x64;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_3_0: uint = 0..4,
            /// Interrupt async reset (must be cleared for ODR >= 4 kHz)
            int_async_reset: bool = 4,
            /// Disable interrupt de-assertion duration
            int_tdeassert_disable: bool = 5,
            /// Interrupt pulse duration (0 = 100 us, 1 = 8 us)
            int_tpulse_duration: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT_SOURCE0 - INT1 Routing (Bank 0, 0x65)
        register IntSource0 {
            const ADDRESS = 0x65;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route AGC ready to INT1
            ui_agc_rdy_int1_en: bool = 0,
            /// Route FIFO full to INT1
            fifo_full_int1_en: bool = 1,
            /// Route FIFO watermark to INT1
            fifo_ths_int1_en: bool = 2,
            /// Route data ready to INT1
            ui_drdy_int1_en: bool = 3,
            /// Route reset done to INT1
            reset_done_int1_en: bool = 4,
            /// Route PLL ready to INT1
            pll_rdy_int1_en: bool = 5,
            /// Route UI FSYNC to INT1
            ui_fsync_int1_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT_SOURCE1 - INT1 Routing (Bank 0, 0x66)
        register IntSource1 {
            const ADDRESS = 0x66;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route WoM X to INT1
            wom_x_int1_en: bool = 0,
            /// Route WoM Y to INT1
            wom_y_int1_en: bool = 1,
            /// Route WoM Z to INT1
            wom_z_int1_en: bool = 2,
            /// Route SMD to INT1
            smd_int1_en: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// INT_SOURCE3 - INT2 Routing (Bank 0, 0x68)
        register IntSource3 {
            const ADDRESS = 0x68;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route AGC ready to INT2
            ui_agc_rdy_int2_en: bool = 0,
            /// Route FIFO full to INT2
            fifo_full_int2_en: bool = 1,
            /// Route FIFO watermark to INT2
            fifo_ths_int2_en: bool = 2,
            /// Route data ready to INT2
            ui_drdy_int2_en: bool = 3,
            /// Route reset done to INT2
            reset_done_int2_en: bool = 4,
            /// Route PLL ready to INT2
            pll_rdy_int2_en: bool = 5,
            /// Route UI FSYNC to INT2
            ui_fsync_int2_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT_SOURCE4 - INT2 Routing (Bank 0, 0x69)
        register IntSource4 {
            const ADDRESS = 0x69;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route WoM X to INT2
            wom_x_int2_en: bool = 0,
            /// Route WoM Y to INT2
            wom_y_int2_en: bool = 1,
            /// Route WoM Z to INT2
            wom_z_int2_en: bool = 2,
            /// Route SMD to INT2
            smd_int2_en: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// FIFO_LOST_PKT0 - Lost FIFO Packets Low Byte (Bank 0, 0x6C)
        register FifoLostPkt0 {
            const ADDRESS = 0x6C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Lower byte of the lost packet count
            fifo_lost_pkt_cnt_low: uint = 0..8,
        },

        /// FIFO_LOST_PKT1 - Lost FIFO Packets High Byte (Bank 0, 0x6D)
        register FifoLostPkt1 {
            const ADDRESS = 0x6D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Upper byte of the lost packet count
            fifo_lost_pkt_cnt_high: uint = 0..8,
        },

        /// SELF_TEST_CONFIG - Self-Test Enables (Bank 0, 0x70)
        register SelfTestConfig {
            const ADDRESS = 0x70;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Enable gyroscope X-axis self-test
            en_gx_st: bool = 0,
            /// Enable gyroscope Y-axis self-test
            en_gy_st: bool = 1,
            /// Enable gyroscope Z-axis self-test
            en_gz_st: bool = 2,
            /// Enable accelerometer X-axis self-test
            en_ax_st: bool = 3,
            /// Enable accelerometer Y-axis self-test
            en_ay_st: bool = 4,
            /// Enable accelerometer Z-axis self-test
            en_az_st: bool = 5,
            /// Accelerometer self-test power
            accel_st_power: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// WHO_AM_I - Device ID Register (Bank 0, 0x75)
        /// Expected value: 0x6F
        register WhoAmI {
            const ADDRESS = 0x75;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Device ID (should read 0x6F)
            who_am_i: uint = 0..8,
        },

        /// REG_BANK_SEL - Register Bank Select (Bank 0, 0x76)
        ///
        /// Decodes identically in every bank, so it is always writable
        /// regardless of the currently selected bank.
        register RegBankSel {
            const ADDRESS = 0x76;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Bank selection (0-4)
            bank_sel: uint = 0..3,
            reserved_7_3: uint = 3..8,
        },

        // ==================== BANK 1 REGISTERS ====================
        // Gyroscope static configuration and self-test data

        /// SENSOR_CONFIG0 - Per-Axis Sensor Disable (Bank 1, 0x03)
        register Bank1SensorConfig0 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Disable gyroscope X-axis
            xg_disable: bool = 0,
            /// Disable gyroscope Y-axis
            yg_disable: bool = 1,
            /// Disable gyroscope Z-axis
            zg_disable: bool = 2,
            /// Disable accelerometer X-axis
            xa_disable: bool = 3,
            /// Disable accelerometer Y-axis
            ya_disable: bool = 4,
            /// Disable accelerometer Z-axis
            za_disable: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG_STATIC2 - Gyro Filter Enables (Bank 1, 0x0B)
        register Bank1GyroConfigStatic2 {
            const ADDRESS = 0x0B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Disable the gyroscope notch filter
            gyro_nf_dis: bool = 0,
            /// Disable the gyroscope anti-alias filter
            gyro_aaf_dis: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// GYRO_CONFIG_STATIC3 - Gyro AAF Bandwidth (Bank 1, 0x0C)
        register Bank1GyroConfigStatic3 {
            const ADDRESS = 0x0C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-alias filter delta
            gyro_aaf_delt: uint = 0..6,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG_STATIC4 - Gyro AAF Delta Squared Low (Bank 1, 0x0D)
        register Bank1GyroConfigStatic4 {
            const ADDRESS = 0x0D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-alias filter delta squared, lower byte
            gyro_aaf_deltsqr_low: uint = 0..8,
        },

        /// GYRO_CONFIG_STATIC5 - Gyro AAF Delta Squared High (Bank 1, 0x0E)
        register Bank1GyroConfigStatic5 {
            const ADDRESS = 0x0E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-alias filter delta squared, upper bits
            gyro_aaf_deltsqr_high: uint = 0..4,
            /// Anti-alias filter bitshift
            gyro_aaf_bitshift: uint = 4..8,
        },

        /// GYRO_CONFIG_STATIC6 - Gyro X Notch Frequency (Bank 1, 0x0F)
        register Bank1GyroConfigStatic6 {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// X-axis notch filter frequency, lower byte
            gyro_x_nf_coswz_low: uint = 0..8,
        },

        /// GYRO_CONFIG_STATIC7 - Gyro Y Notch Frequency (Bank 1, 0x10)
        register Bank1GyroConfigStatic7 {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Y-axis notch filter frequency, lower byte
            gyro_y_nf_coswz_low: uint = 0..8,
        },

        /// GYRO_CONFIG_STATIC8 - Gyro Z Notch Frequency (Bank 1, 0x11)
        register Bank1GyroConfigStatic8 {
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Z-axis notch filter frequency, lower byte
            gyro_z_nf_coswz_low: uint = 0..8,
        },

        /// GYRO_CONFIG_STATIC9 - Gyro Notch Frequency High Bits (Bank 1, 0x12)
        register Bank1GyroConfigStatic9 {
            const ADDRESS = 0x12;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// X-axis notch filter frequency, bit 8
            gyro_x_nf_coswz_high: bool = 0,
            /// Y-axis notch filter frequency, bit 8
            gyro_y_nf_coswz_high: bool = 1,
            /// Z-axis notch filter frequency, bit 8
            gyro_z_nf_coswz_high: bool = 2,
            /// X-axis notch filter frequency select
            gyro_x_nf_coswz_sel: bool = 3,
            /// Y-axis notch filter frequency select
            gyro_y_nf_coswz_sel: bool = 4,
            /// Z-axis notch filter frequency select
            gyro_z_nf_coswz_sel: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// GYRO_CONFIG_STATIC10 - Gyro Notch Bandwidth (Bank 1, 0x13)
        register Bank1GyroConfigStatic10 {
            const ADDRESS = 0x13;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_3_0: uint = 0..4,
            /// Notch filter bandwidth
            gyro_nf_bw_sel: uint = 4..7,
            reserved_7: uint = 7..8,
        },

        /// XG_ST_DATA - Gyro X Self-Test Data (Bank 1, 0x5F)
        register Bank1XgStData {
            const ADDRESS = 0x5F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the gyroscope X-axis
            xg_st_data: uint = 0..8,
        },

        /// YG_ST_DATA - Gyro Y Self-Test Data (Bank 1, 0x60)
        register Bank1YgStData {
            const ADDRESS = 0x60;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the gyroscope Y-axis
            yg_st_data: uint = 0..8,
        },

        /// ZG_ST_DATA - Gyro Z Self-Test Data (Bank 1, 0x61)
        register Bank1ZgStData {
            const ADDRESS = 0x61;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the gyroscope Z-axis
            zg_st_data: uint = 0..8,
        },

        /// TMSTVAL0 - Latched Timestamp Byte 0 (Bank 1, 0x62)
        register Bank1Tmstval0 {
            const ADDRESS = 0x62;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Timestamp bits 7:0
            tmst_value_0: uint = 0..8,
        },

        /// TMSTVAL1 - Latched Timestamp Byte 1 (Bank 1, 0x63)
        register Bank1Tmstval1 {
            const ADDRESS = 0x63;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Timestamp bits 15:8
            tmst_value_1: uint = 0..8,
        },

        /// TMSTVAL2 - Latched Timestamp Byte 2 (Bank 1, 0x64)
        register Bank1Tmstval2 {
            const ADDRESS = 0x64;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Timestamp bits 19:16
            tmst_value_2: uint = 0..4,
            reserved_7_4: uint = 4..8,
        },

        /// INTF_CONFIG4 - Interface Configuration 4 (Bank 1, 0x7A)
        register Bank1IntfConfig4 {
            const ADDRESS = 0x7A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_0: uint = 0..1,
            /// SPI wire count (0 = 3-wire, 1 = 4-wire)
            spi_ap_4wire: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// INTF_CONFIG5 - Pin 9 Function (Bank 1, 0x7B)
        register Bank1IntfConfig5 {
            const ADDRESS = 0x7B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_0: uint = 0..1,
            /// Pin 9 function (0 = INT2, 1 = FSYNC, 2 = CLKIN)
            pin9_function: uint = 1..3,
            reserved_7_3: uint = 3..8,
        },

        /// INTF_CONFIG6 - I3C Configuration (Bank 1, 0x7C)
        register Bank1IntfConfig6 {
            const ADDRESS = 0x7C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// I3C SDR mode enable
            i3c_sdr_en: bool = 0,
            /// I3C DDR mode enable
            i3c_ddr_en: bool = 1,
            /// In-band interrupt enable
            i3c_ibi_en: bool = 2,
            /// In-band interrupt bus-available match enable
            i3c_ibi_byte_en: bool = 3,
            /// I3C timeout enable
            i3c_en: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        // ==================== BANK 2 REGISTERS ====================
        // Accelerometer static configuration and self-test data

        /// ACCEL_CONFIG_STATIC2 - Accel AAF Enable (Bank 2, 0x03)
        register Bank2AccelConfigStatic2 {
            const ADDRESS = 0x03;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Disable the accelerometer anti-alias filter
            accel_aaf_dis: bool = 0,
            /// Anti-alias filter delta
            accel_aaf_delt: uint = 1..7,
            reserved_7: uint = 7..8,
        },

        /// ACCEL_CONFIG_STATIC3 - Accel AAF Delta Squared Low (Bank 2, 0x04)
        register Bank2AccelConfigStatic3 {
            const ADDRESS = 0x04;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-alias filter delta squared, lower byte
            accel_aaf_deltsqr_low: uint = 0..8,
        },

        /// ACCEL_CONFIG_STATIC4 - Accel AAF Delta Squared High (Bank 2, 0x05)
        register Bank2AccelConfigStatic4 {
            const ADDRESS = 0x05;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Anti-alias filter delta squared, upper bits
            accel_aaf_deltsqr_high: uint = 0..4,
            /// Anti-alias filter bitshift
            accel_aaf_bitshift: uint = 4..8,
        },

        /// XA_ST_DATA - Accel X Self-Test Data (Bank 2, 0x3B)
        register Bank2XaStData {
            const ADDRESS = 0x3B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the accelerometer X-axis
            xa_st_data: uint = 0..8,
        },

        /// YA_ST_DATA - Accel Y Self-Test Data (Bank 2, 0x3C)
        register Bank2YaStData {
            const ADDRESS = 0x3C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the accelerometer Y-axis
            ya_st_data: uint = 0..8,
        },

        /// ZA_ST_DATA - Accel Z Self-Test Data (Bank 2, 0x3D)
        register Bank2ZaStData {
            const ADDRESS = 0x3D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Factory self-test output for the accelerometer Z-axis
            za_st_data: uint = 0..8,
        },

        // ==================== BANK 3 REGISTERS ====================
        // Pad pull-up/pull-down configuration

        /// PU_PD_CONFIG1 - Pad Pull Configuration 1 (Bank 3, 0x06)
        register Bank3PuPdConfig1 {
            const ADDRESS = 0x06;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_1_0: uint = 0..2,
            /// Pin 7 pull-up disable
            pin7_pu_en: bool = 2,
            /// Pin 9 pull-down enable
            pin9_pd_en: bool = 3,
            /// Pin 10 pull-up enable
            pin10_pu_en: bool = 4,
            /// Pin 11 pull-up enable
            pin11_pu_en: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// PU_PD_CONFIG2 - Pad Pull Configuration 2 (Bank 3, 0x0E)
        register Bank3PuPdConfig2 {
            const ADDRESS = 0x0E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Pin 2 pull-up enable
            pin2_pu_en: bool = 0,
            reserved_1: uint = 1..2,
            /// Pin 4 pull-up enable
            pin4_pu_en: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        // ==================== BANK 4 REGISTERS ====================
        // FDR, APEX tuning, interrupt routing and user offsets

        /// FDR_CONFIG - FSYNC Delay Rate (Bank 4, 0x09)
        register Bank4FdrConfig {
            const ADDRESS = 0x09;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// FSYNC delay rate divider
            fdr_sel: uint = 0..7,
            reserved_7: uint = 7..8,
        },

        /// APEX_CONFIG1 - DMP Power Save Timing (Bank 4, 0x40)
        register Bank4ApexConfig1 {
            const ADDRESS = 0x40;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Time before the DMP enters power save
            dmp_power_save_time_sel: uint = 0..4,
            /// Low-energy mode amplitude threshold
            low_energy_amp_th_sel: uint = 4..8,
        },

        /// APEX_CONFIG2 - Pedometer Thresholds (Bank 4, 0x41)
        register Bank4ApexConfig2 {
            const ADDRESS = 0x41;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Step count buffer threshold
            ped_step_cnt_th_sel: uint = 0..4,
            /// Peak amplitude threshold
            ped_amp_th_sel: uint = 4..8,
        },

        /// APEX_CONFIG3 - Pedometer Timing (Bank 4, 0x42)
        register Bank4ApexConfig3 {
            const ADDRESS = 0x42;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// High-energy threshold
            ped_hi_en_th_sel: uint = 0..2,
            /// Step buffer timer threshold
            ped_sb_timer_th_sel: uint = 2..5,
            /// Step detection window threshold
            ped_step_det_th_sel: uint = 5..8,
        },

        /// APEX_CONFIG4 - Tilt and Sleep Timing (Bank 4, 0x43)
        register Bank4ApexConfig4 {
            const ADDRESS = 0x43;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            reserved_2_0: uint = 0..3,
            /// Raise-to-wake sleep timeout
            sleep_time_out: uint = 3..6,
            /// Tilt detection wait time
            tilt_wait_time_sel: uint = 6..8,
        },

        /// APEX_CONFIG5 - Mounting Matrix (Bank 4, 0x44)
        register Bank4ApexConfig5 {
            const ADDRESS = 0x44;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// APEX mounting matrix selection
            mounting_matrix: uint = 0..3,
            reserved_7_3: uint = 3..8,
        },

        /// APEX_CONFIG6 - Raise-to-Wake Gesture Delay (Bank 4, 0x45)
        register Bank4ApexConfig6 {
            const ADDRESS = 0x45;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Sleep gesture delay
            sleep_gesture_delay: uint = 0..3,
            reserved_7_3: uint = 3..8,
        },

        /// APEX_CONFIG7 - Tap Thresholds (Bank 4, 0x46)
        register Bank4ApexConfig7 {
            const ADDRESS = 0x46;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Tap peak tolerance
            tap_max_peak_tol: uint = 0..2,
            /// Minimum jerk threshold for tap detection
            tap_min_jerk_thr: uint = 2..8,
        },

        /// APEX_CONFIG8 - Tap Timing Windows (Bank 4, 0x47)
        register Bank4ApexConfig8 {
            const ADDRESS = 0x47;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Single-tap window
            tap_tmin: uint = 0..3,
            /// Tap energy measurement window
            tap_tavg: uint = 3..5,
            /// Double-tap window
            tap_tmax: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// APEX_CONFIG9 - Pedometer Sensitivity (Bank 4, 0x48)
        register Bank4ApexConfig9 {
            const ADDRESS = 0x48;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Pedometer sensitivity mode (0 = normal, 1 = slow walk)
            sensitivity_mode: bool = 0,
            reserved_7_1: uint = 1..8,
        },

        /// APEX_CONFIG10 - Low-G Configuration (Bank 4, 0x49)
        register Bank4ApexConfig10 {
            const ADDRESS = 0x49;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Low-G peak threshold hysteresis
            lowg_peak_th_hyst: uint = 0..3,
            /// High-G peak threshold hysteresis
            highg_peak_th_hyst: uint = 3..6,
            reserved_7_6: uint = 6..8,
        },

        /// ACCEL_WOM_X_THR - WoM X-Axis Threshold (Bank 4, 0x4A)
        register Bank4AccelWomXThr {
            const ADDRESS = 0x4A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Wake-on-motion threshold for the X-axis (1 LSB = ~4 mg)
            wom_x_th: uint = 0..8,
        },

        /// ACCEL_WOM_Y_THR - WoM Y-Axis Threshold (Bank 4, 0x4B)
        register Bank4AccelWomYThr {
            const ADDRESS = 0x4B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Wake-on-motion threshold for the Y-axis (1 LSB = ~4 mg)
            wom_y_th: uint = 0..8,
        },

        /// ACCEL_WOM_Z_THR - WoM Z-Axis Threshold (Bank 4, 0x4C)
        register Bank4AccelWomZThr {
            const ADDRESS = 0x4C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Wake-on-motion threshold for the Z-axis (1 LSB = ~4 mg)
            wom_z_th: uint = 0..8,
        },

        /// INT_SOURCE6 - APEX INT1 Routing (Bank 4, 0x4D)
        register Bank4IntSource6 {
            const ADDRESS = 0x4D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route tap detection to INT1
            tap_det_int1_en: bool = 0,
            /// Route sleep detection to INT1
            sleep_det_int1_en: bool = 1,
            /// Route wake detection to INT1
            wake_det_int1_en: bool = 2,
            /// Route tilt detection to INT1
            tilt_det_int1_en: bool = 3,
            /// Route step count overflow to INT1
            step_cnt_ofl_int1_en: bool = 4,
            /// Route step detection to INT1
            step_det_int1_en: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// INT_SOURCE7 - APEX INT2 Routing (Bank 4, 0x4E)
        register Bank4IntSource7 {
            const ADDRESS = 0x4E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route tap detection to INT2
            tap_det_int2_en: bool = 0,
            /// Route sleep detection to INT2
            sleep_det_int2_en: bool = 1,
            /// Route wake detection to INT2
            wake_det_int2_en: bool = 2,
            /// Route tilt detection to INT2
            tilt_det_int2_en: bool = 3,
            /// Route step count overflow to INT2
            step_cnt_ofl_int2_en: bool = 4,
            /// Route step detection to INT2
            step_det_int2_en: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// INT_SOURCE8 - IBI Routing (Bank 4, 0x4F)
        register Bank4IntSource8 {
            const ADDRESS = 0x4F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route AGC ready to IBI
            agc_rdy_ibi_en: bool = 0,
            /// Route FIFO full to IBI
            fifo_full_ibi_en: bool = 1,
            /// Route FIFO watermark to IBI
            fifo_ths_ibi_en: bool = 2,
            /// Route data ready to IBI
            ui_drdy_ibi_en: bool = 3,
            reserved_4: uint = 4..5,
            /// Route PLL ready to IBI
            pll_rdy_ibi_en: bool = 5,
            /// Route UI FSYNC to IBI
            ui_fsync_ibi_en: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// INT_SOURCE9 - IBI Routing (Bank 4, 0x50)
        register Bank4IntSource9 {
            const ADDRESS = 0x50;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route I3C protocol errors to IBI
            i3c_protocol_error_ibi_en: bool = 0,
            /// Route WoM X to IBI
            wom_x_ibi_en: bool = 1,
            /// Route WoM Y to IBI
            wom_y_ibi_en: bool = 2,
            /// Route WoM Z to IBI
            wom_z_ibi_en: bool = 3,
            /// Route SMD to IBI
            smd_ibi_en: bool = 4,
            reserved_7_5: uint = 5..8,
        },

        /// INT_SOURCE10 - APEX IBI Routing (Bank 4, 0x51)
        register Bank4IntSource10 {
            const ADDRESS = 0x51;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Route tap detection to IBI
            tap_det_ibi_en: bool = 0,
            /// Route sleep detection to IBI
            sleep_det_ibi_en: bool = 1,
            /// Route wake detection to IBI
            wake_det_ibi_en: bool = 2,
            /// Route tilt detection to IBI
            tilt_det_ibi_en: bool = 3,
            /// Route step count overflow to IBI
            step_cnt_ofl_ibi_en: bool = 4,
            /// Route step detection to IBI
            step_det_ibi_en: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// OFFSET_USER0 - Gyro X Offset Low Byte (Bank 4, 0x77)
        register Bank4OffsetUser0 {
            const ADDRESS = 0x77;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope X-axis offset bits 7:0
            gyro_x_offuser_low: uint = 0..8,
        },

        /// OFFSET_USER1 - Gyro X/Y Offset High Nibbles (Bank 4, 0x78)
        register Bank4OffsetUser1 {
            const ADDRESS = 0x78;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope X-axis offset bits 11:8
            gyro_x_offuser_high: uint = 0..4,
            /// Gyroscope Y-axis offset bits 11:8
            gyro_y_offuser_high: uint = 4..8,
        },

        /// OFFSET_USER2 - Gyro Y Offset Low Byte (Bank 4, 0x79)
        register Bank4OffsetUser2 {
            const ADDRESS = 0x79;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope Y-axis offset bits 7:0
            gyro_y_offuser_low: uint = 0..8,
        },

        /// OFFSET_USER3 - Gyro Z Offset Low Byte (Bank 4, 0x7A)
        register Bank4OffsetUser3 {
            const ADDRESS = 0x7A;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope Z-axis offset bits 7:0
            gyro_z_offuser_low: uint = 0..8,
        },

        /// OFFSET_USER4 - Gyro Z / Accel X Offset High Nibbles (Bank 4, 0x7B)
        register Bank4OffsetUser4 {
            const ADDRESS = 0x7B;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Gyroscope Z-axis offset bits 11:8
            gyro_z_offuser_high: uint = 0..4,
            /// Accelerometer X-axis offset bits 11:8
            accel_x_offuser_high: uint = 4..8,
        },

        /// OFFSET_USER5 - Accel X Offset Low Byte (Bank 4, 0x7C)
        register Bank4OffsetUser5 {
            const ADDRESS = 0x7C;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer X-axis offset bits 7:0
            accel_x_offuser_low: uint = 0..8,
        },

        /// OFFSET_USER6 - Accel Y Offset Low Byte (Bank 4, 0x7D)
        register Bank4OffsetUser6 {
            const ADDRESS = 0x7D;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer Y-axis offset bits 7:0
            accel_y_offuser_low: uint = 0..8,
        },

        /// OFFSET_USER7 - Accel Y/Z Offset High Nibbles (Bank 4, 0x7E)
        register Bank4OffsetUser7 {
            const ADDRESS = 0x7E;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer Y-axis offset bits 11:8
            accel_y_offuser_high: uint = 0..4,
            /// Accelerometer Z-axis offset bits 11:8
            accel_z_offuser_high: uint = 4..8,
        },

        /// OFFSET_USER8 - Accel Z Offset Low Byte (Bank 4, 0x7F)
        register Bank4OffsetUser8 {
            const ADDRESS = 0x7F;
            const SIZE_BITS = 8;
            const ALLOW_ADDRESS_OVERLAP = true;

            /// Accelerometer Z-axis offset bits 7:0
            accel_z_offuser_low: uint = 0..8,
        }
    }
);
