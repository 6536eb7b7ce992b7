//! Mock interface implementation for testing the IIM-42652 driver

use device_driver::RegisterInterface;
use iim42652::Bank;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// DEVICE_CONFIG register address (Bank 0), holds the soft reset bit
const DEVICE_CONFIG: u8 = 0x11;

/// REG_BANK_SEL register address, decodes identically in every bank
const REG_BANK_SEL: u8 = 0x76;

/// WHO_AM_I register address (Bank 0)
const WHO_AM_I: u8 = 0x75;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Bank where the register was read
        bank: Bank,
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Bank where the register was written
        bank: Bank,
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
    /// Bank select operation (logged even when re-selecting the same bank)
    BankSelect {
        /// Previously selected bank
        from: Bank,
        /// Newly selected bank
        to: Bank,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values (bank, address) -> value
    registers: HashMap<(Bank, u8), u8>,

    /// Current bank selection
    current_bank: Bank,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
    fail_bank_select: bool,

    /// Number of polls the soft reset bit stays set before self-clearing
    reset_duration: u8,
    reset_polls_remaining: u8,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            current_bank: Bank::Bank0,
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
            fail_bank_select: false,
            reset_duration: 0,
            reset_polls_remaining: 0,
        };

        // Set default WHO_AM_I value (0x6F)
        state.registers.insert((Bank::Bank0, WHO_AM_I), 0x6F);

        // Initialize REG_BANK_SEL to 0 (Bank 0)
        state.registers.insert((Bank::Bank0, REG_BANK_SEL), 0x00);

        state
    }

    /// Set accelerometer data (will be returned on next read)
    fn set_accel_data(&mut self, x: i16, y: i16, z: i16) {
        let [x_h, x_l] = x.to_be_bytes();
        let [y_h, y_l] = y.to_be_bytes();
        let [z_h, z_l] = z.to_be_bytes();

        self.registers.insert((Bank::Bank0, 0x1F), x_h);
        self.registers.insert((Bank::Bank0, 0x20), x_l);
        self.registers.insert((Bank::Bank0, 0x21), y_h);
        self.registers.insert((Bank::Bank0, 0x22), y_l);
        self.registers.insert((Bank::Bank0, 0x23), z_h);
        self.registers.insert((Bank::Bank0, 0x24), z_l);
    }

    /// Set gyroscope data (will be returned on next read)
    fn set_gyro_data(&mut self, x: i16, y: i16, z: i16) {
        let [x_h, x_l] = x.to_be_bytes();
        let [y_h, y_l] = y.to_be_bytes();
        let [z_h, z_l] = z.to_be_bytes();

        self.registers.insert((Bank::Bank0, 0x25), x_h);
        self.registers.insert((Bank::Bank0, 0x26), x_l);
        self.registers.insert((Bank::Bank0, 0x27), y_h);
        self.registers.insert((Bank::Bank0, 0x28), y_l);
        self.registers.insert((Bank::Bank0, 0x29), z_h);
        self.registers.insert((Bank::Bank0, 0x2A), z_l);
    }

    /// Set temperature data (will be returned on next read)
    fn set_temperature_data(&mut self, temp_raw: i16) {
        let [temp_h, temp_l] = temp_raw.to_be_bytes();
        self.registers.insert((Bank::Bank0, 0x1D), temp_h);
        self.registers.insert((Bank::Bank0, 0x1E), temp_l);
    }

    /// Read one register byte, simulating the self-clearing soft reset bit
    fn read_byte(&mut self, bank: Bank, address: u8) -> u8 {
        let value = self.registers.get(&(bank, address)).copied().unwrap_or(0);

        if bank == Bank::Bank0 && address == DEVICE_CONFIG && (value & 0x01) != 0 {
            if self.reset_polls_remaining == 0 {
                // Reset has completed, the device clears the bit
                let cleared = value & !0x01;
                self.registers.insert((bank, address), cleared);
                return cleared;
            }
            self.reset_polls_remaining -= 1;
        }

        value
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with default register values
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    #[allow(dead_code)]
    pub fn set_register(&self, bank: Bank, address: u8, value: u8) {
        self.state
            .borrow_mut()
            .registers
            .insert((bank, address), value);
    }

    /// Get a register value
    #[allow(dead_code)]
    pub fn get_register(&self, bank: Bank, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&(bank, address))
            .copied()
            .unwrap_or(0)
    }

    /// Set WHO_AM_I register value
    #[allow(dead_code)]
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(Bank::Bank0, WHO_AM_I, value);
    }

    /// Set accelerometer data (will be returned on next read)
    #[allow(dead_code)]
    pub fn set_accel_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_accel_data(x, y, z);
    }

    /// Set gyroscope data (will be returned on next read)
    #[allow(dead_code)]
    pub fn set_gyro_data(&self, x: i16, y: i16, z: i16) {
        self.state.borrow_mut().set_gyro_data(x, y, z);
    }

    /// Set temperature data (will be returned on next read)
    #[allow(dead_code)]
    pub fn set_temperature_data(&self, temp_raw: i16) {
        self.state.borrow_mut().set_temperature_data(temp_raw);
    }

    /// Keep the soft reset bit set for the given number of polls
    ///
    /// With the default of 0 the bit reads as cleared on the first poll
    /// after it is set.
    #[allow(dead_code)]
    pub fn set_reset_duration(&self, polls: u8) {
        let mut state = self.state.borrow_mut();
        state.reset_duration = polls;
        state.reset_polls_remaining = polls;
    }

    /// Inject a read failure on the next read operation
    #[allow(dead_code)]
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    #[allow(dead_code)]
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Inject a bank select failure
    #[allow(dead_code)]
    pub fn fail_bank_select(&self, enable: bool) {
        self.state.borrow_mut().fail_bank_select = enable;
    }

    /// Get the operations log
    #[allow(dead_code)]
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    #[allow(dead_code)]
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Count bank select operations
    #[allow(dead_code)]
    pub fn bank_select_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::BankSelect { .. }))
            .count()
    }

    /// Count reads of a register in a bank
    #[allow(dead_code)]
    pub fn read_count(&self, bank: Bank, address: u8) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| {
                matches!(op, Operation::ReadRegister { bank: b, address: a, .. }
                    if *b == bank && *a == address)
            })
            .count()
    }

    /// Verify a register was written with expected value
    #[allow(dead_code)]
    pub fn verify_register(&self, bank: Bank, address: u8, expected: u8) -> bool {
        self.get_register(bank, address) == expected
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
    /// Simulated bank select error
    BankSelect,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        // The bank select register decodes in every bank
        if address == REG_BANK_SEL {
            let current_bank = state.current_bank;
            read_data[0] = current_bank as u8;
            state.operations.push(Operation::ReadRegister {
                bank: current_bank,
                address,
                value: read_data[0],
            });
            return Ok(());
        }

        // Read from registers
        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            let current_bank = state.current_bank;
            *byte = state.read_byte(current_bank, reg_addr);

            state.operations.push(Operation::ReadRegister {
                bank: current_bank,
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        // The bank select register decodes in every bank
        if address == REG_BANK_SEL {
            if state.fail_bank_select {
                return Err(MockError::BankSelect);
            }

            let new_bank = match write_data[0] & 0x07 {
                0 => Bank::Bank0,
                1 => Bank::Bank1,
                2 => Bank::Bank2,
                3 => Bank::Bank3,
                4 => Bank::Bank4,
                _ => return Err(MockError::BankSelect),
            };

            let old_bank = state.current_bank;
            state.current_bank = new_bank;

            state.operations.push(Operation::BankSelect {
                from: old_bank,
                to: new_bank,
            });

            state
                .registers
                .insert((Bank::Bank0, REG_BANK_SEL), write_data[0]);

            return Ok(());
        }

        // Write to registers
        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            let current_bank = state.current_bank;

            // Writing the soft reset bit starts the reset countdown
            if current_bank == Bank::Bank0 && reg_addr == DEVICE_CONFIG && (byte & 0x01) != 0 {
                state.reset_polls_remaining = state.reset_duration;
            }

            state.registers.insert((current_bank, reg_addr), byte);

            state.operations.push(Operation::WriteRegister {
                bank: current_bank,
                address: reg_addr,
                value: byte,
            });
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
