//! Register-level transport for the HDC1080.

use embedded_hal::i2c::I2c;

/// Performs register-addressed reads and writes as atomic bus transactions.
///
/// Owns the bus handle and the device address. Every operation is a single
/// pass: a failed transaction is abandoned and surfaced as one error, with
/// no retry and no partial-write recovery.
pub struct RegisterBus<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, E> RegisterBus<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        RegisterBus { i2c, address }
    }

    /// Writes `payload` to `register` as one transaction.
    ///
    /// An empty payload is a register-pointer select, which on this device
    /// doubles as the conversion trigger for the output registers. Payloads
    /// are at most 2 bytes; every writable register is 16 bits wide.
    pub fn write(&mut self, register: u8, payload: &[u8]) -> Result<(), E> {
        let mut frame = [0u8; 3];
        frame[0] = register;
        frame[1..1 + payload.len()].copy_from_slice(payload);
        self.i2c.write(self.address, &frame[..1 + payload.len()])
    }

    /// Fills `buf` from `register` as two chained transactions: a
    /// pointer-select write, then the data read.
    ///
    /// The HDC1080 only latches the read pointer on a dedicated write
    /// transaction, so this cannot be a combined repeated-start read. If
    /// the select fails the read is not attempted.
    pub fn read(&mut self, register: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write(self.address, &[register])?;
        self.i2c.read(self.address, buf)
    }

    /// Consumes the transport and returns the bus handle.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
