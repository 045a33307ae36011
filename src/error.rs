/// Possible errors from the HDC1080 driver.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Hdc1080Error<E> {
    /// A conversion is in progress; the operation was rejected without
    /// touching the bus.
    Busy,
    /// An identity register did not hold the expected value. Distinguishes
    /// "wrong chip on this address" from a generic bus failure.
    IdentityMismatch {
        /// The identity register that was read (0xFE or 0xFF).
        register: u8,
        /// The value the register must hold for an HDC1080.
        expected: u16,
        /// The value actually read back.
        found: u16,
    },
    /// Error from the underlying I2C bus (NACK, timeout, arbitration loss).
    Bus(E),
}

impl<E> From<E> for Hdc1080Error<E> {
    fn from(value: E) -> Self {
        Self::Bus(value)
    }
}
