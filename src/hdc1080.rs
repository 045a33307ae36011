use embedded_hal::i2c::I2c;

use crate::bus::RegisterBus;
use crate::config::Config;
use crate::error::Hdc1080Error;

/// Temperature measurement output register. A register-select write here is
/// also the documented conversion trigger; in dual acquisition mode one
/// trigger converts both channels.
pub const TEMPERATURE_REG: u8 = 0x00;
/// Relative humidity measurement output register.
pub const HUMIDITY_REG: u8 = 0x01;
/// Configuration register. Only the high byte is meaningful.
pub const CONFIG_REG: u8 = 0x02;

const SERIAL_ID2_REG: u8 = 0xFB;
const SERIAL_ID1_REG: u8 = 0xFC;
const SERIAL_ID0_REG: u8 = 0xFD;
const MANUFACTURER_ID_REG: u8 = 0xFE;
const DEVICE_ID_REG: u8 = 0xFF;

/// Texas Instruments manufacturer ID, register 0xFE.
pub const MANUFACTURER_ID: u16 = 0x5449;
/// HDC1080 device ID, register 0xFF.
pub const DEVICE_ID: u16 = 0x1050;
/// Fixed I2C address of the HDC1080.
pub const DEVICE_ADDRESS: u8 = 0x40;

/// Default conversion wait in microseconds.
///
/// The worst case on the device (14-bit dual acquisition) settles in under
/// 14 ms; the default keeps the original driver's generous 500 ms margin.
/// Override with [`Hdc1080::set_conversion_wait`].
pub const CONVERSION_WAIT_US: u32 = 500_000;

/// One-shot timer the driver uses to wait out the conversion latency.
///
/// The host implements this for whatever deferral mechanism it has (a timer
/// peripheral, an event-loop tick, an interrupt). `start` must schedule a
/// single call to [`Hdc1080::conversion_complete`] on the owning driver
/// after at least `wait_us` microseconds, and must not invoke it re-entrantly
/// with any other driver method.
pub trait ConversionTimer {
    /// Starts the one-shot countdown.
    fn start(&mut self, wait_us: u32);
}

/// Reading returned by the HDC1080 sensor.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reading {
    /// Temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
}

impl Reading {
    /// Decodes the 4 output bytes: big-endian raw temperature, then
    /// big-endian raw humidity.
    ///
    /// Scaling per the datasheet: `t = raw / 2^16 * 165 - 40`,
    /// `rh = raw / 2^16 * 100`.
    pub fn from_raw(data: [u8; 4]) -> Reading {
        let [temp_hi, temp_lo, hum_hi, hum_lo] = data;

        let raw_temp = u16::from_be_bytes([temp_hi, temp_lo]);
        let raw_humidity = u16::from_be_bytes([hum_hi, hum_lo]);

        Reading {
            temperature: (raw_temp as f32 / 65536.0) * 165.0 - 40.0,
            relative_humidity: (raw_humidity as f32 / 65536.0) * 100.0,
        }
    }
}

/// Measurement protocol state. Exactly one conversion may be outstanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConversionState {
    Idle,
    Converting,
}

/// Driver for the HDC1080 temperature and humidity sensor.
///
/// Measurements are asynchronous: [`request_readings`](Self::request_readings)
/// triggers a conversion and returns immediately, the [`ConversionTimer`]
/// waits out the conversion latency, and the host's timer context calls
/// [`conversion_complete`](Self::conversion_complete), which reads the output
/// registers and hands the result to the callback.
pub struct Hdc1080<I2C, TIMER, CB> {
    bus: RegisterBus<I2C>,
    timer: TIMER,
    callback: CB,
    conversion_wait_us: u32,
    state: ConversionState,
}

impl<I2C, TIMER, CB, E> Hdc1080<I2C, TIMER, CB>
where
    I2C: I2c<Error = E>,
    TIMER: ConversionTimer,
    CB: FnMut(Result<Reading, Hdc1080Error<E>>),
{
    /// Creates a new instance of the HDC1080 driver.
    ///
    /// # Arguments
    ///
    /// * `i2c` - The I2C bus the sensor is attached to, already initialized.
    /// * `address` - The device address, normally [`DEVICE_ADDRESS`].
    /// * `timer` - One-shot timer covering the conversion wait.
    /// * `callback` - Receives the result of every completed conversion.
    pub fn new(i2c: I2C, address: u8, timer: TIMER, callback: CB) -> Self {
        Hdc1080 {
            bus: RegisterBus::new(i2c, address),
            timer,
            callback,
            conversion_wait_us: CONVERSION_WAIT_US,
            state: ConversionState::Idle,
        }
    }

    /// Verifies chip identity and writes the configuration register.
    ///
    /// Reads the manufacturer and device ID registers and stops with
    /// [`Hdc1080Error::IdentityMismatch`] if either is wrong; writing a
    /// configuration into an unrelated chip's register is the failure mode
    /// this guards against. The configuration is then written only if the
    /// device's current value differs, so a matching device is left
    /// untouched and the self-clearing reset bit is not re-triggered.
    ///
    /// # Errors
    ///
    /// [`Hdc1080Error::Busy`] while a conversion is outstanding, identity
    /// mismatches as above, or the underlying bus error.
    pub fn configure(&mut self, config: Config) -> Result<(), Hdc1080Error<E>> {
        if self.state == ConversionState::Converting {
            return Err(Hdc1080Error::Busy);
        }

        self.check_identity(MANUFACTURER_ID_REG, MANUFACTURER_ID)?;
        self.check_identity(DEVICE_ID_REG, DEVICE_ID)?;

        let mut current = [0u8; 2];
        self.bus.read(CONFIG_REG, &mut current)?;

        // Low byte is reserved and always written as zero.
        let requested = [config.to_byte(), 0x00];
        if current != requested {
            self.bus.write(CONFIG_REG, &requested)?;
        }

        Ok(())
    }

    /// Triggers a conversion and starts the completion timer.
    ///
    /// The trigger is a register-select write to the temperature register;
    /// with dual acquisition configured the device converts both channels.
    /// Returns as soon as the trigger transaction finishes; the reading is
    /// delivered through the callback once the timer context calls
    /// [`conversion_complete`](Self::conversion_complete).
    ///
    /// # Errors
    ///
    /// [`Hdc1080Error::Busy`] if a conversion is already outstanding (no
    /// queueing, no bus traffic), or the trigger's bus error, in which case
    /// the state stays idle and the timer is not started.
    pub fn request_readings(&mut self) -> Result<(), Hdc1080Error<E>> {
        if self.state == ConversionState::Converting {
            return Err(Hdc1080Error::Busy);
        }

        self.bus.write(TEMPERATURE_REG, &[])?;

        self.state = ConversionState::Converting;
        self.timer.start(self.conversion_wait_us);
        Ok(())
    }

    /// Completes an outstanding conversion.
    ///
    /// Must be called from the host's timer context once the
    /// [`ConversionTimer`] fires. Reads the 4 output bytes, decodes them,
    /// and invokes the callback exactly once with the tagged result; a
    /// failed read delivers the bus error instead of a reading. The busy
    /// flag is cleared unconditionally so one failed conversion never
    /// blocks the next request. A call with no conversion outstanding is
    /// ignored.
    pub fn conversion_complete(&mut self) {
        if self.state == ConversionState::Idle {
            return;
        }

        let mut data = [0u8; 4];
        let result = self
            .bus
            .read(TEMPERATURE_REG, &mut data)
            .map(|()| Reading::from_raw(data))
            .map_err(Hdc1080Error::Bus);

        self.state = ConversionState::Idle;
        (self.callback)(result);
    }

    /// Reads the device's current configuration register.
    ///
    /// # Errors
    ///
    /// [`Hdc1080Error::Busy`] while a conversion is outstanding, or the
    /// underlying bus error.
    pub fn get_configuration(&mut self) -> Result<Config, Hdc1080Error<E>> {
        if self.state == ConversionState::Converting {
            return Err(Hdc1080Error::Busy);
        }

        let mut current = [0u8; 2];
        self.bus.read(CONFIG_REG, &mut current)?;
        Ok(Config::from_byte(current[0]))
    }

    /// Reads the factory-programmed 40-bit serial number.
    ///
    /// # Errors
    ///
    /// [`Hdc1080Error::Busy`] while a conversion is outstanding, or the
    /// underlying bus error.
    pub fn serial_number(&mut self) -> Result<u64, Hdc1080Error<E>> {
        if self.state == ConversionState::Converting {
            return Err(Hdc1080Error::Busy);
        }

        let mut serial = 0u64;
        for register in [SERIAL_ID2_REG, SERIAL_ID1_REG] {
            let mut word = [0u8; 2];
            self.bus.read(register, &mut word)?;
            serial = serial << 16 | u16::from_be_bytes(word) as u64;
        }

        // Last register carries only one significant byte, in the high half.
        let mut last = [0u8; 2];
        self.bus.read(SERIAL_ID0_REG, &mut last)?;
        Ok(serial << 8 | last[0] as u64)
    }

    /// Returns `true` while a conversion is outstanding.
    pub fn is_converting(&self) -> bool {
        self.state == ConversionState::Converting
    }

    /// Overrides the conversion wait passed to the timer.
    ///
    /// The default is [`CONVERSION_WAIT_US`]; the device minimum is roughly
    /// 6.8 ms at 14-bit resolution. Takes effect on the next request.
    pub fn set_conversion_wait(&mut self, wait_us: u32) {
        self.conversion_wait_us = wait_us;
    }

    /// Consumes the driver and returns the bus handle and timer.
    pub fn release(self) -> (I2C, TIMER) {
        (self.bus.release(), self.timer)
    }

    /// Reads a 16-bit identity register and compares it to `expected`.
    fn check_identity(&mut self, register: u8, expected: u16) -> Result<(), Hdc1080Error<E>> {
        let mut id = [0u8; 2];
        self.bus.read(register, &mut id)?;

        let found = u16::from_be_bytes(id);
        if found != expected {
            return Err(Hdc1080Error::IdentityMismatch {
                register,
                expected,
                found,
            });
        }
        Ok(())
    }
}
