//! Model of the HDC1080 configuration register (0x02).
//!
//! The register is 16 bits wide but only the high byte carries settings;
//! the low byte is reserved and always written as zero.

/// Humidity measurement resolution (config bits 1:0).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum HumidityResolution {
    /// 14-bit, ~6.50 ms conversion time.
    Bits14 = 0b00,
    /// 11-bit, ~3.85 ms conversion time.
    Bits11 = 0b01,
    /// 8-bit, ~2.50 ms conversion time.
    Bits8 = 0b10,
}

/// Temperature measurement resolution (config bit 2).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TemperatureResolution {
    /// 14-bit, ~6.35 ms conversion time.
    Bits14 = 0b0,
    /// 11-bit, ~3.65 ms conversion time.
    Bits11 = 0b1,
}

/// Mode of acquisition (config bit 4).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum AcquisitionMode {
    /// Temperature or humidity is acquired on its own, depending on which
    /// output register the trigger write points at.
    Single = 0b0,
    /// One trigger acquires temperature and humidity in sequence.
    Dual = 0b1,
}

/// Battery status observation (config bit 3, read-only).
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum BatteryStatus {
    /// Supply voltage above 2.8 V.
    Ok = 0b0,
    /// Supply voltage below 2.8 V.
    Low = 0b1,
}

/// Settings held in the high byte of the configuration register.
///
/// `battery_status` is a read-only observation: the device ignores the bit
/// on write, and `Config` values read back via
/// [`get_configuration`](crate::Hdc1080::get_configuration) report the
/// device's view.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Humidity resolution selection.
    pub humidity_resolution: HumidityResolution,
    /// Temperature resolution selection.
    pub temperature_resolution: TemperatureResolution,
    /// Single- or dual-channel acquisition per trigger.
    pub acquisition_mode: AcquisitionMode,
    /// Integrated heater enable.
    pub heater: bool,
    /// Battery status bit as last read from the device.
    pub battery_status: BatteryStatus,
    /// Software reset request bit; self-clears on the device.
    pub software_reset: bool,
}

impl Default for Config {
    /// The device's power-on configuration: dual acquisition, 14-bit
    /// resolutions, heater off (register byte `0x10`).
    fn default() -> Self {
        Config {
            humidity_resolution: HumidityResolution::Bits14,
            temperature_resolution: TemperatureResolution::Bits14,
            acquisition_mode: AcquisitionMode::Dual,
            heater: false,
            battery_status: BatteryStatus::Ok,
            software_reset: false,
        }
    }
}

impl Config {
    /// Packs the settings into the high byte of the configuration register.
    ///
    /// Bit layout, MSB to LSB: software-reset, reserved, heater,
    /// acquisition-mode, battery-status, temperature-resolution,
    /// humidity-resolution (2 bits).
    pub fn to_byte(self) -> u8 {
        (self.software_reset as u8) << 7
            | (self.heater as u8) << 5
            | (self.acquisition_mode as u8) << 4
            | (self.battery_status as u8) << 3
            | (self.temperature_resolution as u8) << 2
            | self.humidity_resolution as u8
    }

    /// Unpacks the high byte of the configuration register.
    pub fn from_byte(byte: u8) -> Self {
        Config {
            humidity_resolution: match byte & 0b11 {
                0b00 => HumidityResolution::Bits14,
                0b01 => HumidityResolution::Bits11,
                // 0b11 is reserved; fold it into the 8-bit setting
                _ => HumidityResolution::Bits8,
            },
            temperature_resolution: if byte & 0b100 != 0 {
                TemperatureResolution::Bits11
            } else {
                TemperatureResolution::Bits14
            },
            battery_status: if byte & 0b1000 != 0 {
                BatteryStatus::Low
            } else {
                BatteryStatus::Ok
            },
            acquisition_mode: if byte & 0b1_0000 != 0 {
                AcquisitionMode::Dual
            } else {
                AcquisitionMode::Single
            },
            heater: byte & 0b10_0000 != 0,
            software_reset: byte & 0b1000_0000 != 0,
        }
    }
}
