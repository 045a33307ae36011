//! HDC1080 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the TI HDC1080 I2C
//! temperature and humidity sensor, built on top of the [`embedded-hal`]
//! traits.
//!
//! # Features
//! - Non-blocking measurement protocol: triggering a conversion returns
//!   immediately and the decoded reading is delivered through a callback
//!   once the host's one-shot timer fires
//! - Chip identity verification before the configuration register is touched
//! - Designed for `no_std` environments
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`I2c`] for bus access
//!
//! The conversion-wait timer is abstracted as the [`ConversionTimer`] trait;
//! the host wires its expiry to [`Hdc1080::conversion_complete`].
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support
//!
//! # Example
//! ```no_run
//! # use hdc1080_sensor::{Config, ConversionTimer, Hdc1080, DEVICE_ADDRESS};
//! # struct SomeTimer;
//! # impl ConversionTimer for SomeTimer { fn start(&mut self, _: u32) {} }
//! # fn get_i2c() -> embedded_hal_mock::eh1::i2c::Mock { unimplemented!() }
//! let i2c = get_i2c(); // platform-specific embedded_hal::i2c::I2c instance
//! let mut sensor = Hdc1080::new(i2c, DEVICE_ADDRESS, SomeTimer, |result| {
//!     if let Ok(reading) = result {
//!         // use reading.temperature / reading.relative_humidity
//!     }
//! });
//!
//! sensor.configure(Config::default()).unwrap();
//! sensor.request_readings().unwrap();
//! // ... the timer context later calls sensor.conversion_complete()
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`I2c`]: embedded_hal::i2c::I2c

#![cfg_attr(not(test), no_std)]

pub mod bus;
pub mod config;
pub mod convert;
pub mod error;
pub mod hdc1080;

pub use config::{AcquisitionMode, BatteryStatus, Config, HumidityResolution, TemperatureResolution};
pub use error::Hdc1080Error;
pub use hdc1080::{
    ConversionTimer, Hdc1080, Reading, CONVERSION_WAIT_US, DEVICE_ADDRESS, DEVICE_ID,
    MANUFACTURER_ID,
};
