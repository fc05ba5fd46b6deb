//! Async `no_std` driver for the MAX31865 RTD-to-digital converter, built on the
//! [`embedded-hal-async`] SPI and delay traits.
//!
//! The driver turns the bias voltage on only for the duration of a reading, triggers one-shot
//! conversions when configured to, and checks the fault bit of every result. A reading that
//! cannot be trusted comes back as `Ok(None)`; just poll again.
//!
//! ```rust,no_run
//! # use embedded_hal_async::delay::DelayNs;
//! # use embedded_hal_async::spi::SpiDevice;
//! use max31865_rs::{Max31865, Max31865Result};
//! use max31865_rs::config::{Configuration, Wires};
//!
//! # async fn demo<S: SpiDevice, D: DelayNs>(spi: S, delay: D) -> Max31865Result<(), S::Error> {
//! let config = Configuration::default()
//!     .wires(Wires::Three)
//!     .fault_thresholds(0.0, 180.0);
//! let mut rtd = Max31865::new_spi(spi, delay, config).await?;
//!
//! match rtd.read_scaled().await? {
//!     Some(celsius) => { /* use it */ }
//!     None => { /* no valid conversion this cycle */ }
//! }
//! # Ok(()) }
//! ```
//!
//! ## Features
//!
//! - `defmt`: logging through `defmt`, and `defmt::Format` for the public types.
//! - `log`: logging through `log`.
//! - `uom`: `Max31865::read_temperature_uom` returning a `uom` temperature.
//!
//! [`embedded-hal-async`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal-async

#![no_std]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

// Must stay first so the logging macros are visible in the other modules.
#[macro_use]
mod fmt;

pub mod bus;
pub mod config;
pub mod error;
mod max31865;
pub mod register;
pub mod scaling;

#[cfg(test)]
mod testing;

use embedded_hal::spi::{Mode, MODE_3};

pub use crate::error::{Max31865Error, Max31865Result};
pub use crate::max31865::{Max31865, Max31865Spi, BIAS_SETTLE_MS, CONVERSION_MS};

/// SPI mode the chip is driven with. It also accepts mode 1.
pub const MODE: Mode = MODE_3;
