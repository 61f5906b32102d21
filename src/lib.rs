//! This is a platform-agnostic Rust driver core for the Sensirion SGP30 indoor air quality
//! (TVOC and CO2eq) gas sensor. The bus is reached through the [`Transport`] trait, with a
//! ready-made implementation for the [`embedded-hal`] I²C and delay traits.
//!
//! [`embedded-hal`]: https://github.com/rust-embedded/embedded-hal/tree/master/embedded-hal
//!
//! This driver allows you to:
//! - Open and release the bus, with an optional soft reset and identity probe.
//! - Start the on-chip IAQ algorithm and read CO2eq and TVOC.
//! - Read the raw H2 and ethanol signals.
//! - Save and restore the IAQ baseline, restore the TVOC baseline alone and read the
//!   inceptive TVOC baseline.
//! - Set the absolute humidity used for compensation, converted from temperature and
//!   relative humidity.
//! - Run the on-chip self test.
//! - Read the feature set and the unique serial id.
//! - Send any other command word through the same checked pipeline.
//!
//! Every word received from the device is checked against its CRC-8. A checksum failure or a
//! bus error aborts the operation and is returned to the caller; nothing is retried.
//!
//! ## Features
//!
//! - `blocking`: Enables [`I2cTransport`] over `embedded-hal` (default).
//! - `defmt`: Enables logging using the `defmt` framework.
//! - `log`: Enables logging using the `log` framework.
//!
//! ## Supported devices: SGP30
//!
//! The SGP30 is a digital multi-pixel gas sensor with a fully calibrated air quality output
//! signal. It runs a dynamic baseline compensation algorithm on chip and reports a total VOC
//! concentration (0 to 60000 ppb) and a CO2 equivalent (400 to 60000 ppm). Supply voltage is
//! 1.62 V to 1.98 V, the I²C address is fixed at 0x58.
//!
//! Datasheet:
//!   [SGP30](https://sensirion.com/media/documents/984E0DD5/61644B8B/Sensirion_Gas_Sensors_Datasheet_SGP30.pdf)
//!
//! ## Blocking Example:
//!
//! ```ignore
//! use sgp30_core::{Baseline, Config, I2cAddr, I2cTransport, Sgp30};
//!
//! // Platform-specific
//! let i2c = /* embedded_hal::i2c::I2c instance */;
//! let delay = /* embedded_hal::delay::DelayNs instance */;
//!
//! let transport = I2cTransport::new(i2c, delay, I2cAddr::default());
//! let mut sgp30 = Sgp30::new(transport, Config::default());
//! sgp30.init().unwrap();
//! sgp30.iaq_init().unwrap();
//!
//! // restore the baseline saved during the last run
//! sgp30.set_baseline(Baseline { co2eq: 0x8A3B, tvoc: 0x8E6C }).unwrap();
//!
//! loop {
//!     // feed the latest temperature and humidity from another sensor
//!     sgp30.set_humidity(23.5, 41.0).unwrap();
//!
//!     let air_quality = sgp30.measure_iaq().unwrap();
//!     println!("{}", air_quality);
//!
//!     // Platform-specific: the IAQ algorithm expects one measurement per second
//!     sleep_secs(1);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features \"defmt\" and \"log\" are mutually exclusive and cannot be enabled together");

#[macro_use]
mod logging;

pub mod calibration;
pub mod checksum;
pub mod codec;
mod device_impl;
mod hw_def;
pub mod transport;
mod types;

#[cfg(test)]
mod test_utils;

pub use crate::{
    calibration::{Baseline, absolute_humidity, convert_absolute_humidity},
    device_impl::self_test_passed,
    hw_def::*,
    transport::Transport,
    types::*,
};
#[cfg(feature = "blocking")]
pub use crate::transport::I2cTransport;

#[cfg(feature = "defmt")]
use defmt::Format;

/// SGP30 device driver
#[derive(Debug)]
pub struct Sgp30<T> {
    pub(crate) transport: T,
    pub(crate) state: State,
    pub(crate) config: Config,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error<E> {
    /// The handle is not in the state the operation needs
    #[error("sensor not initialized for this operation")]
    NotInitialized,
    /// `init` or `iaq_init` was already done
    #[error("sensor already initialized")]
    AlreadyInitialized,
    /// Bus open, write or read failed
    #[error("transport failure: {0:?}")]
    Transport(E),
    /// A word from the device did not match its checksum
    #[error("response checksum mismatch")]
    ChecksumMismatch,
    /// Input out of range or a frame larger than the protocol allows
    #[error("invalid parameter")]
    InvalidParameter,
}
