//! Baseline persistence and humidity compensation.
//!
//! The IAQ algorithm tracks a baseline for each output. Saving it every hour
//! and restoring it after `iaq_init` skips the 12 h the algorithm otherwise
//! needs to settle. Feeding it the absolute humidity lets it compensate the
//! humidity cross-sensitivity of the sensing element.

use crate::{Error, Sgp30, hw_def::*, transport::Transport};

#[cfg(feature = "defmt")]
use defmt::Format;

/// IAQ baseline pair
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Baseline {
    /// CO2eq baseline
    pub co2eq: u16,
    /// TVOC baseline
    pub tvoc: u16,
}

/// Absolute humidity in g/m³ from temperature (°C) and relative humidity (%).
///
/// Uses the Magnus form of the saturation vapor pressure given in the SGP30
/// datasheet:
/// `216.7 * (RH/100 * 6.112 * exp(17.62 T / (243.12 + T))) / (273.15 + T)`.
pub fn absolute_humidity<E>(temperature: f32, relative_humidity: f32) -> Result<f32, Error<E>> {
    if !temperature.is_finite()
        || !relative_humidity.is_finite()
        || !(0.0..=100.0).contains(&relative_humidity)
        || temperature <= -243.12
    {
        return Err(Error::InvalidParameter);
    }
    let saturation_hpa = 6.112 * libm::expf(17.62 * temperature / (243.12 + temperature));
    let vapor_hpa = relative_humidity / 100.0 * saturation_hpa;
    Ok(216.7 * vapor_hpa / (273.15 + temperature))
}

/// Absolute humidity as the 8.8 fixed point value `set_absolute_humidity` expects.
///
/// Values above 255.996 g/m³ saturate at `0xFFFF`.
pub fn convert_absolute_humidity<E>(temperature: f32, relative_humidity: f32) -> Result<u16, Error<E>> {
    let grams_per_m3 = absolute_humidity(temperature, relative_humidity)?;
    let scaled = libm::roundf(grams_per_m3 * 256.0);
    Ok(if scaled >= u16::MAX as f32 { u16::MAX } else { scaled as u16 })
}

impl<T: Transport> Sgp30<T> {
    /// Read the current IAQ baseline. Only valid while the IAQ algorithm runs.
    pub fn get_baseline(&mut self) -> Result<Baseline, Error<T::Error>> {
        self.require_iaq()?;
        let mut words = [0u16; 2];
        self.execute(Command::GetIaqBaseline, &[], &mut words)?;
        Ok(Baseline { co2eq: words[0], tvoc: words[1] })
    }

    /// Restore a baseline previously read with [`Sgp30::get_baseline`].
    ///
    /// The device expects the TVOC word first, the reverse of the order it
    /// reports them in.
    pub fn set_baseline(&mut self, baseline: Baseline) -> Result<(), Error<T::Error>> {
        self.require_iaq()?;
        debug!("sgp30: restore baseline co2eq={} tvoc={}", baseline.co2eq, baseline.tvoc);
        self.execute(Command::SetIaqBaseline, &[baseline.tvoc, baseline.co2eq], &mut [])
    }

    /// Restore only the TVOC baseline
    pub fn set_tvoc_baseline(&mut self, tvoc: u16) -> Result<(), Error<T::Error>> {
        self.require_iaq()?;
        self.execute(Command::SetTvocBaseline, &[tvoc], &mut [])
    }

    /// Read the TVOC baseline the algorithm started from
    pub fn get_tvoc_inceptive_baseline(&mut self) -> Result<u16, Error<T::Error>> {
        self.require_iaq()?;
        let mut words = [0u16; 1];
        self.execute(Command::GetTvocInceptiveBaseline, &[], &mut words)?;
        Ok(words[0])
    }

    /// Set the absolute humidity register (8.8 fixed point g/m³). 0 turns compensation off.
    pub fn set_absolute_humidity(&mut self, register: u16) -> Result<(), Error<T::Error>> {
        self.require_initialized()?;
        self.execute(Command::SetAbsoluteHumidity, &[register], &mut [])
    }

    /// Convert temperature and relative humidity, then set the absolute humidity register
    pub fn set_humidity(&mut self, temperature: f32, relative_humidity: f32) -> Result<u16, Error<T::Error>> {
        self.require_initialized()?;
        let register = convert_absolute_humidity(temperature, relative_humidity)?;
        self.set_absolute_humidity(register)?;
        Ok(register)
    }
}
