use crate::hw_def::*;

use core::fmt;

#[cfg(feature = "defmt")]
use defmt::Format;

/// Lifecycle of a [`crate::Sgp30`] handle
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// bus closed, only `init` is accepted
    #[default]
    Uninitialized,
    /// bus open, IAQ algorithm not started
    Initialized,
    /// IAQ algorithm running; only `deinit` leaves this state
    IaqActive,
}

/// Driver options applied during `init`
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// send a general call soft reset right after the bus is opened
    pub reset_on_init: bool,
    /// read the feature set after opening the bus and warn on a foreign product type
    pub probe_on_init: bool,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            reset_on_init: false,
            probe_on_init: true,
        }
    }
}
impl Config {
    /// Enable or disable the soft reset during `init`
    pub fn with_reset_on_init(mut self, reset_on_init: bool) -> Self {
        self.reset_on_init = reset_on_init;
        self
    }
    /// Enable or disable the feature set probe during `init`
    pub fn with_probe_on_init(mut self, probe_on_init: bool) -> Self {
        self.probe_on_init = probe_on_init;
        self
    }
}

/// CO2 equivalent and total VOC, as reported by the IAQ algorithm
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AirQuality {
    /// CO2 equivalent in ppm
    pub co2eq_ppm: u16,
    /// total volatile organic compounds in ppb
    pub tvoc_ppb: u16,
}
impl AirQuality {
    /// Both values lie inside the documented output range of the sensor
    pub fn is_within_range(&self) -> bool {
        (CO2EQ_MIN_PPM..=CO2EQ_MAX_PPM).contains(&self.co2eq_ppm)
            && (TVOC_MIN_PPB..=TVOC_MAX_PPB).contains(&self.tvoc_ppb)
    }
    /// The sensor reports exactly 400 ppm / 0 ppb for the first ~15 s after `iaq_init`
    pub fn is_warm_up_value(&self) -> bool {
        self.co2eq_ppm == CO2EQ_MIN_PPM && self.tvoc_ppb == TVOC_MIN_PPB
    }
}
impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ppm CO2eq, {} ppb TVOC", self.co2eq_ppm, self.tvoc_ppb)
    }
}

/// Raw sensor signals, usable before the IAQ algorithm is started
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawSignals {
    /// H2 signal
    pub h2: u16,
    /// ethanol signal
    pub ethanol: u16,
}

/// Product type and version from the feature set word
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FeatureSet {
    raw: u16,
    /// product type, 0 for the SGP30
    pub product_type: u8,
    /// product (firmware feature set) version
    pub product_version: u8,
}
impl From<u16> for FeatureSet {
    fn from(raw: u16) -> Self {
        Self {
            raw,
            product_type: (raw >> 12) as u8,
            product_version: raw as u8,
        }
    }
}
impl FeatureSet {
    /// Get the raw feature set word
    pub fn raw(&self) -> u16 {
        self.raw
    }
    /// The device reports itself as an SGP30
    pub fn is_sgp30(&self) -> bool {
        self.product_type == PRODUCT_TYPE_SGP30
    }
}

/// 48-bit unique serial id, as the three words read from the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SerialId(pub [u16; 3]);
impl SerialId {
    /// Serial id as a single number, most significant word first
    pub fn as_u64(&self) -> u64 {
        (self.0[0] as u64) << 32 | (self.0[1] as u64) << 16 | self.0[2] as u64
    }
}
impl fmt::Display for SerialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.0.iter() {
            write!(f, "{:04X}", word)?;
        }
        Ok(())
    }
}

/// Static description of the chip and this driver
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceInfo {
    /// chip name
    pub chip_name: &'static str,
    /// manufacturer name
    pub manufacturer_name: &'static str,
    /// bus interface
    pub interface: &'static str,
    /// minimum supply voltage in volts
    pub supply_voltage_min_v: f32,
    /// maximum supply voltage in volts
    pub supply_voltage_max_v: f32,
    /// maximum supply current in milliamps
    pub max_current_ma: f32,
    /// minimum operating temperature in °C
    pub temperature_min: f32,
    /// maximum operating temperature in °C
    pub temperature_max: f32,
    /// driver version, `major * 1000 + minor * 100`
    pub driver_version: u32,
}

/// Everything [`DeviceInfo`] knows about the SGP30
pub const DEVICE_INFO: DeviceInfo = DeviceInfo {
    chip_name: "Sensirion SGP30",
    manufacturer_name: "Sensirion",
    interface: "IIC",
    supply_voltage_min_v: 1.62,
    supply_voltage_max_v: 1.98,
    max_current_ma: 48.8,
    temperature_min: -40.0,
    temperature_max: 85.0,
    driver_version: 2000,
};
