#[cfg(feature = "defmt")]
use defmt::Format;

/// 7-bit I²C address of the SGP30
pub const SGP30_I2C_ADDR: u8 = 0x58;

/// I²C general call address, used for the bus-wide soft reset
pub const GENERAL_CALL_ADDR: u8 = 0x00;

/// Second byte of the general call reset (0x0006)
pub const GENERAL_CALL_RESET_BYTE: u8 = 0x06;

/// Delay used by [`crate::Sgp30::read`] for commands outside the fixed table
pub const GENERIC_COMMAND_DELAY_MS: u32 = 20;

/// Result code returned by a passing on-chip self test
pub const SELF_TEST_PASS_PATTERN: u16 = 0xD400;

/// Product type reported in the feature set word by an SGP30
pub const PRODUCT_TYPE_SGP30: u8 = 0;

/// Lowest CO2eq output of the sensor, also reported during warm-up
pub const CO2EQ_MIN_PPM: u16 = 400;
/// Highest CO2eq output of the sensor
pub const CO2EQ_MAX_PPM: u16 = 60000;
/// Lowest TVOC output of the sensor, also reported during warm-up
pub const TVOC_MIN_PPB: u16 = 0;
/// Highest TVOC output of the sensor
pub const TVOC_MAX_PPB: u16 = 60000;

/// I²C address of the device
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum I2cAddr {
    /// factory address 0x58
    #[default]
    Addr58,
    /// any other address, e.g. behind an address translator
    Other(u8),
}
impl I2cAddr {
    /// Get the 7-bit address
    pub fn as_u8(&self) -> u8 {
        match self {
            I2cAddr::Addr58 => SGP30_I2C_ADDR,
            I2cAddr::Other(addr) => *addr,
        }
    }
}

/// Commands understood by the SGP30
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    /// general call soft reset
    SoftReset,
    /// start the IAQ algorithm
    IaqInit,
    /// read CO2eq and TVOC
    MeasureIaq,
    /// read the raw H2 and ethanol signals
    MeasureRaw,
    /// read the IAQ baseline (CO2eq, TVOC)
    GetIaqBaseline,
    /// restore the IAQ baseline (TVOC, CO2eq)
    SetIaqBaseline,
    /// set the absolute humidity used for compensation
    SetAbsoluteHumidity,
    /// read product type and version
    GetFeatureSet,
    /// read the 48-bit serial id
    GetSerialId,
    /// run the on-chip self test
    MeasureTest,
    /// read the inceptive TVOC baseline
    GetTvocInceptiveBaseline,
    /// restore only the TVOC baseline
    SetTvocBaseline,
}

/// Wire-level description of a [`Command`]
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandSpec {
    /// 16-bit command word, sent big-endian
    pub code: u16,
    /// argument words written after the command word
    pub arg_words: usize,
    /// data words returned by the device
    pub response_words: usize,
    /// time the device needs between the write and the read
    pub delay_ms: u32,
}

impl Command {
    /// Look up command word, frame sizes and the mandatory post-write delay
    pub const fn spec(self) -> CommandSpec {
        let (code, arg_words, response_words, delay_ms) = match self {
            Command::SoftReset => (0x0006, 0, 0, 1),
            Command::IaqInit => (0x2003, 0, 0, 10),
            Command::MeasureIaq => (0x2008, 0, 2, 12),
            Command::MeasureRaw => (0x2050, 0, 2, 25),
            Command::GetIaqBaseline => (0x2015, 0, 2, 10),
            Command::SetIaqBaseline => (0x201E, 2, 0, 10),
            Command::SetAbsoluteHumidity => (0x2061, 1, 0, 10),
            Command::GetFeatureSet => (0x202F, 0, 1, 10),
            Command::GetSerialId => (0x3682, 0, 3, 10),
            Command::MeasureTest => (0x2032, 0, 1, 220),
            Command::GetTvocInceptiveBaseline => (0x20B3, 0, 1, 10),
            Command::SetTvocBaseline => (0x2077, 1, 0, 10),
        };
        CommandSpec { code, arg_words, response_words, delay_ms }
    }

    /// 16-bit command word
    pub const fn code(self) -> u16 {
        self.spec().code
    }

    /// Command word as it goes on the wire
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.code().to_be_bytes()
    }
}
