use crate::codec::{self, CommandFrame, MAX_RESPONSE_LEN, MAX_RESPONSE_WORDS, WORD_LEN};
use crate::hw_def::*;
use crate::transport::Transport;
use crate::types::*;
use crate::{Error, Sgp30};

impl<T: Transport> Sgp30<T> {
    /// Create a new SGP30 driver instance. The bus stays closed until [`Sgp30::init`].
    pub fn new(transport: T, config: Config) -> Self {
        Self {
            transport,
            state: State::Uninitialized,
            config,
        }
    }

    /// Give back the transport. Call [`Sgp30::deinit`] first if the bus should be released.
    pub fn release(self) -> T {
        self.transport
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Bus is open (IAQ algorithm running or not)
    pub fn is_initialized(&self) -> bool {
        self.state != State::Uninitialized
    }

    /// IAQ algorithm has been started
    pub fn is_iaq_active(&self) -> bool {
        self.state == State::IaqActive
    }

    /// Options this handle was created with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Static chip and driver information
    pub fn info(&self) -> &'static DeviceInfo {
        &DEVICE_INFO
    }

    pub(crate) fn require_initialized(&self) -> Result<(), Error<T::Error>> {
        match self.state {
            State::Uninitialized => Err(Error::NotInitialized),
            State::Initialized | State::IaqActive => Ok(()),
        }
    }

    pub(crate) fn require_iaq(&self) -> Result<(), Error<T::Error>> {
        match self.state {
            State::IaqActive => Ok(()),
            State::Uninitialized | State::Initialized => Err(Error::NotInitialized),
        }
    }

    // write, wait, read, verify
    fn transfer(&mut self, code: u16, args: &[u16], response: &mut [u16], delay_ms: u32) -> Result<(), Error<T::Error>> {
        if response.len() > MAX_RESPONSE_WORDS {
            return Err(Error::InvalidParameter);
        }
        let frame = CommandFrame::new(code, args)?;
        trace!("sgp30::transfer(): cmd={:#x} args={} resp={}", code, args.len(), response.len());
        self.transport.write_command(&frame).map_err(|e| {
            warn!("sgp30::transfer(): write of {:#x} failed", code);
            Error::Transport(e)
        })?;
        self.transport.delay_ms(delay_ms);
        if response.is_empty() {
            return Ok(());
        }
        let mut read_buf = [0u8; MAX_RESPONSE_LEN];
        let read_buf = &mut read_buf[..response.len() * WORD_LEN];
        self.transport.read_response(read_buf).map_err(|e| {
            warn!("sgp30::transfer(): read after {:#x} failed", code);
            Error::Transport(e)
        })?;
        codec::decode_words(read_buf, response).inspect_err(|_| {
            warn!("sgp30::transfer(): crc mismatch in response to {:#x}", code);
        })
    }

    pub(crate) fn execute(&mut self, command: Command, args: &[u16], response: &mut [u16]) -> Result<(), Error<T::Error>> {
        let spec = command.spec();
        if args.len() != spec.arg_words || response.len() != spec.response_words {
            return Err(Error::InvalidParameter);
        }
        self.transfer(spec.code, args, response, spec.delay_ms)
    }

    fn bring_up(&mut self) -> Result<(), Error<T::Error>> {
        if self.config.reset_on_init {
            self.execute(Command::SoftReset, &[], &mut [])?;
        }
        if self.config.probe_on_init {
            let mut word = [0u16; 1];
            self.execute(Command::GetFeatureSet, &[], &mut word)?;
            let feature_set = FeatureSet::from(word[0]);
            if feature_set.is_sgp30() {
                debug!("sgp30: feature set version {:#x}", feature_set.product_version);
            } else {
                warn!("sgp30: unexpected product type {}", feature_set.product_type);
            }
        }
        Ok(())
    }

    /// Open the bus and, depending on [`Config`], reset and probe the device
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        if self.state != State::Uninitialized {
            return Err(Error::AlreadyInitialized);
        }
        self.transport.bus_init().map_err(|e| {
            warn!("sgp30: bus init failed");
            Error::Transport(e)
        })?;
        if let Err(err) = self.bring_up() {
            if self.transport.bus_deinit().is_err() {
                warn!("sgp30: bus deinit after failed init failed too");
            }
            return Err(err);
        }
        self.state = State::Initialized;
        debug!("sgp30: initialized");
        Ok(())
    }

    /// Reset the device and release the bus.
    ///
    /// The bus is released even when the reset fails. The handle only returns
    /// to [`State::Uninitialized`] once the bus has been released.
    pub fn deinit(&mut self) -> Result<(), Error<T::Error>> {
        self.require_initialized()?;
        if self.execute(Command::SoftReset, &[], &mut []).is_err() {
            warn!("sgp30: soft reset before bus deinit failed");
        }
        self.transport.bus_deinit().map_err(|e| {
            warn!("sgp30: bus deinit failed");
            Error::Transport(e)
        })?;
        self.state = State::Uninitialized;
        debug!("sgp30: deinitialized");
        Ok(())
    }

    /// Start the IAQ algorithm.
    ///
    /// Call [`Sgp30::measure_iaq`] once per second afterwards; the first ~15 s
    /// report 400 ppm / 0 ppb while the sensor warms up. The algorithm can
    /// only be stopped with [`Sgp30::deinit`].
    pub fn iaq_init(&mut self) -> Result<(), Error<T::Error>> {
        match self.state {
            State::Uninitialized => return Err(Error::NotInitialized),
            State::IaqActive => return Err(Error::AlreadyInitialized),
            State::Initialized => {}
        }
        self.execute(Command::IaqInit, &[], &mut [])?;
        self.state = State::IaqActive;
        debug!("sgp30: iaq algorithm started");
        Ok(())
    }

    /// Read CO2eq and TVOC from the IAQ algorithm
    pub fn measure_iaq(&mut self) -> Result<AirQuality, Error<T::Error>> {
        self.require_iaq()?;
        let mut words = [0u16; 2];
        self.execute(Command::MeasureIaq, &[], &mut words)?;
        Ok(AirQuality {
            co2eq_ppm: words[0],
            tvoc_ppb: words[1],
        })
    }

    /// Read the raw H2 and ethanol signals
    pub fn get_measure_raw(&mut self) -> Result<RawSignals, Error<T::Error>> {
        self.require_initialized()?;
        let mut words = [0u16; 2];
        self.execute(Command::MeasureRaw, &[], &mut words)?;
        Ok(RawSignals {
            h2: words[0],
            ethanol: words[1],
        })
    }

    /// Run the on-chip self test and return its raw result code.
    ///
    /// [`SELF_TEST_PASS_PATTERN`] means all tests passed, see [`self_test_passed`].
    /// Not meant to be used while the IAQ algorithm runs.
    pub fn measure_test(&mut self) -> Result<u16, Error<T::Error>> {
        self.require_initialized()?;
        let mut word = [0u16; 1];
        self.execute(Command::MeasureTest, &[], &mut word)?;
        Ok(word[0])
    }

    /// General call soft reset.
    ///
    /// The handle keeps its state, but the device forgets its baseline and
    /// stops the IAQ algorithm, so restart it with `deinit`, `init` and
    /// `iaq_init` when IAQ readings are needed.
    pub fn soft_reset(&mut self) -> Result<(), Error<T::Error>> {
        self.require_initialized()?;
        self.execute(Command::SoftReset, &[], &mut [])
    }

    /// Read product type and version
    pub fn get_feature_set(&mut self) -> Result<FeatureSet, Error<T::Error>> {
        self.require_initialized()?;
        let mut word = [0u16; 1];
        self.execute(Command::GetFeatureSet, &[], &mut word)?;
        Ok(FeatureSet::from(word[0]))
    }

    /// Read the unique serial id
    pub fn get_serial_id(&mut self) -> Result<SerialId, Error<T::Error>> {
        self.require_initialized()?;
        let mut words = [0u16; 3];
        self.execute(Command::GetSerialId, &[], &mut words)?;
        Ok(SerialId(words))
    }

    /// Send any command word with checksummed arguments and read back
    /// `response.len()` verified words, waiting [`GENERIC_COMMAND_DELAY_MS`]
    /// in between.
    pub fn read(&mut self, command: u16, args: &[u16], response: &mut [u16]) -> Result<(), Error<T::Error>> {
        self.require_initialized()?;
        self.transfer(command, args, response, GENERIC_COMMAND_DELAY_MS)
    }
}

/// Interpret a [`Sgp30::measure_test`] result code
pub fn self_test_passed(code: u16) -> bool {
    code == SELF_TEST_PASS_PATTERN
}
