use crate::codec::{CommandFrame, MAX_RESPONSE_LEN, encode_words};
use crate::hw_def::Command;
use crate::transport::Transport;
use crate::{Config, Sgp30, checksum};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBusError {
    Nack,
    BusInit,
    BusDeinit,
    InvalidTest,
}

/// Simulated SGP30 that answers every command of the fixed table and records the traffic
#[derive(Debug)]
pub struct FakeSgp30 {
    pub bus_open: bool,
    pub fail_bus_init: bool,
    pub fail_bus_deinit: bool,
    pub fail_writes: bool,
    pub fail_reads: bool,
    pub corrupt_next_read: bool,

    pub air_quality: [u16; 2],
    pub raw: [u16; 2],
    pub baseline: [u16; 2],
    pub tvoc_inceptive: u16,
    pub feature_set: u16,
    pub serial: [u16; 3],
    pub self_test: u16,
    pub humidity_writes: Vec<u16>,
    pub iaq_running: bool,

    pub frames: Vec<Vec<u8>>,
    pub delays: Vec<u32>,
    pub bus_inits: usize,
    pub bus_deinits: usize,
    pending: Vec<u16>,
}

impl Default for FakeSgp30 {
    fn default() -> Self {
        Self {
            bus_open: false,
            fail_bus_init: false,
            fail_bus_deinit: false,
            fail_writes: false,
            fail_reads: false,
            corrupt_next_read: false,
            air_quality: [400, 0],
            raw: [13119, 18945],
            baseline: [0, 0],
            tvoc_inceptive: 0,
            feature_set: 0x0022,
            serial: [0x0000, 0x0123, 0xABCD],
            self_test: 0xD400,
            humidity_writes: Vec::new(),
            iaq_running: false,
            frames: Vec::new(),
            delays: Vec::new(),
            bus_inits: 0,
            bus_deinits: 0,
            pending: Vec::new(),
        }
    }
}

impl FakeSgp30 {
    pub fn clear_log(&mut self) {
        self.frames.clear();
        self.delays.clear();
    }

    fn arg_words(frame: &CommandFrame) -> Result<Vec<u16>, FakeBusError> {
        let mut words = Vec::new();
        for chunk in frame.args().chunks(3) {
            if chunk.len() != 3 || !checksum::verify(chunk[0], chunk[1], chunk[2]) {
                return Err(FakeBusError::InvalidTest);
            }
            words.push(u16::from_be_bytes([chunk[0], chunk[1]]));
        }
        Ok(words)
    }
}

impl Transport for FakeSgp30 {
    type Error = FakeBusError;

    fn bus_init(&mut self) -> Result<(), Self::Error> {
        self.bus_inits += 1;
        if self.fail_bus_init {
            return Err(FakeBusError::BusInit);
        }
        self.bus_open = true;
        Ok(())
    }

    fn bus_deinit(&mut self) -> Result<(), Self::Error> {
        self.bus_deinits += 1;
        if self.fail_bus_deinit {
            return Err(FakeBusError::BusDeinit);
        }
        self.bus_open = false;
        Ok(())
    }

    fn write_command(&mut self, frame: &CommandFrame) -> Result<(), Self::Error> {
        if !self.bus_open {
            return Err(FakeBusError::InvalidTest);
        }
        self.frames.push(frame.as_bytes().to_vec());
        if self.fail_writes {
            return Err(FakeBusError::Nack);
        }
        let args = Self::arg_words(frame)?;
        self.pending.clear();
        let code = frame.command();
        if code == Command::SoftReset.code() {
            self.iaq_running = false;
            self.baseline = [0, 0];
        } else if code == Command::IaqInit.code() {
            self.iaq_running = true;
        } else if code == Command::MeasureIaq.code() {
            self.pending.extend_from_slice(&self.air_quality);
        } else if code == Command::MeasureRaw.code() {
            self.pending.extend_from_slice(&self.raw);
        } else if code == Command::GetIaqBaseline.code() {
            self.pending.extend_from_slice(&self.baseline);
        } else if code == Command::SetIaqBaseline.code() {
            // sent as tvoc, co2eq; stored as co2eq, tvoc
            self.baseline = [args[1], args[0]];
        } else if code == Command::SetTvocBaseline.code() {
            self.baseline[1] = args[0];
        } else if code == Command::SetAbsoluteHumidity.code() {
            self.humidity_writes.push(args[0]);
        } else if code == Command::GetFeatureSet.code() {
            self.pending.push(self.feature_set);
        } else if code == Command::GetSerialId.code() {
            self.pending.extend_from_slice(&self.serial);
        } else if code == Command::MeasureTest.code() {
            self.pending.push(self.self_test);
        } else if code == Command::GetTvocInceptiveBaseline.code() {
            self.pending.push(self.tvoc_inceptive);
        } else {
            // unknown commands echo their arguments back
            self.pending.extend_from_slice(&args);
        }
        Ok(())
    }

    fn read_response(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
        if self.fail_reads {
            return Err(FakeBusError::Nack);
        }
        let mut wire = [0u8; MAX_RESPONSE_LEN];
        let len = encode_words(&self.pending, &mut wire);
        if len != buf.len() {
            return Err(FakeBusError::InvalidTest);
        }
        buf.copy_from_slice(&wire[..len]);
        if self.corrupt_next_read {
            self.corrupt_next_read = false;
            buf[len - 1] ^= 0x01;
        }
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays.push(ms);
    }
}

/// Handle in `Initialized` with an empty traffic log
pub fn initialized(fake: FakeSgp30) -> Sgp30<FakeSgp30> {
    let mut sensor = Sgp30::new(fake, Config::default());
    sensor.init().unwrap();
    sensor.transport.clear_log();
    sensor
}

/// Handle in `IaqActive` with an empty traffic log
pub fn iaq_active(fake: FakeSgp30) -> Sgp30<FakeSgp30> {
    let mut sensor = initialized(fake);
    sensor.iaq_init().unwrap();
    sensor.transport.clear_log();
    sensor
}
