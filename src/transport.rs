//! Bus capability set the driver runs on.
//!
//! The driver never touches a bus directly; it asks a [`Transport`] to open
//! and close the bus, write command frames, read raw responses and wait.
//! [`I2cTransport`] implements it for any `embedded-hal` I²C bus and delay.

use crate::codec::CommandFrame;

use core::fmt::Debug;

/// Everything the driver needs from the platform
pub trait Transport {
    /// Bus failure, surfaced as [`crate::Error::Transport`]
    type Error: Debug;

    /// Open the bus
    fn bus_init(&mut self) -> Result<(), Self::Error>;

    /// Release the bus
    fn bus_deinit(&mut self) -> Result<(), Self::Error>;

    /// Write a command word and its checksummed arguments
    fn write_command(&mut self, frame: &CommandFrame) -> Result<(), Self::Error>;

    /// Read `buf.len()` raw response bytes
    fn read_response(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

#[cfg(feature = "blocking")]
mod i2c {
    use super::Transport;
    use crate::codec::CommandFrame;
    use crate::hw_def::*;

    use embedded_hal::{delay::DelayNs, i2c::I2c};

    /// [`Transport`] over a blocking `embedded-hal` I²C bus
    #[derive(Debug)]
    pub struct I2cTransport<I2C, Delay> {
        i2c: I2C,
        delay: Delay,
        i2c_addr: I2cAddr,
    }

    impl<I2C, Delay> I2cTransport<I2C, Delay>
    where
        I2C: I2c,
        Delay: DelayNs,
    {
        /// Wrap a bus and a delay provider
        pub fn new(i2c: I2C, delay: Delay, i2c_addr: I2cAddr) -> Self {
            Self { i2c, delay, i2c_addr }
        }

        /// Give back the bus and the delay provider
        pub fn release(self) -> (I2C, Delay) {
            (self.i2c, self.delay)
        }
    }

    impl<I2C, Delay> Transport for I2cTransport<I2C, Delay>
    where
        I2C: I2c,
        Delay: DelayNs,
    {
        type Error = I2C::Error;

        // embedded-hal buses are handed over already configured
        fn bus_init(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn bus_deinit(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write_command(&mut self, frame: &CommandFrame) -> Result<(), Self::Error> {
            if frame.command() == Command::SoftReset.code() {
                trace!("sgp30: general call reset");
                return self.i2c.write(GENERAL_CALL_ADDR, &[GENERAL_CALL_RESET_BYTE]);
            }
            self.i2c.write(self.i2c_addr.as_u8(), frame.as_bytes())
        }

        fn read_response(&mut self, buf: &mut [u8]) -> Result<(), Self::Error> {
            self.i2c.read(self.i2c_addr.as_u8(), buf)
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delay.delay_ms(ms);
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use embedded_hal::i2c::ErrorKind;
        use embedded_hal_mock::eh1::delay::NoopDelay;
        use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

        #[test]
        fn frames_go_to_sensor_address() {
            let expectations = [
                Transaction::write(0x58, vec![0x20, 0x61, 0x0C, 0xAF, 0xE7]),
                Transaction::read(0x58, vec![0xD4, 0x00, 0xC6]),
            ];
            let mut transport =
                I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new(), I2cAddr::Addr58);
            let frame = CommandFrame::new::<ErrorKind>(0x2061, &[0x0CAF]).unwrap();
            transport.write_command(&frame).unwrap();
            let mut buf = [0u8; 3];
            transport.read_response(&mut buf).unwrap();
            assert_eq!(buf, [0xD4, 0x00, 0xC6]);
            let (mut i2c, _) = transport.release();
            i2c.done();
        }

        #[test]
        fn soft_reset_is_general_call() {
            let expectations = [Transaction::write(0x00, vec![0x06])];
            let mut transport =
                I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new(), I2cAddr::Addr58);
            let frame = CommandFrame::new::<ErrorKind>(0x0006, &[]).unwrap();
            transport.write_command(&frame).unwrap();
            let (mut i2c, _) = transport.release();
            i2c.done();
        }

        #[test]
        fn custom_address() {
            let expectations = [Transaction::write(0x59, vec![0x20, 0x03])];
            let mut transport =
                I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new(), I2cAddr::Other(0x59));
            let frame = CommandFrame::new::<ErrorKind>(0x2003, &[]).unwrap();
            transport.write_command(&frame).unwrap();
            let (mut i2c, _) = transport.release();
            i2c.done();
        }

        #[test]
        fn bus_errors_pass_through() {
            let expectations = [Transaction::write(0x58, vec![0x20, 0x08]).with_error(ErrorKind::Other)];
            let mut transport =
                I2cTransport::new(I2cMock::new(&expectations), NoopDelay::new(), I2cAddr::Addr58);
            let frame = CommandFrame::new::<ErrorKind>(0x2008, &[]).unwrap();
            assert_eq!(transport.write_command(&frame), Err(ErrorKind::Other));
            let (mut i2c, _) = transport.release();
            i2c.done();
        }
    }
}

#[cfg(feature = "blocking")]
pub use i2c::I2cTransport;
