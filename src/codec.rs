//! Frame encoding and response decoding.
//!
//! Every 16-bit word on the wire, in either direction, is sent MSB first and
//! followed by its [`checksum`](crate::checksum::checksum) byte. Command
//! words are the exception: they carry no checksum.

use crate::{Error, checksum};

/// Bytes per data word on the wire (MSB, LSB, CRC)
pub const WORD_LEN: usize = 3;
/// Largest number of argument words any command takes
pub const MAX_ARG_WORDS: usize = 2;
/// Largest number of data words any command returns
pub const MAX_RESPONSE_WORDS: usize = 3;
/// Largest command frame: command word plus checksummed arguments
pub const MAX_FRAME_LEN: usize = 2 + MAX_ARG_WORDS * WORD_LEN;
/// Largest response frame
pub const MAX_RESPONSE_LEN: usize = MAX_RESPONSE_WORDS * WORD_LEN;

/// A command word plus its checksummed argument words, ready to be written
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CommandFrame {
    bytes: [u8; MAX_FRAME_LEN],
    len: usize,
}

impl CommandFrame {
    /// Build the frame for `command`, appending a checksum after each argument word
    pub fn new<E>(command: u16, args: &[u16]) -> Result<Self, Error<E>> {
        if args.len() > MAX_ARG_WORDS {
            return Err(Error::InvalidParameter);
        }
        let mut bytes = [0u8; MAX_FRAME_LEN];
        bytes[0..2].copy_from_slice(&command.to_be_bytes());
        for (ii, arg) in args.iter().enumerate() {
            let start = 2 + ii * WORD_LEN;
            bytes[start..start + 2].copy_from_slice(&arg.to_be_bytes());
            bytes[start + 2] = checksum::word_checksum(*arg);
        }
        Ok(Self { bytes, len: 2 + args.len() * WORD_LEN })
    }

    /// The 16-bit command word
    pub fn command(&self) -> u16 {
        u16::from_be_bytes([self.bytes[0], self.bytes[1]])
    }

    /// Argument bytes following the command word, checksums included
    pub fn args(&self) -> &[u8] {
        &self.bytes[2..self.len]
    }

    /// The whole frame as written to the bus
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Verify and unpack a response into `out`.
///
/// `bytes` must hold exactly `out.len()` checksummed words. `out` is left
/// untouched unless every word passes its checksum.
pub fn decode_words<E>(bytes: &[u8], out: &mut [u16]) -> Result<(), Error<E>> {
    if out.len() > MAX_RESPONSE_WORDS || bytes.len() != out.len() * WORD_LEN {
        return Err(Error::InvalidParameter);
    }
    let mut words = [0u16; MAX_RESPONSE_WORDS];
    for (ii, chunk) in bytes.chunks_exact(WORD_LEN).enumerate() {
        if !checksum::verify(chunk[0], chunk[1], chunk[2]) {
            return Err(Error::ChecksumMismatch);
        }
        words[ii] = u16::from_be_bytes([chunk[0], chunk[1]]);
    }
    out.copy_from_slice(&words[..out.len()]);
    Ok(())
}

/// Pack `words` with their checksums, the way the device sends them
pub fn encode_words(words: &[u16], out: &mut [u8]) -> usize {
    let mut len = 0;
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(WORD_LEN)) {
        chunk[0..2].copy_from_slice(&word.to_be_bytes());
        chunk[2] = checksum::word_checksum(*word);
        len += WORD_LEN;
    }
    len
}
