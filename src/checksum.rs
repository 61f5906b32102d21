//! CRC-8 used on every data word exchanged with the sensor.
//!
//! Polynomial 0x31 (x⁸ + x⁵ + x⁴ + 1), initial value 0xFF, no reflection and
//! no final XOR. The `crc` crate catalogues this as CRC-8/NRSC-5.

use ::crc::{Crc, CRC_8_NRSC_5};

const CRC: Crc<u8> = Crc::<u8>::new(&CRC_8_NRSC_5);

/// Compute the checksum of one data word given as its two bytes (MSB first)
pub fn checksum(msb: u8, lsb: u8) -> u8 {
    CRC.checksum(&[msb, lsb])
}

/// Check a data word against the checksum byte that followed it on the wire
pub fn verify(msb: u8, lsb: u8, check: u8) -> bool {
    checksum(msb, lsb) == check
}

/// Checksum of a 16-bit word
pub fn word_checksum(word: u16) -> u8 {
    let [msb, lsb] = word.to_be_bytes();
    checksum(msb, lsb)
}
