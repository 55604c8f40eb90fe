//! Dallas/Maxim 1-Wire CRC-16.
//!
//! The DS2406 appends a CRC-16 to its command responses, transmitted as the
//! bitwise complement of the value it computed, low byte first. Hosts verify
//! by recomputing over the transmitted bytes, inverting, and comparing.

/// Checksum echo read back when no device drives the bus (idle line reads
/// as all-ones).
pub const NO_RESPONSE_ECHO: u16 = 0xFFFF;

const CRC16_POLY: u16 = 0xA001;

/// Compute the 1-Wire CRC-16 over `data`.
///
/// Reflected polynomial `0xA001`, zero initial value, no final xor
/// (CRC-16/ARC). The device echoes the complement of this value; callers
/// comparing against an echo must invert one side first.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ CRC16_POLY;
            } else {
                crc >>= 1;
            }
        }
    }
    crc
}
