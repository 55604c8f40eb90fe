//! DS2406 command frame construction and checksum-echo verification.
//!
//! Write Status transaction layout (host → device):
//! - Byte 0: opcode `0x55`
//! - Bytes 1-2: status register offset `0x07, 0x00`
//! - Byte 3: encoded status byte
//!
//! The device answers with the complemented CRC-16 over those four bytes,
//! low byte first, then expects a single all-ones byte to commit the staged
//! write and clocks back its volatile status register.
//!
//! Channel Access read transaction layout (host → device):
//! - Byte 0: opcode `0xF5`
//! - Bytes 1-2: control bytes `0x4D, 0xFF` (both channels, interleaved read)
//!
//! The device answers with a channel-info byte, the sampled bits byte, and
//! the complemented CRC-16 over all five bytes.

use crate::crc::crc16;
use crate::error::{SwitchError, SwitchResult};

/// Write Status command opcode.
pub const WRITE_STATUS: u8 = 0x55;
/// Read Status command opcode.
pub const READ_STATUS: u8 = 0xAA;
/// Channel Access command opcode.
pub const CHANNEL_ACCESS: u8 = 0xF5;

/// Bytes returned by a full Read Status dump: eight status registers plus
/// the two CRC bytes, read back raw.
pub const READ_STATUS_RESPONSE_LEN: usize = 10;

/// Status register offset transmitted with every Write Status command.
const STATUS_OFFSET: [u8; 2] = [0x07, 0x00];

/// Reserved low nibble of the status byte, always written as ones.
const STATUS_RESERVED: u8 = 0x0F;

/// Status bit set when PIO-A's sink transistor is off (channel inactive).
const STATUS_A_INACTIVE: u8 = 1 << 5;
/// Status bit set when PIO-B's sink transistor is off (channel inactive).
const STATUS_B_INACTIVE: u8 = 1 << 6;

/// Control bytes selecting interleaved continuous read of both channels.
const CHANNEL_ACCESS_CONTROL: [u8; 2] = [0x4D, 0xFF];

/// Encode the status byte commanding both output latches.
///
/// The device's convention is inverted: a logical "active" output maps to a
/// cleared bit. The low nibble is reserved and fixed.
#[must_use]
pub const fn encode_status_byte(a_active: bool, b_active: bool) -> u8 {
    let mut status = STATUS_RESERVED;
    if !a_active {
        status |= STATUS_A_INACTIVE;
    }
    if !b_active {
        status |= STATUS_B_INACTIVE;
    }
    status
}

/// Build the 4-byte Write Status frame for the requested output states.
#[must_use]
pub const fn write_status_frame(a_active: bool, b_active: bool) -> [u8; 4] {
    [
        WRITE_STATUS,
        STATUS_OFFSET[0],
        STATUS_OFFSET[1],
        encode_status_byte(a_active, b_active),
    ]
}

/// Build the 3-byte Channel Access frame selecting the dual-channel
/// interleaved read mode.
#[must_use]
pub const fn channel_access_frame() -> [u8; 3] {
    [
        CHANNEL_ACCESS,
        CHANNEL_ACCESS_CONTROL[0],
        CHANNEL_ACCESS_CONTROL[1],
    ]
}

/// The checksum echo a responding device produces for `frame`: the bitwise
/// complement of the CRC-16 over the transmitted bytes.
#[must_use]
pub fn expected_checksum_echo(frame: &[u8]) -> u16 {
    !crc16(frame)
}

/// Verify a device's checksum echo against the bytes it covers.
///
/// # Errors
///
/// Returns [`SwitchError::ChecksumMismatch`] carrying both values when the
/// echo does not match.
pub fn verify_checksum_echo(frame: &[u8], echoed: u16) -> SwitchResult<()> {
    let expected = expected_checksum_echo(frame);
    if expected == echoed {
        Ok(())
    } else {
        Err(SwitchError::ChecksumMismatch {
            expected,
            actual: echoed,
        })
    }
}
