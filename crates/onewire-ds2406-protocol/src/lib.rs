//! DS2406 dual-channel addressable switch protocol.
//!
//! This crate is intentionally I/O-free and allocation-free. It provides
//! pure functions and types for the DS2406's byte-level command protocol
//! that can be tested without hardware or a real 1-Wire transport.
//!
//! The DS2406 exposes two switch lines, PIO-A and PIO-B, each separately
//! readable (input) and writable (output sink). This crate covers:
//! - Write Status (`0x55`) frame construction and status-byte encoding
//! - Channel Access (`0xF5`) read frame and multi-sample input decoding
//! - Dallas/Maxim CRC-16 computation and checksum-echo verification
//!
//! The stateful transaction logic lives in `onewire-ds2406-driver`.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod commands;
pub mod crc;
pub mod error;
pub mod input;
pub mod types;

pub use commands::{
    CHANNEL_ACCESS, READ_STATUS, READ_STATUS_RESPONSE_LEN, WRITE_STATUS, channel_access_frame,
    encode_status_byte, expected_checksum_echo, verify_checksum_echo, write_status_frame,
};
pub use crc::{NO_RESPONSE_ECHO, crc16};
pub use error::{SwitchError, SwitchResult};
pub use input::{CHANNEL_A_SAMPLES, CHANNEL_B_SAMPLES, SampledInputs, decode_sampled_inputs};
pub use types::{Channel, ChannelStates, DeviceAddress, FAMILY_CODE};
