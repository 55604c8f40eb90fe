//! DS2406 protocol error types.

use thiserror::Error;

/// Failures a single DS2406 transaction can report.
///
/// Every failure is terminal for the call that produced it; retry policy
/// belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// The device did not respond: the echoed bytes read back all-ones.
    /// Typically an absent device or a bus fault.
    #[error("no communication: device did not respond on the bus")]
    NoCommunication,

    /// The checksum echoed by the device does not match the inverted
    /// CRC-16 recomputed over the transmitted bytes.
    #[error("CRC-16 mismatch: expected {expected:#06x}, got {actual:#06x}")]
    ChecksumMismatch { expected: u16, actual: u16 },

    /// The four internal samples of at least one input channel disagree.
    /// Transient electrical noise or a switch transition mid-read.
    #[error("input samples not stable: bits byte {bits:#04x}")]
    NotStable { bits: u8 },
}

/// A specialized `Result` type for DS2406 operations.
pub type SwitchResult<T> = Result<T, SwitchError>;
