//! Multi-sample input decoding for the Channel Access read.
//!
//! In the dual-channel interleaved mode the device samples each input four
//! times and packs the samples into one byte, alternating between channels
//! starting with PIO-A in bit 0. Channel A therefore occupies the even bit
//! positions (mask `0x55`) and channel B the odd ones (mask `0xAA`).
//!
//! A channel's reading is trusted only when all four of its samples agree;
//! anything else indicates noise or a switch transition captured mid-read.

use crate::types::ChannelStates;

/// Bit positions holding channel A's four samples.
pub const CHANNEL_A_SAMPLES: u8 = 0x55;
/// Bit positions holding channel B's four samples.
pub const CHANNEL_B_SAMPLES: u8 = 0xAA;

/// Outcome of decoding one sampled bits byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampledInputs {
    /// All four samples agreed for both channels.
    Stable(ChannelStates),
    /// At least one channel's samples disagree; the reading is untrusted.
    Unstable,
}

/// Whether one channel's 4-sample group is all-set or all-clear.
const fn group_stable(bits: u8, mask: u8) -> bool {
    let group = bits & mask;
    group == mask || group == 0
}

/// Decode the sampled bits byte from a Channel Access read.
///
/// The device reports switched-to-ground as logic 0 on the wire, so the
/// stable value is the inverted byte masked to the low two bits: bit 0 =
/// channel A active, bit 1 = channel B active.
#[must_use]
pub const fn decode_sampled_inputs(bits: u8) -> SampledInputs {
    if !group_stable(bits, CHANNEL_A_SAMPLES) || !group_stable(bits, CHANNEL_B_SAMPLES) {
        return SampledInputs::Unstable;
    }
    SampledInputs::Stable(ChannelStates::from_bits(!bits & 0x03))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_both_inactive() {
        // All samples high: neither line is switched to ground.
        assert_eq!(
            decode_sampled_inputs(0xFF),
            SampledInputs::Stable(ChannelStates::new(false, false))
        );
    }

    #[test]
    fn test_decode_both_active() {
        assert_eq!(
            decode_sampled_inputs(0x00),
            SampledInputs::Stable(ChannelStates::new(true, true))
        );
    }

    #[test]
    fn test_decode_only_a_active() {
        // A samples (even bits) all clear, B samples (odd bits) all set.
        assert_eq!(
            decode_sampled_inputs(0xAA),
            SampledInputs::Stable(ChannelStates::new(true, false))
        );
    }

    #[test]
    fn test_decode_only_b_active() {
        assert_eq!(
            decode_sampled_inputs(0x55),
            SampledInputs::Stable(ChannelStates::new(false, true))
        );
    }

    #[test]
    fn test_decode_mixed_group_is_unstable() {
        // 0xA9: the even-bit group reads 0x01, neither all-set nor
        // all-clear.
        assert_eq!(decode_sampled_inputs(0xA9), SampledInputs::Unstable);
        assert_eq!(decode_sampled_inputs(0xFE), SampledInputs::Unstable);
        assert_eq!(decode_sampled_inputs(0x01), SampledInputs::Unstable);
    }

    #[test]
    fn test_unstable_in_one_group_never_partial_success() {
        // Even with a perfectly stable B group, a mixed A group rejects
        // the whole reading.
        let bits = 0xAA | 0x04;
        assert_eq!(decode_sampled_inputs(bits), SampledInputs::Unstable);
    }
}
