//! Core DS2406 types: device address, channel identifiers, channel states.

/// 1-Wire family code of the DS2406.
pub const FAMILY_CODE: u8 = 0x12;

/// 8-byte 1-Wire ROM identifier of one device on the bus.
///
/// Immutable after construction. Byte 0 is the family code, bytes 1..7 the
/// serial number, byte 7 the ROM CRC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceAddress([u8; 8]);

impl DeviceAddress {
    #[must_use]
    pub const fn new(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    #[must_use]
    pub const fn family_code(&self) -> u8 {
        self.0[0]
    }

    /// Whether the ROM's family code identifies a DS2406.
    #[must_use]
    pub const fn is_ds2406(&self) -> bool {
        self.family_code() == FAMILY_CODE
    }
}

impl From<[u8; 8]> for DeviceAddress {
    fn from(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }
}

/// One of the two switch lines the device exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    A,
    B,
}

impl Channel {
    /// Bit index of this channel in a combined 2-bit payload.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }
}

/// Combined state of both channels.
///
/// `true` means active: for outputs, the sink transistor conducts to
/// ground; for inputs, the line is currently switched to ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelStates {
    pub a: bool,
    pub b: bool,
}

impl ChannelStates {
    /// Both channels inactive (high impedance).
    pub const INACTIVE: Self = Self { a: false, b: false };

    #[must_use]
    pub const fn new(a: bool, b: bool) -> Self {
        Self { a, b }
    }

    /// Pack into the 2-bit payload: bit 0 = channel A, bit 1 = channel B.
    #[must_use]
    pub const fn bits(self) -> u8 {
        (self.a as u8) | ((self.b as u8) << 1)
    }

    /// Unpack from the 2-bit payload; bits above bit 1 are ignored.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            a: bits & 0x01 != 0,
            b: bits & 0x02 != 0,
        }
    }

    /// State of one channel.
    #[must_use]
    pub const fn channel(self, channel: Channel) -> bool {
        match channel {
            Channel::A => self.a,
            Channel::B => self.b,
        }
    }
}
