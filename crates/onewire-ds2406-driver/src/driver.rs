//! The stateful DS2406 driver session.

use tracing::{debug, trace};

use onewire_ds2406_protocol::{
    Channel, ChannelStates, DeviceAddress, NO_RESPONSE_ECHO, READ_STATUS, READ_STATUS_RESPONSE_LEN,
    SampledInputs, SwitchError, SwitchResult, channel_access_frame, decode_sampled_inputs,
    write_status_frame,
};

use crate::bus::OneWireBus;

/// Driver for one DS2406 dual-channel addressable switch.
///
/// The device's Write Status command always sets both output latches at
/// once, so the driver caches the last *commanded* state of each channel to
/// preserve the unaddressed channel when only one is changed. The cache is
/// updated before the bus transaction, not after success confirmation:
/// after a failed write it reflects the last commanded intent, and the true
/// device state is unknown until the next successful exchange.
///
/// Every dual operation walks the same shape:
///
/// ```text
/// Idle ── transmit frame ──► AwaitingEcho
///    echo all-ones ──► NoCommunication
///    echo mismatch ──► ChecksumMismatch
///    echo ok (write) ──► commit byte ──► Success
///    echo ok (read)  ──► stability check ──► NotStable | Success
/// ```
///
/// All failure states are terminal for that call.
pub struct Ds2406<B> {
    bus: B,
    address: DeviceAddress,
    last_output_a: bool,
    last_output_b: bool,
}

impl<B: OneWireBus> Ds2406<B> {
    /// Bind a driver to one device address. Performs no bus I/O; both
    /// cached output states start inactive.
    pub fn new(bus: B, address: DeviceAddress) -> Self {
        Self {
            bus,
            address,
            last_output_a: false,
            last_output_b: false,
        }
    }

    /// The address this session is bound to.
    pub fn address(&self) -> &DeviceAddress {
        &self.address
    }

    /// Last commanded output states (optimistic cache, not confirmed
    /// device state).
    pub fn last_commanded_outputs(&self) -> ChannelStates {
        ChannelStates::new(self.last_output_a, self.last_output_b)
    }

    /// Consume the driver and hand the bus handle back.
    pub fn release(self) -> B {
        self.bus
    }

    /// Deactivate both output sink transistors, leaving both channels high
    /// impedance and usable as inputs. The only state-affecting call
    /// required before the channels can be read.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the underlying dual write.
    pub fn initialize(&mut self) -> SwitchResult<()> {
        self.set_outputs(false, false).map(|_| ())
    }

    /// Command both output latches in one Write Status transaction.
    ///
    /// On success the returned states carry the commanded values, bit 0 =
    /// channel A, bit 1 = channel B.
    ///
    /// # Errors
    ///
    /// [`SwitchError::NoCommunication`] when the checksum echo reads
    /// all-ones, [`SwitchError::ChecksumMismatch`] when the echo does not
    /// match the recomputed CRC-16. The cache keeps the commanded values
    /// either way.
    pub fn set_outputs(&mut self, a_active: bool, b_active: bool) -> SwitchResult<ChannelStates> {
        // Last commanded intent, recorded before the exchange and never
        // rolled back.
        self.last_output_a = a_active;
        self.last_output_b = b_active;

        let frame = write_status_frame(a_active, b_active);
        trace!(frame = ?frame, "write status");

        self.bus.reset();
        self.bus.select(&self.address);
        for &byte in &frame {
            self.bus.write(byte);
        }

        let echoed = self.read_checksum_echo();
        if echoed == NO_RESPONSE_ECHO {
            debug!("write status: no response");
            return Err(SwitchError::NoCommunication);
        }
        self.verify_checksum_echo(&frame, echoed)?;

        // One more byte commits the staged write; the device clocks back
        // its volatile status register, which this driver discards.
        self.bus.write_final(0xFF);
        let _volatile_status = self.bus.read();

        Ok(ChannelStates::new(a_active, b_active))
    }

    /// Command one output latch, preserving the other channel's cached
    /// state. Returns the requested channel's resulting state.
    ///
    /// # Errors
    ///
    /// Propagates the dual write's failure verbatim.
    pub fn set_output(&mut self, channel: Channel, active: bool) -> SwitchResult<bool> {
        let states = match channel {
            Channel::A => self.set_outputs(active, self.last_output_b)?,
            Channel::B => self.set_outputs(self.last_output_a, active)?,
        };
        Ok(states.channel(channel))
    }

    /// Command channel A's output latch.
    ///
    /// # Errors
    ///
    /// Propagates the dual write's failure verbatim.
    pub fn set_channel_a_output(&mut self, active: bool) -> SwitchResult<bool> {
        self.set_output(Channel::A, active)
    }

    /// Command channel B's output latch.
    ///
    /// # Errors
    ///
    /// Propagates the dual write's failure verbatim.
    pub fn set_channel_b_output(&mut self, active: bool) -> SwitchResult<bool> {
        self.set_output(Channel::B, active)
    }

    /// Read both input channels in one Channel Access transaction.
    ///
    /// On success, bit 0 = channel A switched to ground, bit 1 = channel B.
    ///
    /// # Errors
    ///
    /// [`SwitchError::NoCommunication`] when info byte, bits byte and
    /// checksum all read as ones, [`SwitchError::ChecksumMismatch`] on an
    /// integrity failure, [`SwitchError::NotStable`] when either channel's
    /// four samples disagree.
    pub fn inputs(&mut self) -> SwitchResult<ChannelStates> {
        let frame = channel_access_frame();
        trace!(frame = ?frame, "channel access read");

        self.bus.reset();
        self.bus.select(&self.address);
        for &byte in &frame {
            self.bus.write(byte);
        }

        // Channel info byte: consumed for checksum purposes only.
        let info = self.bus.read();
        let bits = self.bus.read();
        let echoed = self.read_checksum_echo();

        if info == 0xFF && bits == 0xFF && echoed == NO_RESPONSE_ECHO {
            debug!("channel access: no response");
            return Err(SwitchError::NoCommunication);
        }

        let covered = [frame[0], frame[1], frame[2], info, bits];
        self.verify_checksum_echo(&covered, echoed)?;

        match decode_sampled_inputs(bits) {
            SampledInputs::Unstable => {
                debug!(bits, "channel access: samples not stable");
                Err(SwitchError::NotStable { bits })
            }
            SampledInputs::Stable(states) => {
                // The device stays in continuous-read mode until reset.
                self.bus.reset();
                Ok(states)
            }
        }
    }

    /// Read one input channel.
    ///
    /// # Errors
    ///
    /// Propagates the dual read's failure verbatim.
    pub fn input(&mut self, channel: Channel) -> SwitchResult<bool> {
        Ok(self.inputs()?.channel(channel))
    }

    /// Read channel A's input.
    ///
    /// # Errors
    ///
    /// Propagates the dual read's failure verbatim.
    pub fn get_channel_a_input(&mut self) -> SwitchResult<bool> {
        self.input(Channel::A)
    }

    /// Read channel B's input.
    ///
    /// # Errors
    ///
    /// Propagates the dual read's failure verbatim.
    pub fn get_channel_b_input(&mut self) -> SwitchResult<bool> {
        self.input(Channel::B)
    }

    /// Raw Read Status dump: the eight status registers followed by the
    /// device's two CRC bytes, returned unvalidated for diagnostics.
    pub fn read_status_registers(&mut self) -> [u8; READ_STATUS_RESPONSE_LEN] {
        self.bus.reset();
        self.bus.select(&self.address);
        self.bus.write_final(READ_STATUS);
        self.bus.write_final(0x00);
        self.bus.write_final(0x00);

        let mut response = [0u8; READ_STATUS_RESPONSE_LEN];
        for slot in &mut response {
            *slot = self.bus.read();
        }
        self.bus.reset();
        response
    }

    /// Two echo bytes, low byte first.
    fn read_checksum_echo(&mut self) -> u16 {
        let lo = self.bus.read();
        let hi = self.bus.read();
        u16::from_le_bytes([lo, hi])
    }

    fn verify_checksum_echo(&mut self, covered: &[u8], echoed: u16) -> SwitchResult<()> {
        let expected = !self.bus.crc16(covered);
        if expected == echoed {
            Ok(())
        } else {
            debug!(expected, actual = echoed, "checksum mismatch");
            Err(SwitchError::ChecksumMismatch {
                expected,
                actual: echoed,
            })
        }
    }
}
