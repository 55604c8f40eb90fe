//! The 1-Wire bus capability consumed by the driver.

use onewire_ds2406_protocol::{DeviceAddress, crc16};

/// Byte-level access to a 1-Wire bus master.
///
/// The driver assumes uncontended access for the duration of one call
/// (reset, select, command sequence, final read) and performs no locking
/// itself; serializing multiple devices or callers on one bus is the
/// transport layer's responsibility.
///
/// All methods block until the bus transaction completes. No timeouts are
/// specified at this level: a transport that blocks forever blocks the
/// driver forever. An absent device is still detected, because an undriven
/// bus reads as all-ones and the driver treats an all-ones checksum echo as
/// [`SwitchError`](onewire_ds2406_protocol::SwitchError)`::NoCommunication`.
pub trait OneWireBus {
    /// Issue a bus reset, starting a new transaction.
    fn reset(&mut self);

    /// Address one device for the commands that follow.
    fn select(&mut self, address: &DeviceAddress);

    /// Send one byte.
    fn write(&mut self, byte: u8);

    /// Send one byte, signalling the transport that no more bytes follow
    /// and the device should act on the command (e.g. hold power for a
    /// staged write to commit).
    fn write_final(&mut self, byte: u8);

    /// Blocking read of one byte from the selected device.
    fn read(&mut self) -> u8;

    /// The protocol-mandated CRC-16 over `data`.
    ///
    /// Defaults to the software implementation from the protocol crate;
    /// transports with a hardware CRC engine may override.
    fn crc16(&mut self, data: &[u8]) -> u16 {
        crc16(data)
    }
}

impl<B: OneWireBus + ?Sized> OneWireBus for &mut B {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn select(&mut self, address: &DeviceAddress) {
        (**self).select(address);
    }

    fn write(&mut self, byte: u8) {
        (**self).write(byte);
    }

    fn write_final(&mut self, byte: u8) {
        (**self).write_final(byte);
    }

    fn read(&mut self) -> u8 {
        (**self).read()
    }

    fn crc16(&mut self, data: &[u8]) -> u16 {
        (**self).crc16(data)
    }
}
