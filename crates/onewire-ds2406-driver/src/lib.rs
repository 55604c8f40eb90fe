//! DS2406 dual-channel addressable switch driver.
//!
//! A [`Ds2406`] is a session bound to one device address on one 1-Wire bus.
//! The bus itself is an injected capability ([`OneWireBus`]) rather than an
//! owned resource, so the driver runs unchanged against real transports and
//! against a simulated device in tests.
//!
//! Every operation is synchronous and single-shot: it performs the full
//! protocol exchange (command frame, checksum-echo verification and, for
//! reads, the multi-sample stability check) and returns `Ok` or one of the
//! three failure kinds in [`SwitchError`]. No retry is attempted
//! internally; retry and debounce policy belong to the caller.
//!
//! Frame construction and decoding live in `onewire-ds2406-protocol`,
//! re-exported here as [`protocol`].

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod bus;
pub mod driver;

pub use onewire_ds2406_protocol as protocol;

pub use bus::OneWireBus;
pub use driver::Ds2406;
pub use protocol::{Channel, ChannelStates, DeviceAddress, SwitchError, SwitchResult};
