//! Hardware I/O capability table consumed by the driver.
//!
//! The driver never touches hardware directly. Every effect goes through a
//! [`SynthIo`] implementation supplied by the integration layer, and every
//! slot of that table is optional: a provided method returning `None` means
//! the slot is not populated.
//!
//! ## Slots
//!
//! | Slot | Needed by | When absent |
//! |------|-----------|-------------|
//! | [`init`](SynthIo::init) | [`Synth::init`](crate::Synth::init) | `NotSupported` |
//! | [`deinit`](SynthIo::deinit) | [`Synth::deinit`](crate::Synth::deinit) | skipped |
//! | [`transmit`](SynthIo::transmit) | [`Synth::play_buffer`](crate::Synth::play_buffer) | `NotSupported` |
//! | [`set_sample_rate`](SynthIo::set_sample_rate) | init, rate changes | skipped |
//! | [`get_sample_rate`](SynthIo::get_sample_rate) | [`Synth::hardware_sample_rate`](crate::Synth::hardware_sample_rate) | `NotSupported` |
//! | [`mute`](SynthIo::mute) | [`Synth::mute`](crate::Synth::mute) | skipped |
//!
//! ## Implementations
//!
//! - [`IoTable`] — plain function-pointer slots, for integrations built
//!   around free functions.
//! - [`HalIo`] — SPI bus plus optional mute line over `embedded-hal`
//!   (feature `hal`).

mod table;

#[cfg(feature = "hal")]
mod hal;

pub use table::IoTable;

#[cfg(feature = "hal")]
pub use hal::{HalIo, NoMutePin};

use crate::status::Status;

/// Low-level hardware interface of a synth peripheral.
///
/// All methods have a default returning `None` ("slot not populated"), so an
/// implementation only overrides the capabilities its hardware has.
/// `Some(status)` carries whatever the hardware reported; [`Status::Ok`]
/// means success.
pub trait SynthIo {
    /// Bring up the peripheral.
    fn init(&mut self) -> Option<Status> {
        None
    }

    /// Shut down the peripheral.
    fn deinit(&mut self) -> Option<Status> {
        None
    }

    /// Send raw PCM bytes. The call is complete or failed; there are no
    /// partial writes.
    fn transmit(&mut self, _data: &[u8]) -> Option<Status> {
        None
    }

    /// Program the output sample rate in Hz.
    fn set_sample_rate(&mut self, _sample_rate: u32) -> Option<Status> {
        None
    }

    /// Read back the sample rate the hardware is running at.
    fn get_sample_rate(&mut self) -> Option<Result<u32, Status>> {
        None
    }

    /// Mute (`true`) or unmute (`false`) the output stage.
    fn mute(&mut self, _enable: bool) -> Option<Status> {
        None
    }
}

impl<T: SynthIo + ?Sized> SynthIo for &mut T {
    fn init(&mut self) -> Option<Status> {
        (**self).init()
    }

    fn deinit(&mut self) -> Option<Status> {
        (**self).deinit()
    }

    fn transmit(&mut self, data: &[u8]) -> Option<Status> {
        (**self).transmit(data)
    }

    fn set_sample_rate(&mut self, sample_rate: u32) -> Option<Status> {
        (**self).set_sample_rate(sample_rate)
    }

    fn get_sample_rate(&mut self) -> Option<Result<u32, Status>> {
        (**self).get_sample_rate()
    }

    fn mute(&mut self, enable: bool) -> Option<Status> {
        (**self).mute(enable)
    }
}
