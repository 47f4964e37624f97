//! Interrupt-safe shared driver instance.
//!
//! [`SharedSynth`] wraps a [`Synth`] in a
//! [`critical_section::Mutex`] so one instance can be reached from thread
//! mode and from interrupt handlers. Each call runs inside a single critical
//! section and still makes at most one hardware call.
//!
//! ```ignore
//! static SYNTH: SharedSynth<IoTable> = SharedSynth::new();
//!
//! SYNTH.register_io(Some(board_io()))?;
//! SYNTH.init(44_100, 2)?;
//!
//! #[interrupt]
//! fn DMA0() {
//!     let _ = SYNTH.play_buffer(next_block());
//! }
//! ```
//!
//! Hardware callbacks must not call back into the same `SharedSynth`; the
//! inner `RefCell` is already borrowed and the call panics.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::config::SynthConfig;
use crate::driver::{Context, Synth};
use crate::io::SynthIo;
use crate::status::Result;

/// A [`Synth`] guarded by a critical-section mutex.
pub struct SharedSynth<IO> {
    inner: Mutex<RefCell<Synth<IO>>>,
}

impl<IO> SharedSynth<IO> {
    /// Empty driver, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Synth::new())),
        }
    }

    /// Run `f` with exclusive access to the driver.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Synth<IO>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Copy of the current runtime context.
    pub fn context(&self) -> Context {
        self.lock(|synth| synth.context())
    }
}

impl<IO> Default for SharedSynth<IO> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IO> SharedSynth<IO>
where
    IO: SynthIo,
{
    /// See [`Synth::register_io`].
    pub fn register_io(&self, io: Option<IO>) -> Result<()> {
        self.lock(|synth| synth.register_io(io))
    }

    /// See [`Synth::init`].
    pub fn init(&self, sample_rate: u32, channels: u8) -> Result<()> {
        self.lock(|synth| synth.init(sample_rate, channels))
    }

    /// See [`Synth::init_with`].
    pub fn init_with(&self, config: SynthConfig) -> Result<()> {
        self.lock(|synth| synth.init_with(config))
    }

    /// See [`Synth::deinit`].
    pub fn deinit(&self) -> Result<()> {
        self.lock(|synth| synth.deinit())
    }

    /// See [`Synth::reset`].
    pub fn reset(&self) -> Result<()> {
        self.lock(|synth| synth.reset())
    }

    /// See [`Synth::play_buffer`].
    pub fn play_buffer(&self, samples: &[i16]) -> Result<()> {
        self.lock(|synth| synth.play_buffer(samples))
    }

    /// See [`Synth::stop`].
    pub fn stop(&self) -> Result<()> {
        self.lock(|synth| synth.stop())
    }

    /// See [`Synth::set_sample_rate`].
    pub fn set_sample_rate(&self, sample_rate: u32) -> Result<()> {
        self.lock(|synth| synth.set_sample_rate(sample_rate))
    }

    /// See [`Synth::get_sample_rate`].
    pub fn get_sample_rate(&self, out: Option<&mut u32>) -> Result<()> {
        self.lock(|synth| synth.get_sample_rate(out))
    }

    /// See [`Synth::hardware_sample_rate`].
    pub fn hardware_sample_rate(&self) -> Result<u32> {
        self.lock(|synth| synth.hardware_sample_rate())
    }

    /// See [`Synth::set_volume`].
    pub fn set_volume(&self, volume: u8) -> Result<()> {
        self.lock(|synth| synth.set_volume(volume))
    }

    /// See [`Synth::get_volume`].
    pub fn get_volume(&self, out: Option<&mut u8>) -> Result<()> {
        self.lock(|synth| synth.get_volume(out))
    }

    /// See [`Synth::mute`].
    pub fn mute(&self, enable: u8) -> Result<()> {
        self.lock(|synth| synth.mute(enable))
    }

    /// See [`Synth::set_muted`].
    pub fn set_muted(&self, muted: bool) -> Result<()> {
        self.lock(|synth| synth.set_muted(muted))
    }
}
