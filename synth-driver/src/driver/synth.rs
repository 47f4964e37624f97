//! Driver context and the operations that forward to the I/O table.
//!
//! The driver is generic over any [`SynthIo`] implementation and holds no
//! global state: each [`Synth`] is one device instance.
//!
//! # Example
//!
//! ```ignore
//! let mut synth = Synth::with_io(io);
//! synth.init(44_100, 2)?;    // hardware init + sample rate
//! synth.set_volume(60)?;
//! synth.play_buffer(&pcm)?;  // pcm.len() * 2 bytes to transmit
//! ```
//!
//! # Concurrency
//!
//! Every operation runs to completion on the caller's thread and makes at
//! most one hardware call. Mutating operations take `&mut self`; callers
//! sharing one instance across contexts (e.g. with an interrupt handler)
//! must serialize access, for instance through
//! [`SharedSynth`](crate::SharedSynth).

use crate::config::SynthConfig;
use crate::control::SynthControl;
use crate::constants::{DEFAULT_VOLUME, MAX_VOLUME};
use crate::io::SynthIo;
use crate::status::{Result, Status, SynthError};

use super::pcm;

// ── Context ────────────────────────────────────────────────────────────────

/// Runtime state of one driver instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Context {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Channel count given at init.
    pub channels: u8,
    /// Volume, always within `0..=100`.
    pub volume: u8,
    /// Mute flag as last requested.
    pub muted: bool,
    /// Set by a successful [`Synth::init`], cleared by [`Synth::deinit`].
    pub initialized: bool,
}

impl Context {
    /// Fully reset context, as left by [`Synth::deinit`].
    pub const ZERO: Context = Context {
        sample_rate: 0,
        channels: 0,
        volume: 0,
        muted: false,
        initialized: false,
    };
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// Synth peripheral driver.
///
/// Holds the registered I/O table (if any) and the runtime [`Context`].
#[derive(Debug)]
pub struct Synth<IO> {
    io: Option<IO>,
    ctx: Context,
}

impl<IO> Synth<IO> {
    /// Driver with no I/O table and a zeroed context.
    pub const fn new() -> Self {
        Self {
            io: None,
            ctx: Context::ZERO,
        }
    }

    /// Copy of the current runtime context.
    pub fn context(&self) -> Context {
        self.ctx
    }

    /// Whether the last [`init`](Self::init) succeeded and no
    /// [`deinit`](Self::deinit) followed.
    pub fn is_initialized(&self) -> bool {
        self.ctx.initialized
    }

    /// Cached output sample rate (0 before the first init).
    pub fn sample_rate(&self) -> u32 {
        self.ctx.sample_rate
    }

    /// Channel count given at init.
    pub fn channels(&self) -> u8 {
        self.ctx.channels
    }

    /// Current volume (0–100).
    pub fn volume(&self) -> u8 {
        self.ctx.volume
    }

    /// Whether output is muted.
    pub fn is_muted(&self) -> bool {
        self.ctx.muted
    }

    /// Write the cached sample rate into `out`.
    ///
    /// Fails with [`SynthError::InvalidArgument`] when `out` is absent;
    /// otherwise always succeeds, initialized or not.
    pub fn get_sample_rate(&self, out: Option<&mut u32>) -> Result<()> {
        let out = out.ok_or(SynthError::InvalidArgument)?;
        *out = self.ctx.sample_rate;
        Ok(())
    }

    /// Write the current volume into `out`.
    ///
    /// Same contract as [`get_sample_rate`](Self::get_sample_rate).
    pub fn get_volume(&self, out: Option<&mut u8>) -> Result<()> {
        let out = out.ok_or(SynthError::InvalidArgument)?;
        *out = self.ctx.volume;
        Ok(())
    }

    /// Registered I/O table, if any.
    pub fn io(&self) -> Option<&IO> {
        self.io.as_ref()
    }

    /// Mutable access to the registered I/O table, if any.
    pub fn io_mut(&mut self) -> Option<&mut IO> {
        self.io.as_mut()
    }

    /// Consume the driver and give back the I/O table.
    pub fn release(self) -> Option<IO> {
        self.io
    }
}

impl<IO> Default for Synth<IO> {
    fn default() -> Self {
        Self::new()
    }
}

impl<IO> Synth<IO>
where
    IO: SynthIo,
{
    /// Driver with `io` already registered.
    pub fn with_io(io: IO) -> Self {
        Self {
            io: Some(io),
            ctx: Context::ZERO,
        }
    }

    // ── Registration ───────────────────────────────────────────────────

    /// Replace the I/O table wholesale.
    ///
    /// `None` fails with [`SynthError::InvalidArgument`] and keeps the
    /// current table. No hardware call is made.
    pub fn register_io(&mut self, io: Option<IO>) -> Result<()> {
        let io = io.ok_or(SynthError::InvalidArgument)?;
        self.io = Some(io);
        log::debug!("synth: I/O table registered");
        Ok(())
    }

    // ── Init / deinit ──────────────────────────────────────────────────

    /// Initialize the peripheral.
    ///
    /// Calls the hardware `init` slot; on success stores `sample_rate` and
    /// `channels`, resets volume to [`DEFAULT_VOLUME`], unmutes, marks the
    /// driver initialized, then pushes the sample rate to hardware when the
    /// table supports it (best effort, result not surfaced).
    ///
    /// Calling it again repeats the whole sequence.
    ///
    /// # Errors
    ///
    /// - [`SynthError::NotSupported`] when no table is registered or it has
    ///   no `init` slot.
    /// - [`SynthError::Hardware`] when `init` reports failure; the driver is
    ///   left uninitialized.
    pub fn init(&mut self, sample_rate: u32, channels: u8) -> Result<()> {
        let io = self.io.as_mut().ok_or(SynthError::NotSupported)?;
        let status = io.init().ok_or(SynthError::NotSupported)?;

        if let Err(e) = status.into_result() {
            self.ctx.initialized = false;
            log::warn!("synth: hardware init failed ({status})");
            return Err(e);
        }

        self.ctx = Context {
            sample_rate,
            channels,
            volume: DEFAULT_VOLUME,
            muted: false,
            initialized: true,
        };
        best_effort("set_sample_rate", io.set_sample_rate(sample_rate));

        log::debug!("synth: initialized at {sample_rate} Hz, {channels} channel(s)");
        Ok(())
    }

    /// [`init`](Self::init) from a [`SynthConfig`].
    pub fn init_with(&mut self, config: SynthConfig) -> Result<()> {
        self.init(config.sample_rate, config.channels)
    }

    /// Shut down the peripheral.
    ///
    /// Calls the hardware `deinit` slot when present (its result is
    /// ignored), then zeroes the whole context. Always succeeds, even with
    /// no table registered.
    pub fn deinit(&mut self) -> Result<()> {
        if let Some(io) = self.io.as_mut() {
            best_effort("deinit", io.deinit());
        }
        self.ctx = Context::ZERO;
        log::debug!("synth: deinitialized");
        Ok(())
    }

    /// Re-run deinit then init with the cached sample rate and channels.
    ///
    /// Volume and mute return to their init defaults.
    ///
    /// # Errors
    ///
    /// [`SynthError::NotInitialized`] before a successful init, otherwise
    /// whatever [`init`](Self::init) reports.
    pub fn reset(&mut self) -> Result<()> {
        if !self.ctx.initialized {
            return Err(SynthError::NotInitialized);
        }
        let Context {
            sample_rate,
            channels,
            ..
        } = self.ctx;
        self.deinit()?;
        self.init(sample_rate, channels)
    }

    // ── Playback ───────────────────────────────────────────────────────

    /// Send a buffer of signed 16-bit PCM samples to the `transmit` slot.
    ///
    /// The samples go out as a zero-copy byte view of
    /// `samples.len() * 2` bytes (see [`pcm::as_bytes`]). There is no
    /// chunking or retry: the transmit status is returned as is.
    ///
    /// # Errors
    ///
    /// - [`SynthError::NotInitialized`] before a successful init.
    /// - [`SynthError::NotSupported`] when the table has no `transmit` slot.
    /// - [`SynthError::Hardware`] carrying the non-`Ok` transmit status
    ///   (including `Busy` and `Timeout`).
    ///
    /// The first two both fold to [`Status::Error`].
    pub fn play_buffer(&mut self, samples: &[i16]) -> Result<()> {
        if !self.ctx.initialized {
            return Err(SynthError::NotInitialized);
        }
        let io = self.io.as_mut().ok_or(SynthError::NotSupported)?;

        let bytes = pcm::as_bytes(samples);
        log::trace!("synth: transmit {} samples ({} bytes)", samples.len(), bytes.len());
        io.transmit(bytes).ok_or(SynthError::NotSupported)?.into_result()
    }

    /// Stop playback. Nothing to do at this layer; always succeeds.
    pub fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    // ── Sample rate ────────────────────────────────────────────────────

    /// Store a new sample rate and push it to hardware when supported.
    ///
    /// Works in any state. The hardware result is not surfaced.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> Result<()> {
        self.ctx.sample_rate = sample_rate;
        if let Some(io) = self.io.as_mut() {
            best_effort("set_sample_rate", io.set_sample_rate(sample_rate));
        }
        log::debug!("synth: sample rate {sample_rate} Hz");
        Ok(())
    }

    /// Read the sample rate back from hardware, bypassing the cache.
    ///
    /// # Errors
    ///
    /// [`SynthError::NotSupported`] without a `get_sample_rate` slot,
    /// [`SynthError::Hardware`] when the readback fails.
    pub fn hardware_sample_rate(&mut self) -> Result<u32> {
        let io = self.io.as_mut().ok_or(SynthError::NotSupported)?;
        io.get_sample_rate()
            .ok_or(SynthError::NotSupported)?
            .map_err(SynthError::Hardware)
    }

    // ── Volume / mute ──────────────────────────────────────────────────

    /// Set the volume, clamping anything above 100 to 100.
    ///
    /// Always succeeds and works in any state.
    pub fn set_volume(&mut self, volume: u8) -> Result<()> {
        self.ctx.volume = volume.min(MAX_VOLUME);
        Ok(())
    }

    /// Mute when `enable` is non-zero, unmute when it is zero.
    pub fn mute(&mut self, enable: u8) -> Result<()> {
        self.set_muted(enable != 0)
    }

    /// Set the mute flag and push it to the `mute` slot when present.
    ///
    /// Always succeeds; the hardware result is not surfaced.
    pub fn set_muted(&mut self, muted: bool) -> Result<()> {
        self.ctx.muted = muted;
        if let Some(io) = self.io.as_mut() {
            best_effort("mute", io.mute(muted));
        }
        Ok(())
    }
}

/// Log a failed best-effort hardware call; the caller never sees it.
fn best_effort(slot: &str, status: Option<Status>) {
    if let Some(status) = status {
        if !status.is_ok() {
            log::warn!("synth: {slot} reported {status}, ignored");
        }
    }
}

// ── SynthControl trait implementation ──────────────────────────────────────

impl<IO> SynthControl for Synth<IO>
where
    IO: SynthIo,
{
    fn init(&mut self, config: SynthConfig) -> Result<()> {
        Synth::init_with(self, config)
    }

    fn deinit(&mut self) -> Result<()> {
        Synth::deinit(self)
    }

    fn reset(&mut self) -> Result<()> {
        Synth::reset(self)
    }

    fn play_buffer(&mut self, samples: &[i16]) -> Result<()> {
        Synth::play_buffer(self, samples)
    }

    fn stop(&mut self) -> Result<()> {
        Synth::stop(self)
    }

    fn set_sample_rate(&mut self, sample_rate: u32) -> Result<()> {
        Synth::set_sample_rate(self, sample_rate)
    }

    fn sample_rate(&self) -> u32 {
        Synth::sample_rate(self)
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        Synth::set_volume(self, volume)
    }

    fn volume(&self) -> u8 {
        Synth::volume(self)
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        Synth::set_muted(self, muted)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
