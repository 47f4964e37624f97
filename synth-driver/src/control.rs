use crate::config::SynthConfig;
use crate::status::Result;

/// Object-style interface to a synth driver.
///
/// Lets application code hold a `&mut dyn SynthControl` without knowing
/// the I/O table type behind it.
pub trait SynthControl {
    /// Initialize the peripheral with `config`.
    fn init(&mut self, config: SynthConfig) -> Result<()>;

    /// Shut the peripheral down.
    fn deinit(&mut self) -> Result<()>;

    /// Re-initialize with the current sample rate and channel count.
    fn reset(&mut self) -> Result<()>;

    /// Play signed 16-bit PCM samples.
    fn play_buffer(&mut self, samples: &[i16]) -> Result<()>;

    /// Stop playback.
    fn stop(&mut self) -> Result<()>;

    /// Set the output sample rate in Hz.
    fn set_sample_rate(&mut self, sample_rate: u32) -> Result<()>;

    /// Current output sample rate in Hz.
    fn sample_rate(&self) -> u32;

    /// Set the volume (0–100, larger values clamp).
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Current volume (0–100).
    fn volume(&self) -> u8;

    /// Mute or unmute the output.
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}
