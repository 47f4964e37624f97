//! Runtime configuration passed to [`Synth::init_with`](crate::Synth::init_with).

use crate::constants::{DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE};

/// Output format requested at initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynthConfig {
    /// Sample rate in Hz (e.g. 44100, 48000).
    pub sample_rate: u32,
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u8,
}

impl SynthConfig {
    /// Build a configuration from explicit values.
    pub const fn new(sample_rate: u32, channels: u8) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    /// Mono output at `sample_rate`.
    pub const fn mono(sample_rate: u32) -> Self {
        Self::new(sample_rate, 1)
    }

    /// Stereo output at `sample_rate`.
    pub const fn stereo(sample_rate: u32) -> Self {
        Self::new(sample_rate, 2)
    }
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cd_stereo() {
        let config = SynthConfig::default();
        assert_eq!(config.sample_rate, 44_100);
        assert_eq!(config.channels, 2);
    }

    #[test]
    fn helpers_set_channel_count() {
        assert_eq!(SynthConfig::mono(8_000), SynthConfig::new(8_000, 1));
        assert_eq!(SynthConfig::stereo(48_000), SynthConfig::new(48_000, 2));
    }
}
