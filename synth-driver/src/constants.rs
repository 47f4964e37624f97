/// Sample rate used by [`SynthConfig::default`](crate::config::SynthConfig) in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Channel count used by [`SynthConfig::default`](crate::config::SynthConfig) (stereo).
pub const DEFAULT_CHANNELS: u8 = 2;

/// Volume applied by every successful initialization (0–100 scale).
pub const DEFAULT_VOLUME: u8 = 75;

/// Upper bound of the volume scale. Larger values are clamped, never rejected.
pub const MAX_VOLUME: u8 = 100;

/// Width of one PCM sample on the transmit bus (signed 16-bit).
pub const BYTES_PER_SAMPLE: usize = core::mem::size_of::<i16>();
