//! # synth-driver
//!
//! A `no_std`, zero-allocation driver for embedded PCM audio / tone
//! peripherals. The driver validates each request and forwards it to a
//! hardware I/O table supplied by the board integration layer; it does no
//! mixing, buffering or DMA handling of its own.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Codes | [`status`] | [`Status`] codes shared with hardware, [`SynthError`] |
//! | Hardware | [`io`] | [`SynthIo`] capability table, [`IoTable`], [`HalIo`] |
//! | Driver | [`driver`] | [`Synth`] context manager, PCM byte view |
//! | Trait | [`control`] | [`SynthControl`] object-style interface |
//! | Sharing | [`shared`] | [`SharedSynth`] critical-section wrapper (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use synth_driver::{IoTable, Status, Synth};
//!
//! let mut synth = Synth::with_io(IoTable {
//!     init: Some(board_audio_init),
//!     transmit: Some(board_audio_send),
//!     ..IoTable::default()
//! });
//!
//! synth.init(44_100, 2)?;          // volume 75, unmuted
//! synth.set_volume(60)?;
//! synth.play_buffer(&samples)?;    // samples.len() * 2 bytes to the bus
//! synth.deinit()?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `hal` | yes | [`HalIo`] over `embedded-hal` SPI + GPIO |
//! | `shared` | yes | [`SharedSynth`] (requires a `critical-section` implementation) |
//! | `defmt` | no | `defmt::Format` on status, error and context types |
//! | `serde` | no | `Serialize` / `Deserialize` on [`SynthConfig`] and [`Status`] |
//!
//! ## Audio parameters
//!
//! - **Sample format:** `i16` (signed 16-bit), native byte order on transmit
//! - **Default format:** 44 100 Hz stereo ([`SynthConfig::default`])
//! - **Volume:** 0–100, 75 after init ([`constants::DEFAULT_VOLUME`])

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod control;
pub mod driver;
pub mod io;
pub mod status;

#[cfg(feature = "shared")]
pub mod shared;

pub use config::SynthConfig;
pub use control::SynthControl;
pub use driver::{Context, Synth};
pub use io::{IoTable, SynthIo};
pub use status::{Result, Status, SynthError};

#[cfg(feature = "hal")]
pub use io::{HalIo, NoMutePin};

#[cfg(feature = "shared")]
pub use shared::SharedSynth;
