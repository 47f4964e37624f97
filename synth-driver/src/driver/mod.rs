//! Synth driver context manager.
//!
//! [`Synth`] owns the registered [`SynthIo`](crate::io::SynthIo) table and
//! the runtime [`Context`], validates every call, and forwards it to the
//! hardware slot that implements it.
//!
//! # Lifecycle
//!
//! ```text
//! new ─► register_io ─► init ─► play_buffer / set_* / mute ─► deinit
//!                        ▲                                      │
//!                        └──────────────────────────────────────┘
//! ```
//!
//! Only [`play_buffer`](Synth::play_buffer) and [`reset`](Synth::reset)
//! depend on the initialized flag; every other operation works in any state.

pub mod pcm;
mod synth;

pub use synth::{Context, Synth};
