//! Function-pointer capability table.

use core::fmt;

use super::SynthIo;
use crate::status::Status;

/// I/O table made of independently optional function slots.
///
/// Suited to integrations whose hardware layer is a set of free functions
/// (e.g. generated BSP code). `IoTable::default()` has every slot empty.
///
/// ```
/// use synth_driver::{IoTable, Status, Synth};
///
/// fn bus_init() -> Status { Status::Ok }
/// fn bus_send(_data: &[u8]) -> Status { Status::Ok }
///
/// let table = IoTable {
///     init: Some(bus_init),
///     transmit: Some(bus_send),
///     ..IoTable::default()
/// };
/// let mut synth = Synth::with_io(table);
/// synth.init(44_100, 2).unwrap();
/// synth.play_buffer(&[0i16; 64]).unwrap();
/// ```
#[derive(Clone, Copy, Default)]
pub struct IoTable {
    /// Peripheral bring-up.
    pub init: Option<fn() -> Status>,
    /// Peripheral shutdown.
    pub deinit: Option<fn() -> Status>,
    /// Raw PCM byte transmit.
    pub transmit: Option<fn(&[u8]) -> Status>,
    /// Sample-rate programming.
    pub set_sample_rate: Option<fn(u32) -> Status>,
    /// Sample-rate readback.
    pub get_sample_rate: Option<fn() -> Result<u32, Status>>,
    /// Output mute.
    pub mute: Option<fn(bool) -> Status>,
}

impl SynthIo for IoTable {
    fn init(&mut self) -> Option<Status> {
        self.init.map(|f| f())
    }

    fn deinit(&mut self) -> Option<Status> {
        self.deinit.map(|f| f())
    }

    fn transmit(&mut self, data: &[u8]) -> Option<Status> {
        self.transmit.map(|f| f(data))
    }

    fn set_sample_rate(&mut self, sample_rate: u32) -> Option<Status> {
        self.set_sample_rate.map(|f| f(sample_rate))
    }

    fn get_sample_rate(&mut self) -> Option<Result<u32, Status>> {
        self.get_sample_rate.map(|f| f())
    }

    fn mute(&mut self, enable: bool) -> Option<Status> {
        self.mute.map(|f| f(enable))
    }
}

impl fmt::Debug for IoTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IoTable")
            .field("init", &self.init.is_some())
            .field("deinit", &self.deinit.is_some())
            .field("transmit", &self.transmit.is_some())
            .field("set_sample_rate", &self.set_sample_rate.is_some())
            .field("get_sample_rate", &self.get_sample_rate.is_some())
            .field("mute", &self.mute.is_some())
            .finish()
    }
}
