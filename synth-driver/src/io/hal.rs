//! [`SynthIo`] over `embedded-hal` peripherals.
//!
//! Covers the common wiring of a PCM DAC / tone chip: samples go out on an
//! SPI bus and an optional GPIO drives the chip's mute input (high = muted).
//!
//! # Example
//!
//! ```ignore
//! let io = HalIo::with_mute_pin(spi, mute_pin);
//! let mut synth = Synth::with_io(io);
//! synth.init(48_000, 2)?;    // releases the mute line
//! synth.play_buffer(&pcm)?;  // SPI write + flush
//! ```

use core::convert::Infallible;

use embedded_hal::digital::{self, OutputPin};
use embedded_hal::spi::{Error as _, SpiBus};

use super::SynthIo;
use crate::status::Status;

// ── Placeholder mute line ──────────────────────────────────────────────────

/// Stand-in pin type for boards without a mute line.
///
/// Never driven; [`HalIo::new`] leaves the mute slot empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMutePin;

impl digital::ErrorType for NoMutePin {
    type Error = Infallible;
}

impl OutputPin for NoMutePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ── Adapter ────────────────────────────────────────────────────────────────

/// SPI + mute-pin hardware layer.
///
/// Populated slots: `init`, `deinit`, `transmit`, and `mute` when a mute pin
/// was supplied. The sample-rate slots stay empty: the bit clock is owned by
/// whoever configured the SPI peripheral.
pub struct HalIo<SPI, MUTE = NoMutePin> {
    spi: SPI,
    mute: Option<MUTE>,
}

impl<SPI> HalIo<SPI, NoMutePin>
where
    SPI: SpiBus<u8>,
{
    /// Adapter with no mute line.
    pub fn new(spi: SPI) -> Self {
        Self { spi, mute: None }
    }
}

impl<SPI, MUTE> HalIo<SPI, MUTE>
where
    SPI: SpiBus<u8>,
    MUTE: OutputPin,
{
    /// Adapter whose mute slot drives `mute`.
    pub fn with_mute_pin(spi: SPI, mute: MUTE) -> Self {
        Self {
            spi,
            mute: Some(mute),
        }
    }

    /// Give back the bus and the mute pin.
    pub fn release(self) -> (SPI, Option<MUTE>) {
        (self.spi, self.mute)
    }

    fn drive_mute(&mut self, muted: bool) -> Option<Status> {
        let pin = self.mute.as_mut()?;
        let result = if muted { pin.set_high() } else { pin.set_low() };
        Some(match result {
            Ok(()) => Status::Ok,
            Err(e) => {
                log::warn!("synth mute line: {:?}", digital::Error::kind(&e));
                Status::Error
            }
        })
    }
}

impl<SPI, MUTE> SynthIo for HalIo<SPI, MUTE>
where
    SPI: SpiBus<u8>,
    MUTE: OutputPin,
{
    fn init(&mut self) -> Option<Status> {
        // Output is live after init
        Some(self.drive_mute(false).unwrap_or(Status::Ok))
    }

    fn deinit(&mut self) -> Option<Status> {
        Some(self.drive_mute(true).unwrap_or(Status::Ok))
    }

    fn transmit(&mut self, data: &[u8]) -> Option<Status> {
        let result = self.spi.write(data).and_then(|()| self.spi.flush());
        Some(match result {
            Ok(()) => Status::Ok,
            Err(e) => {
                log::warn!("synth bus write of {} bytes: {:?}", data.len(), e.kind());
                Status::Error
            }
        })
    }

    fn mute(&mut self, enable: bool) -> Option<Status> {
        self.drive_mute(enable)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::spi::{self, ErrorType};

    // ── Mock SPI bus ──────────────────────────────────────────────────

    #[derive(Debug)]
    struct MockError;

    impl spi::Error for MockError {
        fn kind(&self) -> spi::ErrorKind {
            spi::ErrorKind::Other
        }
    }

    /// Records written bytes into a fixed buffer.
    struct MockSpi {
        data: [u8; 64],
        len: usize,
        flushes: usize,
        fail: bool,
    }

    impl MockSpi {
        fn new() -> Self {
            Self {
                data: [0; 64],
                len: 0,
                flushes: 0,
                fail: false,
            }
        }

        fn written(&self) -> &[u8] {
            &self.data[..self.len]
        }
    }

    impl ErrorType for MockSpi {
        type Error = MockError;
    }

    impl SpiBus<u8> for MockSpi {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(MockError);
            }
            self.data[self.len..self.len + words.len()].copy_from_slice(words);
            self.len += words.len();
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    // ── Mock mute pin ─────────────────────────────────────────────────

    struct MockPin {
        high: bool,
    }

    impl digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    #[test]
    fn transmit_writes_and_flushes() {
        let mut io = HalIo::new(MockSpi::new());
        assert_eq!(io.transmit(&[1, 2, 3, 4]), Some(Status::Ok));

        let (spi, _) = io.release();
        assert_eq!(spi.written(), &[1, 2, 3, 4]);
        assert_eq!(spi.flushes, 1);
    }

    #[test]
    fn bus_error_reports_error_status() {
        let mut spi = MockSpi::new();
        spi.fail = true;
        let mut io = HalIo::new(spi);
        assert_eq!(io.transmit(&[0; 2]), Some(Status::Error));
    }

    #[test]
    fn without_pin_mute_slot_is_absent() {
        let mut io = HalIo::new(MockSpi::new());
        assert!(io.mute(true).is_none());
        assert!(io.set_sample_rate(48_000).is_none());
        assert!(io.get_sample_rate().is_none());
        // init still succeeds
        assert_eq!(io.init(), Some(Status::Ok));
    }

    #[test]
    fn mute_pin_follows_lifecycle() {
        let mut io = HalIo::with_mute_pin(MockSpi::new(), MockPin { high: true });

        assert_eq!(io.init(), Some(Status::Ok));
        assert_eq!(io.mute.as_ref().map(|p| p.high), Some(false));

        assert_eq!(io.mute(true), Some(Status::Ok));
        assert_eq!(io.mute.as_ref().map(|p| p.high), Some(true));

        assert_eq!(io.mute(false), Some(Status::Ok));
        assert_eq!(io.deinit(), Some(Status::Ok));

        let (_spi, pin) = io.release();
        assert!(pin.map(|p| p.high).unwrap_or(false));
    }
}
