//! Status codes and driver errors.
//!
//! [`Status`] is the stable four-valued code shared with the hardware layer.
//! Driver operations return [`Result`], whose error [`SynthError`] keeps the
//! cause apart while still folding to a [`Status`] at the boundary through
//! [`SynthError::status`].

use core::fmt;

// ── Status ─────────────────────────────────────────────────────────────────

/// Status code exchanged with the hardware integration layer.
///
/// Only [`Ok`](Status::Ok) and [`Error`](Status::Error) are produced by the
/// driver itself. [`Busy`](Status::Busy) and [`Timeout`](Status::Timeout)
/// are reserved for hardware callbacks, and pass through
/// [`Synth::play_buffer`](crate::Synth::play_buffer) unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Status {
    /// Operation completed.
    #[default]
    Ok = 0x00,
    /// Generic failure.
    Error = 0x01,
    /// Peripheral is busy.
    Busy = 0x02,
    /// Peripheral did not respond in time.
    Timeout = 0x03,
}

impl Status {
    /// Numeric value of this status.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a numeric status. Unknown values decode as [`Status::Error`].
    pub const fn from_code(code: u8) -> Self {
        match code {
            0x00 => Status::Ok,
            0x02 => Status::Busy,
            0x03 => Status::Timeout,
            _ => Status::Error,
        }
    }

    /// `true` for [`Status::Ok`].
    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Convert a status reported by hardware into a driver result.
    ///
    /// `Ok` becomes `Ok(())`; anything else becomes
    /// [`SynthError::Hardware`] carrying the reported status.
    pub fn into_result(self) -> Result<()> {
        match self {
            Status::Ok => Ok(()),
            other => Err(SynthError::Hardware(other)),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Ok => "ok",
            Status::Error => "error",
            Status::Busy => "busy",
            Status::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

impl<T> From<Result<T>> for Status {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(e) => e.status(),
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────────────

/// Reason a driver operation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SynthError {
    /// A required input or output reference was absent.
    InvalidArgument,
    /// No I/O table is registered, or it lacks a required slot.
    NotSupported,
    /// Playback was requested before a successful initialization.
    NotInitialized,
    /// A hardware callback reported a non-`Ok` status.
    Hardware(Status),
}

impl SynthError {
    /// Status code seen by callers that only understand [`Status`].
    ///
    /// Every driver-side cause folds to [`Status::Error`]; hardware failures
    /// keep the status the callback reported.
    pub const fn status(self) -> Status {
        match self {
            SynthError::Hardware(Status::Ok) => Status::Error,
            SynthError::Hardware(status) => status,
            _ => Status::Error,
        }
    }
}

impl fmt::Display for SynthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthError::InvalidArgument => f.write_str("invalid argument"),
            SynthError::NotSupported => f.write_str("capability not supported by the I/O table"),
            SynthError::NotInitialized => f.write_str("driver not initialized"),
            SynthError::Hardware(status) => write!(f, "hardware reported {status}"),
        }
    }
}

impl From<SynthError> for Status {
    fn from(err: SynthError) -> Self {
        err.status()
    }
}

/// Result alias used by every driver operation.
pub type Result<T> = core::result::Result<T, SynthError>;
