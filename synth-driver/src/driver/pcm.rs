//! PCM sample ↔ transmit byte conversion.
//!
//! The transmit slot receives samples as a zero-copy byte view in the
//! CPU's native byte order, which is the layout a DMA or FIFO fed from the
//! same memory would see. Buses that need a fixed order can pack explicitly
//! with [`to_le_bytes_into`].

use crate::constants::BYTES_PER_SAMPLE;

/// Number of transmit bytes for `sample_count` 16-bit samples.
pub const fn byte_len(sample_count: usize) -> usize {
    sample_count * BYTES_PER_SAMPLE
}

/// View a signed 16-bit PCM buffer as raw bytes (native endianness).
///
/// The returned slice covers exactly `byte_len(samples.len())` bytes of
/// the same memory; no copy is made.
pub fn as_bytes(samples: &[i16]) -> &[u8] {
    // SAFETY: `i16` has no padding and no invalid bit patterns when read as
    // bytes, `u8` has alignment 1, and the length covers exactly the memory
    // of `samples`, borrowed for the same lifetime.
    unsafe {
        core::slice::from_raw_parts(samples.as_ptr().cast::<u8>(), byte_len(samples.len()))
    }
}

/// Pack samples little-endian into `out`.
///
/// Packs as many whole samples as fit and returns the number of bytes
/// written.
pub fn to_le_bytes_into(samples: &[i16], out: &mut [u8]) -> usize {
    let mut written = 0;
    for (sample, chunk) in samples.iter().zip(out.chunks_exact_mut(BYTES_PER_SAMPLE)) {
        chunk.copy_from_slice(&sample.to_le_bytes());
        written += BYTES_PER_SAMPLE;
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_len_doubles_sample_count() {
        assert_eq!(byte_len(0), 0);
        assert_eq!(byte_len(1), 2);
        assert_eq!(byte_len(128), 256);
    }

    #[test]
    fn byte_view_matches_native_layout() {
        let samples = [0x0102i16, -2, i16::MAX, i16::MIN];
        let bytes = as_bytes(&samples);
        assert_eq!(bytes.len(), 8);
        for (i, s) in samples.iter().enumerate() {
            assert_eq!(&bytes[i * 2..i * 2 + 2], &s.to_ne_bytes());
        }
    }

    #[test]
    fn empty_buffer_is_empty_view() {
        assert!(as_bytes(&[]).is_empty());
    }

    #[test]
    fn le_packing_stops_at_output_capacity() {
        let samples = [0x1234i16, 0x5678, 0x0ABC];
        let mut out = [0u8; 5];
        // Only two whole samples fit
        assert_eq!(to_le_bytes_into(&samples, &mut out), 4);
        assert_eq!(&out[..4], &[0x34, 0x12, 0x78, 0x56]);
        assert_eq!(out[4], 0);
    }
}
