//! Word-layout packer: 3 samples per 32-bit big-endian word.

use alloc::vec::Vec;
use enough::Stop;

use crate::error::TransferError;

const STOP_INTERVAL: usize = 1024;

/// Pack row-major samples into 4-byte big-endian words, up to 3 samples
/// each.
///
/// The accumulator is wider than the word so no bits are lost before the
/// final extra shift is undone; the result always fits 32 bits.
pub(super) fn pack_words(samples: &[u16], stop: &dyn Stop) -> Result<Vec<u8>, TransferError> {
    let mut out = Vec::with_capacity(samples.len().div_ceil(3) * 4);
    for (group_idx, group) in samples.chunks(3).enumerate() {
        if group_idx % STOP_INTERVAL == 0 {
            stop.check()?;
        }
        let mut acc: u64 = 0;
        for &v in group {
            acc |= u64::from(v & 0x3FF);
            acc <<= 10;
        }
        // Undo the final extra shift, then make room for the 2 padding bits.
        let word = ((acc >> 10) << 2) as u32;
        out.extend_from_slice(&word.to_be_bytes());
    }
    Ok(out)
}
