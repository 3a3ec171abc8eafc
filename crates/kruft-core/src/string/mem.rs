//! Memory operations: memccpy.
//!
//! Safe Rust implementation operating on byte slices, corresponding to the
//! `<string.h>` function of the same name.

/// Copies bytes from `src` to `dest`, stopping after the first byte equal to `c`.
///
/// Equivalent to C `memccpy`. At most `min(n, src.len(), dest.len())` bytes
/// are copied. Returns the index in `dest` just past the copied `c`, or
/// `None` if `c` was not found in the copied range (in which case the whole
/// range was copied).
pub fn memccpy(dest: &mut [u8], src: &[u8], c: u8, n: usize) -> Option<usize> {
    let count = n.min(dest.len()).min(src.len());
    match src[..count].iter().position(|&b| b == c) {
        Some(idx) => {
            dest[..=idx].copy_from_slice(&src[..=idx]);
            Some(idx + 1)
        }
        None => {
            dest[..count].copy_from_slice(&src[..count]);
            None
        }
    }
}
