//! Size-reporting copies: strlcpy and strlcat (BSD semantics).
//!
//! These always return the length the result *would* need, so a caller can
//! detect truncation with `ret >= capacity` and retry with a buffer of
//! `ret + 1` bytes. Prefer them when the destination can be reallocated.

use super::str::{strlen, strnlen};

/// Returns true if a size-reporting result means the copy was truncated.
#[inline]
#[must_use]
pub const fn is_truncated(ret: usize, capacity: usize) -> bool {
    ret >= capacity
}

/// Copies the C string `src` into `dest`, returning the full length of `src`.
///
/// The capacity is `dest.len()`.
/// - Capacity `0`: nothing is written and `0` is returned. Callers cannot
///   learn the source length from an empty buffer.
/// - Otherwise up to `capacity - 1` bytes are copied and the result is always
///   NUL-terminated. Scanning continues past the truncation point so the
///   untruncated length of `src` is returned.
pub fn strlcpy(dest: &mut [u8], src: &[u8]) -> usize {
    let cap = dest.len();
    if cap == 0 {
        return 0;
    }

    let src_len = strlen(src);
    let n = src_len.min(cap - 1);
    dest[..n].copy_from_slice(&src[..n]);
    dest[n] = 0;
    src_len
}

/// Appends the C string `src` to the C string held in `dest`.
///
/// Returns the length of the string it tried to create: the existing length
/// plus `strlen(src)`. If `dest` holds no terminator within its capacity
/// nothing is written and the capacity itself is returned, since the
/// intended length cannot be determined.
pub fn strlcat(dest: &mut [u8], src: &[u8]) -> usize {
    let cap = dest.len();
    let tail = strnlen(dest, cap);
    if tail == cap {
        return cap;
    }

    tail + strlcpy(&mut dest[tail..], src)
}
