//! Truncation-safe copies: strscpy, strscat and the chaining stpecpy.
//!
//! This family reports truncation out of band. A copy either succeeds and
//! yields the resulting length, or fails with [`CopyOutcome::Truncated`]
//! while still leaving a terminated prefix in the destination. Prefer it
//! when the destination is a fixed-size location that cannot grow; use the
//! size-reporting family in [`super::lcopy`] when you intend to reallocate.

use thiserror::Error;

use super::str::strnlen;

/// C-compatible value of a truncated copy (`ptrdiff_t` result `< 0`).
pub const TRUNCATED: isize = -1;

/// Result of a truncation-safe copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The whole source fit; holds the length of the resulting string.
    Copied(usize),
    /// The destination had zero capacity. Nothing was written.
    NoCapacity,
    /// The source did not fit. The destination holds a terminated prefix.
    Truncated,
}

impl CopyOutcome {
    /// The C return value: the length, `0` for zero capacity, or [`TRUNCATED`].
    #[must_use]
    pub const fn as_isize(self) -> isize {
        match self {
            Self::Copied(len) => len as isize,
            Self::NoCapacity => 0,
            Self::Truncated => TRUNCATED,
        }
    }

    /// Length of the resulting string, if the copy was not truncated.
    #[must_use]
    pub const fn len(self) -> Option<usize> {
        match self {
            Self::Copied(len) => Some(len),
            Self::NoCapacity => Some(0),
            Self::Truncated => None,
        }
    }

    #[must_use]
    pub const fn is_truncated(self) -> bool {
        matches!(self, Self::Truncated)
    }

    /// Converts to a `Result` so truncation can be propagated with `?`.
    pub const fn into_result(self) -> Result<usize, Truncated> {
        match self.len() {
            Some(len) => Ok(len),
            None => Err(Truncated),
        }
    }
}

/// Error returned when a string did not fit its destination buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("string truncated: destination buffer too small")]
pub struct Truncated;

/// Copies the C string `src` into `dest`, refusing to silently truncate.
///
/// The capacity is `dest.len()` and includes the terminator slot.
/// - Capacity `0`: nothing is written, returns [`CopyOutcome::NoCapacity`].
/// - Source length `L < capacity`: copies `L` bytes plus NUL and returns
///   `Copied(L)`.
/// - Otherwise copies `capacity - 1` bytes, writes NUL into the last slot and
///   returns [`CopyOutcome::Truncated`].
///
/// The source is scanned no further than the destination capacity.
pub fn strscpy(dest: &mut [u8], src: &[u8]) -> CopyOutcome {
    let cap = dest.len();
    if cap == 0 {
        return CopyOutcome::NoCapacity;
    }

    let len = strnlen(src, cap);
    if len < cap {
        dest[..len].copy_from_slice(&src[..len]);
        dest[len] = 0;
        return CopyOutcome::Copied(len);
    }

    let keep = cap - 1;
    dest[..keep].copy_from_slice(&src[..keep]);
    dest[keep] = 0;
    CopyOutcome::Truncated
}

/// Appends the C string `src` to the C string already held in `dest`.
///
/// If `dest` holds no terminator within its capacity it is treated as
/// already truncated: nothing is written and `Truncated` is returned. This
/// also covers a zero-capacity `dest`. Otherwise the remaining tail is filled
/// through [`strscpy`] and the combined length is returned.
pub fn strscat(dest: &mut [u8], src: &[u8]) -> CopyOutcome {
    let cap = dest.len();
    let tail = strnlen(dest, cap);
    if tail == cap {
        return CopyOutcome::Truncated;
    }

    match strscpy(&mut dest[tail..], src) {
        CopyOutcome::Copied(len) => CopyOutcome::Copied(tail + len),
        CopyOutcome::NoCapacity => CopyOutcome::Copied(tail),
        CopyOutcome::Truncated => CopyOutcome::Truncated,
    }
}

/// Chain-copies `src` into `buf` at `cursor`, returning the new cursor.
///
/// `buf` spans up to the end of the destination, so `buf.len() - cursor` is
/// the remaining capacity. The returned cursor indexes the terminator just
/// written and can be fed straight into the next call:
///
/// - `None` cursor: returns `None` without touching `buf`. A chain of calls
///   therefore only needs its final result checked.
/// - Truncation: `buf` keeps a terminated prefix and `None` is returned.
/// - Zero remaining capacity: nothing is written and the cursor is returned
///   unchanged.
///
/// A cursor past the end of `buf` is treated as a failed chain.
pub fn stpecpy(buf: &mut [u8], cursor: Option<usize>, src: &[u8]) -> Option<usize> {
    let pos = cursor?;
    let region = buf.get_mut(pos..)?;
    match strscpy(region, src) {
        CopyOutcome::Copied(len) => Some(pos + len),
        CopyOutcome::NoCapacity => Some(pos),
        CopyOutcome::Truncated => None,
    }
}

/// Builder over [`stpecpy`] that owns the buffer borrow and the cursor.
///
/// ```
/// use kruft_core::StrChain;
///
/// let mut buf = [0u8; 16];
/// let mut chain = StrChain::new(&mut buf);
/// chain.push(b"key").push(b"=").push(b"value");
/// assert_eq!(chain.finish(), Ok(9));
/// assert_eq!(&buf[..10], b"key=value\0");
/// ```
#[derive(Debug)]
pub struct StrChain<'a> {
    buf: &'a mut [u8],
    cursor: Option<usize>,
}

impl<'a> StrChain<'a> {
    /// Starts a chain at the beginning of `buf`.
    ///
    /// A non-empty buffer is reset to the empty string so the written prefix
    /// is always terminated.
    pub fn new(buf: &'a mut [u8]) -> Self {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Self {
            buf,
            cursor: Some(0),
        }
    }

    /// Appends `src`. After a failure further pushes are no-ops.
    pub fn push(&mut self, src: &[u8]) -> &mut Self {
        self.cursor = stpecpy(self.buf, self.cursor, src);
        self
    }

    /// Current cursor, or `None` once the chain has failed.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.cursor.is_none()
    }

    /// The terminated prefix written so far, without its NUL.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let len = strnlen(self.buf, self.buf.len());
        &self.buf[..len]
    }

    /// Ends the chain, returning the final length or the truncation error.
    pub fn finish(self) -> Result<usize, Truncated> {
        self.cursor.ok_or(Truncated)
    }
}
