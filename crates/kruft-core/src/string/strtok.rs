//! Reentrant string tokenization: strtok_r.
//!
//! In this safe Rust model the tokenizer overwrites the delimiter that ends
//! each token with a NUL byte and returns token boundaries as
//! `(start, len)` pairs. The subject buffer is mutated in place; keep a copy
//! if the original content is still needed afterwards.

use super::span::{strcspn, strspn};

/// Caller-owned resume state for [`strtok_r`].
///
/// Holds the offset at which the next scan starts, or nothing once the
/// subject is exhausted. Each tokenization sequence needs its own `SavePtr`,
/// which is what makes concurrent sequences over different buffers safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavePtr(Option<usize>);

impl SavePtr {
    /// State for the first call of a new sequence (scan from offset 0).
    #[must_use]
    pub const fn new() -> Self {
        Self(Some(0))
    }

    /// State for a sequence that starts scanning at `offset`.
    #[must_use]
    pub const fn at(offset: usize) -> Self {
        Self(Some(offset))
    }

    /// Offset of the next scan, or `None` when no tokens remain.
    #[must_use]
    pub const fn position(self) -> Option<usize> {
        self.0
    }

    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        self.0.is_none()
    }
}

impl Default for SavePtr {
    fn default() -> Self {
        Self::new()
    }
}

/// Reentrant string tokenizer.
///
/// POSIX `strtok_r`. `s` is the NUL-terminated subject, `delimiters` a
/// NUL-terminated set of separator bytes and `save_ptr` the resume state
/// (start with [`SavePtr::new`], then pass the same slot on every call).
///
/// Leading delimiters are skipped, so empty fields between consecutive
/// delimiters never produce tokens. Returns `Some((token_start, token_len))`
/// for the next token, or `None` once the subject is exhausted; at that point
/// `save_ptr` is exhausted as well and later calls keep returning `None`.
pub fn strtok_r(s: &mut [u8], delimiters: &[u8], save_ptr: &mut SavePtr) -> Option<(usize, usize)> {
    let Some(offset) = save_ptr.0 else {
        return None;
    };
    let Some(rest) = s.get(offset..) else {
        save_ptr.0 = None;
        return None;
    };

    let token_start = offset + strspn(rest, delimiters);
    if s.get(token_start).is_none_or(|&b| b == 0) {
        save_ptr.0 = None;
        return None;
    }

    let token_len = strcspn(&s[token_start..], delimiters);
    let end = token_start + token_len;
    match s.get_mut(end) {
        Some(b) if *b != 0 => {
            *b = 0;
            save_ptr.0 = Some(end + 1);
        }
        _ => save_ptr.0 = None,
    }

    Some((token_start, token_len))
}
