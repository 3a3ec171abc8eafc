//! Character-class spans: strspn and strcspn.
//!
//! Both take the character set as a NUL-terminated byte slice, the same way
//! the subject string is passed.

use super::str::strlen;

/// Returns true if byte `b` is in the NUL-terminated `set`.
pub(crate) fn in_set(b: u8, set: &[u8]) -> bool {
    set.iter().take_while(|&&c| c != 0).any(|&c| c == b)
}

/// Length of the longest prefix of `s` made only of bytes in `accept`.
///
/// Equivalent to C `strspn`. Returns `strlen(s)` when every byte matches and
/// `0` when the first byte does not.
pub fn strspn(s: &[u8], accept: &[u8]) -> usize {
    let len = strlen(s);
    s[..len]
        .iter()
        .position(|&b| !in_set(b, accept))
        .unwrap_or(len)
}

/// Length of the longest prefix of `s` made only of bytes absent from `reject`.
///
/// Equivalent to C `strcspn`. Returns `strlen(s)` when no byte of `s` appears
/// in `reject`.
pub fn strcspn(s: &[u8], reject: &[u8]) -> usize {
    let len = strlen(s);
    s[..len]
        .iter()
        .position(|&b| in_set(b, reject))
        .unwrap_or(len)
}
