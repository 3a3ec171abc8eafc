//! Length primitives and comparison: strlen, strnlen, strcmp.
//!
//! These operate on byte slices that represent NUL-terminated C strings. A
//! NUL byte (`0x00`) marks the logical end of the string; when a slice holds
//! no NUL, its end plays that role so no scan ever leaves the slice.

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. Scans `s` for the first `0x00` byte and returns
/// its index. If no NUL is found, returns the full slice length.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Returns the length of a C string, scanning at most `limit` bytes.
///
/// Equivalent to C `strnlen`. Returns:
/// - the index of the first `0x00` byte if it lies before `limit`
/// - otherwise `limit` (or `s.len()` when the slice is shorter)
///
/// Every bounded routine in this crate measures through this function so it
/// never reads past a caller-declared capacity.
pub fn strnlen(s: &[u8], limit: usize) -> usize {
    let bound = limit.min(s.len());
    s[..bound].iter().position(|&b| b == 0).unwrap_or(bound)
}

/// Compares two NUL-terminated byte strings lexicographically.
///
/// Bytes compare as unsigned values. Returns the difference of the first
/// mismatching pair (or of the terminators), so the sign orders the strings
/// and zero means equal.
pub fn strcmp(lhs: &[u8], rhs: &[u8]) -> i32 {
    let mut i = 0;
    loop {
        let a = lhs.get(i).copied().unwrap_or(0);
        let b = rhs.get(i).copied().unwrap_or(0);
        if a != b || a == 0 {
            return i32::from(a) - i32::from(b);
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strlen_basic() {
        assert_eq!(strlen(b"hello\0"), 5);
        assert_eq!(strlen(b"\0"), 0);
        assert_eq!(strlen(b"abc"), 3); // no NUL found
        assert_eq!(strlen(b""), 0);
    }

    #[test]
    fn test_strlen_stops_at_first_nul() {
        assert_eq!(strlen(b"ab\0cd\0"), 2);
    }

    #[test]
    fn test_strnlen_within_limit() {
        assert_eq!(strnlen(b"hello\0", 16), 5);
        assert_eq!(strnlen(b"hello\0", 6), 5);
    }

    #[test]
    fn test_strnlen_limit_reached() {
        assert_eq!(strnlen(b"hello\0", 5), 5);
        assert_eq!(strnlen(b"hello\0", 3), 3);
        assert_eq!(strnlen(b"hello\0", 0), 0);
    }

    #[test]
    fn test_strnlen_short_slice() {
        assert_eq!(strnlen(b"abc", 10), 3);
    }

    #[test]
    fn test_strcmp_equal() {
        assert_eq!(strcmp(b"abc\0", b"abc\0"), 0);
        assert_eq!(strcmp(b"\0", b""), 0);
    }

    #[test]
    fn test_strcmp_ordering() {
        assert!(strcmp(b"abc\0", b"abd\0") < 0);
        assert!(strcmp(b"abd\0", b"abc\0") > 0);
        assert!(strcmp(b"ab\0", b"abc\0") < 0);
        assert!(strcmp(b"abc\0", b"ab\0") > 0);
    }

    #[test]
    fn test_strcmp_unsigned_bytes() {
        // 0xFF sorts after ASCII, as with unsigned char comparison.
        assert!(strcmp(b"\xFF\0", b"a\0") > 0);
        assert_eq!(strcmp(b"\xFF\0", b"\x01\0"), 0xFE);
    }

    #[test]
    fn test_strcmp_ignores_bytes_after_nul() {
        assert_eq!(strcmp(b"ab\0x", b"ab\0y"), 0);
    }
}
