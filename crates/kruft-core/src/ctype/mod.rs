//! Character classification and conversion.
//!
//! Implements `<ctype.h>` style functions for classifying and transforming
//! individual bytes. C locale only: bytes `>= 0x80` belong to no class and
//! are returned unchanged by the conversions, whatever the host locale says.

/// Returns `true` if `c` is an alphanumeric character (`[A-Za-z0-9]`).
#[inline]
pub const fn is_alnum(c: u8) -> bool {
    c.is_ascii_alphanumeric()
}

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub const fn is_alpha(c: u8) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub const fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub const fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub const fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` if `c` is a hexadecimal digit (`[0-9A-Fa-f]`).
#[inline]
pub const fn is_xdigit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

/// Returns `true` if `c` is a control character (`0x00..=0x1F` or `0x7F`).
#[inline]
pub const fn is_cntrl(c: u8) -> bool {
    c <= 0x1F || c == 0x7F
}

/// Returns `true` if `c` has a visible glyph (printable, excluding space).
#[inline]
pub const fn is_graph(c: u8) -> bool {
    c > b' ' && c <= b'~'
}

/// Returns `true` if `c` is a whitespace character.
///
/// Whitespace: space, tab, newline, vertical tab, form feed, carriage return.
#[inline]
pub const fn is_space(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Returns `true` if `c` is a blank (space or horizontal tab).
#[inline]
pub const fn is_blank(c: u8) -> bool {
    matches!(c, b' ' | b'\t')
}

/// Returns `true` if `c` is a printable character (including space).
#[inline]
pub const fn is_print(c: u8) -> bool {
    c >= b' ' && c <= b'~'
}

/// Returns `true` if `c` is a punctuation character.
#[inline]
pub const fn is_punct(c: u8) -> bool {
    matches!(c, 0x21..=0x2F | 0x3A..=0x40 | 0x5B..=0x60 | 0x7B..=0x7E)
}

/// Converts `c` to lowercase if it is an uppercase letter.
#[inline]
pub const fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

/// Converts `c` to uppercase if it is a lowercase letter.
#[inline]
pub const fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every byte must fall in exactly one of these partitions.
    #[test]
    fn test_classes_partition_ascii() {
        for c in 0u8..=0x7F {
            let classes = [is_cntrl(c), is_alnum(c), is_punct(c), c == b' ']
                .iter()
                .filter(|&&hit| hit)
                .count();
            assert_eq!(classes, 1, "byte {c:#04x}");
        }
    }

    #[test]
    fn test_high_bytes_belong_to_no_class() {
        for c in 0x80u8..=0xFF {
            assert!(!is_alnum(c));
            assert!(!is_cntrl(c));
            assert!(!is_print(c));
            assert!(!is_punct(c));
            assert!(!is_space(c));
            assert_eq!(to_lower(c), c);
            assert_eq!(to_upper(c), c);
        }
    }

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha(b'A'));
        assert!(is_alpha(b'z'));
        assert!(!is_alpha(b'0'));
        assert!(!is_alpha(b'@'));
        assert!(!is_alpha(b'['));
    }

    #[test]
    fn test_is_digit_and_xdigit() {
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
            assert!(is_xdigit(c));
        }
        assert!(is_xdigit(b'f'));
        assert!(is_xdigit(b'F'));
        assert!(!is_xdigit(b'g'));
        assert!(!is_digit(b'a'));
    }

    #[test]
    fn test_is_cntrl() {
        assert!(is_cntrl(0));
        assert!(is_cntrl(b'\n'));
        assert!(is_cntrl(0x1F));
        assert!(is_cntrl(0x7F));
        assert!(!is_cntrl(b' '));
    }

    #[test]
    fn test_is_graph_and_print() {
        assert!(is_print(b' '));
        assert!(!is_graph(b' '));
        assert!(is_graph(b'!'));
        assert!(is_graph(b'~'));
        assert!(!is_print(0x7F));
    }

    #[test]
    fn test_is_space_and_blank() {
        for c in [b' ', b'\t', b'\n', 0x0B, 0x0C, b'\r'] {
            assert!(is_space(c));
        }
        assert!(is_blank(b' '));
        assert!(is_blank(b'\t'));
        assert!(!is_blank(b'\n'));
        assert!(!is_space(0));
    }

    #[test]
    fn test_is_punct() {
        for c in b"!/:@[`{~" {
            assert!(is_punct(*c), "{}", *c as char);
        }
        assert!(!is_punct(b'a'));
        assert!(!is_punct(b' '));
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(to_lower(b'A'), b'a');
        assert_eq!(to_lower(b'a'), b'a');
        assert_eq!(to_lower(b'['), b'[');
        assert_eq!(to_upper(b'z'), b'Z');
        assert_eq!(to_upper(b'{'), b'{');
        assert_eq!(to_upper(b'5'), b'5');
    }
}
