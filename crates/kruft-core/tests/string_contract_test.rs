//! End-to-end contract of the bounded string family, exercised through the
//! crate's public API only.

use kruft_core::string::{
    self, CopyOutcome, SavePtr, StrChain, Truncated, lcopy, stpecpy, strdup, strlcat, strlcpy,
    strscat, strscpy, strtok_r,
};

fn tokens(subject: &[u8], delim: &[u8]) -> Vec<String> {
    let mut buf = subject.to_vec();
    let mut save = SavePtr::new();
    let mut out = Vec::new();
    while let Some((start, len)) = strtok_r(&mut buf, delim, &mut save) {
        out.push(String::from_utf8_lossy(&buf[start..start + len]).into_owned());
    }
    assert!(save.is_exhausted());
    out
}

#[test]
fn zero_capacity_is_a_no_op() {
    let mut empty: [u8; 0] = [];
    assert_eq!(strscpy(&mut empty, b"anything\0"), CopyOutcome::NoCapacity);
    assert_eq!(strscpy(&mut empty, b"anything\0").as_isize(), 0);
    assert_eq!(strlcpy(&mut empty, b"anything\0"), 0);
}

#[test]
fn strscpy_reports_length_or_truncation() {
    let mut buf = [0xAAu8; 8];
    assert_eq!(strscpy(&mut buf, b"abc\0"), CopyOutcome::Copied(3));
    assert_eq!(&buf[..4], b"abc\0");

    let mut buf = [0xAAu8; 8];
    let outcome = strscpy(&mut buf, b"abcdefghijkl\0");
    assert!(outcome.is_truncated());
    assert_eq!(outcome.as_isize(), string::TRUNCATED);
    assert_eq!(&buf, b"abcdefg\0");
    assert_eq!(outcome.into_result(), Err(Truncated));
}

#[test]
fn strlcpy_reports_full_length_and_retry_fits() {
    let src = b"abcdefghijkl\0";
    let mut small = [0xAAu8; 8];
    let want = strlcpy(&mut small, src);
    assert_eq!(want, 12);
    assert!(lcopy::is_truncated(want, small.len()));
    assert_eq!(&small, b"abcdefg\0");

    let mut retry = vec![0xAAu8; want + 1];
    let got = strlcpy(&mut retry, src);
    assert_eq!(got, want);
    assert!(!lcopy::is_truncated(got, retry.len()));
    assert_eq!(&retry[..], src);
}

#[test]
fn appending_nothing_returns_existing_length() {
    let mut buf = *b"hello\0\0\0";
    assert_eq!(strscat(&mut buf, b"\0"), CopyOutcome::Copied(5));
    assert_eq!(strlcat(&mut buf, b"\0"), 5);
    assert_eq!(&buf[..6], b"hello\0");
}

#[test]
fn concatenation_families_agree_on_truncation() {
    let mut a = *b"foo\0\0\0";
    let mut b = a;
    assert!(strscat(&mut a, b"barbaz\0").is_truncated());
    assert_eq!(strlcat(&mut b, b"barbaz\0"), 9);
    assert_eq!(a, b);
    assert_eq!(&a, b"fooba\0");
}

#[test]
fn stpecpy_chain_propagates_failure() {
    let mut buf = [0xAAu8; 6];
    let cur = stpecpy(&mut buf, Some(0), b"abc\0");
    assert_eq!(cur, Some(3));
    let cur = stpecpy(&mut buf, cur, b"defgh\0");
    assert_eq!(cur, None);
    assert_eq!(&buf, b"abcde\0");

    let snapshot = buf;
    assert_eq!(stpecpy(&mut buf, cur, b"xyz\0"), None);
    assert_eq!(buf, snapshot);
}

#[test]
fn str_chain_builds_then_reports_truncation() {
    let mut buf = [0u8; 8];
    let mut chain = StrChain::new(&mut buf);
    chain.push(b"ab\0").push(b"cd\0");
    assert_eq!(chain.cursor(), Some(4));
    chain.push(b"efghij\0").push(b"k\0");
    assert!(chain.is_failed());
    assert_eq!(chain.as_bytes(), b"abcdefg");
    assert_eq!(chain.finish(), Err(Truncated));
}

#[test]
fn tokenizer_skips_empty_fields() {
    assert_eq!(tokens(b"a,,b,c\0", b",\0"), ["a", "b", "c"]);
    assert!(tokens(b",,,\0", b",\0").is_empty());
    assert!(tokens(b"\0", b",\0").is_empty());
    assert_eq!(tokens(b"  key = value \0", b" =\0"), ["key", "value"]);
}

#[test]
fn tokenizer_sequences_are_independent() {
    let mut left = *b"1 2\0";
    let mut right = *b"x;y\0";
    let mut save_left = SavePtr::new();
    let mut save_right = SavePtr::new();

    let (s, l) = strtok_r(&mut left, b" \0", &mut save_left).unwrap();
    assert_eq!(&left[s..s + l], b"1");
    let (s, l) = strtok_r(&mut right, b";\0", &mut save_right).unwrap();
    assert_eq!(&right[s..s + l], b"x");
    let (s, l) = strtok_r(&mut left, b" \0", &mut save_left).unwrap();
    assert_eq!(&left[s..s + l], b"2");
    let (s, l) = strtok_r(&mut right, b";\0", &mut save_right).unwrap();
    assert_eq!(&right[s..s + l], b"y");
}

#[test]
fn strdup_is_independent_of_source() {
    let mut original = *b"hello\0";
    let dup = strdup(&original).unwrap();
    assert_eq!(&dup[..], b"hello\0");
    assert_eq!(dup.len(), 6);

    original[0] = b'j';
    assert_eq!(&dup[..], b"hello\0");
}

#[test]
fn strndup_never_reads_past_limit() {
    let unterminated = b"abcdef";
    let dup = string::strndup(unterminated, 3).unwrap();
    assert_eq!(&dup[..], b"abc\0");
    let dup = string::strndup(b"ab\0cd", 10).unwrap();
    assert_eq!(&dup[..], b"ab\0");
}
