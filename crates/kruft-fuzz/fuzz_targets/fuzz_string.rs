#![no_main]
//! Checks the bounded copy families against their contracts on arbitrary
//! input: the first two bytes pick the capacity and a delimiter, the rest is
//! the source string.

use kruft_core::string::{
    CopyOutcome, SavePtr, StrChain, lcopy, strlcat, strlcpy, strlen, strnlen, strscat, strscpy,
    strtok_r,
};
use libfuzzer_sys::fuzz_target;

const GUARD: u8 = 0xA5;

fuzz_target!(|data: &[u8]| {
    let [cap, delim, src @ ..] = data else {
        return;
    };
    let cap = usize::from(*cap);
    let src_len = strlen(src);

    // strscpy: length or truncation, always terminated, never past capacity.
    let mut buf = vec![GUARD; cap + 1];
    match strscpy(&mut buf[..cap], src) {
        CopyOutcome::NoCapacity => assert_eq!(cap, 0),
        CopyOutcome::Copied(n) => {
            assert_eq!(n, src_len);
            assert_eq!(&buf[..n], &src[..n]);
            assert_eq!(buf[n], 0);
        }
        CopyOutcome::Truncated => {
            assert!(src_len >= cap);
            assert_eq!(&buf[..cap - 1], &src[..cap - 1]);
            assert_eq!(buf[cap - 1], 0);
        }
    }
    assert_eq!(buf[cap], GUARD);

    // strlcpy: reports the source length; retrying with ret + 1 fits.
    let mut buf = vec![GUARD; cap + 1];
    let ret = strlcpy(&mut buf[..cap], src);
    assert_eq!(buf[cap], GUARD);
    if cap > 0 {
        assert_eq!(ret, src_len);
        if lcopy::is_truncated(ret, cap) {
            let mut retry = vec![0u8; ret + 1];
            assert_eq!(strlcpy(&mut retry, src), ret);
            assert_eq!(&retry[..ret], &src[..ret]);
        }
    }

    // Concatenation families agree on what they leave in the buffer.
    let half = src.len() / 2;
    let mut a = vec![GUARD; cap + 1];
    let _ = strscpy(&mut a[..cap], &src[..half]);
    let mut b = a.clone();
    let scat = strscat(&mut a[..cap], &src[half..]);
    let lcat = strlcat(&mut b[..cap], &src[half..]);
    assert_eq!(a, b);
    if let Some(n) = scat.len() {
        assert!(n < cap.max(1));
        assert_eq!(lcat, n);
    }

    // A chain never writes past the buffer and its prefix stays terminated.
    let mut chain_buf = vec![GUARD; cap + 1];
    let mut chain = StrChain::new(&mut chain_buf[..cap]);
    for piece in src.chunks(3) {
        let mut part = piece.to_vec();
        part.push(0);
        chain.push(&part);
    }
    if let Some(end) = chain.cursor() {
        assert_eq!(chain.as_bytes().len(), end);
    }
    assert_eq!(chain_buf[cap], GUARD);

    // Tokens are non-empty, delimiter-free and in order.
    let mut subject = src.to_vec();
    subject.push(0);
    let delims = [*delim, 0];
    let mut save = SavePtr::new();
    let mut last_end = 0;
    while let Some((start, len)) = strtok_r(&mut subject, &delims, &mut save) {
        assert!(len > 0);
        assert!(start >= last_end);
        assert_eq!(strnlen(&subject[start..], len + 1), len);
        assert!(!subject[start..start + len].contains(delim));
        last_end = start + len;
    }
    assert!(save.is_exhausted());
});
