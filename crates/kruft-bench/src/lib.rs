//! Benchmark inputs shared by the `kruft-bench` targets.

/// A C string of `len` copies of `fill` followed by its terminator.
#[must_use]
pub fn c_string(len: usize, fill: u8) -> Vec<u8> {
    let mut s = vec![fill; len];
    s.push(0);
    s
}

/// A C string of `fields` short words separated by runs of `delim`.
#[must_use]
pub fn delimited(fields: usize, delim: u8) -> Vec<u8> {
    let mut s = Vec::with_capacity(fields * 8 + 1);
    for i in 0..fields {
        if i > 0 {
            s.extend_from_slice(&[delim; 2]);
        }
        s.extend_from_slice(b"field");
        s.push(b'a' + (i % 26) as u8);
    }
    s.push(0);
    s
}
