//! String duplication: strdup and strndup.
//!
//! Each call makes exactly one allocation, sized to the content plus its
//! terminator, and only after the size is known. Ownership of the returned
//! buffer passes to the caller.

use crate::malloc::{Allocator, SystemAllocator};

use super::str::{strlen, strnlen};

/// Duplicates the C string `s`, including its terminator.
///
/// Returns `None` if the allocation fails.
pub fn strdup(s: &[u8]) -> Option<Box<[u8]>> {
    strdup_in(s, &SystemAllocator)
}

/// [`strdup`] through a caller-supplied allocator.
pub fn strdup_in<A: Allocator + ?Sized>(s: &[u8], alloc: &A) -> Option<Box<[u8]>> {
    let len = strlen(s);
    copy_terminated(&s[..len], alloc)
}

/// Duplicates at most `limit` bytes of the C string `s`.
///
/// The source is measured with [`strnlen`], so it is never read past
/// `limit` and need not contain a terminator within that range. The copy
/// always gets its own NUL appended.
pub fn strndup(s: &[u8], limit: usize) -> Option<Box<[u8]>> {
    strndup_in(s, limit, &SystemAllocator)
}

/// [`strndup`] through a caller-supplied allocator.
pub fn strndup_in<A: Allocator + ?Sized>(s: &[u8], limit: usize, alloc: &A) -> Option<Box<[u8]>> {
    let len = strnlen(s, limit);
    copy_terminated(&s[..len], alloc)
}

fn copy_terminated<A: Allocator + ?Sized>(content: &[u8], alloc: &A) -> Option<Box<[u8]>> {
    let size = content.len().checked_add(1)?;
    let mut dup = alloc.allocate(size).ok()?;
    dup.extend_from_slice(content);
    dup.push(0);
    Some(dup.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::malloc::AllocError;

    /// Refuses every request.
    struct Exhausted;

    impl Allocator for Exhausted {
        fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
            Err(AllocError::Exhausted { size })
        }

        fn reallocate(&self, _buf: Vec<u8>, size: usize) -> Result<Vec<u8>, AllocError> {
            Err(AllocError::Exhausted { size })
        }
    }

    /// Records the size of every request.
    #[derive(Default)]
    struct Recording {
        requests: Cell<usize>,
        last_size: Cell<usize>,
    }

    impl Allocator for Recording {
        fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
            self.requests.set(self.requests.get() + 1);
            self.last_size.set(size);
            SystemAllocator.allocate(size)
        }

        fn reallocate(&self, buf: Vec<u8>, size: usize) -> Result<Vec<u8>, AllocError> {
            SystemAllocator.reallocate(buf, size)
        }
    }

    #[test]
    fn test_strdup_basic() {
        let dup = strdup(b"hello\0").unwrap();
        assert_eq!(dup.len(), 6);
        assert_eq!(&dup[..], b"hello\0");
    }

    #[test]
    fn test_strdup_is_independent() {
        let mut original = *b"hello\0";
        let dup = strdup(&original).unwrap();
        original[0] = b'J';
        assert_eq!(&dup[..], b"hello\0");
    }

    #[test]
    fn test_strdup_empty() {
        assert_eq!(&strdup(b"\0").unwrap()[..], b"\0");
    }

    #[test]
    fn test_strdup_single_exact_request() {
        let alloc = Recording::default();
        strdup_in(b"abc\0ignored", &alloc).unwrap();
        assert_eq!(alloc.requests.get(), 1);
        assert_eq!(alloc.last_size.get(), 4);
    }

    #[test]
    fn test_strdup_allocation_failure() {
        assert!(strdup_in(b"hello\0", &Exhausted).is_none());
        assert!(strndup_in(b"hello\0", 3, &Exhausted).is_none());
    }

    #[test]
    fn test_strndup_limits() {
        assert_eq!(&strndup(b"hello\0", 3).unwrap()[..], b"hel\0");
        assert_eq!(&strndup(b"hello\0", 5).unwrap()[..], b"hello\0");
        assert_eq!(&strndup(b"hello\0", 64).unwrap()[..], b"hello\0");
        assert_eq!(&strndup(b"hello\0", 0).unwrap()[..], b"\0");
    }

    #[test]
    fn test_strndup_unterminated_source() {
        let raw = *b"abcdef";
        let alloc = Recording::default();
        let dup = strndup_in(&raw, 4, &alloc).unwrap();
        assert_eq!(&dup[..], b"abcd\0");
        assert_eq!(alloc.last_size.get(), 5);
    }
}
