//! Memory allocation seam.
//!
//! The string duplication helpers do not allocate directly; they request
//! storage from an [`Allocator`]. [`SystemAllocator`] is backed by the global
//! allocator through fallible reservations, so exhaustion is reported as an
//! error instead of aborting the process. Embedders can supply their own
//! implementation, for example an arena.

use thiserror::Error;

/// Allocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AllocError {
    /// The allocator could not provide `size` bytes.
    #[error("allocation of {size} bytes failed")]
    Exhausted { size: usize },
    /// `nmemb * size` does not fit in `usize`.
    #[error("array allocation of {nmemb} x {size} bytes overflows")]
    Overflow { nmemb: usize, size: usize },
}

/// Source of byte buffers.
pub trait Allocator {
    /// Returns an empty buffer able to hold exactly `size` bytes without
    /// reallocating.
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError>;

    /// Resizes `buf` to `size` bytes, zero-filling any growth and
    /// discarding bytes past `size` on shrink.
    ///
    /// On failure `buf` is dropped, mirroring how a failed C `realloc` is
    /// usually followed by `free` in callers.
    fn reallocate(&self, buf: Vec<u8>, size: usize) -> Result<Vec<u8>, AllocError>;
}

/// Allocator backed by the global Rust allocator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemAllocator;

impl Allocator for SystemAllocator {
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(size)
            .map_err(|_| AllocError::Exhausted { size })?;
        Ok(buf)
    }

    fn reallocate(&self, mut buf: Vec<u8>, size: usize) -> Result<Vec<u8>, AllocError> {
        if size > buf.len() {
            buf.try_reserve_exact(size - buf.len())
                .map_err(|_| AllocError::Exhausted { size })?;
        }
        buf.resize(size, 0);
        buf.shrink_to_fit();
        Ok(buf)
    }
}

impl<A: Allocator + ?Sized> Allocator for &A {
    fn allocate(&self, size: usize) -> Result<Vec<u8>, AllocError> {
        (**self).allocate(size)
    }

    fn reallocate(&self, buf: Vec<u8>, size: usize) -> Result<Vec<u8>, AllocError> {
        (**self).reallocate(buf, size)
    }
}

/// Resizes `buf` to hold `nmemb` elements of `size` bytes.
///
/// Equivalent to BSD `reallocarray`: the multiplication is overflow-checked
/// and reported as [`AllocError::Overflow`] before any allocation happens.
pub fn reallocarray(buf: Vec<u8>, nmemb: usize, size: usize) -> Result<Vec<u8>, AllocError> {
    reallocarray_in(buf, nmemb, size, &SystemAllocator)
}

/// [`reallocarray`] through a caller-supplied allocator.
pub fn reallocarray_in<A: Allocator + ?Sized>(
    buf: Vec<u8>,
    nmemb: usize,
    size: usize,
    alloc: &A,
) -> Result<Vec<u8>, AllocError> {
    let total = nmemb
        .checked_mul(size)
        .ok_or(AllocError::Overflow { nmemb, size })?;
    alloc.reallocate(buf, total)
}
