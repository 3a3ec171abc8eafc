//! # kruft-core
//!
//! Small, portable utilities with consistent semantics everywhere:
//! bounded string copies (two truncation conventions), reentrant
//! tokenization, string duplication through a pluggable allocator,
//! C-locale character classification, bit manipulation, endian-aware
//! load/store helpers and a deterministic PRNG.
//!
//! C strings are modelled as byte slices. The first `0x00` byte terminates
//! the string; a slice without one is terminated by its end. No `unsafe`
//! code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod bit;
pub mod ctype;
pub mod malloc;
pub mod rand;
pub mod serial;
pub mod string;

pub use malloc::{AllocError, Allocator, SystemAllocator};
pub use string::{CopyOutcome, SavePtr, StrChain, Truncated};
