//! String and memory operations.
//!
//! Implements the bounded `<string.h>` family as safe Rust operating on
//! slices. Two truncation conventions coexist:
//!
//! - [`scopy`]: `strscpy`, `strscat`, `stpecpy` report truncation out of band
//!   ([`CopyOutcome::Truncated`] or a `None` cursor).
//! - [`lcopy`]: `strlcpy`, `strlcat` always return the desired length; the
//!   caller compares it against the capacity.

pub mod dup;
pub mod lcopy;
pub mod mem;
pub mod scopy;
pub mod span;
pub mod str;
pub mod strtok;

// Re-export commonly used functions.
pub use dup::{strdup, strdup_in, strndup, strndup_in};
pub use lcopy::{strlcat, strlcpy};
pub use mem::memccpy;
pub use scopy::{CopyOutcome, StrChain, TRUNCATED, Truncated, stpecpy, strscat, strscpy};
pub use span::{strcspn, strspn};
pub use str::{strcmp, strlen, strnlen};
pub use strtok::{SavePtr, strtok_r};
