//! Endian-aware loads and stores of fixed-width integers.
//!
//! Each function reads or writes the leading bytes of a slice in an explicit
//! byte order, independent of the host. Slices shorter than the integer are
//! rejected with [`ShortBuffer`]; trailing bytes are left alone.

use thiserror::Error;

/// The slice is shorter than the integer being loaded or stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("buffer of {have} bytes is too short, need {need}")]
pub struct ShortBuffer {
    pub need: usize,
    pub have: usize,
}

macro_rules! load_store {
    ($($ty:ty, $n:literal: $load_le:ident, $load_be:ident, $store_le:ident, $store_be:ident);* $(;)?) => {
        $(
            #[doc = concat!("Loads a little-endian `", stringify!($ty), "` from the start of `src`.")]
            pub fn $load_le(src: &[u8]) -> Result<$ty, ShortBuffer> {
                head::<$n>(src).map(<$ty>::from_le_bytes)
            }

            #[doc = concat!("Loads a big-endian `", stringify!($ty), "` from the start of `src`.")]
            pub fn $load_be(src: &[u8]) -> Result<$ty, ShortBuffer> {
                head::<$n>(src).map(<$ty>::from_be_bytes)
            }

            #[doc = concat!("Stores `value` little-endian at the start of `dest`.")]
            pub fn $store_le(dest: &mut [u8], value: $ty) -> Result<(), ShortBuffer> {
                put(dest, &value.to_le_bytes())
            }

            #[doc = concat!("Stores `value` big-endian at the start of `dest`.")]
            pub fn $store_be(dest: &mut [u8], value: $ty) -> Result<(), ShortBuffer> {
                put(dest, &value.to_be_bytes())
            }
        )*
    };
}

load_store! {
    u16, 2: load_u16le, load_u16be, store_u16le, store_u16be;
    u32, 4: load_u32le, load_u32be, store_u32le, store_u32be;
    u64, 8: load_u64le, load_u64be, store_u64le, store_u64be;
}

fn head<const N: usize>(src: &[u8]) -> Result<[u8; N], ShortBuffer> {
    src.first_chunk::<N>().copied().ok_or(ShortBuffer {
        need: N,
        have: src.len(),
    })
}

fn put(dest: &mut [u8], bytes: &[u8]) -> Result<(), ShortBuffer> {
    let have = dest.len();
    let slot = dest.get_mut(..bytes.len()).ok_or(ShortBuffer {
        need: bytes.len(),
        have,
    })?;
    slot.copy_from_slice(bytes);
    Ok(())
}
