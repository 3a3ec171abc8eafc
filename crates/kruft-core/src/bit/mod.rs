//! Bit manipulation: byte swaps, power-of-two helpers, rotations and counts.
//!
//! Fixed-width free functions in the C++20 `<bit>` vocabulary
//! (`bit_ceil32`, `countl_zero64`, ...). All are `const fn` and total:
//! none of them panics, including at the edges of each width.

/// Reverses the byte order of a 16-bit value.
#[inline]
pub const fn byteswap16(x: u16) -> u16 {
    x.swap_bytes()
}

/// Reverses the byte order of a 32-bit value.
#[inline]
pub const fn byteswap32(x: u32) -> u32 {
    x.swap_bytes()
}

/// Reverses the byte order of a 64-bit value.
#[inline]
pub const fn byteswap64(x: u64) -> u64 {
    x.swap_bytes()
}

macro_rules! single_bit {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            /// Returns `true` if exactly one bit is set.
            #[inline]
            pub const fn $name(x: $ty) -> bool {
                x != 0 && (x & (x - 1)) == 0
            }
        )*
    };
}

single_bit!(
    has_single_bit8: u8,
    has_single_bit16: u16,
    has_single_bit32: u32,
    has_single_bit64: u64,
);

macro_rules! rotations {
    ($($rotl:ident, $rotr:ident: $ty:ty),* $(,)?) => {
        $(
            /// Rotates left by `c` bits. The count is taken modulo the width;
            /// a negative count rotates right.
            #[inline]
            pub const fn $rotl(x: $ty, c: i32) -> $ty {
                x.rotate_left(c.rem_euclid(<$ty>::BITS as i32) as u32)
            }

            /// Rotates right by `c` bits. The count is taken modulo the width;
            /// a negative count rotates left.
            #[inline]
            pub const fn $rotr(x: $ty, c: i32) -> $ty {
                x.rotate_right(c.rem_euclid(<$ty>::BITS as i32) as u32)
            }
        )*
    };
}

rotations!(
    rotl8, rotr8: u8,
    rotl16, rotr16: u16,
    rotl32, rotr32: u32,
    rotl64, rotr64: u64,
);

macro_rules! widths {
    ($($ty:ty => $ceil:ident, $floor:ident, $width:ident, $clz:ident, $clo:ident, $ctz:ident, $cto:ident, $pop:ident);* $(;)?) => {
        $(
            /// Smallest power of two not less than `x`.
            ///
            /// `0` and `1` map to `1`. Inputs above the largest representable
            /// power of two wrap to `0`.
            #[inline]
            pub const fn $ceil(x: $ty) -> $ty {
                if x <= 1 {
                    return 1;
                }
                let smeared = <$ty>::MAX >> (x - 1).leading_zeros();
                smeared.wrapping_add(1)
            }

            /// Largest power of two not greater than `x`, or `0` for `0`.
            #[inline]
            pub const fn $floor(x: $ty) -> $ty {
                if x == 0 { 0 } else { 1 << ($width(x) - 1) }
            }

            /// Number of bits needed to represent `x` (`0` for `0`).
            #[inline]
            pub const fn $width(x: $ty) -> u32 {
                <$ty>::BITS - x.leading_zeros()
            }

            /// Count of consecutive zero bits from the most significant end.
            #[inline]
            pub const fn $clz(x: $ty) -> u32 {
                x.leading_zeros()
            }

            /// Count of consecutive one bits from the most significant end.
            #[inline]
            pub const fn $clo(x: $ty) -> u32 {
                x.leading_ones()
            }

            /// Count of consecutive zero bits from the least significant end.
            #[inline]
            pub const fn $ctz(x: $ty) -> u32 {
                x.trailing_zeros()
            }

            /// Count of consecutive one bits from the least significant end.
            #[inline]
            pub const fn $cto(x: $ty) -> u32 {
                x.trailing_ones()
            }

            /// Number of set bits.
            #[inline]
            pub const fn $pop(x: $ty) -> u32 {
                x.count_ones()
            }
        )*
    };
}

widths! {
    u32 => bit_ceil32, bit_floor32, bit_width32, countl_zero32, countl_one32, countr_zero32, countr_one32, popcount32;
    u64 => bit_ceil64, bit_floor64, bit_width64, countl_zero64, countl_one64, countr_zero64, countr_one64, popcount64;
}

/// Number of set bits in a 16-bit value.
#[inline]
pub const fn popcount16(x: u16) -> u32 {
    x.count_ones()
}
