use std::fmt::{Binary, Debug};
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

/// Number of set bits in every possible byte value.
pub const BYTE_WEIGHTS: [u8; 256] = byte_weights();

const fn byte_weights() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut value = 1usize;
    while value < 256 {
        table[value] = (value & 1) as u8 + table[value >> 1];
        value += 1;
    }
    table
}

/// An unsigned machine word used as the storage unit of a [`DynamicBitset`](crate::DynamicBitset).
///
/// Bit `i` of a block is the bit selected by `ONE << i`. Shifts are only ever performed by
/// amounts strictly less than [`Block::BITS`].
pub trait Block
where
    Self: From<bool>
        + Copy
        + Default
        + Eq
        + Ord
        + Hash
        + Debug
        + Binary
        + Send
        + Sync
        + 'static
        + Not<Output = Self>
        + BitAnd<Output = Self>
        + BitOr<Output = Self>
        + BitXor<Output = Self>
        + BitAndAssign
        + BitOrAssign
        + BitXorAssign
        + Shl<usize, Output = Self>
        + Shr<usize, Output = Self>,
{
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const ONES: Self;

    fn low_byte(self) -> u8;
    fn trailing_zero_count(self) -> usize;
    fn leading_zero_count(self) -> usize;
    fn to_u128(self) -> u128;
    /// Keeps the low `Self::BITS` bits of `value`.
    fn from_u128(value: u128) -> Self;

    /// Population count, looked up one byte at a time in [`BYTE_WEIGHTS`].
    #[inline]
    fn popcount(self) -> usize {
        let mut weight = 0;
        let mut shift = 0;
        while shift < Self::BITS {
            weight += usize::from(BYTE_WEIGHTS[usize::from((self >> shift).low_byte())]);
            shift += 8;
        }
        weight
    }
}

macro_rules! implement_block {
    ($word_type:ty) => {
        impl Block for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ONES: Self = <$word_type>::MAX;

            #[inline]
            fn low_byte(self) -> u8 {
                self as u8
            }

            #[inline]
            fn trailing_zero_count(self) -> usize {
                <$word_type>::trailing_zeros(self) as usize
            }

            #[inline]
            fn leading_zero_count(self) -> usize {
                <$word_type>::leading_zeros(self) as usize
            }

            #[inline]
            fn to_u128(self) -> u128 {
                u128::from(self)
            }

            #[inline]
            fn from_u128(value: u128) -> Self {
                value as $word_type
            }
        }
    };
}

implement_block!(u8);
implement_block!(u16);
implement_block!(u32);
implement_block!(u64);
implement_block!(u128);
