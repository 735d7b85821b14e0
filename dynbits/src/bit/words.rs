use rand::distributions::{Distribution, Standard};
use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::Block;
use crate::bit::index::bit_mask;
use crate::vec::Ones;
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};

/// Iterates the bits of a single word, lowest bit first.
#[derive(Clone, Debug)]
pub struct WordBits<B: Block> {
    word: B,
    position: usize,
}

impl<B: Block> WordBits<B> {
    #[must_use]
    pub fn from_word(word: B) -> WordBits<B> {
        WordBits { word, position: 0 }
    }
}

impl<B: Block> Iterator for WordBits<B> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.position == B::BITS {
            return None;
        }
        let value = self.word & bit_mask::<B>(self.position) != B::ZERO;
        self.position += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = B::BITS - self.position;
        (size, Some(size))
    }
}

impl<B: Block> ExactSizeIterator for WordBits<B> {}

/// Masked random word, as many low bits as requested.
fn random_word<B: Block>(bit_count: usize, random_number_generator: &mut impl rand::Rng) -> B
where
    Standard: Distribution<B>,
{
    assert!(bit_count <= B::BITS);
    if bit_count == 0 {
        return B::ZERO;
    }
    let mask = B::ONES >> (B::BITS - bit_count);
    random_number_generator.r#gen::<B>() & mask
}

macro_rules! implement_word_traits {
    ($word_type:ty) => {
        impl BitLength for $word_type {
            fn bit_len(&self) -> usize {
                Self::BLOCK_BIT_LEN
            }
            const BLOCK_BIT_LEN: usize = <$word_type as Block>::BITS;
        }

        impl Bitwise for $word_type {
            #[inline]
            fn index(&self, index: usize) -> bool {
                assert!(index < Self::BLOCK_BIT_LEN);
                *self & bit_mask::<$word_type>(index) != 0
            }

            #[inline]
            fn support(&self) -> impl SortedIterator<Item = usize> {
                Ones::new(std::slice::from_ref(self)).assume_sorted_by_item()
            }

            #[inline]
            fn weight(&self) -> usize {
                self.popcount()
            }

            #[inline]
            fn is_zero(&self) -> bool {
                *self == 0
            }

            #[inline]
            fn min_support(&self) -> Option<usize> {
                (*self != 0).then(|| self.trailing_zero_count())
            }

            #[inline]
            fn max_support(&self) -> Option<usize> {
                (*self != 0).then(|| Self::BLOCK_BIT_LEN - self.leading_zero_count() - 1)
            }
        }

        impl BitwiseMut for $word_type {
            #[inline]
            fn assign_index(&mut self, index: usize, to: bool) {
                assert!(index < Self::BLOCK_BIT_LEN);
                let mask = bit_mask::<$word_type>(index);
                if to {
                    *self |= mask;
                } else {
                    *self &= !mask;
                }
            }

            #[inline]
            fn negate_index(&mut self, index: usize) {
                assert!(
                    index < Self::BLOCK_BIT_LEN,
                    "index {} is larger than capacity {}",
                    index,
                    Self::BLOCK_BIT_LEN
                );
                *self ^= bit_mask::<$word_type>(index);
            }

            #[inline]
            fn clear_bits(&mut self) {
                *self = 0;
            }

            fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
                *self = random_word::<$word_type>(bit_count, random_number_generator);
            }
        }

        impl BitwisePair for $word_type {
            #[inline]
            fn and_weight(&self, other: &Self) -> usize {
                (*self & *other).popcount()
            }

            #[inline]
            fn or_weight(&self, other: &Self) -> usize {
                (*self | *other).popcount()
            }

            #[inline]
            fn xor_weight(&self, other: &Self) -> usize {
                (*self ^ *other).popcount()
            }
        }

        impl BitwisePairMut for $word_type {
            #[inline]
            fn assign(&mut self, other: &Self) {
                *self = *other;
            }

            #[inline]
            fn bitand_assign(&mut self, other: &Self) {
                *self &= *other;
            }

            #[inline]
            fn bitor_assign(&mut self, other: &Self) {
                *self |= *other;
            }

            #[inline]
            fn bitxor_assign(&mut self, other: &Self) {
                *self ^= *other;
            }

            #[inline]
            fn bitclear_assign(&mut self, other: &Self) {
                *self &= !*other;
            }
        }

        impl IntoBitIterator for $word_type {
            type BitIterator = WordBits<$word_type>;
            fn iter_bits(self) -> Self::BitIterator {
                WordBits::from_word(self)
            }
        }

        impl IntoBitIterator for &$word_type {
            type BitIterator = WordBits<$word_type>;
            fn iter_bits(self) -> Self::BitIterator {
                WordBits::from_word(*self)
            }
        }
    };
}

implement_word_traits!(u8);
implement_word_traits!(u16);
implement_word_traits!(u32);
implement_word_traits!(u64);
implement_word_traits!(u128);
