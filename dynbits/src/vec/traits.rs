use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

use crate::bit::Block;
use crate::vec::{BitRef, DynamicBitset, Iter, IterMut};
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};

impl<B: Block> BitLength for DynamicBitset<B> {
    fn bit_len(&self) -> usize {
        self.len()
    }
    const BLOCK_BIT_LEN: usize = B::BITS;
}

impl<B: Block> Bitwise for DynamicBitset<B> {
    #[inline]
    fn index(&self, index: usize) -> bool {
        self.test(index)
    }

    #[inline]
    fn support(&self) -> impl SortedIterator<Item = usize> {
        self.iter_ones().assume_sorted_by_item()
    }

    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.first_one()
    }

    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.last_one()
    }

    #[inline]
    fn weight(&self) -> usize {
        self.count()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.none()
    }
}

impl<B: Block> BitwiseMut for DynamicBitset<B> {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        self.set(index, to);
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        self.flip(index);
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.reset_all();
    }
}

impl<B: Block> BitwisePair for DynamicBitset<B> {
    fn and_weight(&self, other: &Self) -> usize {
        self.paired_weight(other, |block, other_block| block & other_block)
    }

    fn or_weight(&self, other: &Self) -> usize {
        self.paired_weight(other, |block, other_block| block | other_block)
    }

    fn xor_weight(&self, other: &Self) -> usize {
        self.paired_weight(other, |block, other_block| block ^ other_block)
    }
}

impl<B: Block> DynamicBitset<B> {
    fn paired_weight(&self, other: &Self, combine: impl Fn(B, B) -> B) -> usize {
        assert_eq!(self.len(), other.len(), "bitset lengths differ");
        self.blocks
            .iter()
            .zip(&other.blocks)
            .map(|(&block, &other_block)| combine(block, other_block).popcount())
            .sum()
    }
}

impl<B: Block> BitwisePairMut for DynamicBitset<B> {
    fn assign(&mut self, other: &Self) {
        assert_eq!(self.len(), other.len(), "bitset lengths differ");
        self.blocks.copy_from_slice(&other.blocks);
    }

    fn bitand_assign(&mut self, other: &Self) {
        self.intersect_with(other);
    }

    fn bitor_assign(&mut self, other: &Self) {
        self.union_with(other);
    }

    fn bitxor_assign(&mut self, other: &Self) {
        self.symmetric_difference_with(other);
    }

    fn bitclear_assign(&mut self, other: &Self) {
        self.difference_with(other);
    }
}

impl<'life, B: Block> IntoBitIterator for &'life DynamicBitset<B> {
    type BitIterator = Iter<'life, B>;

    fn iter_bits(self) -> Self::BitIterator {
        self.iter()
    }
}

impl<'life, B: Block> IntoIterator for &'life DynamicBitset<B> {
    type Item = bool;
    type IntoIter = Iter<'life, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'life, B: Block> IntoIterator for &'life mut DynamicBitset<B> {
    type Item = BitRef<'life, B>;
    type IntoIter = IterMut<'life, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
