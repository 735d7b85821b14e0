use std::cell::Cell;
use std::iter::FusedIterator;

use crate::bit::Block;
use crate::bit::index::{bit_index, block_index, test_bit};
use crate::vec::BitRef;

/// Double-ended cursor over the bits of a bit-set, lowest position first.
///
/// `nth` and `nth_back` jump in constant time.
#[derive(Clone, Debug)]
pub struct Iter<'life, B: Block> {
    blocks: &'life [B],
    front: usize,
    back: usize,
}

impl<'life, B: Block> Iter<'life, B> {
    pub(crate) fn new(blocks: &'life [B], bit_count: usize) -> Self {
        debug_assert!(bit_count <= blocks.len() * B::BITS);
        Iter {
            blocks,
            front: 0,
            back: bit_count,
        }
    }
}

impl<B: Block> Iterator for Iter<'_, B> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let bit = test_bit(self.blocks, self.front);
        self.front += 1;
        Some(bit)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<bool> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.back - self.front;
        (size, Some(size))
    }
}

impl<B: Block> DoubleEndedIterator for Iter<'_, B> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(test_bit(self.blocks, self.back))
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<bool> {
        self.back = self.back.saturating_sub(n).max(self.front);
        self.next_back()
    }
}

impl<B: Block> ExactSizeIterator for Iter<'_, B> {}
impl<B: Block> FusedIterator for Iter<'_, B> {}

/// Yields a [`BitRef`] for every position of a bit-set.
pub struct IterMut<'life, B: Block> {
    cells: &'life [Cell<B>],
    front: usize,
    back: usize,
}

impl<'life, B: Block> IterMut<'life, B> {
    pub(crate) fn new(cells: &'life [Cell<B>], bit_count: usize) -> Self {
        IterMut {
            cells,
            front: 0,
            back: bit_count,
        }
    }

    fn proxy(&self, pos: usize) -> BitRef<'life, B> {
        BitRef::new(&self.cells[block_index::<B>(pos)], bit_index::<B>(pos))
    }
}

impl<'life, B: Block> Iterator for IterMut<'life, B> {
    type Item = BitRef<'life, B>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let bit = self.proxy(self.front);
        self.front += 1;
        Some(bit)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.back - self.front;
        (size, Some(size))
    }
}

impl<B: Block> DoubleEndedIterator for IterMut<'_, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.proxy(self.back))
    }
}

impl<B: Block> ExactSizeIterator for IterMut<'_, B> {}
impl<B: Block> FusedIterator for IterMut<'_, B> {}

/// Ascending positions of the set bits in a run of blocks, skipping zero blocks whole.
#[derive(Clone, Debug)]
pub struct Ones<'life, B: Block> {
    blocks: &'life [B],
    block: usize,
    remaining: B,
}

impl<'life, B: Block> Ones<'life, B> {
    pub(crate) fn new(blocks: &'life [B]) -> Self {
        Ones {
            blocks,
            block: 0,
            remaining: blocks.first().copied().unwrap_or(B::ZERO),
        }
    }
}

impl<B: Block> Iterator for Ones<'_, B> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.remaining != B::ZERO {
                let bit = self.remaining.trailing_zero_count();
                self.remaining ^= B::ONE << bit;
                return Some(self.block * B::BITS + bit);
            }
            self.block += 1;
            if self.block >= self.blocks.len() {
                self.block = self.blocks.len();
                return None;
            }
            self.remaining = self.blocks[self.block];
        }
    }
}

impl<B: Block> FusedIterator for Ones<'_, B> {}
