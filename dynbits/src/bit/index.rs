use crate::bit::Block;

// Mapping between logical bit positions and (block, bit-within-block) coordinates.

#[inline]
#[must_use]
pub fn block_index<B: Block>(pos: usize) -> usize {
    pos / B::BITS
}

#[inline]
#[must_use]
pub fn bit_index<B: Block>(pos: usize) -> usize {
    pos % B::BITS
}

#[inline]
#[must_use]
pub fn block_and_bit_index<B: Block>(pos: usize) -> (usize, usize) {
    (block_index::<B>(pos), bit_index::<B>(pos))
}

#[inline]
#[must_use]
pub fn bit_mask<B: Block>(pos: usize) -> B {
    B::ONE << bit_index::<B>(pos)
}

/// Mask covering bits `first..=last` of a single block.
///
/// # Panics
///
/// In debug builds, panics unless `first <= last < B::BITS`.
#[inline]
#[must_use]
pub fn bit_mask_range<B: Block>(first: usize, last: usize) -> B {
    debug_assert!(first <= last && last < B::BITS, "invalid bit range {first}..={last}");
    let through_last = if last == B::BITS - 1 {
        B::ONES
    } else {
        !(B::ONES << (last + 1))
    };
    let below_first = !(B::ONES << first);
    through_last ^ below_first
}

#[inline]
#[must_use]
pub fn blocks_needed<B: Block>(bit_count: usize) -> usize {
    bit_count.div_ceil(B::BITS)
}

#[inline]
#[must_use]
pub fn test_bit<B: Block>(blocks: &[B], pos: usize) -> bool {
    blocks[block_index::<B>(pos)] & bit_mask::<B>(pos) != B::ZERO
}
