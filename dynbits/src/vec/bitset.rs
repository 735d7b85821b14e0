use std::cell::Cell;
use std::cmp::Ordering;

use log::trace;
use rand::distributions::{Distribution, Standard};

use crate::bit::Block;
use crate::bit::index::{bit_index, bit_mask, bit_mask_range, block_and_bit_index, block_index, blocks_needed, test_bit};
use crate::error::BitsetError;
use crate::vec::{BitRef, Iter, IterMut, Ones};

/// Length sentinel meaning "unspecified, use the natural length".
pub const NPOS: usize = usize::MAX;

/// A resizable sequence of bits packed into unsigned words of type `B`.
///
/// Bit `0` is the lowest bit of the first block. Positions at or above [`len`](Self::len) inside
/// the last block are always zero, whatever operation ran last.
///
/// # Construction
///
/// ```
/// use dynbits::DynamicBitset;
///
/// let zeros = DynamicBitset::<u64>::zeros(100);
/// let ones = DynamicBitset::<u8>::ones(10);
/// let parsed: DynamicBitset = "1010101010".parse().unwrap();
/// let collected: DynamicBitset<u32> = [true, false, true].into_iter().collect();
///
/// assert_eq!(zeros.count(), 0);
/// assert_eq!(ones.count(), 10);
/// assert_eq!(parsed.count(), 5);
/// assert!(collected.test(2));
/// ```
///
/// # Preconditions
///
/// Single-bit accessors panic when the position is out of range, and binary operators panic
/// when the two operands differ in length. [`get`](Self::get) and
/// [`try_cast_to`](Self::try_cast_to) are the checked entry points.
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct DynamicBitset<B: Block = u64> {
    pub(crate) blocks: Vec<B>,
    pub(crate) bit_count: usize,
}

impl<B: Block> DynamicBitset<B> {
    pub const BITS_PER_BLOCK: usize = B::BITS;

    pub fn new() -> Self {
        DynamicBitset {
            blocks: Vec::new(),
            bit_count: 0,
        }
    }

    /// Creates a bit-set of `bit_count` bits, all equal to `value`.
    pub fn with_len(bit_count: usize, value: bool) -> Self {
        let fill = if value { B::ONES } else { B::ZERO };
        let mut bitset = DynamicBitset {
            blocks: vec![fill; blocks_needed::<B>(bit_count)],
            bit_count,
        };
        bitset.zero_unused_bits();
        bitset
    }

    pub fn zeros(bit_count: usize) -> Self {
        Self::with_len(bit_count, false)
    }

    pub fn ones(bit_count: usize) -> Self {
        Self::with_len(bit_count, true)
    }

    /// Creates a bit-set of `bit_count` bits whose low bits are taken from `word`.
    ///
    /// Bits of `word` at or above `bit_count` are dropped.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let bitset = DynamicBitset::<u8>::from_word(12, 0b1111_0000_0101u16);
    /// assert_eq!(bitset.to_string(), "111100000101");
    /// ```
    pub fn from_word<W: Block>(bit_count: usize, word: W) -> Self {
        let mut bitset = Self::zeros(bit_count);
        let mut value = word.to_u128();
        for block in &mut bitset.blocks {
            if value == 0 {
                break;
            }
            *block = B::from_u128(value);
            value = value.checked_shr(B::BITS as u32).unwrap_or(0);
        }
        bitset.zero_unused_bits();
        bitset
    }

    /// Creates a bit-set from whole words; the length is `BITS_PER_BLOCK` times the word count.
    pub fn from_blocks<Blocks: IntoIterator<Item = B>>(blocks: Blocks) -> Self {
        let blocks: Vec<B> = blocks.into_iter().collect();
        let bit_count = blocks.len() * B::BITS;
        DynamicBitset { blocks, bit_count }
    }

    pub fn random<R: rand::Rng>(bit_count: usize, random_number_generator: &mut R) -> Self
    where
        Standard: Distribution<B>,
    {
        let blocks = (0..blocks_needed::<B>(bit_count))
            .map(|_| random_number_generator.r#gen::<B>())
            .collect();
        let mut bitset = DynamicBitset { blocks, bit_count };
        bitset.zero_unused_bits();
        bitset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_count == 0
    }

    #[must_use]
    pub fn num_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Number of bits the current allocation can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.blocks.capacity().saturating_mul(B::BITS)
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        (isize::MAX as usize / size_of::<B>()).saturating_mul(B::BITS)
    }

    #[must_use]
    pub fn as_blocks(&self) -> &[B] {
        &self.blocks
    }

    #[must_use]
    pub fn into_blocks(self) -> Vec<B> {
        self.blocks
    }

    /// Number of positions in the last block that lie at or above `len()`.
    #[must_use]
    pub fn unused_bit_count(&self) -> usize {
        self.blocks.len() * B::BITS - self.bit_count
    }

    /// Number of bits in use in the last block, zero when `len()` is block aligned.
    #[inline]
    #[must_use]
    pub fn count_extra_bits(&self) -> usize {
        bit_index::<B>(self.bit_count)
    }

    fn zero_unused_bits(&mut self) {
        let extra_bits = self.count_extra_bits();
        if extra_bits != 0 {
            let last = self.blocks.len() - 1;
            self.blocks[last] &= !(B::ONES << extra_bits);
        }
    }

    #[inline]
    fn assert_in_range(&self, pos: usize) {
        assert!(
            pos < self.bit_count,
            "bit index {pos} out of range for bitset of length {}",
            self.bit_count
        );
    }

    #[inline]
    fn assert_same_len(&self, other: &Self) {
        assert!(
            self.bit_count == other.bit_count,
            "bitset lengths differ: {} and {}",
            self.bit_count,
            other.bit_count
        );
    }

    // Single bits

    /// Returns whether bit `pos` is set.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    #[must_use]
    pub fn test(&self, pos: usize) -> bool {
        self.assert_in_range(pos);
        test_bit(&self.blocks, pos)
    }

    #[must_use]
    pub fn get(&self, pos: usize) -> Option<bool> {
        (pos < self.bit_count).then(|| test_bit(&self.blocks, pos))
    }

    /// Sets bit `pos` to `value`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= self.len()`.
    pub fn set(&mut self, pos: usize, value: bool) -> &mut Self {
        self.assert_in_range(pos);
        let block = block_index::<B>(pos);
        if value {
            self.blocks[block] |= bit_mask::<B>(pos);
        } else {
            self.blocks[block] &= !bit_mask::<B>(pos);
        }
        self
    }

    pub fn reset(&mut self, pos: usize) -> &mut Self {
        self.set(pos, false)
    }

    pub fn flip(&mut self, pos: usize) -> &mut Self {
        self.assert_in_range(pos);
        self.blocks[block_index::<B>(pos)] ^= bit_mask::<B>(pos);
        self
    }

    /// Sets bit `pos` to `value` and returns its previous value.
    pub fn test_set(&mut self, pos: usize, value: bool) -> bool {
        let previous = self.test(pos);
        self.set(pos, value);
        previous
    }

    /// Mutable proxy for bit `pos`.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut bitset = DynamicBitset::<u16>::zeros(20);
    /// let mut bit = bitset.bit_mut(17);
    /// bit.set(true);
    /// bit ^= true;
    /// bit |= true;
    /// assert!(bitset.test(17));
    /// ```
    pub fn bit_mut(&mut self, pos: usize) -> BitRef<'_, B> {
        self.assert_in_range(pos);
        let (block, bit) = block_and_bit_index::<B>(pos);
        BitRef::new(Cell::from_mut(&mut self.blocks[block]), bit)
    }

    // Ranges

    /// Sets the `len` bits starting at `pos` to `value`.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut bitset = DynamicBitset::<u64>::zeros(5);
    /// bitset.set_range(1, 3, true);
    /// assert_eq!(bitset.to_string(), "01110");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pos + len > self.len()`.
    pub fn set_range(&mut self, pos: usize, len: usize, value: bool) -> &mut Self {
        if value {
            self.range_operation(pos, len, |block, mask| block | mask, |_| B::ONES);
        } else {
            self.range_operation(pos, len, |block, mask| block & !mask, |_| B::ZERO);
        }
        self
    }

    pub fn reset_range(&mut self, pos: usize, len: usize) -> &mut Self {
        self.set_range(pos, len, false)
    }

    pub fn flip_range(&mut self, pos: usize, len: usize) -> &mut Self {
        self.range_operation(pos, len, |block, mask| block ^ mask, |block| !block);
        self
    }

    /// Applies `partial` to the blocks the range only partly covers and `full` to the others.
    fn range_operation<Partial, Full>(&mut self, pos: usize, len: usize, partial: Partial, full: Full)
    where
        Partial: Fn(B, B) -> B,
        Full: Fn(B) -> B,
    {
        assert!(
            pos.checked_add(len).is_some_and(|end| end <= self.bit_count),
            "range of {len} bits at {pos} out of range for bitset of length {}",
            self.bit_count
        );
        if len == 0 {
            return;
        }

        let last = pos + len - 1;
        let (first_block, first_bit) = block_and_bit_index::<B>(pos);
        let (last_block, last_bit) = block_and_bit_index::<B>(last);

        if first_block == last_block {
            let block = &mut self.blocks[first_block];
            *block = partial(*block, bit_mask_range::<B>(first_bit, last_bit));
            return;
        }

        let mut full_start = first_block;
        if first_bit != 0 {
            let block = &mut self.blocks[first_block];
            *block = partial(*block, bit_mask_range::<B>(first_bit, B::BITS - 1));
            full_start += 1;
        }

        let mut full_end = last_block + 1;
        if last_bit != B::BITS - 1 {
            let block = &mut self.blocks[last_block];
            *block = partial(*block, bit_mask_range::<B>(0, last_bit));
            full_end -= 1;
        }

        for block in &mut self.blocks[full_start..full_end] {
            *block = full(*block);
        }
    }

    // Whole container

    pub fn set_all(&mut self) -> &mut Self {
        self.blocks.fill(B::ONES);
        self.zero_unused_bits();
        self
    }

    pub fn reset_all(&mut self) -> &mut Self {
        self.blocks.fill(B::ZERO);
        self
    }

    pub fn flip_all(&mut self) -> &mut Self {
        for block in &mut self.blocks {
            *block = !*block;
        }
        self.zero_unused_bits();
        self
    }

    /// Returns `true` when every bit is set; an empty bit-set qualifies.
    #[must_use]
    pub fn all(&self) -> bool {
        let extra_bits = self.count_extra_bits();
        let full_blocks = if extra_bits == 0 {
            self.blocks.len()
        } else {
            self.blocks.len() - 1
        };
        self.blocks[..full_blocks].iter().all(|&block| block == B::ONES)
            && (extra_bits == 0 || self.blocks[full_blocks] == !(B::ONES << extra_bits))
    }

    #[must_use]
    pub fn any(&self) -> bool {
        self.blocks.iter().any(|&block| block != B::ZERO)
    }

    #[must_use]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.blocks.iter().map(|block| block.popcount()).sum()
    }

    #[must_use]
    pub fn first_one(&self) -> Option<usize> {
        self.first_one_from_block(0)
    }

    /// Lowest set bit strictly above `pos`.
    #[must_use]
    pub fn next_one(&self, pos: usize) -> Option<usize> {
        let pos = pos.checked_add(1)?;
        if pos >= self.bit_count {
            return None;
        }
        let (block, bit) = block_and_bit_index::<B>(pos);
        let remaining = self.blocks[block] >> bit;
        if remaining != B::ZERO {
            return Some(pos + remaining.trailing_zero_count());
        }
        self.first_one_from_block(block + 1)
    }

    #[must_use]
    pub fn last_one(&self) -> Option<usize> {
        self.blocks
            .iter()
            .rposition(|&block| block != B::ZERO)
            .map(|index| index * B::BITS + B::BITS - 1 - self.blocks[index].leading_zero_count())
    }

    fn first_one_from_block(&self, first_block: usize) -> Option<usize> {
        self.blocks[first_block..]
            .iter()
            .position(|&block| block != B::ZERO)
            .map(|offset| {
                let index = first_block + offset;
                index * B::BITS + self.blocks[index].trailing_zero_count()
            })
    }

    /// Ascending positions of the set bits.
    pub fn iter_ones(&self) -> Ones<'_, B> {
        Ones::new(&self.blocks)
    }

    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(&self.blocks, self.bit_count)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, B> {
        let bit_count = self.bit_count;
        IterMut::new(Cell::from_mut(self.blocks.as_mut_slice()).as_slice_of_cells(), bit_count)
    }

    // Boolean combinators

    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn intersect_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (block, other_block) in self.blocks.iter_mut().zip(&other.blocks) {
            *block &= *other_block;
        }
    }

    pub fn union_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (block, other_block) in self.blocks.iter_mut().zip(&other.blocks) {
            *block |= *other_block;
        }
    }

    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (block, other_block) in self.blocks.iter_mut().zip(&other.blocks) {
            *block ^= *other_block;
        }
    }

    /// Clears every bit that is set in `other`.
    pub fn difference_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (block, other_block) in self.blocks.iter_mut().zip(&other.blocks) {
            *block &= !*other_block;
        }
    }

    // Shifts

    /// Moves every bit `distance` positions up (towards higher indices), filling with zeros.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut bitset: DynamicBitset<u8> = "0000000000011011".parse().unwrap();
    /// bitset.shift_up(7);
    /// assert_eq!(bitset.to_string(), "0000110110000000");
    /// ```
    pub fn shift_up(&mut self, distance: usize) {
        if distance >= self.bit_count {
            self.reset_all();
            return;
        }
        if distance == 0 {
            return;
        }

        let last = self.blocks.len() - 1;
        let (discarded, remainder) = block_and_bit_index::<B>(distance);
        let blocks = &mut self.blocks;

        if remainder == 0 {
            blocks.copy_within(..=last - discarded, discarded);
        } else {
            let carry = B::BITS - remainder;
            for index in (discarded + 1..=last).rev() {
                blocks[index] = (blocks[index - discarded - 1] >> carry) | (blocks[index - discarded] << remainder);
            }
            blocks[discarded] = blocks[0] << remainder;
        }
        blocks[..discarded].fill(B::ZERO);

        self.zero_unused_bits();
    }

    /// Moves every bit `distance` positions down (towards lower indices), filling with zeros.
    pub fn shift_down(&mut self, distance: usize) {
        if distance >= self.bit_count {
            self.reset_all();
            return;
        }
        if distance == 0 {
            return;
        }

        let last = self.blocks.len() - 1;
        let (discarded, remainder) = block_and_bit_index::<B>(distance);
        let blocks = &mut self.blocks;

        if remainder == 0 {
            blocks.copy_within(discarded.., 0);
        } else {
            let carry = B::BITS - remainder;
            for index in 0..last - discarded {
                blocks[index] = (blocks[index + discarded] >> remainder) | (blocks[index + discarded + 1] << carry);
            }
            blocks[last - discarded] = blocks[last] >> remainder;
        }
        blocks[last - discarded + 1..].fill(B::ZERO);
    }

    // Size

    /// Changes the length to `new_len`, filling any new bits with `value`.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut bitset: DynamicBitset<u8> = "101".parse().unwrap();
    /// bitset.resize(6, true);
    /// assert_eq!(bitset.to_string(), "111101");
    /// bitset.resize(2, false);
    /// assert_eq!(bitset.to_string(), "01");
    /// ```
    pub fn resize(&mut self, new_len: usize, value: bool) {
        let old_block_count = self.blocks.len();
        let required = blocks_needed::<B>(new_len);
        let fill = if value { B::ONES } else { B::ZERO };

        if required != old_block_count {
            trace!("resizing bitset storage from {old_block_count} to {required} blocks");
            self.blocks.resize(required, fill);
        }

        let extra_bits = self.count_extra_bits();
        if value && new_len > self.bit_count && extra_bits != 0 {
            self.blocks[old_block_count - 1] |= B::ONES << extra_bits;
        }

        self.bit_count = new_len;
        self.zero_unused_bits();
    }

    /// Appends one bit at position `len()`.
    pub fn push(&mut self, bit: bool) {
        if self.count_extra_bits() == 0 {
            self.blocks.push(B::ZERO);
        }
        let pos = self.bit_count;
        self.bit_count += 1;
        if bit {
            self.blocks[block_index::<B>(pos)] |= bit_mask::<B>(pos);
        }
    }

    /// Removes the highest bit and returns it, or `None` when empty.
    pub fn pop(&mut self) -> Option<bool> {
        let pos = self.bit_count.checked_sub(1)?;
        let bit = test_bit(&self.blocks, pos);
        self.bit_count = pos;
        if self.count_extra_bits() == 0 {
            self.blocks.pop();
        } else {
            self.blocks[block_index::<B>(pos)] &= !bit_mask::<B>(pos);
        }
        Some(bit)
    }

    /// Appends the `BITS_PER_BLOCK` bits of `word` above the current highest bit.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut bitset = DynamicBitset::<u64>::new();
    /// bitset.append(u64::MAX);
    /// assert_eq!(bitset.len(), 64);
    /// assert!(bitset.all());
    /// ```
    pub fn append(&mut self, word: B) {
        let extra_bits = self.count_extra_bits();
        if extra_bits == 0 {
            self.blocks.push(word);
        } else {
            let last = self.blocks.len() - 1;
            self.blocks[last] |= word << extra_bits;
            self.blocks.push(word >> (B::BITS - extra_bits));
        }
        self.bit_count += B::BITS;
    }

    pub fn extend_blocks<Blocks: IntoIterator<Item = B>>(&mut self, blocks: Blocks) {
        let blocks = blocks.into_iter();
        self.blocks.reserve(blocks.size_hint().0);
        for block in blocks {
            self.append(block);
        }
    }

    /// Removes every bit; the length becomes zero.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.bit_count = 0;
    }

    pub fn reserve(&mut self, additional_bits: usize) {
        let required = blocks_needed::<B>(self.bit_count.saturating_add(additional_bits));
        if required > self.blocks.capacity() {
            trace!("reserving bitset storage for {required} blocks");
        }
        self.blocks.reserve(required.saturating_sub(self.blocks.len()));
    }

    pub fn shrink_to_fit(&mut self) {
        self.blocks.shrink_to_fit();
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    // Relations

    /// Returns `true` when every bit set in `self` is also set in `other`.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        self.blocks
            .iter()
            .zip(&other.blocks)
            .all(|(&block, &other_block)| block & !other_block == B::ZERO)
    }

    /// Subset of `other` and not equal to it.
    #[must_use]
    pub fn is_proper_subset_of(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        let mut proper = false;
        for (&block, &other_block) in self.blocks.iter().zip(&other.blocks) {
            if block & !other_block != B::ZERO {
                return false;
            }
            proper |= other_block & !block != B::ZERO;
        }
        proper
    }

    /// Returns `true` when some position is set in both; only the blocks both share are compared.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .any(|(&block, &other_block)| block & other_block != B::ZERO)
    }

    // Conversions

    /// Packs the low bits into a `W`, dropping any set bit at or above `W::BITS`.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let bitset: DynamicBitset<u8> = "1000000001".parse().unwrap();
    /// assert_eq!(bitset.cast_to::<u16>(), 0b10_0000_0001);
    /// assert_eq!(bitset.cast_to::<u8>(), 1);
    /// ```
    #[must_use]
    pub fn cast_to<W: Block>(&self) -> W {
        let mut word = 0u128;
        for (index, block) in self.blocks.iter().enumerate() {
            let offset = index * B::BITS;
            if offset >= W::BITS {
                break;
            }
            word |= block.to_u128() << offset;
        }
        W::from_u128(word)
    }

    /// Like [`cast_to`](Self::cast_to), but fails instead of dropping set bits.
    pub fn try_cast_to<W: Block>(&self) -> Result<W, BitsetError> {
        match self.last_one() {
            Some(highest_bit) if highest_bit >= W::BITS => Err(BitsetError::Overflow {
                highest_bit,
                target_bits: W::BITS,
            }),
            _ => Ok(self.cast_to()),
        }
    }
}

impl<B: Block> PartialOrd for DynamicBitset<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders bit-sets like their most-significant-first text.
///
/// Equal lengths compare numerically. Otherwise the top `min(len)` bits of each side are compared
/// from the highest position down, and the shorter bit-set is less when those agree.
impl<B: Block> Ord for DynamicBitset<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.bit_count == other.bit_count {
            return self.blocks.iter().rev().cmp(other.blocks.iter().rev());
        }
        let overlap = self.bit_count.min(other.bit_count);
        for offset in 1..=overlap {
            let ordering = test_bit(&self.blocks, self.bit_count - offset)
                .cmp(&test_bit(&other.blocks, other.bit_count - offset));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        self.bit_count.cmp(&other.bit_count)
    }
}

impl<B: Block> FromIterator<bool> for DynamicBitset<B> {
    fn from_iter<Bits: IntoIterator<Item = bool>>(bits: Bits) -> Self {
        let mut bitset = Self::new();
        bitset.extend(bits);
        bitset
    }
}

impl<B: Block> Extend<bool> for DynamicBitset<B> {
    fn extend<Bits: IntoIterator<Item = bool>>(&mut self, bits: Bits) {
        let bits = bits.into_iter();
        self.reserve(bits.size_hint().0);
        for bit in bits {
            self.push(bit);
        }
    }
}
