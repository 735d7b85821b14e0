/// Read-only access to a bit container.
///
/// See also [`BitwiseMut`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait Bitwise: BitLength {
    fn index(&self, index: usize) -> bool;
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize>;
    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.support().next()
    }
    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.support().last()
    }
    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }
    #[inline]
    fn parity(&self) -> bool {
        (self.weight() % 2) == 1
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
    #[inline]
    fn is_unit(&self, index: usize) -> bool {
        self.weight() == 1 && self.index(index)
    }
}

/// See also [`Bitwise`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool);
    fn negate_index(&mut self, index: usize);
    fn clear_bits(&mut self);

    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        for j in 0..bit_count {
            self.assign_index(j, random_number_generator.r#gen());
        }
    }
}

/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePairMut`].
pub trait BitwisePair<Other: ?Sized = Self> {
    fn and_weight(&self, other: &Other) -> usize;
    fn or_weight(&self, other: &Other) -> usize;
    fn xor_weight(&self, other: &Other) -> usize;

    #[inline]
    fn dot(&self, other: &Other) -> bool {
        self.and_weight(other) % 2 == 1
    }
}

/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePair`].
pub trait BitwisePairMut<Other: ?Sized = Self>: BitwiseMut + BitwisePair<Other> {
    fn assign(&mut self, other: &Other);
    fn bitand_assign(&mut self, other: &Other);
    fn bitor_assign(&mut self, other: &Other);
    fn bitxor_assign(&mut self, other: &Other);
    /// Clears every bit that is set in `other`.
    fn bitclear_assign(&mut self, other: &Other);
}

pub trait IntoBitIterator {
    type BitIterator: Iterator<Item = bool>;
    fn iter_bits(self) -> Self::BitIterator;
}

pub trait BitLength {
    fn bit_len(&self) -> usize;
    const BLOCK_BIT_LEN: usize;
}
