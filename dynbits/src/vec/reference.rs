use std::cell::Cell;
use std::fmt;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Not, SubAssign};

use crate::bit::Block;

/// Proxy for a single bit inside a [`DynamicBitset`](crate::DynamicBitset).
///
/// Holds the block that contains the bit and a one-bit mask; writes go straight to that block.
/// Several proxies may share a block (see [`IterMut`](crate::IterMut)), none may outlive the
/// bit-set they were taken from.
pub struct BitRef<'life, B: Block> {
    block: &'life Cell<B>,
    mask: B,
}

impl<'life, B: Block> BitRef<'life, B> {
    /// # Panics
    ///
    /// Panics if `bit >= B::BITS`.
    pub(crate) fn new(block: &'life Cell<B>, bit: usize) -> Self {
        assert!(bit < B::BITS, "bit offset {bit} out of range for a {}-bit block", B::BITS);
        BitRef {
            block,
            mask: B::ONE << bit,
        }
    }

    #[must_use]
    pub fn get(&self) -> bool {
        self.block.get() & self.mask != B::ZERO
    }

    pub fn set(&mut self, value: bool) -> &mut Self {
        let block = self.block.get();
        self.block.set(if value { block | self.mask } else { block & !self.mask });
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.set(false)
    }

    pub fn flip(&mut self) -> &mut Self {
        self.block.set(self.block.get() ^ self.mask);
        self
    }

    /// Copies the value of another bit.
    pub fn assign(&mut self, other: &BitRef<'_, B>) -> &mut Self {
        self.set(other.get())
    }
}

impl<B: Block> BitOrAssign<bool> for BitRef<'_, B> {
    fn bitor_assign(&mut self, value: bool) {
        if value {
            self.set(true);
        }
    }
}

impl<B: Block> BitAndAssign<bool> for BitRef<'_, B> {
    fn bitand_assign(&mut self, value: bool) {
        if !value {
            self.reset();
        }
    }
}

impl<B: Block> BitXorAssign<bool> for BitRef<'_, B> {
    fn bitxor_assign(&mut self, value: bool) {
        if value {
            self.flip();
        }
    }
}

impl<B: Block> SubAssign<bool> for BitRef<'_, B> {
    fn sub_assign(&mut self, value: bool) {
        if value {
            self.reset();
        }
    }
}

impl<B: Block> Not for &BitRef<'_, B> {
    type Output = bool;

    fn not(self) -> bool {
        !self.get()
    }
}

impl<B: Block> From<BitRef<'_, B>> for bool {
    fn from(bit: BitRef<'_, B>) -> bool {
        bit.get()
    }
}

impl<B: Block> PartialEq<bool> for BitRef<'_, B> {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl<B: Block> fmt::Debug for BitRef<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitRef({})", self.get())
    }
}
