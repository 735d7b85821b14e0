use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::bit::Block;
use crate::vec::DynamicBitset;

macro_rules! implement_binary_operator {
    ($assign_trait:ident, $assign_method:ident, $trait:ident, $method:ident, $combine:ident) => {
        impl<B: Block> $assign_trait<&DynamicBitset<B>> for DynamicBitset<B> {
            fn $assign_method(&mut self, other: &DynamicBitset<B>) {
                self.$combine(other);
            }
        }

        impl<B: Block> $trait for &DynamicBitset<B> {
            type Output = DynamicBitset<B>;

            fn $method(self, other: Self) -> Self::Output {
                let mut result = self.clone();
                result.$combine(other);
                result
            }
        }

        impl<B: Block> $trait<&DynamicBitset<B>> for DynamicBitset<B> {
            type Output = DynamicBitset<B>;

            fn $method(mut self, other: &DynamicBitset<B>) -> Self::Output {
                self.$combine(other);
                self
            }
        }
    };
}

implement_binary_operator!(BitAndAssign, bitand_assign, BitAnd, bitand, intersect_with);
implement_binary_operator!(BitOrAssign, bitor_assign, BitOr, bitor, union_with);
implement_binary_operator!(BitXorAssign, bitxor_assign, BitXor, bitxor, symmetric_difference_with);
implement_binary_operator!(SubAssign, sub_assign, Sub, sub, difference_with);

impl<B: Block> Not for &DynamicBitset<B> {
    type Output = DynamicBitset<B>;

    fn not(self) -> Self::Output {
        let mut result = self.clone();
        result.flip_all();
        result
    }
}

impl<B: Block> Not for DynamicBitset<B> {
    type Output = DynamicBitset<B>;

    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

macro_rules! implement_shift {
    ($assign_trait:ident, $assign_method:ident, $trait:ident, $method:ident, $shift:ident) => {
        impl<B: Block> $assign_trait<usize> for DynamicBitset<B> {
            fn $assign_method(&mut self, distance: usize) {
                self.$shift(distance);
            }
        }

        impl<B: Block> $trait<usize> for &DynamicBitset<B> {
            type Output = DynamicBitset<B>;

            fn $method(self, distance: usize) -> Self::Output {
                let mut result = self.clone();
                result.$shift(distance);
                result
            }
        }

        impl<B: Block> $trait<usize> for DynamicBitset<B> {
            type Output = DynamicBitset<B>;

            fn $method(mut self, distance: usize) -> Self::Output {
                self.$shift(distance);
                self
            }
        }
    };
}

// `<<` moves bits towards higher positions, matching the most-significant-first text form.
implement_shift!(ShlAssign, shl_assign, Shl, shl, shift_up);
implement_shift!(ShrAssign, shr_assign, Shr, shr, shift_down);

impl<B: Block> Index<usize> for DynamicBitset<B> {
    type Output = bool;

    fn index(&self, pos: usize) -> &bool {
        if self.test(pos) { &true } else { &false }
    }
}
