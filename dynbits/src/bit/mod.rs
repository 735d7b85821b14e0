pub mod bitwise;
pub use bitwise::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};

pub mod block;
pub use block::Block;

pub mod index;
pub mod words;
