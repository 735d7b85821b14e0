mod bitset;
mod iter;
mod ops;
mod reference;
mod text;
mod traits;

pub use bitset::{DynamicBitset, NPOS};
pub use iter::{Iter, IterMut, Ones};
pub use reference::BitRef;
