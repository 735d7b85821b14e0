//! Dynamically sized bit-sets packed into unsigned machine words.
//!
//! [`DynamicBitset`] stores its bits in a `Vec` of [`Block`] words (`u64` by default) and offers
//! single-bit and range updates, boolean combinators, shifts, set relations, and a
//! most-significant-first text form.
//!
//! ```
//! use dynbits::DynamicBitset;
//!
//! let mut bitset: DynamicBitset = "1010101010".parse().unwrap();
//! assert_eq!(bitset.count(), 5);
//! assert!(!bitset.test(0));
//! assert!(bitset.test(1));
//!
//! bitset <<= 3;
//! assert_eq!(bitset.to_string(), "0101010000");
//! ```

pub mod bit;
pub use bit::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, Block, IntoBitIterator};

pub mod error;
pub use error::{BitsetError, ParseBitsetError, ReadBitsetError};

pub mod vec;
pub use vec::{BitRef, DynamicBitset, Iter, IterMut, NPOS, Ones};

#[cfg(feature = "serde")]
mod serde;
