use derive_more::{Display, Error};

/// Failure to build a bit-set from text.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ParseBitsetError {
    #[display("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[display("position {position} is past the end of a {length}-character string")]
    PositionOutOfRange { position: usize, length: usize },
}

/// Failure to read a bit-set from a byte stream.
#[derive(Debug, Display, Error)]
pub enum ReadBitsetError {
    /// The input ended, or started with a non-digit, before any bit was read.
    #[display("no bits could be read from the input")]
    Empty,
    #[display("failed to read bits: {_0}")]
    Io(#[error(source)] std::io::Error),
}

impl From<std::io::Error> for ReadBitsetError {
    fn from(error: std::io::Error) -> Self {
        ReadBitsetError::Io(error)
    }
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum BitsetError {
    #[display("bit {highest_bit} is set but the target word only holds {target_bits} bits")]
    Overflow { highest_bit: usize, target_bits: usize },
}
