use std::fmt::{self, Write as _};
use std::io::{BufRead, ErrorKind};
use std::str::FromStr;

use log::debug;

use crate::bit::Block;
use crate::error::{ParseBitsetError, ReadBitsetError};
use crate::vec::{DynamicBitset, NPOS};

// Text form: one character per bit, highest position first.

fn digit_value(character: char, zero: char, one: char) -> Option<bool> {
    if character == one {
        Some(true)
    } else if character == zero {
        Some(false)
    } else {
        None
    }
}

impl<B: Block> DynamicBitset<B> {
    /// Renders the bits highest position first, using `zero` and `one` as digits.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let bitset: DynamicBitset<u8> = "0110".parse().unwrap();
    /// assert_eq!(bitset.to_string_with('.', '#'), ".##.");
    /// ```
    #[must_use]
    pub fn to_string_with(&self, zero: char, one: char) -> String {
        self.iter().rev().map(|bit| if bit { one } else { zero }).collect()
    }

    /// Parses text written highest position first, with custom digit characters.
    pub fn from_str_with(text: &str, zero: char, one: char) -> Result<Self, ParseBitsetError> {
        let mut bits = Vec::with_capacity(text.len());
        for (position, character) in text.chars().enumerate() {
            let bit = digit_value(character, zero, one)
                .ok_or(ParseBitsetError::InvalidCharacter { character, position })?;
            bits.push(bit);
        }
        Ok(bits.into_iter().rev().collect())
    }

    /// Builds a bit-set from a window of `text`.
    ///
    /// The window starts at character `pos` and spans `len` characters, or up to the end of
    /// `text` when `len` is [`NPOS`] or reaches past it. The result has `bit_count` bits, or one
    /// bit per window character when `bit_count` is [`NPOS`]. When `bit_count` is smaller than
    /// the window only its first `bit_count` characters are used; when larger, the extra high
    /// bits are zero.
    ///
    /// ```
    /// use dynbits::{DynamicBitset, NPOS};
    ///
    /// let bitset = DynamicBitset::<u8>::from_text_range("xx1101yy", 2, 4, NPOS).unwrap();
    /// assert_eq!(bitset.to_string(), "1101");
    ///
    /// let padded = DynamicBitset::<u8>::from_text_range("11", 0, NPOS, 5).unwrap();
    /// assert_eq!(padded.to_string(), "00011");
    /// ```
    pub fn from_text_range(text: &str, pos: usize, len: usize, bit_count: usize) -> Result<Self, ParseBitsetError> {
        let characters: Vec<char> = text.chars().collect();
        if pos > characters.len() {
            return Err(ParseBitsetError::PositionOutOfRange {
                position: pos,
                length: characters.len(),
            });
        }

        let available = len.min(characters.len() - pos);
        let bit_count = if bit_count == NPOS { available } else { bit_count };
        let used = bit_count.min(available);

        let mut bitset = Self::zeros(bit_count);
        for (offset, &character) in characters[pos..pos + used].iter().enumerate() {
            match digit_value(character, '0', '1') {
                Some(true) => {
                    bitset.set(used - 1 - offset, true);
                }
                Some(false) => {}
                None => {
                    return Err(ParseBitsetError::InvalidCharacter {
                        character,
                        position: pos + offset,
                    });
                }
            }
        }
        Ok(bitset)
    }

    /// Reads a bit-set the way a numeric field is extracted from a stream.
    ///
    /// Leading ASCII whitespace is skipped, then '0' and '1' characters are consumed, the first
    /// one becoming the highest bit, until a different character, the end of input, or `width`
    /// bits (`None` or `Some(0)` means [`max_size`](Self::max_size)). A character that stops the
    /// read is left in the reader.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut input = "  1101x".as_bytes();
    /// let bitset = DynamicBitset::<u8>::read_from(&mut input, None).unwrap();
    /// assert_eq!(bitset.to_string(), "1101");
    /// assert_eq!(input, b"x");
    /// ```
    ///
    /// # Errors
    ///
    /// [`ReadBitsetError::Empty`] when no bit could be read, [`ReadBitsetError::Io`] when the
    /// reader fails.
    pub fn read_from<R: BufRead + ?Sized>(reader: &mut R, width: Option<usize>) -> Result<Self, ReadBitsetError> {
        Self::read_from_with(reader, width, b'0', b'1')
    }

    /// Like [`read_from`](Self::read_from), with the bytes `zero` and `one` as digits.
    ///
    /// ```
    /// use dynbits::DynamicBitset;
    ///
    /// let mut input = "\t#..#-".as_bytes();
    /// let bitset = DynamicBitset::<u8>::read_from_with(&mut input, None, b'.', b'#').unwrap();
    /// assert_eq!(bitset.to_string(), "1001");
    /// assert_eq!(input, b"-");
    /// ```
    ///
    /// # Errors
    ///
    /// Same as [`read_from`](Self::read_from).
    pub fn read_from_with<R: BufRead + ?Sized>(
        reader: &mut R,
        width: Option<usize>,
        zero: u8,
        one: u8,
    ) -> Result<Self, ReadBitsetError> {
        let max_size = Self::new().max_size();
        let limit = match width {
            Some(width) if width > 0 => width.min(max_size),
            _ => max_size,
        };

        let mut digits = Vec::new();
        let mut skipping_whitespace = true;
        loop {
            let buffer = match reader.fill_buf() {
                Ok(buffer) => buffer,
                Err(error) if error.kind() == ErrorKind::Interrupted => continue,
                Err(error) => return Err(error.into()),
            };
            if buffer.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut finished = false;
            for &byte in buffer {
                if skipping_whitespace && byte.is_ascii_whitespace() {
                    consumed += 1;
                    continue;
                }
                skipping_whitespace = false;
                if byte == one {
                    digits.push(true);
                } else if byte == zero {
                    digits.push(false);
                } else {
                    finished = true;
                    break;
                }
                consumed += 1;
                if digits.len() >= limit {
                    finished = true;
                    break;
                }
            }
            reader.consume(consumed);
            if finished {
                break;
            }
        }

        if digits.is_empty() {
            debug!("no bits read from input");
            return Err(ReadBitsetError::Empty);
        }
        Ok(digits.into_iter().rev().collect())
    }
}

impl<B: Block> FromStr for DynamicBitset<B> {
    type Err = ParseBitsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_with(s, '0', '1')
    }
}

/// Writes `prefix` and `digits` padded to the formatter's width; right aligned unless asked otherwise.
fn pad_digits(f: &mut fmt::Formatter<'_>, prefix: &str, digits: &str) -> fmt::Result {
    let content_width = prefix.chars().count() + digits.chars().count();
    let padding = f.width().unwrap_or(0).saturating_sub(content_width);
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Left) => (0, padding),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(prefix)?;
    f.write_str(digits)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

impl<B: Block> fmt::Display for DynamicBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        pad_digits(f, "", &self.to_string_with('0', '1'))
    }
}

impl<B: Block> fmt::Binary for DynamicBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if f.alternate() { "0b" } else { "" };
        pad_digits(f, prefix, &self.to_string_with('0', '1'))
    }
}

impl<B: Block> fmt::Debug for DynamicBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicBitset(len={},bits={})", self.len(), self.to_string_with('0', '1'))
    }
}
