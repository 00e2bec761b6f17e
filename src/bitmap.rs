//! Fixed-size bitmap covering every 16-bit integer.

use crate::{DenseSet, DOMAIN_SIZE};
use std::fmt;

/// Number of bits per storage word.
const WORD_BITS: usize = u64::BITS as usize;

/// Bitmap size, in 64-bit words.
const WORD_COUNT: usize = DOMAIN_SIZE / WORD_BITS;

/// Fixed-size bitmap, one bit for each of the 2¹⁶ possible values.
///
/// Its footprint is 8 kB whatever the number of values it holds.
#[derive(Clone, PartialEq, Eq)]
pub struct Bitmap(Box<[u64; WORD_COUNT]>);

impl Bitmap {
    /// Creates an empty bitmap, every bit cleared.
    pub fn new() -> Self {
        Self(Box::new([0; WORD_COUNT]))
    }

    /// Adds a value to the bitmap.
    ///
    /// If the bitmap did not have this value present, true is returned.
    /// If the bitmap did have this value present, false is returned.
    pub fn insert(&mut self, value: u16) -> bool {
        let position = Position::from(value);
        let was_set = self.test(&position);

        self.set(&position);

        !was_set
    }

    /// Removes a value from the bitmap.
    ///
    /// Returns whether the value was present or not.
    pub fn remove(&mut self, value: u16) -> bool {
        let position = Position::from(value);
        let was_set = self.test(&position);

        self.clear(&position);

        was_set
    }

    /// Returns true if the bitmap contains the value.
    pub fn contains(&self, value: u16) -> bool {
        self.test(&value.into())
    }

    /// Counts the bits set.
    pub fn cardinality(&self) -> usize {
        self.0
            .iter()
            .fold(0, |acc, word| acc + word.count_ones() as usize)
    }

    /// Finds the smallest value in the bitmap.
    // Word index is below WORD_COUNT and trailing zeros below 64: no
    // truncation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn min(&self) -> Option<u16> {
        self.0
            .iter()
            .position(|&word| word != 0)
            .map(|index| {
                let base = index * WORD_BITS;
                let offset = self.0[index].trailing_zeros() as usize;

                (base + offset) as u16
            })
    }

    /// Finds the largest value in the bitmap.
    // Word index is below WORD_COUNT and leading zeros below 64: no
    // truncation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn max(&self) -> Option<u16> {
        self.0
            .iter()
            .rposition(|&word| word != 0)
            .map(|index| {
                let base = index * WORD_BITS;
                let offset =
                    WORD_BITS - 1 - self.0[index].leading_zeros() as usize;

                (base + offset) as u16
            })
    }

    /// Returns an iterator over the values, in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.0)
    }

    /// Returns the in-memory size of the bitmap, in bytes.
    pub fn mem_size(&self) -> usize {
        size_of_val(self) + size_of::<[u64; WORD_COUNT]>()
    }

    /// Tests the bit at `position`.
    fn test(&self, position: &Position) -> bool {
        (self.0[position.word] >> position.bit) & 1 != 0
    }

    /// Sets the bit at `position`.
    fn set(&mut self, position: &Position) {
        self.0[position.word] |= 1 << position.bit;
    }

    /// Clears the bit at `position`.
    fn clear(&mut self, position: &Position) {
        self.0[position.word] &= !(1 << position.bit);
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bitmap")
            .field("cardinality", &self.cardinality())
            .field("min", &self.min())
            .field("max", &self.max())
            .finish()
    }
}

impl DenseSet for Bitmap {
    fn new() -> Self {
        Self::new()
    }

    fn insert(&mut self, value: u16) -> bool {
        self.insert(value)
    }

    fn contains(&self, value: u16) -> bool {
        self.contains(value)
    }

    fn cardinality(&self) -> usize {
        self.cardinality()
    }

    fn min(&self) -> Option<u16> {
        self.min()
    }

    fn max(&self) -> Option<u16> {
        self.max()
    }

    fn mem_size(&self) -> usize {
        self.mem_size()
    }
}

impl FromIterator<u16> for Bitmap {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        let mut bitmap = Self::new();

        for value in iter {
            bitmap.set(&value.into());
        }

        bitmap
    }
}

impl<'a> IntoIterator for &'a Bitmap {
    type Item = u16;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Location of a value in the bitmap.
struct Position {
    /// Word holding the value.
    word: usize,
    /// Bit of the value in its word.
    bit: u32,
}

impl From<u16> for Position {
    // Remainder is below 64: no truncation.
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: u16) -> Self {
        let value = usize::from(value);

        Self {
            word: value / WORD_BITS,
            bit: (value % WORD_BITS) as u32,
        }
    }
}

/// Ascending iterator over the values of a [`Bitmap`].
pub struct Iter<'a> {
    words: &'a [u64; WORD_COUNT],
    index: usize,
    word: u64,
}

impl<'a> Iter<'a> {
    fn new(words: &'a [u64; WORD_COUNT]) -> Self {
        Self {
            words,
            index: 0,
            word: words[0],
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u16;

    // Values are below DOMAIN_SIZE: no truncation.
    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<u16> {
        while self.word == 0 {
            self.index += 1;
            if self.index == WORD_COUNT {
                return None;
            }
            self.word = self.words[self.index];
        }
        let value =
            self.index * WORD_BITS + self.word.trailing_zeros() as usize;
        // Clear the lowest bit set.
        self.word &= self.word - 1;

        Some(value as u16)
    }
}
