//! Validated fixed-width bit patterns and their rotation semantics.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ErrorInfo, RuneError};

/// Fixed-width binary pattern whose symbols are constrained to 0 and 1.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    bits: Box<[u8]>,
}

impl Pattern {
    /// Creates a pattern from raw bits, rejecting symbols other than 0/1.
    pub fn from_bits(bits: impl Into<Vec<u8>>) -> Result<Self, RuneError> {
        let bits_vec: Vec<u8> = bits.into();
        if bits_vec.is_empty() {
            let info = ErrorInfo::new("empty-pattern", "patterns must hold at least one bit");
            return Err(RuneError::Pattern(info));
        }
        if let Some(pos) = bits_vec.iter().position(|&b| b > 1) {
            let info = ErrorInfo::new("invalid-pattern-bit", "pattern bits must be 0 or 1")
                .with_context("index", pos.to_string())
                .with_context("value", bits_vec[pos].to_string());
            return Err(RuneError::Pattern(info));
        }
        Ok(Self {
            bits: bits_vec.into_boxed_slice(),
        })
    }

    /// Returns the bits stored in the pattern.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Returns the number of bits in the pattern.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns the pattern rotated left by `amount` positions.
    ///
    /// Rotating left moves each bit `amount` positions toward the front,
    /// wrapping around; `amount` is reduced modulo the width.
    pub fn rotate_left(&self, amount: usize) -> Self {
        let width = self.bits.len();
        let shift = amount % width;
        let mut rotated = Vec::with_capacity(width);
        rotated.extend_from_slice(&self.bits[shift..]);
        rotated.extend_from_slice(&self.bits[..shift]);
        Self {
            bits: rotated.into_boxed_slice(),
        }
    }

    /// Returns whether `other` lies in the cyclic-rotation class of `self`.
    pub fn is_rotation_of(&self, other: &Self) -> bool {
        if self.width() != other.width() {
            return false;
        }
        (0..self.width()).any(|amount| self.rotate_left(amount) == *other)
    }

    /// Renders the pattern as a string of `0` and `1` characters.
    pub fn render(&self) -> String {
        self.bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.render()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.bits.iter())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Route through the validating constructor so persisted data
        // cannot smuggle in symbols other than 0 and 1.
        let bits = Vec::<u8>::deserialize(deserializer)?;
        Pattern::from_bits(bits).map_err(D::Error::custom)
    }
}
