//! Bit-field descriptors for `ext`/`ins`

use crate::error::{Ic10Error, Result};
use crate::value::{parse_int32, Long};
use crate::{FIELD_BITS, MASK_53};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(start, len)` bit range inside the 53-bit addressable space.
///
/// Invariant: `0 <= start < 53`, `0 < len <= 53`, `start + len <= 53`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitField {
    start: u32,
    len: u32,
}

impl BitField {
    /// Create a descriptor, rejecting ranges outside the 53-bit space
    pub fn new(start: i32, len: i32) -> Result<Self> {
        let fits = len > 0
            && start >= 0
            && (start as u32) < FIELD_BITS
            && (len as u32) <= FIELD_BITS
            && start as u32 + len as u32 <= FIELD_BITS;
        if !fits {
            return Err(Ic10Error::InvalidField { start, len });
        }
        Ok(Self {
            start: start as u32,
            len: len as u32,
        })
    }

    /// Parse a descriptor from two register operands (32-bit each)
    pub fn parse(start: f64, len: f64) -> Result<Self> {
        Self::new(parse_int32(start)?, parse_int32(len)?)
    }

    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Mask of `len` low bits
    #[inline]
    pub fn width_mask(&self) -> Long {
        if self.len == FIELD_BITS {
            MASK_53
        } else {
            (1 << self.len) - 1
        }
    }

    /// Mask of the field in place
    #[inline]
    pub fn region_mask(&self) -> Long {
        self.width_mask() << self.start
    }

    /// Pull the field out of `word`, right-aligned
    #[inline]
    pub fn extract(&self, word: Long) -> Long {
        ((word & MASK_53) & self.region_mask()) >> self.start
    }

    /// Replace the field in `word` with the low `len` bits of `value`
    #[inline]
    pub fn insert(&self, word: Long, value: Long) -> Long {
        let region = self.region_mask();
        let cleared = (word & MASK_53) & !region;
        let inserted = ((value & MASK_53 & self.width_mask()) << self.start) & region;
        (cleared | inserted) & MASK_53
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.start, self.start + self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fields() {
        assert!(BitField::new(0, 1).is_ok());
        assert!(BitField::new(0, 53).is_ok());
        assert!(BitField::new(52, 1).is_ok());
        assert!(BitField::new(20, 33).is_ok());
    }

    #[test]
    fn test_invalid_fields() {
        assert_eq!(
            BitField::new(53, 1),
            Err(Ic10Error::InvalidField { start: 53, len: 1 })
        );
        assert!(BitField::new(-1, 4).is_err());
        assert!(BitField::new(0, 0).is_err());
        assert!(BitField::new(0, -3).is_err());
        assert!(BitField::new(0, 54).is_err());
        assert!(BitField::new(50, 4).is_err());
        assert!(BitField::new(i32::MAX, i32::MAX).is_err());
    }

    #[test]
    fn test_parse_truncates_operands() {
        let field = BitField::parse(4.7, 8.2).unwrap();
        assert_eq!(field.start(), 4);
        assert_eq!(field.len(), 8);
        assert!(BitField::parse(f64::INFINITY, 1.0).is_err());
        // NaN parses as 0, which is not a valid length
        assert!(BitField::parse(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_masks() {
        let field = BitField::new(4, 8).unwrap();
        assert_eq!(field.width_mask(), 0xFF);
        assert_eq!(field.region_mask(), 0xFF0);
        assert_eq!(BitField::new(0, 53).unwrap().width_mask(), MASK_53);
    }

    #[test]
    fn test_extract_insert() {
        let field = BitField::new(8, 8).unwrap();
        assert_eq!(field.extract(0x12_34_56), 0x34);
        assert_eq!(field.insert(0x12_34_56, 0xAB), 0x12_AB_56);
        // Only the low `len` bits of the value are inserted
        assert_eq!(field.insert(0, 0x1FF), 0xFF00);
    }

    #[test]
    fn test_display() {
        assert_eq!(BitField::new(4, 8).unwrap().to_string(), "[4..12)");
    }
}
