use std::fmt::Display;

use crate::Error;

const ZERO_SYMBOL: char = '0';
const ONE_SYMBOL: char = '1';

/// Whether `pattern` can be used as a stripe template: non-empty and made of
/// `'0'` and `'1'` only. Nothing is trimmed.
pub fn is_valid(pattern: &str) -> bool {
    !pattern.is_empty() && pattern.chars().all(|c| c == ZERO_SYMBOL || c == ONE_SYMBOL)
}

/// A validated stripe template, repeated cyclically across a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryPattern {
    bits: Vec<bool>,
}

impl BinaryPattern {
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        if !is_valid(pattern) {
            return Err(Error::InvalidBinaryPattern(pattern.to_owned()));
        }
        let bits = pattern.chars().map(|c| c == ONE_SYMBOL).collect();
        Ok(Self { bits })
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit used for `column_index`, wrapping around the end of the pattern.
    pub fn bit_at(&self, column_index: usize) -> bool {
        self.bits[column_index % self.bits.len()]
    }

    pub fn cycle(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied().cycle()
    }
}

impl Display for BinaryPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &bit in &self.bits {
            write!(f, "{}", if bit { ONE_SYMBOL } else { ZERO_SYMBOL })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{is_valid, BinaryPattern};
    use crate::Error;

    #[test]
    fn validate_patterns() {
        assert!(!is_valid(""));
        assert!(!is_valid("01012"));
        assert!(is_valid("0101"));
        assert!(is_valid("1"));
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert!(!is_valid(" 0101"));
        assert!(!is_valid("0101\n"));
        assert!(!is_valid("01 01"));
    }

    #[test]
    fn parse_rejects_invalid_pattern() {
        if let Err(Error::InvalidBinaryPattern(pattern)) = BinaryPattern::parse("10a") {
            assert_eq!(pattern, "10a");
            return;
        }
        panic!("Invalid pattern not detected");
    }

    #[test]
    fn bit_at_wraps_around() {
        let pattern = BinaryPattern::parse("011").unwrap();
        let bits: Vec<bool> = (0..7).map(|x| pattern.bit_at(x)).collect();
        assert_eq!(bits, [false, true, true, false, true, true, false]);
    }

    #[test]
    fn cycle_matches_bit_at() {
        let pattern = BinaryPattern::parse("10010").unwrap();
        for (x, bit) in pattern.cycle().take(23).enumerate() {
            assert_eq!(bit, pattern.bit_at(x), "Mismatch at column {}", x);
        }
    }

    #[test]
    fn display_restores_text() {
        let pattern = BinaryPattern::parse("0110").unwrap();
        assert_eq!(pattern.to_string(), "0110");
        assert_eq!(pattern.len(), 4);
    }
}
