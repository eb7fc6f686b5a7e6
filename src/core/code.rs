//! Code representation
//!
//! A code is an ordered sequence of symbols. Secrets and guesses share this type.

use super::{Alphabet, CodebreakerError, Result, Symbol};
use std::fmt;

/// Longest code the scorer supports
///
/// Scoring keeps its consumed-peg markers in fixed arrays of this size.
pub const MAX_CODE_LENGTH: usize = 8;

/// A secret or a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: Vec<Symbol>,
}

impl Code {
    /// Create a code from symbols
    ///
    /// Alphabet membership is not checked here; use [`Code::parse`] for input.
    ///
    /// # Errors
    /// Returns `InvalidParameters` if the code is empty or longer than
    /// [`MAX_CODE_LENGTH`].
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        check_length(symbols.len())?;
        Ok(Self { symbols })
    }

    /// Length already validated by the caller
    pub(crate) const fn from_valid(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// Parse and validate a code such as `"GRBY"`
    ///
    /// # Errors
    /// Returns `InvalidLength` if the text does not have `length` symbols and
    /// `InvalidSymbol` if a character is not in `alphabet`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Alphabet, Code};
    ///
    /// let alphabet = Alphabet::default();
    /// let code = Code::parse("grby", &alphabet, 4).unwrap();
    /// assert_eq!(code.to_string(), "GRBY");
    ///
    /// assert!(Code::parse("GRB", &alphabet, 4).is_err());
    /// assert!(Code::parse("GRBX", &alphabet, 4).is_err());
    /// ```
    pub fn parse(text: &str, alphabet: &Alphabet, length: usize) -> Result<Self> {
        let text = text.trim();
        let actual = text.chars().count();
        if actual != length {
            return Err(CodebreakerError::InvalidLength {
                expected: length,
                actual,
            });
        }

        let symbols = text
            .chars()
            .map(|ch| {
                Symbol::new(ch)
                    .filter(|&symbol| alphabet.contains(symbol))
                    .ok_or_else(|| CodebreakerError::InvalidSymbol {
                        symbol: ch,
                        alphabet: alphabet.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(symbols)
    }

    /// The symbols of this code
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of positions (N)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Validate a code length against the scorer's limits
pub(crate) fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(CodebreakerError::InvalidParameters(
            "code length must be positive".to_string(),
        ));
    }
    if length > MAX_CODE_LENGTH {
        return Err(CodebreakerError::InvalidParameters(format!(
            "code length {length} exceeds the maximum of {MAX_CODE_LENGTH}"
        )));
    }
    Ok(())
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        let code = Code::parse("GRBY", &Alphabet::default(), 4).unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "GRBY");
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let code = Code::parse("  oPpg\n", &Alphabet::default(), 4).unwrap();
        assert_eq!(code.to_string(), "OPPG");
    }

    #[test]
    fn parse_wrong_length() {
        let alphabet = Alphabet::default();
        assert!(matches!(
            Code::parse("GRBYO", &alphabet, 4),
            Err(CodebreakerError::InvalidLength {
                expected: 4,
                actual: 5
            })
        ));
        assert!(matches!(
            Code::parse("", &alphabet, 4),
            Err(CodebreakerError::InvalidLength {
                expected: 4,
                actual: 0
            })
        ));
    }

    #[test]
    fn parse_foreign_symbol() {
        assert!(matches!(
            Code::parse("GRBZ", &Alphabet::default(), 4),
            Err(CodebreakerError::InvalidSymbol { symbol: 'Z', .. })
        ));
        assert!(Code::parse("GR?Y", &Alphabet::default(), 4).is_err());
    }

    #[test]
    fn new_checks_bounds() {
        assert!(Code::new(Vec::new()).is_err());

        let g = Symbol::new('G').unwrap();
        assert!(Code::new(vec![g; MAX_CODE_LENGTH]).is_ok());
        assert!(Code::new(vec![g; MAX_CODE_LENGTH + 1]).is_err());
    }

    #[test]
    fn equality_is_positional() {
        let alphabet = Alphabet::default();
        let a = Code::parse("GRBY", &alphabet, 4).unwrap();
        let b = Code::parse("grby", &alphabet, 4).unwrap();
        let c = Code::parse("YBRG", &alphabet, 4).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
