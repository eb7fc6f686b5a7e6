//! Peg symbols and the alphabet they are drawn from

use super::{Code, CodebreakerError, Result};
use rand::Rng;
use std::fmt;

/// Symbols used when no alphabet is given: green, red, blue, yellow, orange, purple
pub const DEFAULT_SYMBOLS: &str = "GRBYOP";

/// A single peg colour
///
/// Stored as an upper-case ASCII byte. Symbols compare by equality only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(u8);

impl Symbol {
    /// Create a symbol from an ASCII letter or digit
    ///
    /// Letters are normalized to upper case. Returns `None` for anything else.
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        if ch.is_ascii_alphanumeric() {
            Some(Self(ch.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// The symbol as a character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Ordered set of distinct symbols a code may use
///
/// The declared order fixes the generation order of the candidate universe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet from symbols
    ///
    /// # Errors
    /// Returns `InvalidParameters` if `symbols` is empty or contains duplicates.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CodebreakerError::InvalidParameters(
                "alphabet must not be empty".to_string(),
            ));
        }

        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(CodebreakerError::InvalidParameters(format!(
                    "alphabet contains '{symbol}' more than once"
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// Parse an alphabet such as `"GRBYOP"`
    ///
    /// # Errors
    /// Returns `InvalidSymbol` for characters that are not ASCII letters or
    /// digits, and `InvalidParameters` for empty or repeated symbols.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Alphabet;
    ///
    /// let alphabet = Alphabet::parse("grbyop").unwrap();
    /// assert_eq!(alphabet.to_string(), "GRBYOP");
    /// assert!(Alphabet::parse("GG").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let symbols = text
            .chars()
            .map(|ch| {
                Symbol::new(ch).ok_or_else(|| CodebreakerError::InvalidSymbol {
                    symbol: ch,
                    alphabet: text.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(symbols)
    }

    /// Symbols in declaration order
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols (K)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Draw a code uniformly at random
    ///
    /// # Errors
    /// Returns `InvalidParameters` if `length` is zero or too long.
    pub fn random_code<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Result<Code> {
        let symbols = (0..length)
            .map(|_| self.symbols[rng.random_range(0..self.symbols.len())])
            .collect();
        Code::new(symbols)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.bytes().map(Symbol).collect(),
        }
    }
}

impl fmt::Display for Alphabet {
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
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn symbol_normalizes_case() {
        assert_eq!(Symbol::new('g'), Symbol::new('G'));
        assert_eq!(Symbol::new('g').unwrap().as_char(), 'G');
        assert!(Symbol::new('!').is_none());
        assert!(Symbol::new(' ').is_none());
    }

    #[test]
    fn default_alphabet() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 6);
        assert_eq!(alphabet.to_string(), DEFAULT_SYMBOLS);
        assert!(alphabet.contains(Symbol::new('P').unwrap()));
        assert!(!alphabet.contains(Symbol::new('Z').unwrap()));
    }

    #[test]
    fn parse_rejects_empty_and_duplicates() {
        assert!(matches!(
            Alphabet::parse(""),
            Err(CodebreakerError::InvalidParameters(_))
        ));
        assert!(matches!(
            Alphabet::parse("GRg"),
            Err(CodebreakerError::InvalidParameters(_))
        ));
        assert!(matches!(
            Alphabet::parse("GR-"),
            Err(CodebreakerError::InvalidSymbol { symbol: '-', .. })
        ));
    }

    #[test]
    fn parse_keeps_declared_order() {
        let alphabet = Alphabet::parse("PYG").unwrap();
        let chars: String = alphabet.symbols().iter().map(|s| s.as_char()).collect();
        assert_eq!(chars, "PYG");
    }

    #[test]
    fn random_code_uses_alphabet() {
        let alphabet = Alphabet::parse("AB").unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let code = alphabet.random_code(5, &mut rng).unwrap();
            assert_eq!(code.len(), 5);
            assert!(code.symbols().iter().all(|&s| alphabet.contains(s)));
        }
    }

    #[test]
    fn random_code_rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(Alphabet::default().random_code(0, &mut rng).is_err());
    }
}
