//! Character classes used to extend a base word.
//!
//! All character sets are ASCII so they may be indexed by byte.
use bitflags::bitflags;

/// Lowercase roman letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase roman letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Numeric digits.
pub const NUMBERS: &str = "0123456789";
/// Punctuation symbols.
pub const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':",./<>?"#;
/// Symbols inserted inside the base word by the append pattern.
pub const STRATEGIC_SYMBOLS: &str = "_-!@$#%^&*?";

bitflags! {
    /// Set of enabled character classes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CharacterClasses: u8 {
        /// Uppercase roman letters.
        const UPPERCASE = 1;
        /// Lowercase roman letters.
        const LOWERCASE = 1 << 1;
        /// Numeric digits.
        const NUMBERS = 1 << 2;
        /// Punctuation symbols.
        const SYMBOLS = 1 << 3;
    }
}

impl CharacterClasses {
    /// Concatenation of the enabled character sets.
    ///
    /// The order is fixed: lowercase, uppercase, numbers
    /// then symbols.
    pub fn alphabet(&self) -> String {
        [
            (Self::LOWERCASE, LOWERCASE),
            (Self::UPPERCASE, UPPERCASE),
            (Self::NUMBERS, NUMBERS),
            (Self::SYMBOLS, SYMBOLS),
        ]
        .into_iter()
        .filter(|(class, _)| self.contains(*class))
        .map(|(_, chars)| chars)
        .collect()
    }
}
