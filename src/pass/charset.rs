//! Character classes and the combined alphabet.

use std::fmt;

pub const DIGITS: &[u8] = b"0123456789";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase, then lowercase, then digits. Order only shapes the initial draw.
pub const COMBINED: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A character class every password must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Lowercase,
    Uppercase,
}

impl CharClass {
    /// Fixed order in which the ensure passes run.
    pub const REQUIRED: [CharClass; 3] = [CharClass::Digit, CharClass::Lowercase, CharClass::Uppercase];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
        }
    }

    #[inline]
    pub fn contains(self, c: u8) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Lowercase => c.is_ascii_lowercase(),
            CharClass::Uppercase => c.is_ascii_uppercase(),
        }
    }

    pub fn present_in(self, chars: &[u8]) -> bool {
        chars.iter().any(|&c| self.contains(c))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Digit => write!(f, "digit"),
            CharClass::Lowercase => write!(f, "lowercase"),
            CharClass::Uppercase => write!(f, "uppercase"),
        }
    }
}

/// Effective charset size of the initial draw (for entropy display).
pub fn size() -> usize {
    COMBINED.len()
}
