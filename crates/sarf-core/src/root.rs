// Triliteral root: the validated three-letter input to every derivation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::character::{is_diacritic, is_radical_letter};

/// Number of radicals in a triliteral root.
pub const RADICAL_COUNT: usize = 3;

/// Error type for root parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    /// The input does not hold exactly three letters.
    #[error("root must have exactly 3 letters, got {actual}")]
    Length { actual: usize },

    /// A letter is outside the accepted Arabic letter set.
    #[error("root letter {position} ({letter:?}) is not an Arabic radical letter")]
    NotArabicLetter { letter: char, position: usize },
}

/// An ordered triple of radicals.
///
/// Identity is the letter sequence itself. Roots order by code point, which
/// is the key order of the root index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Root([char; RADICAL_COUNT]);

impl Root {
    /// Parse a root from text.
    ///
    /// Surrounding whitespace and diacritics are ignored, so "كَتَبَ" and
    /// "كتب" parse to the same root. Whatever remains must be exactly three
    /// Arabic radical letters.
    pub fn parse(text: &str) -> Result<Self, RootError> {
        let letters: Vec<char> = text.trim().chars().filter(|&c| !is_diacritic(c)).collect();
        if letters.len() != RADICAL_COUNT {
            return Err(RootError::Length {
                actual: letters.len(),
            });
        }
        for (i, &c) in letters.iter().enumerate() {
            if !is_radical_letter(c) {
                return Err(RootError::NotArabicLetter {
                    letter: c,
                    position: i + 1,
                });
            }
        }
        Ok(Self([letters[0], letters[1], letters[2]]))
    }

    pub fn first(&self) -> char {
        self.0[0]
    }

    pub fn second(&self) -> char {
        self.0[1]
    }

    pub fn third(&self) -> char {
        self.0[2]
    }

    pub fn letters(&self) -> [char; RADICAL_COUNT] {
        self.0
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Root {
    type Err = RootError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
