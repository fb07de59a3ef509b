// Chunk: docs/chunks/font_spec - "Family Size" font specification parsing
//!
//! Font specification for the editor's single global font.
//!
//! The Format > Font command prompts the user for a string of the form
//! `"<FamilyName> <IntegerSize>"`: exactly two whitespace-separated tokens,
//! the second a non-negative integer. [`FontSpec`] parses that form via
//! `FromStr` and renders it back via `Display`, which the session uses to
//! pre-fill the prompt with the current font.
//!
//! Loading and rasterizing the actual font is the host's job; the core only
//! validates and stores the specification.

use std::fmt;
use std::str::FromStr;

/// A font family name and point size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// The font family name (e.g., "Helvetica")
    pub family: String,
    /// The point size
    pub size: u32,
}

impl FontSpec {
    /// Creates a font specification from a family name and point size.
    pub fn new(family: impl Into<String>, size: u32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    /// The editor's initial font.
    fn default() -> Self {
        Self::new("Helvetica", 12)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)
    }
}

/// Why a font specification string failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSpecError {
    /// The input did not split into exactly two tokens
    WrongTokenCount(usize),
    /// The size token was not a non-negative integer
    InvalidSize(String),
}

impl fmt::Display for FontSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSpecError::WrongTokenCount(count) => {
                write!(f, "expected 'FamilyName Size', got {} token(s)", count)
            }
            FontSpecError::InvalidSize(token) => {
                write!(f, "'{}' is not an integer point size", token)
            }
        }
    }
}

impl std::error::Error for FontSpecError {}

impl FromStr for FontSpec {
    type Err = FontSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [family, size] => {
                let size: u32 = size
                    .parse()
                    .map_err(|_| FontSpecError::InvalidSize((*size).to_owned()))?;
                Ok(FontSpec::new(*family, size))
            }
            _ => Err(FontSpecError::WrongTokenCount(tokens.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_family_and_size() {
        let font: FontSpec = "Courier 14".parse().unwrap();
        assert_eq!(font.family, "Courier");
        assert_eq!(font.size, 14);
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let font: FontSpec = "  Menlo   11 ".parse().unwrap();
        assert_eq!(font.family, "Menlo");
        assert_eq!(font.size, 11);
    }

    #[test]
    fn test_rejects_non_integer_size() {
        let err = "Helvetica abc".parse::<FontSpec>().unwrap_err();
        assert_eq!(err, FontSpecError::InvalidSize("abc".to_owned()));
    }

    #[test]
    fn test_rejects_negative_size() {
        let err = "Helvetica -3".parse::<FontSpec>().unwrap_err();
        assert_eq!(err, FontSpecError::InvalidSize("-3".to_owned()));
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        assert_eq!(
            "Helvetica".parse::<FontSpec>().unwrap_err(),
            FontSpecError::WrongTokenCount(1)
        );
        assert_eq!(
            "Courier New 14".parse::<FontSpec>().unwrap_err(),
            FontSpecError::WrongTokenCount(3)
        );
        assert_eq!(
            "".parse::<FontSpec>().unwrap_err(),
            FontSpecError::WrongTokenCount(0)
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let font = FontSpec::new("Courier", 14);
        let reparsed: FontSpec = font.to_string().parse().unwrap();
        assert_eq!(reparsed, font);
    }

    #[test]
    fn test_default_is_helvetica_12() {
        let font = FontSpec::default();
        assert_eq!(font.family, "Helvetica");
        assert_eq!(font.size, 12);
        assert_eq!(font.to_string(), "Helvetica 12");
    }
}
