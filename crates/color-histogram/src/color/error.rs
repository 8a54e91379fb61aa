//! Hex color parse failures

use std::fmt;

/// A string that is not a `#rgb` or `#rrggbb` color.
///
/// Both variants keep the trimmed input so the message can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Wrong number of digits after the optional `#`.
    Length { input: String, digits: usize },
    /// A character outside `0-9a-fA-F`, at a char offset into `input`.
    Digit {
        input: String,
        position: usize,
        found: char,
    },
}

impl ParseColorError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::Length { input, .. } | ParseColorError::Digit { input, .. } => input,
        }
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Length { input, digits } => {
                write!(f, "{input:?}: expected 3 or 6 hex digits, found {digits}")
            }
            ParseColorError::Digit {
                input,
                position,
                found,
            } => write!(f, "{input:?}: {found:?} at {position} is not a hex digit"),
        }
    }
}

impl std::error::Error for ParseColorError {}
