//! RGB color type and hex encoding
//!
//! This module provides the 8-bit [`Rgb`] triple used as the histogram key,
//! along with the error type for parsing hex color strings.

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;
