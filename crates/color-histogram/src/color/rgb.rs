//! 8-bit RGB triple
//!
//! [`Rgb`] is the exact color identity used throughout the histogram. It packs
//! into a 24-bit integer key (`r << 16 | g << 8 | b`) so counting never goes
//! through floating point, and it has exactly one canonical hex spelling.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// An 8-bit sRGB color triple.
///
/// Ordering is lexicographic on `(r, g, b)`, which matches ordering on the
/// packed key.
///
/// # Example
///
/// ```
/// use color_histogram::Rgb;
///
/// let color = Rgb::new(10, 20, 30);
/// assert_eq!(color.to_hex(), "#0a141e");
/// assert_eq!(Rgb::from_packed(color.packed()), color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Number of distinct 24-bit colors.
    pub const KEY_SPACE: usize = 1 << 24;

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into a 24-bit key: `r << 16 | g << 8 | b`.
    #[inline]
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Unpack a 24-bit key. Bits above 24 are ignored.
    #[inline]
    pub const fn from_packed(key: u32) -> Self {
        Self::new((key >> 16) as u8, (key >> 8) as u8, key as u8)
    }

    /// Whether every channel meets or exceeds `threshold`.
    #[inline]
    pub const fn is_white(self, threshold: u8) -> bool {
        self.r >= threshold && self.g >= threshold && self.b >= threshold
    }

    /// Canonical `#rrggbb` encoding as ASCII bytes, without allocating.
    pub fn hex_bytes(self) -> [u8; 7] {
        let mut out = [b'#'; 7];
        for (i, channel) in self.to_bytes().into_iter().enumerate() {
            out[1 + i * 2] = HEX_DIGITS[(channel >> 4) as usize];
            out[2 + i * 2] = HEX_DIGITS[(channel & 0x0f) as usize];
        }
        out
    }

    /// Canonical lowercase, zero-padded `#rrggbb` string.
    pub fn to_hex(self) -> String {
        self.hex_bytes().iter().map(|&b| b as char).collect()
    }

    /// Presentation text `"(r, g, b)"`.
    pub fn tuple_text(self) -> String {
        format!("({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`. Parsing is
    /// case-insensitive and surrounding whitespace is trimmed. Shorthand
    /// digits are doubled, so `#f80` is `#ff8800`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let digits = input.strip_prefix('#').unwrap_or(input);
        let offset = input.len() - digits.len();

        let len = digits.chars().count();
        if len != 3 && len != 6 {
            return Err(ParseColorError::Length {
                input: input.to_string(),
                digits: len,
            });
        }

        let mut nibbles = [0u8; 6];
        for (i, c) in digits.chars().enumerate() {
            nibbles[i] = c.to_digit(16).ok_or_else(|| ParseColorError::Digit {
                input: input.to_string(),
                position: offset + i,
                found: c,
            })? as u8;
        }

        let [r, g, b] = if len == 3 {
            [nibbles[0] * 17, nibbles[1] * 17, nibbles[2] * 17]
        } else {
            [
                nibbles[0] << 4 | nibbles[1],
                nibbles[2] << 4 | nibbles[3],
                nibbles[4] << 4 | nibbles[5],
            ]
        };
        Ok(Self::new(r, g, b))
    }
}
