//! Color math for flower rendering
//!
//! Petal gradients and sparkles derive lighter and darker shades from the
//! user's chosen color, and the message text picks its shadow based on how
//! bright that color is.

use crate::error::{CardError, CardResult};

/// An sRGB color parsed from a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#rrggbb` string.
    ///
    /// # Errors
    ///
    /// Returns `CardError::InvalidColor` when the `#` prefix is missing,
    /// the digit count is not six, or a digit is not hexadecimal.
    pub fn parse(s: &str) -> CardResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| CardError::InvalidColor(s.to_string()))?;
        if digits.len() != 6 {
            return Err(CardError::InvalidColor(s.to_string()));
        }
        let bytes =
            hex::decode(digits).map_err(|_| CardError::InvalidColor(s.to_string()))?;
        Ok(Self {
            r: bytes[0],
            g: bytes[1],
            b: bytes[2],
        })
    }

    /// Format as a lower-case `#rrggbb` string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Shift every channel by `amount`, clamped to `[0, 255]`.
    fn shift(self, amount: i32) -> Self {
        let apply = |c: u8| (c as i32 + amount).clamp(0, 255) as u8;
        Self {
            r: apply(self.r),
            g: apply(self.g),
            b: apply(self.b),
        }
    }

    /// BT.601 luma in `[0, 255]`.
    fn luma(self) -> u32 {
        (self.r as u32 * 299 + self.g as u32 * 587 + self.b as u32 * 114) / 1000
    }
}

/// Lighten a color by `percent` (negative values darken).
///
/// The shift is `round(2.55 * percent)` per channel, clamped at both ends.
///
/// # Errors
///
/// Returns `CardError::InvalidColor` for malformed input.
pub fn lighten(color: &str, percent: i32) -> CardResult<String> {
    let amount = (2.55 * percent as f64).round() as i32;
    Ok(Rgb::parse(color)?.shift(amount).to_hex())
}

/// Darken a color by `percent`.
///
/// # Errors
///
/// Returns `CardError::InvalidColor` for malformed input.
pub fn darken(color: &str, percent: i32) -> CardResult<String> {
    lighten(color, -percent)
}

/// Whether a color counts as light (luma >= 128).
///
/// # Errors
///
/// Returns `CardError::InvalidColor` for malformed input.
pub fn is_light(color: &str) -> CardResult<bool> {
    Ok(Rgb::parse(color)?.luma() >= 128)
}

/// CSS text shadow for message text over a dark backdrop.
///
/// Light colors get a plain drop shadow; dark colors get a layered glow in
/// their own hue so they stay readable. Malformed input degrades to the
/// drop shadow.
pub fn text_shadow(color: &str) -> String {
    match is_light(color) {
        Ok(false) => format!(
            "0 0 10px {c}, 0 0 20px {c}, 0 0 30px {c}, 0 0 40px {c}",
            c = color
        ),
        Ok(true) | Err(_) => "0 2px 4px rgba(0, 0, 0, 0.3)".to_string(),
    }
}
