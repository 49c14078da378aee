use crate::foundation::error::{SlidecastError, SlidecastResult};

/// Opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn parse_hex(s: &str) -> SlidecastResult<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(SlidecastError::render(format!(
                "color \"{s}\" must be #RRGGBB"
            )));
        }

        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| SlidecastError::render(format!("invalid hex byte \"{pair}\" in \"{s}\"")))
        };

        Ok(Self {
            r: byte(&hex[0..2])?,
            g: byte(&hex[2..4])?,
            b: byte(&hex[4..6])?,
        })
    }

    /// Lowercase `#rrggbb`, the form SVG paint attributes expect.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
