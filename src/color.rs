/*!
 * Hex color parsing and per-format color encodings.
 *
 * Each caption format wants the same source color in a different native
 * convention: FCPXML takes 0-1 float RGBA components, ITT/TTML takes a
 * decimal rgba() string, and ASS packs the channels in BGR order.
 */

use crate::errors::ConfigError;

/// An 8-bit RGB color parsed from a `#RRGGBB` hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string
    pub fn parse_hex(hex: &str) -> Result<Self, ConfigError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(hex.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ConfigError::InvalidColor(hex.to_string()))
        };

        Ok(RgbColor {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb` form, used where the format embeds CSS colors
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// FCPXML `fontColor` encoding: space-separated 0-1 floats plus full alpha
    pub fn to_fcpxml_rgba(self) -> String {
        format!(
            "{} {} {} 1",
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0
        )
    }

    /// ITT/TTML `tts:color` encoding: decimal `rgba(r,g,b,255)`
    pub fn to_itt_rgba(self) -> String {
        format!("rgba({},{},{},255)", self.r, self.g, self.b)
    }

    /// ASS packed color: six hex digits in BGR channel order
    pub fn to_ass_bgr(self) -> String {
        let packed =
            (u32::from(self.b) << 16) | (u32::from(self.g) << 8) | u32::from(self.r);
        format!("{:06x}", packed)
    }
}
