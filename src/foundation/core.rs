use crate::foundation::error::{CutfaceError, CutfaceResult};

pub use kurbo::{Line, Point};

/// An 8-bit ARGB2222 color, the native encoding of indexed-color displays.
///
/// Bits 7-6 hold alpha, 5-4 red, 3-2 green and 1-0 blue. An alpha of `0` is the transparent
/// sentinel; monochrome displays can only represent [`Color8::BLACK`] and [`Color8::WHITE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color8 {
    /// Packed `0bAARRGGBB` value.
    pub argb: u8,
}

impl Color8 {
    /// Fully transparent.
    pub const CLEAR: Self = Self { argb: 0x00 };
    /// Opaque black.
    pub const BLACK: Self = Self { argb: 0xC0 };
    /// Opaque white.
    pub const WHITE: Self = Self { argb: 0xFF };
    /// Opaque pure red.
    pub const RED: Self = Self { argb: 0xF0 };
    /// Opaque light gray.
    pub const LIGHT_GRAY: Self = Self { argb: 0xEA };
    /// Opaque dark gray.
    pub const DARK_GRAY: Self = Self { argb: 0xD5 };

    /// Wrap a raw ARGB2222 byte.
    pub const fn from_argb(argb: u8) -> Self {
        Self { argb }
    }

    /// Quantize straight 8-bit RGB to an opaque color (top two bits of each channel).
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            argb: 0xC0 | ((r >> 6) << 4) | ((g >> 6) << 2) | (b >> 6),
        }
    }

    /// Two-bit alpha.
    pub const fn alpha(self) -> u8 {
        self.argb >> 6
    }

    /// Two-bit red.
    pub const fn red(self) -> u8 {
        (self.argb >> 4) & 0b11
    }

    /// Two-bit green.
    pub const fn green(self) -> u8 {
        (self.argb >> 2) & 0b11
    }

    /// Two-bit blue.
    pub const fn blue(self) -> u8 {
        self.argb & 0b11
    }

    /// `true` for the transparent sentinel (alpha bits zero).
    pub const fn is_clear(self) -> bool {
        self.alpha() == 0
    }

    /// Expand to straight 8-bit RGBA.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [
            self.red() * 85,
            self.green() * 85,
            self.blue() * 85,
            self.alpha() * 85,
        ]
    }

    /// Blend `self` over `dst` using the two-bit alpha; the result is opaque unless both are clear.
    pub fn over(self, dst: Self) -> Self {
        match self.alpha() {
            0 => dst,
            3 => self,
            a => {
                fn mix(s: u8, d: u8, a: u8) -> u8 {
                    (s * a + d * (3 - a) + 1) / 3
                }
                Self {
                    argb: 0xC0
                        | (mix(self.red(), dst.red(), a) << 4)
                        | (mix(self.green(), dst.green(), a) << 2)
                        | mix(self.blue(), dst.blue(), a),
                }
            }
        }
    }

    /// Parse `#RRGGBB`, `0xRRGGBB`, `RRGGBB` or the keyword `clear`.
    pub fn parse_hex(s: &str) -> CutfaceResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("clear") {
            return Ok(Self::CLEAR);
        }
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        if digits.len() != 6 {
            return Err(CutfaceError::settings(format!(
                "color '{s}' must have six hex digits"
            )));
        }
        let rgb = u32::from_str_radix(digits, 16)
            .map_err(|_| CutfaceError::settings(format!("color '{s}' is not valid hex")))?;
        Ok(Self::from_rgb8(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        ))
    }

    /// `#RRGGBB` for opaque colors, `clear` for the sentinel.
    pub fn to_hex(self) -> String {
        if self.is_clear() {
            return "clear".to_string();
        }
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl TryFrom<String> for Color8 {
    type Error = CutfaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hex(&value)
    }
}

impl From<Color8> for String {
    fn from(value: Color8) -> Self {
        value.to_hex()
    }
}

/// Integer pixel dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Integer pixel rectangle with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl IRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn right(self) -> i32 {
        self.x + i32::from(self.width)
    }

    pub fn bottom(self) -> i32 {
        self.y + i32::from(self.height)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersection with `other`, or `None` when they do not overlap.
    pub fn intersect(self, other: Self) -> Option<Self> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some(Self::new(x0, y0, (x1 - x0) as u16, (y1 - y0) as u16))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
