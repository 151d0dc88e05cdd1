//! Pixel format adapter.
//!
//! Hot loops never branch on the format per pixel: callers pick an adapter once with
//! `dispatch_format!` and run a loop monomorphized for it.

use crate::foundation::core::Color8;

/// Evaluate `$body` with `$adapter` bound to the adapter type for `$format`.
macro_rules! dispatch_format {
    ($format:expr, $adapter:ident => $body:expr) => {
        match $format {
            $crate::raster::format::PixelFormat::PackedMonochrome => {
                #[allow(dead_code)]
                type $adapter = $crate::raster::format::PackedMonoAdapter;
                $body
            }
            $crate::raster::format::PixelFormat::IndexedByte => {
                #[allow(dead_code)]
                type $adapter = $crate::raster::format::IndexedByteAdapter;
                $body
            }
        }
    };
}

pub(crate) use dispatch_format;

/// Native encoding of a framebuffer. Fixed per display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PixelFormat {
    /// One bit per pixel, eight pixels per byte, least significant bit first.
    PackedMonochrome,
    /// One ARGB2222 byte per pixel.
    IndexedByte,
}

impl PixelFormat {
    /// Bytes per row; monochrome rows are padded to a 32-bit word.
    pub fn row_stride(self, width: u16) -> usize {
        let w = usize::from(width);
        match self {
            Self::PackedMonochrome => w.div_ceil(32) * 4,
            Self::IndexedByte => w,
        }
    }

    /// Whether the format carries the transparent sentinel.
    pub fn supports_transparency(self) -> bool {
        matches!(self, Self::IndexedByte)
    }

    /// Whether `color` survives a set/get round trip bit-exactly.
    pub fn is_representable(self, color: Color8) -> bool {
        match self {
            Self::PackedMonochrome => color == Color8::BLACK || color == Color8::WHITE,
            Self::IndexedByte => true,
        }
    }

    /// The closest color this format can store.
    pub fn quantize(self, color: Color8) -> Color8 {
        match self {
            Self::PackedMonochrome => {
                if color == Color8::WHITE {
                    Color8::WHITE
                } else {
                    Color8::BLACK
                }
            }
            Self::IndexedByte => color,
        }
    }

    /// Read one pixel. Convenience for non-hot paths; loops use an adapter directly.
    pub fn get_pixel(self, row: &RowView<'_>, x: u16) -> Color8 {
        dispatch_format!(self, A => A::get_pixel(row, x))
    }

    /// Write one pixel. Convenience for non-hot paths; loops use an adapter directly.
    pub fn set_pixel(self, row: &mut RowViewMut<'_>, x: u16, color: Color8) {
        dispatch_format!(self, A => A::set_pixel(row, x, color))
    }
}

/// Read-only view of one scanline and its valid column range `[min_x, max_x]`.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    pub data: &'a [u8],
    pub min_x: u16,
    pub max_x: u16,
}

/// Mutable view of one scanline and its valid column range `[min_x, max_x]`.
#[derive(Debug)]
pub struct RowViewMut<'a> {
    pub data: &'a mut [u8],
    pub min_x: u16,
    pub max_x: u16,
}

impl RowViewMut<'_> {
    pub fn as_view(&self) -> RowView<'_> {
        RowView {
            data: &*self.data,
            min_x: self.min_x,
            max_x: self.max_x,
        }
    }
}

/// Per-format pixel access. Implementors are zero-sized and selected at compile time.
pub trait PixelAdapter {
    const FORMAT: PixelFormat;

    /// Read the pixel at `x`. `x` must lie within the row's valid range.
    fn get_pixel(row: &RowView<'_>, x: u16) -> Color8;

    /// Write the pixel at `x`. `x` must lie within the row's valid range.
    fn set_pixel(row: &mut RowViewMut<'_>, x: u16, color: Color8);
}

/// Adapter for [`PixelFormat::PackedMonochrome`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PackedMonoAdapter;

/// Adapter for [`PixelFormat::IndexedByte`].
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexedByteAdapter;

#[inline]
fn byte_get_bit(byte: u8, bit: u8) -> u8 {
    (byte >> bit) & 1
}

#[inline]
fn byte_set_bit(byte: &mut u8, bit: u8, value: u8) {
    // branchless: -value is all ones for 1 and all zeros for 0
    *byte ^= (value.wrapping_neg() ^ *byte) & (1 << bit);
}

impl PixelAdapter for PackedMonoAdapter {
    const FORMAT: PixelFormat = PixelFormat::PackedMonochrome;

    #[inline]
    fn get_pixel(row: &RowView<'_>, x: u16) -> Color8 {
        debug_assert!(row.min_x <= x && x <= row.max_x, "x={x} outside row range");
        let byte = usize::from(x / 8);
        let bit = (x % 8) as u8;
        if byte_get_bit(row.data[byte], bit) == 1 {
            Color8::WHITE
        } else {
            Color8::BLACK
        }
    }

    #[inline]
    fn set_pixel(row: &mut RowViewMut<'_>, x: u16, color: Color8) {
        debug_assert!(row.min_x <= x && x <= row.max_x, "x={x} outside row range");
        let byte = usize::from(x / 8);
        let bit = (x % 8) as u8;
        byte_set_bit(&mut row.data[byte], bit, u8::from(color == Color8::WHITE));
    }
}

impl PixelAdapter for IndexedByteAdapter {
    const FORMAT: PixelFormat = PixelFormat::IndexedByte;

    #[inline]
    fn get_pixel(row: &RowView<'_>, x: u16) -> Color8 {
        debug_assert!(row.min_x <= x && x <= row.max_x, "x={x} outside row range");
        Color8::from_argb(row.data[usize::from(x)])
    }

    #[inline]
    fn set_pixel(row: &mut RowViewMut<'_>, x: u16, color: Color8) {
        debug_assert!(row.min_x <= x && x <= row.max_x, "x={x} outside row range");
        row.data[usize::from(x)] = color.argb;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/format.rs"]
mod tests;
