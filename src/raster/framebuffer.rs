use crate::{
    foundation::core::{Color8, IRect, Size},
    foundation::error::{CutfaceError, CutfaceResult},
    raster::format::{PixelAdapter, PixelFormat, RowView, RowViewMut, dispatch_format},
};

/// Outline of the visible display area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DisplayShape {
    /// Every row spans the full width.
    #[default]
    Rect,
    /// Circular panel inscribed in the buffer; row bounds shrink towards the top and bottom.
    Round,
}

/// Inclusive valid column range of one row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowBounds {
    pub min_x: u16,
    pub max_x: u16,
}

impl RowBounds {
    pub fn contains(self, x: u16) -> bool {
        self.min_x <= x && x <= self.max_x
    }
}

impl DisplayShape {
    /// Per-row column bounds for a buffer of `size`.
    pub fn row_bounds(self, size: Size) -> Vec<RowBounds> {
        let full = RowBounds {
            min_x: 0,
            max_x: size.width.saturating_sub(1),
        };
        match self {
            Self::Rect => vec![full; usize::from(size.height)],
            Self::Round => {
                let cx = f64::from(size.width) / 2.0;
                let cy = f64::from(size.height) / 2.0;
                let r = cx.min(cy);
                (0..size.height)
                    .map(|y| {
                        let dy = f64::from(y) + 0.5 - cy;
                        let half = (r * r - dy * dy).max(0.0).sqrt();
                        let min_x = (cx - half).floor().clamp(0.0, f64::from(full.max_x)) as u16;
                        let max_x = ((cx + half).ceil() - 1.0)
                            .clamp(f64::from(min_x), f64::from(full.max_x))
                            as u16;
                        RowBounds { min_x, max_x }
                    })
                    .collect()
            }
        }
    }
}

/// A row-major pixel buffer in one of the native [`PixelFormat`]s.
///
/// Each row carries its own valid column range, so non-rectangular panels are represented
/// without special cases in the pixel loops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    size: Size,
    format: PixelFormat,
    stride: usize,
    bounds: Vec<RowBounds>,
    data: Vec<u8>,
}

impl Framebuffer {
    /// Allocate a zeroed buffer. Fails with [`CutfaceError::Allocation`] instead of aborting.
    pub fn try_new(size: Size, format: PixelFormat, shape: DisplayShape) -> CutfaceResult<Self> {
        Self::with_bounds(size, format, shape.row_bounds(size))
    }

    /// Allocate a zeroed buffer with explicit per-row bounds.
    pub fn with_bounds(
        size: Size,
        format: PixelFormat,
        bounds: Vec<RowBounds>,
    ) -> CutfaceResult<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(CutfaceError::validation("framebuffer size must be non-zero"));
        }
        if bounds.len() != usize::from(size.height) {
            return Err(CutfaceError::validation(format!(
                "expected {} row bounds, got {}",
                size.height,
                bounds.len()
            )));
        }
        if let Some((y, b)) = bounds
            .iter()
            .enumerate()
            .find(|(_, b)| b.min_x > b.max_x || b.max_x >= size.width)
        {
            return Err(CutfaceError::out_of_range(format!(
                "row {y} bounds [{}, {}] outside width {}",
                b.min_x, b.max_x, size.width
            )));
        }

        let stride = format.row_stride(size.width);
        let len = stride
            .checked_mul(usize::from(size.height))
            .ok_or_else(|| CutfaceError::allocation("framebuffer size overflow"))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| CutfaceError::allocation(format!("framebuffer of {len} bytes: {e}")))?;
        data.resize(len, 0);

        Ok(Self {
            size,
            format,
            stride,
            bounds,
            data,
        })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.width
    }

    pub fn height(&self) -> u16 {
        self.size.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Raw row-major bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn row_bounds(&self, y: u16) -> RowBounds {
        self.bounds[usize::from(y)]
    }

    /// View of row `y`. `y` must be below [`Self::height`].
    pub fn row(&self, y: u16) -> RowView<'_> {
        let b = self.bounds[usize::from(y)];
        let start = usize::from(y) * self.stride;
        RowView {
            data: &self.data[start..start + self.stride],
            min_x: b.min_x,
            max_x: b.max_x,
        }
    }

    /// Mutable view of row `y`. `y` must be below [`Self::height`].
    pub fn row_mut(&mut self, y: u16) -> RowViewMut<'_> {
        let b = self.bounds[usize::from(y)];
        let start = usize::from(y) * self.stride;
        RowViewMut {
            data: &mut self.data[start..start + self.stride],
            min_x: b.min_x,
            max_x: b.max_x,
        }
    }

    /// Checked single-pixel read; `None` outside the visible area.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color8> {
        if y >= self.size.height || !self.row_bounds(y).contains(x) {
            return None;
        }
        Some(self.format.get_pixel(&self.row(y), x))
    }

    /// Checked single-pixel write; ignored outside the visible area.
    pub fn put_pixel(&mut self, x: u16, y: u16, color: Color8) {
        if y >= self.size.height || !self.row_bounds(y).contains(x) {
            return;
        }
        let format = self.format;
        format.set_pixel(&mut self.row_mut(y), x, color);
    }

    /// Fill every visible pixel.
    pub fn clear(&mut self, color: Color8) {
        self.fill_rect(IRect::from_size(self.size), color);
    }

    /// Fill the visible part of `rect`.
    pub fn fill_rect(&mut self, rect: IRect, color: Color8) {
        let Some(clip) = rect.intersect(IRect::from_size(self.size)) else {
            return;
        };
        dispatch_format!(self.format, A => fill_rows::<A>(self, clip, color));
    }
}

fn fill_rows<A: PixelAdapter>(fb: &mut Framebuffer, clip: IRect, color: Color8) {
    // clip is inside the buffer, so the coordinates fit in u16
    let x0 = clip.x as u16;
    let x1 = (clip.right() - 1) as u16;
    for y in clip.y as u16..clip.bottom() as u16 {
        let mut row = fb.row_mut(y);
        let lo = x0.max(row.min_x);
        let hi = x1.min(row.max_x);
        for x in lo..=hi {
            A::set_pixel(&mut row, x, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/framebuffer.rs"]
mod tests;
