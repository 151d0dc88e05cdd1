use crate::{
    foundation::core::{Color8, IRect, Size},
    foundation::error::{CutfaceError, CutfaceResult},
    mask::staircase::{MaskPolicy, StaircaseMask},
    raster::format::{PixelAdapter, PixelFormat, dispatch_format},
    raster::framebuffer::{Framebuffer, RowBounds},
};

/// Offscreen copy of a horizontal strip of the live buffer.
///
/// Row `i` of the snapshot mirrors row `region.y + i` of the source, including that row's valid
/// column range, so capture and composite never touch pixels the panel cannot show.
#[derive(Debug)]
pub struct RegionBuffer {
    region: IRect,
    pixels: Framebuffer,
}

impl RegionBuffer {
    /// Snapshot `region` of `source`.
    pub fn capture(source: &Framebuffer, region: IRect) -> CutfaceResult<Self> {
        Self::capture_within(source, region, None)
    }

    /// Snapshot `region` of `source`, failing with [`CutfaceError::Allocation`] when the copy
    /// would exceed `max_bytes`.
    pub fn capture_within(
        source: &Framebuffer,
        region: IRect,
        max_bytes: Option<usize>,
    ) -> CutfaceResult<Self> {
        let rows = validate_region(source, region)?;
        let size = Size::new(source.width(), region.height);
        let needed = source.format().row_stride(size.width) * usize::from(size.height);
        if let Some(limit) = max_bytes
            && needed > limit
        {
            return Err(CutfaceError::allocation(format!(
                "snapshot needs {needed} bytes, budget is {limit}"
            )));
        }

        let bounds: Vec<RowBounds> = rows.clone().map(|y| source.row_bounds(y)).collect();
        let mut pixels = Framebuffer::with_bounds(size, source.format(), bounds)?;
        dispatch_format!(source.format(), A => copy_in::<A>(source, &mut pixels, region));

        tracing::trace!(?region, bytes = needed, "captured region");
        Ok(Self { region, pixels })
    }

    pub fn region(&self) -> IRect {
        self.region
    }

    pub fn format(&self) -> PixelFormat {
        self.pixels.format()
    }

    /// Snapshot contents; row 0 is the region's first row.
    pub fn pixels(&self) -> &Framebuffer {
        &self.pixels
    }

    /// Replace the receding side of every band row with the transparent sentinel.
    ///
    /// Only formats that carry transparency can hold the sentinel.
    pub fn clear_receding(&mut self, mask: &StaircaseMask) -> CutfaceResult<()> {
        if !self.format().supports_transparency() {
            return Err(CutfaceError::validation(format!(
                "{:?} has no transparent color",
                self.format()
            )));
        }
        dispatch_format!(self.format(), A => clear_rows::<A>(&mut self.pixels, mask));
        Ok(())
    }

    /// Write the snapshot back into `dest` at the same region, row by row through `mask`.
    ///
    /// [`MaskPolicy::HardEdge`] copies only the kept span of band rows and leaves the rest of
    /// `dest` untouched. [`MaskPolicy::Transparent`] additionally alpha-blends every copied pixel,
    /// so sentinel pixels show the live content underneath.
    pub fn composite(
        &self,
        dest: &mut Framebuffer,
        mask: &StaircaseMask,
        policy: MaskPolicy,
    ) -> CutfaceResult<()> {
        if dest.format() != self.format() || dest.width() != self.pixels.width() {
            return Err(CutfaceError::validation(format!(
                "snapshot {:?} {}px wide cannot composite into {:?} {}px wide",
                self.format(),
                self.pixels.width(),
                dest.format(),
                dest.width()
            )));
        }
        validate_region(dest, self.region)?;
        if policy == MaskPolicy::Transparent && !dest.format().supports_transparency() {
            return Err(CutfaceError::validation(
                "transparent compositing needs a format with a transparent color",
            ));
        }

        dispatch_format!(dest.format(), A => copy_out::<A>(self, dest, mask, policy));
        Ok(())
    }
}

fn validate_region(fb: &Framebuffer, region: IRect) -> CutfaceResult<std::ops::Range<u16>> {
    let inside = region.x >= 0
        && region.y >= 0
        && region.right() <= i32::from(fb.width())
        && region.bottom() <= i32::from(fb.height());
    if region.is_empty() || !inside {
        return Err(CutfaceError::out_of_range(format!(
            "region {region:?} outside {}x{} buffer",
            fb.width(),
            fb.height()
        )));
    }
    Ok(region.y as u16..region.bottom() as u16)
}

/// Columns of `[min_x, max_x]` that also fall inside the region's horizontal span.
fn clip_span(region: IRect, min_x: u16, max_x: u16) -> Option<(u16, u16)> {
    let lo = min_x.max(region.x as u16);
    let hi = max_x.min((region.right() - 1) as u16);
    (lo <= hi).then_some((lo, hi))
}

fn copy_in<A: PixelAdapter>(source: &Framebuffer, snap: &mut Framebuffer, region: IRect) {
    for i in 0..region.height {
        let src = source.row(region.y as u16 + i);
        let mut dst = snap.row_mut(i);
        let Some((lo, hi)) = clip_span(region, src.min_x, src.max_x) else {
            continue;
        };
        for x in lo..=hi {
            A::set_pixel(&mut dst, x, A::get_pixel(&src, x));
        }
    }
}

fn clear_rows<A: PixelAdapter>(snap: &mut Framebuffer, mask: &StaircaseMask) {
    for row in mask.rows.restart() {
        let y = mask.band_top + row.row;
        if y >= snap.height() {
            break;
        }
        let mut dst = snap.row_mut(y);
        if let Some((lo, hi)) = row.receding_span(dst.min_x, dst.max_x) {
            for x in lo..=hi {
                A::set_pixel(&mut dst, x, Color8::CLEAR);
            }
        }
    }
}

fn copy_out<A: PixelAdapter>(
    snap: &RegionBuffer,
    dest: &mut Framebuffer,
    mask: &StaircaseMask,
    policy: MaskPolicy,
) {
    let region = snap.region;
    for i in 0..region.height {
        let src = snap.pixels.row(i);
        let mut dst = dest.row_mut(region.y as u16 + i);
        let (min_x, max_x) = (src.min_x.max(dst.min_x), src.max_x.min(dst.max_x));
        if min_x > max_x {
            continue;
        }
        let Some((lo, hi)) = mask
            .kept_span(i, min_x, max_x)
            .and_then(|(lo, hi)| clip_span(region, lo, hi))
        else {
            continue;
        };
        match policy {
            MaskPolicy::HardEdge => {
                for x in lo..=hi {
                    A::set_pixel(&mut dst, x, A::get_pixel(&src, x));
                }
            }
            MaskPolicy::Transparent => {
                for x in lo..=hi {
                    let over = A::get_pixel(&src, x).over(A::get_pixel(&dst.as_view(), x));
                    A::set_pixel(&mut dst, x, over);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/region.rs"]
mod tests;
