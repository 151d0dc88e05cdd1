use std::ops::{Deref, DerefMut};

use crate::{
    display::platform::Platform,
    foundation::core::{Color8, IRect, Point, Size},
    foundation::error::{CutfaceError, CutfaceResult},
    raster::format::PixelFormat,
    raster::framebuffer::{DisplayShape, Framebuffer},
};

/// The live display the face draws into.
///
/// Drawing primitives and direct pixel access are mutually exclusive: the frame buffer is
/// acquired through [`capture_frame_buffer`](Self::capture_frame_buffer) and released when the
/// returned guard drops, on every exit path.
pub trait DisplaySurface {
    fn format(&self) -> PixelFormat;

    /// Full display size.
    fn bounds(&self) -> Size;

    /// Area not covered by system overlays. Defaults to the full display.
    fn unobstructed_bounds(&self) -> Size {
        self.bounds()
    }

    fn fill_rect(&mut self, rect: IRect, color: Color8);

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color8, width: u8);

    /// Acquire the live buffer. Fails if a previous capture was never released.
    fn capture_frame_buffer(&mut self) -> CutfaceResult<CapturedFrame<'_>>;
}

/// Scoped access to the live buffer; releases the capture on drop.
#[derive(Debug)]
pub struct CapturedFrame<'a> {
    fb: &'a mut Framebuffer,
    held: &'a mut bool,
}

impl<'a> CapturedFrame<'a> {
    /// Mark `held` and hand out `fb` until the guard drops.
    pub fn acquire(fb: &'a mut Framebuffer, held: &'a mut bool) -> CutfaceResult<Self> {
        if *held {
            return Err(CutfaceError::surface(
                "frame buffer captured twice without release",
            ));
        }
        *held = true;
        tracing::trace!("frame buffer captured");
        Ok(Self { fb, held })
    }

    /// Explicit release; equivalent to dropping the guard.
    pub fn release(self) {}
}

impl Deref for CapturedFrame<'_> {
    type Target = Framebuffer;

    fn deref(&self) -> &Framebuffer {
        self.fb
    }
}

impl DerefMut for CapturedFrame<'_> {
    fn deref_mut(&mut self) -> &mut Framebuffer {
        self.fb
    }
}

impl Drop for CapturedFrame<'_> {
    fn drop(&mut self) {
        *self.held = false;
        tracing::trace!("frame buffer released");
    }
}

/// In-memory display backed by a [`Framebuffer`].
#[derive(Debug)]
pub struct SoftwareDisplay {
    fb: Framebuffer,
    obstruction: u16,
    captured: bool,
    captures: u64,
}

impl SoftwareDisplay {
    pub fn new(size: Size, format: PixelFormat, shape: DisplayShape) -> CutfaceResult<Self> {
        Ok(Self {
            fb: Framebuffer::try_new(size, format, shape)?,
            obstruction: 0,
            captured: false,
            captures: 0,
        })
    }

    pub fn for_platform(platform: Platform) -> CutfaceResult<Self> {
        Self::new(platform.size(), platform.format(), platform.shape())
    }

    /// Cover the bottom `rows` of the display with a system overlay.
    pub fn set_obstruction(&mut self, rows: u16) {
        self.obstruction = rows.min(self.fb.height());
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Number of successful captures so far.
    pub fn capture_count(&self) -> u64 {
        self.captures
    }
}

impl DisplaySurface for SoftwareDisplay {
    fn format(&self) -> PixelFormat {
        self.fb.format()
    }

    fn bounds(&self) -> Size {
        self.fb.size()
    }

    fn unobstructed_bounds(&self) -> Size {
        let size = self.fb.size();
        Size::new(size.width, size.height - self.obstruction)
    }

    fn fill_rect(&mut self, rect: IRect, color: Color8) {
        let color = self.fb.format().quantize(color);
        self.fb.fill_rect(rect, color);
    }

    fn draw_line(&mut self, p1: Point, p2: Point, color: Color8, width: u8) {
        let color = self.fb.format().quantize(color);
        self.fb.draw_line(p1, p2, color, width);
    }

    fn capture_frame_buffer(&mut self) -> CutfaceResult<CapturedFrame<'_>> {
        let frame = CapturedFrame::acquire(&mut self.fb, &mut self.captured)?;
        self.captures += 1;
        Ok(frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/display/surface.rs"]
mod tests;
