use crate::{
    display::surface::DisplaySurface,
    foundation::core::{Color8, Point},
};

/// One string to draw, horizontally centered on `anchor` with its cap height vertically
/// centered on `anchor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphRequest<'a> {
    pub text: &'a str,
    pub anchor: Point,
    /// Em height in pixels.
    pub size: u16,
    pub color: Color8,
    /// Draw the outline face instead of the filled face.
    pub outline: bool,
}

/// Renders text into the live display. The compositing engine never interprets glyph shapes.
pub trait GlyphPainter {
    fn paint(&mut self, surface: &mut dyn DisplaySurface, request: &GlyphRequest<'_>);
}

impl<P: GlyphPainter + ?Sized> GlyphPainter for Box<P> {
    fn paint(&mut self, surface: &mut dyn DisplaySurface, request: &GlyphRequest<'_>) {
        (**self).paint(surface, request);
    }
}
