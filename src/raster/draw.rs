use kurbo::ParamCurveNearest as _;

use crate::{
    foundation::core::{Color8, Line, Point},
    raster::format::{PixelAdapter, dispatch_format},
    raster::framebuffer::Framebuffer,
};

const NEAREST_ACCURACY: f64 = 1e-6;

impl Framebuffer {
    /// Stroke a straight segment between two pixel positions.
    ///
    /// Endpoints address pixel centers; a pixel is covered when its center lies within
    /// `width / 2` of the segment, which keeps 1px diagonals connected.
    pub fn draw_line(&mut self, p1: Point, p2: Point, color: Color8, width: u8) {
        let width = f64::from(width.max(1));
        let half = width / 2.0;
        let line = Line::new(
            Point::new(p1.x + 0.5, p1.y + 0.5),
            Point::new(p2.x + 0.5, p2.y + 0.5),
        );

        let max_x = f64::from(self.width()) - 1.0;
        let max_y = f64::from(self.height()) - 1.0;
        let x0 = (line.p0.x.min(line.p1.x) - half).floor().clamp(0.0, max_x) as u16;
        let x1 = (line.p0.x.max(line.p1.x) + half).ceil().clamp(0.0, max_x) as u16;
        let y0 = (line.p0.y.min(line.p1.y) - half).floor().clamp(0.0, max_y) as u16;
        let y1 = (line.p0.y.max(line.p1.y) + half).ceil().clamp(0.0, max_y) as u16;

        let window = (x0, x1, y0, y1);
        dispatch_format!(self.format(), A => stroke_rows::<A>(self, &line, half, window, color));
    }
}

fn stroke_rows<A: PixelAdapter>(
    fb: &mut Framebuffer,
    line: &Line,
    half: f64,
    (x0, x1, y0, y1): (u16, u16, u16, u16),
    color: Color8,
) {
    let limit = half * half;
    for y in y0..=y1 {
        let mut row = fb.row_mut(y);
        let lo = x0.max(row.min_x);
        let hi = x1.min(row.max_x);
        for x in lo..=hi {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if line.nearest(center, NEAREST_ACCURACY).distance_sq <= limit {
                A::set_pixel(&mut row, x, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
