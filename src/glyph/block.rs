//! Seven-segment painter used when no vector font is available.

use crate::{
    display::surface::DisplaySurface,
    foundation::core::{Color8, IRect},
    glyph::painter::{GlyphPainter, GlyphRequest},
};

const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

const DIGITS: [u8; 10] = [
    A | B | C | D | E | F,
    B | C,
    A | B | D | E | G,
    A | B | C | D | G,
    B | C | F | G,
    A | C | D | F | G,
    A | C | D | E | F | G,
    A | B | C,
    A | B | C | D | E | F | G,
    A | B | C | D | F | G,
];

/// Draws digits as filled or hollow seven-segment blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockGlyphPainter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Metrics {
    cap: i32,
    width: i32,
    stroke: i32,
    gap: i32,
}

impl Metrics {
    fn for_size(size: u16) -> Self {
        let cap = (i32::from(size) * 7 / 10).max(5);
        let stroke = (cap / 7).max(1);
        Self {
            cap,
            width: (cap * 3 / 5).max(3),
            stroke,
            gap: stroke,
        }
    }

    fn advance(self, ch: char) -> i32 {
        match ch {
            '0'..='9' => self.width,
            ':' => self.stroke,
            _ => self.width / 2,
        }
    }
}

impl BlockGlyphPainter {
    pub fn new() -> Self {
        Self
    }

    /// Rectangles making up `text` before outline processing.
    fn segments(request: &GlyphRequest<'_>) -> Vec<IRect> {
        let m = Metrics::for_size(request.size);
        let chars: Vec<char> = request.text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        let total: i32 = chars.iter().map(|&c| m.advance(c)).sum::<i32>()
            + m.gap * (chars.len() as i32 - 1);

        let mut x = request.anchor.x.round() as i32 - total / 2;
        let y = request.anchor.y.round() as i32 - m.cap / 2;
        let mut out = Vec::new();
        for ch in chars {
            match ch {
                '0'..='9' => {
                    let bits = DIGITS[ch as usize - '0' as usize];
                    push_digit(&mut out, bits, x, y, m);
                }
                ':' => {
                    let t = m.stroke;
                    out.push(rect(x, y + m.cap / 3 - t / 2, t, t));
                    out.push(rect(x, y + 2 * m.cap / 3 - t / 2, t, t));
                }
                _ => {}
            }
            x += m.advance(ch) + m.gap;
        }
        out
    }
}

fn rect(x: i32, y: i32, w: i32, h: i32) -> IRect {
    IRect::new(x, y, w.max(0) as u16, h.max(0) as u16)
}

fn push_digit(out: &mut Vec<IRect>, bits: u8, x: i32, y: i32, m: Metrics) {
    let (w, h, t) = (m.width, m.cap, m.stroke);
    let mid = y + h / 2 - t / 2;
    let upper = h / 2 + t / 2;
    let lower = h - h / 2 + t / 2;
    let segments = [
        (A, rect(x, y, w, t)),
        (B, rect(x + w - t, y, t, upper)),
        (C, rect(x + w - t, mid, t, lower)),
        (D, rect(x, y + h - t, w, t)),
        (E, rect(x, mid, t, lower)),
        (F, rect(x, y, t, upper)),
        (G, rect(x, mid, w, t)),
    ];
    out.extend(
        segments
            .into_iter()
            .filter(|(bit, _)| bits & bit != 0)
            .map(|(_, r)| r),
    );
}

fn stroke_rect(surface: &mut dyn DisplaySurface, r: IRect, color: Color8, t: u16) {
    let t = t.min(r.width).min(r.height);
    if t == 0 {
        return;
    }
    surface.fill_rect(IRect::new(r.x, r.y, r.width, t), color);
    surface.fill_rect(IRect::new(r.x, r.bottom() - i32::from(t), r.width, t), color);
    surface.fill_rect(IRect::new(r.x, r.y, t, r.height), color);
    surface.fill_rect(IRect::new(r.right() - i32::from(t), r.y, t, r.height), color);
}

impl GlyphPainter for BlockGlyphPainter {
    fn paint(&mut self, surface: &mut dyn DisplaySurface, request: &GlyphRequest<'_>) {
        let segments = Self::segments(request);
        if request.outline {
            let t = (Metrics::for_size(request.size).stroke / 4).max(1) as u16;
            for r in segments {
                stroke_rect(surface, r, request.color, t);
            }
        } else {
            for r in segments {
                surface.fill_rect(r, request.color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/block.rs"]
mod tests;
