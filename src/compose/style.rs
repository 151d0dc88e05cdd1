use crate::{
    animation::ease::EasingCurve,
    foundation::core::{Point, Size},
    foundation::error::{CutfaceError, CutfaceResult},
    mask::staircase::SweepDirection,
};

/// How the two labels travel as the animation percent grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GlyphMotion {
    /// Hour slides in from the left on the upper third, minute from the right on the lower third.
    #[default]
    Horizontal,
    /// Hour drops from the top edge, minute rises from the bottom edge.
    Vertical,
}

impl GlyphMotion {
    /// Anchors of the hour and minute labels for a layout of `size` at `percent`.
    pub fn anchors(self, size: Size, percent: i16) -> (Point, Point) {
        let w = i32::from(size.width);
        let h = i32::from(size.height);
        let p = i32::from(percent);
        let (hour, minute) = match self {
            Self::Horizontal => {
                let nudge = w / 10;
                (
                    (w * p / 200 - nudge, h / 3),
                    (w - w * p / 200 + nudge, h * 2 / 3),
                )
            }
            Self::Vertical => ((w / 2 - 10, h * p / 300), (w / 2 + 10, h - h * p / 300)),
        };
        (
            Point::new(f64::from(hour.0), f64::from(hour.1)),
            Point::new(f64::from(minute.0), f64::from(minute.1)),
        )
    }
}

/// Which labels get their outline face drawn over the fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OutlineToggles {
    pub hour: bool,
    pub minute: bool,
}

impl Default for OutlineToggles {
    fn default() -> Self {
        Self {
            hour: true,
            minute: true,
        }
    }
}

/// Parameters distinguishing the face variants; one composer serves all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CutStyle {
    pub easing: EasingCurve,
    pub sweep: SweepDirection,
    pub motion: GlyphMotion,
    /// Scanlines of the transition band.
    pub band_height: u16,
    /// Upper bound on outlines; settings can switch them off further.
    pub outline: OutlineToggles,
    pub line_width: u8,
}

impl Default for CutStyle {
    fn default() -> Self {
        Self::clean_cut()
    }
}

impl CutStyle {
    pub const DEFAULT_BAND_HEIGHT: u16 = 20;

    /// Horizontal slide with an overshooting sweep.
    pub fn clean_cut() -> Self {
        Self {
            easing: EasingCurve::Overshoot,
            sweep: SweepDirection::RightToLeft,
            motion: GlyphMotion::Horizontal,
            band_height: Self::DEFAULT_BAND_HEIGHT,
            outline: OutlineToggles::default(),
            line_width: 3,
        }
    }

    /// Vertical slide with a linear sweep.
    pub fn cutting_edge() -> Self {
        Self {
            easing: EasingCurve::Linear,
            motion: GlyphMotion::Vertical,
            ..Self::clean_cut()
        }
    }

    pub fn validate(&self) -> CutfaceResult<()> {
        if self.band_height < 2 {
            return Err(CutfaceError::validation(
                "band_height must be at least 2 scanlines",
            ));
        }
        if self.line_width == 0 {
            return Err(CutfaceError::validation("line_width must be positive"));
        }
        Ok(())
    }

    /// Rows captured from the top of the display: the upper half plus half the band.
    pub fn region_height(&self, layout_height: u16) -> u16 {
        (layout_height / 2 + self.band_height / 2).min(layout_height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/style.rs"]
mod tests;
