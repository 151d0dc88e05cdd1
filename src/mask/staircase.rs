//! Staircase mask generation.
//!
//! The diagonal boundary between the two halves is approximated by horizontal steps: every
//! scanline of the transition band gets one cut column. Rows above the band are copied whole.

use crate::foundation::core::Point;
use crate::raster::format::PixelFormat;

/// Progress value at which the staircase has fully receded across the display.
pub const MAX_PROGRESS: i32 = 150;

/// Which side of the band recedes as progress grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SweepDirection {
    /// Kept columns are `[min_x, cut)`; the cut walks leftwards down the band.
    #[default]
    RightToLeft,
    /// Kept columns are `[cut, max_x]`; the cut walks rightwards down the band.
    LeftToRight,
}

/// How snapshot pixels on the receding side of a cut are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MaskPolicy {
    /// Receding columns hold the transparent sentinel and are alpha-composited (soft edge).
    Transparent,
    /// Receding columns are never written, so the live content shows through (hard edge).
    HardEdge,
}

impl MaskPolicy {
    pub fn for_format(format: PixelFormat) -> Self {
        if format.supports_transparency() {
            Self::Transparent
        } else {
            Self::HardEdge
        }
    }
}

/// One scanline of the band: its index from the top of the band and its cut column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskRow {
    pub row: u16,
    pub cut: u16,
    pub sweep: SweepDirection,
}

impl MaskRow {
    /// Inclusive span of `[min_x, max_x]` that the snapshot keeps on this row.
    pub fn kept_span(self, min_x: u16, max_x: u16) -> Option<(u16, u16)> {
        match self.sweep {
            SweepDirection::RightToLeft => {
                let hi = max_x.min(self.cut.checked_sub(1)?);
                (min_x <= hi).then_some((min_x, hi))
            }
            SweepDirection::LeftToRight => {
                let lo = min_x.max(self.cut);
                (lo <= max_x).then_some((lo, max_x))
            }
        }
    }

    /// Inclusive span of `[min_x, max_x]` on the receding side of the cut.
    pub fn receding_span(self, min_x: u16, max_x: u16) -> Option<(u16, u16)> {
        match self.sweep {
            SweepDirection::RightToLeft => {
                let lo = min_x.max(self.cut);
                (lo <= max_x).then_some((lo, max_x))
            }
            SweepDirection::LeftToRight => {
                let hi = max_x.min(self.cut.checked_sub(1)?);
                (min_x <= hi).then_some((min_x, hi))
            }
        }
    }
}

/// Lazily produced, finite and restartable sequence of band rows.
///
/// A clone continues from the same position; [`RowMaskSequence::restart`] begins again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowMaskSequence {
    progress: i32,
    band_height: u16,
    display_width: u16,
    sweep: SweepDirection,
    next: u16,
}

/// Right-to-left staircase for `progress_percent` over `band_height` rows.
pub fn generate(progress_percent: i32, band_height: u16, display_width: u16) -> RowMaskSequence {
    generate_with(
        progress_percent,
        band_height,
        display_width,
        SweepDirection::RightToLeft,
    )
}

/// Staircase in either sweep direction.
pub fn generate_with(
    progress_percent: i32,
    band_height: u16,
    display_width: u16,
    sweep: SweepDirection,
) -> RowMaskSequence {
    RowMaskSequence {
        progress: progress_percent.clamp(0, MAX_PROGRESS),
        band_height,
        display_width,
        sweep,
        next: 0,
    }
}

impl RowMaskSequence {
    pub fn band_height(&self) -> u16 {
        self.band_height
    }

    pub fn sweep(&self) -> SweepDirection {
        self.sweep
    }

    /// Progress after clamping to `[0, MAX_PROGRESS]`.
    pub fn progress(&self) -> i32 {
        self.progress
    }

    /// A fresh sequence positioned at the first row.
    pub fn restart(&self) -> Self {
        Self {
            next: 0,
            ..self.clone()
        }
    }

    /// Cut column of band row `row`; the last row is reached exactly at full progress.
    pub fn cut_at(&self, row: u16) -> u16 {
        let width = u64::from(self.display_width);
        let steps = u64::from(self.band_height.saturating_sub(1).max(1));
        let row = u64::from(row.min(self.band_height.saturating_sub(1)));
        let recess = (width * self.progress as u64 * row) / (MAX_PROGRESS as u64 * steps);
        let recess = recess.min(width) as u16;
        match self.sweep {
            SweepDirection::RightToLeft => self.display_width - recess,
            SweepDirection::LeftToRight => recess,
        }
    }

    pub fn row_at(&self, row: u16) -> Option<MaskRow> {
        (row < self.band_height).then(|| MaskRow {
            row,
            cut: self.cut_at(row),
            sweep: self.sweep,
        })
    }
}

impl Iterator for RowMaskSequence {
    type Item = MaskRow;

    fn next(&mut self) -> Option<MaskRow> {
        let row = self.row_at(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::from(self.band_height.saturating_sub(self.next));
        (left, Some(left))
    }
}

impl ExactSizeIterator for RowMaskSequence {}

/// A staircase placed inside a snapshot region: band rows start at `band_top`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaircaseMask {
    pub band_top: u16,
    pub rows: RowMaskSequence,
}

impl StaircaseMask {
    pub fn new(band_top: u16, rows: RowMaskSequence) -> Self {
        Self {
            band_top,
            rows: rows.restart(),
        }
    }

    /// Band row covering region row `y`, or `None` when `y` is copied whole.
    pub fn band_row(&self, y: u16) -> Option<MaskRow> {
        self.rows.row_at(y.checked_sub(self.band_top)?)
    }

    /// Inclusive kept span of region row `y` within `[min_x, max_x]`.
    pub fn kept_span(&self, y: u16, min_x: u16, max_x: u16) -> Option<(u16, u16)> {
        match self.band_row(y) {
            Some(row) => row.kept_span(min_x, max_x),
            None => Some((min_x, max_x)),
        }
    }

    /// No row recedes: the band is copied whole and there is no edge to stroke.
    pub fn is_collapsed(&self) -> bool {
        let last = self.rows.band_height().saturating_sub(1);
        self.rows.cut_at(0) == self.rows.cut_at(last)
    }

    /// Endpoints of the straight stroke along the staircase envelope, in region coordinates.
    pub fn envelope(&self) -> (Point, Point) {
        let last = self.rows.band_height().saturating_sub(1);
        (
            Point::new(f64::from(self.rows.cut_at(0)), f64::from(self.band_top)),
            Point::new(
                f64::from(self.rows.cut_at(last)),
                f64::from(self.band_top + last),
            ),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/staircase.rs"]
mod tests;
