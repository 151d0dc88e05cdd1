/// Upper bound of normalized animation progress (the timer reports `0..=NORMALIZED_MAX`).
pub const NORMALIZED_MAX: u32 = 65_535;

/// Curve from normalized animation progress to the percent that drives glyph offsets and the
/// staircase mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EasingCurve {
    /// Straight sweep from 0 to 100.
    Linear,
    /// Sweep to 120 over the first 80% of the run, then settle back to 100.
    #[default]
    Overshoot,
}

impl EasingCurve {
    /// Percent reached at the end of the run.
    pub const FINAL_PERCENT: i16 = 100;

    pub fn apply(self, progress: u32) -> i16 {
        let p = progress.min(NORMALIZED_MAX);
        let percent = match self {
            Self::Linear => p * 100 / NORMALIZED_MAX,
            Self::Overshoot => {
                let knee = NORMALIZED_MAX * 8 / 10;
                if p < knee {
                    p * 150 / NORMALIZED_MAX
                } else {
                    120 - (p - knee) * 20 / (NORMALIZED_MAX * 2 / 10)
                }
            }
        };
        percent as i16
    }

    /// Convenience for fractional progress in `[0, 1]`.
    pub fn apply_fraction(self, t: f64) -> i16 {
        let t = t.clamp(0.0, 1.0);
        self.apply((t * f64::from(NORMALIZED_MAX)).round() as u32)
    }

    /// Largest percent the curve can produce.
    pub fn peak(self) -> i16 {
        match self {
            Self::Linear => 100,
            Self::Overshoot => 120,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
