use std::time::Duration;

use crate::animation::ease::{EasingCurve, NORMALIZED_MAX};

/// Delay and run length of the intro animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimationTiming {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self {
            delay_ms: 100,
            duration_ms: 500,
        }
    }
}

impl AnimationTiming {
    pub fn total(self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms) + u64::from(self.duration_ms))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationPhase {
    Idle,
    Running,
    Done,
}

/// Snapshot of the value driving the face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    /// In `[0, 150]`.
    pub percent: i16,
    pub running: bool,
}

impl AnimationState {
    /// The resting state used when animation is disabled or finished.
    pub const SETTLED: Self = Self {
        percent: EasingCurve::FINAL_PERCENT,
        running: false,
    };
}

/// Drives the intro animation from timer callbacks.
///
/// `Idle -> Running` on [`start`](Self::start), `Running -> Done` once the elapsed time covers
/// delay plus duration. A done controller keeps reporting the final percent.
#[derive(Clone, Debug)]
pub struct AnimationController {
    curve: EasingCurve,
    timing: AnimationTiming,
    phase: AnimationPhase,
    percent: i16,
}

impl AnimationController {
    pub fn new(curve: EasingCurve, timing: AnimationTiming) -> Self {
        Self {
            curve,
            timing,
            phase: AnimationPhase::Idle,
            percent: 0,
        }
    }

    pub fn curve(&self) -> EasingCurve {
        self.curve
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == AnimationPhase::Done
    }

    pub fn state(&self) -> AnimationState {
        AnimationState {
            percent: self.percent,
            running: self.phase == AnimationPhase::Running,
        }
    }

    pub fn start(&mut self) {
        if self.phase == AnimationPhase::Idle {
            self.phase = AnimationPhase::Running;
            self.percent = 0;
        }
    }

    /// Normalized progress for `elapsed` time since start; `None` while still in the delay.
    pub fn progress_at(&self, elapsed: Duration) -> Option<u32> {
        let delay = Duration::from_millis(u64::from(self.timing.delay_ms));
        let run = elapsed.checked_sub(delay)?;
        let duration_ms = u128::from(self.timing.duration_ms.max(1));
        let p = run.as_millis().min(duration_ms) * u128::from(NORMALIZED_MAX) / duration_ms;
        Some(p as u32)
    }

    /// Advance to `elapsed` time since start and return the new state.
    pub fn advance(&mut self, elapsed: Duration) -> AnimationState {
        if self.phase != AnimationPhase::Running {
            return self.state();
        }
        if let Some(progress) = self.progress_at(elapsed) {
            self.percent = self.curve.apply(progress);
        }
        if elapsed >= self.timing.total() {
            self.percent = EasingCurve::FINAL_PERCENT;
            self.phase = AnimationPhase::Done;
            tracing::debug!(curve = ?self.curve, "animation finished");
        }
        self.state()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/controller.rs"]
mod tests;
