use chrono::Timelike as _;

use crate::foundation::error::{CutfaceError, CutfaceResult};

/// Wall-clock hour (0-23) and minute (0-59).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClockTime {
    time: chrono::NaiveTime,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8) -> CutfaceResult<Self> {
        chrono::NaiveTime::from_hms_opt(u32::from(hour), u32::from(minute), 0)
            .map(|time| Self { time })
            .ok_or_else(|| {
                CutfaceError::validation(format!("invalid time {hour:02}:{minute:02}"))
            })
    }

    /// Parse `HH:MM`.
    pub fn parse(s: &str) -> CutfaceResult<Self> {
        let (h, m) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| CutfaceError::validation(format!("time '{s}' must be HH:MM")))?;
        let hour = h
            .parse()
            .map_err(|_| CutfaceError::validation(format!("bad hour in '{s}'")))?;
        let minute = m
            .parse()
            .map_err(|_| CutfaceError::validation(format!("bad minute in '{s}'")))?;
        Self::new(hour, minute)
    }

    pub fn hour(self) -> u8 {
        self.time.hour() as u8
    }

    pub fn minute(self) -> u8 {
        self.time.minute() as u8
    }
}

/// The two fixed-width labels drawn on the face.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClockText {
    pub hour: String,
    pub minute: String,
}

impl ClockText {
    /// strftime `%H` or `%I` for the hour depending on `clock_24h`, `%M` for the minute.
    pub fn format(time: ClockTime, clock_24h: bool) -> Self {
        let hour = if clock_24h { "%H" } else { "%I" };
        Self {
            hour: time.time.format(hour).to_string(),
            minute: time.time.format("%M").to_string(),
        }
    }
}

/// Supplies the current time once per minute tick.
pub trait ClockSource {
    fn now(&self) -> ClockTime;
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> ClockTime {
        let now = chrono::Local::now().time();
        let time = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        ClockTime { time }
    }
}

/// Always reports the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub ClockTime);

impl ClockSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/clock/source.rs"]
mod tests;
