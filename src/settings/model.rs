use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::Color8,
    foundation::error::{CutfaceError, CutfaceResult},
};

/// User-facing face settings, delivered as a read-only snapshot.
///
/// Settings are serialized as JSON. Every key is optional; missing keys take the defaults
/// below. Colors are `#RRGGBB` strings quantized to the display's 2-bit channels.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub background: Color8,
    pub hour_fill: Color8,
    pub hour_outline: Color8,
    pub minute_fill: Color8,
    pub minute_outline: Color8,
    /// Color of the diagonal boundary stroke.
    pub line: Color8,
    pub draw_hour_outline: bool,
    pub draw_minute_outline: bool,
    /// Play the intro animation when the face loads.
    pub animation: bool,
    /// Vibrate when the phone connection drops. Not used for rendering.
    pub vibrate_on_disconnect: bool,
    /// Format hours as 00-23 instead of 01-12.
    pub clock_24h: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: Color8::BLACK,
            hour_fill: Color8::WHITE,
            hour_outline: Color8::BLACK,
            minute_fill: Color8::WHITE,
            minute_outline: Color8::BLACK,
            line: Color8::WHITE,
            draw_hour_outline: true,
            draw_minute_outline: true,
            animation: true,
            vibrate_on_disconnect: false,
            clock_24h: true,
        }
    }
}

impl Settings {
    pub fn from_json_str(json: &str) -> CutfaceResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| CutfaceError::settings(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> CutfaceResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> CutfaceResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CutfaceError::settings(format!("serialize settings: {e}")))
    }

    /// Reject settings that would draw invisible faces.
    pub fn validate(&self) -> CutfaceResult<()> {
        let opaque = [
            ("background", self.background),
            ("hour_fill", self.hour_fill),
            ("minute_fill", self.minute_fill),
        ];
        for (name, color) in opaque {
            if color.is_clear() {
                return Err(CutfaceError::settings(format!(
                    "{name} must be an opaque color"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/settings/model.rs"]
mod tests;
