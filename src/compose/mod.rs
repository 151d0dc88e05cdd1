//! The diagonal-cut frame pass and the style presets that parameterize it.

pub(crate) mod composer;
pub(crate) mod style;
