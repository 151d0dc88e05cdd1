//! cutface renders a clock face whose hour and minute digits are split by an animated diagonal
//! cut.
//!
//! The core is a pixel-format-agnostic compositing engine over small fixed-resolution
//! framebuffers:
//!
//! - Get/set single pixels in packed 1-bit monochrome or one-byte ARGB2222 ([`PixelFormat`])
//! - Snapshot a strip of the live buffer into a [`RegionBuffer`]
//! - Generate a [`StaircaseMask`] for the current animation percent
//! - Recombine snapshot and fresh content along the staircase ([`FrameComposer`])
//!
//! A [`RenderSession`] owns a display, a glyph painter, the settings and the intro animation
//! for the lifetime of a loaded face.
#![forbid(unsafe_code)]

mod animation;
mod clock;
mod compose;
mod display;
mod export;
mod foundation;
mod glyph;
mod mask;
mod raster;
mod session;
mod settings;

pub use crate::foundation::core::{Color8, IRect, Line, Point, Size};
pub use crate::foundation::error::{CutfaceError, CutfaceResult};

pub use crate::animation::controller::{
    AnimationController, AnimationPhase, AnimationState, AnimationTiming,
};
pub use crate::animation::ease::{EasingCurve, NORMALIZED_MAX};
pub use crate::clock::source::{ClockSource, ClockText, ClockTime, FixedClock, SystemClock};
pub use crate::compose::composer::{ComposeReport, ComposerOpts, FrameComposer, FrameInputs};
pub use crate::compose::style::{CutStyle, GlyphMotion, OutlineToggles};
pub use crate::display::platform::Platform;
pub use crate::display::surface::{CapturedFrame, DisplaySurface, SoftwareDisplay};
pub use crate::export::png::{to_rgba_image, write_png};
pub use crate::glyph::block::BlockGlyphPainter;
pub use crate::glyph::painter::{GlyphPainter, GlyphRequest};
pub use crate::mask::staircase::{
    MAX_PROGRESS, MaskPolicy, MaskRow, RowMaskSequence, StaircaseMask, SweepDirection, generate,
    generate_with,
};
pub use crate::raster::format::{
    IndexedByteAdapter, PackedMonoAdapter, PixelAdapter, PixelFormat, RowView, RowViewMut,
};
pub use crate::raster::framebuffer::{DisplayShape, Framebuffer, RowBounds};
pub use crate::raster::region::RegionBuffer;
pub use crate::session::render_session::{HapticPulse, RenderSession, SessionOpts};
pub use crate::settings::model::Settings;
