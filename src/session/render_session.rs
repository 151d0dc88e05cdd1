use std::time::Duration;

use crate::{
    animation::controller::{AnimationController, AnimationState, AnimationTiming},
    animation::ease::EasingCurve,
    clock::source::{ClockText, ClockTime},
    compose::composer::{ComposeReport, ComposerOpts, FrameComposer, FrameInputs},
    compose::style::CutStyle,
    display::surface::DisplaySurface,
    foundation::error::CutfaceResult,
    glyph::painter::GlyphPainter,
    settings::model::Settings,
};

/// Haptic feedback the host should play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HapticPulse {
    Long,
}

/// Knobs fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionOpts {
    pub font_size: u16,
    pub timing: AnimationTiming,
    pub composer: ComposerOpts,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            font_size: 100,
            timing: AnimationTiming::default(),
            composer: ComposerOpts::default(),
        }
    }
}

/// Everything a loaded face owns: the live surface, the glyph painter, current settings and
/// time text, and the intro animation while it runs.
///
/// Host callbacks (`on_tick`, `on_animation_frame`, `apply_settings`) only update state and
/// mark the face dirty; pixels change in [`redraw`](Self::redraw).
#[derive(Debug)]
pub struct RenderSession<S, P> {
    composer: FrameComposer,
    surface: S,
    painter: P,
    settings: Settings,
    time: ClockTime,
    text: ClockText,
    controller: Option<AnimationController>,
    percent: i16,
    font_size: u16,
    dirty: bool,
}

impl<S: DisplaySurface, P: GlyphPainter> RenderSession<S, P> {
    /// Window load. Starts the intro animation only when the settings enable it.
    #[tracing::instrument(skip_all, fields(animation = settings.animation))]
    pub fn load(
        surface: S,
        painter: P,
        style: CutStyle,
        settings: Settings,
        time: ClockTime,
        opts: SessionOpts,
    ) -> CutfaceResult<Self> {
        settings.validate()?;
        let composer = FrameComposer::with_opts(style, opts.composer)?;
        let controller = settings.animation.then(|| {
            let mut c = AnimationController::new(style.easing, opts.timing);
            c.start();
            c
        });
        let percent = controller
            .as_ref()
            .map_or(EasingCurve::FINAL_PERCENT, |c| c.state().percent);
        tracing::debug!(percent, "session loaded");

        Ok(Self {
            composer,
            surface,
            painter,
            text: ClockText::format(time, settings.clock_24h),
            settings,
            time,
            controller,
            percent,
            font_size: opts.font_size,
            dirty: true,
        })
    }

    /// Minute tick.
    pub fn on_tick(&mut self, time: ClockTime) {
        self.time = time;
        self.text = ClockText::format(time, self.settings.clock_24h);
        self.dirty = true;
    }

    /// Animation timer callback with the time elapsed since load. The controller is dropped
    /// once it reports done; later calls return the settled state.
    pub fn on_animation_frame(&mut self, elapsed: Duration) -> AnimationState {
        let Some(controller) = self.controller.as_mut() else {
            return AnimationState::SETTLED;
        };
        let state = controller.advance(elapsed);
        if state.percent != self.percent {
            self.percent = state.percent;
            self.dirty = true;
        }
        if controller.is_done() {
            self.controller = None;
            self.percent = EasingCurve::FINAL_PERCENT;
            self.dirty = true;
        }
        state
    }

    /// Replace the settings snapshot. Does not restart or cancel a running animation.
    pub fn apply_settings(&mut self, settings: Settings) -> CutfaceResult<()> {
        settings.validate()?;
        self.text = ClockText::format(self.time, settings.clock_24h);
        self.settings = settings;
        self.dirty = true;
        Ok(())
    }

    /// Phone connection changed. Returns the pulse to play, if any.
    pub fn on_connection_change(&self, connected: bool) -> Option<HapticPulse> {
        (!connected && self.settings.vibrate_on_disconnect).then_some(HapticPulse::Long)
    }

    /// Compose a full frame at the current percent.
    pub fn redraw(&mut self) -> CutfaceResult<ComposeReport> {
        let report = self.composer.compose(
            &mut self.surface,
            &mut self.painter,
            &FrameInputs {
                settings: &self.settings,
                text: &self.text,
                percent: self.percent,
                font_size: self.font_size,
            },
        )?;
        self.dirty = false;
        Ok(report)
    }

    /// Redraw only when something changed since the last frame.
    pub fn redraw_if_dirty(&mut self) -> CutfaceResult<Option<ComposeReport>> {
        if !self.dirty {
            return Ok(None);
        }
        self.redraw().map(Some)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn percent(&self) -> i16 {
        self.percent
    }

    pub fn has_controller(&self) -> bool {
        self.controller.is_some()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn text(&self) -> &ClockText {
        &self.text
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Window unload. Drops the animation controller, then hands back the painter and the
    /// surface so the caller decides their fate.
    #[tracing::instrument(skip_all)]
    pub fn unload(self) -> (S, P) {
        let Self {
            surface,
            painter,
            controller,
            ..
        } = self;
        drop(controller);
        tracing::debug!("session unloaded");
        (surface, painter)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
