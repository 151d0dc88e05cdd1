use crate::{
    clock::source::ClockText,
    compose::style::CutStyle,
    display::surface::DisplaySurface,
    foundation::core::{Color8, IRect, Point, Size},
    foundation::error::CutfaceResult,
    glyph::painter::{GlyphPainter, GlyphRequest},
    mask::staircase::{MaskPolicy, StaircaseMask, generate_with},
    raster::region::RegionBuffer,
    settings::model::Settings,
};

/// Per-frame inputs for [`FrameComposer::compose`].
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs<'a> {
    pub settings: &'a Settings,
    pub text: &'a ClockText,
    /// Eased animation percent; 100 is the settled layout.
    pub percent: i16,
    pub font_size: u16,
}

/// What a compose pass actually did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeReport {
    pub percent: i16,
    /// Snapshot rows, starting at the top of the display.
    pub region: IRect,
    /// `false` when the snapshot could not be taken and the minute was drawn straight over
    /// the hour layer.
    pub wiped: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposerOpts {
    /// Upper bound on snapshot bytes. `None` means unbounded.
    pub snapshot_budget: Option<usize>,
}

/// Draws one full frame of the diagonal-cut face into a live display.
///
/// The pass paints the hour layer, snapshots the top region, repaints the minute layer
/// underneath, and composites the snapshot back through the staircase mask so the upper half
/// keeps the hour glyph and the band blends into the minute glyph along a diagonal. A straight
/// stroke then covers the stair edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameComposer {
    style: CutStyle,
    opts: ComposerOpts,
}

impl FrameComposer {
    pub fn new(style: CutStyle) -> CutfaceResult<Self> {
        Self::with_opts(style, ComposerOpts::default())
    }

    pub fn with_opts(style: CutStyle, opts: ComposerOpts) -> CutfaceResult<Self> {
        style.validate()?;
        Ok(Self { style, opts })
    }

    pub fn style(&self) -> &CutStyle {
        &self.style
    }

    pub fn opts(&self) -> ComposerOpts {
        self.opts
    }

    /// Layout area: the full width, shortened by half of whatever the system overlay covers.
    pub fn layout_size(surface: &dyn DisplaySurface) -> Size {
        let full = surface.bounds();
        let unobstructed = surface.unobstructed_bounds();
        let offset = full.height.saturating_sub(unobstructed.height) / 2;
        Size::new(full.width, full.height - offset)
    }

    #[tracing::instrument(skip_all, fields(percent = frame.percent))]
    pub fn compose(
        &self,
        surface: &mut dyn DisplaySurface,
        painter: &mut dyn GlyphPainter,
        frame: &FrameInputs<'_>,
    ) -> CutfaceResult<ComposeReport> {
        let settings = frame.settings;
        let full = IRect::from_size(surface.bounds());
        let layout = Self::layout_size(surface);
        let (hour_at, minute_at) = self.style.motion.anchors(layout, frame.percent);

        surface.fill_rect(full, settings.background);
        self.paint_label(
            surface,
            painter,
            Label {
                text: &frame.text.hour,
                anchor: hour_at,
                size: frame.font_size,
                fill: settings.hour_fill,
                outline: (self.style.outline.hour && settings.draw_hour_outline)
                    .then_some(settings.hour_outline),
            },
        );

        let band = self.style.band_height;
        let region_height = self.style.region_height(layout.height);
        let region = IRect::new(0, 0, layout.width, region_height);
        let mask = StaircaseMask::new(
            region_height.saturating_sub(band),
            generate_with(
                i32::from(frame.percent),
                band,
                layout.width,
                self.style.sweep,
            ),
        );
        let policy = MaskPolicy::for_format(surface.format());

        let snapshot = {
            let live = surface.capture_frame_buffer()?;
            match RegionBuffer::capture_within(&live, region, self.opts.snapshot_budget) {
                Ok(mut snapshot) => {
                    if policy == MaskPolicy::Transparent {
                        snapshot.clear_receding(&mask)?;
                    }
                    Some(snapshot)
                }
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(error = %err, "snapshot unavailable; drawing without wipe");
                    None
                }
                Err(err) => return Err(err),
            }
        };

        if snapshot.is_some() {
            surface.fill_rect(full, settings.background);
        }
        self.paint_label(
            surface,
            painter,
            Label {
                text: &frame.text.minute,
                anchor: minute_at,
                size: frame.font_size,
                fill: settings.minute_fill,
                outline: (self.style.outline.minute && settings.draw_minute_outline)
                    .then_some(settings.minute_outline),
            },
        );

        let wiped = match snapshot {
            Some(snapshot) => {
                let mut live = surface.capture_frame_buffer()?;
                snapshot.composite(&mut live, &mask, policy)?;
                true
            }
            None => false,
        };

        if !mask.is_collapsed() {
            let (from, to) = mask.envelope();
            surface.draw_line(from, to, settings.line, self.style.line_width);
        }

        tracing::debug!(?region, wiped, "frame composed");
        Ok(ComposeReport {
            percent: frame.percent,
            region,
            wiped,
        })
    }

    fn paint_label(
        &self,
        surface: &mut dyn DisplaySurface,
        painter: &mut dyn GlyphPainter,
        label: Label<'_>,
    ) {
        let mut request = GlyphRequest {
            text: label.text,
            anchor: label.anchor,
            size: label.size,
            color: label.fill,
            outline: false,
        };
        painter.paint(surface, &request);
        if let Some(color) = label.outline {
            request.color = color;
            request.outline = true;
            painter.paint(surface, &request);
        }
    }
}

struct Label<'a> {
    text: &'a str,
    anchor: Point,
    size: u16,
    fill: Color8,
    outline: Option<Color8>,
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composer.rs"]
mod tests;
