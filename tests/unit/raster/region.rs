use super::*;
use crate::{mask::staircase::generate, raster::framebuffer::DisplayShape};

fn patterned(format: PixelFormat, shape: DisplayShape, size: Size) -> Framebuffer {
    let mut fb = Framebuffer::try_new(size, format, shape).unwrap();
    for y in 0..size.height {
        for x in 0..size.width {
            let color = if (x / 3 + y) % 2 == 0 {
                Color8::WHITE
            } else {
                Color8::from_argb(0xC0 | ((x as u8).wrapping_mul(7) & 0x3F))
            };
            fb.put_pixel(x, y, format.quantize(color));
        }
    }
    fb
}

fn region_rows(fb: &Framebuffer, region: IRect) -> Vec<Option<Color8>> {
    let mut out = Vec::new();
    for y in region.y as u16..region.bottom() as u16 {
        for x in 0..fb.width() {
            out.push(fb.pixel(x, y));
        }
    }
    out
}

#[test]
fn capture_copies_every_visible_pixel() {
    for format in [PixelFormat::IndexedByte, PixelFormat::PackedMonochrome] {
        let src = patterned(format, DisplayShape::Round, Size::new(180, 180));
        let region = IRect::new(0, 0, 180, 100);
        let snap = RegionBuffer::capture(&src, region).unwrap();
        assert_eq!(snap.pixels().height(), 100);
        assert_eq!(snap.pixels().width(), 180);
        for y in 0..100u16 {
            assert_eq!(snap.pixels().row_bounds(y), src.row_bounds(y));
            for x in 0..180u16 {
                assert_eq!(snap.pixels().pixel(x, y), src.pixel(x, y));
            }
        }
    }
}

#[test]
fn composite_into_fresh_buffer_then_capture_is_bit_identical() {
    for format in [PixelFormat::IndexedByte, PixelFormat::PackedMonochrome] {
        let size = Size::new(180, 180);
        let src = patterned(format, DisplayShape::Round, size);
        let region = IRect::new(0, 0, 180, 100);
        let snap = RegionBuffer::capture(&src, region).unwrap();
        let mask = StaircaseMask::new(80, generate(0, 20, 180));

        let mut dest = Framebuffer::try_new(size, format, DisplayShape::Round).unwrap();
        snap.composite(&mut dest, &mask, MaskPolicy::HardEdge).unwrap();
        let again = RegionBuffer::capture(&dest, region).unwrap();
        assert_eq!(again.pixels(), snap.pixels(), "{format:?}");
        assert_eq!(region_rows(&dest, region), region_rows(&src, region));
    }
}

#[test]
fn composite_back_into_the_source_changes_nothing() {
    for format in [PixelFormat::IndexedByte, PixelFormat::PackedMonochrome] {
        let mut live = patterned(format, DisplayShape::Rect, Size::new(144, 168));
        let before = live.bytes().to_vec();
        let region = IRect::new(0, 0, 144, 94);
        let snap = RegionBuffer::capture(&live, region).unwrap();
        let mask = StaircaseMask::new(74, generate(90, 20, 144));

        snap.composite(&mut live, &mask, MaskPolicy::HardEdge).unwrap();
        assert_eq!(live.bytes(), before.as_slice());
    }
}

#[test]
fn hard_edge_leaves_receding_columns_untouched() {
    let size = Size::new(144, 168);
    let src = patterned(PixelFormat::PackedMonochrome, DisplayShape::Rect, size);
    let region = IRect::new(0, 0, 144, 94);
    let snap = RegionBuffer::capture(&src, region).unwrap();

    let mut live =
        Framebuffer::try_new(size, PixelFormat::PackedMonochrome, DisplayShape::Rect).unwrap();
    let mask = StaircaseMask::new(74, generate(150, 20, 144));
    snap.composite(&mut live, &mask, MaskPolicy::HardEdge).unwrap();

    // above the band: full copy
    assert_eq!(live.pixel(143, 10), src.pixel(143, 10));
    // last band row fully receded: nothing copied
    for x in 0..144 {
        assert_eq!(live.pixel(x, 93), Some(Color8::BLACK));
    }
    // first band row keeps everything
    for x in 0..144 {
        assert_eq!(live.pixel(x, 74), src.pixel(x, 74));
    }
    // rows below the region are never written
    let below = region_rows(&live, IRect::new(0, 94, 144, 74));
    assert!(below.iter().all(|c| *c == Some(Color8::BLACK)));
}

#[test]
fn transparent_snapshot_lets_live_content_through() {
    let size = Size::new(180, 180);
    let src = patterned(PixelFormat::IndexedByte, DisplayShape::Round, size);
    let region = IRect::new(0, 0, 180, 100);
    let mut snap = RegionBuffer::capture(&src, region).unwrap();
    let mask = StaircaseMask::new(80, generate(150, 20, 180));
    snap.clear_receding(&mask).unwrap();

    let last = mask.band_row(99).unwrap();
    assert_eq!(last.cut, 0);
    let b = snap.pixels().row_bounds(99);
    for x in b.min_x..=b.max_x {
        assert_eq!(snap.pixels().pixel(x, 99), Some(Color8::CLEAR));
    }

    let mut live =
        Framebuffer::try_new(size, PixelFormat::IndexedByte, DisplayShape::Round).unwrap();
    live.clear(Color8::RED);
    snap.composite(&mut live, &mask, MaskPolicy::Transparent).unwrap();
    assert_eq!(live.pixel(90, 99), Some(Color8::RED));
    assert_eq!(live.pixel(90, 40), src.pixel(90, 40));
}

#[test]
fn clear_receding_needs_transparency() {
    let src = patterned(
        PixelFormat::PackedMonochrome,
        DisplayShape::Rect,
        Size::new(144, 168),
    );
    let mut snap = RegionBuffer::capture(&src, IRect::new(0, 0, 144, 94)).unwrap();
    let mask = StaircaseMask::new(74, generate(100, 20, 144));
    assert!(matches!(
        snap.clear_receding(&mask),
        Err(CutfaceError::Validation(_))
    ));
}

#[test]
fn budget_overflow_is_an_allocation_failure() {
    let src = patterned(PixelFormat::IndexedByte, DisplayShape::Rect, Size::new(144, 168));
    let region = IRect::new(0, 0, 144, 94);
    let err = RegionBuffer::capture_within(&src, region, Some(100)).unwrap_err();
    assert!(err.is_recoverable());
    assert!(RegionBuffer::capture_within(&src, region, Some(144 * 94)).is_ok());
}

#[test]
fn regions_outside_the_buffer_are_rejected() {
    let src = patterned(PixelFormat::IndexedByte, DisplayShape::Rect, Size::new(144, 168));
    assert!(matches!(
        RegionBuffer::capture(&src, IRect::new(0, 100, 144, 100)),
        Err(CutfaceError::OutOfRange(_))
    ));
    assert!(RegionBuffer::capture(&src, IRect::new(0, 0, 144, 0)).is_err());
}

#[test]
fn composite_rejects_mismatched_formats() {
    let src = patterned(PixelFormat::IndexedByte, DisplayShape::Rect, Size::new(144, 168));
    let snap = RegionBuffer::capture(&src, IRect::new(0, 0, 144, 94)).unwrap();
    let mut mono = Framebuffer::try_new(
        Size::new(144, 168),
        PixelFormat::PackedMonochrome,
        DisplayShape::Rect,
    )
    .unwrap();
    let mask = StaircaseMask::new(74, generate(100, 20, 144));
    assert!(snap.composite(&mut mono, &mask, MaskPolicy::HardEdge).is_err());
}
