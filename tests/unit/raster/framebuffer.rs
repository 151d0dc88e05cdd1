use super::*;

#[test]
fn rect_shape_spans_full_width() {
    let bounds = DisplayShape::Rect.row_bounds(Size::new(144, 168));
    assert_eq!(bounds.len(), 168);
    assert!(bounds.iter().all(|b| b.min_x == 0 && b.max_x == 143));
}

#[test]
fn round_shape_narrows_towards_the_poles() {
    let size = Size::new(180, 180);
    let bounds = DisplayShape::Round.row_bounds(size);
    let top = bounds[0];
    let middle = bounds[90];
    assert!(top.min_x > 70 && top.max_x < 110);
    assert_eq!(middle, RowBounds { min_x: 0, max_x: 179 });
    assert!(bounds.iter().all(|b| b.min_x <= b.max_x && b.max_x < 180));
    // symmetric about the vertical axis
    for b in &bounds {
        assert_eq!(b.min_x, 179 - b.max_x);
    }
}

#[test]
fn try_new_rejects_bad_geometry() {
    assert!(
        Framebuffer::try_new(Size::new(0, 10), PixelFormat::IndexedByte, DisplayShape::Rect)
            .is_err()
    );
    let bad = vec![RowBounds { min_x: 5, max_x: 2 }; 4];
    assert!(matches!(
        Framebuffer::with_bounds(Size::new(8, 4), PixelFormat::IndexedByte, bad),
        Err(CutfaceError::OutOfRange(_))
    ));
}

#[test]
fn fill_rect_clips_to_buffer_and_row_bounds() {
    let mut fb =
        Framebuffer::try_new(Size::new(180, 180), PixelFormat::IndexedByte, DisplayShape::Round)
            .unwrap();
    fb.fill_rect(IRect::new(-20, -20, 400, 400), Color8::RED);

    assert_eq!(fb.pixel(90, 0), Some(Color8::RED));
    // outside the circle on the top row: unreadable and untouched in storage
    assert_eq!(fb.pixel(0, 0), None);
    assert_eq!(fb.bytes()[0], 0);
}

#[test]
fn mono_clear_and_put_pixel() {
    let mut fb = Framebuffer::try_new(
        Size::new(144, 168),
        PixelFormat::PackedMonochrome,
        DisplayShape::Rect,
    )
    .unwrap();
    assert_eq!(fb.stride(), 20);
    fb.clear(Color8::WHITE);
    assert_eq!(fb.pixel(143, 167), Some(Color8::WHITE));
    fb.put_pixel(10, 10, Color8::BLACK);
    assert_eq!(fb.pixel(10, 10), Some(Color8::BLACK));
    assert_eq!(fb.pixel(11, 10), Some(Color8::WHITE));
    // out of range writes are ignored
    fb.put_pixel(500, 10, Color8::BLACK);
    assert_eq!(fb.pixel(500, 10), None);
}
