use super::*;

#[test]
fn capture_is_released_when_the_guard_drops() {
    let mut display = SoftwareDisplay::for_platform(Platform::Basalt).unwrap();
    {
        let mut frame = display.capture_frame_buffer().unwrap();
        frame.put_pixel(3, 4, Color8::RED);
    }
    assert!(!display.is_captured());
    assert_eq!(display.capture_count(), 1);
    assert_eq!(display.framebuffer().pixel(3, 4), Some(Color8::RED));

    let frame = display.capture_frame_buffer().unwrap();
    frame.release();
    assert!(!display.is_captured());
    assert_eq!(display.capture_count(), 2);
}

#[test]
fn leaked_capture_blocks_the_next_one() {
    let mut display = SoftwareDisplay::for_platform(Platform::Aplite).unwrap();
    let frame = display.capture_frame_buffer().unwrap();
    std::mem::forget(frame);
    assert!(display.is_captured());
    assert!(matches!(
        display.capture_frame_buffer(),
        Err(CutfaceError::Surface(_))
    ));
}

#[test]
fn drawing_quantizes_to_the_native_format() {
    let mut display = SoftwareDisplay::for_platform(Platform::Diorite).unwrap();
    display.fill_rect(IRect::new(0, 0, 10, 10), Color8::RED);
    assert_eq!(display.framebuffer().pixel(5, 5), Some(Color8::BLACK));
    display.fill_rect(IRect::new(0, 0, 10, 10), Color8::WHITE);
    assert_eq!(display.framebuffer().pixel(5, 5), Some(Color8::WHITE));
}

#[test]
fn obstruction_shrinks_unobstructed_bounds() {
    let mut display = SoftwareDisplay::for_platform(Platform::Basalt).unwrap();
    assert_eq!(display.unobstructed_bounds(), Size::new(144, 168));
    display.set_obstruction(51);
    assert_eq!(display.unobstructed_bounds(), Size::new(144, 117));
    assert_eq!(display.bounds(), Size::new(144, 168));
    display.set_obstruction(1000);
    assert_eq!(display.unobstructed_bounds().height, 0);
}

#[test]
fn platform_profiles() {
    let chalk = SoftwareDisplay::for_platform(Platform::Chalk).unwrap();
    assert_eq!(chalk.format(), PixelFormat::IndexedByte);
    assert_ne!(chalk.framebuffer().row_bounds(0).min_x, 0);
    assert_eq!(Platform::Emery.font_size(), 138);
    assert_eq!(Platform::Aplite.format(), PixelFormat::PackedMonochrome);
    assert_eq!(Platform::Chalk.to_string(), "chalk");
}
