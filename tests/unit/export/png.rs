use super::*;
use crate::{
    foundation::core::{Color8, Size},
    raster::{format::PixelFormat, framebuffer::DisplayShape},
};

#[test]
fn rgba_expansion_maps_channels_and_off_panel_pixels() {
    let mut fb =
        Framebuffer::try_new(Size::new(20, 20), PixelFormat::IndexedByte, DisplayShape::Round)
            .unwrap();
    fb.clear(Color8::RED);
    let img = to_rgba_image(&fb);
    assert_eq!(img.dimensions(), (20, 20));
    assert_eq!(img.get_pixel(10, 10).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn monochrome_expands_to_black_and_white() {
    let mut fb =
        Framebuffer::try_new(Size::new(9, 2), PixelFormat::PackedMonochrome, DisplayShape::Rect)
            .unwrap();
    fb.clear(Color8::BLACK);
    fb.put_pixel(8, 1, Color8::WHITE);
    let img = to_rgba_image(&fb);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(8, 1).0, [255, 255, 255, 255]);
}

#[test]
fn write_png_round_trips_through_the_decoder() {
    let mut fb =
        Framebuffer::try_new(Size::new(6, 4), PixelFormat::IndexedByte, DisplayShape::Rect)
            .unwrap();
    fb.clear(Color8::WHITE);
    let path = std::path::PathBuf::from("target")
        .join("unit_export")
        .join("white.png");
    write_png(&fb, &path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!(decoded, to_rgba_image(&fb));
}
