use super::*;

#[test]
fn channel_accessors_unpack_argb2222() {
    let c = Color8::from_argb(0b10_01_10_11);
    assert_eq!(c.alpha(), 2);
    assert_eq!(c.red(), 1);
    assert_eq!(c.green(), 2);
    assert_eq!(c.blue(), 3);
}

#[test]
fn from_rgb8_keeps_top_two_bits() {
    assert_eq!(Color8::from_rgb8(0, 0, 0), Color8::BLACK);
    assert_eq!(Color8::from_rgb8(255, 255, 255), Color8::WHITE);
    assert_eq!(Color8::from_rgb8(255, 0, 0), Color8::RED);
    assert_eq!(Color8::from_rgb8(0x7F, 0, 0).red(), 1);
}

#[test]
fn hex_parses_common_spellings() {
    assert_eq!(Color8::parse_hex("#FFFFFF").unwrap(), Color8::WHITE);
    assert_eq!(Color8::parse_hex("0x000000").unwrap(), Color8::BLACK);
    assert_eq!(Color8::parse_hex("ff0000").unwrap(), Color8::RED);
    assert_eq!(Color8::parse_hex("clear").unwrap(), Color8::CLEAR);
    assert!(Color8::parse_hex("#FFF").is_err());
    assert!(Color8::parse_hex("#GGGGGG").is_err());
}

#[test]
fn hex_round_trips_through_serde() {
    let json = serde_json::to_string(&Color8::RED).unwrap();
    assert_eq!(json, "\"#FF0000\"");
    let back: Color8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Color8::RED);
}

#[test]
fn over_respects_alpha_extremes() {
    let dst = Color8::from_rgb8(0, 0xFF, 0);
    assert_eq!(Color8::CLEAR.over(dst), dst);
    assert_eq!(Color8::RED.over(dst), Color8::RED);
}

#[test]
fn over_partial_alpha_mixes_channels() {
    // alpha 1 of 3: red moves a third of the way towards the source
    let src = Color8::from_argb(0b01_11_00_00);
    let out = src.over(Color8::BLACK);
    assert_eq!(out.alpha(), 3);
    assert_eq!(out.red(), 1);
    assert_eq!(out.green(), 0);
}

#[test]
fn rect_intersection() {
    let a = IRect::new(0, 0, 10, 10);
    let b = IRect::new(5, -3, 10, 5);
    assert_eq!(a.intersect(b), Some(IRect::new(5, 0, 5, 2)));
    assert_eq!(a.intersect(IRect::new(10, 0, 4, 4)), None);
}
