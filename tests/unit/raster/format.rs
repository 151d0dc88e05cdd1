use super::*;

fn row_bytes(format: PixelFormat, width: u16, fill: u8) -> Vec<u8> {
    vec![fill; format.row_stride(width)]
}

#[test]
fn strides_match_native_layouts() {
    assert_eq!(PixelFormat::PackedMonochrome.row_stride(144), 20);
    assert_eq!(PixelFormat::PackedMonochrome.row_stride(32), 4);
    assert_eq!(PixelFormat::PackedMonochrome.row_stride(33), 8);
    assert_eq!(PixelFormat::IndexedByte.row_stride(180), 180);
}

#[test]
fn mono_round_trip_is_bit_exact_for_every_column() {
    let width = 144u16;
    for fill in [0x00u8, 0xFF, 0xA5] {
        let mut data = row_bytes(PixelFormat::PackedMonochrome, width, fill);
        let mut row = RowViewMut {
            data: &mut data,
            min_x: 0,
            max_x: width - 1,
        };
        for x in 0..width {
            for color in [Color8::BLACK, Color8::WHITE] {
                PackedMonoAdapter::set_pixel(&mut row, x, color);
                assert_eq!(PackedMonoAdapter::get_pixel(&row.as_view(), x), color);
            }
        }
    }
}

#[test]
fn indexed_round_trip_is_bit_exact_for_every_color() {
    let width = 180u16;
    let mut data = row_bytes(PixelFormat::IndexedByte, width, 0);
    let mut row = RowViewMut {
        data: &mut data,
        min_x: 0,
        max_x: width - 1,
    };
    for x in 0..width {
        for argb in 0..=u8::MAX {
            let color = Color8::from_argb(argb);
            IndexedByteAdapter::set_pixel(&mut row, x, color);
            assert_eq!(IndexedByteAdapter::get_pixel(&row.as_view(), x), color);
        }
    }
}

#[test]
fn mono_set_only_touches_its_own_bit() {
    let mut data = vec![0u8; 4];
    let mut row = RowViewMut {
        data: &mut data,
        min_x: 0,
        max_x: 31,
    };
    PackedMonoAdapter::set_pixel(&mut row, 9, Color8::WHITE);
    assert_eq!(row.data[..], [0x00, 0x02, 0x00, 0x00]);
    PackedMonoAdapter::set_pixel(&mut row, 0, Color8::WHITE);
    PackedMonoAdapter::set_pixel(&mut row, 9, Color8::BLACK);
    assert_eq!(row.data[..], [0x01, 0x00, 0x00, 0x00]);
}

#[test]
fn mono_treats_non_white_as_black() {
    let mut data = vec![0xFFu8; 4];
    let mut row = RowViewMut {
        data: &mut data,
        min_x: 0,
        max_x: 31,
    };
    PackedMonoAdapter::set_pixel(&mut row, 3, Color8::RED);
    assert_eq!(PackedMonoAdapter::get_pixel(&row.as_view(), 3), Color8::BLACK);
}

#[test]
fn dynamic_accessors_match_adapters() {
    for format in [PixelFormat::PackedMonochrome, PixelFormat::IndexedByte] {
        let mut data = row_bytes(format, 64, 0);
        let mut row = RowViewMut {
            data: &mut data,
            min_x: 0,
            max_x: 63,
        };
        format.set_pixel(&mut row, 17, Color8::WHITE);
        assert_eq!(format.get_pixel(&row.as_view(), 17), Color8::WHITE);
    }
}

#[test]
fn representable_colors_per_format() {
    assert!(PixelFormat::PackedMonochrome.is_representable(Color8::BLACK));
    assert!(!PixelFormat::PackedMonochrome.is_representable(Color8::CLEAR));
    assert!(PixelFormat::IndexedByte.is_representable(Color8::CLEAR));
    assert_eq!(
        PixelFormat::PackedMonochrome.quantize(Color8::RED),
        Color8::BLACK
    );
    assert!(PixelFormat::IndexedByte.supports_transparency());
    assert!(!PixelFormat::PackedMonochrome.supports_transparency());
}
