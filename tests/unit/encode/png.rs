use super::*;

fn frame(width: u32, height: u32, data: Vec<u8>, premultiplied: bool) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data,
        premultiplied,
    }
}

#[test]
fn png_round_trips_dimensions_and_alpha() {
    let data = vec![
        255, 255, 255, 255, //
        0, 0, 0, 0, //
        128, 128, 128, 128, //
        0, 0, 0, 0,
    ];
    let bytes = encode_png(&frame(2, 2, data, true)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 0, 0]);
    assert_eq!(decoded.get_pixel(0, 1).0, [255, 255, 255, 128]);
}

#[test]
fn straight_input_is_stored_as_is() {
    let bytes = encode_png(&frame(1, 1, vec![10, 20, 30, 40], false)).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30, 40]);
}

#[test]
fn unpremultiply_handles_extremes() {
    let mut px = vec![0, 0, 0, 0, 7, 9, 11, 0, 1, 1, 1, 1, 200, 100, 0, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0, 0, 0, 0, 0, 255, 255, 255, 1, 200, 100, 0, 255]);
}

#[test]
fn length_mismatch_is_an_encode_error() {
    let err = encode_png(&frame(2, 2, vec![0; 3], true)).unwrap_err();
    assert!(err.to_string().contains("encode error:"));
}

#[test]
fn encoding_is_deterministic() {
    let data: Vec<u8> = (0..16u32 * 16 * 4).map(|i| (i * 7 % 256) as u8).collect();
    let f = frame(16, 16, data, false);
    assert_eq!(encode_png(&f).unwrap(), encode_png(&f).unwrap());
}
