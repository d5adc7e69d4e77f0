//! Round-trip tests against an independent decoder.
//!
//! The `png` crate knows nothing about how we built the file, so a clean
//! decode here means any standard PNG reader will accept the fixtures.

use png_fixtures::{emit, EmitError, ImageSpec};

/// Decode with the `png` crate, returning (width, height, raw RGB bytes).
fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("decoder rejected the file");

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("failed to read frame");

    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    assert_eq!(info.color_type, png::ColorType::Rgb);

    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

fn assert_solid(pixels: &[u8], color: [u8; 3]) {
    for pixel in pixels.chunks_exact(3) {
        assert_eq!(pixel, color);
    }
}

/// End-to-end scenario: 800x600 red decodes to 480,000 matching pixels.
#[test]
fn roundtrip_800x600_red() {
    let spec = ImageSpec::new(800, 600, 220, 40, 40).unwrap();
    let (w, h, pixels) = decode(&emit(&spec).unwrap());

    assert_eq!((w, h), (800, 600));
    assert_eq!(pixels.len() / 3, 480_000);
    assert_solid(&pixels, [220, 40, 40]);
}

#[test]
fn roundtrip_1x1_boundary() {
    let spec = ImageSpec::new(1, 1, 0, 0, 0).unwrap();
    let (w, h, pixels) = decode(&emit(&spec).unwrap());
    assert_eq!((w, h), (1, 1));
    assert_eq!(pixels, [0, 0, 0]);
}

#[test]
fn roundtrip_full_fixture_set() {
    // The same table the generate_fixtures binary writes.
    let fixtures: &[(u32, u32, [u8; 3])] = &[
        (800, 600, [220, 40, 40]),
        (800, 600, [40, 180, 40]),
        (800, 600, [40, 40, 220]),
        (400, 300, [240, 240, 240]),
        (1920, 1080, [20, 20, 25]),
    ];

    for &(width, height, color) in fixtures {
        let spec = ImageSpec::new(
            width,
            height,
            u32::from(color[0]),
            u32::from(color[1]),
            u32::from(color[2]),
        )
        .unwrap();
        let (w, h, pixels) = decode(&emit(&spec).unwrap());
        assert_eq!((w, h), (width, height), "dimensions for {width}x{height}");
        assert_eq!(pixels.len(), width as usize * height as usize * 3);
        assert_solid(&pixels, color);
    }
}

#[test]
fn roundtrip_odd_dimensions() {
    // Non-round sizes exercise the per-row layout with no padding tricks.
    let spec = ImageSpec::new(13, 7, 99, 1, 200).unwrap();
    let (w, h, pixels) = decode(&emit(&spec).unwrap());
    assert_eq!((w, h), (13, 7));
    assert_solid(&pixels, [99, 1, 200]);
}

#[test]
fn invalid_specs_emit_nothing() {
    assert!(matches!(
        ImageSpec::new(0, 600, 1, 1, 1),
        Err(EmitError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        ImageSpec::new(800, 0, 1, 1, 1),
        Err(EmitError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        ImageSpec::new(800, 600, 1, 1, 300),
        Err(EmitError::InvalidColor { .. })
    ));
}
