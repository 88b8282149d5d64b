mod common;

use helipov_rs::image_pipeline::{
    BitmapToWaveformPipeline, BladeProfile, BoundsPolicy, ConversionConfig, ConversionError,
};

use common::{encode_bmp, parse_words, write_bmp};

fn convert(config: ConversionConfig, bmp: &[u8]) -> (ConversionError, bool) {
    let dir = tempfile::tempdir().unwrap();
    let input = write_bmp(dir.path(), "input.bmp", bmp);
    let output = dir.path().join("output.txt");

    let err = BitmapToWaveformPipeline::new(config)
        .convert_file(&input, &output)
        .unwrap_err();
    (err, output.exists())
}

fn convert_ok(config: ConversionConfig, bmp: &[u8]) -> String {
    let dir = tempfile::tempdir().unwrap();
    let input = write_bmp(dir.path(), "input.bmp", bmp);
    let output = dir.path().join("output.txt");

    BitmapToWaveformPipeline::new(config)
        .convert_file(&input, &output)
        .unwrap();
    std::fs::read_to_string(output).unwrap()
}

/// Black only around the pixel the outermost LED reads in slice 0.
fn spot_under_slice_zero(x: u32, y: u32) -> bool {
    (126..=130).contains(&x) && (251..=255).contains(&y)
}

#[test]
fn test_black_bitmap_lights_every_led() {
    let text = convert_ok(ConversionConfig::default(), &encode_bmp(256, 256, 1, |_, _| true));

    assert_eq!(text.lines().count(), 64);
    assert!(text.lines().all(|line| line == "0xFF,".repeat(16)));
    let words = parse_words(&text);
    assert_eq!(words.len(), 256);
    assert!(words.iter().all(|&w| w == 0xFFFF_FFFF));
}

#[test]
fn test_white_bitmap_lights_nothing() {
    let text = convert_ok(ConversionConfig::default(), &encode_bmp(256, 256, 1, |_, _| false));

    let words = parse_words(&text);
    assert_eq!(words.len(), 256);
    assert!(words.iter().all(|&w| w == 0));
    assert!(text.lines().all(|line| line == "0x00,".repeat(16)));
}

#[test]
fn test_single_spot_identity_order() {
    let text = convert_ok(ConversionConfig::default(), &encode_bmp(256, 256, 1, spot_under_slice_zero));

    assert!(text.starts_with("0x80,0x00,0x00,0x00,0x00,"));
    let words = parse_words(&text);
    assert_eq!(words[0], 1 << 31);
    assert!(words[1..].iter().all(|&w| w == 0));
}

#[test]
fn test_single_spot_blade_profiles() {
    let bmp = encode_bmp(256, 256, 1, spot_under_slice_zero);

    let top = ConversionConfig::builder().profile(BladeProfile::Top).build();
    let words = parse_words(&convert_ok(top, &bmp));
    assert_eq!(words[0], 1);

    // slice 0 points the same way on both blades
    let bottom = ConversionConfig::builder().profile(BladeProfile::Bottom).build();
    let words = parse_words(&convert_ok(bottom, &bmp));
    assert_eq!(words[0], 1 << 14);
    assert!(words[1..].iter().all(|&w| w == 0));
}

#[test]
fn test_rotation_moves_spot_opposite_ways_per_blade() {
    let bmp = encode_bmp(256, 256, 1, spot_under_slice_zero);

    // the bottom blade sweeps the other way, so it reaches the spot later
    let bottom = ConversionConfig::builder()
        .profile(BladeProfile::Bottom)
        .rotation_offset_slices(3)
        .build();
    let words = parse_words(&convert_ok(bottom, &bmp));
    assert_eq!(words[3], 1 << 14);
    assert_eq!(words.iter().filter(|&&w| w != 0).count(), 1);

    let top = ConversionConfig::builder()
        .profile(BladeProfile::Top)
        .rotation_offset_slices(3)
        .build();
    let words = parse_words(&convert_ok(top, &bmp));
    assert_eq!(words[253], 1);
    assert_eq!(words.iter().filter(|&&w| w != 0).count(), 1);
}

#[test]
fn test_non_square_bitmap_writes_nothing() {
    let (err, written) = convert(ConversionConfig::default(), &encode_bmp(256, 128, 1, |_, _| true));

    assert!(matches!(err, ConversionError::InvalidDimensions(256, 128)));
    assert!(!written);
}

#[test]
fn test_8bpp_bitmap_writes_nothing() {
    let (err, written) = convert(ConversionConfig::default(), &encode_bmp(64, 64, 8, |_, _| true));

    assert!(matches!(err, ConversionError::UnsupportedBitDepth(8)));
    assert!(!written);
}

#[test]
fn test_8bpp_bitmap_rejected_under_unlit_policy() {
    let config = ConversionConfig::builder()
        .bounds_policy(BoundsPolicy::Unlit)
        .build();
    let (err, written) = convert(config, &encode_bmp(256, 256, 8, |_, _| true));

    assert!(matches!(err, ConversionError::UnsupportedBitDepth(8)));
    assert!(!written);
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = BitmapToWaveformPipeline::new(ConversionConfig::default())
        .convert_file(dir.path().join("missing.bmp"), dir.path().join("out.txt"));

    assert!(matches!(result.unwrap_err(), ConversionError::InputReadError(_)));
}

#[test]
fn test_unwritable_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_bmp(dir.path(), "input.bmp", &encode_bmp(32, 32, 1, |_, _| true));

    let result = BitmapToWaveformPipeline::new(ConversionConfig::default())
        .convert_file(&input, dir.path().join("no_such_dir").join("out.txt"));

    assert!(matches!(result.unwrap_err(), ConversionError::OutputWriteError(_)));
}
