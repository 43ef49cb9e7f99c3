//! Color scale tests
//!
//! Saturation, bucketing and custom palettes.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatview::color_scale::{palette, CLIP};
use heatview::{ColorScale, LayoutError, Rgb};
use test_case::test_case;

#[test_case(-100.0, Some(0) ; "far below clip")]
#[test_case(-3.0, Some(0) ; "lower bound")]
#[test_case(-2.7, Some(0) ; "first bin")]
#[test_case(-2.6, Some(1) ; "second bin")]
#[test_case(0.0, Some(8) ; "zero is the middle bucket")]
#[test_case(2.9, Some(16) ; "last bin")]
#[test_case(3.0, Some(16) ; "upper bound")]
#[test_case(1e9, Some(16) ; "far above clip")]
#[test_case(f64::NAN, None ; "missing")]
fn test_default_buckets(value: f64, expected: Option<usize>) {
    assert_eq!(ColorScale::default().bucket(value), expected);
}

#[test]
fn test_buckets_are_monotonic() {
    let scale = ColorScale::default();
    let buckets: Vec<usize> = (-400..=400)
        .map(|i| scale.bucket(f64::from(i) / 100.0).unwrap())
        .collect();
    assert!(buckets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(buckets.first(), Some(&0));
    assert_eq!(buckets.last(), Some(&16));
}

#[test]
fn test_every_bucket_is_reachable() {
    let scale = ColorScale::default();
    let mut seen = [false; 17];
    for i in -300..=300 {
        seen[scale.bucket(f64::from(i) / 100.0).unwrap()] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_palette_endpoints() {
    let scale = ColorScale::default();
    assert_eq!(scale.clip(), CLIP);
    assert_eq!(scale.colors().len(), 17);
    assert_eq!(scale.color(-CLIP), Rgb::new(0, 0, 0));
    assert_eq!(scale.color(CLIP), Rgb::new(255, 255, 255));
    assert_eq!(scale.color(f64::NAN), palette::MISSING);
}

#[test]
fn test_missing_color_is_not_in_the_palette() {
    assert!(!palette::DIVERGING_17.contains(&palette::MISSING));
}

#[test_case(-1.0, 0 ; "lower bound")]
#[test_case(-0.5, 0 ; "lower half")]
#[test_case(0.0, 1 ; "zero goes up")]
#[test_case(0.99, 1 ; "upper half")]
#[test_case(5.0, 1 ; "clamped")]
fn test_two_stop_palette(value: f64, expected: usize) {
    let scale = ColorScale::new(
        vec![Rgb::new(0, 0, 255), Rgb::new(255, 0, 0)],
        1.0,
        palette::MISSING,
    )
    .unwrap();
    assert_eq!(scale.bin_size(), 1.0);
    assert_eq!(scale.bucket(value), Some(expected));
}

#[test]
fn test_custom_missing_color() {
    let scale = ColorScale::new(vec![Rgb::new(1, 2, 3)], 2.0, Rgb::new(9, 9, 9)).unwrap();
    assert_eq!(scale.color(f64::NAN), Rgb::new(9, 9, 9));
    assert_eq!(scale.color(100.0), Rgb::new(1, 2, 3));
}

#[test]
fn test_invalid_scales_rejected() {
    assert!(matches!(
        ColorScale::new(vec![], 3.0, palette::MISSING),
        Err(LayoutError::InvalidOptions(_))
    ));
    assert!(ColorScale::new(vec![Rgb::default()], 0.0, palette::MISSING).is_err());
    assert!(ColorScale::new(vec![Rgb::default()], f64::NAN, palette::MISSING).is_err());
}

#[test]
fn test_palette_hex_is_css_ready() {
    for color in palette::DIVERGING_17 {
        let hex = color.to_hex();
        assert_eq!(hex.len(), 7);
        assert!(hex.starts_with('#'));
    }
    assert_eq!(palette::DIVERGING_17[8].to_hex(), "#FF8000");
}
