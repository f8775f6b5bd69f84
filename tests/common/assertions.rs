//! Assertion helpers for tests.

use error_diffusion::{GrayImage, RgbaImage};
use pretty_assertions::assert_eq;

use dither::RenderReport;

/// Assert every gray value is 0 or 255
pub fn assert_binary_gray(image: &GrayImage) {
    let bad: Vec<u8> = image
        .pixels()
        .iter()
        .copied()
        .filter(|&v| v != 0 && v != 255)
        .collect();
    assert!(bad.is_empty(), "Expected binary image, found {:?}", bad);
}

/// Assert every color channel is 0 or 255 and alpha matches the source
pub fn assert_binary_color(image: &RgbaImage, source: &RgbaImage) {
    assert_eq!(
        (image.width(), image.height()),
        (source.width(), source.height())
    );
    for (out, src) in image.pixels().iter().zip(source.pixels()) {
        assert!(
            out[..3].iter().all(|&v| v == 0 || v == 255),
            "Expected binary channels, got {:?}",
            out
        );
        assert_eq!(out[3], src[3], "Alpha must pass through");
    }
}

/// Assert the report lists exactly these filters, in order
pub fn assert_filter_order(report: &RenderReport, expected: &[&str]) {
    let names: Vec<&str> = report.outputs.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, expected);
}
