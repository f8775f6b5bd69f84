//! Test fixtures and constants.

use std::path::PathBuf;

use error_diffusion::RgbaImage;
use tempfile::TempDir;

/// YAML documents for config loading tests
pub mod configs {
    /// Two shipped filters, monochrome only
    pub const MONO_PAIR: &str = r#"
filters: [floyd-steinberg, atkinson]
export: mono
"#;

    /// Custom kernel selected by name
    pub const CUSTOM_ONLY: &str = r#"
filters: [straight-down, burkes]
multiplier: 1.0
threshold: false
custom_filters:
  - name: straight-down
    rows:
      - [0, 0, 1]
"#;

    /// Misspelled key
    pub const TYPO: &str = "filtres: [atkinson]\n";

    /// Kernel with an even width
    pub const BAD_KERNEL: &str = r#"
filters: [wide]
custom_filters:
  - name: wide
    rows:
      - [0, 0, 0.5, 0.5]
"#;
}

/// Horizontal gray ramp, opaque
pub fn gray_ramp(width: usize, height: usize) -> RgbaImage {
    let pixels = (0..height)
        .flat_map(|_| {
            (0..width).map(move |x| {
                let v = (x * 255 / (width - 1).max(1)) as u8;
                [v, v, v, 255]
            })
        })
        .collect();
    RgbaImage::new(width, height, pixels).unwrap()
}

/// Colorful content with a varying alpha channel
pub fn color_swatch(width: usize, height: usize) -> RgbaImage {
    let pixels = (0..width * height)
        .map(|i| {
            let x = i % width;
            let y = i / width;
            [
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                ((x + y) * 97 % 256) as u8,
                (255 - (i % 200)) as u8,
            ]
        })
        .collect();
    RgbaImage::new(width, height, pixels).unwrap()
}

/// Write `content` to `config.yaml` in a fresh temp dir
pub fn config_file(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
