use std::path::PathBuf;

use image::Rgb;

// Reference defaults (one run with these reproduces qr_code_optimized.png)
pub const DEFAULT_VERSION: i16 = 5;
pub const DEFAULT_BOX_SIZE: u32 = 18;
pub const DEFAULT_BORDER_RATIO: f64 = 0.03;

pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const GREEN: Rgb<u8> = Rgb([0, 128, 0]);

/// QR layer configuration: version tier, module scaling and colors.
/// Immutable, supplied once at startup.
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Minimum QR version (1..=40). Larger payloads bump the version up.
    pub version: i16,
    /// Pixel side length of one QR module.
    pub box_size: u32,
    /// Border thickness as a fraction of the QR image side.
    pub border_ratio: f64,
    pub fill_color: Rgb<u8>,
    pub bg_color: Rgb<u8>,
    pub border_color: Rgb<u8>,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION,
            box_size: DEFAULT_BOX_SIZE,
            border_ratio: DEFAULT_BORDER_RATIO,
            fill_color: BLACK,
            bg_color: WHITE,
            border_color: GREEN,
        }
    }
}

/// Badge layer configuration: geometry ratios, text and colors.
#[derive(Debug, Clone)]
pub struct BadgeConfig {
    /// Badge width as a fraction of the bordered canvas width.
    pub width_ratio: f64,
    /// Badge height as a fraction of the bordered canvas height.
    pub height_ratio: f64,
    pub color: Rgb<u8>,
    pub content: String,
    pub text_color: Rgb<u8>,
    /// Font file to render the badge text with. `None` uses the embedded font.
    pub font_path: Option<PathBuf>,
    /// Font size as a fraction of the badge height.
    pub font_scaling: f64,
    /// Minimum inset of the text from the badge's top-left corner.
    /// Only pushes the text right/down, never left/up; see `compose`.
    pub padding: u32,
    pub outline_color: Rgb<u8>,
    /// Outline stroke width in pixels; 0 draws no outline.
    pub outline_width: u32,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            width_ratio: 0.15,
            height_ratio: 0.05,
            color: WHITE,
            content: "NRKS".to_string(),
            text_color: BLACK,
            font_path: None,
            font_scaling: 0.7,
            padding: 5,
            outline_color: BLACK,
            outline_width: 0,
        }
    }
}
