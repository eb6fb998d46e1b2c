use image::{imageops, RgbImage};

use crate::config::{BadgeConfig, QrConfig};
use crate::error::Error;
use crate::graphics::{self, TextExtent};

/// Font size used when the computed badge font size is not positive.
const FALLBACK_FONT_PX: f32 = 10.0;

fn scaled(len: u32, ratio: f64) -> u32 {
    (len as f64 * ratio).round() as u32
}

/// Pad the QR image with a solid border sized as a fraction of its width.
/// The original ends up centered at offset `(border, border)`.
pub fn add_border(qr_img: &RgbImage, cfg: &QrConfig) -> RgbImage {
    let border = scaled(qr_img.width(), cfg.border_ratio);
    let mut canvas = RgbImage::from_pixel(
        qr_img.width() + 2 * border,
        qr_img.height() + 2 * border,
        cfg.border_color,
    );
    imageops::overlay(&mut canvas, qr_img, border as i64, border as i64);
    canvas
}

/// Badge bounds centered on a canvas of the given dimensions.
pub(crate) fn badge_rect(canvas_w: u32, canvas_h: u32, cfg: &BadgeConfig) -> (i32, i32, u32, u32) {
    let bw = scaled(canvas_w, cfg.width_ratio);
    let bh = scaled(canvas_h, cfg.height_ratio);
    let bx = (canvas_w as i32 - bw as i32) / 2;
    let by = (canvas_h as i32 - bh as i32) / 2;
    (bx, by, bw, bh)
}

pub(crate) fn font_size_px(badge_h: u32, scaling: f64) -> i32 {
    (badge_h as f64 * scaling).round() as i32
}

/// Text anchor inside the badge: centered, then clamped so it sits at least
/// `padding` pixels right of and below the badge corner. The clamp never
/// pushes left/up, so a padding large relative to the badge lets the text
/// overflow the badge's bottom-right edge.
pub(crate) fn text_origin(
    bx: i32,
    by: i32,
    bw: u32,
    bh: u32,
    extent: TextExtent,
    padding: u32,
) -> (i32, i32) {
    let tx = bx + (bw as i32 - extent.width as i32) / 2;
    let ty = by + (bh as i32 - extent.height as i32) / 2;
    (tx.max(bx + padding as i32), ty.max(by + padding as i32))
}

/// Draw the badge onto the bordered canvas: filled rectangle, centered text,
/// optional outline.
pub fn draw_badge(canvas: &mut RgbImage, cfg: &BadgeConfig) -> Result<(), Error> {
    let (cw, ch) = canvas.dimensions();
    let (bx, by, bw, bh) = badge_rect(cw, ch, cfg);

    graphics::fill_rect(canvas, bx, by, bw, bh, cfg.color);

    let size = font_size_px(bh, cfg.font_scaling);
    let (font, px) = if size <= 0 {
        (graphics::builtin_font(), FALLBACK_FONT_PX)
    } else {
        let font = match &cfg.font_path {
            Some(path) => graphics::load_font(path)?,
            None => graphics::builtin_font(),
        };
        (font, size as f32)
    };

    let extent = graphics::measure_text(&font, px, &cfg.content);
    let (tx, ty) = text_origin(bx, by, bw, bh, extent, cfg.padding);
    graphics::draw_text(canvas, tx, ty, &cfg.content, &font, px, cfg.text_color);

    graphics::stroke_rect(canvas, bx, by, bw, bh, cfg.outline_width, cfg.outline_color);
    Ok(())
}

/// Full compositor pass: border, then badge. Consumes the encoder's output
/// and yields the final canvas.
pub fn compose(qr_img: &RgbImage, qr_cfg: &QrConfig, badge_cfg: &BadgeConfig) -> Result<RgbImage, Error> {
    let mut canvas = add_border(qr_img, qr_cfg);
    draw_badge(&mut canvas, badge_cfg)?;
    Ok(canvas)
}
