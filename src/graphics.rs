use std::path::Path;

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

use crate::error::Error;

/// Embedded fallback font, used when no font path is configured or when the
/// computed font size degenerates to zero.
pub static BUILTIN_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

pub fn builtin_font() -> Font<'static> {
    Font::try_from_bytes(BUILTIN_FONT).expect("embedded font parses")
}

/// Load a font file from disk. An unreadable or unparsable file is a fatal
/// configuration error.
pub fn load_font(path: &Path) -> Result<Font<'static>, Error> {
    let bytes = std::fs::read(path).map_err(|e| Error::Font {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Font::try_from_vec(bytes).ok_or_else(|| Error::Font {
        path: path.display().to_string(),
        reason: "not a valid font file".to_string(),
    })
}

/// Ink bounding box of rendered text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Union of the glyph pixel bounding boxes for `text` laid out from the
/// origin, or `None` when nothing is inked (empty or whitespace text).
fn ink_bounds(font: &Font, px: f32, text: &str) -> Option<(i32, i32, i32, i32)> {
    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent.ceil();
    let mut bounds: Option<(i32, i32, i32, i32)> = None;
    for g in font.layout(text, scale, point(0.0, ascent)) {
        if let Some(bb) = g.pixel_bounding_box() {
            bounds = Some(match bounds {
                None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                Some((x0, y0, x1, y1)) => (
                    x0.min(bb.min.x),
                    y0.min(bb.min.y),
                    x1.max(bb.max.x),
                    y1.max(bb.max.y),
                ),
            });
        }
    }
    bounds
}

pub fn measure_text(font: &Font, px: f32, text: &str) -> TextExtent {
    match ink_bounds(font, px, text) {
        Some((x0, y0, x1, y1)) => TextExtent {
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        },
        None => TextExtent::default(),
    }
}

/// Draw `text` with its ink bounding box anchored at `(x, y)`, blending glyph
/// coverage against the pixels already on the canvas.
pub fn draw_text(
    img: &mut RgbImage,
    x: i32,
    y: i32,
    text: &str,
    font: &Font,
    px: f32,
    color: Rgb<u8>,
) {
    let Some((x0, y0, _, _)) = ink_bounds(font, px, text) else {
        return;
    };
    let scale = Scale::uniform(px);
    let ascent = font.v_metrics(scale).ascent.ceil();
    let start = point((x - x0) as f32, (y - y0) as f32 + ascent);

    let (w, h) = img.dimensions();
    for g in font.layout(text, scale, start) {
        if let Some(bb) = g.pixel_bounding_box() {
            g.draw(|gx, gy, v| {
                let px_x = gx as i32 + bb.min.x;
                let px_y = gy as i32 + bb.min.y;
                if px_x < 0 || px_y < 0 || px_x as u32 >= w || px_y as u32 >= h {
                    return;
                }
                let dst = img.get_pixel_mut(px_x as u32, px_y as u32);
                for c in 0..3 {
                    let blended = dst.0[c] as f32 * (1.0 - v) + color.0[c] as f32 * v;
                    dst.0[c] = blended.round() as u8;
                }
            });
        }
    }
}

/// Fill an axis-aligned rectangle, clipped to the canvas.
pub fn fill_rect(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, color: Rgb<u8>) {
    let (iw, ih) = img.dimensions();
    for py in y.max(0)..(y + h as i32).min(ih as i32) {
        for px in x.max(0)..(x + w as i32).min(iw as i32) {
            img.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Stroke a rectangle outline with `width` one-pixel rings drawn inward from
/// the given bounds. Width 0 draws nothing.
pub fn stroke_rect(img: &mut RgbImage, x: i32, y: i32, w: u32, h: u32, width: u32, color: Rgb<u8>) {
    for i in 0..width {
        let (rx, ry) = (x + i as i32, y + i as i32);
        let Some(rw) = w.checked_sub(2 * i) else { break };
        let Some(rh) = h.checked_sub(2 * i) else { break };
        if rw == 0 || rh == 0 {
            break;
        }
        fill_rect(img, rx, ry, rw, 1, color);
        fill_rect(img, rx, ry + rh as i32 - 1, rw, 1, color);
        fill_rect(img, rx, ry, 1, rh, color);
        fill_rect(img, rx + rw as i32 - 1, ry, 1, rh, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BLACK, WHITE};

    #[test]
    fn measures_positive_extent_for_visible_text() {
        let font = builtin_font();
        let e = measure_text(&font, 26.0, "NRKS");
        assert!(e.width > 0 && e.height > 0);
        assert!(e.height <= 26);
    }

    #[test]
    fn whitespace_has_no_ink() {
        let font = builtin_font();
        let e = measure_text(&font, 26.0, "   ");
        assert_eq!((e.width, e.height), (0, 0));
    }

    #[test]
    fn draw_text_anchors_ink_at_origin() {
        let font = builtin_font();
        let mut img = RgbImage::from_pixel(100, 50, WHITE);
        draw_text(&mut img, 10, 10, "N", &font, 30.0, BLACK);
        let e = measure_text(&font, 30.0, "N");
        // No ink outside the stated bounding box, some ink inside it.
        assert!(img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != WHITE)
            .all(|(x, y, _)| x >= 10 && y >= 10 && x < 10 + e.width && y < 10 + e.height));
        assert!(img.pixels().any(|p| *p != WHITE));
    }

    #[test]
    fn fill_rect_clips_to_canvas() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        fill_rect(&mut img, -5, -5, 8, 8, BLACK);
        assert_eq!(*img.get_pixel(0, 0), BLACK);
        assert_eq!(*img.get_pixel(2, 2), BLACK);
        assert_eq!(*img.get_pixel(3, 3), WHITE);
    }

    #[test]
    fn zero_width_stroke_draws_nothing() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        stroke_rect(&mut img, 1, 1, 8, 8, 0, BLACK);
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn stroke_rings_stay_inside_bounds() {
        let mut img = RgbImage::from_pixel(12, 12, WHITE);
        stroke_rect(&mut img, 2, 2, 8, 8, 2, BLACK);
        assert_eq!(*img.get_pixel(2, 2), BLACK);
        assert_eq!(*img.get_pixel(3, 3), BLACK);
        assert_eq!(*img.get_pixel(4, 4), WHITE);
        assert_eq!(*img.get_pixel(1, 1), WHITE);
    }
}
