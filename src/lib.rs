//! Badged QR code renderer.
//! - Encodes a text payload as a QR symbol (version auto-fits upward)
//! - Pads the symbol with a solid border sized relative to the image
//! - Overlays a centered text badge with an optional outline
//! - One-shot pipeline, no state kept between runs

pub mod compose;
pub mod config;
pub mod error;
pub mod graphics;
pub mod qr;

pub use config::{BadgeConfig, QrConfig};
pub use error::Error;

use std::path::Path;

use image::RgbImage;

/// Run the whole pipeline: encode `payload`, add the border, draw the badge.
/// The caller owns the returned buffer and decides where to save it.
pub fn render(payload: &str, qr_cfg: &QrConfig, badge_cfg: &BadgeConfig) -> Result<RgbImage, Error> {
    let qr_img = qr::encode(payload, qr_cfg)?;
    compose::compose(&qr_img, qr_cfg, badge_cfg)
}

/// Render and persist in one call. The format follows the file extension,
/// PNG for the reference output.
pub fn render_to_file(
    payload: &str,
    qr_cfg: &QrConfig,
    badge_cfg: &BadgeConfig,
    path: &Path,
) -> Result<(), Error> {
    let img = render(payload, qr_cfg, badge_cfg)?;
    img.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_run_produces_the_744px_canvas() {
        let img = render("I Love You", &QrConfig::default(), &BadgeConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (744, 744));
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let qr_cfg = QrConfig::default();
        let badge_cfg = BadgeConfig::default();
        let img = render("I Love You", &qr_cfg, &badge_cfg).unwrap();
        let path = std::env::temp_dir().join("qr_badge_roundtrip_test.png");
        render_to_file("I Love You", &qr_cfg, &badge_cfg, &path).unwrap();
        let reloaded = image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).ok();
        assert_eq!(reloaded.as_raw(), img.as_raw());
    }

    #[test]
    fn save_failure_is_a_save_error() {
        let path = std::path::Path::new("no/such/dir/out.png");
        match render_to_file("x", &QrConfig::default(), &BadgeConfig::default(), path) {
            Err(Error::Save(_)) => {}
            other => panic!("expected save error, got {other:?}"),
        }
    }
}
