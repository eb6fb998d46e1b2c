use image::RgbImage;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::config::QrConfig;
use crate::error::Error;

/// Quiet-zone width in modules around the symbol.
const QUIET_MODULES: u32 = 1;

const MAX_VERSION: i16 = 40;

/// Encode `payload` at the configured version, bumping the version up until
/// the data fits. Never truncates; exhausting version 40 is an error.
fn fit_code(payload: &str, min_version: i16) -> Result<QrCode, Error> {
    for version in min_version..=MAX_VERSION {
        match QrCode::with_version(payload, Version::Normal(version), EcLevel::M) {
            Ok(code) => return Ok(code),
            Err(qrcode::types::QrError::DataTooLong) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Err(Error::Encode(qrcode::types::QrError::DataTooLong))
}

/// Render `payload` as an RGB image: one filled box per dark module, a
/// one-module quiet zone, colors from `cfg`.
///
/// Side length is `(17 + 4*version + 2) * box_size` for whichever version the
/// payload ends up on.
pub fn encode(payload: &str, cfg: &QrConfig) -> Result<RgbImage, Error> {
    let code = fit_code(payload, cfg.version)?;

    let modules = code.width() as u32;
    let side = (modules + 2 * QUIET_MODULES) * cfg.box_size;
    let mut img = RgbImage::from_pixel(side, side, cfg.bg_color);

    for (i, color) in code.to_colors().iter().enumerate() {
        if *color != Color::Dark {
            continue;
        }
        let mx = (i as u32 % modules + QUIET_MODULES) * cfg.box_size;
        let my = (i as u32 / modules + QUIET_MODULES) * cfg.box_size;
        for dy in 0..cfg.box_size {
            for dx in 0..cfg.box_size {
                img.put_pixel(mx + dx, my + dy, cfg.fill_color);
            }
        }
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BLACK, WHITE};

    #[test]
    fn reference_scenario_side_length() {
        // Version 5 = 37 modules, plus 1 quiet module each side, 18 px boxes.
        let img = encode("I Love You", &QrConfig::default()).unwrap();
        assert_eq!(img.dimensions(), (702, 702));
    }

    #[test]
    fn encoding_is_deterministic() {
        let cfg = QrConfig::default();
        let a = encode("I Love You", &cfg).unwrap();
        let b = encode("I Love You", &cfg).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn version_bumps_up_when_payload_overflows() {
        let cfg = QrConfig {
            version: 1,
            box_size: 1,
            ..QrConfig::default()
        };
        // Far beyond version 1 capacity (~14 bytes at level M).
        let payload = "x".repeat(200);
        let img = encode(&payload, &cfg).unwrap();
        assert!(img.width() > 21 + 2);
    }

    #[test]
    fn oversized_payload_is_an_encode_error() {
        let cfg = QrConfig::default();
        let payload = "x".repeat(5000);
        match encode(&payload, &cfg) {
            Err(Error::Encode(_)) => {}
            other => panic!("expected encode error, got {:?}", other.map(|i| i.dimensions())),
        }
    }

    #[test]
    fn uses_configured_colors() {
        let cfg = QrConfig::default();
        let img = encode("I Love You", &cfg).unwrap();
        // Quiet zone corner is background, and some module is filled.
        assert_eq!(*img.get_pixel(0, 0), WHITE);
        assert!(img.pixels().any(|p| *p == BLACK));
    }
}
