//! QR rasterization and PNG encoding.
//!
//! Stateless mapping from a text payload to a grayscale raster: encode
//! with `qrcode`, then blow each module up to a fixed pixel scale with a
//! quiet-zone border so the result scans reliably off a screen or print.

use std::io::Cursor;

use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use thiserror::Error;

const DARK: Luma<u8> = Luma([0u8]);
const LIGHT: Luma<u8> = Luma([255u8]);

#[derive(Debug, Error)]
pub enum RenderError {
    /// Payload exceeds the capacity of the symbol at the requested level
    #[error("QR encode failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("PNG encode failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders `data` as a QR symbol, `module_scale` pixels per module, with a
/// `quiet_zone` border (in modules) on every side.
pub fn render_qr(
    data: &str,
    module_scale: u32,
    quiet_zone: u32,
    level: EcLevel,
) -> Result<GrayImage, RenderError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), level)?;
    let modules = code.to_colors();
    let module_count = code.width() as u32;

    let scale = module_scale.max(1);
    let img_size = (module_count + 2 * quiet_zone) * scale;
    let offset = quiet_zone * scale;

    let mut img = GrayImage::from_pixel(img_size, img_size, LIGHT);

    for (i, color) in modules.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let x = (i as u32) % module_count;
        let y = (i as u32) / module_count;
        for dx in 0..scale {
            for dy in 0..scale {
                img.put_pixel(offset + x * scale + dx, offset + y * scale + dy, DARK);
            }
        }
    }

    Ok(img)
}

/// Encodes a rendered surface to PNG bytes for export.
pub fn png_bytes(img: &GrayImage) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    DynamicImage::ImageLuma8(img.clone()).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::qr::{EC_LEVEL, MODULE_SCALE, QUIET_ZONE_MODULES};

    #[test]
    fn render_produces_square_image() {
        let img = render_qr("https://example.com", MODULE_SCALE, QUIET_ZONE_MODULES, EC_LEVEL)
            .unwrap();
        assert!(img.width() > 0);
        assert_eq!(img.width(), img.height());
    }

    #[test]
    fn render_size_accounts_for_quiet_zone() {
        let code =
            QrCode::with_error_correction_level("payload".as_bytes(), EcLevel::H).unwrap();
        let modules = code.width() as u32;

        let img = render_qr("payload", 4, 4, EcLevel::H).unwrap();
        assert_eq!(img.width(), (modules + 8) * 4);
    }

    #[test]
    fn render_contains_dark_and_light_pixels() {
        let img = render_qr("https://example.com/?code=1&id=2", 2, 1, EcLevel::H).unwrap();
        assert!(img.pixels().any(|p| *p == DARK));
        assert!(img.pixels().any(|p| *p == LIGHT));
    }

    #[test]
    fn render_is_deterministic() {
        let a = render_qr("same input", 3, 4, EcLevel::H).unwrap();
        let b = render_qr("same input", 3, 4, EcLevel::H).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn zero_scale_is_clamped() {
        let img = render_qr("x", 0, 1, EcLevel::L).unwrap();
        assert!(img.width() > 0);
    }

    #[test]
    fn png_bytes_round_trip() {
        let img = render_qr("https://example.com", 2, 4, EcLevel::H).unwrap();
        let bytes = png_bytes(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), img.dimensions());
        assert_eq!(decoded.as_raw(), img.as_raw());
    }
}
