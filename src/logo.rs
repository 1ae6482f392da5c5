//! Remote logo retrieval and centered alpha compositing.
//!
//! Logo overlay is strictly best-effort: every failure between the
//! network request and the final paste is absorbed here, and the base
//! image is returned unchanged. Failures are tagged with a
//! [`LogoDecline`] reason so tests and logs can tell them apart.

use std::time::Duration;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::profile::SizeProfile;

/// Hard cap on the logo fetch; a single attempt, no retry.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Some asset hosts reject clients without a browser-like User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Reason a logo was not overlaid.
#[derive(Debug, Error)]
pub enum LogoDecline {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered HTTP {0}")]
    Status(u16),

    #[error("vector formats are unsupported: {0}")]
    VectorFormat(String),

    #[error("content type is not an image: {0:?}")]
    NotAnImage(String),

    #[error("logo bytes could not be decoded: {0}")]
    Undecodable(String),
}

/// Fetches and decodes a remote logo.
///
/// The request carries a browser-like `User-Agent` and is bounded by
/// [`FETCH_TIMEOUT`]. The response must be 2xx, must declare an
/// `image/*` content type that is not a vector format, and must decode
/// as a raster image; the first violated step yields its
/// [`LogoDecline`].
pub fn fetch_logo(logo_url: &str) -> Result<RgbaImage, LogoDecline> {
    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|err| LogoDecline::Request(err.to_string()))?;

    let response = client
        .get(logo_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .map_err(|err| LogoDecline::Request(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(LogoDecline::Status(status.as_u16()));
    }

    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    if content_type.to_lowercase().contains("svg") {
        return Err(LogoDecline::VectorFormat(content_type));
    }
    if !content_type.starts_with("image/") {
        return Err(LogoDecline::NotAnImage(content_type));
    }

    let bytes = response
        .bytes()
        .map_err(|err| LogoDecline::Request(err.to_string()))?;
    let logo = image::load_from_memory(&bytes)
        .map_err(|err| LogoDecline::Undecodable(err.to_string()))?;
    Ok(logo.to_rgba8())
}

/// Pastes a logo centered on the base image, blending by the logo's
/// own alpha channel.
///
/// The logo is rescaled to `target_width` pixels wide, preserving
/// aspect ratio (`new_height = round(target_width * h / w)`), with
/// Lanczos resampling.
pub fn composite(base: RgbImage, logo: &RgbaImage, target_width: u32) -> RgbImage {
    let (logo_w, logo_h) = logo.dimensions();
    if logo_w == 0 || logo_h == 0 {
        return base;
    }

    let height = ((target_width as f32) * (logo_h as f32) / (logo_w as f32)).round().max(1.0) as u32;
    let scaled = imageops::resize(logo, target_width, height, FilterType::Lanczos3);

    let mut canvas = DynamicImage::ImageRgb8(base).to_rgba8();
    let x = (i64::from(canvas.width()) - i64::from(scaled.width())) / 2;
    let y = (i64::from(canvas.height()) - i64::from(scaled.height())) / 2;
    imageops::overlay(&mut canvas, &scaled, x, y);
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Fetches the logo at `logo_url` and composites it centered on
/// `base`, scaled to the profile's logo width.
///
/// Never fails: any [`LogoDecline`] is logged and the base image is
/// returned unchanged.
pub fn overlay(base: RgbImage, logo_url: &str, profile: &SizeProfile) -> RgbImage {
    match fetch_logo(logo_url) {
        Ok(logo) => composite(base, &logo, profile.logo_width),
        Err(decline) => {
            log::warn!("skipping logo overlay from {logo_url}: {decline}");
            base
        }
    }
}

/// Clips a logo to a circle inscribed in its bounds.
///
/// Pixels outside the circle become fully transparent.
pub fn circular_logo(logo: &RgbaImage) -> RgbaImage {
    let (w, h) = logo.dimensions();
    let mut mask = GrayImage::new(w, h);
    draw_filled_ellipse_mut(
        &mut mask,
        ((w / 2) as i32, (h / 2) as i32),
        (w / 2) as i32,
        (h / 2) as i32,
        Luma([255u8]),
    );

    let mut out = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 0]));
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if mask.get_pixel(x, y)[0] > 0 {
            *pixel = *logo.get_pixel(x, y);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid_logo(w: u32, h: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(w, h, color)
    }

    #[test]
    fn test_composite_centers_the_logo() {
        let base = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
        let logo = solid_logo(10, 6, Rgba([255, 0, 0, 255]));

        let out = composite(base, &logo, 40);
        assert_eq!(out.dimensions(), (100, 100));

        // Logo lands at (30, 38) sized 40x24; the image center is red.
        let center = out.get_pixel(50, 50);
        assert!(center[0] > 200 && center[1] < 60 && center[2] < 60);

        // Corners stay untouched.
        assert_eq!(*out.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(99, 99), Rgb([255, 255, 255]));
    }

    #[test]
    fn test_composite_preserves_aspect_ratio() {
        let base = RgbImage::from_pixel(200, 200, Rgb([255, 255, 255]));
        let logo = solid_logo(100, 50, Rgba([0, 0, 255, 255]));

        // 60 wide at a 2:1 ratio puts the top edge at y = 85.
        let out = composite(base, &logo, 60);
        let above = out.get_pixel(100, 80);
        let inside = out.get_pixel(100, 100);
        assert_eq!(*above, Rgb([255, 255, 255]));
        assert!(inside[2] > 200);
    }

    #[test]
    fn test_fully_transparent_logo_leaves_base_unchanged() {
        let base = RgbImage::from_pixel(80, 80, Rgb([10, 20, 30]));
        let logo = solid_logo(16, 16, Rgba([255, 0, 0, 0]));

        let out = composite(base.clone(), &logo, 40);
        assert_eq!(out, base);
    }

    #[test]
    fn test_circular_logo_clips_corners() {
        let logo = solid_logo(20, 20, Rgba([50, 100, 150, 255]));
        let clipped = circular_logo(&logo);

        assert_eq!(clipped.get_pixel(0, 0)[3], 0);
        assert_eq!(clipped.get_pixel(19, 19)[3], 0);
        assert_eq!(*clipped.get_pixel(10, 10), Rgba([50, 100, 150, 255]));
    }
}
