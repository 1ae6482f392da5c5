//! The render pipeline: request assembly, stage orchestration, and
//! PNG serialization helpers.
//!
//! Each render is a pure, self-contained function of its inputs. The
//! stages hand image buffers forward by value; nothing is cached or
//! shared between renders, so concurrent callers need no coordination.

use std::io::Cursor;

use base64::engine::general_purpose;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use qrcode::types::QrError;
use thiserror::Error;

use crate::classify::{classify, ClassificationLabel};
use crate::color::resolve_color;
use crate::encode::encode;
use crate::logo::overlay;
use crate::profile::{ShapeStyle, SizeTier};
use crate::shape::apply_shape;

/// One render's worth of inputs, constructed per call.
///
/// The payload is required; every other field has a defined default
/// (black on white, medium tier, square shape, logo on). Color fields
/// hold the raw spec strings and are resolved during [`render`].
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub payload: String,
    pub foreground: String,
    pub background: String,
    pub size: SizeTier,
    pub shape: ShapeStyle,
    pub include_logo: bool,
}

impl RenderRequest {
    /// Creates a request with all defaults.
    pub fn new(payload: impl Into<String>) -> RenderRequest {
        RenderRequest {
            payload: payload.into(),
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
            size: SizeTier::Medium,
            shape: ShapeStyle::Square,
            include_logo: true,
        }
    }

    /// Assembles a request from a caller's optional raw fields,
    /// applying the documented defaults and fallbacks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrbrand::pipeline::RenderRequest;
    /// use qrbrand::profile::SizeTier;
    ///
    /// let request = RenderRequest::from_parts(
    ///     "https://example.com",
    ///     Some("#43e97b"),
    ///     None,
    ///     Some("large"),
    ///     None,
    ///     Some(false),
    /// );
    /// assert_eq!(request.size, SizeTier::Large);
    /// assert_eq!(request.background, "#ffffff");
    /// ```
    pub fn from_parts(
        payload: impl Into<String>,
        foreground: Option<&str>,
        background: Option<&str>,
        size: Option<&str>,
        shape: Option<&str>,
        include_logo: Option<bool>,
    ) -> RenderRequest {
        RenderRequest {
            payload: payload.into(),
            foreground: foreground.unwrap_or("#000000").to_string(),
            background: background.unwrap_or("#ffffff").to_string(),
            size: size.map_or(SizeTier::Medium, SizeTier::resolve),
            shape: shape.map_or(ShapeStyle::Square, ShapeStyle::resolve),
            include_logo: include_logo.unwrap_or(true),
        }
    }
}

/// A finished render: the final image plus the classification label
/// the caller records in history and uses for display.
#[derive(Debug)]
pub struct RenderOutcome {
    pub image: RgbImage,
    pub label: ClassificationLabel,
}

/// The engine's only fatal error.
///
/// Every other degraded outcome (malformed colors, unknown tiers,
/// declined logos) resolves to a documented fallback and still
/// produces an image.
#[derive(Debug, Error)]
pub enum RenderError {
    /// QR symbol construction failed even after the default-color
    /// retry.
    #[error("QR encoding failed: {0}")]
    Encoding(#[from] QrError),
}

/// Runs the full pipeline: classify, resolve, encode, overlay, mask.
///
/// The logo stage runs only when the request asks for it, fetching the
/// asset selected by the payload's classification label; it never
/// fails the render. The shape stage is the identity for `Square`.
///
/// # Errors
///
/// [`RenderError::Encoding`] if the QR symbol cannot be built for the
/// payload, with custom colors and again with defaults.
pub fn render(request: &RenderRequest) -> Result<RenderOutcome, RenderError> {
    let label = classify(&request.payload);
    let profile = request.size.profile();
    let fg = resolve_color(&request.foreground);
    let bg = resolve_color(&request.background);
    log::debug!(
        "rendering {label} QR: fg={fg:?} bg={bg:?} size={:?} shape={:?} logo={}",
        request.size,
        request.shape,
        request.include_logo,
    );

    let mut image = encode(&request.payload, &profile, fg, bg)?;
    if request.include_logo {
        image = overlay(image, label.logo_url(), &profile);
    }
    let image = apply_shape(image, request.shape);

    Ok(RenderOutcome { image, label })
}

/// Serializes an image as PNG bytes.
///
/// PNG is lossless; decoding the bytes yields the input pixel-for-pixel.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Serializes an image as a `data:image/png;base64,...` URL for
/// inline display or download links.
pub fn png_data_url(image: &RgbImage) -> Result<String, image::ImageError> {
    let bytes = encode_png(image)?;
    Ok(format!("data:image/png;base64,{}", general_purpose::STANDARD.encode(bytes)))
}
