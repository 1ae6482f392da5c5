//! QR symbol encoding and module rasterisation.

use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::color::{ColorTriple, BLACK, WHITE};
use crate::profile::SizeProfile;

/// Builds the smallest QR symbol that fits the payload, starting from
/// the profile's minimum version.
fn build_symbol(payload: &str, min_version: i16) -> Result<QrCode, QrError> {
    let mut last_err = QrError::DataTooLong;
    for version in min_version..=40 {
        match QrCode::with_version(payload, Version::Normal(version), EcLevel::M) {
            Ok(code) => return Ok(code),
            Err(err) => last_err = err,
        }
    }
    Err(last_err)
}

fn render_modules(code: &QrCode, profile: &SizeProfile, fg: ColorTriple, bg: ColorTriple) -> RgbImage {
    let width = code.width() as u32;
    let border = profile.border;
    let size = (width + 2 * border) * profile.box_size;
    let mut img = ImageBuffer::new(size, size);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let bx = x / profile.box_size;
        let by = y / profile.box_size;
        let in_symbol = bx >= border && by >= border && bx < border + width && by < border + width;
        *pixel = if in_symbol && code[((bx - border) as usize, (by - border) as usize)] == Color::Dark {
            Rgb(fg)
        } else {
            Rgb(bg)
        };
    }

    img
}

fn try_encode(
    payload: &str,
    profile: &SizeProfile,
    fg: ColorTriple,
    bg: ColorTriple,
) -> Result<RgbImage, QrError> {
    let code = build_symbol(payload, profile.min_version)?;
    Ok(render_modules(&code, profile, fg, bg))
}

/// Encodes a payload into an opaque RGB image of the QR symbol.
///
/// The symbol version grows from the profile's minimum until the
/// payload fits; data is never truncated. Output pixel dimensions are
/// `(symbol_width + 2 * border) * box_size` on each side.
///
/// If encoding with the requested colors fails for any reason, one
/// retry is made with the default black-on-white pair. A failure on
/// that retry is fatal and propagates to the caller.
///
/// # Arguments
///
/// * `payload` - The text to encode.
/// * `profile` - Density, module pixel size, and border configuration.
/// * `fg` - Module (dark) color.
/// * `bg` - Background (light) color.
///
/// # Example
///
/// ```rust
/// use qrbrand::encode::encode;
/// use qrbrand::profile::SizeTier;
///
/// let profile = SizeTier::Medium.profile();
/// let img = encode("hello", &profile, [0, 0, 0], [255, 255, 255]).unwrap();
/// assert_eq!(img.dimensions(), (290, 290));
/// ```
pub fn encode(
    payload: &str,
    profile: &SizeProfile,
    fg: ColorTriple,
    bg: ColorTriple,
) -> Result<RgbImage, QrError> {
    match try_encode(payload, profile, fg, bg) {
        Ok(img) => Ok(img),
        Err(err) => {
            log::warn!("QR encode with requested colors failed ({err}); retrying with defaults");
            try_encode(payload, profile, BLACK, WHITE)
        }
    }
}
