//! Outer shape masking for the composed QR image.

use image::{imageops, DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_ellipse_mut;

use crate::profile::ShapeStyle;

// Inset of the circle from each canvas edge, in pixels.
const CIRCLE_MARGIN: i32 = 5;

/// Applies the requested outer shape to the composed image.
///
/// `Square` is the identity. `Rounded` and `Circle` both clip the
/// image to a circle inscribed with a [`CIRCLE_MARGIN`] inset and
/// flatten the result onto an opaque white canvas. The output is a
/// square image sized to the larger of the input's dimensions.
///
/// Deterministic: the output is a pure function of the input image and
/// style.
pub fn apply_shape(img: RgbImage, style: ShapeStyle) -> RgbImage {
    match style {
        ShapeStyle::Square => img,
        ShapeStyle::Rounded | ShapeStyle::Circle => clip_to_circle(&img),
    }
}

fn clip_to_circle(img: &RgbImage) -> RgbImage {
    let (w, h) = img.dimensions();
    let size = w.max(h);

    // Center the input on a square white canvas.
    let mut square = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    let off_x = i64::from((size - w) / 2);
    let off_y = i64::from((size - h) / 2);
    imageops::replace(&mut square, img, off_x, off_y);

    let mut mask = GrayImage::new(size, size);
    let center = (size / 2) as i32;
    let radius = ((size / 2) as i32 - CIRCLE_MARGIN).max(0);
    draw_filled_ellipse_mut(&mut mask, (center, center), radius, radius, Luma([255u8]));

    // Copy masked pixels, fully opaque, onto a transparent canvas.
    let mut cutout = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 0]));
    for (x, y, pixel) in cutout.enumerate_pixels_mut() {
        if mask.get_pixel(x, y)[0] > 0 {
            let Rgb([r, g, b]) = *square.get_pixel(x, y);
            *pixel = Rgba([r, g, b, 255]);
        }
    }

    // Flatten onto opaque white.
    let mut flattened = RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255]));
    imageops::overlay(&mut flattened, &cutout, 0, 0);
    DynamicImage::ImageRgba8(flattened).to_rgb8()
}
