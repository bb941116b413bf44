//! Linear min-max intensity normalization

use image::GrayImage;

/// Stretch the occupied intensity range onto the full [0, 255] band
///
/// Images whose pixels already span the full range are returned value-for-value
/// identical, making the operation idempotent. Constant-valued images have no
/// range to map and are returned unchanged.
pub fn rescale_intensity(image: &GrayImage) -> GrayImage {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for pixel in image.pixels() {
        let image::Luma([value]) = *pixel;
        min = min.min(value);
        max = max.max(value);
    }

    // Covers both empty and constant-valued images
    if min >= max {
        return image.clone();
    }

    let scale = 255.0 / f64::from(max - min);
    let mut output = GrayImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let image::Luma([value]) = *pixel;
        let stretched = (f64::from(value - min) * scale).round().clamp(0.0, 255.0) as u8;
        output.put_pixel(x, y, image::Luma([stretched]));
    }

    output
}
