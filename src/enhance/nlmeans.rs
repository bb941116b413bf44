//! Non-local-means denoising with fixed template and search windows

use image::GrayImage;
use ndarray::Array2;

/// Side length of the patch compared around each pixel
pub const TEMPLATE_WINDOW: usize = 7;
/// Side length of the neighborhood searched for similar patches
pub const SEARCH_WINDOW: usize = 21;

/// Reduce noise by averaging pixels with similar local neighborhoods
///
/// For every pixel, all candidates in the 21×21 search window are weighted by
/// `exp(−d² / strength²)`, where `d²` is the mean squared difference between
/// the 7×7 patches centered on the pixel and the candidate. The output pixel
/// is the weight-normalized average. Patch sampling clamps coordinates at the
/// image border, replicating edge pixels.
///
/// A strength of zero (or less) disables smoothing and returns the input
/// unchanged. This is the most expensive operation in the pipeline; cost
/// grows with the product of search-window and patch areas per pixel.
pub fn denoise(image: &GrayImage, strength: f64) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || strength <= 0.0 {
        return image.clone();
    }

    let pixels = to_intensity_grid(image);
    let template_radius = (TEMPLATE_WINDOW / 2) as i64;
    let search_radius = (SEARCH_WINDOW / 2) as i64;
    let inverse_h_squared = 1.0 / (strength * strength);

    let mut output = GrayImage::new(width, height);
    for y in 0..i64::from(height) {
        for x in 0..i64::from(width) {
            let mut weight_sum = 0.0_f64;
            let mut value_sum = 0.0_f64;

            for dy in -search_radius..=search_radius {
                for dx in -search_radius..=search_radius {
                    let candidate_y = y + dy;
                    let candidate_x = x + dx;

                    let distance =
                        patch_distance(&pixels, (y, x), (candidate_y, candidate_x), template_radius);
                    let weight = (-distance * inverse_h_squared).exp();

                    weight_sum += weight;
                    value_sum += weight * f64::from(sample(&pixels, candidate_y, candidate_x));
                }
            }

            let denoised = if weight_sum > 0.0 {
                value_sum / weight_sum
            } else {
                f64::from(sample(&pixels, y, x))
            };

            output.put_pixel(
                x as u32,
                y as u32,
                image::Luma([denoised.round().clamp(0.0, 255.0) as u8]),
            );
        }
    }

    output
}

// Mean squared intensity difference between the patches centered on a and b
fn patch_distance(
    pixels: &Array2<f32>,
    center_a: (i64, i64),
    center_b: (i64, i64),
    radius: i64,
) -> f64 {
    let mut sum = 0.0_f64;
    for patch_y in -radius..=radius {
        for patch_x in -radius..=radius {
            let value_a = sample(pixels, center_a.0 + patch_y, center_a.1 + patch_x);
            let value_b = sample(pixels, center_b.0 + patch_y, center_b.1 + patch_x);
            let diff = f64::from(value_a) - f64::from(value_b);
            sum += diff * diff;
        }
    }

    let side = 2 * radius + 1;
    sum / (side * side) as f64
}

// Border handling clamps coordinates, replicating edge pixels
fn sample(pixels: &Array2<f32>, row: i64, col: i64) -> f32 {
    let (rows, cols) = pixels.dim();
    let row = row.clamp(0, rows as i64 - 1) as usize;
    let col = col.clamp(0, cols as i64 - 1) as usize;
    pixels.get((row, col)).copied().unwrap_or(0.0)
}

fn to_intensity_grid(image: &GrayImage) -> Array2<f32> {
    let (width, height) = image.dimensions();
    let mut pixels = Array2::zeros((height as usize, width as usize));

    for (x, y, pixel) in image.enumerate_pixels() {
        let image::Luma([value]) = *pixel;
        if let Some(cell) = pixels.get_mut((y as usize, x as usize)) {
            *cell = f32::from(value);
        }
    }

    pixels
}
