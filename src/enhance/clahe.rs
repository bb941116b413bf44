//! Contrast-limited adaptive histogram equalization over a fixed tile grid

use image::GrayImage;
use ndarray::Array3;

/// Number of tiles along each image axis
pub const TILE_GRID_SIZE: usize = 8;

const HISTOGRAM_BINS: usize = 256;

/// Apply localized histogram equalization with a clipping bound
///
/// The image is divided into an 8×8 grid of tiles. Each tile's histogram is
/// clipped at `clip_limit · tile_area / 256` (floored at one count per bin)
/// with the clipped excess redistributed uniformly, and its scaled cumulative
/// distribution becomes a per-tile lookup table. Output pixels bilinearly
/// interpolate the tables of the four surrounding tile centers, so tile
/// boundaries stay seamless.
///
/// Non-positive clip limits degenerate to a no-op, as do empty images.
pub fn apply_clahe(image: &GrayImage, clip_limit: f64) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || clip_limit <= 0.0 {
        return image.clone();
    }

    let tile_width = (width as usize).div_ceil(TILE_GRID_SIZE).max(1);
    let tile_height = (height as usize).div_ceil(TILE_GRID_SIZE).max(1);
    let tiles_x = (width as usize).div_ceil(tile_width);
    let tiles_y = (height as usize).div_ceil(tile_height);

    let luts = build_tile_luts(image, clip_limit, tile_width, tile_height, tiles_x, tiles_y);

    let mut output = GrayImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels() {
        let image::Luma([value]) = *pixel;

        // Tile-space coordinates relative to tile centers
        let gx = (f64::from(x) + 0.5) / tile_width as f64 - 0.5;
        let gy = (f64::from(y) + 0.5) / tile_height as f64 - 0.5;

        let wx = gx - gx.floor();
        let wy = gy - gy.floor();

        let col0 = clamp_tile_index(gx.floor(), tiles_x);
        let col1 = clamp_tile_index(gx.floor() + 1.0, tiles_x);
        let row0 = clamp_tile_index(gy.floor(), tiles_y);
        let row1 = clamp_tile_index(gy.floor() + 1.0, tiles_y);

        let top = lut_value(&luts, row0, col0, value)
            .mul_add(1.0 - wx, lut_value(&luts, row0, col1, value) * wx);
        let bottom = lut_value(&luts, row1, col0, value)
            .mul_add(1.0 - wx, lut_value(&luts, row1, col1, value) * wx);
        let blended = top.mul_add(1.0 - wy, bottom * wy);

        output.put_pixel(x, y, image::Luma([blended.round().clamp(0.0, 255.0) as u8]));
    }

    output
}

const fn clamp_tile_index(tile: f64, tile_count: usize) -> usize {
    if tile < 0.0 {
        return 0;
    }
    let max_index = tile_count - 1;
    if tile > max_index as f64 {
        max_index
    } else {
        tile as usize
    }
}

fn lut_value(luts: &Array3<u8>, tile_row: usize, tile_col: usize, value: u8) -> f64 {
    luts.get((tile_row, tile_col, value as usize))
        .copied()
        .unwrap_or(value)
        .into()
}

fn build_tile_luts(
    image: &GrayImage,
    clip_limit: f64,
    tile_width: usize,
    tile_height: usize,
    tiles_x: usize,
    tiles_y: usize,
) -> Array3<u8> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let mut luts = Array3::zeros((tiles_y, tiles_x, HISTOGRAM_BINS));

    for tile_row in 0..tiles_y {
        let y_start = tile_row * tile_height;
        let y_end = ((tile_row + 1) * tile_height).min(height);

        for tile_col in 0..tiles_x {
            let x_start = tile_col * tile_width;
            let x_end = ((tile_col + 1) * tile_width).min(width);

            let mut histogram = [0_u32; HISTOGRAM_BINS];
            for y in y_start..y_end {
                for x in x_start..x_end {
                    let image::Luma([value]) = *image.get_pixel(x as u32, y as u32);
                    if let Some(bin) = histogram.get_mut(value as usize) {
                        *bin += 1;
                    }
                }
            }

            let tile_area = (y_end - y_start) * (x_end - x_start);
            if tile_area == 0 {
                continue;
            }
            clip_histogram(&mut histogram, clip_limit, tile_area);

            // Scaled CDF becomes the tile's lookup table
            let scale = 255.0 / tile_area as f64;
            let mut cumulative = 0_u64;
            for (bin_index, &count) in histogram.iter().enumerate() {
                cumulative += u64::from(count);
                if let Some(entry) = luts.get_mut((tile_row, tile_col, bin_index)) {
                    *entry = (cumulative as f64 * scale).round().clamp(0.0, 255.0) as u8;
                }
            }
        }
    }

    luts
}

// Clipped mass is redistributed uniformly; the remainder tops up the lowest bins
fn clip_histogram(histogram: &mut [u32; HISTOGRAM_BINS], clip_limit: f64, tile_area: usize) {
    let threshold = ((clip_limit * tile_area as f64 / HISTOGRAM_BINS as f64) as u32).max(1);

    let mut excess = 0_u32;
    for count in histogram.iter_mut() {
        if *count > threshold {
            excess += *count - threshold;
            *count = threshold;
        }
    }

    let per_bin = excess / HISTOGRAM_BINS as u32;
    let remainder = (excess % HISTOGRAM_BINS as u32) as usize;
    for (bin_index, count) in histogram.iter_mut().enumerate() {
        *count += per_bin;
        if bin_index < remainder {
            *count += 1;
        }
    }
}
