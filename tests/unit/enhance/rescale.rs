//! Tests for linear min-max intensity normalization

#[cfg(test)]
mod tests {
    use image::GrayImage;
    use lithoprep::enhance::rescale::rescale_intensity;

    // Constant-valued images have no range to map and pass through unchanged
    #[test]
    fn test_constant_image_unchanged() {
        let image = GrayImage::from_pixel(10, 10, image::Luma([77]));
        assert_eq!(rescale_intensity(&image), image);
    }

    // Tests the occupied range maps onto the full band
    // Verified by offsetting the scale factor
    #[test]
    fn test_known_endpoint_mapping() {
        let Some(image) = GrayImage::from_raw(3, 1, vec![50, 100, 150]) else {
            unreachable!("buffer length matches dimensions");
        };
        let rescaled = rescale_intensity(&image);

        let values: Vec<u8> = rescaled
            .pixels()
            .map(|pixel| {
                let image::Luma([value]) = *pixel;
                value
            })
            .collect();
        assert_eq!(values, [0, 128, 255]);
    }

    // Tests rescaling is a fixed point once the output spans [0, 255]
    #[test]
    fn test_idempotent_on_full_range() {
        let Some(image) = GrayImage::from_raw(4, 1, vec![10, 20, 30, 40]) else {
            unreachable!("buffer length matches dimensions");
        };
        let once = rescale_intensity(&image);
        let twice = rescale_intensity(&once);

        assert_eq!(twice, once);
    }

    // Tests an image already spanning the full band is returned value-for-value
    #[test]
    fn test_full_range_input_is_identity() {
        let Some(image) = GrayImage::from_raw(3, 1, vec![0, 128, 255]) else {
            unreachable!("buffer length matches dimensions");
        };
        assert_eq!(rescale_intensity(&image), image);
    }

    // Tests output dimensions match input
    #[test]
    fn test_preserves_dimensions() {
        let image = GrayImage::from_fn(9, 5, |x, y| image::Luma([(40 + x + y) as u8]));
        assert_eq!(rescale_intensity(&image).dimensions(), (9, 5));
    }
}
