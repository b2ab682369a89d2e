//! Tests for sampling noise functions over a pixel grid

#[cfg(test)]
mod tests {
    use tilesmith::ColorMode;
    use tilesmith::io::configuration::{NOISE_FREQUENCY_X, NOISE_FREQUENCY_Y};
    use tilesmith::noise::NoiseField;
    use tilesmith::noise::field::to_intensity;

    // Tests the magnitude of a sample is scaled and truncated
    // Verified by rounding instead of truncating
    #[test]
    fn test_to_intensity_truncates_magnitude() {
        assert_eq!(to_intensity(0.0), 0);
        assert_eq!(to_intensity(-0.5), 127);
        assert_eq!(to_intensity(0.75), 191);
        assert_eq!(to_intensity(1.0), 255);
        assert_eq!(to_intensity(-3.0), 255);
    }

    // Tests pixels sample the noise at frequency-scaled coordinates
    // Verified by swapping the x and y frequencies
    #[test]
    fn test_sample_grid_uses_default_frequencies() {
        let field = NoiseField::new(|x: f64, y: f64| x * 100.0 + y);
        let grid = field.sample_grid(4, 3);

        assert_eq!(grid.dim(), (3, 4));
        let expected = 3.0 * NOISE_FREQUENCY_X * 100.0 + 2.0 * NOISE_FREQUENCY_Y;
        assert!(grid.get((2, 3)).is_some_and(|v| (v - expected).abs() < 1e-12));
        assert_eq!(field.frequency(), [0.45, 0.67]);
    }

    // Tests the generated bitmap is single-channel with truncated intensities
    // Verified by generating an RGBA bitmap
    #[test]
    fn test_generate_luma_bitmap() {
        let field = NoiseField::new(|x: f64, y: f64| (x + y) / 4.0).with_frequency(1.0, 1.0);
        let bitmap = field.generate(3, 3);

        assert_eq!(bitmap.mode(), ColorMode::Luma);
        assert_eq!(bitmap.dimensions(), (3, 3));
        assert_eq!(bitmap.channels_at(0, 0), Some([0u8].as_slice()));
        assert_eq!(bitmap.channels_at(1, 2), Some([191u8].as_slice()));
        assert_eq!(bitmap.channels_at(2, 2), Some([255u8].as_slice()));
    }
}
