//! Tests for generation defaults and output settings

#[cfg(test)]
mod tests {
    use threadart::io::configuration::{
        BACKGROUND_INTENSITY, DEFAULT_BRIGHTNESS_FACTOR, DEFAULT_CANVAS_SIZE,
        DEFAULT_MAX_PATHS, DEFAULT_MINIMUM_DIFFERENCE, DEFAULT_NAILS_QUANTITY,
        DEFAULT_STARTING_NAIL, MIN_CANVAS_SIZE, MIN_NAILS_QUANTITY, OFF_RASTER_INTENSITY, PATHS_SUFFIX,
        RENDER_DARKEN_STEP, RENDER_SUFFIX, VIEWER_MIN_FRAME_DELAY_MS,
    };

    // Tests default generation parameters
    // Verified by changing constant values
    #[test]
    fn test_generation_defaults() {
        assert_eq!(DEFAULT_NAILS_QUANTITY, 300);
        assert_eq!(DEFAULT_CANVAS_SIZE, 800);
        assert_eq!(DEFAULT_MAX_PATHS, 10_000);
        assert_eq!(DEFAULT_STARTING_NAIL, 0);
        assert_eq!(DEFAULT_MINIMUM_DIFFERENCE, 10);
        assert_eq!(DEFAULT_BRIGHTNESS_FACTOR, 50);
    }

    // Tests validation lower bounds
    // Verified by lowering the nail minimum to two
    #[test]
    fn test_validation_limits() {
        assert_eq!(MIN_NAILS_QUANTITY, 3);
        assert_eq!(MIN_CANVAS_SIZE, 2);
    }

    // Tests rendering and output settings
    // Verified by sharing one suffix for both outputs
    #[test]
    fn test_output_settings() {
        assert_eq!(BACKGROUND_INTENSITY, 255);
        assert_eq!(OFF_RASTER_INTENSITY, 0);
        assert_eq!(RENDER_DARKEN_STEP, 20);
        assert_eq!(RENDER_SUFFIX, "_threads");
        assert_eq!(PATHS_SUFFIX, "_paths");
        assert_eq!(VIEWER_MIN_FRAME_DELAY_MS, 20);
    }
}
