//! Tests for run orchestration and the generation entry points

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma};
    use std::path::PathBuf;
    use threadart::algorithm::cancellation::CancellationToken;
    use threadart::algorithm::config::{GenerationArgs, GeneratorConfig};
    use threadart::algorithm::generator::{ThreadGenerator, generate, generate_with_cancel};
    use threadart::algorithm::planner::StopReason;
    use threadart::spatial::canvas::Canvas;
    use threadart::ThreadArtError;

    fn small_config(image_source: PathBuf) -> GeneratorConfig {
        GeneratorConfig {
            nails_quantity: 8,
            canvas_size: 100,
            max_paths: 5,
            starting_nail: 0,
            minimum_difference: 2,
            brightness_factor: 50,
            image_contrast: 0.0,
            image_source,
        }
    }

    fn write_gray_png(dir: &tempfile::TempDir, name: &str, value: u8) -> PathBuf {
        let path = dir.path().join(name);
        GrayImage::from_pixel(64, 48, Luma([value]))
            .save(&path)
            .expect("write test image");
        path
    }

    // Tests the generator wires nails, lines and planner together
    // Verified by placing nails on the configured size instead of the canvas
    #[test]
    fn test_from_canvas_context() {
        let generator = ThreadGenerator::from_canvas(
            small_config(PathBuf::from("unused.png")),
            Canvas::filled(100, 100, 128),
        );
        assert_eq!(generator.nails().len(), 8);
        assert_eq!(generator.dictionary().len(), 28);
        assert!(generator.paths().is_empty());
        assert_eq!(generator.canvas().intensity(threadart::spatial::Nail::new(50, 50)), 128);
        assert_eq!(generator.config().max_paths, 5);
    }

    // Tests the finished result carries paths and statistics
    // Verified by counting thread length in chords instead of pixels
    #[test]
    fn test_finish_stats() {
        let mut generator = ThreadGenerator::from_canvas(
            small_config(PathBuf::from("unused.png")),
            Canvas::filled(100, 100, 128),
        );
        let stop = generator.run(&CancellationToken::new());
        let generation = generator.finish(stop);

        let stats = generation.stats();
        assert_eq!(stats.stop_reason, StopReason::MaxPaths);
        assert_eq!(stats.total_lines, 5);
        assert_eq!(stats.thread_length, 355);
        assert_eq!(generation.paths().len(), 5);
        assert_eq!(generation.canvas_size(), 100);
        assert_eq!(generation.nails().len(), 8);
    }

    // Tests single stepping matches the planner's choices
    // Verified by skipping the canvas update between steps
    #[test]
    fn test_execute_iteration() {
        let mut generator = ThreadGenerator::from_canvas(
            small_config(PathBuf::from("unused.png")),
            Canvas::filled(100, 100, 128),
        );
        let first = generator.execute_iteration().map(|p| (p.starting_nail, p.ending_nail));
        let second = generator.execute_iteration().map(|p| (p.starting_nail, p.ending_nail));
        assert_eq!(first, Some((0, 2)));
        assert_eq!(second, Some((2, 4)));
    }

    // Tests the rendering darkens exactly the laid lines
    // Verified by rendering on a black background
    #[test]
    fn test_render() {
        let mut generator = ThreadGenerator::from_canvas(
            small_config(PathBuf::from("unused.png")),
            Canvas::filled(100, 100, 128),
        );
        let stop = generator.run(&CancellationToken::new());
        let generation = generator.finish(stop);

        let image = generation.render().expect("render");
        assert_eq!(image.dimensions(), (100, 100));
        assert!(image.pixels().any(|pixel| pixel.0[0] < 255));
        assert_eq!(image.get_pixel(99, 99).0[0], 255);
        assert_eq!(generation.render().expect("render"), image);
    }

    // Tests chord lengths scale to the physical frame
    // Verified by dividing by the radius instead of the diameter
    #[test]
    fn test_physical_thread_length() {
        let mut generator = ThreadGenerator::from_canvas(
            small_config(PathBuf::from("unused.png")),
            Canvas::filled(100, 100, 128),
        );
        let stop = generator.run(&CancellationToken::new());
        let generation = generator.finish(stop);

        assert!((generation.physical_thread_length(100.0) - 412.132_034).abs() < 1e-3);
        assert!((generation.physical_thread_length(50.0) - 206.066_017).abs() < 1e-3);
    }

    // Tests generation without an image is rejected before any work
    // Verified by loading the image before validating
    #[test]
    fn test_generate_requires_image() {
        let result = generate(&GenerationArgs::default());
        assert!(matches!(
            result,
            Err(ThreadArtError::Validation {
                parameter: "image_source",
                ..
            })
        ));
    }

    // Tests a zero thread budget yields an empty layout
    // Verified by defaulting an explicit zero budget
    #[test]
    fn test_generate_zero_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_gray_png(&dir, "gray.png", 90);
        let args = GenerationArgs {
            max_paths: Some(0),
            nails_quantity: Some(16),
            canvas_size: Some(64),
            minimum_difference: Some(3),
            ..GenerationArgs::for_image(&source)
        };

        let generation = generate(&args).expect("generation");
        assert_eq!(generation.stats().total_lines, 0);
        assert_eq!(generation.stats().thread_length, 0);
        assert_eq!(generation.stats().stop_reason, StopReason::MaxPaths);
        assert!(generation.paths().is_empty());
    }

    // Tests a real image produces a bounded thread list
    // Verified by ignoring the configured budget
    #[test]
    fn test_generate_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_gray_png(&dir, "dark.png", 30);
        let args = GenerationArgs {
            max_paths: Some(20),
            nails_quantity: Some(24),
            canvas_size: Some(64),
            minimum_difference: Some(4),
            ..GenerationArgs::for_image(&source)
        };

        let generation = generate(&args).expect("generation");
        assert_eq!(generation.canvas_size(), 64);
        assert_eq!(generation.stats().total_lines, 20);
        assert_eq!(generation.stats().stop_reason, StopReason::MaxPaths);
    }

    // Tests a pre-raised token stops the run with no threads
    // Verified by checking the token only after the first thread
    #[test]
    fn test_generate_cancelled() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_gray_png(&dir, "dark.png", 30);
        let args = GenerationArgs {
            nails_quantity: Some(24),
            canvas_size: Some(64),
            minimum_difference: Some(4),
            ..GenerationArgs::for_image(&source)
        };
        let cancel = CancellationToken::new();
        cancel.cancel();

        let generation = generate_with_cancel(&args, &cancel).expect("generation");
        assert_eq!(generation.stats().stop_reason, StopReason::Cancelled);
        assert!(generation.paths().is_empty());
    }

    // Tests a missing file surfaces as a load error
    // Verified by mapping open failures to decode errors
    #[test]
    fn test_generate_missing_image() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = generate(&GenerationArgs::for_image(dir.path().join("absent.png")));
        assert!(matches!(result, Err(ThreadArtError::ImageLoad { .. })));
    }
}
