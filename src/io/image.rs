//! Source image preprocessing and grayscale PNG export

use crate::io::configuration::BACKGROUND_INTENSITY;
use crate::io::error::{Result, ThreadArtError};
use crate::spatial::canvas::Canvas;
use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, ImageReader, Luma};
use num_traits::ToPrimitive;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Open and decode an image, guessing its format from the content
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The content is not a recognized image format or is corrupt
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    let file = File::open(path).map_err(|e| ThreadArtError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    ImageReader::new(BufReader::new(file))
        .with_guessed_format()
        .map_err(|e| ThreadArtError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?
        .decode()
        .map_err(|e| ThreadArtError::ImageDecode {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Lookup table for a contrast change of `percentage` in `[-100, 100]`
///
/// Each level is pushed away from mid-gray by `v = (100 + percentage) / 100`
/// when lowering contrast and by `1 / (2 - v)` when raising it. At 100 the
/// table thresholds at mid-gray.
pub fn contrast_table(percentage: f32) -> [u8; 256] {
    let percentage = f64::from(percentage).clamp(-100.0, 100.0);
    let v = (100.0 + percentage) / 100.0;
    let factor = if v <= 1.0 { v } else { 1.0 / (2.0 - v) };

    let mut table = [0_u8; 256];
    for (level, entry) in (0_u8..=u8::MAX).zip(table.iter_mut()) {
        let normalized = f64::from(level) / 255.0;
        *entry = if v >= 2.0 {
            if normalized >= 0.5 { u8::MAX } else { 0 }
        } else {
            ((0.5 + (normalized - 0.5) * factor) * 255.0 + 0.5)
                .clamp(0.0, 255.0)
                .to_u8()
                .unwrap_or(0)
        };
    }
    table
}

/// Apply [`contrast_table`] to every pixel; zero leaves the image unchanged
pub fn adjust_contrast(image: &GrayImage, percentage: f32) -> GrayImage {
    let mut adjusted = image.clone();
    if percentage == 0.0 {
        return adjusted;
    }
    let table = contrast_table(percentage);
    for pixel in adjusted.pixels_mut() {
        if let Some(&level) = table.get(usize::from(pixel.0[0])) {
            pixel.0[0] = level;
        }
    }
    adjusted
}

/// Center-crop to the largest square that fits
pub fn crop_to_square(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == height {
        return image.clone();
    }
    let side = width.min(height);
    let x = (width - side) / 2;
    let y = (height - side) / 2;
    imageops::crop_imm(image, x, y, side, side).to_image()
}

/// Paint every pixel outside the inscribed circle with the background
pub fn mask_outside_circle(image: &mut GrayImage) {
    let mid = i64::from(image.width().min(image.height()) / 2);
    let radius_squared = mid * mid;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let dx = i64::from(x) - mid;
        let dy = i64::from(y) - mid;
        if dx * dx + dy * dy > radius_squared {
            *pixel = Luma([BACKGROUND_INTENSITY]);
        }
    }
}

/// Turn a decoded image into the square working canvas
///
/// Grayscale, contrast adjustment, center crop, circular mask and a
/// Lanczos resize to `canvas_size`, in that order.
pub fn preprocess(image: &DynamicImage, contrast: f32, canvas_size: u32) -> GrayImage {
    let gray = image.to_luma8();
    let contrasted = adjust_contrast(&gray, contrast);
    let mut square = crop_to_square(&contrasted);
    mask_outside_circle(&mut square);

    if square.dimensions() == (canvas_size, canvas_size) {
        return square;
    }
    imageops::resize(&square, canvas_size, canvas_size, FilterType::Lanczos3)
}

/// Load a source image from disk and preprocess it into a canvas
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded
pub fn load_canvas(path: &Path, contrast: f32, canvas_size: u32) -> Result<Canvas> {
    let source = load_source_image(path)?;
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        "decoded source image"
    );
    let processed = preprocess(&source, contrast, canvas_size);
    Ok(Canvas::from_gray_image(&processed))
}

/// Save a grayscale image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_gray_png(image: &GrayImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ThreadArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| ThreadArtError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
