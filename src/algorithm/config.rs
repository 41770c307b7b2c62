use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_FACTOR, DEFAULT_CANVAS_SIZE, DEFAULT_IMAGE_CONTRAST, DEFAULT_MAX_PATHS,
    DEFAULT_MINIMUM_DIFFERENCE, DEFAULT_NAILS_QUANTITY, DEFAULT_STARTING_NAIL, MIN_CANVAS_SIZE,
    MIN_NAILS_QUANTITY,
};
use crate::io::error::{Result, validation_error};
use std::path::PathBuf;

/// Caller-supplied generation request
///
/// Every field except `image_source` is optional. `None` and zero both mean
/// "use the default", except for `max_paths` where an explicit zero asks for
/// no threads at all, and `starting_nail` where zero is the first nail.
///
/// Defaults are applied field by field. Fewer than 20 nails with the default
/// minimum difference of 10 is rejected, so small frames must also set
/// `minimum_difference`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationArgs {
    /// Number of nails around the frame
    pub nails_quantity: Option<usize>,
    /// Side length of the working canvas in pixels
    pub canvas_size: Option<u32>,
    /// Upper bound on selected threads
    pub max_paths: Option<usize>,
    /// Nail the first thread leaves from
    pub starting_nail: Option<usize>,
    /// Minimum circular index distance between a thread's two nails
    pub minimum_difference: Option<usize>,
    /// Brightness added under each selected thread
    pub brightness_factor: Option<u8>,
    /// Contrast adjustment applied during preprocessing
    pub image_contrast: Option<f32>,
    /// Source image to reconstruct
    pub image_source: Option<PathBuf>,
}

impl GenerationArgs {
    /// Request generation for an image with every other field left at its default
    pub fn for_image(image_source: impl Into<PathBuf>) -> Self {
        Self {
            image_source: Some(image_source.into()),
            ..Self::default()
        }
    }
}

/// Fully resolved and validated generation parameters
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of nails around the frame
    pub nails_quantity: usize,
    /// Side length of the working canvas in pixels
    pub canvas_size: u32,
    /// Upper bound on selected threads
    pub max_paths: usize,
    /// Nail the first thread leaves from
    pub starting_nail: usize,
    /// Minimum circular index distance between a thread's two nails
    pub minimum_difference: usize,
    /// Brightness added under each selected thread
    pub brightness_factor: u8,
    /// Contrast adjustment applied during preprocessing
    pub image_contrast: f32,
    /// Source image to reconstruct
    pub image_source: PathBuf,
}

fn positive_or<T: PartialEq + Default>(value: Option<T>, default: T) -> T {
    match value {
        Some(value) if value != T::default() => value,
        _ => default,
    }
}

impl GeneratorConfig {
    /// Merge caller arguments with defaults and validate the result
    ///
    /// # Errors
    ///
    /// Returns a validation error if:
    /// - No image source was supplied
    /// - Fewer than three nails or a canvas smaller than two pixels was requested
    /// - The starting nail does not exist
    /// - The minimum difference exceeds half the nail count, leaving no eligible chord
    pub fn resolve(args: &GenerationArgs) -> Result<Self> {
        let image_source = args
            .image_source
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| {
                validation_error("image_source", &"<none>", &"an image source is required")
            })?;

        let config = Self {
            nails_quantity: positive_or(args.nails_quantity, DEFAULT_NAILS_QUANTITY),
            canvas_size: positive_or(args.canvas_size, DEFAULT_CANVAS_SIZE),
            max_paths: args.max_paths.unwrap_or(DEFAULT_MAX_PATHS),
            starting_nail: args.starting_nail.unwrap_or(DEFAULT_STARTING_NAIL),
            minimum_difference: positive_or(args.minimum_difference, DEFAULT_MINIMUM_DIFFERENCE),
            brightness_factor: positive_or(args.brightness_factor, DEFAULT_BRIGHTNESS_FACTOR),
            image_contrast: args
                .image_contrast
                .filter(|contrast| contrast.is_finite())
                .unwrap_or(DEFAULT_IMAGE_CONTRAST),
            image_source,
        };

        config.validate()?;
        Ok(config)
    }

    /// Check the parameters for internal consistency
    ///
    /// # Errors
    ///
    /// Returns a validation error describing the first inconsistent field
    pub fn validate(&self) -> Result<()> {
        if self.nails_quantity < MIN_NAILS_QUANTITY {
            return Err(validation_error(
                "nails_quantity",
                &self.nails_quantity,
                &format!("at least {MIN_NAILS_QUANTITY} nails are required"),
            ));
        }
        if self.canvas_size < MIN_CANVAS_SIZE {
            return Err(validation_error(
                "canvas_size",
                &self.canvas_size,
                &format!("the canvas must be at least {MIN_CANVAS_SIZE} pixels wide"),
            ));
        }
        if self.starting_nail >= self.nails_quantity {
            return Err(validation_error(
                "starting_nail",
                &self.starting_nail,
                &format!("must be below the nail count {}", self.nails_quantity),
            ));
        }
        if self.minimum_difference > self.nails_quantity / 2 {
            return Err(validation_error(
                "minimum_difference",
                &self.minimum_difference,
                &format!(
                    "no chord is eligible when it exceeds half of {} nails \
                     (the default is {DEFAULT_MINIMUM_DIFFERENCE}, set it explicitly for small frames)",
                    self.nails_quantity
                ),
            ));
        }
        Ok(())
    }
}
