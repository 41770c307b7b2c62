//! Mutable grayscale working buffer
//!
//! Tracks how much darkness is left to cover. Values live in `[0, 255]`;
//! planning only ever raises them, rendering only ever lowers them.

use crate::io::configuration::{BACKGROUND_INTENSITY, OFF_RASTER_INTENSITY};
use crate::spatial::nails::Nail;
use image::GrayImage;
use ndarray::Array2;

/// Square or rectangular intensity grid indexed as `[row, col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    pixels: Array2<u8>,
}

impl Canvas {
    /// Create a canvas with every pixel set to `value`
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            pixels: Array2::from_elem((height as usize, width as usize), value),
        }
    }

    /// Create an all-white canvas
    pub fn white(width: u32, height: u32) -> Self {
        Self::filled(width, height, BACKGROUND_INTENSITY)
    }

    /// Copy the luma channel of a grayscale image
    pub fn from_gray_image(image: &GrayImage) -> Self {
        let mut canvas = Self::filled(image.width(), image.height(), 0);
        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(cell) = canvas.pixels.get_mut((y as usize, x as usize)) {
                *cell = pixel.0[0];
            }
        }
        canvas
    }

    /// Convert back into a grayscale image
    pub fn to_gray_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            image::Luma([self.intensity(Nail::new(x as i32, y as i32))])
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.ncols() as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.nrows() as u32
    }

    fn index(&self, pixel: Nail) -> Option<(usize, usize)> {
        let row = usize::try_from(pixel.y).ok()?;
        let col = usize::try_from(pixel.x).ok()?;
        (row < self.pixels.nrows() && col < self.pixels.ncols()).then_some((row, col))
    }

    /// Intensity at `pixel`
    ///
    /// Coordinates off the raster read as black and cannot be brightened, so
    /// they keep adding darkness to every line that crosses them.
    pub fn intensity(&self, pixel: Nail) -> u8 {
        self.index(pixel)
            .and_then(|index| self.pixels.get(index))
            .copied()
            .unwrap_or(OFF_RASTER_INTENSITY)
    }

    /// Remaining darkness along `line`: sum of `255 - intensity`
    pub fn deficit(&self, line: &[Nail]) -> u64 {
        line.iter()
            .map(|&pixel| u64::from(u8::MAX - self.intensity(pixel)))
            .sum()
    }

    /// Raise every pixel on `line` by `amount`, saturating at 255
    ///
    /// Pixels off the raster are skipped.
    pub fn brighten(&mut self, line: &[Nail], amount: u8) {
        for &pixel in line {
            if let Some(cell) = self
                .index(pixel)
                .and_then(|index| self.pixels.get_mut(index))
            {
                *cell = cell.saturating_add(amount);
            }
        }
    }

    /// Lower every pixel on `line` by `amount`, saturating at 0
    pub fn darken(&mut self, line: &[Nail], amount: u8) {
        for &pixel in line {
            if let Some(cell) = self
                .index(pixel)
                .and_then(|index| self.pixels.get_mut(index))
            {
                *cell = cell.saturating_sub(amount);
            }
        }
    }

    /// Raw pixel grid
    pub const fn pixels(&self) -> &Array2<u8> {
        &self.pixels
    }
}
