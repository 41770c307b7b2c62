//! Nail placement on the circle inscribed in the canvas

use num_traits::ToPrimitive;
use serde::Serialize;
use std::f64::consts::TAU;

/// Integer pixel coordinate of a nail or of a rasterized line pixel
///
/// A nail is identified by its index in the nail list, never by its coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Nail {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Nail {
    /// Create a coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate
    pub fn distance(self, other: Self) -> f64 {
        f64::from(other.x - self.x).hypot(f64::from(other.y - self.y))
    }
}

/// Place `nails_quantity` evenly spaced nails on the circle inscribed in a
/// `width` x `height` canvas
///
/// Nail `i` sits at angle `i * 2π / n` measured from the positive x axis.
/// Offsets from the center are truncated toward zero, so nails on the right
/// and bottom edges may land one pixel past the last column or row.
pub fn place_nails(width: u32, height: u32, nails_quantity: usize) -> Vec<Nail> {
    let center_x = (width / 2) as i32;
    let center_y = (height / 2) as i32;
    let radius = f64::from(center_x.min(center_y));

    (0..nails_quantity)
        .map(|index| {
            let angle = index as f64 * TAU / nails_quantity as f64;
            let offset_x = (radius * angle.cos()).to_i32().unwrap_or(0);
            let offset_y = (radius * angle.sin()).to_i32().unwrap_or(0);
            Nail::new(center_x + offset_x, center_y + offset_y)
        })
        .collect()
}
