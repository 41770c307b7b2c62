/// Grayscale working buffer with saturating updates
pub mod canvas;
/// Bresenham line rasterization
pub mod line;
/// Nail coordinates on the inscribed circle
pub mod nails;

pub use canvas::Canvas;
pub use nails::Nail;
