//! Greedy string-art generation
//!
//! Places nails evenly on the circle inscribed in a preprocessed grayscale
//! image, precomputes the pixels of every chord between two nails, and then
//! repeatedly lays the thread from the current nail whose line still covers
//! the most darkness. The ordered thread list can be replayed onto a blank
//! canvas to preview the result.

#![forbid(unsafe_code)]

/// Thread planning: nail pairs, line table, greedy selection and run orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Canvas, nail placement and line rasterization
pub mod spatial;

pub use algorithm::cancellation::CancellationToken;
pub use algorithm::config::{GenerationArgs, GeneratorConfig};
pub use algorithm::generator::{Generation, GenerationStats, generate, generate_with_cancel};
pub use algorithm::planner::{Path, StopReason};
pub use io::error::{Result, ThreadArtError};
