/// Command-line parsing and batch orchestration
pub mod cli;
/// Defaults and output settings
pub mod configuration;
/// Error taxonomy
pub mod error;
/// JSON export of thread lists
pub mod export;
/// Source image preprocessing and PNG export
pub mod image;
/// Terminal progress bars
pub mod progress;
/// Thread list rendering
pub mod render;
/// Animated GIF export
pub mod visualization;
