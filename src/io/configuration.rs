//! Generation defaults and output settings

// Defaults applied when the caller leaves a field unset
/// Number of nails placed around the circular frame
pub const DEFAULT_NAILS_QUANTITY: usize = 300;
/// Side length of the square working canvas in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 800;
/// Upper bound on the number of selected threads
pub const DEFAULT_MAX_PATHS: usize = 10_000;
/// Nail the first thread starts from
pub const DEFAULT_STARTING_NAIL: usize = 0;
/// Minimum circular index distance between the two nails of a thread
pub const DEFAULT_MINIMUM_DIFFERENCE: usize = 10;
/// Amount added to every canvas pixel covered by a selected thread
pub const DEFAULT_BRIGHTNESS_FACTOR: u8 = 50;
/// Contrast adjustment applied during preprocessing
pub const DEFAULT_IMAGE_CONTRAST: f32 = 40.0;

// Smallest frame that still has a chord which is not an edge
/// Minimum number of nails accepted by validation
pub const MIN_NAILS_QUANTITY: usize = 3;
/// Minimum canvas side length accepted by validation
pub const MIN_CANVAS_SIZE: u32 = 2;

/// Background intensity for masked and unrendered pixels
pub const BACKGROUND_INTENSITY: u8 = 255;
/// Intensity read for coordinates past the raster edge, so they count as uncovered
pub const OFF_RASTER_INTENSITY: u8 = 0;
/// Amount a rendered thread darkens every pixel it crosses
pub const RENDER_DARKEN_STEP: u8 = 20;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to rendered preview filenames
pub const RENDER_SUFFIX: &str = "_threads";
/// Suffix added to exported path list filenames
pub const PATHS_SUFFIX: &str = "_paths";
/// Number of threads drawn between two animation frames
pub const THREADS_PER_FRAME: usize = 50;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
