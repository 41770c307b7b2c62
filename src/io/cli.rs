//! Command-line interface for generating thread layouts from one image or a directory

use crate::algorithm::cancellation::CancellationToken;
use crate::algorithm::config::{GenerationArgs, GeneratorConfig};
use crate::algorithm::generator::ThreadGenerator;
use crate::io::configuration::{
    DEFAULT_BRIGHTNESS_FACTOR, DEFAULT_CANVAS_SIZE, DEFAULT_IMAGE_CONTRAST, DEFAULT_MAX_PATHS,
    DEFAULT_MINIMUM_DIFFERENCE, DEFAULT_NAILS_QUANTITY, DEFAULT_STARTING_NAIL,
    GIF_FRAME_DELAY_MS, PATHS_SUFFIX, RENDER_SUFFIX, THREADS_PER_FRAME,
};
use crate::io::error::{Result, ThreadArtError, io_error};
use crate::io::export::export_paths_json;
use crate::io::image::save_gray_png;
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Image extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "bmp", "gif", "webp"];

#[derive(Parser)]
#[command(name = "threadart")]
#[command(
    author,
    version,
    about = "Generate string-art thread layouts from images"
)]
/// Command-line arguments for the thread layout generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Number of nails around the circular frame
    #[arg(short, long, default_value_t = DEFAULT_NAILS_QUANTITY)]
    pub nails: usize,

    /// Side length of the working canvas in pixels
    #[arg(short, long, default_value_t = DEFAULT_CANVAS_SIZE)]
    pub canvas_size: u32,

    /// Maximum number of threads to lay
    #[arg(short, long, default_value_t = DEFAULT_MAX_PATHS)]
    pub max_paths: usize,

    /// Nail the first thread leaves from
    #[arg(short, long, default_value_t = DEFAULT_STARTING_NAIL)]
    pub starting_nail: usize,

    /// Minimum index distance between the two nails of a thread
    #[arg(short = 'd', long, default_value_t = DEFAULT_MINIMUM_DIFFERENCE)]
    pub minimum_difference: usize,

    /// Brightness added under every laid thread
    #[arg(short, long, default_value_t = DEFAULT_BRIGHTNESS_FACTOR)]
    pub brightness: u8,

    /// Contrast adjustment applied before planning
    #[arg(long, default_value_t = DEFAULT_IMAGE_CONTRAST)]
    pub contrast: f32,

    /// Stop planning each image after this many seconds
    #[arg(short, long, value_name = "SECONDS")]
    pub time_limit: Option<u64>,

    /// Diameter of the physical nail circle, used to report thread length
    #[arg(short = 'D', long, value_name = "LENGTH")]
    pub frame_diameter: Option<f64>,

    /// Export an animated GIF of the threads being laid
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process images even if output exists
    #[arg(long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Per-image time budget
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit.map(Duration::from_secs)
    }

    /// Generation request for a single image
    pub fn generation_args(&self, image_source: &Path) -> GenerationArgs {
        GenerationArgs {
            nails_quantity: Some(self.nails),
            canvas_size: Some(self.canvas_size),
            max_paths: Some(self.max_paths),
            starting_nail: Some(self.starting_nail),
            minimum_difference: Some(self.minimum_difference),
            brightness_factor: Some(self.brightness),
            image_contrast: Some(self.contrast),
            image_source: Some(image_source.to_path_buf()),
        }
    }
}

/// Orchestrates batch processing of images with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process images according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, generation or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            tracing::info!("nothing to process");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Images the target resolves to, sorted, minus those with existing output
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a file nor a readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files: Vec<PathBuf> = list_directory(&self.cli.target)?
                .into_iter()
                .filter(|path| is_source_image(path) && self.should_process_file(path))
                .collect();
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = render_output_path(input_path);
        if output_path.exists() {
            tracing::info!(input = %input_path.display(), "skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path, index: usize) -> Result<()> {
        let config = GeneratorConfig::resolve(&self.cli.generation_args(input_path))?;

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, input_path, config.max_paths);
        }
        tracing::info!(
            input = %input_path.display(),
            nails = config.nails_quantity,
            max_paths = config.max_paths,
            "processing image"
        );

        let mut generator = ThreadGenerator::new(config)?;

        let cancel = CancellationToken::new();
        let deadline = self.cli.time_limit().map(|limit| Instant::now() + limit);
        let stop_reason = generator.run_observed(&cancel, |threads, _| {
            if let Some(ref pm) = self.progress_manager {
                pm.update_threads(index, threads);
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                cancel.cancel();
            }
        });

        let generation = generator.finish(stop_reason);
        let stats = generation.stats();

        save_gray_png(&generation.render()?, &render_output_path(input_path))?;
        export_paths_json(&generation, &paths_output_path(input_path))?;

        if self.cli.animate && generation.paths().is_empty() {
            tracing::warn!(input = %input_path.display(), "no threads laid, skipping animation");
        } else if self.cli.animate {
            generation.animation().export_gif(
                &animation_output_path(input_path),
                THREADS_PER_FRAME,
                GIF_FRAME_DELAY_MS,
            )?;
        }

        if let Some(diameter) = self.cli.frame_diameter {
            tracing::info!(
                input = %input_path.display(),
                thread_length = generation.physical_thread_length(diameter),
                "physical thread length"
            );
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(
                index,
                stats.total_lines,
                &format!("{:?} in {:.1?}", stats.stop_reason, stats.total_time),
            );
        }

        Ok(())
    }
}

/// Paths of every entry in `dir`, unsorted
///
/// # Errors
///
/// Returns a file system error naming `dir` if it cannot be read
pub fn list_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| ThreadArtError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    };

    std::fs::read_dir(dir)
        .map_err(read_error)?
        .map(|entry| entry.map(|dir_entry| dir_entry.path()).map_err(read_error))
        .collect()
}

/// Whether a path looks like a source image rather than generated output
pub fn is_source_image(path: &Path) -> bool {
    let supported = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    let generated = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(RENDER_SUFFIX));
    supported && !generated
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Where the rendered preview for `input_path` is written
pub fn render_output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, RENDER_SUFFIX, "png")
}

/// Where the JSON path list for `input_path` is written
pub fn paths_output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, PATHS_SUFFIX, "json")
}

/// Where the thread animation for `input_path` is written
pub fn animation_output_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, RENDER_SUFFIX, "gif")
}
