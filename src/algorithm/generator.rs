use crate::algorithm::cancellation::CancellationToken;
use crate::algorithm::config::{GenerationArgs, GeneratorConfig};
use crate::algorithm::dictionary::LineDictionary;
use crate::algorithm::planner::{GreedyPathPlanner, Path, StopReason};
use crate::io::error::Result;
use crate::io::image::load_canvas;
use crate::io::render::render_paths;
use crate::io::visualization::ThreadAnimation;
use crate::spatial::canvas::Canvas;
use crate::spatial::nails::{Nail, place_nails};
use image::GrayImage;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Summary of a finished run
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationStats {
    /// Number of threads selected
    pub total_lines: usize,
    /// Cumulative pixel count of every selected line
    pub thread_length: u64,
    /// Wall-clock time from request to result
    pub total_time: Duration,
    /// Why planning stopped
    pub stop_reason: StopReason,
}

/// Exclusively owned context of one generation run
///
/// Built in order: preprocessed canvas, nails, line table, planner. Nothing is
/// shared with other runs, so independent generations may proceed on
/// separate threads.
pub struct ThreadGenerator {
    config: GeneratorConfig,
    canvas_size: u32,
    nails: Vec<Nail>,
    dictionary: LineDictionary,
    planner: GreedyPathPlanner,
    started: Instant,
}

impl ThreadGenerator {
    /// Load and preprocess the configured image, then build the run context
    ///
    /// # Errors
    ///
    /// Returns an error if the source image cannot be opened or decoded
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let started = Instant::now();
        let canvas = load_canvas(
            &config.image_source,
            config.image_contrast,
            config.canvas_size,
        )?;
        Ok(Self::assemble(config, canvas, started))
    }

    /// Build the run context around an already prepared canvas
    ///
    /// The canvas replaces the configured image and its width replaces the
    /// configured canvas size.
    pub fn from_canvas(config: GeneratorConfig, canvas: Canvas) -> Self {
        Self::assemble(config, canvas, Instant::now())
    }

    fn assemble(config: GeneratorConfig, canvas: Canvas, started: Instant) -> Self {
        let canvas_size = canvas.width();
        let nails = place_nails(canvas.width(), canvas.height(), config.nails_quantity);

        let dictionary = LineDictionary::build(&nails);
        tracing::debug!(
            lines = dictionary.len(),
            pixels = dictionary.total_pixels(),
            "line dictionary built"
        );

        let planner = GreedyPathPlanner::new(
            canvas,
            config.nails_quantity,
            config.starting_nail,
            config.minimum_difference,
            config.brightness_factor,
        );

        Self {
            config,
            canvas_size,
            nails,
            dictionary,
            planner,
            started,
        }
    }

    /// Lay a single thread, or return `None` when nothing is left to cover
    pub fn execute_iteration(&mut self) -> Option<Path> {
        self.planner.execute_iteration(&self.dictionary)
    }

    /// Run the planner to completion under `cancel`
    pub fn run(&mut self, cancel: &CancellationToken) -> StopReason {
        self.planner
            .run(&self.dictionary, self.config.max_paths, cancel)
    }

    /// Run the planner to completion, reporting every laid thread
    pub fn run_observed<F>(&mut self, cancel: &CancellationToken, on_thread: F) -> StopReason
    where
        F: FnMut(usize, Path),
    {
        self.planner
            .run_observed(&self.dictionary, self.config.max_paths, cancel, on_thread)
    }

    /// Resolved parameters of this run
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Nail coordinates, indexed by nail number
    pub fn nails(&self) -> &[Nail] {
        &self.nails
    }

    /// Line table of this run
    pub const fn dictionary(&self) -> &LineDictionary {
        &self.dictionary
    }

    /// Working canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        self.planner.canvas()
    }

    /// Threads selected so far
    pub fn paths(&self) -> &[Path] {
        self.planner.paths()
    }

    /// Stop planning and package the result
    ///
    /// The working canvas is dropped here.
    pub fn finish(self, stop_reason: StopReason) -> Generation {
        let paths = self.planner.into_paths();
        let thread_length = paths
            .iter()
            .filter_map(|path| self.dictionary.get(path.pair()))
            .map(|line| line.len() as u64)
            .sum();

        let stats = GenerationStats {
            total_lines: paths.len(),
            thread_length,
            total_time: self.started.elapsed(),
            stop_reason,
        };

        tracing::info!(
            lines = stats.total_lines,
            thread_length = stats.thread_length,
            elapsed_ms = stats.total_time.as_millis() as u64,
            ?stop_reason,
            "generation finished"
        );

        Generation {
            canvas_size: self.canvas_size,
            nails: self.nails,
            dictionary: self.dictionary,
            paths,
            stats,
        }
    }
}

/// Result of one run: the ordered thread list plus what is needed to render it
pub struct Generation {
    canvas_size: u32,
    nails: Vec<Nail>,
    dictionary: LineDictionary,
    paths: Vec<Path>,
    stats: GenerationStats,
}

impl Generation {
    /// Run statistics
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    /// Selected threads in selection order
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Nail coordinates, indexed by nail number
    pub fn nails(&self) -> &[Nail] {
        &self.nails
    }

    /// Line table the threads were selected from
    pub const fn dictionary(&self) -> &LineDictionary {
        &self.dictionary
    }

    /// Side length of the canvas the coordinates refer to
    pub const fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// Render the threads on a fresh white canvas
    ///
    /// # Errors
    ///
    /// Returns a state error if the line table is empty or inconsistent with
    /// the path list
    pub fn render(&self) -> Result<GrayImage> {
        render_paths(&self.dictionary, &self.paths, self.canvas_size)
    }

    /// Animation of the threads being laid
    pub fn animation(&self) -> ThreadAnimation<'_> {
        ThreadAnimation::new(&self.dictionary, &self.paths, self.canvas_size)
    }

    /// Thread length for a physical frame whose nail circle spans `frame_diameter`
    ///
    /// Sums the straight chord between each thread's nails and scales canvas
    /// pixels to the frame's unit.
    pub fn physical_thread_length(&self, frame_diameter: f64) -> f64 {
        let pixels: f64 = self
            .paths
            .iter()
            .filter_map(|path| {
                let start = self.nails.get(path.starting_nail)?;
                let end = self.nails.get(path.ending_nail)?;
                Some(start.distance(*end))
            })
            .sum();
        pixels * frame_diameter / f64::from(self.canvas_size.max(1))
    }
}

/// Generate a thread layout for the requested image
///
/// # Errors
///
/// Returns an error if the arguments fail validation or the image cannot be
/// opened or decoded. No planning state is built in either case.
pub fn generate(args: &GenerationArgs) -> Result<Generation> {
    generate_with_cancel(args, &CancellationToken::new())
}

/// Generate a thread layout, stopping early if `cancel` is raised
///
/// A cancelled run returns the threads laid so far.
///
/// # Errors
///
/// Returns an error under the same conditions as [`generate`]
pub fn generate_with_cancel(
    args: &GenerationArgs,
    cancel: &CancellationToken,
) -> Result<Generation> {
    let config = GeneratorConfig::resolve(args)?;
    tracing::info!(
        image = %config.image_source.display(),
        nails = config.nails_quantity,
        canvas = config.canvas_size,
        max_paths = config.max_paths,
        "starting generation"
    );

    let mut generator = ThreadGenerator::new(config)?;
    let stop_reason = generator.run(cancel);
    Ok(generator.finish(stop_reason))
}
