//! Animated GIF of threads being laid in selection order

use crate::algorithm::dictionary::LineDictionary;
use crate::algorithm::planner::Path;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, ThreadArtError, state_error};
use crate::io::render::draw_path;
use crate::spatial::canvas::Canvas;
use image::{Delay, Frame, RgbaImage};

/// Replays a finished thread list as animation frames
pub struct ThreadAnimation<'a> {
    dictionary: &'a LineDictionary,
    paths: &'a [Path],
    canvas_size: u32,
}

impl<'a> ThreadAnimation<'a> {
    /// Prepare an animation over `paths`
    pub const fn new(dictionary: &'a LineDictionary, paths: &'a [Path], canvas_size: u32) -> Self {
        Self {
            dictionary,
            paths,
            canvas_size,
        }
    }

    /// Number of frames produced when `threads_per_frame` threads are added per frame
    ///
    /// One blank leading frame plus one frame per started chunk of threads.
    pub fn frame_count(&self, threads_per_frame: usize) -> usize {
        1 + self.paths.len().div_ceil(threads_per_frame.max(1))
    }

    /// Render every frame
    ///
    /// # Errors
    ///
    /// Returns a state error if a path is missing from the line table
    pub fn frames(&self, threads_per_frame: usize, frame_delay_ms: u32) -> Result<Vec<Frame>> {
        let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let threads_per_frame = threads_per_frame.max(1);

        let mut canvas = Canvas::white(self.canvas_size, self.canvas_size);
        let mut frames = Vec::with_capacity(self.frame_count(threads_per_frame));
        frames.push(Self::frame(&canvas, delay_ms));

        for chunk in self.paths.chunks(threads_per_frame) {
            for path in chunk {
                draw_path(&mut canvas, self.dictionary, *path)?;
            }
            frames.push(Self::frame(&canvas, delay_ms));
        }

        Ok(frames)
    }

    fn frame(canvas: &Canvas, delay_ms: u32) -> Frame {
        let rgba: RgbaImage = image::DynamicImage::ImageLuma8(canvas.to_gray_image()).to_rgba8();
        Frame::from_parts(rgba, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
    }

    /// Export the animation as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are no threads to animate
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        output_path: &std::path::Path,
        threads_per_frame: usize,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.paths.is_empty() {
            return Err(state_error(&"no threads captured for animation"));
        }

        let frames = self.frames(threads_per_frame, frame_delay_ms)?;

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ThreadArtError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| ThreadArtError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| ThreadArtError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })
    }
}
