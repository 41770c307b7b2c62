//! Replays a thread list onto a blank canvas

use crate::algorithm::dictionary::LineDictionary;
use crate::algorithm::planner::Path;
use crate::io::configuration::RENDER_DARKEN_STEP;
use crate::io::error::{Result, state_error};
use crate::spatial::canvas::Canvas;
use image::GrayImage;

/// Draw threads on a white canvas of `canvas_size` pixels
///
/// Each thread darkens every pixel it crosses by a fixed step, so crossings
/// accumulate the way overlapping physical threads do.
///
/// # Errors
///
/// Returns a state error if:
/// - The line table is empty
/// - A path references a nail pair the table does not contain
pub fn render_paths(
    dictionary: &LineDictionary,
    paths: &[Path],
    canvas_size: u32,
) -> Result<GrayImage> {
    Ok(render_canvas(dictionary, paths, canvas_size)?.to_gray_image())
}

/// Same as [`render_paths`] but keeps the result as a [`Canvas`]
///
/// # Errors
///
/// Returns a state error under the same conditions as [`render_paths`]
pub fn render_canvas(
    dictionary: &LineDictionary,
    paths: &[Path],
    canvas_size: u32,
) -> Result<Canvas> {
    if dictionary.is_empty() {
        return Err(state_error(&"line dictionary is empty"));
    }

    let mut canvas = Canvas::white(canvas_size, canvas_size);
    for path in paths {
        draw_path(&mut canvas, dictionary, *path)?;
    }
    Ok(canvas)
}

/// Darken the pixels of a single thread
///
/// # Errors
///
/// Returns a state error if the path's nail pair is not in the table
pub fn draw_path(canvas: &mut Canvas, dictionary: &LineDictionary, path: Path) -> Result<()> {
    let line = dictionary.get(path.pair()).ok_or_else(|| {
        state_error(&format!(
            "no line between nails {} and {}",
            path.starting_nail, path.ending_nail
        ))
    })?;
    canvas.darken(line, RENDER_DARKEN_STEP);
    Ok(())
}
