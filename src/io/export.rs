//! JSON export of a finished generation

use crate::algorithm::generator::{Generation, GenerationStats};
use crate::algorithm::planner::Path;
use crate::io::error::{Result, ThreadArtError};
use crate::spatial::nails::Nail;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// Serializable view of a generation, enough to lace a physical frame
#[derive(Debug, Serialize)]
pub struct PathsDocument<'a> {
    /// Side length of the canvas the coordinates refer to
    pub canvas_size: u32,
    /// Nail coordinates, indexed by nail number
    pub nails: &'a [Nail],
    /// Threads in lacing order
    pub paths: &'a [Path],
    /// Run statistics
    pub stats: &'a GenerationStats,
}

impl<'a> PathsDocument<'a> {
    /// Borrow the parts of a generation that get exported
    pub fn from_generation(generation: &'a Generation) -> Self {
        Self {
            canvas_size: generation.canvas_size(),
            nails: generation.nails(),
            paths: generation.paths(),
            stats: generation.stats(),
        }
    }
}

/// Write the path list and stats as pretty-printed JSON
///
/// # Errors
///
/// Returns an error if the file cannot be created or serialization fails
pub fn export_paths_json(generation: &Generation, output_path: &std::path::Path) -> Result<()> {
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
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &PathsDocument::from_generation(generation))
        .map_err(|e| ThreadArtError::Serialization {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    writer.flush().map_err(|e| ThreadArtError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "flush file",
        source: e,
    })
}
