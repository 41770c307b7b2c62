//! Error types for preprocessing, planning, rendering and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum ThreadArtError {
    /// Configuration is missing a mandatory field or is internally inconsistent
    Validation {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Source image could not be opened or read
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Source image could not be decoded
    ImageDecode {
        /// Path to the image file
        path: PathBuf,
        /// Underlying decoding error
        source: image::ImageError,
    },

    /// Operation requested before the state it depends on exists
    State {
        /// Description of the missing state
        reason: String,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize the path list
    Serialization {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl fmt::Display for ThreadArtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to open image '{}': {source}", path.display())
            }
            Self::ImageDecode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::State { reason } => write!(f, "Invalid state: {reason}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize paths to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ThreadArtError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ImageDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::Validation { .. } | Self::State { .. } => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, ThreadArtError>;

impl From<std::io::Error> for ThreadArtError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a validation error
pub fn validation_error(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ThreadArtError {
    ThreadArtError::Validation {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a state error
pub fn state_error(reason: &impl ToString) -> ThreadArtError {
    ThreadArtError::State {
        reason: reason.to_string(),
    }
}

/// Create an error for an unusable command-line path
pub fn io_error(msg: &str) -> ThreadArtError {
    validation_error("path", &"", &msg)
}
