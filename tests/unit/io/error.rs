//! Tests for error formatting and chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;
    use threadart::io::error::{ThreadArtError, io_error, state_error, validation_error};

    // Tests validation errors name the parameter, value and reason
    // Verified by omitting the value from the message
    #[test]
    fn test_validation_display() {
        let err = validation_error("nails_quantity", &2, &"at least 3 nails are required");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'nails_quantity' = '2': at least 3 nails are required"
        );
        assert!(err.source().is_none());
    }

    // Tests state errors carry their reason
    // Verified by formatting the debug representation
    #[test]
    fn test_state_display() {
        let err = state_error(&"line dictionary is empty");
        assert_eq!(err.to_string(), "Invalid state: line dictionary is empty");
        assert!(matches!(err, ThreadArtError::State { .. }));
    }

    // Tests wrapped I/O failures expose their cause
    // Verified by returning None from source
    #[test]
    fn test_source_chain() {
        let err = ThreadArtError::ImageLoad {
            path: PathBuf::from("missing.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("missing.png"));
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("no such file".to_string())
        );
    }

    // Tests bare I/O errors convert into file system errors
    // Verified by converting into a state error
    #[test]
    fn test_from_io_error() {
        let err: ThreadArtError = io::Error::other("disk full").into();
        assert!(matches!(
            err,
            ThreadArtError::FileSystem {
                operation: "unknown",
                ..
            }
        ));
        assert!(err.source().is_some());
    }

    // Tests unusable command-line targets report as path validation
    // Verified by building a file system error instead
    #[test]
    fn test_io_error_helper() {
        let err = io_error("Target must be an image file or directory");
        assert!(matches!(
            err,
            ThreadArtError::Validation {
                parameter: "path",
                ..
            }
        ));
    }
}
