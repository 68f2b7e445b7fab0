//! Tests for error types including source chaining, formatting and path context

#[cfg(test)]
mod tests {
    use seamblend::BlendError;
    use seamblend::io::error::{WithPath, invalid_parameter, invalid_source};
    use std::error::Error;
    use std::path::{Path, PathBuf};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = BlendError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(invalid_source(&"empty").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("ramp_width", &0, &"must be greater than 0");

        let message = error.to_string();
        assert!(message.contains("ramp_width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be greater than 0"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = BlendError::ImageExport {
            path: PathBuf::from("/restricted/output_blended.jpg"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output_blended.jpg"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }

    // Tests batch failure formatting
    // Verified by swapping failed and total
    #[test]
    fn test_partial_failure_error() {
        let error = BlendError::PartialFailure {
            failed: 2,
            total: 5,
        };
        assert_eq!(error.to_string(), "2 of 5 files could not be blended");
    }

    // Tests unsupported targets name the path and reason
    // Verified by omitting the reason
    #[test]
    fn test_unsupported_target_error() {
        let error = BlendError::UnsupportedTarget {
            path: PathBuf::from("notes.txt"),
            reason: "file is not a supported image type",
        };
        let message = error.to_string();
        assert!(message.contains("notes.txt"));
        assert!(message.contains("not a supported image type"));
    }

    // Tests with_path fills in unknown paths from From conversions
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_with_path_replaces_unknown() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        let error = result
            .with_path(Path::new("photos/cliff.png"))
            .expect_err("error should propagate");
        match error {
            BlendError::FileSystem { path, .. } => {
                assert_eq!(path, PathBuf::from("photos/cliff.png"));
            }
            other => unreachable!("Expected FileSystem error, got {other:?}"),
        }
    }

    // Tests with_path keeps a path that is already known
    // Verified by overwriting every path
    #[test]
    fn test_with_path_keeps_known_path() {
        let result: seamblend::Result<()> = Err(BlendError::FileSystem {
            path: PathBuf::from("output"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        });

        let error = result
            .with_path(Path::new("input.png"))
            .expect_err("error should propagate");
        assert!(error.to_string().contains("'output'"));
    }
}
