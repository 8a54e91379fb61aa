use color_histogram::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The source bytes could not be turned into an RGB grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Pixel grid error: {0}")]
    Grid(#[from] GridError),
}

#[derive(Debug, Error, PartialEq)]
pub enum ExportError {
    #[error("No colors selected")]
    NoSelection,

    #[error("No valid color rows in selection")]
    NoValidRows,

    #[error("Unknown export format: {0} (expected hex, py or r)")]
    UnknownFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_invalid_data_url() {
        let error = DecodeError::InvalidDataUrl("missing payload".to_string());
        assert_eq!(error.to_string(), "Invalid data URL: missing payload");
    }

    #[test]
    fn test_decode_error_from_image_error() {
        let image_error = image::load_from_memory(b"nope").unwrap_err();
        let error: DecodeError = image_error.into();
        assert!(matches!(error, DecodeError::Image(_)));
        assert!(error.to_string().starts_with("Image decode error: "));
    }

    #[test]
    fn test_decode_error_from_grid_error() {
        let grid_error = GridError::LengthMismatch {
            expected: 12,
            actual: 3,
        };
        let error: DecodeError = grid_error.into();
        match error {
            DecodeError::Grid(_) => {}
            _ => panic!("Expected Grid variant"),
        }
    }

    #[test]
    fn test_export_error_messages() {
        assert_eq!(ExportError::NoSelection.to_string(), "No colors selected");
        assert_eq!(
            ExportError::NoValidRows.to_string(),
            "No valid color rows in selection"
        );
        assert_eq!(
            ExportError::UnknownFormat("csv".to_string()).to_string(),
            "Unknown export format: csv (expected hex, py or r)"
        );
    }

    #[test]
    fn test_app_error_from_variants() {
        let app_error: AppError = ExportError::NoSelection.into();
        assert!(matches!(app_error, AppError::Export(_)));

        let app_error: AppError = DecodeError::InvalidDataUrl("x".to_string()).into();
        assert_eq!(app_error.to_string(), "Decode error: Invalid data URL: x");
    }
}
