//! Error handling module for the dataset generator.
//!
//! Every failure is fatal for the run: errors propagate up to `main`, which
//! reports them and exits non-zero. There are no retries.

use std::path::Path;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
    pub const IMAGE_DIRECTORY_ERROR: &str = "IMAGE_DIRECTORY_ERROR";
    pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
    pub const MISSING_REFERENCE: &str = "MISSING_REFERENCE";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Generator error type.
#[derive(Debug)]
pub enum GenError {
    /// Invalid or unparseable configuration value
    Config(String),
    /// Image directory missing or unreadable
    ImageDirectory(String),
    /// Output file could not be written
    Output(String),
    /// A collection must reference records of an empty collection
    MissingReference(String),
    /// JSON serialization failed
    Serialization(String),
}

impl GenError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            GenError::Config(_) => codes::CONFIG_ERROR,
            GenError::ImageDirectory(_) => codes::IMAGE_DIRECTORY_ERROR,
            GenError::Output(_) => codes::OUTPUT_ERROR,
            GenError::MissingReference(_) => codes::MISSING_REFERENCE,
            GenError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        match self {
            GenError::Config(msg)
            | GenError::ImageDirectory(msg)
            | GenError::Output(msg)
            | GenError::MissingReference(msg)
            | GenError::Serialization(msg) => msg,
        }
    }

    /// Wrap an I/O failure on the image directory.
    pub fn image_dir(path: &Path, err: std::io::Error) -> Self {
        tracing::error!("Image directory error at {:?}: {:?}", path, err);
        GenError::ImageDirectory(format!("{}: {}", path.display(), err))
    }

    /// Wrap an I/O failure while writing the output file.
    pub fn output(path: &Path, err: std::io::Error) -> Self {
        tracing::error!("Output error at {:?}: {:?}", path, err);
        GenError::Output(format!("{}: {}", path.display(), err))
    }
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for GenError {}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            tracing::error!("Write error: {:?}", err);
            return GenError::Output(format!("Write error: {}", err));
        }
        tracing::error!("JSON error: {:?}", err);
        GenError::Serialization(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_message() {
        let err = GenError::Config("CHEEZY_SEED: invalid digit found in string".to_string());
        assert_eq!(
            err.to_string(),
            "CONFIG_ERROR: CHEEZY_SEED: invalid digit found in string"
        );
    }

    #[test]
    fn test_image_dir_error_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = GenError::image_dir(Path::new("data/images"), io);
        assert_eq!(err.error_code(), codes::IMAGE_DIRECTORY_ERROR);
        assert!(err.message().contains("data/images"));
    }

    #[test]
    fn test_json_syntax_error_maps_to_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GenError = json_err.into();
        assert_eq!(err.error_code(), codes::SERIALIZATION_ERROR);
    }
}
