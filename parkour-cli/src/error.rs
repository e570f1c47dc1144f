//! Error types for block scaffolding

use std::path::PathBuf;
use thiserror::Error;

/// Result type for parkour operations.
pub type ParkourResult<T> = Result<T, ParkourError>;

/// Errors that can occur while collecting input or generating block files.
#[derive(Debug, Error)]
pub enum ParkourError {
    /// Block name missing or malformed, or a required argument was not supplied.
    #[error("{0}")]
    Validation(String),

    /// The project (theme) root does not exist.
    #[error("Theme directory not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The user declined the confirmation prompt.
    #[error("Block creation cancelled.")]
    UserAbort,

    /// A directory could not be created or a file could not be written.
    #[error("failed to {step} {}: {source}", path.display())]
    Generation {
        /// What was being attempted (e.g. "create directory", "write")
        step: &'static str,
        /// Path the step was operating on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A template could not be rendered.
    #[error("failed to render template '{template}': {source}")]
    Render {
        /// Template kind
        template: &'static str,
        /// Underlying render error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// A template could not be loaded or compiled.
    #[error("failed to load template '{template}': {reason}")]
    Template {
        /// Template kind
        template: &'static str,
        /// What went wrong
        reason: String,
    },

    /// Terminal interaction failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ParkourError {
    /// Build a validation error from any message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error is a user cancellation rather than a failure.
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::UserAbort)
    }
}

impl From<figment::Error> for ParkourError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl From<dialoguer::Error> for ParkourError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_not_found_message() {
        let err = ParkourError::ProjectNotFound(PathBuf::from("/srv/themes/missing"));
        assert_eq!(
            err.to_string(),
            "Theme directory not found: /srv/themes/missing"
        );
    }

    #[test]
    fn test_generation_message_names_step_and_path() {
        let err = ParkourError::Generation {
            step: "write",
            path: PathBuf::from("blocks/hero/block.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("write"));
        assert!(message.contains("blocks/hero/block.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_abort_is_not_a_failure() {
        assert!(ParkourError::UserAbort.is_abort());
        assert!(!ParkourError::validation("nope").is_abort());
    }
}
