//! Error types for gotool-core

/// Result type for gotool-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gotool-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A version source could not be reached or answered with an error.
    #[error("HTTP error fetching {url}: {message}")]
    Http { url: String, message: String },

    /// The source returned versions but no repository to install from.
    #[error("No source repository found for package '{package}'")]
    MissingRepository { package: String },

    /// An environment variable held an unusable value.
    #[error("Invalid value for {var}: {message}")]
    InvalidSetting { var: String, message: String },

    /// A resolver step was attempted from the wrong state.
    #[error("Cannot {step} while {state}")]
    OutOfOrder {
        step: &'static str,
        state: &'static str,
    },

    // Transparent wrappers for underlying crate errors
    /// Version error from gotool-version
    #[error(transparent)]
    Version(#[from] gotool_version::Error),

    /// Manifest error from gotool-manifest
    #[error(transparent)]
    Manifest(#[from] gotool_manifest::Error),
}

impl Error {
    /// Whether the error means "nothing there" rather than "something broke".
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Version(e) => e.is_not_found(),
            Self::Manifest(e) => e.is_not_found(),
            _ => false,
        }
    }
}
