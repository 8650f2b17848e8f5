//! Error types for gotool-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Process exit codes.
pub mod exit_code {
    pub const FAILURE: i32 = 1;
    /// Also what clap exits with for malformed arguments.
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const INVALID_MANIFEST: i32 = 4;
    pub const FETCH_FAILED: i32 = 5;
}

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from gotool-core
    #[error(transparent)]
    Core(#[from] gotool_core::Error),

    /// Error from gotool-manifest
    #[error(transparent)]
    Manifest(#[from] gotool_manifest::Error),

    /// Error from gotool-version
    #[error(transparent)]
    Version(#[from] gotool_version::Error),

    /// Writing command output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A command argument parsed but was rejected
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl CliError {
    /// Create an error for an argument that clap accepted but the command cannot use
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// The exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Core(gotool_core::Error::Http { .. }) => exit_code::FETCH_FAILED,
            Self::Core(gotool_core::Error::Manifest(e)) | Self::Manifest(e) => manifest_exit_code(e),
            Self::Core(e) if e.is_not_found() => exit_code::NOT_FOUND,
            Self::Version(e) if e.is_not_found() => exit_code::NOT_FOUND,
            Self::InvalidArgument { .. } => exit_code::USAGE,
            _ => exit_code::FAILURE,
        }
    }
}

fn manifest_exit_code(err: &gotool_manifest::Error) -> i32 {
    match err {
        e if e.is_not_found() => exit_code::NOT_FOUND,
        gotool_manifest::Error::Validation { .. } | gotool_manifest::Error::Encoding(_) => {
            exit_code::INVALID_MANIFEST
        }
        _ => exit_code::FAILURE,
    }
}
