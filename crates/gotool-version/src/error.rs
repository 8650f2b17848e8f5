//! Error types for gotool-version

/// Result type for gotool-version operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single candidate string is not a Go module version.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("version '{version}' is missing leading \"v\"")]
    MissingPrefix { version: String },

    #[error("version '{version}' contains build metadata")]
    ContainsBuildMetadata { version: String },

    #[error("version '{version}' is not a valid semantic version: {source}")]
    InvalidSemanticVersion {
        version: String,
        #[source]
        source: semver::Error,
    },
}

/// Discriminant of [`ParseError`] for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    MissingPrefix,
    ContainsBuildMetadata,
    InvalidSemanticVersion,
}

impl ParseError {
    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::MissingPrefix { .. } => ParseErrorKind::MissingPrefix,
            Self::ContainsBuildMetadata { .. } => ParseErrorKind::ContainsBuildMetadata,
            Self::InvalidSemanticVersion { .. } => ParseErrorKind::InvalidSemanticVersion,
        }
    }

    /// The rejected input, exactly as given.
    pub fn version(&self) -> &str {
        match self {
            Self::MissingPrefix { version }
            | Self::ContainsBuildMetadata { version }
            | Self::InvalidSemanticVersion { version, .. } => version,
        }
    }
}

/// Errors that can occur in gotool-version operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The collection holds only prereleases and pseudo-versions.
    #[error("no stable Go versions were found in the collection")]
    NoStableVersion,

    /// The collection holds no versions at all.
    #[error("no Go versions were found in the collection")]
    NoVersions,
}

impl Error {
    /// Whether the error means the collection had nothing to offer.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoStableVersion | Self::NoVersions)
    }
}
