//! Error types for gotool-manifest

/// Result type for gotool-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// One missing or malformed manifest field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProblem {
    /// JSON path of the field, e.g. `manifestPayload.packageName`.
    pub field: String,
    /// `None` when the field is missing, otherwise why it was rejected.
    pub reason: Option<String>,
}

impl FieldProblem {
    pub fn missing(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: None,
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: Some(reason.into()),
        }
    }
}

impl std::fmt::Display for FieldProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            None => write!(f, "{} is missing", self.field),
            Some(reason) => write!(f, "{} is invalid: {}", self.field, reason),
        }
    }
}

fn join_problems(problems: &[FieldProblem]) -> String {
    problems
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur in gotool-manifest operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading or writing the manifest file failed.
    #[error(transparent)]
    Fs(#[from] gotool_fs::Error),

    /// The manifest document is not well-formed JSON of the expected shape.
    #[error("manifest encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Every field that failed validation, never just the first.
    #[error("invalid manifest: {}", join_problems(.problems))]
    Validation { problems: Vec<FieldProblem> },
}

impl Error {
    /// Whether the manifest file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fs(e) if e.is_not_found())
    }

    /// The fields named by a validation failure, empty for other errors.
    pub fn invalid_fields(&self) -> Vec<&str> {
        match self {
            Self::Validation { problems } => problems.iter().map(|p| p.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}
