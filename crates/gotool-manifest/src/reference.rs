//! Resolved git references.

use crate::error::{Error, FieldProblem, Result};

/// A named git reference and the commit it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitReference {
    name: String,
    hash: String,
}

impl GitReference {
    /// Create a reference, validating both parts.
    ///
    /// The hash must be a full SHA-1 (40) or SHA-256 (64) hex object id.
    pub fn new(name: impl Into<String>, hash: impl Into<String>) -> Result<Self> {
        let reference = Self {
            name: name.into(),
            hash: hash.into(),
        };

        let problems = reference.problems("gitReference");
        if problems.is_empty() {
            Ok(reference)
        } else {
            Err(Error::Validation { problems })
        }
    }

    /// Reference name, e.g. `v0.6.0` or `refs/tags/v0.6.0`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full hex object id.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub(crate) fn from_parts(name: String, hash: String) -> Self {
        Self { name, hash }
    }

    /// Field problems of this reference, reported under `prefix`.
    pub(crate) fn problems(&self, prefix: &str) -> Vec<FieldProblem> {
        let mut problems = Vec::new();

        if self.name.trim().is_empty() {
            problems.push(FieldProblem::missing(format!("{prefix}.name")));
        }

        if self.hash.is_empty() {
            problems.push(FieldProblem::missing(format!("{prefix}.hash")));
        } else if let Some(reason) = hash_problem(&self.hash) {
            problems.push(FieldProblem::invalid(format!("{prefix}.hash"), reason));
        }

        problems
    }
}

fn hash_problem(hash: &str) -> Option<String> {
    if !matches!(hash.len(), 40 | 64) {
        return Some(format!("expected 40 or 64 hex characters, found {}", hash.len()));
    }
    if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
        return Some("contains non-hexadecimal characters".to_string());
    }
    None
}

impl std::fmt::Display for GitReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.hash, self.name)
    }
}
