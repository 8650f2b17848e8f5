//! The manifest value and its persistence.

use gotool_fs::{DataDir, FsGateway, Gateway};
use url::Url;

use crate::error::{Error, FieldProblem, Result};
use crate::reference::GitReference;
use crate::schema::SchemaVersion;
use crate::wire::{Document, Payload, RawDocument, RawPayload, Reference};

const MANIFEST_VERSION: &str = "manifestVersion";
const MANIFEST_PAYLOAD: &str = "manifestPayload";
const PLUGIN_NAME: &str = "manifestPayload.pluginName";
const PACKAGE_NAME: &str = "manifestPayload.packageName";
const GIT_REPOSITORY: &str = "manifestPayload.gitRepository";
const GIT_REFERENCE: &str = "manifestPayload.gitReference";

/// Immutable record of one plugin installation.
///
/// Values are never modified in place; [`Manifest::with_git_reference`]
/// derives a new manifest instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    schema_version: SchemaVersion,
    plugin_name: String,
    package_name: String,
    git_repository: Url,
    git_reference: Option<GitReference>,
}

impl Manifest {
    /// Create a manifest at the current schema version with no git
    /// reference.
    pub fn new(plugin_name: impl Into<String>, package_name: impl Into<String>, git_repository: Url) -> Self {
        Self {
            schema_version: SchemaVersion::current(),
            plugin_name: plugin_name.into(),
            package_name: package_name.into(),
            git_repository,
            git_reference: None,
        }
    }

    pub fn schema_version(&self) -> &SchemaVersion {
        &self.schema_version
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// The Go package path, e.g. `github.com/abice/go-enum`.
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn git_repository(&self) -> &Url {
        &self.git_repository
    }

    /// The resolved git reference, `None` until one is attached.
    pub fn git_reference(&self) -> Option<&GitReference> {
        self.git_reference.as_ref()
    }

    /// Copy of this manifest carrying `reference`. `self` is left unchanged.
    pub fn with_git_reference(&self, reference: GitReference) -> Self {
        Self {
            git_reference: Some(reference),
            ..self.clone()
        }
    }

    /// Read and validate `<data_dir>/plugins/<plugin_name>/manifest.json`.
    pub fn read(data_dir: &DataDir, plugin_name: &str) -> Result<Self> {
        Self::read_from(&FsGateway, data_dir, plugin_name)
    }

    /// [`Manifest::read`] through an arbitrary gateway.
    pub fn read_from(gateway: &dyn Gateway, data_dir: &DataDir, plugin_name: &str) -> Result<Self> {
        let path = data_dir.manifest_path(plugin_name);
        tracing::debug!(path = %path.display(), "Reading manifest");

        let data = gateway.read(&path)?;
        Self::from_json(&data)
    }

    /// Encode and store the manifest at
    /// `<data_dir>/plugins/<plugin_name>/manifest.json`.
    pub fn write(&self, data_dir: &DataDir, plugin_name: &str) -> Result<()> {
        self.write_to(&FsGateway, data_dir, plugin_name)
    }

    /// [`Manifest::write`] through an arbitrary gateway.
    ///
    /// A manifest that would not pass [`Manifest::read`] is rejected and
    /// nothing is written.
    pub fn write_to(&self, gateway: &dyn Gateway, data_dir: &DataDir, plugin_name: &str) -> Result<()> {
        let problems = self.problems();
        if !problems.is_empty() {
            return Err(Error::Validation { problems });
        }

        let path = data_dir.manifest_path(plugin_name);
        let mut content = self.to_json()?;
        content.push('\n');

        gateway.write(&path, content.as_bytes())?;
        tracing::debug!(path = %path.display(), plugin = %self.plugin_name, "Wrote manifest");

        Ok(())
    }

    /// Decode and validate a manifest document.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: RawDocument = serde_json::from_slice(data)?;
        Self::from_raw(raw)
    }

    /// Encode the manifest as pretty-printed JSON.
    ///
    /// The schema version keeps its original text and an unresolved git
    /// reference is omitted rather than written as `null`.
    pub fn to_json(&self) -> Result<String> {
        let document = Document {
            manifest_version: self.schema_version.original(),
            manifest_payload: Payload {
                plugin_name: &self.plugin_name,
                package_name: &self.package_name,
                git_repository: self.git_repository.as_str(),
                git_reference: self.git_reference.as_ref().map(|r| Reference {
                    name: r.name(),
                    hash: r.hash(),
                }),
            },
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }

    /// Fields of this value that the decoder would reject.
    fn problems(&self) -> Vec<FieldProblem> {
        let mut problems = Vec::new();
        for (value, field) in [(&self.plugin_name, PLUGIN_NAME), (&self.package_name, PACKAGE_NAME)] {
            if value.trim().is_empty() {
                problems.push(FieldProblem::missing(field));
            }
        }
        if let Some(reference) = &self.git_reference {
            problems.extend(reference.problems(GIT_REFERENCE));
        }
        problems
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let mut problems = Vec::new();

        let schema_version = required(raw.manifest_version, MANIFEST_VERSION, &mut problems)
            .and_then(|text| match SchemaVersion::parse(&text) {
                Ok(v) if v.is_supported() => Some(v),
                Ok(v) => {
                    problems.push(FieldProblem::invalid(
                        MANIFEST_VERSION,
                        format!("unsupported schema version '{v}'"),
                    ));
                    None
                }
                Err(reason) => {
                    problems.push(FieldProblem::invalid(MANIFEST_VERSION, reason));
                    None
                }
            });

        let payload = match raw.manifest_payload {
            Some(payload) => validate_payload(payload, &mut problems),
            None => {
                problems.push(FieldProblem::missing(MANIFEST_PAYLOAD));
                None
            }
        };

        match (schema_version, payload) {
            (Some(schema_version), Some(payload)) if problems.is_empty() => Ok(Self {
                schema_version,
                plugin_name: payload.plugin_name,
                package_name: payload.package_name,
                git_repository: payload.git_repository,
                git_reference: payload.git_reference,
            }),
            _ => Err(Error::Validation { problems }),
        }
    }
}

struct ValidPayload {
    plugin_name: String,
    package_name: String,
    git_repository: Url,
    git_reference: Option<GitReference>,
}

fn validate_payload(raw: RawPayload, problems: &mut Vec<FieldProblem>) -> Option<ValidPayload> {
    let plugin_name = required(raw.plugin_name, PLUGIN_NAME, problems);
    let package_name = required(raw.package_name, PACKAGE_NAME, problems);

    let git_repository = required(raw.git_repository, GIT_REPOSITORY, problems).and_then(|text| {
        match Url::parse(&text) {
            Ok(url) => Some(url),
            Err(e) => {
                problems.push(FieldProblem::invalid(GIT_REPOSITORY, e.to_string()));
                None
            }
        }
    });

    let git_reference = raw.git_reference.map(|r| {
        let reference = GitReference::from_parts(r.name.unwrap_or_default(), r.hash.unwrap_or_default());
        problems.extend(reference.problems(GIT_REFERENCE));
        reference
    });

    Some(ValidPayload {
        plugin_name: plugin_name?,
        package_name: package_name?,
        git_repository: git_repository?,
        git_reference,
    })
}

/// A present, non-blank string; records the field as missing otherwise.
fn required(value: Option<String>, field: &str, problems: &mut Vec<FieldProblem>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            problems.push(FieldProblem::missing(field));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NAME: &str = "go-enum";
    const PKG: &str = "github.com/abice/go-enum";
    const HASH: &str = "919e61c0174b91303753ee3898569a01abb32c97";

    fn repo() -> Url {
        Url::parse("https://github.com/abice/go-enum.git").unwrap()
    }

    #[test]
    fn test_new() {
        let m = Manifest::new(NAME, PKG, repo());
        assert_eq!(m.schema_version(), &SchemaVersion::current());
        assert_eq!(m.plugin_name(), NAME);
        assert_eq!(m.package_name(), PKG);
        assert_eq!(m.git_repository(), &repo());
        assert!(m.git_reference().is_none());
    }

    #[test]
    fn test_with_git_reference_does_not_mutate() {
        let m1 = Manifest::new(NAME, PKG, repo());
        let reference = GitReference::new("v0.6.0", HASH).unwrap();
        let m2 = m1.with_git_reference(reference.clone());

        assert!(m1.git_reference().is_none());
        assert_eq!(m2.git_reference(), Some(&reference));
        assert_eq!(m2.plugin_name(), m1.plugin_name());
        assert_eq!(m2.git_repository(), m1.git_repository());
    }

    #[test]
    fn test_to_json_omits_missing_reference() {
        let json = Manifest::new(NAME, PKG, repo()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["manifestVersion"], "v1");
        assert_eq!(value["manifestPayload"]["gitRepository"], "https://github.com/abice/go-enum.git");
        assert!(value["manifestPayload"].get("gitReference").is_none());
    }

    #[test]
    fn test_json_round_trip_with_reference() {
        let m = Manifest::new(NAME, PKG, repo())
            .with_git_reference(GitReference::new("v0.6.0", HASH).unwrap());
        let decoded = Manifest::from_json(m.to_json().unwrap().as_bytes()).unwrap();
        assert_eq!(decoded, m);
    }

    #[test]
    fn test_missing_package_name_reported() {
        let json = br#"{
            "manifestVersion": "v1",
            "manifestPayload": {
                "pluginName": "go-enum",
                "gitRepository": "https://github.com/abice/go-enum.git"
            }
        }"#;

        let err = Manifest::from_json(json).unwrap_err();
        assert_eq!(err.invalid_fields(), vec![PACKAGE_NAME]);
    }

    #[test]
    fn test_all_problems_reported_together() {
        let json = br#"{
            "manifestVersion": "v2",
            "manifestPayload": {
                "pluginName": "",
                "gitRepository": "github.com/abice/go-enum",
                "gitReference": { "name": "v0.6.0" }
            }
        }"#;

        let err = Manifest::from_json(json).unwrap_err();
        assert_eq!(
            err.invalid_fields(),
            vec![
                MANIFEST_VERSION,
                PLUGIN_NAME,
                PACKAGE_NAME,
                GIT_REPOSITORY,
                "manifestPayload.gitReference.hash",
            ]
        );
    }

    #[test]
    fn test_missing_payload_and_version() {
        let err = Manifest::from_json(b"{}").unwrap_err();
        assert_eq!(err.invalid_fields(), vec![MANIFEST_VERSION, MANIFEST_PAYLOAD]);
    }

    #[test]
    fn test_null_reference_is_absent() {
        let json = br#"{
            "manifestVersion": "v1",
            "manifestPayload": {
                "pluginName": "go-enum",
                "packageName": "github.com/abice/go-enum",
                "gitRepository": "https://github.com/abice/go-enum.git",
                "gitReference": null
            }
        }"#;

        let m = Manifest::from_json(json).unwrap();
        assert!(m.git_reference().is_none());
    }

    #[test]
    fn test_write_rejects_blank_names() {
        let gateway = gotool_fs::MemoryGateway::new();
        let data_dir = DataDir::new("/asdf");

        let err = Manifest::new("", " ", repo())
            .write_to(&gateway, &data_dir, "p")
            .unwrap_err();

        assert_eq!(err.invalid_fields(), vec![PLUGIN_NAME, PACKAGE_NAME]);
        assert!(gateway.get(&data_dir.manifest_path("p")).is_none());
    }

    #[test]
    fn test_malformed_json_is_encoding_error() {
        let err = Manifest::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }
}
