//! JSON document shapes.
//!
//! Decoding goes through a shape where every field is optional so that
//! validation can report all missing fields at once. Encoding borrows from
//! the in-memory manifest.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub manifest_version: Option<String>,
    #[serde(default)]
    pub manifest_payload: Option<RawPayload>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPayload {
    #[serde(default)]
    pub plugin_name: Option<String>,
    #[serde(default)]
    pub package_name: Option<String>,
    #[serde(default)]
    pub git_repository: Option<String>,
    #[serde(default)]
    pub git_reference: Option<RawReference>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawReference {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Document<'a> {
    pub manifest_version: &'a str,
    pub manifest_payload: Payload<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Payload<'a> {
    pub plugin_name: &'a str,
    pub package_name: &'a str,
    pub git_repository: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_reference: Option<Reference<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Reference<'a> {
    pub name: &'a str,
    pub hash: &'a str,
}
