use serde::{Deserialize, Serialize};

/// Title and version pulled out of a parsed OpenAPI document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenApiSpec {
    pub title: String,
    pub version: String,
}

/// Outcome of parsing a spec file at a given ref.
///
/// `open_api_spec` is absent when the file could not be parsed; `errors`
/// then carries the parser messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    pub open_api_spec: Option<OpenApiSpec>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// A spec file as it exists at one version-control reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecItem {
    #[serde(rename = "ref")]
    pub reference: String,
    pub sha: String,
    pub path: String,
    pub parse_result: Option<ParseResult>,
}

impl SpecItem {
    /// Parsed OpenAPI title, if the file parsed.
    pub fn title(&self) -> Option<&str> {
        self.parse_result
            .as_ref()
            .and_then(|result| result.open_api_spec.as_ref())
            .map(|spec| spec.title.as_str())
    }

    /// Parsed OpenAPI version, if the file parsed.
    pub fn version(&self) -> Option<&str> {
        self.parse_result
            .as_ref()
            .and_then(|result| result.open_api_spec.as_ref())
            .map(|spec| spec.version.as_str())
    }

    pub fn has_parse_errors(&self) -> bool {
        self.parse_result
            .as_ref()
            .is_some_and(|result| !result.errors.is_empty())
    }
}
