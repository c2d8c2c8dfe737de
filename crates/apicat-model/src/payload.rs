//! Payload envelopes and the JSON loader.
//!
//! Payloads are produced by the fetch layer. Shape is checked here, once,
//! so the navigation and timeline code can trust what it receives.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalogue::{Catalogue, Installation};
use crate::error::{ModelError, Result};
use crate::evolution::SpecEvolution;

/// Shape checks applied after decoding.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Response payload for the catalogue list page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueListing {
    pub installation: Installation,
    #[serde(default)]
    pub catalogues: Vec<Catalogue>,
}

impl CatalogueListing {
    pub fn find_catalogue(&self, encoded_id: &str) -> Option<&Catalogue> {
        self.catalogues
            .iter()
            .find(|catalogue| catalogue.encoded_id == encoded_id)
    }
}

impl Validate for CatalogueListing {
    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for catalogue in &self.catalogues {
            validate_catalogue(catalogue)?;
            if !seen.insert(catalogue.encoded_id.as_str()) {
                return Err(ModelError::InvalidPayload(format!(
                    "duplicate catalogue id `{}`",
                    catalogue.encoded_id
                )));
            }
        }
        Ok(())
    }
}

/// Response payload for a single interface page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterfacePage {
    pub installation: Installation,
    pub catalogue: Catalogue,
    pub spec_evolution: SpecEvolution,
}

impl Validate for InterfacePage {
    fn validate(&self) -> Result<()> {
        validate_catalogue(&self.catalogue)?;
        let evolution = &self.spec_evolution;
        if evolution.interface_name.trim().is_empty() {
            return Err(ModelError::InvalidPayload(
                "spec evolution has an empty interface name".to_string(),
            ));
        }
        for (branch, _) in evolution.branches_in_display_order() {
            if branch.branch_name.trim().is_empty() {
                return Err(ModelError::InvalidPayload(format!(
                    "interface `{}` has a branch without a name",
                    evolution.interface_name
                )));
            }
        }
        Ok(())
    }
}

fn validate_catalogue(catalogue: &Catalogue) -> Result<()> {
    if catalogue.encoded_id.trim().is_empty() {
        return Err(ModelError::InvalidPayload(format!(
            "catalogue `{}` has an empty id",
            catalogue.title
        )));
    }
    Ok(())
}

/// Decode a payload from a JSON string and validate it.
pub fn parse_payload<T>(json: &str, source: &Path) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let payload: T = serde_json::from_str(json).map_err(|source_error| ModelError::Json {
        path: source.to_path_buf(),
        source: source_error,
    })?;
    payload.validate()?;
    Ok(payload)
}

/// Read, decode, and validate a JSON payload file.
///
/// # Errors
///
/// Returns [`ModelError::Io`] if the file cannot be read, [`ModelError::Json`]
/// if it does not decode, and [`ModelError::InvalidPayload`] if it fails the
/// shape checks.
pub fn load_payload<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let json = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = json.len(), "loaded payload");
    parse_payload(&json, path)
}
