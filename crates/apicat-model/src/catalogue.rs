use serde::{Deserialize, Serialize};

use crate::spec::SpecItem;

/// The source-control installation (organisation or user account) whose
/// repositories hold the catalogues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: u64,
    pub owner: String,
}

/// Catalogue-level summary of one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecEvolutionSummary {
    pub interface_name: String,
    pub latest_agreed: Option<SpecItem>,
    #[serde(default)]
    pub number_of_change_proposals: usize,
}

impl SpecEvolutionSummary {
    /// Title shown for the interface: the latest agreed spec's parsed
    /// title, or the interface name when nothing parsed.
    pub fn display_title(&self) -> &str {
        self.latest_agreed
            .as_ref()
            .and_then(SpecItem::title)
            .unwrap_or(&self.interface_name)
    }
}

/// A collection of API specs stored in one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalogue {
    pub encoded_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub topics: Option<Vec<String>>,
    #[serde(default)]
    pub spec_evolution_summaries: Vec<SpecEvolutionSummary>,
}

impl Catalogue {
    /// Topics attached to the catalogue; empty when the field is absent.
    pub fn topics(&self) -> &[String] {
        self.topics.as_deref().unwrap_or_default()
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics().iter().any(|candidate| candidate == topic)
    }

    pub fn find_interface(&self, interface_name: &str) -> Option<&SpecEvolutionSummary> {
        self.spec_evolution_summaries
            .iter()
            .find(|summary| summary.interface_name == interface_name)
    }
}
