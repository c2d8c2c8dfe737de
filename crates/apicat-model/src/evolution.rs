use serde::{Deserialize, Serialize};

use crate::spec::SpecItem;

/// An open pull request proposing a change to a spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub author: Option<String>,
}

/// One version-control reference in a branch's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionItem {
    #[serde(rename = "ref")]
    pub reference: String,
    /// Set only on the item that is the branch's own head.
    pub branch_name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub pull_request: Option<PullRequest>,
    pub spec_item: SpecItem,
}

impl EvolutionItem {
    pub fn is_branch_head(&self) -> bool {
        self.branch_name.is_some()
    }

    pub fn is_change_proposal(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// History of one branch, most recent activity first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionBranch {
    pub branch_name: String,
    #[serde(default)]
    pub evolution_items: Vec<EvolutionItem>,
}

impl EvolutionBranch {
    pub fn is_empty(&self) -> bool {
        self.evolution_items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.evolution_items.len()
    }
}

/// Full evolution of one interface: the default line plus release lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecEvolution {
    pub interface_name: String,
    pub main: EvolutionBranch,
    #[serde(default)]
    pub releases: Vec<EvolutionBranch>,
}

impl SpecEvolution {
    /// Branches in the order they are displayed: release branches as
    /// supplied, then the main branch last. The flag marks the main branch.
    pub fn branches_in_display_order(&self) -> impl Iterator<Item = (&EvolutionBranch, bool)> {
        self.releases
            .iter()
            .map(|branch| (branch, false))
            .chain(std::iter::once((&self.main, true)))
    }

    /// Head item of the main branch, if the main branch has one.
    pub fn latest_agreed(&self) -> Option<&EvolutionItem> {
        self.main
            .evolution_items
            .iter()
            .find(|item| item.is_branch_head())
    }
}
