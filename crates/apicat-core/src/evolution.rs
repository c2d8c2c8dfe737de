//! Timeline of a whole interface: every release branch, then main.

use apicat_model::{EvolutionItem, SpecEvolution, SpecItem};
use apicat_nav::ViewState;
use tracing::debug;

use crate::timeline::{Timeline, classify_branch};

/// Classified timeline of one branch, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchTimeline<'a> {
    pub branch_name: &'a str,
    pub is_main: bool,
    pub timeline: Timeline<'a>,
}

/// All branch timelines of an interface in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceTimeline<'a> {
    pub interface_name: &'a str,
    pub branches: Vec<BranchTimeline<'a>>,
}

impl<'a> InterfaceTimeline<'a> {
    /// Classify every branch for the given view.
    ///
    /// Release branches come first in payload order, the main branch last.
    /// Only the main branch reacts to the previous-versions flag.
    pub fn build(evolution: &'a SpecEvolution, view: &ViewState) -> Self {
        let show_previous_versions = view.is_showing_previous_versions();
        let branches = evolution
            .branches_in_display_order()
            .map(|(branch, is_main)| BranchTimeline {
                branch_name: branch.branch_name.as_str(),
                is_main,
                timeline: classify_branch(branch, is_main, show_previous_versions),
            })
            .collect();
        Self {
            interface_name: evolution.interface_name.as_str(),
            branches,
        }
    }

    pub fn main(&self) -> Option<&BranchTimeline<'a>> {
        self.branches.iter().find(|branch| branch.is_main)
    }

    pub fn releases(&self) -> impl Iterator<Item = &BranchTimeline<'a>> {
        self.branches.iter().filter(|branch| !branch.is_main)
    }
}

/// Evolution item whose reference is previewed, searched across all
/// branches including collapsed history.
pub fn selected_item<'a>(
    evolution: &'a SpecEvolution,
    view: &ViewState,
) -> Option<&'a EvolutionItem> {
    let reference = view.selected_ref.as_deref()?;
    let found = evolution
        .branches_in_display_order()
        .flat_map(|(branch, _)| branch.evolution_items.iter())
        .find(|item| view.is_selected(&item.reference));
    if found.is_none() {
        debug!(reference, interface = %evolution.interface_name, "selected ref not in evolution");
    }
    found
}

/// Spec to show in the preview pane.
pub fn preview_spec<'a>(evolution: &'a SpecEvolution, view: &ViewState) -> Option<&'a SpecItem> {
    selected_item(evolution, view).map(|item| &item.spec_item)
}
