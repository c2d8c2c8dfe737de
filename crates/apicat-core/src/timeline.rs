//! Evolution timeline classification for a single branch.
//!
//! A branch's items are ordered most recent first. Everything up to and
//! including the branch head (pull requests on top of it, then the head
//! itself) is always shown. Items after the head are previous versions:
//! always listed for release branches, and on the main branch only when
//! the view asks for them, otherwise collapsed into one placeholder.

use apicat_model::{EvolutionBranch, EvolutionItem};
use tracing::trace;

// =============================================================================
// CATEGORY
// =============================================================================

/// Visual treatment of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Head of the main branch
    LatestAgreed,

    /// Earlier tagged version on the main branch
    OldVersion,

    /// Anything on a release branch that is not a pull request
    UpcomingRelease,

    /// Open pull request
    ChangeProposal,
}

impl Category {
    /// Stable identifier, used as a style hook.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LatestAgreed => "latest-agreed",
            Self::OldVersion => "old-version",
            Self::UpcomingRelease => "upcoming-release",
            Self::ChangeProposal => "change-proposal",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LatestAgreed => "Latest agreed",
            Self::OldVersion => "Old version",
            Self::UpcomingRelease => "Upcoming release",
            Self::ChangeProposal => "Change proposal",
        }
    }

    /// Pick the category of one item.
    ///
    /// Precedence: pull request, then main-branch head, then main-branch
    /// history, then everything else.
    pub fn of(item: &EvolutionItem, is_main: bool, is_previous_version: bool) -> Self {
        if item.is_change_proposal() {
            Self::ChangeProposal
        } else if is_main && item.is_branch_head() {
            Self::LatestAgreed
        } else if is_main && is_previous_version {
            Self::OldVersion
        } else {
            Self::UpcomingRelease
        }
    }
}

// =============================================================================
// TIMELINE
// =============================================================================

/// One rendering directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub item: &'a EvolutionItem,
    pub category: Category,
    /// Stands in for the collapsed previous versions; `item` is the most
    /// recent of them.
    pub is_summary_placeholder: bool,
}

/// Classified timeline of one branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline<'a> {
    pub entries: Vec<TimelineEntry<'a>>,
    /// Items after the branch head, whether listed or collapsed.
    pub previous_versions_count: usize,
}

impl<'a> Timeline<'a> {
    /// The placeholder entry, present only while previous versions are collapsed.
    pub fn placeholder(&self) -> Option<&TimelineEntry<'a>> {
        self.entries.iter().find(|entry| entry.is_summary_placeholder)
    }

    /// Entries that stand for a single item.
    pub fn items(&self) -> impl Iterator<Item = &TimelineEntry<'a>> {
        self.entries
            .iter()
            .filter(|entry| !entry.is_summary_placeholder)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_collapsed(&self) -> bool {
        self.placeholder().is_some()
    }
}

/// Index of the branch head: the first item carrying a branch name.
///
/// With no named item the whole list counts as head-and-pull-requests, so
/// the last index is returned. `None` only for an empty list.
pub fn branch_head_index(items: &[EvolutionItem]) -> Option<usize> {
    let last = items.len().checked_sub(1)?;
    match items.iter().position(EvolutionItem::is_branch_head) {
        Some(index) => Some(index),
        None => {
            trace!(items = items.len(), "no branch head, treating all items as head segment");
            Some(last)
        }
    }
}

/// Classify a branch into rendering directives.
pub fn classify_branch(
    branch: &EvolutionBranch,
    is_main: bool,
    show_previous_versions: bool,
) -> Timeline<'_> {
    let items = branch.evolution_items.as_slice();
    let Some(head_index) = branch_head_index(items) else {
        return Timeline::default();
    };
    let (head_segment, previous) = items.split_at(head_index + 1);

    let mut entries: Vec<TimelineEntry<'_>> = head_segment
        .iter()
        .map(|item| TimelineEntry {
            item,
            category: Category::of(item, is_main, false),
            is_summary_placeholder: false,
        })
        .collect();

    if !is_main || show_previous_versions {
        entries.extend(previous.iter().map(|item| TimelineEntry {
            item,
            category: Category::of(item, is_main, true),
            is_summary_placeholder: false,
        }));
    } else if let Some(first) = previous.first() {
        entries.push(TimelineEntry {
            item: first,
            category: Category::of(first, is_main, true),
            is_summary_placeholder: true,
        });
    }

    trace!(
        branch = %branch.branch_name,
        is_main,
        head_index,
        previous_versions = previous.len(),
        entries = entries.len(),
        "classified branch"
    );
    Timeline {
        entries,
        previous_versions_count: previous.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apicat_model::SpecItem;

    fn item(reference: &str, branch_name: Option<&str>) -> EvolutionItem {
        EvolutionItem {
            reference: reference.to_string(),
            branch_name: branch_name.map(str::to_string),
            tags: vec![],
            pull_request: None,
            spec_item: SpecItem {
                reference: reference.to_string(),
                sha: "0000000".to_string(),
                path: "openapi.yaml".to_string(),
                parse_result: None,
            },
        }
    }

    #[test]
    fn head_index_is_first_named_item() {
        let items = vec![item("pr", None), item("main", Some("main")), item("v1", None)];
        assert_eq!(branch_head_index(&items), Some(1));
    }

    #[test]
    fn head_index_defaults_to_last() {
        let items = vec![item("a", None), item("b", None)];
        assert_eq!(branch_head_index(&items), Some(1));
        assert_eq!(branch_head_index(&[]), None);
    }

    #[test]
    fn empty_branch_is_empty_timeline() {
        let branch = EvolutionBranch {
            branch_name: "main".to_string(),
            evolution_items: vec![],
        };
        let timeline = classify_branch(&branch, true, false);
        assert!(timeline.is_empty());
        assert_eq!(timeline.previous_versions_count, 0);
    }

    #[test]
    fn no_placeholder_without_previous_versions() {
        let branch = EvolutionBranch {
            branch_name: "main".to_string(),
            evolution_items: vec![item("main", Some("main"))],
        };
        let timeline = classify_branch(&branch, true, false);
        assert_eq!(timeline.entries.len(), 1);
        assert!(!timeline.is_collapsed());
        assert_eq!(timeline.entries[0].category, Category::LatestAgreed);
    }
}
