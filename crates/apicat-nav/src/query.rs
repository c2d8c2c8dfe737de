//! View state derived from the query string.
//!
//! Decoding is total: a missing, empty, or unrecognised value decodes to
//! the flag's default. Nothing here is cached; callers decode again on
//! every location change.

use std::collections::BTreeSet;

use tracing::debug;

use crate::location::{Location, QueryParams};

/// Spec reference currently previewed.
pub const REF_PARAM: &str = "ref";
/// Evolution panel state.
pub const SHOW_EVOLUTION_PARAM: &str = "show-evolution";
/// Selected catalogue topics (repeatable).
pub const TOPICS_PARAM: &str = "topics";

const SHOW_EVOLUTION_OPEN: &str = "true";
const SHOW_EVOLUTION_WITH_PREVIOUS: &str = "with-previous-versions";

// =============================================================================
// EVOLUTION DISPLAY
// =============================================================================

/// State of the evolution panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvolutionDisplay {
    /// Panel closed (parameter absent or unrecognised)
    #[default]
    Closed,

    /// Panel open, main-branch history collapsed
    Open,

    /// Panel open with the main branch's previous versions listed
    OpenWithPreviousVersions,
}

impl EvolutionDisplay {
    /// Decode the `show-evolution` value.
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            None => Self::Closed,
            Some(SHOW_EVOLUTION_OPEN) => Self::Open,
            Some(SHOW_EVOLUTION_WITH_PREVIOUS) => Self::OpenWithPreviousVersions,
            Some(other) => {
                debug!(value = other, "ignoring unrecognised show-evolution value");
                Self::Closed
            }
        }
    }

    /// Value written to `show-evolution`; `None` means the parameter is removed.
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Self::Closed => None,
            Self::Open => Some(SHOW_EVOLUTION_OPEN),
            Self::OpenWithPreviousVersions => Some(SHOW_EVOLUTION_WITH_PREVIOUS),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn shows_previous_versions(&self) -> bool {
        matches!(self, Self::OpenWithPreviousVersions)
    }

    /// Next state of the "previous versions" toggle.
    ///
    /// Cycles `Open -> OpenWithPreviousVersions -> Open`. A closed panel
    /// opens straight into the expanded state.
    #[must_use]
    pub fn toggled_previous_versions(self) -> Self {
        match self {
            Self::OpenWithPreviousVersions => Self::Open,
            Self::Open | Self::Closed => Self::OpenWithPreviousVersions,
        }
    }

    pub const fn all() -> &'static [EvolutionDisplay] {
        &[Self::Closed, Self::Open, Self::OpenWithPreviousVersions]
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// Everything the view needs from the URL.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Reference whose spec is previewed, if any
    pub selected_ref: Option<String>,

    /// Evolution panel state
    pub evolution: EvolutionDisplay,

    /// Topics the catalogue list is filtered by
    pub selected_topics: BTreeSet<String>,
}

impl ViewState {
    /// Exact, case-sensitive match against the previewed reference.
    pub fn is_selected(&self, ref_name: &str) -> bool {
        self.selected_ref.as_deref() == Some(ref_name)
    }

    pub fn is_preview_open(&self) -> bool {
        self.selected_ref.is_some()
    }

    pub fn is_evolution_panel_open(&self) -> bool {
        self.evolution.is_open()
    }

    pub fn is_showing_previous_versions(&self) -> bool {
        self.evolution.shows_previous_versions()
    }

    pub fn is_filtering_topics(&self) -> bool {
        !self.selected_topics.is_empty()
    }

    /// Flags needed to reproduce this state on a query.
    pub fn flags(&self) -> [ViewFlag; 3] {
        [
            ViewFlag::SelectedRef(self.selected_ref.clone()),
            ViewFlag::Evolution(self.evolution),
            ViewFlag::Topics(self.selected_topics.clone()),
        ]
    }
}

/// Decode the view state carried by a location.
pub fn decode(location: &Location) -> ViewState {
    decode_query(location.query())
}

/// Decode the view state carried by a query.
pub fn decode_query(query: &QueryParams) -> ViewState {
    let selected_ref = query
        .get(REF_PARAM)
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let evolution = EvolutionDisplay::from_query_value(query.get(SHOW_EVOLUTION_PARAM));
    let selected_topics = query
        .get_all(TOPICS_PARAM)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect();
    ViewState {
        selected_ref,
        evolution,
        selected_topics,
    }
}

// =============================================================================
// ENCODING
// =============================================================================

/// One named view-state flag together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewFlag {
    /// `ref`; `None` or an empty name closes the preview
    SelectedRef(Option<String>),

    /// `show-evolution`
    Evolution(EvolutionDisplay),

    /// `topics`; an empty set clears the filter
    Topics(BTreeSet<String>),
}

impl ViewFlag {
    /// Query parameter this flag is stored in.
    pub fn param_name(&self) -> &'static str {
        match self {
            Self::SelectedRef(_) => REF_PARAM,
            Self::Evolution(_) => SHOW_EVOLUTION_PARAM,
            Self::Topics(_) => TOPICS_PARAM,
        }
    }
}

/// Apply a flag to a query, returning the new query. Unrelated parameters
/// are left untouched and keep their order.
#[must_use]
pub fn encode(query: &QueryParams, flag: &ViewFlag) -> QueryParams {
    let mut next = query.clone();
    let name = flag.param_name();
    match flag {
        ViewFlag::SelectedRef(Some(reference)) if !reference.is_empty() => {
            next.set(name, reference);
        }
        ViewFlag::SelectedRef(_) => {
            next.remove(name);
        }
        ViewFlag::Evolution(display) => match display.query_value() {
            Some(value) => next.set(name, value),
            None => {
                next.remove(name);
            }
        },
        ViewFlag::Topics(topics) => {
            next.remove(name);
            for topic in topics.iter().filter(|topic| !topic.is_empty()) {
                next.append(name, topic);
            }
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(search: &str) -> ViewState {
        decode(&Location::new("/", search))
    }

    #[test]
    fn empty_query_is_default_state() {
        assert_eq!(state(""), ViewState::default());
    }

    #[test]
    fn show_evolution_has_three_states() {
        assert_eq!(state("show-evolution=true").evolution, EvolutionDisplay::Open);
        let expanded = state("show-evolution=with-previous-versions");
        assert!(expanded.is_evolution_panel_open());
        assert!(expanded.is_showing_previous_versions());
    }

    #[test]
    fn malformed_values_fall_back_to_defaults() {
        let view = state("show-evolution=TRUE&ref=&topics=");
        assert_eq!(view, ViewState::default());
        assert_eq!(state("show-evolution=1").evolution, EvolutionDisplay::Closed);
    }

    #[test]
    fn is_selected_is_exact() {
        let view = state("ref=refs%2Fheads%2Fmain");
        assert!(view.is_selected("refs/heads/main"));
        assert!(!view.is_selected("refs/heads/Main"));
        assert!(!view.is_selected("main"));
        assert!(view.is_preview_open());
    }

    #[test]
    fn first_ref_wins() {
        assert_eq!(state("ref=a&ref=b").selected_ref.as_deref(), Some("a"));
    }

    #[test]
    fn topics_are_collected_as_a_set() {
        let view = state("topics=b&topics=a&topics=b");
        let topics: Vec<&str> = view.selected_topics.iter().map(String::as_str).collect();
        assert_eq!(topics, vec!["a", "b"]);
    }

    #[test]
    fn toggle_cycles_between_open_states() {
        let mut display = EvolutionDisplay::Open;
        display = display.toggled_previous_versions();
        assert_eq!(display, EvolutionDisplay::OpenWithPreviousVersions);
        display = display.toggled_previous_versions();
        assert_eq!(display, EvolutionDisplay::Open);
    }

    #[test]
    fn encode_closed_removes_parameter() {
        let query = QueryParams::parse("show-evolution=true&ref=main");
        let next = encode(&query, &ViewFlag::Evolution(EvolutionDisplay::Closed));
        assert_eq!(next.to_query_string(), "ref=main");
    }
}
