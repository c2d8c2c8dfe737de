//! Navigation intents.
//!
//! Each function takes the current location and returns the relative URL
//! to navigate to. Applying it (push, replace) is the router's job.

use crate::location::Location;
use crate::query::{self, EvolutionDisplay, TOPICS_PARAM, ViewFlag};

/// Location with `name` set to exactly `value`.
pub fn with_param(location: &Location, name: &str, value: &str) -> String {
    let mut query = location.query().clone();
    query.set(name, value);
    location.with_query(query).to_relative_url()
}

/// Location with every `name` parameter removed.
pub fn without_param(location: &Location, name: &str) -> String {
    let mut query = location.query().clone();
    query.remove(name);
    location.with_query(query).to_relative_url()
}

/// Location with one typed view flag applied.
pub fn with_flag(location: &Location, flag: &ViewFlag) -> String {
    location
        .with_query(query::encode(location.query(), flag))
        .to_relative_url()
}

/// Open the spec preview for `reference`.
pub fn select_ref(location: &Location, reference: &str) -> String {
    with_flag(location, &ViewFlag::SelectedRef(Some(reference.to_string())))
}

pub fn close_preview(location: &Location) -> String {
    with_flag(location, &ViewFlag::SelectedRef(None))
}

/// Open the evolution panel with history collapsed.
pub fn open_evolution(location: &Location) -> String {
    with_flag(location, &ViewFlag::Evolution(EvolutionDisplay::Open))
}

/// Close the evolution panel, whichever open state it was in.
pub fn close_evolution(location: &Location) -> String {
    with_flag(location, &ViewFlag::Evolution(EvolutionDisplay::Closed))
}

/// Flip between showing and hiding the main branch's previous versions.
pub fn toggle_previous_versions(location: &Location) -> String {
    let current = query::decode(location).evolution;
    with_flag(
        location,
        &ViewFlag::Evolution(current.toggled_previous_versions()),
    )
}

/// Add `topic` to the filter, or remove it when already selected.
///
/// An empty topic leaves the location unchanged.
pub fn toggle_topic(location: &Location, topic: &str) -> String {
    if topic.is_empty() {
        return location.to_relative_url();
    }
    let mut query = location.query().clone();
    if !query.remove_value(TOPICS_PARAM, topic) {
        query.append(TOPICS_PARAM, topic);
    }
    location.with_query(query).to_relative_url()
}

/// Clear the topic filter.
pub fn clear_topics(location: &Location) -> String {
    without_param(location, TOPICS_PARAM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_param_is_idempotent() {
        let location = Location::parse("/c?show-evolution=true&ref=main");
        let once = with_param(&location, "ref", "main");
        let twice = with_param(&Location::parse(&once), "ref", "main");
        assert_eq!(once, "/c?show-evolution=true&ref=main");
        assert_eq!(once, twice);
    }

    #[test]
    fn without_absent_param_is_a_no_op() {
        let location = Location::parse("/c?topics=a");
        assert_eq!(without_param(&location, "ref"), "/c?topics=a");
        assert_eq!(without_param(&Location::parse("/c"), "ref"), "/c");
    }

    #[test]
    fn toggle_previous_versions_cycles() {
        let open = Location::parse("/i?show-evolution=true");
        let expanded = toggle_previous_versions(&open);
        assert_eq!(expanded, "/i?show-evolution=with-previous-versions");
        let collapsed = toggle_previous_versions(&Location::parse(&expanded));
        assert_eq!(collapsed, "/i?show-evolution=true");
    }

    #[test]
    fn close_evolution_from_any_open_state() {
        for search in ["show-evolution=true", "show-evolution=with-previous-versions"] {
            let location = Location::new("/i", search);
            assert_eq!(close_evolution(&location), "/i");
        }
    }

    #[test]
    fn toggle_topic_adds_then_removes() {
        let location = Location::parse("/c?topics=a");
        let added = toggle_topic(&location, "b");
        assert_eq!(added, "/c?topics=a&topics=b");
        let removed = toggle_topic(&Location::parse(&added), "a");
        assert_eq!(removed, "/c?topics=b");
    }

    #[test]
    fn toggle_empty_topic_leaves_location_alone() {
        let location = Location::parse("/c?topics=a&ref=main");
        assert_eq!(toggle_topic(&location, ""), "/c?topics=a&ref=main");
        assert_eq!(toggle_topic(&Location::parse("/c"), ""), "/c");
    }

    #[test]
    fn select_and_close_preview() {
        let location = Location::parse("/i?show-evolution=true");
        let selected = select_ref(&location, "release/1.x");
        assert_eq!(selected, "/i?show-evolution=true&ref=release%2F1.x");
        assert_eq!(close_preview(&Location::parse(&selected)), "/i?show-evolution=true");
    }
}
