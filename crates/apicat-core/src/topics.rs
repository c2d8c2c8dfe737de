//! Topic filtering of the catalogue list.

use std::collections::BTreeSet;

use apicat_model::Catalogue;

/// Whether a catalogue passes the topic filter.
///
/// Every selected topic must be on the catalogue. With no topics selected
/// everything passes.
pub fn is_visible(catalogue: &Catalogue, selected_topics: &BTreeSet<String>) -> bool {
    selected_topics
        .iter()
        .all(|topic| catalogue.has_topic(topic))
}

/// Catalogues that pass the filter, in their original order.
pub fn filter_catalogues<'a>(
    catalogues: &'a [Catalogue],
    selected_topics: &BTreeSet<String>,
) -> Vec<&'a Catalogue> {
    catalogues
        .iter()
        .filter(|catalogue| is_visible(catalogue, selected_topics))
        .collect()
}

/// Every topic found on any catalogue.
///
/// Computed over the unfiltered list so choices never disappear because
/// of the current filter.
pub fn available_topics(catalogues: &[Catalogue]) -> BTreeSet<String> {
    catalogues
        .iter()
        .flat_map(Catalogue::topics)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue(id: &str, topics: Option<&[&str]>) -> Catalogue {
        Catalogue {
            encoded_id: id.to_string(),
            title: id.to_uppercase(),
            description: String::new(),
            topics: topics.map(|topics| topics.iter().map(|t| (*t).to_string()).collect()),
            spec_evolution_summaries: vec![],
        }
    }

    fn selected(topics: &[&str]) -> BTreeSet<String> {
        topics.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_filter_shows_everything() {
        let catalogues = vec![catalogue("a", None), catalogue("b", Some(&[]))];
        assert_eq!(filter_catalogues(&catalogues, &BTreeSet::new()).len(), 2);
    }

    #[test]
    fn multiple_topics_must_all_match() {
        let catalogues = vec![
            catalogue("both", Some(&["x", "y"])),
            catalogue("only-x", Some(&["x"])),
        ];
        let visible = filter_catalogues(&catalogues, &selected(&["x", "y"]));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].encoded_id, "both");
    }

    #[test]
    fn missing_topics_excluded_when_filtering() {
        let catalogues = vec![catalogue("none", None), catalogue("empty", Some(&[]))];
        assert!(filter_catalogues(&catalogues, &selected(&["x"])).is_empty());
    }
}
