pub mod catalogue;
pub mod error;
pub mod evolution;
pub mod payload;
pub mod spec;

pub use catalogue::{Catalogue, Installation, SpecEvolutionSummary};
pub use error::{ModelError, Result};
pub use evolution::{EvolutionBranch, EvolutionItem, PullRequest, SpecEvolution};
pub use payload::{CatalogueListing, InterfacePage, Validate, load_payload, parse_payload};
pub use spec::{OpenApiSpec, ParseResult, SpecItem};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_title_falls_back_to_interface_name() {
        let summary = SpecEvolutionSummary {
            interface_name: "petstore".to_string(),
            latest_agreed: Some(SpecItem {
                reference: "main".to_string(),
                sha: "abc123".to_string(),
                path: "specs/petstore.yaml".to_string(),
                parse_result: Some(ParseResult {
                    open_api_spec: None,
                    errors: vec!["unexpected token".to_string()],
                }),
            }),
            number_of_change_proposals: 0,
        };
        assert_eq!(summary.display_title(), "petstore");
        assert!(summary.latest_agreed.as_ref().unwrap().has_parse_errors());
    }

    #[test]
    fn catalogue_without_topics_has_none() {
        let catalogue: Catalogue = serde_json::from_str(
            r#"{"encodedId":"acme%2Fapis","title":"APIs","topics":null}"#,
        )
        .expect("deserialize catalogue");
        assert!(catalogue.topics().is_empty());
        assert!(!catalogue.has_topic("billing"));
        assert!(catalogue.spec_evolution_summaries.is_empty());
        assert_eq!(catalogue.description, "");
    }
}
