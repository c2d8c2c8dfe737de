//! Tests for payload decoding and validation.

use std::path::Path;

use apicat_model::{
    CatalogueListing, InterfacePage, ModelError, load_payload, parse_payload,
};

const INTERFACE_PAGE: &str = r#"{
  "installation": { "id": 42, "owner": "acme" },
  "catalogue": {
    "encodedId": "acme%2Fapis",
    "title": "Acme APIs",
    "description": "Public interfaces",
    "topics": ["billing", "payments"],
    "specEvolutionSummaries": [
      {
        "interfaceName": "billing",
        "latestAgreed": {
          "ref": "main",
          "sha": "1111111",
          "path": "billing/openapi.yaml",
          "parseResult": { "openApiSpec": { "title": "Billing API", "version": "1.2.0" } }
        },
        "numberOfChangeProposals": 1
      }
    ]
  },
  "specEvolution": {
    "interfaceName": "billing",
    "main": {
      "branchName": "main",
      "evolutionItems": [
        {
          "ref": "refs/pull/7/head",
          "branchName": null,
          "pullRequest": { "number": 7, "title": "Add refunds", "url": "https://example.test/pull/7", "author": "dev" },
          "specItem": { "ref": "refs/pull/7/head", "sha": "2222222", "path": "billing/openapi.yaml", "parseResult": null }
        },
        {
          "ref": "main",
          "branchName": "main",
          "tags": ["v1.2.0"],
          "pullRequest": null,
          "specItem": { "ref": "main", "sha": "1111111", "path": "billing/openapi.yaml", "parseResult": null }
        }
      ]
    }
  }
}"#;

#[test]
fn interface_page_decodes_with_defaults() {
    let page: InterfacePage =
        parse_payload(INTERFACE_PAGE, Path::new("page.json")).expect("decode page");

    assert_eq!(page.installation.owner, "acme");
    assert_eq!(page.catalogue.topics(), ["billing", "payments"]);
    assert!(page.spec_evolution.releases.is_empty());

    let items = &page.spec_evolution.main.evolution_items;
    assert_eq!(items.len(), 2);
    assert!(items[0].tags.is_empty());
    assert!(items[0].is_change_proposal());
    assert!(items[1].is_branch_head());
    assert_eq!(items[1].tags, vec!["v1.2.0".to_string()]);

    let latest = page.spec_evolution.latest_agreed().expect("main has a head");
    assert_eq!(latest.reference, "main");

    let summary = page.catalogue.find_interface("billing").expect("summary");
    assert_eq!(summary.display_title(), "Billing API");
}

#[test]
fn branches_are_ordered_releases_then_main() {
    let json = r#"{
      "interfaceName": "billing",
      "main": { "branchName": "main" },
      "releases": [ { "branchName": "release/1.x" }, { "branchName": "release/2.x" } ]
    }"#;
    let evolution: apicat_model::SpecEvolution =
        serde_json::from_str(json).expect("decode evolution");

    let order: Vec<(&str, bool)> = evolution
        .branches_in_display_order()
        .map(|(branch, is_main)| (branch.branch_name.as_str(), is_main))
        .collect();
    assert_eq!(
        order,
        vec![("release/1.x", false), ("release/2.x", false), ("main", true)]
    );
    assert!(evolution.main.is_empty());
    assert!(evolution.latest_agreed().is_none());
}

#[test]
fn duplicate_catalogue_ids_are_rejected() {
    let json = r#"{
      "installation": { "id": 1, "owner": "acme" },
      "catalogues": [
        { "encodedId": "same", "title": "One" },
        { "encodedId": "same", "title": "Two" }
      ]
    }"#;
    let error = parse_payload::<CatalogueListing>(json, Path::new("list.json"))
        .expect_err("duplicate ids");
    insta::assert_snapshot!(error.to_string(), @"invalid payload: duplicate catalogue id `same`");
}

#[test]
fn malformed_json_reports_path() {
    let error = parse_payload::<CatalogueListing>("{", Path::new("broken.json"))
        .expect_err("malformed json");
    assert!(matches!(error, ModelError::Json { .. }));
    assert!(error.to_string().starts_with("failed to decode broken.json:"));
}

#[test]
fn missing_file_is_an_io_error() {
    let error = load_payload::<CatalogueListing>(Path::new("does/not/exist.json"))
        .expect_err("missing file");
    assert!(matches!(error, ModelError::Io { .. }));
}
