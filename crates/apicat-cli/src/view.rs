//! Page view models assembled from a payload and the current location.

use apicat_core::{InterfaceTimeline, available_topics, filter_catalogues, preview_spec};
use apicat_model::{Catalogue, CatalogueListing, InterfacePage, SpecEvolutionSummary, SpecItem};
use apicat_nav::intent::{
    clear_topics, close_evolution, close_preview, open_evolution, toggle_previous_versions,
    toggle_topic,
};
use apicat_nav::{Breadcrumb, Location, Route, ViewState, build_breadcrumbs, decode};

/// A topic checkbox on the catalogue list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicChoice {
    pub topic: String,
    pub selected: bool,
    /// Where clicking the checkbox leads.
    pub toggle_url: String,
}

/// A link to a child page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a, T> {
    pub value: &'a T,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueListView<'a> {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub topics: Vec<TopicChoice>,
    pub catalogues: Vec<Row<'a, Catalogue>>,
    pub total: usize,
    /// Present while a filter is active.
    pub clear_topics_url: Option<String>,
}

pub fn catalogue_list_view<'a>(
    listing: &'a CatalogueListing,
    location: &Location,
) -> CatalogueListView<'a> {
    let view = decode(location);
    let installation_id = listing.installation.id;
    let topics = available_topics(&listing.catalogues)
        .into_iter()
        .map(|topic| TopicChoice {
            selected: view.selected_topics.contains(&topic),
            toggle_url: toggle_topic(location, &topic),
            topic,
        })
        .collect();
    let catalogues = filter_catalogues(&listing.catalogues, &view.selected_topics)
        .into_iter()
        .map(|catalogue| Row {
            value: catalogue,
            url: Route::catalogue(installation_id, catalogue.encoded_id.as_str()).path(),
        })
        .collect();
    CatalogueListView {
        breadcrumbs: build_breadcrumbs(&listing.installation, None, None),
        topics,
        catalogues,
        total: listing.catalogues.len(),
        clear_topics_url: view.is_filtering_topics().then(|| clear_topics(location)),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueView<'a> {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub catalogue: &'a Catalogue,
    pub interfaces: Vec<Row<'a, SpecEvolutionSummary>>,
}

pub fn catalogue_view<'a>(
    listing: &'a CatalogueListing,
    encoded_id: &str,
) -> Option<CatalogueView<'a>> {
    let catalogue = listing.find_catalogue(encoded_id)?;
    let installation_id = listing.installation.id;
    let interfaces = catalogue
        .spec_evolution_summaries
        .iter()
        .map(|summary| Row {
            value: summary,
            url: Route::interface(
                installation_id,
                catalogue.encoded_id.as_str(),
                summary.interface_name.as_str(),
            )
            .path(),
        })
        .collect();
    Some(CatalogueView {
        breadcrumbs: build_breadcrumbs(&listing.installation, Some(catalogue), None),
        catalogue,
        interfaces,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceView<'a> {
    pub breadcrumbs: Vec<Breadcrumb>,
    pub view_state: ViewState,
    /// Only built while the evolution panel is open.
    pub timeline: Option<InterfaceTimeline<'a>>,
    pub preview: Option<&'a SpecItem>,
    pub toggle_evolution_url: String,
    pub toggle_previous_versions_url: String,
    pub close_preview_url: Option<String>,
}

pub fn interface_view<'a>(page: &'a InterfacePage, location: &Location) -> InterfaceView<'a> {
    let view_state = decode(location);
    let evolution = &page.spec_evolution;
    let summary = page
        .catalogue
        .find_interface(&evolution.interface_name)
        .cloned()
        .unwrap_or_else(|| summary_from_evolution(page));
    let timeline = view_state
        .is_evolution_panel_open()
        .then(|| InterfaceTimeline::build(evolution, &view_state));
    let toggle_evolution_url = if view_state.is_evolution_panel_open() {
        close_evolution(location)
    } else {
        open_evolution(location)
    };
    InterfaceView {
        breadcrumbs: build_breadcrumbs(
            &page.installation,
            Some(&page.catalogue),
            Some(&summary),
        ),
        preview: preview_spec(evolution, &view_state),
        timeline,
        toggle_evolution_url,
        toggle_previous_versions_url: toggle_previous_versions(location),
        close_preview_url: view_state.is_preview_open().then(|| close_preview(location)),
        view_state,
    }
}

/// Summary for an interface the catalogue does not list.
fn summary_from_evolution(page: &InterfacePage) -> SpecEvolutionSummary {
    let evolution = &page.spec_evolution;
    SpecEvolutionSummary {
        interface_name: evolution.interface_name.clone(),
        latest_agreed: evolution.latest_agreed().map(|item| item.spec_item.clone()),
        number_of_change_proposals: evolution
            .branches_in_display_order()
            .flat_map(|(branch, _)| branch.evolution_items.iter())
            .filter(|item| item.is_change_proposal())
            .count(),
    }
}
