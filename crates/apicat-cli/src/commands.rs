use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use apicat_cli::render::{render_catalogue, render_catalogue_list, render_interface};
use apicat_cli::view::{catalogue_list_view, catalogue_view, interface_view};
use apicat_model::{CatalogueListing, InterfacePage, load_payload};
use apicat_nav::intent::{
    clear_topics, close_evolution, close_preview, open_evolution, select_ref,
    toggle_previous_versions, toggle_topic, with_param, without_param,
};
use apicat_nav::{Location, Route};

use crate::cli::{CataloguesArgs, EvolutionArgs, NavigateAction, NavigateArgs};

pub fn run_catalogues(args: &CataloguesArgs) -> Result<String> {
    let listing: CatalogueListing = load_payload(&args.payload)
        .with_context(|| format!("load catalogue listing {}", args.payload.display()))?;
    let installation_id = listing.installation.id;
    let location = args.url.as_deref().map_or_else(
        || Location::parse(&Route::catalogues(installation_id).path()),
        Location::parse,
    );
    let span = info_span!("catalogues", owner = %listing.installation.owner, url = %location);
    let _guard = span.enter();

    match Route::parse(location.pathname()) {
        Some(Route::Catalogue {
            installation_id: route_installation,
            encoded_id,
        }) => {
            check_installation(route_installation, installation_id);
            let view = catalogue_view(&listing, &encoded_id)
                .with_context(|| format!("catalogue `{encoded_id}` is not in the payload"))?;
            info!(interfaces = view.interfaces.len(), "rendering catalogue");
            Ok(render_catalogue(&view))
        }
        Some(Route::Interface { .. }) => {
            bail!("`{location}` is an interface page; use the `evolution` command")
        }
        route => {
            match route {
                Some(route) => check_installation(route.installation_id(), installation_id),
                None => warn!("URL does not match a known page, showing the catalogue list"),
            }
            let view = catalogue_list_view(&listing, &location);
            info!(
                visible = view.catalogues.len(),
                total = view.total,
                "rendering catalogue list"
            );
            Ok(render_catalogue_list(&view))
        }
    }
}

pub fn run_evolution(args: &EvolutionArgs) -> Result<String> {
    let page: InterfacePage = load_payload(&args.payload)
        .with_context(|| format!("load interface page {}", args.payload.display()))?;
    let location = match args.url.as_deref() {
        Some(url) => Location::parse(url),
        None => Location::parse(
            &Route::interface(
                page.installation.id,
                page.catalogue.encoded_id.as_str(),
                page.spec_evolution.interface_name.as_str(),
            )
            .path(),
        ),
    };
    let span = info_span!(
        "evolution",
        interface = %page.spec_evolution.interface_name,
        url = %location
    );
    let _guard = span.enter();

    match Route::parse(location.pathname()) {
        Some(Route::Interface {
            installation_id,
            interface_name,
            ..
        }) => {
            check_installation(installation_id, page.installation.id);
            if interface_name != page.spec_evolution.interface_name {
                warn!(
                    url_interface = %interface_name,
                    "URL names a different interface than the payload"
                );
            }
        }
        _ => warn!("URL is not an interface page, reading view flags only"),
    }

    let view = interface_view(&page, &location);
    info!(
        evolution_open = view.view_state.is_evolution_panel_open(),
        previous_versions = view.view_state.is_showing_previous_versions(),
        "rendering interface"
    );
    Ok(render_interface(&view))
}

pub fn run_navigate(args: &NavigateArgs) -> String {
    let location = Location::parse(&args.url);
    match &args.action {
        NavigateAction::Set { name, value } => with_param(&location, name, value),
        NavigateAction::Unset { name } => without_param(&location, name),
        NavigateAction::SelectRef { reference } => select_ref(&location, reference),
        NavigateAction::ClosePreview => close_preview(&location),
        NavigateAction::OpenEvolution => open_evolution(&location),
        NavigateAction::CloseEvolution => close_evolution(&location),
        NavigateAction::TogglePreviousVersions => toggle_previous_versions(&location),
        NavigateAction::ToggleTopic { topic } => toggle_topic(&location, topic),
        NavigateAction::ClearTopics => clear_topics(&location),
    }
}

fn check_installation(from_url: u64, from_payload: u64) {
    if from_url != from_payload {
        warn!(
            url_installation = from_url,
            payload_installation = from_payload,
            "URL and payload belong to different installations"
        );
    }
}
