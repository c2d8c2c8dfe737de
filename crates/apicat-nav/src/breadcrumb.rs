//! Breadcrumb trail for the installation → catalogue → interface hierarchy.

use apicat_model::{Catalogue, Installation, SpecEvolutionSummary};
use tracing::debug;

use crate::route::Route;

/// Label of the catalogue list page.
pub const CATALOGUES_LABEL: &str = "Interface Catalogues";

/// Which level of the hierarchy a breadcrumb stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreadcrumbId {
    Installation,
    Catalogues,
    Catalogue,
    Interface,
}

impl BreadcrumbId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Installation => "installation",
            Self::Catalogues => "catalogues",
            Self::Catalogue => "catalogue",
            Self::Interface => "interface",
        }
    }
}

/// One entry of the trail. `target` is `None` for plain labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: BreadcrumbId,
    pub label: String,
    pub target: Option<String>,
}

impl Breadcrumb {
    fn plain(id: BreadcrumbId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            target: None,
        }
    }

    fn link(id: BreadcrumbId, label: impl Into<String>, route: &Route) -> Self {
        Self {
            id,
            label: label.into(),
            target: Some(route.path()),
        }
    }

    pub fn is_navigable(&self) -> bool {
        self.target.is_some()
    }
}

/// Build the trail for the current selection.
///
/// The interface only counts when a catalogue is also given; an interface
/// without its catalogue has no place in the hierarchy and is ignored.
pub fn build_breadcrumbs(
    installation: &Installation,
    catalogue: Option<&Catalogue>,
    interface: Option<&SpecEvolutionSummary>,
) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::plain(
        BreadcrumbId::Installation,
        installation.owner.as_str(),
    )];

    let Some(catalogue) = catalogue else {
        if let Some(summary) = interface {
            debug!(
                interface = %summary.interface_name,
                "interface breadcrumb dropped without a catalogue"
            );
        }
        crumbs.push(Breadcrumb::plain(BreadcrumbId::Catalogues, CATALOGUES_LABEL));
        return crumbs;
    };

    crumbs.push(Breadcrumb::link(
        BreadcrumbId::Catalogues,
        CATALOGUES_LABEL,
        &Route::catalogues(installation.id),
    ));
    crumbs.push(Breadcrumb::link(
        BreadcrumbId::Catalogue,
        catalogue.title.as_str(),
        &Route::catalogue(installation.id, catalogue.encoded_id.as_str()),
    ));

    if let Some(summary) = interface {
        crumbs.push(Breadcrumb::link(
            BreadcrumbId::Interface,
            summary.display_title(),
            &Route::interface(
                installation.id,
                catalogue.encoded_id.as_str(),
                summary.interface_name.as_str(),
            ),
        ));
    }
    crumbs
}
