//! Navigation and view state for the interface catalogue browser.
//!
//! All state is read from the current [`Location`] and every change is
//! expressed as a new relative URL:
//!
//! - [`query`]: decode/encode the view flags carried in the query string
//! - [`intent`]: build the URL for a requested state change
//! - [`route`]: typed page routes
//! - [`breadcrumb`]: breadcrumb trail for the current selection

pub mod breadcrumb;
pub mod intent;
pub mod location;
pub mod query;
pub mod route;

pub use breadcrumb::{Breadcrumb, BreadcrumbId, CATALOGUES_LABEL, build_breadcrumbs};
pub use location::{Location, QueryParams};
pub use query::{
    EvolutionDisplay, REF_PARAM, SHOW_EVOLUTION_PARAM, TOPICS_PARAM, ViewFlag, ViewState, decode,
    decode_query, encode,
};
pub use route::Route;
