//! Page routes.
//!
//! - `Catalogues`: catalogue list of an installation
//! - `Catalogue`: one catalogue and its interfaces
//! - `Interface`: one interface, its spec preview and evolution panel

use std::borrow::Cow;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

const INSTALLATIONS_SEGMENT: &str = "installations";
const CATALOGUES_SEGMENT: &str = "catalogues";
const INTERFACES_SEGMENT: &str = "interfaces";

/// Characters escaped in a path segment (WHATWG path-percent-encode set plus `/` and `%`).
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// A page the user can navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Catalogues {
        installation_id: u64,
    },

    Catalogue {
        installation_id: u64,
        /// Catalogue id as issued by the backend
        encoded_id: String,
    },

    Interface {
        installation_id: u64,
        encoded_id: String,
        interface_name: String,
    },
}

impl Route {
    pub fn catalogues(installation_id: u64) -> Self {
        Self::Catalogues { installation_id }
    }

    pub fn catalogue(installation_id: u64, encoded_id: impl Into<String>) -> Self {
        Self::Catalogue {
            installation_id,
            encoded_id: encoded_id.into(),
        }
    }

    pub fn interface(
        installation_id: u64,
        encoded_id: impl Into<String>,
        interface_name: impl Into<String>,
    ) -> Self {
        Self::Interface {
            installation_id,
            encoded_id: encoded_id.into(),
            interface_name: interface_name.into(),
        }
    }

    /// Match a pathname against the route table. Unknown paths give `None`.
    pub fn parse(pathname: &str) -> Option<Self> {
        let trimmed = pathname.strip_prefix('/')?.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();
        match segments.as_slice() {
            [INSTALLATIONS_SEGMENT, id, CATALOGUES_SEGMENT] => {
                Some(Self::catalogues(id.parse().ok()?))
            }
            [INSTALLATIONS_SEGMENT, id, CATALOGUES_SEGMENT, encoded_id]
                if !encoded_id.is_empty() =>
            {
                Some(Self::catalogue(id.parse().ok()?, decode_segment(encoded_id)?))
            }
            [
                INSTALLATIONS_SEGMENT,
                id,
                CATALOGUES_SEGMENT,
                encoded_id,
                INTERFACES_SEGMENT,
                name,
            ] if !encoded_id.is_empty() && !name.is_empty() => {
                Some(Self::interface(
                    id.parse().ok()?,
                    decode_segment(encoded_id)?,
                    decode_segment(name)?,
                ))
            }
            _ => None,
        }
    }

    /// Absolute pathname for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Catalogues { installation_id } => {
                format!("/{INSTALLATIONS_SEGMENT}/{installation_id}/{CATALOGUES_SEGMENT}")
            }
            Self::Catalogue {
                installation_id,
                encoded_id,
            } => format!(
                "{}/{}",
                Self::catalogues(*installation_id).path(),
                utf8_percent_encode(encoded_id, SEGMENT)
            ),
            Self::Interface {
                installation_id,
                encoded_id,
                interface_name,
            } => format!(
                "{}/{INTERFACES_SEGMENT}/{}",
                Self::catalogue(*installation_id, encoded_id.as_str()).path(),
                utf8_percent_encode(interface_name, SEGMENT)
            ),
        }
    }

    /// Route one level up, `None` for the catalogue list.
    pub fn parent(&self) -> Option<Self> {
        match self {
            Self::Catalogues { .. } => None,
            Self::Catalogue {
                installation_id, ..
            } => Some(Self::catalogues(*installation_id)),
            Self::Interface {
                installation_id,
                encoded_id,
                ..
            } => Some(Self::catalogue(*installation_id, encoded_id.as_str())),
        }
    }

    pub fn installation_id(&self) -> u64 {
        match self {
            Self::Catalogues { installation_id }
            | Self::Catalogue {
                installation_id, ..
            }
            | Self::Interface {
                installation_id, ..
            } => *installation_id,
        }
    }

    pub fn encoded_id(&self) -> Option<&str> {
        match self {
            Self::Catalogues { .. } => None,
            Self::Catalogue { encoded_id, .. } | Self::Interface { encoded_id, .. } => {
                Some(encoded_id)
            }
        }
    }

    pub fn interface_name(&self) -> Option<&str> {
        match self {
            Self::Interface { interface_name, .. } => Some(interface_name),
            _ => None,
        }
    }
}

fn decode_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_each_route() {
        assert_eq!(
            Route::parse("/installations/7/catalogues"),
            Some(Route::catalogues(7))
        );
        assert_eq!(
            Route::parse("/installations/7/catalogues/acme%2Fapis/"),
            Some(Route::catalogue(7, "acme/apis"))
        );
        assert_eq!(
            Route::parse("/installations/7/catalogues/acme-apis/interfaces/open%20banking"),
            Some(Route::interface(7, "acme-apis", "open banking"))
        );
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/"), None);
        assert_eq!(Route::parse("installations/7/catalogues"), None);
        assert_eq!(Route::parse("/installations/x/catalogues"), None);
        assert_eq!(Route::parse("/installations/7/catalogues//interfaces/a"), None);
        assert_eq!(Route::parse("/installations/7/repos"), None);
    }

    #[test]
    fn path_round_trips() {
        let route = Route::interface(3, "acme-apis", "billing/v2 api");
        let path = route.path();
        assert_eq!(
            path,
            "/installations/3/catalogues/acme-apis/interfaces/billing%2Fv2%20api"
        );
        assert_eq!(Route::parse(&path), Some(route));
    }

    #[test]
    fn catalogue_ids_with_reserved_characters_round_trip() {
        for id in ["a/b", "q?x=1", "frag#top", "50%", "acme%2Fapis"] {
            let catalogue = Route::catalogue(1, id);
            assert_eq!(Route::parse(&catalogue.path()), Some(catalogue));

            let interface = Route::interface(1, id, "billing");
            assert_eq!(Route::parse(&interface.path()), Some(interface));
        }
        assert_eq!(
            Route::catalogue(1, "a/b").path(),
            "/installations/1/catalogues/a%2Fb"
        );
    }

    #[test]
    fn parents_walk_up_to_the_list() {
        let route = Route::interface(3, "c", "i");
        let catalogue = route.parent().expect("catalogue");
        assert_eq!(catalogue, Route::catalogue(3, "c"));
        assert_eq!(catalogue.parent(), Some(Route::catalogues(3)));
        assert_eq!(Route::catalogues(3).parent(), None);
    }
}
