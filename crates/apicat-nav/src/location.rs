//! Location and query-parameter types.
//!
//! A [`Location`] is the `(pathname, search)` pair handed over by the host
//! router. Query parameters keep their original order and may repeat.

use std::fmt;

use url::form_urlencoded;

/// Ordered, repeatable query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse a search string, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        Self {
            pairs: form_urlencoded::parse(search.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values for `name`, in order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn contains_value(&self, name: &str, value: &str) -> bool {
        self.get_all(name).any(|candidate| candidate == value)
    }

    /// Set `name` to a single value.
    ///
    /// The first existing occurrence is replaced in place and any further
    /// occurrences are dropped, so other parameters keep their positions.
    /// Absent parameters are appended.
    pub fn set(&mut self, name: &str, value: &str) {
        let mut replaced = false;
        self.pairs.retain_mut(|(key, current)| {
            if key != name {
                return true;
            }
            if replaced {
                return false;
            }
            value.clone_into(current);
            replaced = true;
            true
        });
        if !replaced {
            self.append(name, value);
        }
    }

    pub fn append(&mut self, name: &str, value: &str) {
        self.pairs.push((name.to_string(), value.to_string()));
    }

    /// Remove every occurrence of `name`. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(key, _)| key != name);
        self.pairs.len() != before
    }

    /// Remove every `name=value` pair. Returns whether anything was removed.
    pub fn remove_value(&mut self, name: &str, value: &str) -> bool {
        let before = self.pairs.len();
        self.pairs
            .retain(|(key, current)| !(key == name && current == value));
        self.pairs.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Serialize without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

/// The current location as seen by the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    query: QueryParams,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: &str) -> Self {
        Self {
            pathname: pathname.into(),
            query: QueryParams::parse(search),
        }
    }

    /// Parse a relative URL such as `/a/b?ref=main#top`. The fragment is
    /// not part of the view state and is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        match url.split_once('?') {
            Some((pathname, search)) => Self::new(pathname, search),
            None => Self::new(url, ""),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Same pathname with a replacement query.
    #[must_use]
    pub fn with_query(&self, query: QueryParams) -> Self {
        Self {
            pathname: self.pathname.clone(),
            query,
        }
    }

    /// Relative URL: pathname plus `?query` when the query is non-empty.
    pub fn to_relative_url(&self) -> String {
        if self.query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.query.to_query_string())
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_relative_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_path_query_and_fragment() {
        let location = Location::parse("/installations/1/catalogues?topics=a&topics=b#top");
        assert_eq!(location.pathname(), "/installations/1/catalogues");
        let topics: Vec<&str> = location.query().get_all("topics").collect();
        assert_eq!(topics, vec!["a", "b"]);
        assert_eq!(
            location.to_relative_url(),
            "/installations/1/catalogues?topics=a&topics=b"
        );
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut query = QueryParams::parse("?a=1&ref=x&b=2&ref=y");
        query.set("ref", "z");
        assert_eq!(query.to_query_string(), "a=1&ref=z&b=2");
        query.set("c", "3");
        assert_eq!(query.to_query_string(), "a=1&ref=z&b=2&c=3");
    }

    #[test]
    fn values_are_percent_decoded() {
        let query = QueryParams::parse("ref=refs%2Fheads%2Fmain&topics=open+banking");
        assert_eq!(query.get("ref"), Some("refs/heads/main"));
        assert_eq!(query.get("topics"), Some("open banking"));
        assert_eq!(
            query.to_query_string(),
            "ref=refs%2Fheads%2Fmain&topics=open+banking"
        );
    }

    #[test]
    fn remove_value_keeps_other_values() {
        let mut query = QueryParams::parse("topics=a&topics=b&topics=a");
        assert!(query.remove_value("topics", "a"));
        assert_eq!(query.to_query_string(), "topics=b");
        assert!(!query.remove("ref"));
    }

    #[test]
    fn empty_query_has_no_question_mark() {
        let location = Location::new("/installations/1/catalogues", "?");
        assert_eq!(location.to_string(), "/installations/1/catalogues");
    }

    #[test]
    fn get_outlives_the_name_it_was_asked_for() {
        let query = QueryParams::parse("ref=main&ref=v1");
        let value = {
            let name = String::from("ref");
            query.get(&name)
        };
        assert_eq!(value, Some("main"));
        assert_eq!(query.get("missing"), None);
    }
}
