//! Navigation state and the view mode derived from it.
//!
//! The generator route carries at most one meaningful query parameter, the
//! artifact identifier. [`ViewMode::from_location`] is the only place that
//! interprets it.

use reqwest::Url;
use std::fmt;
use std::str::FromStr;

/// Query parameter holding a permalink identifier.
pub const ID_PARAM: &str = "id";

/// Location used when the caller has no navigation surface of its own.
pub const DEFAULT_LOCATION: &str = "app://local/generator";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid location '{input}': {reason}")]
pub struct InvalidLocation {
    pub input: String,
    pub reason: String,
}

/// A navigation location (route plus query string).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location(Url);

impl Location {
    /// The generator route with no identifier.
    pub fn generator() -> Self {
        Self(Url::parse(DEFAULT_LOCATION).expect("Default location should be valid"))
    }

    /// The generator route pointing at a persisted artifact.
    pub fn permalink(id: &str) -> Self {
        Self::generator().with_param(ID_PARAM, id)
    }

    /// Full location string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Route path without the query.
    pub fn path(&self) -> &str {
        self.0.path()
    }

    /// First value of query parameter `name`.
    pub fn param(&self, name: &str) -> Option<String> {
        self.0
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Copy of this location with `name=value` appended.
    pub fn with_param(&self, name: &str, value: &str) -> Self {
        let mut url = self.0.clone();
        url.query_pairs_mut().append_pair(name, value);
        Self(url)
    }

    /// Same route and query, minus every `id` parameter.
    pub fn without_id(&self) -> Self {
        let kept: Vec<(String, String)> = self
            .0
            .query_pairs()
            .filter(|(key, _)| key != ID_PARAM)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut url = self.0.clone();
        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept);
        }
        Self(url)
    }
}

impl FromStr for Location {
    type Err = InvalidLocation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Url::parse(s.trim()).map(Self).map_err(|e| InvalidLocation {
            input: s.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::generator()
    }
}

/// Whether the user is composing a new cloud or viewing a persisted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewMode {
    Fresh,
    Permalink(String),
}

impl ViewMode {
    /// Derive the view mode from a location. A blank identifier counts as absent.
    pub fn from_location(location: &Location) -> Self {
        match location.param(ID_PARAM) {
            Some(id) if !id.trim().is_empty() => ViewMode::Permalink(id.trim().to_string()),
            _ => ViewMode::Fresh,
        }
    }

    /// Identifier of the shown permalink.
    pub fn permalink_id(&self) -> Option<&str> {
        match self {
            ViewMode::Permalink(id) => Some(id),
            ViewMode::Fresh => None,
        }
    }

    /// True in permalink mode.
    pub fn is_permalink(&self) -> bool {
        matches!(self, ViewMode::Permalink(_))
    }
}

/// Read/replace access to the host's navigation state.
///
/// `replace` must update the location in place, without a reload and
/// without adding a history entry.
pub trait Navigator: Send {
    fn location(&self) -> Location;

    fn replace(&mut self, location: Location);
}

/// In-memory navigator, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    current: Location,
    replacements: usize,
}

impl MemoryNavigator {
    /// Create a navigator starting at `current`.
    pub fn new(current: Location) -> Self {
        Self {
            current,
            replacements: 0,
        }
    }

    /// Number of times `replace` was called.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl Navigator for MemoryNavigator {
    fn location(&self) -> Location {
        self.current.clone()
    }

    fn replace(&mut self, location: Location) {
        self.current = location;
        self.replacements += 1;
    }
}
