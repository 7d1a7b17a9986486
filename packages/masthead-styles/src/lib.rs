mod sheet;

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

pub use sheet::Stylesheet;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid style map: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps semantic class names to the scoped class names generated for a CSS module.
///
/// The JSON form is the flat object emitted by CSS-modules tooling, e.g.
/// `{"heading": "_heading_1k9m2_1"}`.
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Debug)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with(mut self, class: impl Into<String>, scoped: impl Into<String>) -> Self {
        self.insert(class, scoped);
        self
    }

    pub fn insert(&mut self, class: impl Into<String>, scoped: impl Into<String>) {
        self.0.insert(class.into(), scoped.into());
    }

    /// The scoped name for `class`, or `""` when the module doesn't define it.
    pub fn get(&self, class: &str) -> &str {
        match self.0.get(class) {
            Some(scoped) => scoped.as_str(),
            None => {
                log::debug!("style map has no entry for `{class}`");
                ""
            }
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains_key(class)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(class, scoped)| (class.into(), scoped.into()))
                .collect(),
        )
    }
}

/// Joins class names with a single space. Empty names are kept, so `["", "a"]` gives `" a"`.
pub fn class_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
