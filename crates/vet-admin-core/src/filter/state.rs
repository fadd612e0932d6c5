//! Filter state: the current value of every filter key on a page.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Shape of a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Free-text query
    Text,
    /// Single-select option
    Choice,
    /// Calendar date
    Date,
}

impl FilterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Text => "text",
            FilterKind::Choice => "choice",
            FilterKind::Date => "date",
        }
    }
}

/// Current value of one filter key.
///
/// Every default (empty query, no selection, no date) means "no constraint".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FilterValue {
    Text(String),
    Choice(Option<String>),
    Date(Option<NaiveDate>),
}

impl FilterValue {
    /// The "no constraint" value for a kind.
    pub fn default_for(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Text => FilterValue::Text(String::new()),
            FilterKind::Choice => FilterValue::Choice(None),
            FilterKind::Date => FilterValue::Date(None),
        }
    }

    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Text(_) => FilterKind::Text,
            FilterValue::Choice(_) => FilterKind::Choice,
            FilterValue::Date(_) => FilterKind::Date,
        }
    }

    pub fn is_default(&self) -> bool {
        match self {
            FilterValue::Text(query) => query.is_empty(),
            FilterValue::Choice(selection) => selection.is_none(),
            FilterValue::Date(date) => date.is_none(),
        }
    }
}

/// Check if a choice value is the "all" option, which never constrains.
pub fn is_select_all(value: &str) -> bool {
    value.is_empty() || value.eq_ignore_ascii_case("all")
}

/// Mapping from filter key to its current value.
///
/// Built from a [`FilterSpec`](super::FilterSpec), so it always holds exactly
/// the keys that spec declares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    values: BTreeMap<&'static str, FilterValue>,
}

impl FilterState {
    pub(crate) fn with_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, FilterKind)>,
    {
        Self {
            values: keys
                .into_iter()
                .map(|(key, kind)| (key, FilterValue::default_for(kind)))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key)
    }

    /// Current free-text query for a key (empty when unset).
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            FilterValue::Text(query) => Some(query.as_str()),
            _ => None,
        }
    }

    /// Current selection for a choice key.
    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.values.get(key)? {
            FilterValue::Choice(selection) => selection.as_deref(),
            _ => None,
        }
    }

    /// Current date for a date key.
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.values.get(key)? {
            FilterValue::Date(date) => *date,
            _ => None,
        }
    }

    /// Check if every key is at its default.
    pub fn is_default(&self) -> bool {
        self.values.values().all(FilterValue::is_default)
    }

    /// Keys currently constraining the view.
    pub fn active_keys(&self) -> Vec<&'static str> {
        self.values
            .iter()
            .filter(|(_, value)| !value.is_default())
            .map(|(key, _)| *key)
            .collect()
    }

    pub(crate) fn set(&mut self, key: &'static str, value: FilterValue) {
        self.values.insert(key, value);
    }

    pub(crate) fn reset(&mut self) {
        for value in self.values.values_mut() {
            *value = FilterValue::default_for(value.kind());
        }
    }
}
