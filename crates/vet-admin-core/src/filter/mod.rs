//! Filter composition for list pages.
//!
//! Every list page declares a [`FilterSpec`]: an ordered list of filter keys,
//! each pairing a field selector with a comparison mode. The predicate for a
//! record is the AND of every key's comparison against the page's
//! [`FilterState`].
//!
//! | Mode       | Matches when                                                   |
//! |------------|----------------------------------------------------------------|
//! | `Contains` | any selected field contains the query, ignoring case           |
//! | `Equals`   | the attribute equals the selection exactly                     |
//! | `OnDate`   | the record's date is the selected calendar day                 |
//!
//! Default values (empty query, no selection, no date) never constrain.

mod distinct;
mod state;

pub use distinct::*;
pub use state::*;

use chrono::NaiveDate;

use crate::models::WireEnum;

/// Selects the free-text fields a query is matched against.
pub type TextFields<R> = fn(&R) -> Vec<&str>;

/// Selects the attribute an option is compared with.
pub type Attribute<R> = fn(&R) -> &str;

/// Selects a record's calendar date.
pub type DateOf<R> = fn(&R) -> NaiveDate;

/// Where the options of a choice key come from.
#[derive(Debug, Clone, Copy)]
pub enum Options {
    /// Fixed option list (the wire names of a closed enum)
    Closed(fn() -> Vec<&'static str>),
    /// Distinct attribute values present in the record store
    Derived,
}

impl Options {
    /// Options backed by a closed enum.
    pub fn closed<T: WireEnum>() -> Self {
        Options::Closed(T::wire_names)
    }
}

/// Comparison mode of one filter key.
pub enum Comparison<R> {
    Contains(TextFields<R>),
    Equals {
        attribute: Attribute<R>,
        options: Options,
    },
    OnDate(DateOf<R>),
}

/// One filter key of a page.
pub struct FilterField<R> {
    key: &'static str,
    comparison: Comparison<R>,
}

impl<R> FilterField<R> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn comparison(&self) -> &Comparison<R> {
        &self.comparison
    }

    pub fn kind(&self) -> FilterKind {
        match self.comparison {
            Comparison::Contains(_) => FilterKind::Text,
            Comparison::Equals { .. } => FilterKind::Choice,
            Comparison::OnDate(_) => FilterKind::Date,
        }
    }

    /// Evaluate this key against one record.
    pub fn accepts(&self, record: &R, value: &FilterValue) -> bool {
        match (&self.comparison, value) {
            (Comparison::Contains(fields), FilterValue::Text(query)) => {
                contains_ignore_case(&fields(record), query)
            }
            (Comparison::Equals { attribute, .. }, FilterValue::Choice(selection)) => selection
                .as_deref()
                .map_or(true, |selected| attribute(record) == selected),
            (Comparison::OnDate(date_of), FilterValue::Date(date)) => {
                date.map_or(true, |day| date_of(record) == day)
            }
            // Kinds are checked whenever a value is set.
            _ => true,
        }
    }
}

/// Ordered list of filter keys for one record type.
pub struct FilterSpec<R> {
    fields: Vec<FilterField<R>>,
}

impl<R> Default for FilterSpec<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> FilterSpec<R> {
    /// A spec with no keys (every record matches).
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a free-text key.
    pub fn text(self, key: &'static str, fields: TextFields<R>) -> Self {
        self.with(key, Comparison::Contains(fields))
    }

    /// Add a single-select key.
    pub fn choice(self, key: &'static str, attribute: Attribute<R>, options: Options) -> Self {
        self.with(key, Comparison::Equals { attribute, options })
    }

    /// Add a calendar-date key.
    pub fn date(self, key: &'static str, date_of: DateOf<R>) -> Self {
        self.with(key, Comparison::OnDate(date_of))
    }

    fn with(mut self, key: &'static str, comparison: Comparison<R>) -> Self {
        debug_assert!(
            self.field(key).is_none(),
            "filter key {key} declared twice"
        );
        self.fields.push(FilterField { key, comparison });
        self
    }

    pub fn fields(&self) -> &[FilterField<R>] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FilterField<R>> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// A filter state with every key at its default.
    pub fn default_state(&self) -> FilterState {
        FilterState::with_keys(self.fields.iter().map(|field| (field.key, field.kind())))
    }

    /// Check if a record satisfies every key of the state.
    pub fn matches(&self, record: &R, state: &FilterState) -> bool {
        self.fields.iter().all(|field| {
            state
                .get(field.key)
                .map_or(true, |value| field.accepts(record, value))
        })
    }
}

/// Case-insensitive substring match over several fields.
///
/// An empty query matches everything.
pub fn contains_ignore_case(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}
