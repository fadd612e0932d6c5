//! Filtered collection view: a record store, its filter spec and the current
//! filter state.
//!
//! The derived view is never stored. [`CollectionView::view`] recomputes it
//! from the record store on every call, so it always reflects the latest
//! filters and mutations and keeps the record store's order.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::{PanelError, PanelResult};
use crate::filter::{
    distinct_values, is_select_all, Comparison, FilterField, FilterKind, FilterSpec, FilterState,
    FilterValue, Options,
};
use crate::models::Record;

/// Record store plus filter state for one list page.
pub struct CollectionView<R: Record> {
    records: Vec<R>,
    spec: FilterSpec<R>,
    state: FilterState,
}

impl<R: Record> CollectionView<R> {
    /// Create a view over an initial record store with every filter at its default.
    pub fn new(records: Vec<R>, spec: FilterSpec<R>) -> Self {
        let state = spec.default_state();
        debug!(kind = R::KIND, records = records.len(), "Record store loaded");
        Self {
            records,
            spec,
            state,
        }
    }

    /// The full record store, in its original order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn spec(&self) -> &FilterSpec<R> {
        &self.spec
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Get a record by ID.
    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    // =========================================================================
    // Filters
    // =========================================================================

    /// Set the query of a free-text key.
    pub fn set_text(&mut self, key: &str, query: &str) -> PanelResult<()> {
        let key = self.field(key, FilterKind::Text)?.key();
        debug!(kind = R::KIND, key, query, "Text filter updated");
        self.state.set(key, FilterValue::Text(query.to_string()));
        Ok(())
    }

    /// Select an option of a choice key.
    ///
    /// `None`, `""` and `"all"` clear the selection.
    pub fn select(&mut self, key: &str, value: Option<&str>) -> PanelResult<()> {
        let field = self.field(key, FilterKind::Choice)?;
        let key = field.key();
        let value = value.filter(|selected| !is_select_all(selected));

        if let (
            Some(value),
            Comparison::Equals {
                options: Options::Closed(values),
                ..
            },
        ) = (value, field.comparison())
        {
            if !values().contains(&value) {
                warn!(kind = R::KIND, key, value, "Rejected unknown option");
                return Err(PanelError::InvalidOption {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }

        debug!(kind = R::KIND, key, ?value, "Choice filter updated");
        self.state
            .set(key, FilterValue::Choice(value.map(str::to_string)));
        Ok(())
    }

    /// Set the day of a date key; `None` clears it.
    pub fn set_date(&mut self, key: &str, date: Option<NaiveDate>) -> PanelResult<()> {
        let key = self.field(key, FilterKind::Date)?.key();
        debug!(kind = R::KIND, key, ?date, "Date filter updated");
        self.state.set(key, FilterValue::Date(date));
        Ok(())
    }

    /// Reset every key to its default.
    pub fn clear_filters(&mut self) {
        debug!(kind = R::KIND, "Filters cleared");
        self.state.reset();
    }

    /// Check if any key is away from its default (drives the "Clear" action).
    pub fn has_active_filters(&self) -> bool {
        !self.state.is_default()
    }

    /// Options for a choice key: the enum's values for closed keys, the
    /// distinct values in the record store for derived ones.
    pub fn options(&self, key: &str) -> PanelResult<Vec<String>> {
        let field = self.field(key, FilterKind::Choice)?;
        match field.comparison() {
            Comparison::Equals {
                options: Options::Closed(values),
                ..
            } => Ok(values().into_iter().map(str::to_string).collect()),
            Comparison::Equals { attribute, .. } => Ok(distinct_values(&self.records, *attribute)),
            _ => Ok(Vec::new()),
        }
    }

    fn field(&self, key: &str, requested: FilterKind) -> PanelResult<&FilterField<R>> {
        let field = self.spec.field(key).ok_or_else(|| {
            warn!(kind = R::KIND, key, "Unknown filter key");
            PanelError::UnknownFilter(key.to_string())
        })?;

        if field.kind() != requested {
            return Err(PanelError::FilterKindMismatch {
                key: key.to_string(),
                actual: field.kind().as_str(),
                requested: requested.as_str(),
            });
        }
        Ok(field)
    }

    // =========================================================================
    // Derived View
    // =========================================================================

    /// Check if a record passes the current filters.
    pub fn matches(&self, record: &R) -> bool {
        self.spec.matches(record, &self.state)
    }

    /// Records passing every active filter, in record store order.
    pub fn view(&self) -> Vec<&R> {
        let view: Vec<&R> = self
            .records
            .iter()
            .filter(|record| self.matches(record))
            .collect();
        debug!(
            kind = R::KIND,
            total = self.records.len(),
            shown = view.len(),
            "View recomputed"
        );
        view
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a record with a new ID.
    pub fn insert(&mut self, record: R) -> PanelResult<&R> {
        if self.get(record.id()).is_some() {
            return Err(PanelError::DuplicateRecord {
                kind: R::KIND,
                id: record.id().to_string(),
            });
        }
        info!(kind = R::KIND, id = %record.id(), "Record added");
        self.records.push(record);
        let last = self.records.len() - 1;
        Ok(&self.records[last])
    }

    /// Remove the record with the given ID.
    pub fn remove(&mut self, id: &R::Id) -> PanelResult<R> {
        let index = self.position(id)?;
        info!(kind = R::KIND, %id, "Record removed");
        Ok(self.records.remove(index))
    }

    fn position(&self, id: &R::Id) -> PanelResult<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| PanelError::RecordNotFound {
                kind: R::KIND,
                id: id.to_string(),
            })
    }
}

impl<R: Record + Clone> CollectionView<R> {
    /// Apply an edit to exactly one record, addressed by ID.
    ///
    /// The edit runs on a copy; the record is only replaced if the edit
    /// keeps its ID. Every other record is untouched.
    pub fn update<F>(&mut self, id: &R::Id, edit: F) -> PanelResult<&R>
    where
        F: FnOnce(&mut R),
    {
        let index = self.position(id)?;
        let mut updated = self.records[index].clone();
        edit(&mut updated);

        if updated.id() != id {
            return Err(PanelError::InvalidValue(format!(
                "{} {} cannot change its ID",
                R::KIND,
                id
            )));
        }

        info!(kind = R::KIND, %id, "Record updated");
        self.records[index] = updated;
        Ok(&self.records[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Visibility, WireEnum};

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: u32,
        author: String,
        tag: String,
        visibility: Visibility,
    }

    impl Record for Note {
        type Id = u32;
        const KIND: &'static str = "Note";

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn author(note: &Note) -> Vec<&str> {
        vec![note.author.as_str()]
    }

    fn tag(note: &Note) -> &str {
        note.tag.as_str()
    }

    fn visibility(note: &Note) -> &str {
        note.visibility.wire_name()
    }

    fn note(id: u32, author: &str, tag: &str, visibility: Visibility) -> Note {
        Note {
            id,
            author: author.into(),
            tag: tag.into(),
            visibility,
        }
    }

    fn make_view() -> CollectionView<Note> {
        let spec = FilterSpec::new()
            .text("author", author)
            .choice("tag", tag, Options::Derived)
            .choice("visibility", visibility, Options::closed::<Visibility>());
        CollectionView::new(
            vec![
                note(1, "Lily", "vet", Visibility::Shown),
                note(2, "Max", "shop", Visibility::Hidden),
                note(3, "Lily", "shop", Visibility::Hidden),
            ],
            spec,
        )
    }

    fn ids(view: &CollectionView<Note>) -> Vec<u32> {
        view.view().iter().map(|n| n.id).collect()
    }

    #[test]
    fn test_default_view_is_everything() {
        let view = make_view();
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert!(!view.has_active_filters());
    }

    #[test]
    fn test_filters_narrow_view() {
        let mut view = make_view();
        view.set_text("author", "LILY").unwrap();
        assert_eq!(ids(&view), vec![1, 3]);

        view.select("tag", Some("shop")).unwrap();
        assert_eq!(ids(&view), vec![3]);
        assert!(view.has_active_filters());

        view.select("visibility", Some("shown")).unwrap();
        assert!(view.view().is_empty());

        view.clear_filters();
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert!(!view.has_active_filters());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut view = make_view();

        assert!(matches!(
            view.set_text("missing", "x"),
            Err(PanelError::UnknownFilter(_))
        ));
        assert!(matches!(
            view.select("author", Some("Lily")),
            Err(PanelError::FilterKindMismatch { .. })
        ));
        assert!(matches!(
            view.select("visibility", Some("visible")),
            Err(PanelError::InvalidOption { .. })
        ));
        assert!(view.state().is_default());

        // Derived keys accept values no record has.
        view.select("tag", Some("clinic")).unwrap();
        assert!(view.view().is_empty());
    }

    #[test]
    fn test_select_all_clears_selection() {
        let mut view = make_view();
        view.select("tag", Some("shop")).unwrap();
        view.select("visibility", Some("hidden")).unwrap();
        assert_eq!(ids(&view), vec![2, 3]);

        view.select("tag", Some("")).unwrap();
        view.select("visibility", Some("all")).unwrap();
        assert_eq!(ids(&view), vec![1, 2, 3]);
        assert!(!view.has_active_filters());
        assert_eq!(view.state().choice("tag"), None);
    }

    #[test]
    fn test_options() {
        let view = make_view();
        assert_eq!(view.options("tag").unwrap(), vec!["vet", "shop"]);
        assert_eq!(view.options("visibility").unwrap(), vec!["shown", "hidden"]);
        assert!(view.options("author").is_err());
    }

    #[test]
    fn test_update_touches_one_record() {
        let mut view = make_view();
        view.select("visibility", Some("shown")).unwrap();
        assert_eq!(ids(&view), vec![1]);

        let before = view.records().to_vec();
        view.update(&2, |n| n.visibility = Visibility::Shown).unwrap();

        assert_eq!(view.records()[0], before[0]);
        assert_eq!(view.records()[2], before[2]);
        assert_eq!(view.records()[1].visibility, Visibility::Shown);
        assert_eq!(ids(&view), vec![1, 2]);
    }

    #[test]
    fn test_update_rejects_id_change_and_unknown_id() {
        let mut view = make_view();
        assert!(view.update(&2, |n| n.id = 1).is_err());
        assert_eq!(view.get(&2).map(|n| n.id), Some(2));

        assert!(matches!(
            view.update(&9, |n| n.tag = "x".into()),
            Err(PanelError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut view = make_view();
        view.insert(note(4, "Ana", "vet", Visibility::Shown)).unwrap();
        assert_eq!(ids(&view), vec![1, 2, 3, 4]);

        assert!(matches!(
            view.insert(note(4, "Dup", "vet", Visibility::Shown)),
            Err(PanelError::DuplicateRecord { .. })
        ));

        let removed = view.remove(&2).unwrap();
        assert_eq!(removed.author, "Max");
        assert_eq!(ids(&view), vec![1, 3, 4]);
        assert!(view.remove(&2).is_err());
    }
}
