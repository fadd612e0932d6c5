//! Moderator permissions page.

use super::Page;
use crate::error::{PanelError, PanelResult};
use crate::filter::FilterSpec;
use crate::models::{normalize_access, AdminMenu, Moderator, ModeratorDraft};
use crate::view::CollectionView;

/// Moderator list with add, access edit and delete. The page has no filters.
pub struct ModeratorsPage {
    moderators: CollectionView<Moderator>,
}

impl ModeratorsPage {
    pub fn new(moderators: Vec<Moderator>) -> Self {
        Self {
            moderators: CollectionView::new(moderators, FilterSpec::new()),
        }
    }

    /// Create a moderator from the form input.
    pub fn add(&mut self, draft: ModeratorDraft) -> PanelResult<&Moderator> {
        let id = self.next_id()?;
        self.moderators.insert(Moderator::from_draft(id, draft))
    }

    /// Replace a moderator's access list; other fields are kept.
    pub fn edit_access(&mut self, id: u64, access: Vec<AdminMenu>) -> PanelResult<&Moderator> {
        let access = normalize_access(access);
        self.moderators
            .update(&id, |moderator| moderator.access_list = access)
    }

    pub fn delete(&mut self, id: u64) -> PanelResult<Moderator> {
        self.moderators.remove(&id)
    }

    /// Creation time in epoch milliseconds, bumped past every existing ID.
    fn next_id(&self) -> PanelResult<u64> {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        let mut after_last = 0;
        for moderator in self.moderators.records() {
            let next = moderator.id.checked_add(1).ok_or_else(|| {
                PanelError::InvalidValue(format!("Moderator IDs exhausted after {}", moderator.id))
            })?;
            after_last = after_last.max(next);
        }
        Ok(now.max(after_last))
    }
}

impl Page for ModeratorsPage {
    type Record = Moderator;

    fn collection(&self) -> &CollectionView<Moderator> {
        &self.moderators
    }

    fn collection_mut(&mut self) -> &mut CollectionView<Moderator> {
        &mut self.moderators
    }
}
