//! Moderator and access permission models.

use serde::{Deserialize, Serialize};

use super::Record;

wire_enum! {
    /// Admin panel sections a moderator can be granted.
    pub enum AdminMenu {
        Dashboard => "Dashboard",
        Appointments => "Appointments",
        Doctors => "Doctors",
        Parents => "Parents",
        Reports => "Reports",
        Reviews => "Reviews",
        Donation => "Donation",
        Settings => "Settings",
    }
}

/// A moderator account with its access list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Moderator {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub access_list: Vec<AdminMenu>,
}

/// Form input for creating a moderator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModeratorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub access_list: Vec<AdminMenu>,
}

impl Record for Moderator {
    type Id = u64;
    const KIND: &'static str = "Moderator";

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl Moderator {
    pub fn from_draft(id: u64, draft: ModeratorDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            access_list: normalize_access(draft.access_list),
        }
    }

    pub fn can_access(&self, menu: AdminMenu) -> bool {
        self.access_list.contains(&menu)
    }
}

/// Deduplicate an access list and put it in menu order.
pub fn normalize_access(mut access: Vec<AdminMenu>) -> Vec<AdminMenu> {
    access.sort();
    access.dedup();
    access
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_access() {
        let access = normalize_access(vec![
            AdminMenu::Settings,
            AdminMenu::Dashboard,
            AdminMenu::Settings,
            AdminMenu::Reviews,
        ]);
        assert_eq!(
            access,
            vec![AdminMenu::Dashboard, AdminMenu::Reviews, AdminMenu::Settings]
        );
    }

    #[test]
    fn test_from_draft() {
        let draft = ModeratorDraft {
            name: "Kim".into(),
            email: "kim@vetclinic.com".into(),
            phone: "555".into(),
            access_list: vec![AdminMenu::Donation, AdminMenu::Donation],
        };
        let moderator = Moderator::from_draft(42, draft);
        assert_eq!(moderator.id, 42);
        assert!(moderator.can_access(AdminMenu::Donation));
        assert!(!moderator.can_access(AdminMenu::Settings));
        assert_eq!(moderator.access_list.len(), 1);
    }
}
