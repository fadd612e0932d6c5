//! Pet parents list page.

use serde::Serialize;

use super::{FilterControls, Page};
use crate::error::PanelResult;
use crate::filter::{FilterSpec, Options};
use crate::models::{PaymentMethod, PetParent, PetParentStatus};
use crate::view::CollectionView;

pub const PET_PARENT_SEARCH: &str = "search";
pub const PET_PARENT_STATUS: &str = "status";
pub const PET_PARENT_PAYMENT: &str = "payment";

/// First name, last name, email and every pet's name.
fn search_fields(parent: &PetParent) -> Vec<&str> {
    let mut fields = vec![
        parent.first_name.as_str(),
        parent.last_name.as_str(),
        parent.email.as_str(),
    ];
    fields.extend(parent.pets.iter().map(|pet| pet.name.as_str()));
    fields
}

fn status(parent: &PetParent) -> &str {
    parent.status.as_str()
}

fn payment(parent: &PetParent) -> &str {
    parent.payment_method.as_str()
}

pub fn pet_parent_filters() -> FilterSpec<PetParent> {
    FilterSpec::new()
        .text(PET_PARENT_SEARCH, search_fields)
        .choice(
            PET_PARENT_STATUS,
            status,
            Options::closed::<PetParentStatus>(),
        )
        .choice(
            PET_PARENT_PAYMENT,
            payment,
            Options::closed::<PaymentMethod>(),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PetParentStats {
    pub total: usize,
    pub active: usize,
    pub total_pets: usize,
    pub total_revenue: f64,
}

pub struct PetParentsPage {
    pet_parents: CollectionView<PetParent>,
}

impl PetParentsPage {
    pub fn new(pet_parents: Vec<PetParent>) -> Self {
        Self {
            pet_parents: CollectionView::new(pet_parents, pet_parent_filters()),
        }
    }

    pub fn search(&mut self, query: &str) -> PanelResult<()> {
        self.set_text(PET_PARENT_SEARCH, query)
    }

    pub fn filter_status(&mut self, status: Option<PetParentStatus>) -> PanelResult<()> {
        self.select(PET_PARENT_STATUS, status.map(|s| s.as_str()))
    }

    pub fn filter_payment(&mut self, method: Option<PaymentMethod>) -> PanelResult<()> {
        self.select(PET_PARENT_PAYMENT, method.map(|m| m.as_str()))
    }

    pub fn stats(&self) -> PetParentStats {
        let records = self.pet_parents.records();
        PetParentStats {
            total: records.len(),
            active: records
                .iter()
                .filter(|p| p.status == PetParentStatus::Active)
                .count(),
            total_pets: records.iter().map(|p| p.pets.len()).sum(),
            total_revenue: records.iter().map(|p| p.total_spent).sum(),
        }
    }
}

impl Page for PetParentsPage {
    type Record = PetParent;

    fn collection(&self) -> &CollectionView<PetParent> {
        &self.pet_parents
    }

    fn collection_mut(&mut self) -> &mut CollectionView<PetParent> {
        &mut self.pet_parents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn make_page() -> PetParentsPage {
        PetParentsPage::new(seed::pet_parents().unwrap())
    }

    fn ids(page: &PetParentsPage) -> Vec<String> {
        page.view().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_search_matches_pet_names() {
        let mut page = make_page();
        page.search("whisk").unwrap();
        assert_eq!(ids(&page), vec!["PP-002"]);

        page.search("BUDDY").unwrap();
        assert_eq!(ids(&page), vec!["PP-001"]);
    }

    #[test]
    fn test_search_names_separately() {
        let mut page = make_page();
        page.search("johnson").unwrap();
        assert_eq!(ids(&page), vec!["PP-001"]);

        // First and last name are separate fields.
        page.search("sarah johnson").unwrap();
        assert!(ids(&page).is_empty());
    }

    #[test]
    fn test_status_and_payment() {
        let mut page = make_page();
        page.filter_payment(Some(PaymentMethod::Card)).unwrap();
        assert_eq!(ids(&page), vec!["PP-001", "PP-003"]);

        page.filter_status(Some(PetParentStatus::Active)).unwrap();
        assert_eq!(ids(&page), vec!["PP-001"]);
    }

    #[test]
    fn test_stats() {
        let stats = make_page().stats();
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 2);
        assert_eq!(stats.total_pets, 5);
        assert!((stats.total_revenue - 5880.5).abs() < 0.001);
    }
}
