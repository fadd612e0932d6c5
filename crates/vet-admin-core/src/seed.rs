//! Demo datasets embedded at compile time.
//!
//! Pages never read these directly; callers load them here and inject the
//! records, so a real data source can replace this module without touching
//! the filter logic.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::PanelResult;
use crate::models::{Appointment, Doctor, Donation, Moderator, PetParent, Review};

const APPOINTMENTS_JSON: &str = include_str!("../data/appointments.json");
const DOCTORS_JSON: &str = include_str!("../data/doctors.json");
const PET_PARENTS_JSON: &str = include_str!("../data/pet_parents.json");
const DONATIONS_JSON: &str = include_str!("../data/donations.json");
const REVIEWS_JSON: &str = include_str!("../data/reviews.json");

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> PanelResult<Vec<T>> {
    let records: Vec<T> = serde_json::from_str(json)?;
    debug!(dataset = name, count = records.len(), "Loaded seed data");
    Ok(records)
}

pub fn appointments() -> PanelResult<Vec<Appointment>> {
    parse("appointments", APPOINTMENTS_JSON)
}

pub fn doctors() -> PanelResult<Vec<Doctor>> {
    parse("doctors", DOCTORS_JSON)
}

pub fn pet_parents() -> PanelResult<Vec<PetParent>> {
    parse("pet_parents", PET_PARENTS_JSON)
}

pub fn donations() -> PanelResult<Vec<Donation>> {
    parse("donations", DONATIONS_JSON)
}

pub fn reviews() -> PanelResult<Vec<Review>> {
    parse("reviews", REVIEWS_JSON)
}

/// Every page's initial Record Store.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub appointments: Vec<Appointment>,
    pub doctors: Vec<Doctor>,
    pub pet_parents: Vec<PetParent>,
    pub donations: Vec<Donation>,
    pub reviews: Vec<Review>,
    /// Moderators start empty; they are created from the permissions page.
    pub moderators: Vec<Moderator>,
}

impl SeedData {
    /// Parse all embedded datasets.
    pub fn load() -> PanelResult<Self> {
        Ok(Self {
            appointments: appointments()?,
            doctors: doctors()?,
            pet_parents: pet_parents()?,
            donations: donations()?,
            reviews: reviews()?,
            moderators: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Record;
    use std::collections::HashSet;

    fn unique_ids<R: Record>(records: &[R]) -> bool
    where
        R::Id: std::hash::Hash + Eq,
    {
        let ids: HashSet<&R::Id> = records.iter().map(|r| r.id()).collect();
        ids.len() == records.len()
    }

    #[test]
    fn test_load_all() {
        let seed = SeedData::load().unwrap();
        assert_eq!(seed.appointments.len(), 6);
        assert_eq!(seed.doctors.len(), 5);
        assert_eq!(seed.pet_parents.len(), 4);
        assert_eq!(seed.donations.len(), 2);
        assert_eq!(seed.reviews.len(), 6);
        assert!(seed.moderators.is_empty());
    }

    #[test]
    fn test_ids_unique_within_store() {
        let seed = SeedData::load().unwrap();
        assert!(unique_ids(&seed.appointments));
        assert!(unique_ids(&seed.doctors));
        assert!(unique_ids(&seed.pet_parents));
        assert!(unique_ids(&seed.donations));
        assert!(unique_ids(&seed.reviews));
    }

    #[test]
    fn test_appointment_dates() {
        let dates: HashSet<String> = appointments()
            .unwrap()
            .iter()
            .map(|a| a.date.format("%Y-%m-%d").to_string())
            .collect();
        let expected: HashSet<String> = ["2024-01-15", "2024-01-16"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_bad_json_is_seed_error() {
        let result: PanelResult<Vec<Review>> = parse("reviews", "[{\"id\": 1}]");
        assert!(matches!(result, Err(crate::error::PanelError::SeedData(_))));
    }
}
