//! Doctors list page.

use serde::Serialize;

use super::{average_rounded, FilterControls, Page};
use crate::error::PanelResult;
use crate::filter::{distinct_values, FilterSpec, Options};
use crate::models::{Doctor, DoctorStatus};
use crate::view::CollectionView;

pub const DOCTOR_SEARCH: &str = "search";
pub const DOCTOR_STATUS: &str = "status";
pub const DOCTOR_SPECIALIZATION: &str = "specialization";

fn search_fields(doctor: &Doctor) -> Vec<&str> {
    vec![
        doctor.name.as_str(),
        doctor.email.as_str(),
        doctor.specialization.as_str(),
    ]
}

fn status(doctor: &Doctor) -> &str {
    doctor.status.as_str()
}

fn specialization(doctor: &Doctor) -> &str {
    &doctor.specialization
}

pub fn doctor_filters() -> FilterSpec<Doctor> {
    FilterSpec::new()
        .text(DOCTOR_SEARCH, search_fields)
        .choice(DOCTOR_STATUS, status, Options::closed::<DoctorStatus>())
        .choice(DOCTOR_SPECIALIZATION, specialization, Options::Derived)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DoctorStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    /// Mean rating, one decimal
    pub average_rating: f64,
}

pub struct DoctorsPage {
    doctors: CollectionView<Doctor>,
}

impl DoctorsPage {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            doctors: CollectionView::new(doctors, doctor_filters()),
        }
    }

    /// Search name, email and specialization.
    pub fn search(&mut self, query: &str) -> PanelResult<()> {
        self.set_text(DOCTOR_SEARCH, query)
    }

    pub fn filter_status(&mut self, status: Option<DoctorStatus>) -> PanelResult<()> {
        self.select(DOCTOR_STATUS, status.map(|s| s.as_str()))
    }

    pub fn filter_specialization(&mut self, specialization: Option<&str>) -> PanelResult<()> {
        self.select(DOCTOR_SPECIALIZATION, specialization)
    }

    pub fn specialization_options(&self) -> Vec<String> {
        distinct_values(self.doctors.records(), specialization)
    }

    pub fn stats(&self) -> DoctorStats {
        let records = self.doctors.records();
        let with_status =
            |status: DoctorStatus| records.iter().filter(|d| d.status == status).count();

        DoctorStats {
            total: records.len(),
            active: with_status(DoctorStatus::Active),
            pending: with_status(DoctorStatus::Pending),
            average_rating: average_rounded(records.iter().map(|d| d.rating)),
        }
    }
}

impl Page for DoctorsPage {
    type Record = Doctor;

    fn collection(&self) -> &CollectionView<Doctor> {
        &self.doctors
    }

    fn collection_mut(&mut self) -> &mut CollectionView<Doctor> {
        &mut self.doctors
    }
}
