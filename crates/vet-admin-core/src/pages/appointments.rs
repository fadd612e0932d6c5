//! Appointments list page.

use chrono::NaiveDate;
use serde::Serialize;

use super::{FilterControls, Page};
use crate::error::PanelResult;
use crate::filter::{distinct_values, FilterSpec, Options};
use crate::models::{Appointment, AppointmentStatus, Priority};
use crate::view::CollectionView;

pub const APPOINTMENT_SEARCH: &str = "search";
pub const APPOINTMENT_STATUS: &str = "status";
pub const APPOINTMENT_TYPE: &str = "type";
pub const APPOINTMENT_DOCTOR: &str = "doctor";
pub const APPOINTMENT_PRIORITY: &str = "priority";
pub const APPOINTMENT_DATE: &str = "date";

fn search_fields(apt: &Appointment) -> Vec<&str> {
    vec![
        apt.patient_name.as_str(),
        apt.doctor_name.as_str(),
        apt.id.as_str(),
        apt.reason.as_str(),
    ]
}

fn status(apt: &Appointment) -> &str {
    apt.status.as_str()
}

fn appointment_type(apt: &Appointment) -> &str {
    &apt.appointment_type
}

fn doctor(apt: &Appointment) -> &str {
    &apt.doctor_name
}

fn priority(apt: &Appointment) -> &str {
    apt.priority.as_str()
}

fn date(apt: &Appointment) -> NaiveDate {
    apt.date
}

/// Filter keys of the appointments page.
pub fn appointment_filters() -> FilterSpec<Appointment> {
    FilterSpec::new()
        .text(APPOINTMENT_SEARCH, search_fields)
        .choice(
            APPOINTMENT_STATUS,
            status,
            Options::closed::<AppointmentStatus>(),
        )
        .choice(APPOINTMENT_TYPE, appointment_type, Options::Derived)
        .choice(APPOINTMENT_DOCTOR, doctor, Options::Derived)
        .choice(APPOINTMENT_PRIORITY, priority, Options::closed::<Priority>())
        .date(APPOINTMENT_DATE, date)
}

/// Header counters of the appointments page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppointmentStats {
    /// Appointments on the reference day
    pub today: usize,
    pub confirmed: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub struct AppointmentsPage {
    appointments: CollectionView<Appointment>,
}

impl AppointmentsPage {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: CollectionView::new(appointments, appointment_filters()),
        }
    }

    /// Search patient name, doctor name, ID and reason.
    pub fn search(&mut self, query: &str) -> PanelResult<()> {
        self.set_text(APPOINTMENT_SEARCH, query)
    }

    pub fn filter_status(&mut self, status: Option<AppointmentStatus>) -> PanelResult<()> {
        self.select(APPOINTMENT_STATUS, status.map(|s| s.as_str()))
    }

    pub fn filter_type(&mut self, appointment_type: Option<&str>) -> PanelResult<()> {
        self.select(APPOINTMENT_TYPE, appointment_type)
    }

    pub fn filter_doctor(&mut self, doctor: Option<&str>) -> PanelResult<()> {
        self.select(APPOINTMENT_DOCTOR, doctor)
    }

    pub fn filter_priority(&mut self, priority: Option<Priority>) -> PanelResult<()> {
        self.select(APPOINTMENT_PRIORITY, priority.map(|p| p.as_str()))
    }

    pub fn filter_date(&mut self, date: Option<NaiveDate>) -> PanelResult<()> {
        self.set_date(APPOINTMENT_DATE, date)
    }

    /// Doctors with at least one appointment.
    pub fn doctor_options(&self) -> Vec<String> {
        distinct_values(self.appointments.records(), doctor)
    }

    /// Appointment types in use.
    pub fn type_options(&self) -> Vec<String> {
        distinct_values(self.appointments.records(), appointment_type)
    }

    /// Counters over the whole record store, not the filtered view.
    pub fn stats(&self, today: NaiveDate) -> AppointmentStats {
        let records = self.appointments.records();
        let with_status =
            |status: AppointmentStatus| records.iter().filter(|a| a.status == status).count();

        AppointmentStats {
            today: records.iter().filter(|a| a.is_on(today)).count(),
            confirmed: with_status(AppointmentStatus::Confirmed),
            in_progress: with_status(AppointmentStatus::InProgress),
            completed: with_status(AppointmentStatus::Completed),
        }
    }
}

impl Page for AppointmentsPage {
    type Record = Appointment;

    fn collection(&self) -> &CollectionView<Appointment> {
        &self.appointments
    }

    fn collection_mut(&mut self) -> &mut CollectionView<Appointment> {
        &mut self.appointments
    }
}
