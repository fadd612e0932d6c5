//! Appointment models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

wire_enum! {
    /// Appointment lifecycle status.
    pub enum AppointmentStatus {
        Scheduled => "scheduled",
        Confirmed => "confirmed",
        InProgress => "in-progress",
        Completed => "completed",
        Cancelled => "cancelled",
        NoShow => "no-show",
    }
}

wire_enum! {
    /// Triage priority of an appointment.
    pub enum Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
}

/// A scheduled visit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Appointment ID (e.g., "APT-001")
    pub id: String,
    /// Patient name
    pub patient_name: String,
    /// Avatar URL
    pub patient_avatar: Option<String>,
    /// Attending doctor
    pub doctor_name: String,
    /// Doctor's specialty (display only)
    pub doctor_specialty: String,
    /// Appointment type (e.g., "Consultation", "Vaccination")
    pub appointment_type: String,
    /// Calendar date of the visit
    pub date: NaiveDate,
    /// Start time, "HH:MM"
    pub time: String,
    /// Duration in minutes
    pub duration: u32,
    pub status: AppointmentStatus,
    pub priority: Priority,
    pub contact_number: String,
    pub email: String,
    /// Reason for visit
    pub reason: String,
    pub notes: Option<String>,
}

impl Record for Appointment {
    type Id = String;
    const KIND: &'static str = "Appointment";

    fn id(&self) -> &String {
        &self.id
    }
}

impl Appointment {
    /// Check if this appointment falls on the given day.
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
