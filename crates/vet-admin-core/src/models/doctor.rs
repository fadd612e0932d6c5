//! Doctor (veterinarian) profile models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Address, Record};

wire_enum! {
    /// Registration status of a doctor.
    pub enum DoctorStatus {
        Active => "active",
        Pending => "pending",
        Suspended => "suspended",
    }
}

/// A registered veterinarian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Specialization (e.g., "Surgery", "Dermatology")
    pub specialization: String,
    pub qualification: String,
    /// Years of experience
    pub experience: u32,
    pub license_number: String,
    pub profile_image: String,
    pub status: DoctorStatus,
    /// Average rating (0.0 - 5.0)
    pub rating: f64,
    pub total_patients: u32,
    pub joined_date: NaiveDate,
    pub address: Address,
    /// Weekly availability
    pub schedule: Vec<ScheduleSlot>,
    pub fees: Fees,
    pub chamber: Chamber,
}

/// One weekday of a doctor's schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}

/// Consultation fees in whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub consultation: u32,
    pub follow_up: u32,
}

/// The clinic a doctor practices from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chamber {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Record for Doctor {
    type Id = String;
    const KIND: &'static str = "Doctor";

    fn id(&self) -> &String {
        &self.id
    }
}

impl Doctor {
    /// Days the doctor is available, in schedule order.
    pub fn available_days(&self) -> Vec<&str> {
        self.schedule
            .iter()
            .filter(|slot| slot.is_available)
            .map(|slot| slot.day.as_str())
            .collect()
    }
}
