//! Donation models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;

wire_enum! {
    /// Payment status of a donation.
    pub enum DonationStatus {
        Confirmed => "confirmed",
        Pending => "pending",
        Cancelled => "cancelled",
    }
}

/// A donation made through a doctor's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Donation {
    pub id: u32,
    /// Donor's name
    pub donor: String,
    pub email: String,
    pub phone: String,
    /// Receiving doctor
    pub doctor: String,
    /// Amount in whole currency units
    pub amount: u32,
    pub date: NaiveDate,
    pub status: DonationStatus,
    /// Message left by the donor
    pub message: String,
    /// Internal note shown to admins
    pub admin_note: String,
}

impl Record for Donation {
    type Id = u32;
    const KIND: &'static str = "Donation";

    fn id(&self) -> &u32 {
        &self.id
    }
}

impl Donation {
    /// Apply a status change, recording it in the admin note.
    pub fn set_status(&mut self, status: DonationStatus) {
        self.status = status;
        self.admin_note = format!("Status updated to {}", status);
    }
}
