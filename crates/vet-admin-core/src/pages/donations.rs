//! Donations page: filterable donation records with admin status changes.

use serde::Serialize;

use super::{FilterControls, Page};
use crate::error::PanelResult;
use crate::filter::{distinct_values, FilterSpec, Options};
use crate::models::{Donation, DonationStatus};
use crate::view::CollectionView;

pub const DONATION_DONOR: &str = "donor";
pub const DONATION_DOCTOR: &str = "doctor";
pub const DONATION_STATUS: &str = "status";

fn donor_fields(donation: &Donation) -> Vec<&str> {
    vec![donation.donor.as_str(), donation.email.as_str()]
}

fn doctor(donation: &Donation) -> &str {
    &donation.doctor
}

fn status(donation: &Donation) -> &str {
    donation.status.as_str()
}

pub fn donation_filters() -> FilterSpec<Donation> {
    FilterSpec::new()
        .text(DONATION_DONOR, donor_fields)
        .choice(DONATION_DOCTOR, doctor, Options::Derived)
        .choice(
            DONATION_STATUS,
            status,
            Options::closed::<DonationStatus>(),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DonationStats {
    pub count: usize,
    /// Sum of all donation amounts
    pub total_amount: u64,
    /// Sum of confirmed donation amounts
    pub confirmed_amount: u64,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

pub struct DonationsPage {
    donations: CollectionView<Donation>,
}

impl DonationsPage {
    pub fn new(donations: Vec<Donation>) -> Self {
        Self {
            donations: CollectionView::new(donations, donation_filters()),
        }
    }

    /// Search donor name and email.
    pub fn search_donor(&mut self, query: &str) -> PanelResult<()> {
        self.set_text(DONATION_DONOR, query)
    }

    pub fn filter_doctor(&mut self, doctor: Option<&str>) -> PanelResult<()> {
        self.select(DONATION_DOCTOR, doctor)
    }

    pub fn filter_status(&mut self, status: Option<DonationStatus>) -> PanelResult<()> {
        self.select(DONATION_STATUS, status.map(|s| s.as_str()))
    }

    pub fn doctor_options(&self) -> Vec<String> {
        distinct_values(self.donations.records(), doctor)
    }

    /// Change a donation's status; the admin note records the change.
    pub fn update_status(&mut self, id: u32, status: DonationStatus) -> PanelResult<&Donation> {
        self.donations
            .update(&id, |donation| donation.set_status(status))
    }

    pub fn stats(&self) -> DonationStats {
        let records = self.donations.records();
        let with_status =
            |status: DonationStatus| records.iter().filter(|d| d.status == status).count();

        DonationStats {
            count: records.len(),
            total_amount: records.iter().map(|d| u64::from(d.amount)).sum(),
            confirmed_amount: records
                .iter()
                .filter(|d| d.status == DonationStatus::Confirmed)
                .map(|d| u64::from(d.amount))
                .sum(),
            confirmed: with_status(DonationStatus::Confirmed),
            pending: with_status(DonationStatus::Pending),
            cancelled: with_status(DonationStatus::Cancelled),
        }
    }
}

impl Page for DonationsPage {
    type Record = Donation;

    fn collection(&self) -> &CollectionView<Donation> {
        &self.donations
    }

    fn collection_mut(&mut self) -> &mut CollectionView<Donation> {
        &mut self.donations
    }
}
