//! Vet Admin Core Library
//!
//! Page state for the veterinary clinic admin panel: record stores, filters,
//! derived views and the few local mutations the panel offers.
//!
//! # Architecture
//!
//! ```text
//!   Static data (seed)            Presentation layer (web / Swift / Kotlin)
//!          │                             │            ▲
//!          ▼                     filter edits,        │ derived view,
//!   ┌──────────────┐             mutation requests    │ option lists, stats
//!   │ Record Store │◄────────────────────┘            │
//!   └──────┬───────┘                                  │
//!          │        ┌──────────────┐                  │
//!          ├───────►│ Filter State │                  │
//!          │        └──────┬───────┘                  │
//!          ▼               ▼                          │
//!   ┌─────────────────────────────┐                   │
//!   │ FilterSpec::matches (AND)   │───► Derived View ─┘
//!   └─────────────────────────────┘
//! ```
//!
//! Every list page is a [`view::CollectionView`] built from its own
//! [`filter::FilterSpec`]. Nothing is persisted and nothing blocks.
//!
//! # Modules
//!
//! - [`models`]: Record types and closed enums for every status field
//! - [`filter`]: Filter spec, filter state and predicate composition
//! - [`view`]: Record store plus filter state, derived view, id-addressed mutation
//! - [`pages`]: Per-page filter keys, statistics and mutations
//! - [`panel`]: All pages together
//! - [`seed`]: Embedded demo datasets
//! - [`config`]: TOML configuration
//! - [`logging`]: Tracing subscriber setup

pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod pages;
pub mod panel;
pub mod seed;
pub mod view;

// Re-export commonly used types
pub use config::PanelConfig;
pub use error::{PanelError, PanelResult};
pub use filter::{FilterSpec, FilterState, FilterValue};
pub use models::{
    AdminMenu, Appointment, AppointmentStatus, Doctor, DoctorStatus, Donation, DonationStatus,
    Moderator, ModeratorDraft, PaymentMethod, PetParent, PetParentStatus, Priority, Review,
    Visibility,
};
pub use pages::{FilterControls, Page, PageKind};
pub use panel::AdminPanel;
pub use seed::SeedData;
pub use view::CollectionView;

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::str::FromStr;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum VetAdminError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PanelError> for VetAdminError {
    fn from(e: PanelError) -> Self {
        match e {
            PanelError::RecordNotFound { .. } => VetAdminError::NotFound(e.to_string()),
            PanelError::SeedData(_) | PanelError::Config(_) | PanelError::Io(_) => {
                VetAdminError::DataError(e.to_string())
            }
            PanelError::UnknownFilter(_)
            | PanelError::FilterKindMismatch { .. }
            | PanelError::InvalidOption { .. }
            | PanelError::DuplicateRecord { .. }
            | PanelError::InvalidValue(_) => VetAdminError::InvalidInput(e.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for VetAdminError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        VetAdminError::Internal(format!("Lock poisoned: {}", e))
    }
}

fn parse_wire<T>(value: &str) -> Result<T, VetAdminError>
where
    T: FromStr<Err = PanelError>,
{
    Ok(value.parse()?)
}

fn parse_date(value: &str) -> Result<NaiveDate, VetAdminError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| VetAdminError::InvalidInput(format!("Invalid date {:?}: {}", value, e)))
}

/// Counts cross the FFI as u32, saturating.
fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open the panel over the embedded demo data with default config.
#[uniffi::export]
pub fn open_panel() -> Result<Arc<VetAdminCore>, VetAdminError> {
    VetAdminCore::open(PanelConfig::default())
}

/// Open the panel with config given as a TOML string.
#[uniffi::export]
pub fn open_panel_with_config(config_toml: String) -> Result<Arc<VetAdminCore>, VetAdminError> {
    let config = PanelConfig::from_toml(&config_toml)?;
    logging::init(&config.log_filter);
    VetAdminCore::open(config)
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe panel wrapper for FFI.
#[derive(uniffi::Object)]
pub struct VetAdminCore {
    panel: Mutex<AdminPanel>,
}

impl VetAdminCore {
    fn open(config: PanelConfig) -> Result<Arc<Self>, VetAdminError> {
        let panel = AdminPanel::from_seed(config)?;
        Ok(Arc::new(Self {
            panel: Mutex::new(panel),
        }))
    }
}

#[uniffi::export]
impl VetAdminCore {
    // =========================================================================
    // Filter Controls
    // =========================================================================

    /// Set a free-text filter; an empty query clears it.
    pub fn set_text_filter(
        &self,
        page: FfiPage,
        key: String,
        query: String,
    ) -> Result<(), VetAdminError> {
        let mut panel = self.panel.lock()?;
        panel.controls_mut(page.into()).set_text(&key, &query)?;
        Ok(())
    }

    /// Select an option; `None`, `""` and `"all"` clear the selection.
    pub fn select_filter(
        &self,
        page: FfiPage,
        key: String,
        value: Option<String>,
    ) -> Result<(), VetAdminError> {
        let mut panel = self.panel.lock()?;
        panel
            .controls_mut(page.into())
            .select(&key, value.as_deref())?;
        Ok(())
    }

    /// Set a date filter from "YYYY-MM-DD"; `None` clears it.
    pub fn set_date_filter(
        &self,
        page: FfiPage,
        key: String,
        date: Option<String>,
    ) -> Result<(), VetAdminError> {
        let date = date.as_deref().map(parse_date).transpose()?;
        let mut panel = self.panel.lock()?;
        panel.controls_mut(page.into()).set_date(&key, date)?;
        Ok(())
    }

    pub fn clear_filters(&self, page: FfiPage) -> Result<(), VetAdminError> {
        let mut panel = self.panel.lock()?;
        panel.controls_mut(page.into()).clear_filters();
        Ok(())
    }

    /// Whether the page should offer its "Clear" action.
    pub fn has_active_filters(&self, page: FfiPage) -> Result<bool, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.controls(page.into()).has_active_filters())
    }

    /// Option list for a choice filter.
    pub fn filter_options(&self, page: FfiPage, key: String) -> Result<Vec<String>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.controls(page.into()).options(&key)?)
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    pub fn appointments(&self) -> Result<Vec<FfiAppointment>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel
            .appointments()
            .view()
            .into_iter()
            .map(FfiAppointment::from)
            .collect())
    }

    pub fn doctors(&self) -> Result<Vec<FfiDoctor>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.doctors().view().into_iter().map(FfiDoctor::from).collect())
    }

    pub fn pet_parents(&self) -> Result<Vec<FfiPetParent>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel
            .pet_parents()
            .view()
            .into_iter()
            .map(FfiPetParent::from)
            .collect())
    }

    pub fn donations(&self) -> Result<Vec<FfiDonation>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel
            .donations()
            .view()
            .into_iter()
            .map(FfiDonation::from)
            .collect())
    }

    pub fn reviews(&self) -> Result<Vec<FfiReview>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.reviews().view().into_iter().map(FfiReview::from).collect())
    }

    pub fn moderators(&self) -> Result<Vec<FfiModerator>, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel
            .moderators()
            .view()
            .into_iter()
            .map(FfiModerator::from)
            .collect())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn update_donation_status(
        &self,
        id: u32,
        status: String,
    ) -> Result<FfiDonation, VetAdminError> {
        let status: DonationStatus = parse_wire(&status)?;
        let mut panel = self.panel.lock()?;
        let donation = panel.donations_mut().update_status(id, status)?;
        Ok(donation.into())
    }

    pub fn toggle_review_visibility(&self, id: u32) -> Result<FfiReview, VetAdminError> {
        let mut panel = self.panel.lock()?;
        let review = panel.reviews_mut().toggle_visibility(id)?;
        Ok(review.into())
    }

    pub fn add_moderator(&self, draft: FfiModeratorDraft) -> Result<FfiModerator, VetAdminError> {
        let draft = ModeratorDraft::try_from(draft)?;
        let mut panel = self.panel.lock()?;
        let moderator = panel.moderators_mut().add(draft)?;
        Ok(moderator.into())
    }

    pub fn edit_moderator_access(
        &self,
        id: u64,
        access_list: Vec<String>,
    ) -> Result<FfiModerator, VetAdminError> {
        let access = parse_access(&access_list)?;
        let mut panel = self.panel.lock()?;
        let moderator = panel.moderators_mut().edit_access(id, access)?;
        Ok(moderator.into())
    }

    pub fn delete_moderator(&self, id: u64) -> Result<(), VetAdminError> {
        let mut panel = self.panel.lock()?;
        panel.moderators_mut().delete(id)?;
        Ok(())
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    pub fn appointment_stats(&self) -> Result<FfiAppointmentStats, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.appointment_stats().into())
    }

    pub fn doctor_stats(&self) -> Result<FfiDoctorStats, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.doctors().stats().into())
    }

    pub fn pet_parent_stats(&self) -> Result<FfiPetParentStats, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.pet_parents().stats().into())
    }

    pub fn donation_stats(&self) -> Result<FfiDonationStats, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.donations().stats().into())
    }

    pub fn review_stats(&self) -> Result<FfiReviewStats, VetAdminError> {
        let panel = self.panel.lock()?;
        Ok(panel.reviews().stats().into())
    }
}

fn parse_access(access_list: &[String]) -> Result<Vec<AdminMenu>, VetAdminError> {
    access_list.iter().map(|menu| parse_wire(menu)).collect()
}

// =========================================================================
// FFI-Safe Types
// =========================================================================

/// FFI-safe page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiPage {
    Appointments,
    Doctors,
    PetParents,
    Donations,
    Reviews,
    Moderators,
}

impl From<FfiPage> for PageKind {
    fn from(page: FfiPage) -> Self {
        match page {
            FfiPage::Appointments => PageKind::Appointments,
            FfiPage::Doctors => PageKind::Doctors,
            FfiPage::PetParents => PageKind::PetParents,
            FfiPage::Donations => PageKind::Donations,
            FfiPage::Reviews => PageKind::Reviews,
            FfiPage::Moderators => PageKind::Moderators,
        }
    }
}

/// FFI-safe appointment row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_name: String,
    pub patient_avatar: Option<String>,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub status: String,
    pub priority: String,
    pub contact_number: String,
    pub email: String,
    pub reason: String,
    pub notes: Option<String>,
}

impl From<&Appointment> for FfiAppointment {
    fn from(apt: &Appointment) -> Self {
        Self {
            id: apt.id.clone(),
            patient_name: apt.patient_name.clone(),
            patient_avatar: apt.patient_avatar.clone(),
            doctor_name: apt.doctor_name.clone(),
            doctor_specialty: apt.doctor_specialty.clone(),
            appointment_type: apt.appointment_type.clone(),
            date: format_date(apt.date),
            time: apt.time.clone(),
            duration: apt.duration,
            status: apt.status.to_string(),
            priority: apt.priority.to_string(),
            contact_number: apt.contact_number.clone(),
            email: apt.email.clone(),
            reason: apt.reason.clone(),
            notes: apt.notes.clone(),
        }
    }
}

/// FFI-safe doctor row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialization: String,
    pub qualification: String,
    pub experience: u32,
    pub status: String,
    pub rating: f64,
    pub total_patients: u32,
    pub joined_date: String,
    pub address: String,
    pub available_days: Vec<String>,
    pub consultation_fee: u32,
    pub follow_up_fee: u32,
    pub chamber_name: String,
}

impl From<&Doctor> for FfiDoctor {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            email: doctor.email.clone(),
            phone: doctor.phone.clone(),
            specialization: doctor.specialization.clone(),
            qualification: doctor.qualification.clone(),
            experience: doctor.experience,
            status: doctor.status.to_string(),
            rating: doctor.rating,
            total_patients: doctor.total_patients,
            joined_date: format_date(doctor.joined_date),
            address: doctor.address.one_line(),
            available_days: doctor
                .available_days()
                .into_iter()
                .map(String::from)
                .collect(),
            consultation_fee: doctor.fees.consultation,
            follow_up_fee: doctor.fees.follow_up,
            chamber_name: doctor.chamber.name.clone(),
        }
    }
}

/// FFI-safe pet summary.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub status: String,
}

/// FFI-safe pet parent row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetParent {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub pets: Vec<FfiPet>,
    pub registration_date: String,
    pub total_visits: u32,
    pub total_spent: f64,
    /// Pets under treatment or in critical condition
    pub pets_needing_care: u32,
    pub status: String,
    pub preferred_doctor: Option<String>,
    pub payment_method: String,
}

impl From<&PetParent> for FfiPetParent {
    fn from(parent: &PetParent) -> Self {
        Self {
            id: parent.id.clone(),
            full_name: parent.full_name(),
            email: parent.email.clone(),
            phone: parent.phone.clone(),
            address: parent.address.one_line(),
            pets: parent
                .pets
                .iter()
                .map(|pet| FfiPet {
                    id: pet.id.clone(),
                    name: pet.name.clone(),
                    species: pet.species.clone(),
                    breed: pet.breed.clone(),
                    age: pet.age,
                    status: pet.status.to_string(),
                })
                .collect(),
            registration_date: format_date(parent.registration_date),
            total_visits: parent.total_visits,
            total_spent: parent.total_spent,
            pets_needing_care: count(parent.pets_needing_care().count()),
            status: parent.status.to_string(),
            preferred_doctor: parent.preferred_doctor.clone(),
            payment_method: parent.payment_method.to_string(),
        }
    }
}

/// FFI-safe donation row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDonation {
    pub id: u32,
    pub donor: String,
    pub email: String,
    pub phone: String,
    pub doctor: String,
    pub amount: u32,
    pub date: String,
    pub status: String,
    pub message: String,
    pub admin_note: String,
}

impl From<&Donation> for FfiDonation {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id,
            donor: donation.donor.clone(),
            email: donation.email.clone(),
            phone: donation.phone.clone(),
            doctor: donation.doctor.clone(),
            amount: donation.amount,
            date: format_date(donation.date),
            status: donation.status.to_string(),
            message: donation.message.clone(),
            admin_note: donation.admin_note.clone(),
        }
    }
}

/// FFI-safe review row.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReview {
    pub id: u32,
    pub reviewer: String,
    pub email: String,
    pub target: String,
    pub kind: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    pub visible: bool,
}

impl From<&Review> for FfiReview {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id,
            reviewer: review.reviewer.clone(),
            email: review.email.clone(),
            target: review.target.clone(),
            kind: review.kind.clone(),
            rating: review.rating,
            comment: review.comment.clone(),
            date: format_date(review.date),
            visible: review.visible,
        }
    }
}

/// FFI-safe moderator.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiModerator {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub access_list: Vec<String>,
}

impl From<&Moderator> for FfiModerator {
    fn from(moderator: &Moderator) -> Self {
        Self {
            id: moderator.id,
            name: moderator.name.clone(),
            email: moderator.email.clone(),
            phone: moderator.phone.clone(),
            access_list: moderator
                .access_list
                .iter()
                .map(|menu| menu.to_string())
                .collect(),
        }
    }
}

/// FFI-safe moderator form input.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiModeratorDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub access_list: Vec<String>,
}

impl TryFrom<FfiModeratorDraft> for ModeratorDraft {
    type Error = VetAdminError;

    fn try_from(draft: FfiModeratorDraft) -> Result<Self, Self::Error> {
        Ok(ModeratorDraft {
            access_list: parse_access(&draft.access_list)?,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        })
    }
}

/// FFI-safe appointment counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointmentStats {
    pub today: u32,
    pub confirmed: u32,
    pub in_progress: u32,
    pub completed: u32,
}

impl From<pages::AppointmentStats> for FfiAppointmentStats {
    fn from(stats: pages::AppointmentStats) -> Self {
        Self {
            today: count(stats.today),
            confirmed: count(stats.confirmed),
            in_progress: count(stats.in_progress),
            completed: count(stats.completed),
        }
    }
}

/// FFI-safe doctor counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDoctorStats {
    pub total: u32,
    pub active: u32,
    pub pending: u32,
    pub average_rating: f64,
}

impl From<pages::DoctorStats> for FfiDoctorStats {
    fn from(stats: pages::DoctorStats) -> Self {
        Self {
            total: count(stats.total),
            active: count(stats.active),
            pending: count(stats.pending),
            average_rating: stats.average_rating,
        }
    }
}

/// FFI-safe pet parent counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPetParentStats {
    pub total: u32,
    pub active: u32,
    pub total_pets: u32,
    pub total_revenue: f64,
}

impl From<pages::PetParentStats> for FfiPetParentStats {
    fn from(stats: pages::PetParentStats) -> Self {
        Self {
            total: count(stats.total),
            active: count(stats.active),
            total_pets: count(stats.total_pets),
            total_revenue: stats.total_revenue,
        }
    }
}

/// FFI-safe donation counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDonationStats {
    pub count: u32,
    pub total_amount: u64,
    pub confirmed_amount: u64,
    pub confirmed: u32,
    pub pending: u32,
    pub cancelled: u32,
}

impl From<pages::DonationStats> for FfiDonationStats {
    fn from(stats: pages::DonationStats) -> Self {
        Self {
            count: count(stats.count),
            total_amount: stats.total_amount,
            confirmed_amount: stats.confirmed_amount,
            confirmed: count(stats.confirmed),
            pending: count(stats.pending),
            cancelled: count(stats.cancelled),
        }
    }
}

/// FFI-safe review counters.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiReviewStats {
    pub total: u32,
    pub shown: u32,
    pub hidden: u32,
    pub average_rating: f64,
}

impl From<pages::ReviewStats> for FfiReviewStats {
    fn from(stats: pages::ReviewStats) -> Self {
        Self {
            total: count(stats.total),
            shown: count(stats.shown),
            hidden: count(stats.hidden),
            average_rating: stats.average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_saturates() {
        assert_eq!(count(7), 7);
        assert_eq!(count(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(count(usize::MAX), u32::MAX);
    }
}
