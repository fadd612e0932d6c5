//! The admin panel: every list page, each owning its own Record Store and
//! Filter State.

use tracing::info;

use crate::config::PanelConfig;
use crate::error::PanelResult;
use crate::pages::{
    AppointmentStats, AppointmentsPage, DoctorsPage, DonationsPage, FilterControls,
    ModeratorsPage, PageKind, PetParentsPage, ReviewsPage,
};
use crate::seed::SeedData;

pub struct AdminPanel {
    config: PanelConfig,
    appointments: AppointmentsPage,
    doctors: DoctorsPage,
    pet_parents: PetParentsPage,
    donations: DonationsPage,
    reviews: ReviewsPage,
    moderators: ModeratorsPage,
}

impl AdminPanel {
    pub fn new(config: PanelConfig, seed: SeedData) -> Self {
        info!(
            appointments = seed.appointments.len(),
            doctors = seed.doctors.len(),
            pet_parents = seed.pet_parents.len(),
            donations = seed.donations.len(),
            reviews = seed.reviews.len(),
            moderators = seed.moderators.len(),
            "Opening admin panel"
        );
        Self {
            config,
            appointments: AppointmentsPage::new(seed.appointments),
            doctors: DoctorsPage::new(seed.doctors),
            pet_parents: PetParentsPage::new(seed.pet_parents),
            donations: DonationsPage::new(seed.donations),
            reviews: ReviewsPage::new(seed.reviews),
            moderators: ModeratorsPage::new(seed.moderators),
        }
    }

    /// Open the panel over the embedded demo data.
    pub fn from_seed(config: PanelConfig) -> PanelResult<Self> {
        Ok(Self::new(config, SeedData::load()?))
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn appointments(&self) -> &AppointmentsPage {
        &self.appointments
    }

    pub fn appointments_mut(&mut self) -> &mut AppointmentsPage {
        &mut self.appointments
    }

    pub fn doctors(&self) -> &DoctorsPage {
        &self.doctors
    }

    pub fn doctors_mut(&mut self) -> &mut DoctorsPage {
        &mut self.doctors
    }

    pub fn pet_parents(&self) -> &PetParentsPage {
        &self.pet_parents
    }

    pub fn pet_parents_mut(&mut self) -> &mut PetParentsPage {
        &mut self.pet_parents
    }

    pub fn donations(&self) -> &DonationsPage {
        &self.donations
    }

    pub fn donations_mut(&mut self) -> &mut DonationsPage {
        &mut self.donations
    }

    pub fn reviews(&self) -> &ReviewsPage {
        &self.reviews
    }

    pub fn reviews_mut(&mut self) -> &mut ReviewsPage {
        &mut self.reviews
    }

    pub fn moderators(&self) -> &ModeratorsPage {
        &self.moderators
    }

    pub fn moderators_mut(&mut self) -> &mut ModeratorsPage {
        &mut self.moderators
    }

    /// Filter controls of any page.
    pub fn controls(&self, page: PageKind) -> &dyn FilterControls {
        match page {
            PageKind::Appointments => &self.appointments,
            PageKind::Doctors => &self.doctors,
            PageKind::PetParents => &self.pet_parents,
            PageKind::Donations => &self.donations,
            PageKind::Reviews => &self.reviews,
            PageKind::Moderators => &self.moderators,
        }
    }

    pub fn controls_mut(&mut self, page: PageKind) -> &mut dyn FilterControls {
        match page {
            PageKind::Appointments => &mut self.appointments,
            PageKind::Doctors => &mut self.doctors,
            PageKind::PetParents => &mut self.pet_parents,
            PageKind::Donations => &mut self.donations,
            PageKind::Reviews => &mut self.reviews,
            PageKind::Moderators => &mut self.moderators,
        }
    }

    /// Appointment counters relative to the configured reference date.
    pub fn appointment_stats(&self) -> AppointmentStats {
        self.appointments.stats(self.config.today())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::Page;
    use chrono::NaiveDate;

    fn make_panel() -> AdminPanel {
        let config = PanelConfig {
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..PanelConfig::default()
        };
        AdminPanel::from_seed(config).unwrap()
    }

    #[test]
    fn test_pages_start_unfiltered() {
        let panel = make_panel();
        for page in [
            PageKind::Appointments,
            PageKind::Doctors,
            PageKind::PetParents,
            PageKind::Donations,
            PageKind::Reviews,
            PageKind::Moderators,
        ] {
            assert!(!panel.controls(page).has_active_filters(), "{page:?}");
        }
        assert_eq!(panel.appointments().view().len(), 6);
    }

    #[test]
    fn test_filter_state_is_per_page() {
        let mut panel = make_panel();
        panel
            .controls_mut(PageKind::Appointments)
            .set_text("search", "emma")
            .unwrap();

        assert_eq!(panel.appointments().view().len(), 1);
        assert!(!panel.controls(PageKind::Doctors).has_active_filters());
        assert_eq!(panel.doctors().view().len(), 5);
    }

    #[test]
    fn test_appointment_stats_use_reference_date() {
        let stats = make_panel().appointment_stats();
        assert_eq!(stats.today, 4);
    }
}
