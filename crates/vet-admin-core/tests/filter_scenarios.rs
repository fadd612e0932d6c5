//! Page-level filter and mutation scenarios over the demo data.

use chrono::NaiveDate;

use vet_admin_core::models::{AppointmentStatus, DonationStatus, Priority, Visibility};
use vet_admin_core::pages::{AppointmentsPage, DonationsPage, ReviewsPage};
use vet_admin_core::{seed, FilterControls, Page, PanelError};

fn appointments() -> AppointmentsPage {
    AppointmentsPage::new(seed::appointments().unwrap())
}

fn appointment_ids(page: &AppointmentsPage) -> Vec<&str> {
    page.view().iter().map(|a| a.id.as_str()).collect()
}

fn review_ids(page: &ReviewsPage) -> Vec<u32> {
    page.view().iter().map(|r| r.id).collect()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_status_confirmed() {
    let mut page = appointments();
    page.filter_status(Some(AppointmentStatus::Confirmed)).unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-001"]);
}

#[test]
fn test_search_patient_name() {
    let mut page = appointments();
    page.search("emma").unwrap();

    let view = page.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "APT-003");
    assert_eq!(view[0].patient_name, "Emma Davis");
}

#[test]
fn test_confirmed_on_second_day_is_empty() {
    let mut page = appointments();
    page.filter_status(Some(AppointmentStatus::Confirmed)).unwrap();
    page.filter_date(Some(date("2024-01-16"))).unwrap();

    // An empty view is a normal result.
    assert!(page.view().is_empty());
    assert!(page.has_active_filters());
}

#[test]
fn test_search_covers_doctor_id_and_reason() {
    let mut page = appointments();

    page.search("dr. lisa").unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-004"]);

    page.search("apt-00").unwrap();
    assert_eq!(page.view().len(), 6);

    page.search("EVALUATION").unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-001", "APT-006"]);
}

#[test]
fn test_date_filter() {
    let mut page = appointments();
    page.filter_date(Some(date("2024-01-16"))).unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-005", "APT-006"]);

    page.filter_date(None).unwrap();
    assert_eq!(page.view().len(), 6);
}

#[test]
fn test_all_filters_compose() {
    let mut page = appointments();
    page.search("evaluation").unwrap();
    page.filter_priority(Some(Priority::High)).unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-006"]);

    page.filter_type(Some("Consultation")).unwrap();
    page.filter_doctor(Some("Dr. Sarah Martinez")).unwrap();
    page.filter_date(Some(date("2024-01-16"))).unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-006"]);

    page.filter_status(Some(AppointmentStatus::Cancelled)).unwrap();
    assert_eq!(appointment_ids(&page), vec!["APT-006"]);

    page.clear_filters();
    assert!(!page.has_active_filters());
    assert_eq!(page.view().len(), 6);
}

#[test]
fn test_enum_filter_is_exact() {
    let mut page = appointments();
    // "progress" is a substring of "in-progress" but not a status.
    let err = page.select("status", Some("progress")).unwrap_err();
    assert!(matches!(err, PanelError::InvalidOption { .. }));

    // Derived keys accept any value and simply match nothing.
    page.filter_type(Some("Consult")).unwrap();
    assert!(page.view().is_empty());
}

#[test]
fn test_wrong_kind_rejected() {
    let mut page = appointments();
    let err = page.set_text("status", "confirmed").unwrap_err();
    assert!(matches!(err, PanelError::FilterKindMismatch { .. }));

    let err = page.set_text("patient", "emma").unwrap_err();
    assert!(matches!(err, PanelError::UnknownFilter(_)));
    assert!(!page.has_active_filters());
}

#[test]
fn test_option_lists() {
    let page = appointments();
    assert_eq!(
        page.options("status").unwrap(),
        vec![
            "scheduled",
            "confirmed",
            "in-progress",
            "completed",
            "cancelled",
            "no-show"
        ]
    );

    let doctors = page.options("doctor").unwrap();
    assert_eq!(doctors.len(), 6);
    assert!(doctors.contains(&"Dr. Emily Brown".to_string()));

    assert!(page.options("search").is_err());
}

#[test]
fn test_toggle_review_visibility() {
    let mut page = ReviewsPage::new(seed::reviews().unwrap());
    let before = page.collection().records().to_vec();
    assert!(!before[1].visible);

    let toggled = page.toggle_visibility(2).unwrap();
    assert_eq!(toggled.id, 2);
    assert!(toggled.visible);

    let after = page.collection().records();
    for (old, new) in before.iter().zip(after) {
        if old.id != 2 {
            assert_eq!(old, new);
        }
    }

    page.filter_visibility(Some(Visibility::Shown)).unwrap();
    assert_eq!(review_ids(&page), vec![1, 2, 3, 5]);
}

#[test]
fn test_mutation_reflected_under_active_filter() {
    let mut page = DonationsPage::new(seed::donations().unwrap());
    page.filter_status(Some(DonationStatus::Confirmed)).unwrap();
    assert_eq!(page.view().len(), 1);

    page.update_status(1, DonationStatus::Cancelled).unwrap();
    assert!(page.view().is_empty());

    let donation = page.collection().get(&1).unwrap();
    assert_eq!(donation.admin_note, "Status updated to cancelled");
    assert_eq!(page.collection().get(&2).unwrap().status, DonationStatus::Pending);
}
