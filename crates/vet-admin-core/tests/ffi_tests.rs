//! Tests for the exported FFI object.

use vet_admin_core::{
    open_panel, open_panel_with_config, FfiModeratorDraft, FfiPage, VetAdminError,
};

#[test]
fn test_filter_round_trip() -> anyhow::Result<()> {
    let core = open_panel()?;
    assert_eq!(core.appointments()?.len(), 6);

    core.select_filter(FfiPage::Appointments, "status".into(), Some("confirmed".into()))?;
    let view = core.appointments()?;
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, "APT-001");
    assert_eq!(view[0].date, "2024-01-15");
    assert!(core.has_active_filters(FfiPage::Appointments)?);

    core.set_date_filter(FfiPage::Appointments, "date".into(), Some("2024-01-16".into()))?;
    assert!(core.appointments()?.is_empty());

    core.clear_filters(FfiPage::Appointments)?;
    assert!(!core.has_active_filters(FfiPage::Appointments)?);
    assert_eq!(core.appointments()?.len(), 6);
    Ok(())
}

#[test]
fn test_empty_and_all_selections_match_everything() -> anyhow::Result<()> {
    let core = open_panel()?;

    core.select_filter(FfiPage::Donations, "doctor".into(), Some(String::new()))?;
    assert_eq!(core.donations()?.len(), 2);
    assert!(!core.has_active_filters(FfiPage::Donations)?);

    core.select_filter(FfiPage::Appointments, "doctor".into(), Some("all".into()))?;
    core.select_filter(FfiPage::Appointments, "status".into(), Some(String::new()))?;
    assert_eq!(core.appointments()?.len(), 6);
    assert!(!core.has_active_filters(FfiPage::Appointments)?);

    core.select_filter(FfiPage::Reviews, "visibility".into(), Some("shown".into()))?;
    core.select_filter(FfiPage::Reviews, "visibility".into(), Some("all".into()))?;
    assert_eq!(core.reviews()?.len(), 6);
    Ok(())
}

#[test]
fn test_pet_parent_rows() -> anyhow::Result<()> {
    let core = open_panel()?;
    core.set_text_filter(FfiPage::PetParents, "search".into(), "whisk".into())?;

    let rows = core.pet_parents()?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].full_name, "Emily Rodriguez");
    assert_eq!(rows[0].pets_needing_care, 1);
    Ok(())
}

#[test]
fn test_invalid_input_errors() -> anyhow::Result<()> {
    let core = open_panel()?;

    let err = core
        .set_date_filter(FfiPage::Appointments, "date".into(), Some("16/01/2024".into()))
        .unwrap_err();
    assert!(matches!(err, VetAdminError::InvalidInput(_)));

    let err = core
        .select_filter(FfiPage::Reviews, "visibility".into(), Some("public".into()))
        .unwrap_err();
    assert!(matches!(err, VetAdminError::InvalidInput(_)));

    let err = core.toggle_review_visibility(42).unwrap_err();
    assert!(matches!(err, VetAdminError::NotFound(_)));
    Ok(())
}

#[test]
fn test_donation_and_review_mutations() -> anyhow::Result<()> {
    let core = open_panel()?;

    let donation = core.update_donation_status(2, "confirmed".into())?;
    assert_eq!(donation.status, "confirmed");
    assert_eq!(donation.admin_note, "Status updated to confirmed");
    assert_eq!(core.donation_stats()?.confirmed_amount, 35);

    let review = core.toggle_review_visibility(2)?;
    assert!(review.visible);
    assert_eq!(core.review_stats()?.shown, 4);
    Ok(())
}

#[test]
fn test_moderator_lifecycle() -> anyhow::Result<()> {
    let core = open_panel()?;
    assert!(core.moderators()?.is_empty());

    let added = core.add_moderator(FfiModeratorDraft {
        name: "Kim".into(),
        email: "kim@vetclinic.com".into(),
        phone: "+1 (555) 010-0000".into(),
        access_list: vec!["Reviews".into(), "Dashboard".into()],
    })?;
    assert_eq!(added.access_list, vec!["Dashboard", "Reviews"]);

    let edited = core.edit_moderator_access(added.id, vec!["Settings".into()])?;
    assert_eq!(edited.name, "Kim");
    assert_eq!(edited.access_list, vec!["Settings"]);

    let err = core
        .edit_moderator_access(added.id, vec!["Billing".into()])
        .unwrap_err();
    assert!(matches!(err, VetAdminError::InvalidInput(_)));

    core.delete_moderator(added.id)?;
    assert!(core.moderators()?.is_empty());
    Ok(())
}

#[test]
fn test_config_reference_date() -> anyhow::Result<()> {
    let core = open_panel_with_config("reference_date = \"2024-01-16\"".into())?;
    assert_eq!(core.appointment_stats()?.today, 2);

    let err = open_panel_with_config("reference_date = 5".into()).err();
    assert!(matches!(err, Some(VetAdminError::DataError(_))));
    Ok(())
}
