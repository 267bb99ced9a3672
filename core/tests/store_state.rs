use incident_core::model::{Draft, DraftField, Severity, SeverityFilter, SortOrder};
use incident_core::store::DashboardState;

#[test]
fn store_starts_with_defaults() {
    let state = DashboardState::with_seed_data();
    assert_eq!(state.incidents().len(), 3);
    assert_eq!(state.severity_filter(), SeverityFilter::All);
    assert_eq!(state.sort_order(), SortOrder::Newest);
    assert_eq!(state.expanded_id(), None);
    assert!(!state.form_open());
    assert!(!state.draft().is_submittable());
}

#[test]
fn setters_assign_filter_and_order() {
    let mut state = DashboardState::with_seed_data();
    state.set_severity_filter(SeverityFilter::Low);
    state.set_sort_order(SortOrder::Oldest);
    assert_eq!(state.severity_filter(), SeverityFilter::Low);
    assert_eq!(state.sort_order(), SortOrder::Oldest);
}

#[test]
fn submit_with_empty_title_changes_nothing() {
    let mut state = DashboardState::with_seed_data();
    state.toggle_form();
    state
        .update_draft_field(DraftField::Description, "only a description")
        .unwrap();
    let form_open_before = state.form_open();

    assert_eq!(state.submit_draft(), None);
    assert_eq!(state.incidents().len(), 3);
    assert_eq!(state.form_open(), form_open_before);
    assert_eq!(state.draft().description, "only a description");
}

#[test]
fn submit_with_empty_description_changes_nothing() {
    let mut state = DashboardState::with_seed_data();
    state.toggle_form();
    state
        .update_draft_field(DraftField::Title, "only a title")
        .unwrap();
    assert_eq!(state.submit_draft(), None);
    assert_eq!(state.incidents().len(), 3);
}

#[test]
fn successful_submit_appends_and_resets() {
    let mut state = DashboardState::with_seed_data();
    state.toggle_form();
    state.update_draft_field(DraftField::Title, "X").unwrap();
    state.update_draft_field(DraftField::Description, "Y").unwrap();
    state
        .update_draft_field(DraftField::Severity, "High")
        .unwrap();

    let id = state.submit_draft();
    assert_eq!(id, Some(4));
    assert_eq!(state.incidents().len(), 4);
    assert!(!state.form_open());
    assert_eq!(state.draft(), &Draft::default());

    let created = state.get(4).unwrap();
    assert_eq!(created.title, "X");
    assert_eq!(created.description, "Y");
    assert_eq!(created.severity, Severity::High);
    assert_ne!(created.reported_at_epoch_ms, i64::MIN);
    assert!(!created.reported_at_iso.is_empty());
}

#[test]
fn ids_stay_monotonic_across_submissions() {
    let mut state = DashboardState::with_seed_data();
    for expected in 4..=6 {
        state.update_draft_field(DraftField::Title, "t").unwrap();
        state.update_draft_field(DraftField::Description, "d").unwrap();
        assert_eq!(state.submit_draft(), Some(expected));
    }
    let ids: Vec<u64> = state.incidents().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn expansion_is_exclusive_and_round_trips() {
    let mut state = DashboardState::with_seed_data();
    state.toggle_expanded(1);
    assert_eq!(state.expanded_id(), Some(1));
    state.toggle_expanded(2);
    assert_eq!(state.expanded_id(), Some(2));
    state.toggle_expanded(2);
    assert_eq!(state.expanded_id(), None);
}

#[test]
fn form_state_machine_closed_open_closed() {
    let mut state = DashboardState::with_seed_data();
    assert!(!state.form_open());
    state.toggle_form();
    assert!(state.form_open());
    state.update_draft_field(DraftField::Title, "self-loop").unwrap();
    assert!(state.form_open());
    state.toggle_form();
    assert!(!state.form_open());
}
