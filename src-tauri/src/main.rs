#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use incident_core::audit::SessionEvent;
use incident_core::model::{Draft, DraftField, Incident, SeverityFilter, SortOrder};
use incident_core::render::render_incident_csv;
use incident_core::store::DashboardState;
use serde::Serialize;
use std::sync::Mutex;
use tauri::State;

struct Dashboard(Mutex<DashboardState>);

#[derive(Debug, Serialize)]
struct UiDashboardSnapshot {
    session_id: String,
    severity_filter: &'static str,
    sort_order: &'static str,
    expanded_id: Option<u64>,
    form_open: bool,
    draft: Draft,
    incident_count: usize,
}

fn lock_state<'a>(
    dashboard: &'a State<'_, Dashboard>,
) -> Result<std::sync::MutexGuard<'a, DashboardState>, String> {
    dashboard.0.lock().map_err(|_| "dashboard state lock poisoned".to_string())
}

#[tauri::command]
fn get_dashboard_snapshot(dashboard: State<'_, Dashboard>) -> Result<UiDashboardSnapshot, String> {
    let state = lock_state(&dashboard)?;
    Ok(UiDashboardSnapshot {
        session_id: state.session_id().to_string(),
        severity_filter: state.severity_filter().label(),
        sort_order: state.sort_order().label(),
        expanded_id: state.expanded_id(),
        form_open: state.form_open(),
        draft: state.draft().clone(),
        incident_count: state.incidents().len(),
    })
}

#[tauri::command]
fn list_incidents(dashboard: State<'_, Dashboard>) -> Result<Vec<Incident>, String> {
    let state = lock_state(&dashboard)?;
    Ok(state.derived_list())
}

#[tauri::command]
fn set_severity_filter(dashboard: State<'_, Dashboard>, value: String) -> Result<(), String> {
    let filter = SeverityFilter::from_str(&value).map_err(|e| e.to_string())?;
    let mut state = lock_state(&dashboard)?;
    state.set_severity_filter(filter);
    Ok(())
}

#[tauri::command]
fn set_sort_order(dashboard: State<'_, Dashboard>, value: String) -> Result<(), String> {
    let order = SortOrder::from_str(&value).map_err(|e| e.to_string())?;
    let mut state = lock_state(&dashboard)?;
    state.set_sort_order(order);
    Ok(())
}

#[tauri::command]
fn toggle_expanded(dashboard: State<'_, Dashboard>, id: u64) -> Result<Option<u64>, String> {
    let mut state = lock_state(&dashboard)?;
    state.toggle_expanded(id);
    Ok(state.expanded_id())
}

#[tauri::command]
fn toggle_form(dashboard: State<'_, Dashboard>) -> Result<bool, String> {
    let mut state = lock_state(&dashboard)?;
    state.toggle_form();
    Ok(state.form_open())
}

#[tauri::command]
fn update_draft_field(
    dashboard: State<'_, Dashboard>,
    field: String,
    value: String,
) -> Result<(), String> {
    let field = DraftField::from_str(&field).map_err(|e| e.to_string())?;
    let mut state = lock_state(&dashboard)?;
    state.update_draft_field(field, &value).map_err(|e| e.to_string())
}

#[tauri::command]
fn submit_draft(dashboard: State<'_, Dashboard>) -> Result<Option<u64>, String> {
    let mut state = lock_state(&dashboard)?;
    Ok(state.submit_draft())
}

#[tauri::command]
fn export_incidents_csv(dashboard: State<'_, Dashboard>) -> Result<String, String> {
    let state = lock_state(&dashboard)?;
    render_incident_csv(&state.derived_list()).map_err(|e| e.to_string())
}

#[tauri::command]
fn list_session_audit(dashboard: State<'_, Dashboard>) -> Result<Vec<SessionEvent>, String> {
    let state = lock_state(&dashboard)?;
    Ok(state.audit_events().to_vec())
}

fn main() {
    tauri::Builder::default()
        .manage(Dashboard(Mutex::new(DashboardState::with_seed_data())))
        .invoke_handler(tauri::generate_handler![
            get_dashboard_snapshot,
            list_incidents,
            set_severity_filter,
            set_sort_order,
            toggle_expanded,
            toggle_form,
            update_draft_field,
            submit_draft,
            export_incidents_csv,
            list_session_audit
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
