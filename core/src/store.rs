use crate::audit::{Actor, SessionAudit, SessionEvent};
use crate::derived::derive_list;
use crate::error::CoreResult;
use crate::model::{Draft, DraftField, Incident, Severity, SeverityFilter, SortOrder};
use crate::seed::seed_incidents;
use serde_json::json;

/// Single source of truth for one dashboard session. Exactly one owner, one
/// writer: every mutation runs to completion before the next user action is
/// processed, so no locking happens here. Nothing is persisted; the state
/// dies with the session.
pub struct DashboardState {
    incidents: Vec<Incident>,
    severity_filter: SeverityFilter,
    sort_order: SortOrder,
    expanded_id: Option<u64>,
    form_open: bool,
    draft: Draft,
    next_id: u64,
    audit: SessionAudit,
}

impl DashboardState {
    pub fn new(seed: Vec<Incident>) -> Self {
        let next_id = seed.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        let mut state = Self {
            incidents: seed,
            severity_filter: SeverityFilter::All,
            sort_order: SortOrder::Newest,
            expanded_id: None,
            form_open: false,
            draft: Draft::default(),
            next_id,
            audit: SessionAudit::start(),
        };
        state.audit.append(
            "SEED_LOADED",
            Actor::System,
            json!({ "incident_count": state.incidents.len() }),
        );
        state
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_incidents())
    }

    pub fn set_severity_filter(&mut self, value: SeverityFilter) {
        self.severity_filter = value;
        self.audit.append(
            "FILTER_SET",
            Actor::User,
            json!({ "filter": value.label() }),
        );
    }

    pub fn set_sort_order(&mut self, value: SortOrder) {
        self.sort_order = value;
        self.audit
            .append("SORT_SET", Actor::User, json!({ "order": value.label() }));
    }

    /// Expand `id`, implicitly collapsing any other card; collapse if `id` is
    /// already the expanded one. At most one card is expanded at a time. The
    /// id is a lookup key only, so expanding a vanished id is harmless.
    pub fn toggle_expanded(&mut self, id: u64) {
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
            self.audit.append(
                "CARD_COLLAPSED",
                Actor::User,
                json!({ "incident_id": id }),
            );
        } else {
            self.expanded_id = Some(id);
            self.audit.append(
                "CARD_EXPANDED",
                Actor::User,
                json!({ "incident_id": id }),
            );
        }
    }

    /// Flips the form open/closed. Closing via toggle keeps the draft: typed
    /// text survives until a successful submission resets it.
    pub fn toggle_form(&mut self) {
        self.form_open = !self.form_open;
        let event_type = if self.form_open {
            "FORM_OPENED"
        } else {
            "FORM_CLOSED"
        };
        self.audit.append(event_type, Actor::User, json!({}));
    }

    /// Sets one draft field from its text representation. Title and
    /// description are stored verbatim, unvalidated. A severity value outside
    /// the enumeration is a programming error in the caller and is rejected.
    pub fn update_draft_field(&mut self, field: DraftField, value: &str) -> CoreResult<()> {
        match field {
            DraftField::Title => self.draft.title = value.to_string(),
            DraftField::Description => self.draft.description = value.to_string(),
            DraftField::Severity => self.draft.severity = Severity::from_str(value)?,
        }
        self.audit.append(
            "DRAFT_FIELD_EDITED",
            Actor::User,
            json!({ "field": field.label() }),
        );
        Ok(())
    }

    /// Commits the draft as a new incident. An empty title or description
    /// makes the whole call a no-op returning `None`: no record, no state
    /// change, no error. On success the new record is stamped with the
    /// current UTC instant, appended in insertion order, the draft resets and
    /// the form closes.
    pub fn submit_draft(&mut self) -> Option<u64> {
        if !self.draft.is_submittable() {
            self.audit.append(
                "SUBMIT_REJECTED",
                Actor::System,
                json!({
                    "title_present": !self.draft.title.is_empty(),
                    "description_present": !self.draft.description.is_empty()
                }),
            );
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let now = time::OffsetDateTime::now_utc();
        let reported_at_iso = now
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap();
        let reported_at_epoch_ms = (now.unix_timestamp_nanos() / 1_000_000) as i64;

        // Taking the draft resets it to empty in the same step.
        let draft = std::mem::take(&mut self.draft);
        let severity = draft.severity;
        self.incidents.push(Incident {
            id,
            title: draft.title,
            description: draft.description,
            severity,
            reported_at_iso,
            reported_at_epoch_ms,
        });
        self.form_open = false;

        self.audit.append(
            "INCIDENT_REPORTED",
            Actor::User,
            json!({ "incident_id": id, "severity": severity.label() }),
        );
        Some(id)
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn get(&self, id: u64) -> Option<&Incident> {
        self.incidents.iter().find(|i| i.id == id)
    }

    pub fn severity_filter(&self) -> SeverityFilter {
        self.severity_filter
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn expanded_id(&self) -> Option<u64> {
        self.expanded_id
    }

    pub fn form_open(&self) -> bool {
        self.form_open
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn session_id(&self) -> &str {
        self.audit.session_id()
    }

    pub fn audit_events(&self) -> &[SessionEvent] {
        self.audit.events()
    }

    /// The filtered-and-sorted sequence the presentation layer renders.
    /// Re-derived on every call.
    pub fn derived_list(&self) -> Vec<Incident> {
        derive_list(&self.incidents, self.severity_filter, self.sort_order)
    }
}
