use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    System,
    User,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionEvent {
    pub ts_utc: String, // RFC3339 UTC string
    pub event_type: String,
    pub session_id: String,
    pub actor: Actor,
    pub details: Value,
}

/// In-memory, append-only trail of user actions for the current session.
/// Observability only: appending never fails and never feeds back into
/// dashboard state. Nothing is written to disk and draft text never appears
/// in event details.
pub struct SessionAudit {
    session_id: String,
    events: Vec<SessionEvent>,
}

impl SessionAudit {
    pub fn start() -> Self {
        let mut audit = Self {
            session_id: format!("s_{}", Ulid::new()),
            events: Vec::new(),
        };
        audit.append("SESSION_STARTED", Actor::System, serde_json::json!({}));
        audit
    }

    pub fn append(&mut self, event_type: &str, actor: Actor, details: Value) {
        self.events.push(SessionEvent {
            ts_utc: now_rfc3339_utc(),
            event_type: event_type.to_string(),
            session_id: self.session_id.clone(),
            actor,
            details,
        });
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn now_rfc3339_utc() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap()
}
