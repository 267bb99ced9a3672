use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn from_str(raw: &str) -> CoreResult<Self> {
        match raw {
            "Low" => Ok(Severity::Low),
            "Medium" => Ok(Severity::Medium),
            "High" => Ok(Severity::High),
            other => Err(CoreError::InvalidInput(format!(
                "unrecognized severity: {}",
                other
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SeverityFilter {
    All,
    Low,
    Medium,
    High,
}

impl SeverityFilter {
    pub fn from_str(raw: &str) -> CoreResult<Self> {
        match raw {
            "All" => Ok(SeverityFilter::All),
            "Low" => Ok(SeverityFilter::Low),
            "Medium" => Ok(SeverityFilter::Medium),
            "High" => Ok(SeverityFilter::High),
            other => Err(CoreError::InvalidInput(format!(
                "unrecognized severity filter: {}",
                other
            ))),
        }
    }

    pub fn admits(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Low => severity == Severity::Low,
            SeverityFilter::Medium => severity == Severity::Medium,
            SeverityFilter::High => severity == Severity::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Low => "Low",
            SeverityFilter::Medium => "Medium",
            SeverityFilter::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn from_str(raw: &str) -> CoreResult<Self> {
        match raw {
            "Newest" => Ok(SortOrder::Newest),
            "Oldest" => Ok(SortOrder::Oldest),
            other => Err(CoreError::InvalidInput(format!(
                "unrecognized sort order: {}",
                other
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Newest => "Newest",
            SortOrder::Oldest => "Oldest",
        }
    }
}

/// One reported safety incident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Incident {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub reported_at_iso: String,
    pub reported_at_epoch_ms: i64,
}

impl Incident {
    /// Build a record, parsing the timestamp once at the boundary. An
    /// unparsable timestamp maps to `i64::MIN` and therefore sorts as the
    /// oldest representable instant.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
        reported_at_iso: impl Into<String>,
    ) -> Self {
        let reported_at_iso = reported_at_iso.into();
        let reported_at_epoch_ms = parse_rfc3339_epoch_ms(&reported_at_iso).unwrap_or(i64::MIN);
        Self {
            id,
            title: title.into(),
            description: description.into(),
            severity,
            reported_at_iso,
            reported_at_epoch_ms,
        }
    }
}

fn parse_rfc3339_epoch_ms(raw: &str) -> Option<i64> {
    let parsed = time::OffsetDateTime::parse(
        raw.trim(),
        &time::format_description::well_known::Rfc3339,
    )
    .ok()?;
    Some((parsed.unix_timestamp_nanos() / 1_000_000) as i64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Severity,
}

impl DraftField {
    pub fn from_str(raw: &str) -> CoreResult<Self> {
        match raw {
            "title" => Ok(DraftField::Title),
            "description" => Ok(DraftField::Description),
            "severity" => Ok(DraftField::Severity),
            other => Err(CoreError::InvalidInput(format!(
                "unrecognized draft field: {}",
                other
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Severity => "severity",
        }
    }
}

/// An incomplete incident being composed via the form. No id or timestamp
/// until submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            severity: Severity::Medium,
        }
    }
}

impl Draft {
    /// Presence check only. Whitespace-only text counts as present; the form
    /// performs no validation beyond emptiness.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}
