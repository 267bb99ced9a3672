use crate::error::CoreResult;
use crate::model::Incident;

/// Render an incident sequence (typically the derived list) as CSV text.
/// String deliverable only; callers decide what to do with it.
pub fn render_incident_csv(incidents: &[Incident]) -> CoreResult<String> {
    let mut wtr = csv::WriterBuilder::new().from_writer(vec![]);
    wtr.write_record(["id", "title", "severity", "reported_at"])?;
    for incident in incidents {
        wtr.write_record([
            incident.id.to_string(),
            incident.title.clone(),
            incident.severity.label().to_string(),
            incident.reported_at_iso.clone(),
        ])?;
    }
    let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).replace("\r\n", "\n"))
}
