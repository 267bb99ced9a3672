use crate::model::{Incident, SeverityFilter, SortOrder};

/// Filter-then-sort over the full collection. Pure: recomputed on every read,
/// never cached, never mutates its input. Ties on `reported_at_epoch_ms` keep
/// insertion order (stable sort).
pub fn derive_list(
    incidents: &[Incident],
    filter: SeverityFilter,
    order: SortOrder,
) -> Vec<Incident> {
    let mut out: Vec<Incident> = incidents
        .iter()
        .filter(|incident| filter.admits(incident.severity))
        .cloned()
        .collect();

    match order {
        SortOrder::Newest => {
            out.sort_by(|a, b| b.reported_at_epoch_ms.cmp(&a.reported_at_epoch_ms))
        }
        SortOrder::Oldest => {
            out.sort_by(|a, b| a.reported_at_epoch_ms.cmp(&b.reported_at_epoch_ms))
        }
    }

    out
}
