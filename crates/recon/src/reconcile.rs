//! Set reconciliation between connection elements and existing probes.

use std::collections::BTreeSet;

use crate::model::{ConnectionElement, ElementId, ProbeRecord};

/// Ids referenced by the given probes.
pub fn reference_ids(probes: &[ProbeRecord]) -> BTreeSet<ElementId> {
    probes.iter().map(|p| p.reference).collect()
}

/// Connections that have no probe yet.
///
/// True set semantics keyed on [`ElementId`]: duplicate connections
/// collapse, suppressed connections are skipped, and a connection is
/// returned iff its id does not appear as the reference of any existing
/// probe. Encounter order is preserved so downstream creation is
/// deterministic, but the order carries no meaning.
pub fn missing_probes(
    connections: &[ConnectionElement],
    existing: &[ProbeRecord],
) -> Vec<ConnectionElement> {
    let covered = reference_ids(existing);
    let mut seen = BTreeSet::new();
    let mut missing = Vec::new();

    for connection in connections {
        if connection.suppressed {
            continue;
        }
        if !seen.insert(connection.id) {
            continue;
        }
        if covered.contains(&connection.id) {
            continue;
        }
        missing.push(connection.clone());
    }

    missing
}
