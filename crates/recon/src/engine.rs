//! Report assembly: flatten probes and paired levels into rows with a
//! stable field count.

use crate::config::ExportConfig;
use crate::model::{
    BeamReport, BeamRow, CompletionSummary, ExportSummary, ProbeKind, ProbeRecord, ReportMeta,
    Section, TreeNode, WeldReport, WeldRow,
};
use crate::normalize::cleanup_name;
use crate::walker::{export_roots, walk};

/// Value fields per data row, name column excluded. Beam rows carry the six
/// beam quantities; weld rows carry FX FY FZ MX MY MZ.
pub const VALUE_FIELDS: usize = 6;

/// Vector components per force/moment reaction (X, Y, Z).
const COMPONENTS: usize = 3;

/// One beam row per probe, in collection order: connection name (trimmed)
/// plus exactly [`VALUE_FIELDS`] unit-stripped values, padded with empty
/// strings when the probe carries fewer.
pub fn beam_rows(probes: &[ProbeRecord]) -> Vec<BeamRow> {
    probes
        .iter()
        .map(|probe| {
            let mut values: Vec<String> = probe
                .values
                .iter()
                .take(VALUE_FIELDS)
                .map(|m| m.display_value())
                .collect();
            values.resize(VALUE_FIELDS, String::new());
            BeamRow {
                name: probe.reference_name.trim().to_string(),
                values,
            }
        })
        .collect()
}

/// Assemble the beam completion report from the completed probe collection.
pub fn beam_report(probes: &[ProbeRecord], summary: CompletionSummary) -> BeamReport {
    BeamReport {
        meta: ReportMeta::capture(),
        summary,
        rows: beam_rows(probes),
    }
}

/// Discover export roots among the solution children, walk them pairing
/// forces with moments, and assemble the weld report.
pub fn weld_report(children: &[TreeNode], config: &ExportConfig) -> WeldReport {
    let roots = export_roots(children, &config.marker);

    let mut sections = Vec::new();
    let mut rows = 0;
    let mut missing_secondaries = 0;
    let mut ambiguous = 0;

    for root in &roots {
        for level in walk(root, ProbeKind::ForceReaction, ProbeKind::MomentReaction, true) {
            let section_rows: Vec<WeldRow> = level
                .pairs
                .iter()
                .map(|pair| {
                    if pair.ambiguous {
                        ambiguous += 1;
                    } else if pair.secondary.is_none() {
                        missing_secondaries += 1;
                    }

                    let mut values: Vec<Option<String>> = Vec::with_capacity(VALUE_FIELDS);
                    push_components(&mut values, Some(&pair.primary));
                    push_components(&mut values, pair.secondary.as_ref());
                    WeldRow {
                        name: cleanup_name(&pair.primary.reference_name, &config.cleanup_patterns),
                        values,
                    }
                })
                .collect();

            rows += section_rows.len();
            sections.push(Section {
                label: level.label,
                rows: section_rows,
            });
        }
    }

    log::debug!(
        "weld export: {} roots, {} sections, {} rows ({} missing, {} ambiguous)",
        roots.len(),
        sections.len(),
        rows,
        missing_secondaries,
        ambiguous
    );

    WeldReport {
        meta: ReportMeta::capture(),
        summary: ExportSummary {
            sections: sections.len(),
            rows,
            missing_secondaries,
            ambiguous,
        },
        sections,
    }
}

fn push_components(values: &mut Vec<Option<String>>, probe: Option<&ProbeRecord>) {
    for i in 0..COMPONENTS {
        values.push(
            probe.and_then(|p| p.values.get(i).map(|m| m.display_value())),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ElementId, Measurement};

    fn beam_probe(reference: u64, name: &str, values: &[&str]) -> ProbeRecord {
        ProbeRecord {
            reference: ElementId(reference),
            reference_name: name.into(),
            kind: ProbeKind::BeamProbe,
            values: values.iter().map(|v| Measurement::new(*v)).collect(),
        }
    }

    #[test]
    fn beam_rows_strip_units_and_trim_names() {
        let probes = vec![beam_probe(
            1,
            " Beam A ",
            &[
                "1.1 [lbf]",
                "1.2 [lbf-in]",
                "1.3 [lbf]",
                "1.4 [lbf]",
                "1.5 [lbf-in]",
                "1.6 [lbf-in]",
            ],
        )];
        let rows = beam_rows(&probes);
        assert_eq!(rows[0].name, "Beam A");
        assert_eq!(rows[0].values, vec!["1.1", "1.2", "1.3", "1.4", "1.5", "1.6"]);
    }

    #[test]
    fn beam_rows_always_carry_six_values() {
        let short = vec![beam_probe(1, "A", &["1.0 [lbf]"])];
        let rows = beam_rows(&short);
        assert_eq!(rows[0].values.len(), VALUE_FIELDS);
        assert_eq!(rows[0].values[0], "1.0");
        assert_eq!(rows[0].values[5], "");

        let long = vec![beam_probe(1, "A", &["1", "2", "3", "4", "5", "6", "7"])];
        assert_eq!(beam_rows(&long)[0].values.len(), VALUE_FIELDS);
    }

    fn reaction(kind: ProbeKind, reference: u64, name: &str, values: &[&str]) -> TreeNode {
        TreeNode::Probe(ProbeRecord {
            reference: ElementId(reference),
            reference_name: name.into(),
            kind,
            values: values.iter().map(|v| Measurement::new(*v)).collect(),
        })
    }

    #[test]
    fn weld_rows_have_stable_field_count() {
        let children = vec![TreeNode::Group(crate::model::GroupNode {
            name: "Welds 1".into(),
            children: vec![
                reaction(ProbeKind::ForceReaction, 1, "Box 1", &["1 [lbf]", "2 [lbf]", "3 [lbf]"]),
                reaction(ProbeKind::MomentReaction, 1, "Box 1", &["4 [lbf-in]", "5 [lbf-in]", "6 [lbf-in]"]),
                reaction(ProbeKind::ForceReaction, 2, "Box 2", &["7 [lbf]", "8 [lbf]", "9 [lbf]"]),
            ],
        })];

        let report = weld_report(&children, &ExportConfig::default());
        assert_eq!(report.summary.sections, 1);
        assert_eq!(report.summary.rows, 2);
        assert_eq!(report.summary.missing_secondaries, 1);
        assert_eq!(report.summary.ambiguous, 0);

        for row in &report.sections[0].rows {
            assert_eq!(row.values.len(), VALUE_FIELDS);
        }
        let matched = &report.sections[0].rows[0];
        assert_eq!(matched.values[3].as_deref(), Some("4"));
        let lone = &report.sections[0].rows[1];
        assert_eq!(lone.values[3], None);
    }

    #[test]
    fn ambiguous_pairs_count_and_blank_the_moment_slots() {
        let children = vec![TreeNode::Group(crate::model::GroupNode {
            name: "Welds 1".into(),
            children: vec![
                reaction(ProbeKind::ForceReaction, 1, "Box 1", &["1", "2", "3"]),
                reaction(ProbeKind::MomentReaction, 1, "Box 1", &["4", "5", "6"]),
                reaction(ProbeKind::MomentReaction, 1, "Box 1", &["7", "8", "9"]),
            ],
        })];

        let report = weld_report(&children, &ExportConfig::default());
        assert_eq!(report.summary.ambiguous, 1);
        assert_eq!(report.summary.missing_secondaries, 0);
        let row = &report.sections[0].rows[0];
        let force: Vec<Option<String>> =
            vec![Some("1".into()), Some("2".into()), Some("3".into())];
        assert_eq!(&row.values[..3], force.as_slice());
        assert!(row.values[3..].iter().all(|v| v.is_none()));
    }

    #[test]
    fn no_matching_roots_yield_an_empty_report() {
        let children = vec![TreeNode::Group(crate::model::GroupNode {
            name: "Bolts".into(),
            children: vec![reaction(ProbeKind::ForceReaction, 1, "Box 1", &["1", "2", "3"])],
        })];
        let report = weld_report(&children, &ExportConfig::default());
        assert!(report.sections.is_empty());
        assert_eq!(report.summary.rows, 0);
    }

    #[test]
    fn weld_row_names_are_cleaned_up() {
        let children = vec![TreeNode::Group(crate::model::GroupNode {
            name: "Welds 1".into(),
            children: vec![reaction(
                ProbeKind::ForceReaction,
                1,
                "Force Reaction - Contact Box 1",
                &["1", "2", "3"],
            )],
        })];
        let report = weld_report(&children, &ExportConfig::default());
        assert_eq!(report.sections[0].rows[0].name, "Box 1");
    }
}
