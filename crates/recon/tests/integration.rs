use mechprobe_recon::engine::weld_report;
use mechprobe_recon::model::{ElementId, GroupNode, Measurement, ProbeKind, ProbeRecord, TreeNode};
use mechprobe_recon::ExportConfig;

fn reaction(kind: ProbeKind, reference: u64, name: &str, values: [&str; 3]) -> TreeNode {
    TreeNode::Probe(ProbeRecord {
        reference: ElementId(reference),
        reference_name: name.into(),
        kind,
        values: values.iter().map(|v| Measurement::new(*v)).collect(),
    })
}

fn group(name: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::Group(GroupNode {
        name: name.into(),
        children,
    })
}

/// Result-tree fixture shaped like the documented solution layout:
///
/// ```text
/// Solution
/// |-- Solution Information (ignored, not a group or reaction)
/// |-- Welds 1
///     |-- Box 1
///     |    |-- Force Reaction 1 / Moment Reaction 1
///     |-- Box 2
///     |    |-- Force Reaction 3 (no moment)
///     |-- Force Reaction 4 / Moment Reaction 4
/// |-- Bolts (never entered)
/// ```
fn solution_children() -> Vec<TreeNode> {
    vec![
        group(
            "Welds 1",
            vec![
                group(
                    "Box 1",
                    vec![
                        reaction(
                            ProbeKind::ForceReaction,
                            1,
                            "Contact Box 1",
                            ["10. [lbf]", "20. [lbf]", "30. [lbf]"],
                        ),
                        reaction(
                            ProbeKind::MomentReaction,
                            1,
                            "Contact Box 1",
                            ["1. [lbf-in]", "2. [lbf-in]", "3. [lbf-in]"],
                        ),
                    ],
                ),
                group(
                    "Box 2",
                    vec![reaction(
                        ProbeKind::ForceReaction,
                        2,
                        "Contact Box 2",
                        ["40. [lbf]", "50. [lbf]", "60. [lbf]"],
                    )],
                ),
                reaction(
                    ProbeKind::ForceReaction,
                    4,
                    "Contact Box 4",
                    ["70. [lbf]", "80. [lbf]", "90. [lbf]"],
                ),
                reaction(
                    ProbeKind::MomentReaction,
                    4,
                    "Contact Box 4",
                    ["7. [lbf-in]", "8. [lbf-in]", "9. [lbf-in]"],
                ),
            ],
        ),
        group(
            "Bolts",
            vec![reaction(
                ProbeKind::ForceReaction,
                9,
                "Contact Bolt",
                ["0.1 [lbf]", "0.2 [lbf]", "0.3 [lbf]"],
            )],
        ),
    ]
}

#[test]
fn nested_layout_flattens_depth_first_with_root_unlabeled() {
    let report = weld_report(&solution_children(), &ExportConfig::default());

    // Root-level pair first (unlabeled), then Box 1 and Box 2 in order.
    assert_eq!(report.summary.sections, 3);
    assert_eq!(report.summary.rows, 3);
    assert_eq!(report.summary.missing_secondaries, 1);
    assert_eq!(report.summary.ambiguous, 0);

    let labels: Vec<Option<&str>> = report
        .sections
        .iter()
        .map(|s| s.label.as_deref())
        .collect();
    assert_eq!(labels, vec![None, Some("Box 1"), Some("Box 2")]);

    // Root level: Force/Moment Reaction 4.
    let root_row = &report.sections[0].rows[0];
    assert_eq!(root_row.name, "Box 4");
    assert_eq!(root_row.values[0].as_deref(), Some("70."));
    assert_eq!(root_row.values[5].as_deref(), Some("9."));

    // Box 1: fully paired; Box 2: moment fields blank.
    assert_eq!(report.sections[1].rows[0].name, "Box 1");
    assert_eq!(report.sections[1].rows[0].values[3].as_deref(), Some("1."));
    assert_eq!(report.sections[2].rows[0].name, "Box 2");
    assert_eq!(report.sections[2].rows[0].values[3], None);

    // The bolt group never contributes.
    assert!(report
        .sections
        .iter()
        .all(|s| s.rows.iter().all(|r| r.name != "Bolt")));
}

#[test]
fn report_serializes_to_json() {
    let report = weld_report(&solution_children(), &ExportConfig::default());
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["summary"]["rows"], 3);
    assert_eq!(json["sections"][0]["label"], serde_json::Value::Null);
    assert_eq!(json["sections"][1]["label"], "Box 1");
    assert_eq!(json["sections"][1]["rows"][0]["values"][0], "10.");
    assert!(json["meta"]["engine_version"].is_string());
}

#[test]
fn marker_override_changes_discovery() {
    let config = ExportConfig::from_toml(r#"marker = "bolt""#).unwrap();
    let report = weld_report(&solution_children(), &config);

    assert_eq!(report.summary.sections, 1);
    assert_eq!(report.sections[0].rows[0].name, "Bolt");
}
