//! Hierarchical walk over result-tree groups, pairing level by level.

use crate::model::{GroupNode, PairedLevel, ProbeKind, ProbeRecord, TreeNode};
use crate::pair::pair;

/// Top-level groups whose name marks them as export roots.
///
/// Case-insensitive substring match, applied at this level only — nested
/// groups are included unconditionally once their root is selected.
pub fn export_roots<'a>(children: &'a [TreeNode], marker: &str) -> Vec<&'a GroupNode> {
    let marker = marker.to_lowercase();
    children
        .iter()
        .filter_map(|node| match node {
            TreeNode::Group(group) if group.name.to_lowercase().contains(&marker) => Some(group),
            _ => None,
        })
        .collect()
}

/// Depth-first walk pairing primary/secondary records one level at a time.
///
/// Records inside a nested subgroup are never visible to a pairing at a
/// shallower level, and vice versa. A level contributes output only when it
/// holds at least one primary; subgroups are recursed into either way, in
/// encounter order. The root level is unlabeled, nested levels carry their
/// group name — `is_root` keeps that asymmetry explicit rather than
/// inferring it from depth.
pub fn walk(
    group: &GroupNode,
    primary_kind: ProbeKind,
    secondary_kind: ProbeKind,
    is_root: bool,
) -> Vec<PairedLevel> {
    let mut levels = Vec::new();
    walk_into(group, primary_kind, secondary_kind, is_root, &mut levels);
    levels
}

fn walk_into(
    group: &GroupNode,
    primary_kind: ProbeKind,
    secondary_kind: ProbeKind,
    is_root: bool,
    out: &mut Vec<PairedLevel>,
) {
    let mut primaries: Vec<ProbeRecord> = Vec::new();
    let mut secondaries: Vec<ProbeRecord> = Vec::new();
    let mut subgroups: Vec<&GroupNode> = Vec::new();

    for child in &group.children {
        match child {
            TreeNode::Probe(p) if p.kind == primary_kind => primaries.push(p.clone()),
            TreeNode::Probe(p) if p.kind == secondary_kind => secondaries.push(p.clone()),
            TreeNode::Probe(_) => {}
            TreeNode::Group(sub) => subgroups.push(sub),
        }
    }

    if !primaries.is_empty() {
        out.push(PairedLevel {
            label: if is_root { None } else { Some(group.name.clone()) },
            pairs: pair(&primaries, &secondaries),
        });
    }

    for sub in subgroups {
        walk_into(sub, primary_kind, secondary_kind, false, out);
    }
}
