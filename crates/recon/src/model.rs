use serde::Serialize;

use crate::normalize::strip_unit;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Opaque identity of a host model element (connection or contact region).
///
/// Reconciliation and pairing key on this and nothing else. Names and other
/// attributes are mutable in the host and never participate in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Input model
// ---------------------------------------------------------------------------

/// A physical joint/weld/contact element, owned by the host model.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionElement {
    pub id: ElementId,
    pub name: String,
    /// Suppressed elements are excluded from processing.
    pub suppressed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    BeamProbe,
    ForceReaction,
    MomentReaction,
}

impl std::fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeamProbe => write!(f, "beam_probe"),
            Self::ForceReaction => write!(f, "force_reaction"),
            Self::MomentReaction => write!(f, "moment_reaction"),
        }
    }
}

/// A host-formatted measurement value, possibly carrying a trailing
/// bracketed unit (`"136.99 [lbf]"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement(pub String);

impl Measurement {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Textual value with the unit annotation stripped.
    pub fn display_value(&self) -> String {
        strip_unit(&self.0)
    }
}

/// A single measurement entry bound to one element.
///
/// Beam probes carry six values in fixed order (axial force, torque, shear
/// at I, shear at J, moment at I, moment at J); force/moment reactions
/// carry three (X, Y, Z).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeRecord {
    pub reference: ElementId,
    /// Name of the referenced element, display only.
    pub reference_name: String,
    pub kind: ProbeKind,
    pub values: Vec<Measurement>,
}

// ---------------------------------------------------------------------------
// Result tree
// ---------------------------------------------------------------------------

/// Named container in the result hierarchy. Children are ordered and the
/// order is preserved in output; nesting depth is unbounded.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    Group(GroupNode),
    Probe(ProbeRecord),
}

// ---------------------------------------------------------------------------
// Pairing
// ---------------------------------------------------------------------------

/// Outcome of matching one primary record against the secondaries sharing
/// its reference. With two or more candidates the match is abandoned and
/// `ambiguous` is set; it is never resolved by picking the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub primary: ProbeRecord,
    pub secondary: Option<ProbeRecord>,
    pub ambiguous: bool,
}

/// Pairs produced at one tree level. `label` is `None` at the root level;
/// nested levels carry their group name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedLevel {
    pub label: Option<String>,
    pub pairs: Vec<PairResult>,
}

// ---------------------------------------------------------------------------
// Assembled reports
// ---------------------------------------------------------------------------

/// One beam completion data row: connection name plus six value fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeamRow {
    pub name: String,
    pub values: Vec<String>,
}

/// One weld export data row: normalized name plus six value slots
/// (FX FY FZ MX MY MZ). Unmatched slots stay `None` and render as empty
/// fields so the column count never varies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeldRow {
    pub name: String,
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub label: Option<String>,
    pub rows: Vec<WeldRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompletionSummary {
    pub connections: usize,
    pub existing_probes: usize,
    pub created: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub sections: usize,
    pub rows: usize,
    pub missing_secondaries: usize,
    pub ambiguous: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMeta {
    pub engine_version: String,
    pub run_at: String,
}

impl ReportMeta {
    pub fn capture() -> Self {
        Self {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BeamReport {
    pub meta: ReportMeta,
    pub summary: CompletionSummary,
    pub rows: Vec<BeamRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeldReport {
    pub meta: ReportMeta,
    pub summary: ExportSummary,
    pub sections: Vec<Section>,
}
