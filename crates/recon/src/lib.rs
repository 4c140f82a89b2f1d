//! `mechprobe-recon` — probe reconciliation and pairing engine.
//!
//! Pure engine crate: receives pre-loaded connections, probe records and
//! result trees, returns assembled reports. No host bindings or file IO.

pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pair;
pub mod reconcile;
pub mod walker;

pub use config::ExportConfig;
pub use engine::{beam_report, weld_report};
pub use error::ExportError;
pub use model::{
    BeamReport, ConnectionElement, ElementId, GroupNode, PairResult, ProbeKind, ProbeRecord,
    TreeNode, WeldReport,
};
