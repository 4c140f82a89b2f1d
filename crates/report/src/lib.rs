//! `mechprobe-report` — flat text report rendering and file output.
//!
//! Engine-agnostic: takes an assembled [`ReportDoc`] and turns it into
//! tab-delimited text, on disk or in memory.

pub mod text;
pub mod writer;

pub use text::{render, ReportDoc, ReportEntry, BEAM_COLUMNS, WELD_COLUMNS};
pub use writer::{write_report, ReportError};
