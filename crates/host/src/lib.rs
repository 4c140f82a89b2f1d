//! `mechprobe-host` — simulation host collaborators and export pipelines.
//!
//! Invoked as a subroutine inside a host automation session: the caller
//! supplies implementations of the collaborator traits and an output
//! directory; the pipelines do the rest.

pub mod memory;
pub mod session;
pub mod traits;

pub use session::{
    export_beam_report, export_weld_report, run_beam_completion, run_weld_export,
};
pub use traits::{ConnectionSource, Evaluator, HostError, ProbeFactory, SolutionSource};
