//! Collaborator interfaces onto the simulation host's object model.
//!
//! The host is single-threaded during scripted automation; every call here
//! is blocking and executed strictly in sequence.

use std::fmt;

use mechprobe_recon::error::ExportError;
use mechprobe_recon::model::{ConnectionElement, ProbeRecord, TreeNode};

/// Failure in a host collaborator call. Carried through unmodified; the
/// pipelines never retry or degrade on host errors.
#[derive(Debug, Clone)]
pub struct HostError {
    /// The collaborator operation that failed.
    pub op: String,
    pub message: String,
}

impl HostError {
    pub fn new(op: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            op: op.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host call '{}' failed: {}", self.op, self.message)
    }
}

impl std::error::Error for HostError {}

impl From<HostError> for ExportError {
    fn from(e: HostError) -> Self {
        ExportError::Host {
            op: e.op,
            message: e.message,
        }
    }
}

/// Read-only view of the connections folder.
pub trait ConnectionSource {
    fn connections(&self) -> Result<Vec<ConnectionElement>, HostError>;
}

/// Read-only view of the solution branch of the result tree.
pub trait SolutionSource {
    fn solution_children(&self) -> Result<Vec<TreeNode>, HostError>;
}

/// Creates result probes in the host model.
pub trait ProbeFactory {
    /// Create a beam probe bound to `connection`. The completion pipeline
    /// calls this exactly once per connection that lacks a probe.
    fn create_beam_probe(
        &mut self,
        connection: &ConnectionElement,
    ) -> Result<ProbeRecord, HostError>;
}

/// Batch evaluation trigger. The host exposes no partial-evaluation API.
pub trait Evaluator {
    fn evaluate_all(&mut self) -> Result<(), HostError>;
}
