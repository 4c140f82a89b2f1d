//! In-memory host double for tests and development off the host.

use std::collections::BTreeMap;

use mechprobe_recon::model::{
    ConnectionElement, ElementId, Measurement, ProbeKind, ProbeRecord, TreeNode,
};

use crate::traits::{ConnectionSource, Evaluator, HostError, ProbeFactory, SolutionSource};

/// Scripted stand-in for the simulation host.
///
/// Holds a connection list and a solution tree and computes nothing: beam
/// values for created probes are looked up from a table keyed by element
/// id. Mutating calls are appended to `ops` (`create:<name>` and
/// `evaluate_all` entries) so tests can assert call counts and ordering.
#[derive(Debug, Default)]
pub struct InMemoryHost {
    pub connections: Vec<ConnectionElement>,
    pub solution: Vec<TreeNode>,
    /// Pre-computed beam values per connection, handed out at creation.
    pub beam_values: BTreeMap<ElementId, Vec<String>>,
    /// Make `create_beam_probe` fail for this connection.
    pub fail_creation_for: Option<ElementId>,
    pub ops: Vec<String>,
}

impl InMemoryHost {
    /// Names passed to `create_beam_probe`, in call order.
    pub fn created(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| op.strip_prefix("create:"))
            .collect()
    }

    pub fn evaluations(&self) -> usize {
        self.ops.iter().filter(|op| op.as_str() == "evaluate_all").count()
    }
}

impl ConnectionSource for InMemoryHost {
    fn connections(&self) -> Result<Vec<ConnectionElement>, HostError> {
        Ok(self.connections.clone())
    }
}

impl SolutionSource for InMemoryHost {
    fn solution_children(&self) -> Result<Vec<TreeNode>, HostError> {
        Ok(self.solution.clone())
    }
}

impl ProbeFactory for InMemoryHost {
    fn create_beam_probe(
        &mut self,
        connection: &ConnectionElement,
    ) -> Result<ProbeRecord, HostError> {
        if self.fail_creation_for == Some(connection.id) {
            return Err(HostError::new(
                "create_beam_probe",
                format!("host rejected probe for '{}'", connection.name),
            ));
        }
        self.ops.push(format!("create:{}", connection.name));

        let values = self
            .beam_values
            .get(&connection.id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(Measurement::new)
            .collect();

        Ok(ProbeRecord {
            reference: connection.id,
            reference_name: connection.name.clone(),
            kind: ProbeKind::BeamProbe,
            values,
        })
    }
}

impl Evaluator for InMemoryHost {
    fn evaluate_all(&mut self) -> Result<(), HostError> {
        self.ops.push("evaluate_all".into());
        Ok(())
    }
}
