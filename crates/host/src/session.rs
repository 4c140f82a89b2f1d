//! The two export pipelines: probe completion and weld force/moment export.

use std::path::{Path, PathBuf};

use mechprobe_recon::config::ExportConfig;
use mechprobe_recon::engine::{beam_report, weld_report};
use mechprobe_recon::error::ExportError;
use mechprobe_recon::model::{
    BeamReport, CompletionSummary, ProbeKind, ProbeRecord, TreeNode, WeldReport,
};
use mechprobe_recon::reconcile::missing_probes;
use mechprobe_report::{write_report, ReportDoc, ReportEntry, BEAM_COLUMNS, WELD_COLUMNS};

use crate::traits::{ConnectionSource, Evaluator, ProbeFactory, SolutionSource};

/// Probe completion pipeline.
///
/// Reconciles the unsuppressed connections against the beam probes already
/// in the solution, creates a probe for each uncovered connection (the
/// first creation failure is fatal — nothing is written), triggers one
/// batch evaluation when anything was created, then assembles rows over
/// the completed working collection: existing probes in encounter order,
/// created probes appended.
pub fn run_beam_completion<H>(host: &mut H, config: &ExportConfig) -> Result<BeamReport, ExportError>
where
    H: ConnectionSource + SolutionSource + ProbeFactory + Evaluator,
{
    config.validate()?;

    let connections: Vec<_> = host
        .connections()?
        .into_iter()
        .filter(|c| !c.suppressed)
        .collect();

    let mut probes: Vec<ProbeRecord> = host
        .solution_children()?
        .into_iter()
        .filter_map(|node| match node {
            TreeNode::Probe(p) if p.kind == ProbeKind::BeamProbe => Some(p),
            _ => None,
        })
        .collect();
    let existing_probes = probes.len();

    let to_create = missing_probes(&connections, &probes);
    for connection in &to_create {
        let probe = host
            .create_beam_probe(connection)
            .map_err(|e| ExportError::ProbeCreation {
                connection: connection.name.clone(),
                message: e.message,
            })?;
        probes.push(probe);
    }
    if !to_create.is_empty() {
        host.evaluate_all()
            .map_err(|e| ExportError::Evaluation(e.message))?;
    }

    log::debug!(
        "beam completion: {} connections, {} existing probes, {} created",
        connections.len(),
        existing_probes,
        to_create.len()
    );

    Ok(beam_report(
        &probes,
        CompletionSummary {
            connections: connections.len(),
            existing_probes,
            created: to_create.len(),
        },
    ))
}

/// Weld export pipeline: marker discovery, walk and pairing over the
/// solution children.
pub fn run_weld_export<H>(host: &H, config: &ExportConfig) -> Result<WeldReport, ExportError>
where
    H: SolutionSource,
{
    config.validate()?;
    let children = host.solution_children()?;
    Ok(weld_report(&children, config))
}

/// Flatten a beam report into a renderable document.
pub fn beam_report_doc(report: &BeamReport) -> ReportDoc {
    let mut doc = ReportDoc::new("Beam Probes", &BEAM_COLUMNS);
    for row in &report.rows {
        doc.entries.push(ReportEntry::Row {
            name: row.name.clone(),
            values: row.values.iter().map(|v| Some(v.clone())).collect(),
        });
    }
    doc
}

/// Flatten a weld report into a renderable document, group headers
/// interleaved before each labeled section.
pub fn weld_report_doc(report: &WeldReport) -> ReportDoc {
    let mut doc = ReportDoc::new("Welds", &WELD_COLUMNS);
    for section in &report.sections {
        if let Some(label) = &section.label {
            doc.entries.push(ReportEntry::GroupHeader(label.clone()));
        }
        for row in &section.rows {
            doc.entries.push(ReportEntry::Row {
                name: row.name.clone(),
                values: row.values.clone(),
            });
        }
    }
    doc
}

/// Run the completion pipeline and write the report into `dir` under the
/// configured file name. The body is fully assembled in memory before the
/// file is touched.
pub fn export_beam_report<H>(
    host: &mut H,
    config: &ExportConfig,
    dir: &Path,
) -> Result<PathBuf, ExportError>
where
    H: ConnectionSource + SolutionSource + ProbeFactory + Evaluator,
{
    let report = run_beam_completion(host, config)?;
    let path = dir.join(&config.beam_report);
    write_report(&beam_report_doc(&report), &path).map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(path)
}

/// Run the weld export pipeline and write the report into `dir` under the
/// configured file name.
pub fn export_weld_report<H>(
    host: &H,
    config: &ExportConfig,
    dir: &Path,
) -> Result<PathBuf, ExportError>
where
    H: SolutionSource,
{
    let report = run_weld_export(host, config)?;
    let path = dir.join(&config.weld_report);
    write_report(&weld_report_doc(&report), &path).map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(path)
}
