// Report file sink

use std::fmt;
use std::fs;
use std::path::Path;

use crate::text::{render, ReportDoc};

#[derive(Debug)]
pub enum ReportError {
    /// IO error (file create/write).
    Io(String),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReportError {}

/// Render the whole document, then write it in one shot.
///
/// Nothing touches the filesystem until the full body is assembled; the
/// file handle is scoped inside the write call and released on every path,
/// so a failure never leaves a partially written report behind.
pub fn write_report(doc: &ReportDoc, path: &Path) -> Result<(), ReportError> {
    let body = render(doc);
    fs::write(path, body)
        .map_err(|e| ReportError::Io(format!("cannot write {}: {e}", path.display())))
}
