use std::fmt;

#[derive(Debug)]
pub enum ExportError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty marker, bad report file name, etc.).
    ConfigValidation(String),
    /// The host failed to create a probe for a connection. Fatal to the
    /// run; nothing is written.
    ProbeCreation { connection: String, message: String },
    /// Batch evaluation failed in the host.
    Evaluation(String),
    /// A read-only host collaborator call failed.
    Host { op: String, message: String },
    /// IO error (report write, etc.).
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::ProbeCreation { connection, message } => {
                write!(f, "cannot create probe for '{connection}': {message}")
            }
            Self::Evaluation(msg) => write!(f, "evaluation failed: {msg}"),
            Self::Host { op, message } => write!(f, "host call '{op}' failed: {message}"),
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ExportError {}
