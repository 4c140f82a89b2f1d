// Tab-delimited report text assembly

/// Width of a centered group-header line, filler included.
pub const GROUP_HEADER_WIDTH: usize = 20;

const GROUP_HEADER_FILL: char = '-';

/// Completion report columns.
pub const BEAM_COLUMNS: [&str; 7] = [
    "Name",
    "Axial Force",
    "Torque",
    "Shear Force at I",
    "Shear Force at J",
    "Moment at I",
    "Moment at J",
];

/// Pairing report columns.
pub const WELD_COLUMNS: [&str; 7] = ["Name", "FX", "FY", "FZ", "MX", "MY", "MZ"];

/// A flat report document: header block followed by entries in order.
#[derive(Debug, Clone)]
pub struct ReportDoc {
    pub title: String,
    pub columns: Vec<String>,
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Clone)]
pub enum ReportEntry {
    /// A centered group-header line interleaved before a group's rows.
    GroupHeader(String),
    /// One data row. `None` values render as empty fields, never omitted,
    /// so the column count is stable.
    Row {
        name: String,
        values: Vec<Option<String>>,
    },
}

impl ReportDoc {
    pub fn new(title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            entries: Vec::new(),
        }
    }
}

/// Join the name and each value with single tabs, newline terminated.
pub fn format_row(name: &str, values: &[Option<String>]) -> String {
    let mut line = String::from(name);
    for value in values {
        line.push('\t');
        if let Some(v) = value {
            line.push_str(v);
        }
    }
    line.push('\n');
    line
}

/// `" label "` centered in a fixed-width dashed field on its own line.
/// Left pad is the floor of the margin, the remainder goes right; labels
/// too wide for the field get no padding.
pub fn group_header(label: &str) -> String {
    let body = format!(" {label} ");
    let width = body.chars().count();
    if width >= GROUP_HEADER_WIDTH {
        return format!("{body}\n");
    }

    let margin = GROUP_HEADER_WIDTH - width;
    let left = margin / 2;
    let mut line = String::with_capacity(GROUP_HEADER_WIDTH + 1);
    for _ in 0..left {
        line.push(GROUP_HEADER_FILL);
    }
    line.push_str(&body);
    for _ in 0..(margin - left) {
        line.push(GROUP_HEADER_FILL);
    }
    line.push('\n');
    line
}

/// Title line, blank line, tab-separated column line, blank line.
pub fn header_block(title: &str, columns: &[String]) -> String {
    format!("{title}\n\n{}\n\n", columns.join("\t"))
}

/// Render the whole document to a single string.
pub fn render(doc: &ReportDoc) -> String {
    let mut out = header_block(&doc.title, &doc.columns);
    for entry in &doc.entries {
        match entry {
            ReportEntry::GroupHeader(label) => out.push_str(&group_header(label)),
            ReportEntry::Row { name, values } => out.push_str(&format_row(name, values)),
        }
    }
    out
}
