//! Name cleanup and unit stripping for host-formatted strings.

/// Boilerplate fragments the host bakes into auto-generated probe names
/// (the "Rename Based on Definition" output). Removal is ordered and
/// substring-based; names with overlapping fragments may reduce oddly,
/// which is inherited behavior and left as-is.
pub fn default_cleanup_patterns() -> Vec<String> {
    [
        "All - ",
        " (Underlying Element)",
        "End Time",
        " - ",
        "Force Reaction",
        "Contact",
        "1. s",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Remove each pattern in order (every non-overlapping occurrence, single
/// pass per pattern), then trim surrounding whitespace. Pure; patterns not
/// present are no-ops.
pub fn cleanup_name(raw: &str, patterns: &[String]) -> String {
    let mut name = raw.to_string();
    for pattern in patterns {
        if pattern.is_empty() {
            continue;
        }
        name = name.replace(pattern.as_str(), "");
    }
    name.trim().to_string()
}

/// Truncate a host value at its bracketed unit annotation:
/// `"120.5 [lbf]"` becomes `"120.5"`. Values without a bracket pass
/// through with trailing whitespace removed.
pub fn strip_unit(raw: &str) -> String {
    let text = match raw.find('[') {
        Some(idx) => &raw[..idx],
        None => raw,
    };
    text.trim_end().to_string()
}
