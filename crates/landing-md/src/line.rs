//! Bold+colon line parsing and key normalization.

/// Marker delimiting the bold key span.
const BOLD: &str = "**";

/// Parse a single `**Key**: value` line.
///
/// Returns the normalized key and the trimmed value, or `None` when the line
/// is not a candidate. Only the first bold span is used as the key, and it
/// must be followed directly by the colon; further colons stay in the value.
pub fn parse_key_value_line(line: &str) -> Option<(String, String)> {
    let open = line.find(BOLD)?;
    let after_open = &line[open + BOLD.len()..];

    let close = after_open.find(BOLD)?;
    let raw_key = &after_open[..close];
    if raw_key.trim().is_empty() {
        return None;
    }

    // Colon must follow the closing marker; `**Note** see: x` is prose.
    let after_close =
        after_open[close + BOLD.len()..].trim_start_matches(|c: char| c == ' ' || c == '\t');
    let value = after_close.strip_prefix(':')?.trim();

    Some((normalize_key(raw_key), value.to_string()))
}

/// Normalize a label into a map key.
///
/// Lowercases and collapses every whitespace run into a single `_`.
/// Surrounding whitespace is dropped.
pub fn normalize_key(label: &str) -> String {
    label
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}
