use std::sync::LazyLock;

use regex::Regex;

/// First double-quoted, non-empty run on a line.
static QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

/// One accepted manifest record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPath {
    /// 1-based line number in the manifest text
    pub line: usize,
    /// Non-empty, trimmed segments
    pub segments: Vec<String>,
    /// `segments` joined with `/`
    pub path: String,
}

/// A line that did not yield a usable path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    pub line: usize,
    pub raw: String,
}

/// Result of parsing a manifest. Parsing never fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedManifest {
    /// Accepted paths in input line order
    pub paths: Vec<ManifestPath>,
    /// Lines that were skipped
    pub malformed: Vec<MalformedLine>,
}

impl ParsedManifest {
    pub fn malformed_count(&self) -> usize {
        self.malformed.len()
    }

    /// The accepted paths as slash-joined strings.
    pub fn path_strings(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.path.as_str())
    }
}

/// Parse raw manifest text into normalized paths.
///
/// Each non-blank line is one record. The path is the first double-quoted
/// run on the line if there is one, otherwise the last non-empty
/// comma-separated column. Lines that end up with no segments are recorded
/// in `malformed`.
pub fn parse_manifest(source: &str) -> ParsedManifest {
    let source = source.strip_prefix('\u{FEFF}').unwrap_or(source);
    let mut parsed = ParsedManifest::default();

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let segments = extract_path(raw).map(split_segments).unwrap_or_default();
        if segments.is_empty() {
            tracing::warn!(line = line_no, raw, "could not parse manifest line");
            parsed.malformed.push(MalformedLine {
                line: line_no,
                raw: raw.to_string(),
            });
            continue;
        }

        parsed.paths.push(ManifestPath {
            line: line_no,
            path: segments.join("/"),
            segments,
        });
    }

    parsed
}

/// Pull the raw path text out of one record.
fn extract_path(line: &str) -> Option<&str> {
    if let Some(caps) = QUOTED.captures(line) {
        return caps.get(1).map(|m| m.as_str());
    }
    line.split(',')
        .map(|col| col.trim_end_matches('\r').trim())
        .rfind(|col| !col.is_empty())
}

/// Split on `/`, trimming each segment and dropping empty ones.
fn split_segments(path: &str) -> Vec<String> {
    path.trim_end_matches('\r')
        .trim()
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
