//! Log codec: JSON-array serialization of stored log lines (server side) and
//! the matching parse with first-seen deduplication (client side).
//!
//! The wire format is deliberately narrow. The only producer of the
//! `/getlogs` array is [`serialize_log_lines`] itself, so the client side
//! splits on literal delimiters instead of running a general JSON parser.
//! Malformed stored lines are dropped silently; duplicate suppression uses
//! exact text equality of the reconstructed object, not field equality.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One record as it appears in the `/getlogs` array.
/// Field declaration order is the wire key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub ip: String,
    /// Status code kept in its textual form.
    pub outcome: String,
}

/// Parses one stored log line.
///
/// Returns `None` when the line does not split into exactly three `" - "`
/// parts, or its trailing fragment carries no `": "` separator. Callers
/// drop such lines without reporting.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    let parts: Vec<&str> = line.split(" - ").collect();
    if parts.len() != 3 {
        return None;
    }
    let (_, outcome) = parts[2].split_once(": ")?;
    Some(LogEntry {
        timestamp: parts[0].to_string(),
        ip: parts[1].to_string(),
        outcome: outcome.to_string(),
    })
}

/// Serializes stored log lines into the `/getlogs` JSON array.
///
/// File order is preserved; malformed lines are skipped without affecting
/// their siblings. No trailing comma after the last object.
pub fn serialize_log_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let objects: Vec<String> = lines
        .into_iter()
        .filter_map(parse_log_line)
        .filter_map(|entry| serde_json::to_string(&entry).ok())
        .collect();
    format!("[{}]", objects.join(","))
}

/// Splits a `/getlogs` body into unique object texts, lazily, in first-seen
/// order.
///
/// The body is assumed to be an array produced by [`serialize_log_lines`]:
/// the outer brackets are stripped unconditionally and the interior is split
/// on the literal `"},{"` sequence, then each fragment gets its leading `{`
/// and trailing `}` normalized back on. Two entries with identical fields
/// but different incidental formatting are NOT merged.
pub fn unique_entries(body: &str) -> impl Iterator<Item = String> + '_ {
    let interior = if body.len() >= 2 { &body[1..body.len() - 1] } else { "" };
    let mut seen = HashSet::new();
    interior
        .split("},{")
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| {
            let mut entry = String::with_capacity(fragment.len() + 2);
            if !fragment.starts_with('{') {
                entry.push('{');
            }
            entry.push_str(fragment);
            if !fragment.ends_with('}') {
                entry.push('}');
            }
            entry
        })
        .filter(move |entry| seen.insert(entry.clone()))
}
