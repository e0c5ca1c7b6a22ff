//! Packed Pascal-string scanner for Team List B
//!
//! Team List B lives in a region of back-to-back `[len][text]` strings with
//! no fixed stride. The scan is a strict sequential cursor; the raw strings
//! are then filtered and de-duplicated (first occurrence wins) to form the
//! team list.

use crate::error::Result;
use crate::layout::FileLayout;
use crate::source::ByteSource;
use crate::team::TeamRecord;
use crate::text::decode_name_bytes;
use std::collections::HashSet;

/// Scan the raw Pascal strings in `pascal_b_start..pascal_b_end`.
///
/// A zero length byte is skipped without consuming a team slot. A length
/// byte that would run past the region end truncates the string to the
/// remaining bytes and stops the scan.
pub fn scan_pascal_strings(source: &ByteSource, layout: &FileLayout) -> Result<Vec<String>> {
    let bytes = source.slice(layout.pascal_b_start, layout.pascal_b_end)?;

    let mut strings = Vec::new();
    let mut cursor = 0usize;
    while cursor < bytes.len() {
        let length = bytes[cursor] as usize;
        cursor += 1;
        if length == 0 {
            continue;
        }
        let end = cursor + length;
        let truncated = end > bytes.len();
        let text = decode_name_bytes(&bytes[cursor..end.min(bytes.len())]);
        let text = text.trim().to_string();
        if !text.is_empty() {
            strings.push(text);
        }
        if truncated {
            break;
        }
        cursor = end;
    }
    Ok(strings)
}

/// Build Team List B: scan, filter out header noise, de-duplicate keeping
/// first-seen order, and index by position in the de-duplicated sequence.
pub fn scan_team_list(source: &ByteSource, layout: &FileLayout) -> Result<Vec<TeamRecord>> {
    let strings = scan_pascal_strings(source, layout)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut teams = Vec::new();
    for name in strings {
        if name.len() < layout.team_b_min_len {
            continue;
        }
        let upper = name.to_ascii_uppercase();
        if layout.team_b_exclude.iter().any(|k| upper.contains(k)) {
            continue;
        }
        if !seen.insert(name.to_ascii_lowercase()) {
            continue;
        }
        teams.push(TeamRecord::new(teams.len(), name));
    }
    Ok(teams)
}
