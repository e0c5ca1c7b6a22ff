//! Fixed-stride record-table scanner for Team List A
//!
//! The team table is a run of fixed-size slots, each `[len][text][padding]`.
//! One corrupt record must not block the other 63, so decoding is total:
//! every slot produces a tagged outcome instead of an error.

use crate::error::Result;
use crate::layout::FileLayout;
use crate::source::ByteSource;
use crate::team::TeamRecord;
use crate::text::decode_name_bytes;
use serde::{Deserialize, Serialize};

/// Outcome of decoding a single slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SlotOutcome {
    /// Length byte was in bounds; filtered, trimmed text
    Decoded(String),
    /// Length byte exceeded stride - 1; the slot content is unusable
    Corrupt { length: u8 },
}

/// One decoded slot from the record table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Position in the table, 0-based
    pub index: usize,
    /// Absolute byte offset of the slot in the file
    pub offset: usize,
    /// Decoded content or corruption tag
    pub outcome: SlotOutcome,
}

impl SlotRecord {
    /// Decoded name; empty for corrupt slots
    pub fn name(&self) -> &str {
        match &self.outcome {
            SlotOutcome::Decoded(name) => name,
            SlotOutcome::Corrupt { .. } => "",
        }
    }

    /// Check if the slot failed to decode
    pub fn is_corrupt(&self) -> bool {
        matches!(self.outcome, SlotOutcome::Corrupt { .. })
    }
}

/// Scan the Team List A table: `table_a_count` slots of `table_a_stride`
/// bytes starting at `table_a_start`.
///
/// Always returns exactly `table_a_count` records with indices
/// `0..count`. Fails only if the table extent runs past the end of the
/// file, which propagates as a range error from the source.
pub fn scan_record_table(source: &ByteSource, layout: &FileLayout) -> Result<Vec<SlotRecord>> {
    let start = layout.table_a_start;
    let stride = layout.table_a_stride;
    let bytes = source.slice(start, layout.table_a_end())?;

    let mut records = Vec::with_capacity(layout.table_a_count);
    for (index, slot) in bytes.chunks_exact(stride).enumerate() {
        let length = slot[0] as usize;
        let outcome = if length > stride - 1 {
            SlotOutcome::Corrupt { length: slot[0] }
        } else {
            let text = decode_name_bytes(&slot[1..1 + length]);
            SlotOutcome::Decoded(text.trim().to_string())
        };
        records.push(SlotRecord {
            index,
            offset: start + index * stride,
            outcome,
        });
    }
    Ok(records)
}

/// Project slot records to team records, corrupt slots becoming empty names
pub fn team_records(slots: &[SlotRecord]) -> Vec<TeamRecord> {
    slots
        .iter()
        .map(|slot| TeamRecord::new(slot.index, slot.name()))
        .collect()
}
