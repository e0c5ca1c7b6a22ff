//! Pipeline orchestration: scanners -> tokenizer -> aligner -> anchor gate
//!
//! No algorithmic logic of its own; this module wires the pieces together
//! for both datasets and refuses to hand back anything that failed the
//! anchor gate.

use crate::align::{align_squads, validate_anchors, Mode};
use crate::error::Result;
use crate::layout::FileLayout;
use crate::pascal::scan_team_list;
use crate::slots::{scan_record_table, team_records};
use crate::source::ByteSource;
use crate::team::{Dataset, DatasetId};
use crate::text::{decode_name_bytes, tokenize};
use serde::{Deserialize, Serialize};

/// Both decoded datasets plus scan diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Dataset A: slot-table teams with 21-player squads
    pub dataset_a: Dataset,
    /// Dataset B: Pascal-region teams with 16-player squads
    pub dataset_b: Dataset,
    /// Indices of Team List A slots that failed to decode
    pub corrupt_slots: Vec<usize>,
}

/// Tokenize the player-name blob region
pub fn blob_tokens(source: &ByteSource, layout: &FileLayout) -> Result<Vec<String>> {
    let blob = source.slice(layout.blob_a_start, layout.blob_a_end)?;
    Ok(tokenize(&decode_name_bytes(blob)))
}

/// Run the full extraction pipeline against one file
pub fn build_datasets(
    source: &ByteSource,
    layout: &FileLayout,
    mode: Mode,
) -> Result<Extraction> {
    layout.validate()?;

    let slots = scan_record_table(source, layout)?;
    let corrupt_slots: Vec<usize> = slots
        .iter()
        .filter(|s| s.is_corrupt())
        .map(|s| s.index)
        .collect();
    let teams_a = team_records(&slots);
    let first = layout.squad_a_first_team.min(teams_a.len());

    let tokens = blob_tokens(source, layout)?;

    let rows_a = align_squads(
        &tokens,
        &teams_a[first..],
        layout.squad_a_size,
        layout.squad_a_offset,
        mode,
        DatasetId::A,
    )?;
    let dataset_a = Dataset {
        id: DatasetId::A,
        squad_size: layout.squad_a_size,
        rows: rows_a,
    };
    validate_anchors(&dataset_a, &layout.anchors_a)?;

    let teams_b = scan_team_list(source, layout)?;
    let rows_b = align_squads(
        &tokens,
        &teams_b,
        layout.squad_b_size,
        layout.squad_b_offset,
        mode,
        DatasetId::B,
    )?;
    let dataset_b = Dataset {
        id: DatasetId::B,
        squad_size: layout.squad_b_size,
        rows: rows_b,
    };
    validate_anchors(&dataset_b, &layout.anchors_b)?;

    Ok(Extraction {
        dataset_a,
        dataset_b,
        corrupt_slots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::AnchorAssertion;

    /// Sixteen surnames glued the way the real blob stores them
    const BLOB: &str = "EssonAndersonDiamondMcNaughtonGrantWattRobbHunterSmith\
                        BrownKerrHayDuncanShawMillerIrvine";

    /// Synthetic file: 4 junk bytes, one 16-byte team slot, a Pascal region
    /// with a duplicated team name, then the glued name blob.
    fn synthetic_file(blob: &str) -> (ByteSource, FileLayout) {
        let mut data = vec![0u8; 4];

        // Team List A: one slot, "Aberdeen"
        data.push(8);
        data.extend_from_slice(b"Aberdeen");
        data.resize(4 + 16, 0);

        // Team List B: "Aberdeen" stored twice
        let pascal_start = data.len();
        for _ in 0..2 {
            data.push(8);
            data.extend_from_slice(b"Aberdeen");
        }
        let pascal_end = data.len();

        let blob_start = data.len();
        data.extend_from_slice(blob.as_bytes());
        let blob_end = data.len();

        let layout = FileLayout {
            table_a_start: 4,
            table_a_stride: 16,
            table_a_count: 1,
            blob_a_start: blob_start,
            blob_a_end: blob_end,
            squad_a_size: 16,
            squad_a_offset: 0,
            squad_a_first_team: 0,
            pascal_b_start: pascal_start,
            pascal_b_end: pascal_end,
            squad_b_size: 16,
            squad_b_offset: 0,
            anchors_a: vec![
                AnchorAssertion::contains("Aberdeen", "Diamond"),
                AnchorAssertion::at("Aberdeen", "McNaughton", 3),
            ],
            anchors_b: vec![AnchorAssertion::contains("Aberdeen", "Diamond")],
            ..FileLayout::default()
        };

        (ByteSource::new(data), layout)
    }

    #[test]
    fn test_end_to_end_row() {
        let (source, layout) = synthetic_file(BLOB);
        let extraction = build_datasets(&source, &layout, Mode::Strict).unwrap();

        let ds = &extraction.dataset_a;
        assert_eq!(ds.row_count(), 1);
        let values = ds.row_values(&ds.rows[0]);
        assert_eq!(values.len(), 18);
        assert_eq!(
            &values[..6],
            &["0", "Aberdeen", "Esson", "Anderson", "Diamond", "McNaughton"]
        );
        assert_eq!(values[17], "Irvine");
        assert!(extraction.corrupt_slots.is_empty());
    }

    #[test]
    fn test_duplicate_pascal_team_kept_once() {
        let (source, layout) = synthetic_file(BLOB);
        let extraction = build_datasets(&source, &layout, Mode::Strict).unwrap();

        let ds = &extraction.dataset_b;
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.rows[0].team.index, 0);
        assert_eq!(ds.rows[0].team.name, "Aberdeen");
        assert_eq!(ds.rows[0].squad.len(), 16);
    }

    #[test]
    fn test_removed_anchor_name_raises_alignment() {
        // Same token count, but McNaughton is gone
        let corrupted = BLOB.replace("McNaughton", "Robertson");
        let (source, layout) = synthetic_file(&corrupted);

        let err = build_datasets(&source, &layout, Mode::Strict).unwrap_err();
        match err {
            Error::Alignment {
                dataset,
                team,
                player,
                position,
            } => {
                assert_eq!(dataset, DatasetId::A);
                assert_eq!(team, "Aberdeen");
                assert_eq!(player, "McNaughton");
                assert_eq!(position, Some(3));
            }
            other => panic!("expected Alignment, got {other:?}"),
        }
    }

    #[test]
    fn test_short_blob_is_truncation_in_strict_mode() {
        // Drop the last surname: only 15 tokens remain
        let short = BLOB.trim_end_matches("Irvine");
        let (source, layout) = synthetic_file(short);

        let err = build_datasets(&source, &layout, Mode::Strict).unwrap_err();
        assert!(matches!(err, Error::TruncatedSquad { available: 15, .. }));
    }

    #[test]
    fn test_short_blob_tolerated_in_best_effort() {
        let short = BLOB.trim_end_matches("Irvine");
        let (source, mut layout) = synthetic_file(short);

        // The anchors still hold on the partial squad
        layout.anchors_a = vec![AnchorAssertion::contains("Aberdeen", "Diamond")];
        layout.anchors_b.clear();

        let extraction = build_datasets(&source, &layout, Mode::BestEffort).unwrap();
        let row = &extraction.dataset_a.rows[0];
        assert!(row.squad.partial);
        assert_eq!(row.squad.len(), 15);
        // Column contract still holds on export projection
        let values = extraction.dataset_a.row_values(row);
        assert_eq!(values.len(), extraction.dataset_a.column_count());
    }

    #[test]
    fn test_corrupt_slot_reported_not_fatal() {
        let (source, layout) = synthetic_file(BLOB);
        let mut data = source.slice(0, source.len()).unwrap().to_vec();
        data[4] = 255; // wreck the length byte of slot 0

        let layout = FileLayout {
            // The team name is gone, so anchor on it cannot hold
            anchors_a: Vec::new(),
            anchors_b: Vec::new(),
            ..layout
        };
        let extraction =
            build_datasets(&ByteSource::new(data), &layout, Mode::Strict).unwrap();

        assert_eq!(extraction.corrupt_slots, vec![0]);
        assert_eq!(extraction.dataset_a.rows[0].team.name, "");
        assert_eq!(extraction.dataset_a.rows[0].squad.len(), 16);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let (source, layout) = synthetic_file(BLOB);
        let first = build_datasets(&source, &layout, Mode::Strict).unwrap();
        let second = build_datasets(&source, &layout, Mode::Strict).unwrap();
        assert_eq!(first.dataset_a, second.dataset_a);
        assert_eq!(first.dataset_b, second.dataset_b);
    }
}
