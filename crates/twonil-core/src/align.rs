//! Squad alignment and anchor validation
//!
//! Tokens encode squad membership purely by position: starting at a
//! calibrated offset, every consecutive chunk of N tokens is the squad of
//! the next team in list order. Anchor assertions are the correctness gate
//! for that calibration.

use crate::error::{Error, Result};
use crate::layout::AnchorAssertion;
use crate::team::{Dataset, DatasetId, DatasetRow, Squad, TeamRecord};
use serde::{Deserialize, Serialize};

/// How to react when the token stream runs out before every squad is full
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// A short squad aborts the run
    #[default]
    Strict,
    /// Short squads are emitted, flagged as partial
    BestEffort,
}

/// Assign squads to teams by chunking the token stream.
///
/// Team `i` receives tokens `offset + i*size .. offset + (i+1)*size`. In
/// strict mode a window that extends past the end of the stream is a
/// truncation error; in best-effort mode the remaining tokens become a
/// partial squad and later teams get empty partial squads.
pub fn align_squads(
    tokens: &[String],
    teams: &[TeamRecord],
    squad_size: usize,
    offset: usize,
    mode: Mode,
    dataset: DatasetId,
) -> Result<Vec<DatasetRow>> {
    let mut rows = Vec::with_capacity(teams.len());

    for (i, team) in teams.iter().enumerate() {
        let start = offset + i * squad_size;
        let end = start + squad_size;

        let squad = if end <= tokens.len() {
            Squad::full(tokens[start..end].to_vec())
        } else {
            let available = tokens.len().saturating_sub(start);
            match mode {
                Mode::Strict => {
                    return Err(Error::TruncatedSquad {
                        dataset,
                        team_index: team.index,
                        team: team.name.clone(),
                        expected: squad_size,
                        available,
                    });
                }
                Mode::BestEffort => {
                    Squad::truncated(tokens[start.min(tokens.len())..].to_vec())
                }
            }
        };

        rows.push(DatasetRow {
            team: team.clone(),
            squad,
        });
    }

    Ok(rows)
}

/// Check every anchor assertion against an assembled dataset.
///
/// Any miss means the calibrated constants have drifted; the run must halt
/// before export rather than emit a silently misaligned dataset.
pub fn validate_anchors(dataset: &Dataset, anchors: &[AnchorAssertion]) -> Result<()> {
    for anchor in anchors {
        let drift = Error::Alignment {
            dataset: dataset.id,
            team: anchor.team.clone(),
            player: anchor.player.clone(),
            position: anchor.position,
        };

        let Some(row) = dataset.find_team(&anchor.team) else {
            return Err(drift);
        };

        let hit = match anchor.position {
            Some(slot) => row.squad.players.get(slot).map(String::as_str) == Some(&anchor.player),
            None => row.squad.contains(&anchor.player),
        };
        if !hit {
            return Err(drift);
        }
    }
    Ok(())
}
