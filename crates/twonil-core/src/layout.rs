//! File layout configuration
//!
//! Every region boundary, record stride and alignment offset in SCOT-94.DAT
//! is an empirically discovered constant tied to one file revision. They all
//! live here as an injectable struct so the scanners and the aligner stay
//! layout-agnostic and testable against synthetic buffers. The defaults are
//! the calibrated values for the known file; a JSON layout file can override
//! them for re-calibration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A known-good name used to verify that offset calibration still holds.
///
/// With no format spec and no independent ground truth, these assertions are
/// the primary correctness gate: if one fails, the constants have drifted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorAssertion {
    /// Team whose squad is checked
    pub team: String,
    /// Player expected in that squad
    pub player: String,
    /// Exact squad slot, or None to only require membership
    #[serde(default)]
    pub position: Option<usize>,
}

impl AnchorAssertion {
    /// Membership-only assertion
    pub fn contains(team: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            player: player.into(),
            position: None,
        }
    }

    /// Positional assertion
    pub fn at(team: impl Into<String>, player: impl Into<String>, position: usize) -> Self {
        Self {
            team: team.into(),
            player: player.into(),
            position: Some(position),
        }
    }
}

/// All byte-layout constants for one revision of the data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLayout {
    /// Start of the fixed-stride team name table (Team List A)
    pub table_a_start: usize,
    /// Record stride of the team table, length byte included
    pub table_a_stride: usize,
    /// Number of records in the team table
    pub table_a_count: usize,

    /// Start of the concatenated player-name blob
    pub blob_a_start: usize,
    /// End of the player-name blob (exclusive)
    pub blob_a_end: usize,

    /// Players per squad in dataset A
    pub squad_a_size: usize,
    /// Token index where the first dataset A squad begins
    pub squad_a_offset: usize,
    /// First team index in Team List A that receives a squad
    pub squad_a_first_team: usize,

    /// Start of the packed Pascal-string region (Team List B)
    pub pascal_b_start: usize,
    /// End of the packed Pascal-string region (exclusive)
    pub pascal_b_end: usize,

    /// Players per squad in dataset B
    pub squad_b_size: usize,
    /// Token index where the first dataset B squad begins
    pub squad_b_offset: usize,

    /// Minimum length for a Team List B name to count as a team
    pub team_b_min_len: usize,
    /// Uppercased substrings that mark a Team List B string as a header,
    /// not a team (e.g. "LEAGUE", "DIVISION")
    pub team_b_exclude: Vec<String>,

    /// Anchor checks for dataset A
    pub anchors_a: Vec<AnchorAssertion>,
    /// Anchor checks for dataset B
    pub anchors_b: Vec<AnchorAssertion>,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            table_a_start: 6,
            table_a_stride: 16,
            table_a_count: 64,
            blob_a_start: 16300,
            blob_a_end: 42299,
            squad_a_size: 21,
            // The original calibration slices 21-token windows from token -2
            // starting at team 7; team 7's window begins before token 0 and is
            // unrecoverable, so expressed unsigned this is team 8 at token 19.
            squad_a_offset: 19,
            squad_a_first_team: 8,
            pascal_b_start: 1200,
            pascal_b_end: 3000,
            squad_b_size: 16,
            squad_b_offset: 10,
            team_b_min_len: 4,
            team_b_exclude: vec!["LEAGUE".to_string(), "DIVISION".to_string()],
            anchors_a: vec![
                AnchorAssertion::contains("Rangers", "McCoist"),
                AnchorAssertion::contains("Celtic", "McStay"),
            ],
            anchors_b: vec![
                AnchorAssertion::contains("Aberdeen", "Diamond"),
                AnchorAssertion::contains("Aberdeen", "McNaughton"),
            ],
        }
    }
}

impl FileLayout {
    /// Load a layout from JSON; missing fields fall back to the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::LayoutJson {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the layout as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check internal consistency before any scanning starts
    pub fn validate(&self) -> Result<()> {
        if self.table_a_stride < 2 {
            return Err(Error::Layout(format!(
                "table_a_stride must be at least 2, got {}",
                self.table_a_stride
            )));
        }
        if self.blob_a_start > self.blob_a_end {
            return Err(Error::Layout(format!(
                "blob_a range is inverted: {}..{}",
                self.blob_a_start, self.blob_a_end
            )));
        }
        if self.pascal_b_start > self.pascal_b_end {
            return Err(Error::Layout(format!(
                "pascal_b range is inverted: {}..{}",
                self.pascal_b_start, self.pascal_b_end
            )));
        }
        if self.squad_a_size == 0 || self.squad_b_size == 0 {
            return Err(Error::Layout("squad sizes must be non-zero".to_string()));
        }
        Ok(())
    }

    /// End offset (exclusive) of the Team List A table
    pub fn table_a_end(&self) -> usize {
        self.table_a_start + self.table_a_stride * self.table_a_count
    }
}
