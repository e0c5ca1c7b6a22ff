//! Error types for twonil-core

use crate::team::DatasetId;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in twonil-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the input file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Byte access beyond the buffer
    #[error("byte range {start}..{end} out of bounds for {len}-byte buffer")]
    Range {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Layout constants are inconsistent
    #[error("invalid layout: {0}")]
    Layout(String),

    /// Failed to parse a layout file
    #[error("failed to parse layout '{path}': {source}")]
    LayoutJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Anchor validation failed, squad alignment has drifted
    #[error(
        "anchor check failed in dataset {dataset}: '{player}' not found in squad of '{team}' \
         (expected position: {position:?})"
    )]
    Alignment {
        dataset: DatasetId,
        team: String,
        player: String,
        position: Option<usize>,
    },

    /// Not enough tokens left to fill a squad
    #[error(
        "dataset {dataset}: squad for team {team_index} '{team}' truncated: \
         need {expected} tokens, {available} available"
    )]
    TruncatedSquad {
        dataset: DatasetId,
        team_index: usize,
        team: String,
        expected: usize,
        available: usize,
    },

    /// CSV writing error from the csv crate
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
