//! CSV and JSON export for extracted datasets
//!
//! Thin serialization wrappers over the data model. The one contract
//! enforced here is the column count: every row carries exactly
//! `team_index, team_name, p1..pN` cells, partial squads padded with
//! empty cells.

use crate::builder::Extraction;
use crate::error::Result;
use crate::team::Dataset;
use std::io::Write;

/// Conventional output file name for a dataset, e.g.
/// `teamlist_A_21_squads.csv`
pub fn dataset_file_name(dataset: &Dataset) -> String {
    format!("teamlist_{}_{}_squads.csv", dataset.id, dataset.squad_size)
}

/// Write one dataset as CSV: header row plus one fixed-width row per team
pub fn write_dataset_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(dataset.header())?;
    for row in &dataset.rows {
        csv_writer.write_record(dataset.row_values(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the whole extraction (both datasets and diagnostics) as JSON
pub fn write_extraction_json<W: Write>(extraction: &Extraction, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, extraction)?;
    Ok(())
}
