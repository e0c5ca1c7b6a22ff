//! twonil-core: Core library for decoding SCOT-94.DAT team and squad tables
//!
//! This library provides functionality to:
//! - Slice the raw file through a bounds-checked byte source
//! - Scan the fixed-stride team name table (Team List A)
//! - Scan the packed Pascal-string region (Team List B)
//! - Tokenize the glued player-name blob (CamelCase + Mc/Mac heuristics)
//! - Align token chunks to teams and validate the result against anchors
//! - Export the two datasets as CSV or JSON
//!
//! All byte offsets and calibration constants are injected via
//! [`layout::FileLayout`]; nothing in the algorithms is tied to one file.

pub mod align;
pub mod builder;
pub mod error;
pub mod export;
pub mod layout;
pub mod pascal;
pub mod slots;
pub mod source;
pub mod team;
pub mod text;

pub use align::{align_squads, validate_anchors, Mode};
pub use builder::{build_datasets, blob_tokens, Extraction};
pub use error::{Error, Result};
pub use export::{dataset_file_name, write_dataset_csv, write_extraction_json};
pub use layout::{AnchorAssertion, FileLayout};
pub use pascal::{scan_pascal_strings, scan_team_list};
pub use slots::{scan_record_table, team_records, SlotOutcome, SlotRecord};
pub use source::ByteSource;
pub use team::{Dataset, DatasetId, DatasetRow, Squad, TeamRecord};
pub use text::{decode_name_bytes, tokenize};
