//! Workbook import for spawn tables
//!
//! Each sheet of the master workbook is one faction, except the reserved
//! template sheet. Bracket unit lists are read from fixed columns below the
//! header rows and filtered through the unit policy in `importer`.

mod importer;

pub use importer::{
    classify_cell, extract_brackets, extract_faction, faction_sheet_names, SkipReason,
    SpawnTableImporter,
};
