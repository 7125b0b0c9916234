//! Spawn table importer - workbook (.xlsx/.xls/.ods) → `SpawnTables`

use crate::error::{HordeError, HordeResult};
use crate::types::{Bracket, FactionTable, SheetLayout, SpawnTables, SKIP_KEYWORDS};
use calamine::{open_workbook_auto, CellErrorType, Data, Range, Reader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Why a cell did not produce a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty, missing, NaN or #N/A
    Empty,
    /// Date or time value (header artifact)
    DateTime,
    /// Blank after trimming, or the literal "nan"
    Blank,
    /// Rules text containing a skip keyword
    Keyword(&'static str),
}

/// Importer for the master spawn table workbook
pub struct SpawnTableImporter {
    path: PathBuf,
    layout: SheetLayout,
}

impl SpawnTableImporter {
    /// Create an importer using the default workbook layout
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout: SheetLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: SheetLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.layout
    }

    /// Read every faction sheet into spawn tables, in sheet order
    pub fn import(&self) -> HordeResult<SpawnTables> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            HordeError::Import(format!(
                "Failed to open workbook {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();
        info!(path = %self.path.display(), sheets = sheet_names.len(), "opened workbook");

        let mut tables = SpawnTables::new();
        for faction in faction_sheet_names(&sheet_names, &self.layout.reserved_sheet) {
            let range = workbook.worksheet_range(&faction).map_err(|e| {
                HordeError::Import(format!("Failed to read sheet '{}': {}", faction, e))
            })?;
            tables.add_faction(extract_faction(&faction, &range, &self.layout));
        }

        Ok(tables)
    }
}

/// Sheet names in workbook order, minus the reserved template sheet
pub fn faction_sheet_names(sheet_names: &[String], reserved_sheet: &str) -> Vec<String> {
    sheet_names
        .iter()
        .filter(|name| {
            let reserved = name.as_str() == reserved_sheet;
            if reserved {
                debug!(sheet = %name, "skipping reserved sheet");
            }
            !reserved
        })
        .cloned()
        .collect()
}

/// Build a faction's table from its sheet. Bracket "2" keeps its fixed
/// "No Spawn" entry.
pub fn extract_faction(faction: &str, range: &Range<Data>, layout: &SheetLayout) -> FactionTable {
    let mut table = FactionTable::new(faction);
    for (bracket, units) in extract_brackets(range, layout) {
        *table.brackets.get_mut(bracket) = units;
    }
    info!(
        faction,
        units = table.brackets.extracted_unit_count(),
        "extracted faction"
    );
    table
}

/// Unit lists for each bracket column of the layout, in layout order.
///
/// Coordinates are absolute: row 0 is the sheet's first row even when the
/// used range starts further down, and cells outside the used range are
/// treated as empty.
pub fn extract_brackets(range: &Range<Data>, layout: &SheetLayout) -> Vec<(Bracket, Vec<String>)> {
    let last_row = range.end().map(|(row, _)| row);

    layout
        .columns
        .iter()
        .map(|&(bracket, col)| {
            let mut units = Vec::new();
            if let Some(last_row) = last_row {
                for row in layout.header_rows..=last_row {
                    let cell = range.get_value((row, col)).unwrap_or(&Data::Empty);
                    match classify_cell(cell) {
                        Ok(unit) => units.push(unit),
                        Err(SkipReason::Empty) => {}
                        Err(reason) => {
                            debug!(bracket = %bracket, row, col, ?reason, "skipped cell");
                        }
                    }
                }
            }
            (bracket, units)
        })
        .collect()
}

/// Apply the unit policy to one cell: the trimmed unit name, or why the
/// cell was skipped.
pub fn classify_cell(cell: &Data) -> Result<String, SkipReason> {
    let text = cell_text(cell)?;
    let trimmed = text.trim();

    if trimmed.is_empty() || trimmed == "nan" {
        return Err(SkipReason::Blank);
    }

    if let Some(keyword) = SKIP_KEYWORDS.iter().find(|k| trimmed.contains(*k)) {
        return Err(SkipReason::Keyword(keyword));
    }

    Ok(trimmed.to_string())
}

/// Text form of a cell before trimming
fn cell_text(cell: &Data) -> Result<String, SkipReason> {
    match cell {
        Data::Empty | Data::Error(CellErrorType::NA) => Err(SkipReason::Empty),
        Data::Float(f) if f.is_nan() => Err(SkipReason::Empty),
        Data::DateTime(_) | Data::DateTimeIso(_) | Data::DurationIso(_) => {
            Err(SkipReason::DateTime)
        }
        Data::String(s) => Ok(s.clone()),
        Data::Float(f) => Ok(f.to_string()),
        Data::Int(i) => Ok(i.to_string()),
        Data::Bool(true) => Ok("True".to_string()),
        Data::Bool(false) => Ok("False".to_string()),
        Data::Error(e) => Ok(e.to_string()),
    }
}
