use crate::error::{HordeError, HordeResult};
use crate::types::{SpawnTables, SpawnTablesDocument, NO_SPAWN, RESERVED_SHEET};
use std::path::Path;

/// Load a spawn table JSON file written by `writer::write_spawn_tables`.
///
/// Faction order follows the document. Every record must name the faction
/// it is keyed under, carry all five brackets, and keep bracket "2" as
/// `["No Spawn"]`; the reserved template sheet must not appear.
pub fn parse_spawn_tables(path: &Path) -> HordeResult<SpawnTables> {
    let content = std::fs::read_to_string(path)?;
    parse_spawn_tables_str(&content)
}

pub fn parse_spawn_tables_str(content: &str) -> HordeResult<SpawnTables> {
    let document: SpawnTablesDocument = serde_json::from_str(content)?;

    let mut tables = SpawnTables::new();
    for entry in document.entries {
        if entry.key == RESERVED_SHEET {
            return Err(HordeError::Validation(format!(
                "'{}' is a template sheet, not a faction",
                RESERVED_SHEET
            )));
        }
        if entry.table.faction != entry.key {
            return Err(HordeError::Validation(format!(
                "Faction '{}' is stored under key '{}'",
                entry.table.faction, entry.key
            )));
        }
        if entry.table.brackets.two != [NO_SPAWN] {
            return Err(HordeError::Validation(format!(
                "Faction '{}' has units in bracket 2",
                entry.key
            )));
        }
        tables.add_faction(entry.table);
    }

    Ok(tables)
}
