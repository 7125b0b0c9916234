//! Horde Spawn - 40K Horde Mode spawn tables
//!
//! Converts the master spawn table workbook (one sheet per faction) into a
//! JSON document keyed by faction, and rolls horde spawns from it.
//!
//! # Features
//!
//! - Workbook import (.xlsx, .xls, .ods) with a fixed, configurable layout
//! - Unit filtering that drops header dates, blanks and rules text
//! - Atomic, indented JSON output in workbook sheet order
//! - 2D6 spawn rolls with battle round modifiers
//!
//! # Example
//!
//! ```no_run
//! use horde_spawn::excel::SpawnTableImporter;
//! use horde_spawn::writer::write_spawn_tables;
//! use std::path::Path;
//!
//! let tables = SpawnTableImporter::new("spawn_tables.xlsx").import()?;
//! println!("Factions: {}", tables.len());
//!
//! write_spawn_tables(Path::new("spawn_tables.json"), &tables)?;
//! # Ok::<(), horde_spawn::error::HordeError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod parser;
pub mod spawn;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{HordeError, HordeResult};
pub use types::{Bracket, Brackets, FactionTable, SheetLayout, SpawnTables};
