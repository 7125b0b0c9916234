use thiserror::Error;

pub type HordeResult<T> = Result<T, HordeError>;

#[derive(Error, Debug)]
pub enum HordeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workbook missing, unreadable, or not a spreadsheet
    #[error("Import error: {0}")]
    Import(String),

    /// Destination could not be written
    #[error("Export error: {0}")]
    Export(String),

    #[error("Spawn table not found for faction: {0}")]
    UnknownFaction(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
