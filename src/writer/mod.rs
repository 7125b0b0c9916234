use crate::error::{HordeError, HordeResult};
use crate::types::SpawnTables;
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Render spawn tables as indented JSON (two spaces, non-ASCII kept literal)
pub fn to_json_string(tables: &SpawnTables) -> HordeResult<String> {
    Ok(serde_json::to_string_pretty(tables)?)
}

/// Write spawn tables to `path`, replacing any existing file.
///
/// The JSON is written to a temporary file next to `path` and renamed over
/// it, so an interrupted run never leaves a truncated document behind. The
/// parent directory must already exist.
pub fn write_spawn_tables(path: &Path, tables: &SpawnTables) -> HordeResult<()> {
    let json = to_json_string(tables)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| {
        HordeError::Export(format!(
            "Failed to create temporary file in {}: {}",
            dir.display(),
            e
        ))
    })?;

    temp.write_all(json.as_bytes())
        .and_then(|_| match_output_permissions(&temp, path))
        .and_then(|_| temp.as_file().sync_all())
        .map_err(|e| HordeError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    temp.persist(path).map_err(|e| {
        HordeError::Export(format!("Failed to replace {}: {}", path.display(), e.error))
    })?;

    info!(path = %path.display(), bytes = json.len(), "wrote spawn tables");
    Ok(())
}

/// Give the replacement file the target's mode, or 0644 for a new file,
/// instead of the temp file's 0600
fn match_output_permissions(temp: &NamedTempFile, path: &Path) -> std::io::Result<()> {
    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => match new_file_permissions() {
            Some(permissions) => permissions,
            None => return Ok(()),
        },
        Err(e) => return Err(e),
    };
    temp.as_file().set_permissions(permissions)
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}
