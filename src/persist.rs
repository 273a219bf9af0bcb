//! Rule table snapshots.
//!
//! A table is exported as JSON `{"index": {...}, "release": "..."}` and read
//! back into an equal table. No rule logic runs on this path.

use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PslError, Result};
use crate::table::RuleTable;

/// Encode `table` as JSON into `writer`
pub fn write_json<W: Write>(table: &RuleTable, mut writer: W) -> Result<()> {
    serde_json::to_writer(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Decode a table previously written by [`write_json`]
pub fn read_json<R: Read>(reader: R) -> Result<RuleTable> {
    Ok(serde_json::from_reader(reader)?)
}

/// Save `table` to `path`, replacing any previous snapshot.
///
/// Each save writes a uniquely named temporary sibling of `path` and renames
/// it into place, so readers of `path` never see a partial file and
/// concurrent saves never share a temporary file.
pub fn save_to_file(table: &RuleTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_json(table, BufWriter::new(tmp.as_file_mut()))?;
    tmp.as_file().sync_all()?;

    // Dropping a temp file that failed to persist removes it
    tmp.persist(path).map_err(|e| {
        PslError::PersistError(format!(
            "Failed to move snapshot into place at {}: {}",
            path.display(),
            e.error
        ))
    })?;

    debug!(release = table.release(), path = %path.display(), "saved rule table snapshot");
    Ok(())
}

/// Load a snapshot saved by [`save_to_file`]
pub fn load_from_file(path: impl AsRef<Path>) -> Result<RuleTable> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| {
        PslError::PersistError(format!(
            "Failed to open snapshot {}: {}",
            path.display(),
            e
        ))
    })?;
    read_json(BufReader::new(file))
}
