//! Writing generated sources

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::embed::error::{EmbedError, EmbedResult};

/// Write `contents` to `path`, replacing any previous file.
///
/// The text goes to a temporary file next to `path` first, so a failure
/// leaves the old file untouched. The destination directory must exist.
pub fn write_source(
    path: &Path,
    contents: &str,
) -> EmbedResult<()> {
    let write_err = |source: std::io::Error| EmbedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    debug!("writing {} ({} bytes)", path.display(), contents.len());

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    set_source_permissions(tmp.as_file()).map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    Ok(())
}

// NamedTempFile is created 0600; generated sources should be world readable.
#[cfg(unix)]
fn set_source_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_source_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}
