//! Filesystem access: template reads and atomic output writes.

use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use common::EntrypointError;
use tracing::debug;

/// Read the server config template as UTF-8 text.
///
/// # Errors
///
/// Returns [`EntrypointError::TemplateRead`] if the file cannot be opened,
/// read, or is not valid UTF-8.
pub fn read_template(path: &Path) -> Result<String, EntrypointError> {
    let text = fs::read_to_string(path).map_err(|source| EntrypointError::TemplateRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read template");
    Ok(text)
}

/// Write `content` to `path`, fully replacing any existing file.
///
/// The content goes to a hidden sibling file first and is renamed into place,
/// so readers never observe a partial file. A symlinked `path` is written
/// through: the link is resolved and its target replaced, the link itself is
/// left alone. The parent directory must already exist.
///
/// # Errors
///
/// Returns [`EntrypointError::WriteFailure`] naming `path` on any I/O failure,
/// including a missing parent directory or a dangling symlink.
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<(), EntrypointError> {
    let fail = |source: io::Error| EntrypointError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path).map_err(fail)?;
    let temp_path = temp_sibling(&target);
    let result = write_synced(&temp_path, content).and_then(|()| fs::rename(&temp_path, &target));
    if let Err(source) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(fail(source));
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Follow `path` if it is a symlink so the rename lands on the real file.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path),
        _ => Ok(path.to_path_buf()),
    }
}

fn write_synced(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

/// `/a/b/name` → `/a/b/.name.tmp`
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".tmp");
    path.with_file_name(name)
}
