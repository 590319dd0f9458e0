// MwIcons - platform/fs.rs
//
// Filesystem operations used by the generator. Every failure is wrapped in
// `IconError::Io` with the path and the operation that failed.

use crate::util::constants::{ICON_FILE_EXTENSION, ICON_FILE_PATTERN, ICON_FILE_PREFIX};
use crate::util::error::{IconError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Create `dir` and any missing parents.
///
/// Succeeds without touching anything when the directory already exists.
/// Fails when the path exists as a non-directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| IconError::io(dir, "create directory", e))?;
    tracing::debug!(dir = %dir.display(), "Output directory ready");
    Ok(())
}

/// File name for an icon of `size` pixels, e.g. `icon16.svg`.
pub fn icon_file_name(size: u32) -> String {
    format!("{ICON_FILE_PREFIX}{size}.{ICON_FILE_EXTENSION}")
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| IconError::io(path, "write", e))?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote document");
    Ok(())
}

/// Parse the pixel size out of a generated icon file name.
///
/// Returns `None` for anything that is not exactly `icon<digits>.svg`.
pub fn parse_icon_file_name(name: &str) -> Option<u32> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN
        .get_or_init(|| Regex::new(ICON_FILE_PATTERN).expect("ICON_FILE_PATTERN: invalid regex"));
    pattern.captures(name)?.get(1)?.as_str().parse().ok()
}

/// List regular files in `dir` whose names look like generated icons.
///
/// Returns `(size, path)` pairs sorted by path. Sub-directories and
/// non-matching files are ignored.
pub fn list_icon_files(dir: &Path) -> Result<Vec<(u32, PathBuf)>> {
    let entries = std::fs::read_dir(dir).map_err(|e| IconError::io(dir, "read directory", e))?;

    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IconError::io(dir, "read directory", e))?;
        let path = entry.path();
        let is_file = entry
            .file_type()
            .map_err(|e| IconError::io(&path, "read directory", e))?
            .is_file();
        if !is_file {
            continue;
        }
        let Some(size) = entry.file_name().to_str().and_then(parse_icon_file_name) else {
            continue;
        };
        found.push((size, path));
    }
    found.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(found)
}

/// Delete a single file.
pub fn remove_file(path: &Path) -> Result<()> {
    std::fs::remove_file(path).map_err(|e| IconError::io(path, "remove", e))
}
