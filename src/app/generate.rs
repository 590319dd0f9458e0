// MwIcons - app/generate.rs
//
// Batch generation: one document per requested size, written in order,
// followed by removal of icon files left behind by earlier runs.
//
// No partial-failure recovery. The first error aborts the run; files already
// written stay on disk and no stale files are removed.

use crate::core::params::derive_parameters;
use crate::core::template::{IconTemplate, MarkTemplate};
use crate::platform::fs;
use crate::util::constants::{DEFAULT_ICON_SIZES, DEFAULT_OUTPUT_DIR};
use crate::util::error::Result;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// What a generation run should produce and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory receiving `icon{size}.svg` files.
    pub output_dir: PathBuf,
    /// Sizes in write order. Duplicates are written once per occurrence.
    pub sizes: Vec<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
        }
    }
}

impl GeneratorConfig {
    /// Run `generate_all` with this configuration and the default template.
    pub fn run<F>(&self, on_created: F) -> Result<GenerationReport>
    where
        F: FnMut(&Path),
    {
        generate_all(&self.sizes, &self.output_dir, on_created)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Written paths in write order, one per requested size.
    pub written: Vec<PathBuf>,
    /// Icon files from earlier runs that were deleted.
    pub removed: Vec<PathBuf>,
}

/// Generate one icon per size into `output_dir` using the default template.
///
/// `on_created` is called with each path right after it is written.
pub fn generate_all<F>(sizes: &[u32], output_dir: &Path, on_created: F) -> Result<GenerationReport>
where
    F: FnMut(&Path),
{
    generate_all_with(&MarkTemplate::default(), sizes, output_dir, on_created)
}

/// Generate one icon per size into `output_dir` using `template`.
pub fn generate_all_with<T, F>(
    template: &T,
    sizes: &[u32],
    output_dir: &Path,
    mut on_created: F,
) -> Result<GenerationReport>
where
    T: IconTemplate + ?Sized,
    F: FnMut(&Path),
{
    tracing::info!(
        dir = %output_dir.display(),
        sizes = ?sizes,
        "Generating icons"
    );

    fs::ensure_dir(output_dir)?;

    let mut report = GenerationReport::default();
    for &size in sizes {
        let params = derive_parameters(size)?;
        let document = template.render(&params);
        let path = output_dir.join(fs::icon_file_name(size));
        fs::write_document(&path, &document)?;
        tracing::info!(size, path = %path.display(), "Icon written");
        on_created(&path);
        report.written.push(path);
    }

    report.removed = remove_stale(output_dir, &report.written)?;

    tracing::info!(
        written = report.written.len(),
        removed = report.removed.len(),
        "Icon generation complete"
    );
    Ok(report)
}

/// Delete icon files in `output_dir` that this run did not write.
fn remove_stale(output_dir: &Path, written: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let keep: HashSet<OsString> = written
        .iter()
        .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
        .collect();

    let mut removed = Vec::new();
    for (size, path) in fs::list_icon_files(output_dir)? {
        let is_current = path.file_name().is_some_and(|n| keep.contains(n));
        if is_current {
            continue;
        }
        fs::remove_file(&path)?;
        tracing::info!(size, path = %path.display(), "Removed stale icon");
        removed.push(path);
    }
    Ok(removed)
}
