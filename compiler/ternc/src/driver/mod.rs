//! Tree and unit compilation.
//!
//! Directories are mirrored first, sequentially; units are then compiled in
//! parallel. Each unit gets its own transformer through
//! [`tern_codegen::emit_unit`], so workers share no mutable state.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::error::CompileError;
use crate::source::UnitSource;
use crate::walk::walk_tree;

/// Package initializer in the source tree.
pub const PACKAGE_INIT_FILE: &str = "__init__.py";
/// Package entry point in the output tree.
pub const PACKAGE_ENTRY_FILE: &str = "index.js";
/// Extension of generated units.
pub const TARGET_EXTENSION: &str = "js";

/// Outcome of a tree compilation.
#[derive(Debug, Default)]
pub struct CompileSummary {
    /// Output files written, in walk order.
    pub written: Vec<PathBuf>,
    /// Directories and units that failed.
    pub failed: Vec<CompileError>,
}

impl CompileSummary {
    pub fn has_errors(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Output file name for a source file name.
///
/// `__init__.py` becomes `index.js`; any other name has its last extension
/// replaced by `js`, or gains one if it has none.
pub fn output_file_name(file_name: &Path) -> PathBuf {
    if file_name == Path::new(PACKAGE_INIT_FILE) {
        PathBuf::from(PACKAGE_ENTRY_FILE)
    } else {
        file_name.with_extension(TARGET_EXTENSION)
    }
}

/// Compile every unit under `source_root` into `destination_root`.
///
/// Per-directory and per-unit failures are collected in the summary; only a
/// failure to enumerate the source tree returns `Err`.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(source_root = %source_root.display(), destination_root = %destination_root.display())
)]
pub fn compile_tree<S: UnitSource>(
    source_root: &Path,
    destination_root: &Path,
    source: &S,
) -> Result<CompileSummary, CompileError> {
    let mut dirs = Vec::new();
    let mut units = Vec::new();
    walk_tree(
        source_root,
        &mut |relative| dirs.push(relative.to_path_buf()),
        &mut |path, relative| units.push((path.to_path_buf(), relative.to_path_buf())),
    )?;

    let mut summary = CompileSummary::default();

    // Every directory exists before any unit is written into it.
    for dir in std::iter::once(destination_root.to_path_buf())
        .chain(dirs.iter().map(|relative| destination_root.join(relative)))
    {
        tracing::debug!(dir = %dir.display(), "creating output directory");
        if let Err(error) = std::fs::create_dir_all(&dir) {
            tracing::warn!(dir = %dir.display(), %error, "cannot create output directory");
            summary.failed.push(CompileError::CreateDir {
                path: dir,
                source: error,
            });
        }
    }

    let results: Vec<Result<PathBuf, CompileError>> = units
        .par_iter()
        .map(|(path, relative)| {
            let destination = output_path(destination_root, relative);
            compile_unit(path, &destination, source).map(|()| destination)
        })
        .collect();

    for result in results {
        match result {
            Ok(written) => summary.written.push(written),
            Err(error) => {
                tracing::warn!(path = %error.path().display(), %error, "unit failed");
                summary.failed.push(error);
            }
        }
    }

    tracing::info!(
        written = summary.written.len(),
        failed = summary.failed.len(),
        "compiled tree"
    );
    Ok(summary)
}

/// Compile the unit at `path` and write it to `destination`.
///
/// The output is either fully written or left untouched.
pub fn compile_unit<S: UnitSource>(
    path: &Path,
    destination: &Path,
    source: &S,
) -> Result<(), CompileError> {
    tracing::debug!(path = %path.display(), "compiling unit");

    let module = source
        .parse_unit(path)
        .map_err(|error| CompileError::Source {
            path: path.to_path_buf(),
            source: error,
        })?;
    let exports = source.exported_names(&module);
    let text = tern_codegen::emit_unit(&module, &exports);

    write_atomically(destination, &text)
}

fn output_path(destination_root: &Path, relative: &Path) -> PathBuf {
    let mut path = destination_root.join(relative);
    if let Some(name) = relative.file_name() {
        path.set_file_name(output_file_name(Path::new(name)));
    }
    path
}

/// Write through a temporary file in the destination directory, then rename
/// it over `destination`.
fn write_atomically(destination: &Path, text: &str) -> Result<(), CompileError> {
    let write_error = |source: std::io::Error| CompileError::Write {
        path: destination.to_path_buf(),
        source,
    };

    let dir = destination
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(text.as_bytes()).map_err(write_error)?;
    file.persist(destination)
        .map_err(|error| write_error(error.error))?;
    Ok(())
}
