//! Source tree traversal.

use std::path::{Path, PathBuf};

use crate::error::CompileError;

/// Walk the tree rooted at `root`.
///
/// For a directory root, `on_dir` receives the root itself (as the empty
/// relative path) and then every subdirectory before any of its contents;
/// `on_file` receives each file's full path and its path relative to `root`.
/// Entries of a directory are visited in name order. A symlink to a
/// directory is reported through `on_dir` but never descended into.
///
/// For a file root, only `on_file(root, <file name>)` is called.
pub fn walk_tree<D, F>(root: &Path, on_dir: &mut D, on_file: &mut F) -> Result<(), CompileError>
where
    D: FnMut(&Path),
    F: FnMut(&Path, &Path),
{
    if root.is_dir() {
        on_dir(Path::new(""));
        walk_dir(root, Path::new(""), on_dir, on_file)
    } else {
        std::fs::metadata(root).map_err(|source| CompileError::Walk {
            path: root.to_path_buf(),
            source,
        })?;
        let name = root.file_name().map_or_else(PathBuf::new, PathBuf::from);
        on_file(root, &name);
        Ok(())
    }
}

fn walk_dir<D, F>(
    dir: &Path,
    relative: &Path,
    on_dir: &mut D,
    on_file: &mut F,
) -> Result<(), CompileError>
where
    D: FnMut(&Path),
    F: FnMut(&Path, &Path),
{
    let walk_error = |source: std::io::Error| CompileError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = std::fs::read_dir(dir)
        .map_err(walk_error)?
        .map(|entry| {
            let entry = entry?;
            Ok((entry.path(), entry.file_type()?))
        })
        .collect::<Result<Vec<_>, std::io::Error>>()
        .map_err(walk_error)?;
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (path, file_type) in entries {
        let Some(name) = path.file_name() else {
            continue;
        };
        let child = relative.join(name);
        if file_type.is_dir() {
            on_dir(&child);
            walk_dir(&path, &child, on_dir, on_file)?;
        } else if file_type.is_symlink() && path.is_dir() {
            // Linked directories are mirrored but never entered.
            on_dir(&child);
        } else {
            on_file(&path, &child);
        }
    }

    Ok(())
}
