//! Driver error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::SourceError;

/// A failure while compiling a tree.
///
/// Only [`CompileError::Walk`] aborts a tree compilation; the others are
/// reported per unit or directory in [`crate::CompileSummary`].
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("cannot read source tree at {}", path.display())]
    Walk { path: PathBuf, source: io::Error },

    #[error("cannot create output directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot load unit {}", path.display())]
    Source { path: PathBuf, source: SourceError },

    #[error("cannot write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl CompileError {
    /// The file or directory the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            CompileError::Walk { path, .. }
            | CompileError::CreateDir { path, .. }
            | CompileError::Source { path, .. }
            | CompileError::Write { path, .. } => path,
        }
    }
}
