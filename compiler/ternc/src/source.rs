//! Source units.
//!
//! The driver never parses: a [`UnitSource`] supplies the already-checked
//! module for each file it visits.

use std::io;
use std::path::Path;

use tern_ir::{Module, Name};
use thiserror::Error;

/// Why a unit could not be loaded.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read failed")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Supplies one source module per file.
///
/// Units compile in parallel, so implementations must be shareable across
/// threads.
pub trait UnitSource: Sync {
    /// Load the checked module for the file at `path`.
    fn parse_unit(&self, path: &Path) -> Result<Module, SourceError>;

    /// Names `module` exposes, in order.
    fn exported_names(&self, module: &Module) -> Vec<Name> {
        tern_ir::exported_names(module)
    }
}
