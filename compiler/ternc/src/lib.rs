//! Tern Compilation Driver
//!
//! Compiles a tree of source units into a mirrored tree of generated units.
//! Parsing and checking happen upstream: callers plug in a [`UnitSource`]
//! that hands back one checked module per file.
//!
//! ```text
//!   source root ──walk──▶ directories (created first, in order)
//!                  └────▶ files ──par──▶ parse_unit ─▶ emit_unit ─▶ atomic write
//! ```

mod driver;
mod error;
mod source;
mod walk;

use std::sync::Once;

pub use driver::{
    compile_tree, compile_unit, output_file_name, CompileSummary, PACKAGE_ENTRY_FILE,
    PACKAGE_INIT_FILE, TARGET_EXTENSION,
};
pub use error::CompileError;
pub use source::{SourceError, UnitSource};
pub use walk::walk_tree;

static TRACING_INIT: Once = Once::new();

/// Crates a bare `RUST_LOG` level applies to.
const TRACED_CRATES: &[&str] = &["ternc", "tern_codegen"];

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset. A bare level such as
/// `RUST_LOG=debug` traces the tern crates at that level and everything else
/// at `warn`; full directives (`ternc=trace,rayon=debug`) are used as given.
/// Later calls are no-ops.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(rust_log) = std::env::var("RUST_LOG") else {
            return;
        };
        let filter = EnvFilter::new(filter_directives(&rust_log));
        // Keep any subscriber the embedding program already installed.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .try_init();
    });
}

fn filter_directives(rust_log: &str) -> String {
    use tracing_subscriber::filter::LevelFilter;

    let rust_log = rust_log.trim();
    if rust_log.parse::<LevelFilter>().is_err() {
        return rust_log.to_string();
    }
    let level = rust_log.to_ascii_lowercase();
    std::iter::once("warn".to_string())
        .chain(TRACED_CRATES.iter().map(|krate| format!("{krate}={level}")))
        .collect::<Vec<_>>()
        .join(",")
}
