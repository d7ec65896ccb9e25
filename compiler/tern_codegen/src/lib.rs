//! JavaScript Code Generation Backend for Tern
//!
//! Lowers a checked source module to a target syntax tree, renders it, and
//! prefixes the runtime prelude.
//!
//! # Architecture
//!
//! ```text
//!   tern_ir::Module + export set
//!        ↓
//!    Transformer      (hoisting, import bindings, runtime shim calls)
//!        ↓
//!   tern_js::Stmt
//!        ↓
//!     Printer         (dense single-line text)
//!        ↓
//!   prelude + body    (one generated unit)
//! ```

mod context;
pub mod hoist;
pub mod runtime;
pub mod transform;

pub use context::{TransformContext, IMPORT_TEMP_PREFIX};
pub use runtime::prelude;
pub use transform::{transform, Transformer};

use tern_ir::{Module, Name};
use tern_js::{Printer, StringEmitter};

/// Generate the complete text of one unit: the prelude immediately followed
/// by the rendered module body.
pub fn emit_unit(module: &Module, exports: &[Name]) -> String {
    let lowered = transform(module, exports);

    let mut printer = Printer::new(StringEmitter::with_prefix(prelude(), 4096));
    printer.stmt(&lowered);
    printer.finish().output()
}
