//! Tern JS - Target Syntax Tree and Printer
//!
//! The lowered form of a compilation unit and the renderer that turns it
//! into target-language text.
//!
//! # Architecture
//!
//! ```text
//!   js::Stmt tree
//!        ↓
//!     Printer     (single-pass recursive descent)
//!        ↓
//!     Emitter     (string buffer)
//!        ↓
//!      String
//! ```
//!
//! Output is one dense stream: no indentation or line breaks are inserted.
//!
//! # Modules
//!
//! - [`ast`]: target node variants and constructors
//! - [`emitter`]: output abstraction
//! - [`printer`]: rendering rules

pub mod ast;
pub mod emitter;
pub mod printer;

pub use ast::{AssignTarget, Expr, Stmt};
pub use emitter::{Emitter, StringEmitter};
pub use printer::{render_expr, render_stmt, Printer};
