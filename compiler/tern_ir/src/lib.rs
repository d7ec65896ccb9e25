//! Tern IR - Source Tree Types
//!
//! This crate contains the already-parsed, already-type-checked source tree
//! that the code generator consumes:
//! - [`Module`]: the root of one compilation unit
//! - [`Stmt`] and [`Expr`]: the closed set of statement and expression variants
//! - [`BinaryOp`]: operator tags shared with the runtime prelude
//! - [`exported_names`]: the default export-set computation
//!
//! # Design Philosophy
//!
//! - **Closed Variants**: every node kind is an enum variant, so lowering and
//!   rendering are checked for exhaustiveness by the compiler
//! - **Owned Children**: each node owns its children; trees are acyclic and
//!   never aliased
//! - **Already Valid**: names, arities and types were checked upstream; nothing
//!   here validates semantics

pub mod ast;
mod exports;

pub use ast::{
    for_each_binding, Arg, BinaryOp, BindingKind, Expr, ImportAlias, ImportName, Module, NumberOp,
    Stmt,
};
pub use exports::{exported_names, EXPORT_LIST_NAME};

/// An identifier in the source program.
pub type Name = String;
