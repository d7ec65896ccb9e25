//! Transform context and per-unit state.
//!
//! The `TransformContext` holds everything that lives for exactly one
//! compilation unit: the export set handed in by the caller and the counter
//! used to name import temporaries.

use tern_ir::Name;

/// Prefix of synthetic import temporaries. `$` cannot start a source
/// identifier, so these never collide with user names.
pub const IMPORT_TEMP_PREFIX: &str = "$import";

/// Transform context.
///
/// Create one per unit and drop it afterwards; nothing is shared between
/// units, so units may be transformed concurrently with separate contexts.
pub struct TransformContext<'a> {
    /// Names the module exposes, computed upstream.
    exports: &'a [Name],
    /// Counter for generating unique import temporaries.
    import_counter: u32,
}

impl<'a> TransformContext<'a> {
    /// Create a new transform context.
    pub fn new(exports: &'a [Name]) -> Self {
        Self {
            exports,
            import_counter: 0,
        }
    }

    /// The unit's export set, in order.
    #[inline]
    pub fn exports(&self) -> &'a [Name] {
        self.exports
    }

    /// Generate a unique import temporary name: `$import0`, `$import1`, ...
    pub fn fresh_import_name(&mut self) -> String {
        let n = self.import_counter;
        self.import_counter += 1;
        format!("{IMPORT_TEMP_PREFIX}{n}")
    }
}
