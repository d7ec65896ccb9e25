//! Output sinks for the printer.

/// Destination for rendered text.
///
/// The printer only ever appends, so a sink needs no positioning or
/// indentation support.
pub trait Emitter {
    /// Append a text fragment.
    fn emit(&mut self, text: &str);

    /// Append a single character.
    fn emit_char(&mut self, c: char);
}

/// Accumulates rendered text in memory.
#[derive(Default, Debug)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    /// Start from `prefix` (a unit's prelude, say), reserving room for
    /// `additional` more bytes of rendered output.
    pub fn with_prefix(prefix: &str, additional: usize) -> Self {
        let mut buffer = String::with_capacity(prefix.len() + additional);
        buffer.push_str(prefix);
        Self { buffer }
    }

    /// The accumulated text.
    pub fn output(self) -> String {
        self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_char(&mut self, c: char) {
        self.buffer.push(c);
    }
}
