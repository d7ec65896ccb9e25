//! Line-oriented writer for the prelude text.

/// Indentation unit for prelude lines.
const INDENT: &str = "    ";

/// Builds prelude text line by line with block indentation.
pub(super) struct PreludeWriter {
    /// Current indentation level.
    indent: usize,
    /// Generated text.
    output: String,
}

impl PreludeWriter {
    pub(super) fn new() -> Self {
        Self {
            indent: 0,
            output: String::with_capacity(8192),
        }
    }

    /// Increase indentation level.
    pub(super) fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub(super) fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a line (with indentation and newline).
    pub(super) fn writeln(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
        self.output.push_str(line);
        self.output.push('\n');
    }

    /// Take the generated text.
    pub(super) fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_dedent() {
        let mut w = PreludeWriter::new();

        w.writeln("line1");
        w.indent();
        w.writeln("line2");
        w.indent();
        w.writeln("line3");
        w.dedent();
        w.writeln("line4");
        w.dedent();
        w.writeln("line5");

        assert_eq!(
            w.finish(),
            "line1\n    line2\n        line3\n    line4\nline5\n"
        );
    }
}
