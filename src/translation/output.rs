use std::io::{self, Write};

/// Source lines of an exported program, indented as they are added and
/// held back until the program is complete.
#[derive(Debug, Default)]
pub struct Output {
    indent: usize,
    lines: Vec<String>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent_in(&mut self) {
        self.indent += 4;
    }

    pub fn indent_out(&mut self) {
        self.indent = self.indent.saturating_sub(4);
    }

    /// Adds one line at the current indentation. Empty lines stay empty.
    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", " ".repeat(self.indent), text));
        }
    }

    /// Adds every line of `block`, shifted to the current indentation.
    pub fn block(&mut self, block: &Output) {
        for l in &block.lines {
            self.line(l);
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
        for l in &self.lines {
            writeln!(writer, "{}", l)?;
        }
        writer.flush()
    }
}
