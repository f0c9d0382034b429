use std::fmt::{Display, Formatter};

pub const START_POSITION: FilePosition = FilePosition { line: 1, col: 1 };

/// Line and column (in chars, both 1-based) of a word in the input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FilePosition {
    pub line: usize,
    pub col: usize,
}

impl FilePosition {
    pub fn new(line: usize, col: usize) -> Self {
        FilePosition { line, col }
    }

    /// Moves past `c`, wrapping to the next line on `'\n'`.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}

impl Display for FilePosition {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
