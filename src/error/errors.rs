use std::fmt::{Display, Formatter};
use crate::error::{CompilationError, CompilationErrorKind};

/// Diagnostics of one run, in the order the tree walk found them.
#[derive(Debug, Default, Clone)]
pub struct Errors {
    found: Vec<CompilationError>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: CompilationError) {
        self.found.push(err)
    }

    pub fn count(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompilationError> {
        self.found.iter()
    }

    pub fn of_kind(&self, kind: CompilationErrorKind) -> impl Iterator<Item = &CompilationError> {
        self.found.iter().filter(move |e| e.kind() == kind)
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a CompilationError;

    type IntoIter = std::slice::Iter<'a, CompilationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        for (i, e) in self.found.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", e)?;
        }

        Ok(())
    }
}
