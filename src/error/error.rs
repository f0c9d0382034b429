use std::fmt::{Display, Formatter};
use std::error::Error;
use crate::position::FilePosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompilationErrorKind {
    /// The token stream does not follow the command grammar.
    SyntaxError,
    /// A construction is malformed or refers to unknown names.
    SemanticError,
    /// A construction has no defined result, e.g. an undefined slope.
    GeometryError,
    /// The exported program could not be written.
    OutputError,
}

#[derive(Debug, Clone)]
pub struct CompilationError {
    kind: CompilationErrorKind,
    pos: FilePosition,
    path: Option<String>,
    msg: String
}

impl CompilationError {
    pub fn new(
        kind: CompilationErrorKind,
        path: &Option<String>,
        pos: FilePosition,
        msg: &str
    ) -> Self {
        CompilationError {
            kind,
            path: path.clone(),
            pos,
            msg: String::from(msg),
        }
    }

    pub fn kind(&self) -> CompilationErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn pos(&self) -> FilePosition {
        self.pos
    }

    pub fn is_fatal(&self) -> bool {
        self.kind != CompilationErrorKind::SemanticError
    }
}

impl Error for CompilationError {}

impl Display for CompilationError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let path = self.path.as_deref().unwrap_or("~");
        write!(
            f, "{:?} at {}:{}: {}",
            self.kind, path, self.pos, self.msg
        )
    }
}
