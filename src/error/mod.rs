pub mod error;
pub mod errors;

pub use errors::Errors;
pub use error::{CompilationError, CompilationErrorKind};

pub type ParseResult<T> = Result<T, CompilationError>;
