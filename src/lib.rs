mod parsing;
mod semantics;
mod tokenization;
mod position;
mod error;
mod geometry;
mod translation;
pub mod render;

pub use parsing::{Code, Compilation, Drawing, Node, NodeKind, PointRef};
pub use error::{CompilationError, CompilationErrorKind, Errors, ParseResult};
pub use tokenization::{analyse, Category, Token, TokenStream};
pub use geometry::{Coord, CoordSource, CoordinateTable, GridExhausted, Primitive};
pub use semantics::SemanticAnalyzer;
pub use position::FilePosition;
pub use render::{Grid, Mark, Surface};
pub use translation::ProgramExport;
