pub mod ast;
pub mod code;

pub use ast::{Node, NodeKind, PointRef};
pub use code::{Code, Compilation, Drawing};
