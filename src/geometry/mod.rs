mod coord;
mod primitive;
mod construct;
mod table;

pub use coord::{Coord, CoordSource};
pub use primitive::Primitive;
pub use construct::{square_corners, perpendicular};
pub use table::{CoordinateTable, GridExhausted};
