use std::fmt::{Display, Formatter};
use crate::geometry::Coord;

/// The unit handed to rendering and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Point { name: String, at: Coord },
    Segment { from: Coord, to: Coord },
}

impl Primitive {
    pub fn point(name: &str, x: i32, y: i32) -> Self {
        Primitive::Point {
            name: name.to_string(),
            at: Coord::new(x, y),
        }
    }

    pub fn segment(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Primitive::Segment {
            from: Coord::new(x1, y1),
            to: Coord::new(x2, y2),
        }
    }

    pub fn between(from: Coord, to: Coord) -> Self {
        Primitive::Segment { from, to }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, Primitive::Point { .. })
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Primitive::Segment { .. })
    }
}

impl Display for Primitive {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Primitive::Point { name, at } =>
                write!(f, "Point({},{},{})", name, at.x, at.y),
            Primitive::Segment { from, to } =>
                write!(f, "Segment({},{},{},{})", from.x, from.y, to.x, to.y),
        }
    }
}
