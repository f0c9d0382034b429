//! Mapping between grid coordinates and the pixels of a drawing surface.
//!
//! The grid origin sits in the middle of the surface, x grows to the right
//! and y grows upward, so pixel rows run opposite to grid rows.

use std::fmt::{Display, Formatter};
use crate::geometry::{Coord, Primitive};

/// Something primitives can be painted on, in pixel space.
pub trait Surface {
    fn point(&mut self, name: &str, x: i32, y: i32);
    fn segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub spacing: i32,
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(800, 600, 40)
    }
}

impl Grid {
    /// A spacing below one pixel is raised to one.
    pub fn new(width: i32, height: i32, spacing: i32) -> Self {
        Grid { width, height, spacing: spacing.max(1) }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.width / 2, self.height / 2)
    }

    pub fn to_pixel(&self, at: Coord) -> (i32, i32) {
        let (cx, cy) = self.center();
        (
            cx.saturating_add(at.x.saturating_mul(self.spacing)),
            cy.saturating_sub(at.y.saturating_mul(self.spacing)),
        )
    }

    /// Grid cell under a pointer at pixel `(x, y)`, truncated toward zero.
    pub fn readout(&self, x: i32, y: i32) -> Coord {
        let (cx, cy) = self.center();
        Coord::new((x - cx) / self.spacing, -(y - cy) / self.spacing)
    }

    pub fn pointer_label(&self, x: i32, y: i32) -> String {
        let at = self.readout(x, y);
        format!("Mouse: ({}, {})", at.x, at.y)
    }

    /// Paints `primitives` in order.
    pub fn render(&self, primitives: &[Primitive], surface: &mut impl Surface) {
        for p in primitives {
            match p {
                Primitive::Point { name, at } => {
                    let (x, y) = self.to_pixel(*at);
                    surface.point(name, x, y);
                }
                Primitive::Segment { from, to } => {
                    let (x1, y1) = self.to_pixel(*from);
                    let (x2, y2) = self.to_pixel(*to);
                    surface.segment(x1, y1, x2, y2);
                }
            }
        }
    }

    pub fn plot(&self, primitives: &[Primitive]) -> Vec<Mark> {
        let mut marks = Vec::with_capacity(primitives.len());
        self.render(primitives, &mut marks);
        marks
    }
}

/// A primitive already mapped to pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    Point { name: String, x: i32, y: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
}

impl Surface for Vec<Mark> {
    fn point(&mut self, name: &str, x: i32, y: i32) {
        self.push(Mark::Point { name: name.to_string(), x, y });
    }

    fn segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.push(Mark::Line { x1, y1, x2, y2 });
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Mark::Point { name, x, y } =>
                write!(f, "point {} at {},{}", name, x, y),
            Mark::Line { x1, y1, x2, y2 } =>
                write!(f, "line {},{} -> {},{}", x1, y1, x2, y2),
        }
    }
}
