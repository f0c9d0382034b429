use std::fmt::{Display, Formatter};
use std::error::Error;
use crate::geometry::Coord;

/// Length, in grid units, of each arm of a constructed perpendicular.
pub const PERPENDICULAR_LENGTH: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// The segment is vertical, so its own slope divides by zero.
    Vertical,
    /// The segment is horizontal, so the perpendicular slope divides by zero.
    Horizontal,
    /// A constructed point falls outside the i32 grid.
    Overflow,
}

impl Error for ConstructionError {}

impl Display for ConstructionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ConstructionError::Vertical =>
                write!(f, "segment is vertical, its slope is undefined"),
            ConstructionError::Horizontal =>
                write!(f, "segment is horizontal, the perpendicular slope is undefined"),
            ConstructionError::Overflow =>
                write!(f, "constructed point lies outside the coordinate range"),
        }
    }
}

/// The two far corners of the square built outward from side `a`-`b`,
/// i.e. the side vector rotated by 90 degrees.
pub fn square_corners(a: Coord, b: Coord) -> Result<(Coord, Coord), ConstructionError> {
    let d = b.checked_sub(a).ok_or(ConstructionError::Overflow)?;
    let turned = d.y.checked_neg().ok_or(ConstructionError::Overflow)?;
    let shift = Coord::new(turned, d.x);

    match (a.checked_add(shift), b.checked_add(shift)) {
        (Some(c), Some(d)) => Ok((c, d)),
        _ => Err(ConstructionError::Overflow),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Perpendicular {
    pub mid: Coord,
    pub ends: [Coord; 2],
}

/// Two arms of length `PERPENDICULAR_LENGTH` through the midpoint of `a`-`b`.
///
/// The midpoint and both offsets are truncated toward zero.
pub fn perpendicular(a: Coord, b: Coord) -> Result<Perpendicular, ConstructionError> {
    // the halved sum of two i32 always fits back into i32
    let half = |p: i32, q: i32| ((i64::from(p) + i64::from(q)) / 2) as i32;
    let mid = Coord::new(half(a.x, b.x), half(a.y, b.y));

    if a.x == b.x {
        return Err(ConstructionError::Vertical);
    }

    let rise = i64::from(b.y) - i64::from(a.y);
    let run = i64::from(b.x) - i64::from(a.x);
    let slope = rise as f64 / run as f64;
    if slope == 0.0 {
        return Err(ConstructionError::Horizontal);
    }

    let normal = -1.0 / slope;
    let dx = (PERPENDICULAR_LENGTH / (1.0 + normal.powi(2)).sqrt()) as i32;
    let dy = (normal * f64::from(dx)) as i32;
    let offset = Coord::new(dx, dy);

    match (mid.checked_add(offset), mid.checked_sub(offset)) {
        (Some(first), Some(second)) => Ok(Perpendicular {
            mid,
            ends: [first, second],
        }),
        _ => Err(ConstructionError::Overflow),
    }
}
