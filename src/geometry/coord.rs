use std::fmt::{Display, Formatter};

/// An integer grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// `self + other`, or `None` when a component leaves the i32 range.
    pub fn checked_add(self, other: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_add(other.x)?,
            self.y.checked_add(other.y)?
        ))
    }

    /// `self - other`, or `None` when a component leaves the i32 range.
    pub fn checked_sub(self, other: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_sub(other.x)?,
            self.y.checked_sub(other.y)?
        ))
    }

    /// Parses a coordinate-pair lexeme such as `(3,1)` or `( -5 , 5 )`.
    pub fn parse(lexeme: &str) -> Result<Coord, String> {
        let inner = lexeme.trim()
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .ok_or_else(|| format!("\"{}\" is not a coordinate pair", lexeme))?;

        let mut parts = inner.split(',').map(str::trim);
        let (x, y) = match (parts.next(), parts.next(), parts.next()) {
            (Some(x), Some(y), None) => (x, y),
            _ => return Err(format!("\"{}\" is not a coordinate pair", lexeme)),
        };

        if x.contains('.') || y.contains('.') {
            return Err(format!("coordinates must be integers, found {}", lexeme));
        }

        let number = |s: &str| s.parse::<i32>()
            .map_err(|e| format!("bad coordinate \"{}\": {}", s, e));

        Ok(Coord::new(number(x)?, number(y)?))
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Where the coordinates of a point reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordSource {
    /// Written inline right after the name.
    Explicit,
    /// Taken from an earlier definition.
    Known,
    /// Drawn at random.
    Generated,
    /// Computed from other points, e.g. a square's far corners.
    Derived,
    /// Unknown name replaced by the origin.
    Defaulted,
}

impl CoordSource {
    pub fn carries_coords(&self) -> bool {
        matches!(self, CoordSource::Explicit | CoordSource::Derived)
    }
}

#[cfg(test)]
mod coord_tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Coord::parse("(3,1)"), Ok(Coord::new(3, 1)));
        assert_eq!(Coord::parse("(-5,5)"), Ok(Coord::new(-5, 5)));
        assert_eq!(Coord::parse("( 2 , -7 )"), Ok(Coord::new(2, -7)));
    }

    #[test]
    fn test_parse_rejects_fractions() {
        let err = Coord::parse("(1.5,2)").unwrap_err();
        assert!(err.contains("integers"), "{}", err);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Coord::parse("3,1").is_err());
        assert!(Coord::parse("(3)").is_err());
        assert!(Coord::parse("(1,2,3)").is_err());
        assert!(Coord::parse("(99999999999,1)").is_err());
    }

    #[test]
    fn test_checked_arithmetic() {
        let a = Coord::new(3, -1);
        assert_eq!(a.checked_add(Coord::new(-4, 2)), Some(Coord::new(-1, 1)));
        assert_eq!(a.checked_sub(Coord::new(-4, 2)), Some(Coord::new(7, -3)));

        assert_eq!(Coord::new(i32::MAX, 0).checked_add(Coord::new(1, 0)), None);
        assert_eq!(Coord::new(0, i32::MIN).checked_sub(Coord::new(0, 1)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(-3, 6).to_string(), "(-3,6)");
    }
}
