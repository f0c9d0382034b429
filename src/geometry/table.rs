use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::error::Error;
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng};
use crate::geometry::{Coord, CoordSource};

/// Range of x for generated points, exclusive of the upper bound.
pub const GENERATED_X: std::ops::Range<i32> = 0..4;
/// Range of y for generated points, exclusive of the upper bound.
pub const GENERATED_Y: std::ops::Range<i32> = 0..6;

/// Every generated position is already the value of some point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExhausted;

impl Error for GridExhausted {}

impl Display for GridExhausted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f, "no free position left in [{}, {}) x [{}, {})",
            GENERATED_X.start, GENERATED_X.end,
            GENERATED_Y.start, GENERATED_Y.end
        )
    }
}

/// Point names and their coordinates for a single run.
pub struct CoordinateTable {
    points: HashMap<String, Coord>,
    rng: Box<dyn RngCore>,
}

impl Default for CoordinateTable {
    fn default() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl CoordinateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table whose generated coordinates are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: impl RngCore + 'static) -> Self {
        CoordinateTable {
            points: HashMap::new(),
            rng: Box::new(rng),
        }
    }

    /// Resolves the coordinates of `name`.
    ///
    /// Inline coordinates win and overwrite any earlier value. Otherwise an
    /// earlier value is reused, and only a never seen name gets a freshly
    /// generated position that no other point holds yet.
    pub fn resolve(
        &mut self,
        name: &str,
        explicit: Option<Coord>
    ) -> Result<(Coord, CoordSource), GridExhausted> {
        let resolved = if let Some(at) = explicit {
            (at, CoordSource::Explicit)
        } else if let Some(&at) = self.points.get(name) {
            (at, CoordSource::Known)
        } else {
            (self.generate()?, CoordSource::Generated)
        };

        log::trace!("{} => {} ({:?})", name, resolved.0, resolved.1);
        self.points.insert(name.to_string(), resolved.0);

        Ok(resolved)
    }

    /// Looks `name` up without defining it, falling back to the origin.
    pub fn lookup(&self, name: &str) -> (Coord, CoordSource) {
        match self.points.get(name) {
            Some(&at) => (at, CoordSource::Known),
            None => (Coord::ORIGIN, CoordSource::Defaulted),
        }
    }

    pub fn get(&self, name: &str) -> Option<Coord> {
        self.points.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Coord)> {
        self.points.iter()
    }

    fn is_taken(&self, at: &Coord) -> bool {
        self.points.values().any(|c| c == at)
    }

    // Rejection sampling over the 24 cells. The loop only runs while at
    // least one cell is free, so it terminates with probability one.
    fn generate(&mut self) -> Result<Coord, GridExhausted> {
        let free = GENERATED_X
            .flat_map(|x| GENERATED_Y.map(move |y| Coord::new(x, y)))
            .any(|c| !self.is_taken(&c));
        if !free {
            return Err(GridExhausted);
        }

        loop {
            let at = Coord::new(
                self.rng.gen_range(GENERATED_X),
                self.rng.gen_range(GENERATED_Y)
            );
            if !self.is_taken(&at) {
                return Ok(at);
            }
        }
    }
}
