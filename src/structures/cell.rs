/*!
A cell of a grid world, identified by a pair of coordinates.

Cells are ordered by their *rank*, a linear combination of the coordinates.
As worlds are never larger than [GRID_LIMIT] × [GRID_LIMIT], distinct cells within the limit have distinct ranks.

```rust
# use pacard::structures::cell::Cell;
let corner = Cell::new(0, 19);
let next = Cell::new(1, 0);

assert_eq!(corner.rank(), 19);
assert_eq!(next.rank(), 20);
assert!(corner < next);
```
*/

/// A coordinate of a cell.
pub type Coordinate = u32;

/// The rank of a cell.
pub type Rank = u64;

/// The (exclusive) bound on either coordinate of a cell.
pub const GRID_LIMIT: Coordinate = 20;

/// A location in a grid world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The column of the cell.
    pub x: Coordinate,

    /// The row of the cell, counted from the bottom of a world.
    pub y: Coordinate,
}

impl Cell {
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Cell { x, y }
    }

    /// The rank of the cell, `20x + y`.
    ///
    /// Unique only for cells [within bounds](Cell::within_bounds).
    pub fn rank(&self) -> Rank {
        Rank::from(GRID_LIMIT) * Rank::from(self.x) + Rank::from(self.y)
    }

    /// Whether both coordinates are below [GRID_LIMIT].
    pub fn within_bounds(&self) -> bool {
        self.x < GRID_LIMIT && self.y < GRID_LIMIT
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank().cmp(&other.rank()) {
            std::cmp::Ordering::Equal => (self.x, self.y).cmp(&(other.x, other.y)),
            unequal => unequal,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(Coordinate, Coordinate)> for Cell {
    fn from(value: (Coordinate, Coordinate)) -> Self {
        Cell::new(value.0, value.1)
    }
}
