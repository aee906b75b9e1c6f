use crate::structures::cell::Cell;

/// A direction of movement in a cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Each direction, in the order successors are given.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The cell reached by moving from `cell` in the direction, if the coordinates of the cell would remain non-negative.
    pub fn step(&self, cell: Cell) -> Option<Cell> {
        match self {
            Self::North => Some(Cell::new(cell.x, cell.y + 1)),
            Self::South => cell.y.checked_sub(1).map(|y| Cell::new(cell.x, y)),
            Self::East => Some(Cell::new(cell.x + 1, cell.y)),
            Self::West => cell.x.checked_sub(1).map(|x| Cell::new(x, cell.y)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => write!(f, "North"),
            Self::South => write!(f, "South"),
            Self::East => write!(f, "East"),
            Self::West => write!(f, "West"),
        }
    }
}
