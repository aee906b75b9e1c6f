/*!
A cave, read from a text layout.

Layouts are read row by row, from the top of the cave to the bottom:

| Character | Tile |
|-----------|------|
| `%` | A wall |
| ` ` or `.` | Floor |
| `P` | The start (on floor) |
| `E` | An exit (on floor) |
| `W` | The wumpus |
| `T` | A teleporter |
| `O` | A poison capsule |

The x coordinate of a cell is the column of the cell and the y coordinate counts rows from the bottom of the layout.
Rows shorter than the longest row are padded with wall.

```rust
# use pacard::world::{cave::Cave, World};
# use pacard::structures::cell::Cell;
let cave: Cave = "
%%%%%
%W  %
%P E%
%%%%%"
    .parse()
    .unwrap();

assert_eq!(cave.start(), Cell::new(1, 1));
assert!(cave.is_goal(Cell::new(3, 1)));

assert!(cave.is_wumpus_close(cave.start()));
assert!(!cave.is_wumpus_close(Cell::new(3, 1)));
```

A stench, glow, or chemicals are sensed at a cell when the wumpus, a teleporter, or a poison capsule occupies an orthogonally adjacent cell.

Entering the cell of the wumpus or of a poison capsule is fatal.
Entering a teleporter is not, though the agent is carried away and the walk ends there.
*/

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

use crate::{
    misc::log::targets::{self},
    structures::{
        cell::{Cell, Coordinate, GRID_LIMIT},
        label::Label,
    },
    types::err::{self},
    world::{Direction, Successor, World},
};

/// The occupant of a cell of a cave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
    Wumpus,
    Teleporter,
    Poison,
}

impl Tile {
    /// The hazard of the tile, if any.
    pub fn hazard(&self) -> Option<Label> {
        match self {
            Self::Wumpus => Some(Label::Wumpus),
            Self::Teleporter => Some(Label::Teleporter),
            Self::Poison => Some(Label::Poison),
            Self::Wall | Self::Floor => None,
        }
    }
}

/// How a walk through a cave ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// An exit was reached.
    Exited(Cell),

    /// A deadly hazard was entered.
    Perished(Cell, Label),

    /// A teleporter was entered, and the agent carried away.
    Teleported(Cell),

    /// The actions were exhausted away from an exit.
    Stranded(Cell),

    /// An action led into a wall, from the given cell.
    Blocked(Cell),
}

/// A cave.
#[derive(Clone, Debug)]
pub struct Cave {
    width: Coordinate,
    height: Coordinate,

    /// Tiles, row by row from the bottom of the cave.
    tiles: Vec<Tile>,

    start: Cell,
    exits: BTreeSet<Cell>,
}

impl Cave {
    pub fn width(&self) -> Coordinate {
        self.width
    }

    pub fn height(&self) -> Coordinate {
        self.height
    }

    /// The tile at `cell`, with any cell beyond the cave a wall.
    pub fn tile(&self, cell: Cell) -> Tile {
        if cell.x >= self.width || cell.y >= self.height {
            return Tile::Wall;
        }
        self.tiles[(cell.y * self.width + cell.x) as usize]
    }

    /// The hazard at `cell`, if any.
    pub fn hazard_at(&self, cell: Cell) -> Option<Label> {
        self.tile(cell).hazard()
    }

    /// Whether the agent may stand at `cell`.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.tile(cell) != Tile::Wall
    }

    /// The exits of the cave.
    pub fn exits(&self) -> impl Iterator<Item = &Cell> {
        self.exits.iter()
    }

    /// Whether `hazard` occupies a cell orthogonally adjacent to `cell`.
    fn is_close(&self, cell: Cell, hazard: Label) -> bool {
        Direction::ALL
            .iter()
            .filter_map(|direction| direction.step(cell))
            .any(|neighbour| self.hazard_at(neighbour) == Some(hazard))
    }

    /// Takes each action in turn from the start, stopping at the first hazard, wall, or exit.
    pub fn walk(&self, actions: &[Direction]) -> Walk {
        let mut cell = self.start;

        for action in actions {
            if self.is_goal(cell) {
                return Walk::Exited(cell);
            }

            match action.step(cell) {
                Some(next) if self.is_open(next) => cell = next,
                _ => return Walk::Blocked(cell),
            }

            match self.hazard_at(cell) {
                Some(hazard) if hazard.is_deadly() => return Walk::Perished(cell, hazard),
                Some(_) => return Walk::Teleported(cell),
                None => {}
            }
        }

        match self.is_goal(cell) {
            true => Walk::Exited(cell),
            false => Walk::Stranded(cell),
        }
    }

    /// The actions of a shortest route from `from` to `to` through cells of `through`, if one exists.
    fn route(&self, from: Cell, to: Cell, through: &HashSet<Cell>) -> Option<Vec<Direction>> {
        let mut parents: HashMap<Cell, (Cell, Direction)> = HashMap::default();
        let mut queue = VecDeque::from([from]);

        while let Some(cell) = queue.pop_front() {
            if cell == to {
                let mut actions = Vec::new();
                let mut step = to;
                while let Some((parent, action)) = parents.get(&step) {
                    actions.push(*action);
                    step = *parent;
                }
                actions.reverse();
                return Some(actions);
            }

            for successor in self.successors(cell) {
                if successor.cell == from
                    || !through.contains(&successor.cell)
                    || parents.contains_key(&successor.cell)
                {
                    continue;
                }
                parents.insert(successor.cell, (cell, successor.action));
                queue.push_back(successor.cell);
            }
        }

        None
    }

    /// The layout of the cave, with each cell of `marked` on floor drawn as `*`.
    pub fn render(&self, marked: &[Cell]) -> String {
        let marked = marked.iter().copied().collect::<HashSet<_>>();
        let mut the_string = String::new();

        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let cell = Cell::new(x, y);
                let character = match self.tile(cell) {
                    Tile::Wall => '%',
                    Tile::Wumpus => 'W',
                    Tile::Teleporter => 'T',
                    Tile::Poison => 'O',
                    Tile::Floor if cell == self.start => 'P',
                    Tile::Floor if self.exits.contains(&cell) => 'E',
                    Tile::Floor if marked.contains(&cell) => '*',
                    Tile::Floor => ' ',
                };
                the_string.push(character);
            }
            the_string.push('\n');
        }

        the_string
    }
}

impl World for Cave {
    type Action = Direction;

    fn start(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, cell: Cell) -> bool {
        self.exits.contains(&cell)
    }

    fn successors(&self, cell: Cell) -> Vec<Successor<Direction>> {
        Direction::ALL
            .iter()
            .filter_map(|direction| {
                direction
                    .step(cell)
                    .filter(|next| self.is_open(*next))
                    .map(|next| Successor {
                        cell: next,
                        action: *direction,
                        cost: 1,
                    })
            })
            .collect()
    }

    fn is_wumpus_close(&self, cell: Cell) -> bool {
        self.is_close(cell, Label::Wumpus)
    }

    fn is_teleporter_close(&self, cell: Cell) -> bool {
        self.is_close(cell, Label::Teleporter)
    }

    fn is_poison_close(&self, cell: Cell) -> bool {
        self.is_close(cell, Label::Poison)
    }

    /// Joins each pair of consecutive cells by a shortest route through cells visited so far.
    ///
    /// If some pair cannot be joined the actions up to that pair are returned.
    fn reconstruct_path(&self, visited: &[Cell]) -> Vec<Direction> {
        let mut actions = Vec::new();

        let Some(first) = visited.first() else {
            return actions;
        };
        let mut through = HashSet::from([*first]);

        for pair in visited.windows(2) {
            through.insert(pair[1]);
            match self.route(pair[0], pair[1], &through) {
                Some(mut route) => actions.append(&mut route),
                None => {
                    log::warn!(target: targets::WORLD, "No route from {} to {}", pair[0], pair[1]);
                    break;
                }
            }
        }

        actions
    }
}

impl std::str::FromStr for Cave {
    type Err = err::ParseError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let rows = layout
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        if rows.is_empty() {
            return Err(err::ParseError::Empty);
        }

        let height = rows.len();
        let width = rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or_default();

        if height > GRID_LIMIT as usize || width > GRID_LIMIT as usize {
            return Err(err::ParseError::TooLarge);
        }

        let mut tiles = vec![Tile::Wall; width * height];
        let mut start = None;
        let mut exits = BTreeSet::new();

        for (line, row) in rows.iter().enumerate() {
            let y = (height - 1 - line) as Coordinate;

            for (column, character) in row.chars().enumerate() {
                let cell = Cell::new(column as Coordinate, y);

                let tile = match character {
                    '%' => Tile::Wall,
                    ' ' | '.' => Tile::Floor,
                    'P' => {
                        if start.is_some() {
                            return Err(err::ParseError::DuplicateStart(line));
                        }
                        start = Some(cell);
                        Tile::Floor
                    }
                    'E' => {
                        exits.insert(cell);
                        Tile::Floor
                    }
                    'W' => Tile::Wumpus,
                    'T' => Tile::Teleporter,
                    'O' => Tile::Poison,
                    unknown => return Err(err::ParseError::UnknownTile(unknown, line, column)),
                };

                tiles[y as usize * width + column] = tile;
            }
        }

        let Some(start) = start else {
            return Err(err::ParseError::MissingStart);
        };

        if exits.is_empty() {
            return Err(err::ParseError::MissingExit);
        }

        log::info!(target: targets::WORLD, "Read a {width} × {height} cave with {} exit(s)", exits.len());

        Ok(Cave {
            width: width as Coordinate,
            height: height as Coordinate,
            tiles,
            start,
            exits,
        })
    }
}

impl std::fmt::Display for Cave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(&[]))
    }
}
