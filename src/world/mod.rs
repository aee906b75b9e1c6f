/*!
The interface through which the agent observes a world.

A world is anything which can answer the questions in the [World] trait: where the agent starts, which cells are goals, which cells are adjacent to a cell, and what is sensed at a cell.
The agent never learns where a hazard is, except through what is sensed.

A [cave](cave::Cave) read from a text layout is provided as an example of a world.
*/

pub mod cave;
mod direction;
pub use direction::Direction;

use crate::structures::{cell::Cell, label::Label};

/// A cost of taking some action.
pub type Cost = u32;

/// A cell which may be reached from some other cell, together with the action and cost of reaching the cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Successor<A> {
    pub cell: Cell,
    pub action: A,
    pub cost: Cost,
}

/// What is sensed at a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Percepts {
    /// The stench of the wumpus.
    pub stench: bool,

    /// The glow of a teleporter.
    pub glow: bool,

    /// Chemicals of a poison capsule.
    pub chemicals: bool,
}

impl Percepts {
    /// Whether the indicator of `label` is sensed.
    ///
    /// Labels which are not indicators are never sensed.
    pub fn senses(&self, label: Label) -> bool {
        match label {
            Label::WumpusStench => self.stench,
            Label::TeleporterGlow => self.glow,
            Label::PoisonChemicals => self.chemicals,
            _ => false,
        }
    }

    /// Whether nothing is sensed.
    pub fn is_clear(&self) -> bool {
        !(self.stench || self.glow || self.chemicals)
    }
}

impl std::fmt::Display for Percepts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "stench: {}, glow: {}, chemicals: {}",
            self.stench, self.glow, self.chemicals
        )
    }
}

/// A world, as seen by the agent.
///
/// Every method other than [percepts](World::percepts) must be implemented.
pub trait World {
    /// An action which moves the agent from one cell to another.
    type Action;

    /// The cell the agent starts from.
    fn start(&self) -> Cell;

    /// Whether `cell` is a goal.
    fn is_goal(&self, cell: Cell) -> bool;

    /// The cells which may be reached from `cell` with a single action.
    fn successors(&self, cell: Cell) -> Vec<Successor<Self::Action>>;

    /// Whether the stench of the wumpus is sensed at `cell`.
    fn is_wumpus_close(&self, cell: Cell) -> bool;

    /// Whether the glow of a teleporter is sensed at `cell`.
    fn is_teleporter_close(&self, cell: Cell) -> bool;

    /// Whether the chemicals of a poison capsule are sensed at `cell`.
    fn is_poison_close(&self, cell: Cell) -> bool;

    /// The actions which take the agent through each cell of `visited`, in order.
    fn reconstruct_path(&self, visited: &[Cell]) -> Vec<Self::Action>;

    /// Everything sensed at `cell`.
    fn percepts(&self, cell: Cell) -> Percepts {
        Percepts {
            stench: self.is_wumpus_close(cell),
            glow: self.is_teleporter_close(cell),
            chemicals: self.is_poison_close(cell),
        }
    }
}
