/*!
Reports on an exploration.
*/

use crate::structures::cell::Cell;

/// Counts for an exploration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// Queries given to the resolver.
    pub queries: usize,

    /// Cells classified, counting each classification of a cell separately.
    pub classified: usize,

    /// Cells popped from the frontier.
    pub expansions: usize,
}

impl std::fmt::Display for Counters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} queries, {} classifications, {} expansions",
            self.queries, self.classified, self.expansions
        )
    }
}

/// The result of an exploration which reached a goal.
#[derive(Clone, Debug)]
pub struct Exploration<A> {
    /// The actions which take the agent from the start to the goal, through each visited cell.
    pub actions: Vec<A>,

    /// The cells visited, in order, ending with the goal.
    pub visited: Vec<Cell>,

    /// The cells entered without proof of safety, in the order they were queued.
    pub forced: Vec<Cell>,

    pub counters: Counters,
}

impl<A> Exploration<A> {
    /// The goal reached.
    pub fn goal(&self) -> Option<Cell> {
        self.visited.last().copied()
    }

    /// Whether every cell visited was first proven safe.
    pub fn is_proven(&self) -> bool {
        self.forced.is_empty()
    }
}
