/*!
Exploration of a world, stepping only where safety can be proven.

# Overview

The explorer keeps a [frontier](crate::generic::frontier) of cells to visit, ordered by rank, and seeded with the start of the world.

Each step of exploration pops the next cell from the frontier and marks the cell as visited.
If the cell is a goal, exploration ends, and the actions of the path through each visited cell are returned.

Otherwise, each successor of the cell which is neither visited nor queued is classified:
- A query is made as to whether the successor is safe.
- If not, for each hazard a query is made as to whether the hazard is absent, and then whether the hazard is present.

A successor is queued only if safe.
Any other successor is kept, together with what is known of it, and is classified again whenever it is the successor of some later cell.
So, what is known of a cell may grow as more of the cells around it are visited.

```rust,ignore
frontier.push(start);
while let Some(current) = frontier.pop() {
    visit(current);
    if is_goal(current) {
        return reconstruct_path(visited);
    }
    for successor in successors(current).filter(unseen) {
        match classify(current, successor) {
            Safe => frontier.push(successor),
            _ => beliefs.insert(successor),
        }
    }
    if frontier.is_empty() && forced_risk && successors(current).len() > risk_threshold {
        frontier.push(least_hazardous_belief());
    }
}
return FrontierExhausted;
```

# Forced risks

If no safe cell remains to be visited the explorer may take a risk, and queue the lowest ranked cell which is not known to hold some hazard.
Risks are only taken from a cell with more successors than the [risk threshold](crate::config::Config::risk_threshold), and only if [forced risks](crate::config::Config::forced_risk) are permitted.
Each cell queued as a risk is noted in the [report](Exploration) of the exploration.
*/

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::{
    config::Config,
    generic::frontier::Frontier,
    misc::log::targets::{self},
    procedures::{
        encode::{encode, hazard_goal, safe_goal},
        resolution::Resolver,
    },
    reports::{Counters, Exploration},
    structures::{
        belief::{Belief, Classification, HazardBelief},
        cell::Cell,
        clause::Clause,
    },
    types::err::{self},
    world::{Percepts, World},
};

/// An agent exploring some world.
pub struct Explorer<'w, W: World> {
    world: &'w W,
    config: Config,
    resolver: Resolver,

    frontier: Frontier,

    /// Cells proven safe.
    safe: BTreeSet<Cell>,

    /// Cells not proven safe, with what is known of each.
    beliefs: BTreeMap<Cell, HazardBelief>,

    /// Cells visited, in order of visit.
    visited: Vec<Cell>,

    /// The cells of `visited`.
    seen: HashSet<Cell>,

    /// Cells queued as risks.
    forced: Vec<Cell>,

    counters: Counters,
}

impl<'w, W: World> Explorer<'w, W> {
    pub fn new(world: &'w W, config: Config) -> Self {
        let resolver = Resolver::new(&config);
        Explorer {
            world,
            config,
            resolver,

            frontier: Frontier::default(),
            safe: BTreeSet::default(),
            beliefs: BTreeMap::default(),
            visited: Vec::default(),
            seen: HashSet::default(),
            forced: Vec::default(),

            counters: Counters::default(),
        }
    }

    /// Explores the world from the start until some goal is reached.
    ///
    /// Anything known from a previous exploration is forgotten.
    pub fn explore(&mut self) -> Result<Exploration<W::Action>, err::ErrorKind> {
        self.reset();

        let start = self.world.start();
        check_bounds(start)?;
        self.safe.insert(start);
        self.frontier.push(start);

        while let Some(current) = self.frontier.pop() {
            self.counters.expansions += 1;
            self.visit(current);

            if self.world.is_goal(current) {
                log::info!(target: targets::EXPLORATION, "Goal {current} reached with {}", self.counters);
                return Ok(Exploration {
                    actions: self.world.reconstruct_path(&self.visited),
                    visited: self.visited.clone(),
                    forced: self.forced.clone(),
                    counters: self.counters,
                });
            }

            let neighbours = self
                .world
                .successors(current)
                .into_iter()
                .map(|successor| successor.cell)
                .collect::<Vec<_>>();

            for neighbour in &neighbours {
                check_bounds(*neighbour)?;
            }

            let percepts = self.world.percepts(current);
            match percepts.is_clear() {
                true => log::debug!(target: targets::EXPLORATION, "At {current}, sensing nothing"),
                false => log::debug!(target: targets::EXPLORATION, "At {current}, sensing {percepts}"),
            }

            for candidate in &neighbours {
                if self.seen.contains(candidate) || self.frontier.contains(candidate) {
                    continue;
                }

                match self.classify(current, *candidate, percepts, &neighbours)? {
                    Classification::Safe => {
                        self.frontier.push(*candidate);
                    }
                    _ => {}
                }
            }

            log::trace!(target: targets::FRONTIER, "{} cells queued after {current}", self.frontier.len());

            if self.frontier.is_empty()
                && self.config.forced_risk.value
                && neighbours.len() > self.config.risk_threshold.value
            {
                self.take_risk();
            }
        }

        log::info!(target: targets::EXPLORATION, "No cell remains after {} visits", self.visited.len());
        Err(err::ExplorationError::FrontierExhausted.into())
    }

    /// The classification of `cell`, given what is known.
    pub fn classification(&self, cell: Cell) -> Classification {
        self.knowledge(cell).classification()
    }

    /// Cells visited, in order of visit.
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Cells queued as risks.
    pub fn forced(&self) -> &[Cell] {
        &self.forced
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// What is known of `cell`.
    ///
    /// Visited cells, and cells proven safe, are known to be free of every hazard.
    pub fn knowledge(&self, cell: Cell) -> HazardBelief {
        if self.seen.contains(&cell) || self.safe.contains(&cell) {
            return HazardBelief::safe();
        }
        self.beliefs.get(&cell).copied().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.frontier = Frontier::default();
        self.safe.clear();
        self.beliefs.clear();
        self.visited.clear();
        self.seen.clear();
        self.forced.clear();
        self.counters = Counters::default();
    }

    fn visit(&mut self, cell: Cell) {
        log::info!(target: targets::EXPLORATION, "Visiting {cell}");
        self.visited.push(cell);
        self.seen.insert(cell);
        self.beliefs.remove(&cell);
    }

    /// Classifies `candidate` from `current`, and records what is known of `candidate`.
    fn classify(
        &mut self,
        current: Cell,
        candidate: Cell,
        percepts: Percepts,
        neighbours: &[Cell],
    ) -> Result<Classification, err::ErrorKind> {
        self.counters.classified += 1;

        let mut belief = self.knowledge(candidate);

        if !belief.is_safe() {
            let premises = encode(current, candidate, percepts, neighbours, |cell| {
                self.knowledge(cell)
            });

            if self.query(&premises, &safe_goal(candidate))? {
                belief = HazardBelief::safe();
            } else {
                let prior_belief = belief;
                for (hazard, prior) in prior_belief.iter() {
                    if prior.is_resolved() {
                        continue;
                    }

                    if self.query(&premises, &hazard_goal(hazard, candidate, false))? {
                        belief.set(hazard, Belief::Absent);
                    } else if self.query(&premises, &hazard_goal(hazard, candidate, true))? {
                        belief.set(hazard, Belief::Present);
                    }
                }
            }
        }

        let classification = belief.classification();
        log::debug!(target: targets::EXPLORATION, "{candidate} is {classification:?} ({belief})");

        match classification {
            Classification::Safe => {
                self.beliefs.remove(&candidate);
                self.safe.insert(candidate);
            }
            _ => {
                self.beliefs.insert(candidate, belief);
            }
        }

        Ok(classification)
    }

    fn query(&mut self, premises: &BTreeSet<Clause>, goal: &Clause) -> Result<bool, err::ErrorKind> {
        self.counters.queries += 1;
        Ok(self.resolver.resolve(premises, goal)?)
    }

    /// Queues the lowest ranked cell not known to hold some hazard, if any.
    fn take_risk(&mut self) {
        let risk = self
            .beliefs
            .iter()
            .find(|(cell, belief)| !belief.is_hazardous() && !self.seen.contains(cell))
            .map(|(cell, _)| *cell);

        match risk {
            Some(cell) => {
                log::warn!(target: targets::EXPLORATION, "Taking a risk on {cell} ({})", self.knowledge(cell));
                self.beliefs.remove(&cell);
                self.forced.push(cell);
                self.frontier.push(cell);
            }
            None => {
                log::debug!(target: targets::EXPLORATION, "No risk to take");
            }
        }
    }
}

fn check_bounds(cell: Cell) -> Result<(), err::ExplorationError> {
    match cell.within_bounds() {
        true => Ok(()),
        false => {
            log::error!(target: targets::EXPLORATION, "{cell} is beyond the grid limit");
            Err(err::ExplorationError::CellOutOfBounds(cell))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{cave::Cave, Direction};

    #[test]
    fn wumpus_located() {
        let cave: Cave = "
%%%%%
%W  %
%P%E%
%%%%%"
            .parse()
            .expect("parse failure");

        let mut explorer = Explorer::new(&cave, Config::default());
        let result = explorer.explore();

        // The only neighbour of the start is the source of the stench, and the start has too few successors to take a risk.
        assert_eq!(
            result.err(),
            Some(err::ErrorKind::Exploration(err::ExplorationError::FrontierExhausted))
        );
        assert_eq!(explorer.visited(), &[Cell::new(1, 1)]);
        assert!(explorer.forced().is_empty());

        let wumpus = Cell::new(1, 2);
        assert_eq!(explorer.classification(wumpus), Classification::Hazardous);

        let belief = explorer.knowledge(wumpus);
        assert_eq!(belief.wumpus, Belief::Present);
        assert_eq!(belief.teleporter, Belief::Absent);
        assert_eq!(belief.poison, Belief::Absent);
    }

    #[test]
    fn start_as_goal() {
        struct Point;

        impl World for Point {
            type Action = Direction;

            fn start(&self) -> Cell {
                Cell::new(0, 0)
            }

            fn is_goal(&self, _: Cell) -> bool {
                true
            }

            fn successors(&self, _: Cell) -> Vec<crate::world::Successor<Direction>> {
                Vec::default()
            }

            fn is_wumpus_close(&self, _: Cell) -> bool {
                false
            }

            fn is_teleporter_close(&self, _: Cell) -> bool {
                false
            }

            fn is_poison_close(&self, _: Cell) -> bool {
                false
            }

            fn reconstruct_path(&self, _: &[Cell]) -> Vec<Direction> {
                Vec::default()
            }
        }

        let exploration = Explorer::new(&Point, Config::default())
            .explore()
            .expect("exploration failure");

        assert_eq!(exploration.visited, vec![Cell::new(0, 0)]);
        assert!(exploration.actions.is_empty());
        assert_eq!(exploration.counters.queries, 0);
    }

    #[test]
    fn explore_twice() {
        let cave: Cave = "%%%%\n%PE%\n%%%%".parse().expect("parse failure");
        let mut explorer = Explorer::new(&cave, Config::default());

        let first = explorer.explore().expect("exploration failure");
        let second = explorer.explore().expect("exploration failure");

        assert_eq!(first.visited, second.visited);
        assert_eq!(first.counters, second.counters);
    }
}
