//! Encodes what is sensed and known around a cell as a set of clauses.
//!
//! A query asks about a *candidate* cell, adjacent to the *current* cell of the agent.
//! The premises of the query are instances of the following axioms, where *s*, *g*, and *c* are the stench, glow, and chemical indicators sensed at the current cell, *w*, *t*, and *p* are the wumpus, teleporter, and poison hazards, and *o* is safety:
//!
//! | Axiom | Clauses |
//! |-------|---------|
//! | Percepts | `s` or `~s`, `g` or `~g`, `c` or `~c`, as sensed |
//! | An indicator is sensed iff some neighbour holds the hazard | `~s ∨ w(n₁) ∨ … ∨ w(nₖ)`, and `~w(n) ∨ s` for each neighbour *n* (and likewise for *g*/*t*, *c*/*p*) |
//! | No indicator means the candidate is safe | `s ∨ g ∨ c ∨ o(cand)` |
//! | Safety is the absence of every hazard | `~o ∨ ~w`, `~o ∨ ~t`, `~o ∨ ~p`, `w ∨ t ∨ p ∨ o` at the candidate |
//! | At most one hazard occupies the candidate | `~w ∨ ~t`, `~w ∨ ~p`, `~t ∨ ~p` at the candidate |
//! | Prior beliefs | A unit clause for each resolved belief about the candidate and the other neighbours |
//!
//! Prior beliefs make each query cumulative with what was derived by earlier queries.
//! For example, if a stench is sensed and every other neighbour is known to be free of the wumpus, the wumpus is at the candidate.

use std::collections::BTreeSet;

use crate::{
    misc::log::targets::{self},
    structures::{
        belief::HazardBelief,
        cell::Cell,
        clause::Clause,
        label::Label,
        literal::Literal,
    },
    world::Percepts,
};

/// The premises of a query about `candidate` from `current`.
///
/// `neighbours` are the cells adjacent to `current`, and `candidate` is treated as a neighbour whether or not it is listed.
/// `knowledge` returns what is known about a cell, and is consulted for each neighbour.
pub fn encode(
    current: Cell,
    candidate: Cell,
    percepts: Percepts,
    neighbours: &[Cell],
    knowledge: impl Fn(Cell) -> HazardBelief,
) -> BTreeSet<Clause> {
    let mut neighbours = neighbours.to_vec();
    if !neighbours.contains(&candidate) {
        neighbours.push(candidate);
    }

    let mut premises = BTreeSet::new();

    for indicator in Label::INDICATORS {
        let sensed = percepts.senses(indicator);
        premises.insert(Clause::from(Literal::new(indicator, current, !sensed)));

        let Some(hazard) = indicator.hazard() else {
            continue;
        };

        let some_neighbour = std::iter::once(Literal::new(indicator, current, true))
            .chain(
                neighbours
                    .iter()
                    .map(|neighbour| Literal::new(hazard, *neighbour, false)),
            )
            .collect::<Clause>();
        premises.insert(some_neighbour);

        for neighbour in &neighbours {
            premises.insert(Clause::from(vec![
                Literal::new(hazard, *neighbour, true),
                Literal::new(indicator, current, false),
            ]));
        }
    }

    let safe = Literal::new(Label::Safe, candidate, false);

    premises.insert(
        Label::INDICATORS
            .iter()
            .map(|indicator| Literal::new(*indicator, current, false))
            .chain(std::iter::once(safe))
            .collect(),
    );

    premises.insert(
        Label::HAZARDS
            .iter()
            .map(|hazard| Literal::new(*hazard, candidate, false))
            .chain(std::iter::once(safe))
            .collect(),
    );

    for (index, hazard) in Label::HAZARDS.iter().enumerate() {
        let not_hazard = Literal::new(*hazard, candidate, true);
        premises.insert(Clause::from(vec![safe.negate(), not_hazard]));

        for other in &Label::HAZARDS[index + 1..] {
            premises.insert(Clause::from(vec![
                not_hazard,
                Literal::new(*other, candidate, true),
            ]));
        }
    }

    for neighbour in &neighbours {
        for (hazard, belief) in knowledge(*neighbour).iter() {
            if let Some(present) = belief.as_bool() {
                premises.insert(Clause::from(Literal::new(hazard, *neighbour, !present)));
            }
        }
    }

    log::debug!(target: targets::ENCODING, "{} premises for {candidate} from {current}", premises.len());
    for premise in &premises {
        log::trace!(target: targets::ENCODING, "Premise: {premise}");
    }

    premises
}

/// The unit goal that `hazard` is absent (if `present` is false) or present (otherwise) at `cell`.
pub fn hazard_goal(hazard: Label, cell: Cell, present: bool) -> Clause {
    Clause::from(Literal::new(hazard, cell, !present))
}

/// The unit goal that `cell` is safe.
pub fn safe_goal(cell: Cell) -> Clause {
    Clause::from(Literal::new(Label::Safe, cell, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::belief::Belief;

    /// Whether `belief` about `hazard` at `cell` is recorded as a premise in `premises`.
    fn records(premises: &BTreeSet<Clause>, hazard: Label, cell: Cell, belief: Belief) -> bool {
        match belief.as_bool() {
            Some(present) => premises.contains(&hazard_goal(hazard, cell, present)),
            None => false,
        }
    }

    fn corridor() -> (Cell, Cell, Vec<Cell>) {
        let current = Cell::new(1, 0);
        let candidate = Cell::new(2, 0);
        (current, candidate, vec![Cell::new(0, 0), candidate])
    }

    #[test]
    fn percepts_are_pinned() {
        let (current, candidate, neighbours) = corridor();
        let percepts = Percepts {
            stench: true,
            glow: false,
            chemicals: false,
        };

        let premises = encode(current, candidate, percepts, &neighbours, |_| {
            HazardBelief::default()
        });

        assert!(premises.contains(&Clause::from(Literal::new(Label::WumpusStench, current, false))));
        assert!(premises.contains(&Clause::from(Literal::new(Label::TeleporterGlow, current, true))));
        assert!(premises.contains(&Clause::from(Literal::new(Label::PoisonChemicals, current, true))));
    }

    #[test]
    fn indicator_disjunction_covers_neighbours() {
        let (current, candidate, neighbours) = corridor();

        let premises = encode(current, candidate, Percepts::default(), &neighbours, |_| {
            HazardBelief::default()
        });

        let stench_clause = Clause::from(vec![
            Literal::new(Label::WumpusStench, current, true),
            Literal::new(Label::Wumpus, Cell::new(0, 0), false),
            Literal::new(Label::Wumpus, candidate, false),
        ]);
        assert!(premises.contains(&stench_clause));

        for neighbour in &neighbours {
            assert!(premises.contains(&Clause::from(vec![
                Literal::new(Label::Poison, *neighbour, true),
                Literal::new(Label::PoisonChemicals, current, false),
            ])));
        }
    }

    #[test]
    fn candidate_is_a_neighbour() {
        let current = Cell::new(1, 1);
        let candidate = Cell::new(1, 2);

        let premises = encode(current, candidate, Percepts::default(), &[], |_| {
            HazardBelief::default()
        });

        assert!(premises.contains(&Clause::from(vec![
            Literal::new(Label::Teleporter, candidate, true),
            Literal::new(Label::TeleporterGlow, current, false),
        ])));
    }

    #[test]
    fn beliefs_become_units() {
        let (current, candidate, neighbours) = corridor();
        let visited = Cell::new(0, 0);

        let premises = encode(current, candidate, Percepts::default(), &neighbours, |cell| {
            if cell == visited {
                HazardBelief::safe()
            } else {
                let mut belief = HazardBelief::default();
                belief.set(Label::Wumpus, Belief::Present);
                belief
            }
        });

        for hazard in Label::HAZARDS {
            assert!(records(&premises, hazard, visited, Belief::Absent));
        }
        assert!(records(&premises, Label::Wumpus, candidate, Belief::Present));
        assert!(!records(&premises, Label::Poison, candidate, Belief::Absent));
        assert!(!records(&premises, Label::Poison, candidate, Belief::Unknown));
    }
}
