//! Determines whether a set of clauses entails a goal, by refutation resolution.
//!
//! # Overview
//!
//! To prove a goal *g* from premises *C* it is enough to show *C* ∧ ¬*g* is unsatisfiable, and this is done by deriving the empty clause through repeated application of the resolution rule:
//!
//! ```none
//!   l ∨ A    ¬l ∨ B
//!   ---------------
//!        A ∨ B
//! ```
//!
//! Resolution is restricted by the *set of support* strategy.
//! The set of support is seeded with the negation of the goal, and every resolution takes one clause from the set of support and every resolvent is added to the set of support.
//! So, no effort is spent on resolving premises with premises.
//!
//! In addition, at the start of each iteration any premise subsumed by some other clause is removed, as any use of the subsumed clause could be replaced by a use of the subsuming clause.
//!
//! Roughly, the loop is:
//!
//! ```rust,ignore
//! let mut support = goal.negate_all();
//! loop {
//!     clauses.remove_redundant(&support);
//!
//!     let pairs = select_pairs(&clauses, &support, &resolved);
//!     if pairs.is_empty() {
//!         return false;
//!     }
//!
//!     for (s, c) in pairs {
//!         resolved.insert((s, c));
//!         match resolve_pair(s, c) {
//!             NIL => return true,
//!             resolvent => support.insert(resolvent),
//!         }
//!     }
//!     clauses.extend(&support);
//! }
//! ```
//!
//! The loop terminates as the literals of a query are finite, and so there are finitely many clauses and finitely many pairs of clauses, and no pair is resolved twice.
//!
//! # Completeness
//!
//! The set of support strategy is complete whenever the premises are satisfiable.
//! If the premises are themselves unsatisfiable a contradiction may not involve the negated goal, and may go unnoticed.
//!
//! # Goals
//!
//! The negation of a disjunction is a conjunction, so negating a goal of several literals literal-by-literal and adding each negation as a separate unit clause is sound.
//! However, [negate_all](Clause::negate_all) is also used to read a goal as the conjunction of its literals, and so the resolver only accepts unit goals to avoid any ambiguity.

use std::collections::{BTreeSet, HashSet};

use crate::{
    config::Config,
    db::{clause::ClauseDB, ClauseKey},
    misc::log::targets::{self},
    structures::clause::Clause,
    types::err::{self},
};

/// Resolves a pair of clauses.
///
/// The first literal of `first` whose negation is in `second` is removed from `first`, its negation is removed from `second`, and the resolvent is the union of the remaining literals.
/// Only one complementary pair is removed, as removing several at once is not sound.
///
/// Returns None if there is no complementary pair, and the empty clause if both clauses are exhausted by the complementary pair.
///
/// ```rust
/// # use pacard::procedures::resolution::resolve_pair;
/// # use pacard::structures::{cell::Cell, clause::Clause, label::Label, literal::Literal};
/// let here = Cell::new(0, 0);
/// let a = Literal::new(Label::Wumpus, here, false);
/// let b = Literal::new(Label::Poison, here, false);
///
/// let resolvent = resolve_pair(&Clause::from(vec![a, b]), &Clause::from(a.negate()));
/// assert_eq!(resolvent, Some(Clause::from(b)));
///
/// let nil = resolve_pair(&Clause::from(b), &Clause::from(b.negate()));
/// assert!(nil.is_some_and(|clause| clause.is_empty()));
/// ```
pub fn resolve_pair(first: &Clause, second: &Clause) -> Option<Clause> {
    for literal in first.literals() {
        if let Some(complement) = second.literals().find(|other| literal.is_complement_of(other)) {
            let resolvent = first
                .clone()
                .without(literal)
                .union(second.clone().without(complement));
            return Some(resolvent);
        }
    }
    None
}

/// Counts for a single resolution.
#[derive(Debug, Default)]
struct Counters {
    iterations: usize,
    pairs: usize,
    resolvents: usize,
    subsumed: usize,
    tautologies: usize,
}

/// A resolver, configured to decide entailment queries.
///
/// A resolver holds no information between queries, and so a resolver may be used for any number of queries.
#[derive(Clone, Debug)]
pub struct Resolver {
    subsumption: bool,
    tautology_deletion: bool,
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new(&Config::default())
    }
}

impl Resolver {
    pub fn new(config: &Config) -> Self {
        Resolver {
            subsumption: config.subsumption.value,
            tautology_deletion: config.tautology_deletion.value,
        }
    }

    /// Whether `clauses` entail `goal`.
    ///
    /// `goal` must be a unit clause, otherwise an error is returned.
    /// `clauses` are not modified.
    pub fn resolve(
        &self,
        clauses: &BTreeSet<Clause>,
        goal: &Clause,
    ) -> Result<bool, err::ResolutionError> {
        match goal.size() {
            0 => return Err(err::ResolutionError::EmptyGoal),
            1 => {}
            _ => {
                log::error!(target: targets::RESOLUTION, "Goal {goal} is not a unit clause");
                return Err(err::ResolutionError::NonUnitGoal);
            }
        }

        let mut the_resolution = Resolution::new(clauses, goal.negate_all());
        let entailed = the_resolution.refute(self);

        log::debug!(target: targets::RESOLUTION, "{goal}: {entailed} after {:?} with {} clauses stored", the_resolution.counters, the_resolution.clause_db.clause_count());
        Ok(entailed)
    }
}

/// The state of a single resolution.
struct Resolution {
    clause_db: ClauseDB,

    /// The clauses available for resolution with the set of support.
    clauses: BTreeSet<ClauseKey>,

    /// The set of support.
    support: BTreeSet<ClauseKey>,

    /// Pairs of clauses which have been resolved, with the lesser key first.
    resolved: HashSet<(ClauseKey, ClauseKey)>,

    counters: Counters,
}

impl Resolution {
    fn new(premises: &BTreeSet<Clause>, support: BTreeSet<Clause>) -> Self {
        let mut clause_db = ClauseDB::default();

        let clauses = premises
            .iter()
            .map(|clause| clause_db.store(clause.clone()).0)
            .collect();

        let support = support
            .into_iter()
            .map(|clause| clause_db.store(clause).0)
            .collect();

        Resolution {
            clause_db,
            clauses,
            support,
            resolved: HashSet::default(),
            counters: Counters::default(),
        }
    }

    /// Applies resolution until either the empty clause is derived, or no pair remains to be resolved.
    /// Returns true in the first case, and false in the second.
    fn refute(&mut self, resolver: &Resolver) -> bool {
        loop {
            self.counters.iterations += 1;

            if resolver.subsumption {
                self.remove_redundant();
            }

            let pairs = self.select_pairs();
            if pairs.is_empty() {
                return false;
            }

            for (support_key, clause_key) in pairs {
                self.counters.pairs += 1;
                self.resolved.insert(ordered_pair(support_key, clause_key));

                let support_clause = self.clause_db.get(support_key);
                let clause = self.clause_db.get(clause_key);

                let Some(resolvent) = resolve_pair(support_clause, clause) else {
                    log::error!(target: targets::RESOLUTION, "Selected pair {support_clause}, {clause} has no resolvent");
                    continue;
                };

                log::trace!(target: targets::RESOLUTION, "Resolving {support_clause}, {clause} ⟹ {resolvent}");

                if resolvent.is_empty() {
                    return true;
                }

                if resolver.tautology_deletion && resolvent.is_tautology() {
                    self.counters.tautologies += 1;
                    continue;
                }

                let (key, fresh) = self.clause_db.store(resolvent);
                if fresh {
                    self.counters.resolvents += 1;
                }
                self.support.insert(key);
            }

            self.clauses.extend(self.support.iter().copied());
        }
    }

    /// Removes from the clauses any clause subsumed by some other clause of either the clauses or the set of support.
    fn remove_redundant(&mut self) {
        let redundant = {
            let others = self
                .clauses
                .union(&self.support)
                .map(|key| self.clause_db.get(*key))
                .collect::<Vec<_>>();

            self.clauses
                .iter()
                .filter(|key| {
                    self.clause_db
                        .get(**key)
                        .is_redundant(others.iter().copied())
                })
                .copied()
                .collect::<Vec<_>>()
        };

        for key in redundant {
            log::trace!(target: targets::SUBSUMPTION, "Removed {}", self.clause_db.get(key));
            self.clauses.remove(&key);
            self.counters.subsumed += 1;
        }
    }

    /// Pairs of a clause from the set of support and a clause from the clauses which may be resolved, and have not been resolved.
    fn select_pairs(&self) -> Vec<(ClauseKey, ClauseKey)> {
        let mut pairs = Vec::new();

        for support_key in &self.support {
            let support_clause = self.clause_db.get(*support_key);

            for clause_key in &self.clauses {
                if self
                    .resolved
                    .contains(&ordered_pair(*support_key, *clause_key))
                {
                    continue;
                }

                if support_clause.is_resolvable_with(self.clause_db.get(*clause_key)) {
                    pairs.push((*support_key, *clause_key));
                }
            }
        }

        pairs
    }
}

/// A pair of keys, with the lesser key first.
fn ordered_pair(a: ClauseKey, b: ClauseKey) -> (ClauseKey, ClauseKey) {
    match a <= b {
        true => (a, b),
        false => (b, a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{cell::Cell, label::Label, literal::Literal};

    fn atom(label: Label) -> Literal {
        Literal::new(label, Cell::new(0, 0), false)
    }

    #[test]
    fn resolve_pair_removes_one_complement() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);
        let c = atom(Label::Safe);

        // Two complementary pairs, only the first (in literal order) is removed.
        let first = Clause::from(vec![a, b]);
        let second = Clause::from(vec![a.negate(), b.negate(), c]);

        let resolvent = resolve_pair(&first, &second).expect("no resolvent");
        assert_eq!(resolvent, Clause::from(vec![b, b.negate(), c]));
        assert!(resolvent.is_tautology());
    }

    #[test]
    fn resolve_pair_without_complement() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);

        assert!(resolve_pair(&Clause::from(a), &Clause::from(b)).is_none());
        assert!(resolve_pair(&Clause::from(a), &Clause::from(a)).is_none());
    }

    #[test]
    fn resolve_pair_leaves_inputs() {
        let a = atom(Label::Teleporter);
        let b = atom(Label::TeleporterGlow);

        let first = Clause::from(vec![a.negate(), b]);
        let second = Clause::from(a);
        let _ = resolve_pair(&first, &second);

        assert_eq!(first, Clause::from(vec![a.negate(), b]));
        assert_eq!(second, Clause::from(a));
    }

    #[test]
    fn goals_must_be_unit() {
        let resolver = Resolver::default();
        let premises = BTreeSet::from([Clause::from(atom(Label::Safe))]);

        let disjunction = Clause::from(vec![atom(Label::Safe), atom(Label::Wumpus)]);
        assert_eq!(
            resolver.resolve(&premises, &disjunction),
            Err(err::ResolutionError::NonUnitGoal)
        );

        assert_eq!(
            resolver.resolve(&premises, &Clause::empty()),
            Err(err::ResolutionError::EmptyGoal)
        );
    }

    #[test]
    fn redundant_premises_are_removed() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);

        let premises = BTreeSet::from([Clause::from(a), Clause::from(vec![a, b])]);
        let mut the_resolution = Resolution::new(&premises, BTreeSet::new());
        the_resolution.remove_redundant();

        assert_eq!(the_resolution.clauses.len(), 1);
        let remaining = the_resolution.clauses.iter().next().expect("no clause");
        assert_eq!(the_resolution.clause_db.get(*remaining), &Clause::from(a));
    }

    #[test]
    fn pairs_are_not_reselected() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);

        let premises = BTreeSet::from([Clause::from(vec![a, b])]);
        let support = BTreeSet::from([Clause::from(a.negate())]);
        let mut the_resolution = Resolution::new(&premises, support);

        let pairs = the_resolution.select_pairs();
        assert_eq!(pairs.len(), 1);

        the_resolution
            .resolved
            .insert(ordered_pair(pairs[0].0, pairs[0].1));
        assert!(the_resolution.select_pairs().is_empty());
    }
}
