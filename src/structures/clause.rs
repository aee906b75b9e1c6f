//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The representation of a clause is an ordered set of literals, and so:
//! - Duplicate literals collapse.
//! - Equality, order, and hashing depend only on which literals are present, not on the order of insertion.
//!
//! ```rust
//! # use pacard::structures::{cell::Cell, clause::Clause, label::Label, literal::Literal};
//! let here = Cell::new(0, 0);
//! let not_b = Literal::new(Label::WumpusStench, here, true);
//! let c = Literal::new(Label::Wumpus, here, false);
//!
//! let premise = Clause::from(vec![not_b, c, not_b]);
//! assert_eq!(premise.size(), 2);
//! assert_eq!(premise, Clause::from(vec![c, not_b]));
//!
//! assert!(premise.is_resolvable_with(&Clause::from(not_b.negate())));
//! assert!(!premise.is_resolvable_with(&Clause::from(c)));
//! ```
//!
//! - The empty clause (displayed as `NIL`) is always false, and derivation of the empty clause marks a contradiction.
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use std::collections::BTreeSet;

use crate::structures::literal::Literal;

/// A disjunction of unique literals.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    literals: BTreeSet<Literal>,
}

impl Clause {
    /// The empty clause.
    pub fn empty() -> Self {
        Clause::default()
    }

    /// An iterator over the literals of the clause, in order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// Whether the clause is the empty clause.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// Whether the clause contains some literal together with its negation.
    pub fn is_tautology(&self) -> bool {
        self.literals
            .iter()
            .any(|literal| self.literals.contains(&literal.negate()))
    }

    /// Whether the negation of some literal of the clause is a literal of `other`.
    ///
    /// For example, (~A) and (A v ~B) are resolvable.
    pub fn is_resolvable_with(&self, other: &Clause) -> bool {
        self.literals
            .iter()
            .any(|literal| other.literals.contains(&literal.negate()))
    }

    /// Whether every literal of the clause is a literal of `other`.
    pub fn subsumes(&self, other: &Clause) -> bool {
        self.literals.is_subset(&other.literals)
    }

    /// Whether some clause in `others`, distinct from the clause, subsumes the clause.
    pub fn is_redundant<'c>(&self, others: impl IntoIterator<Item = &'c Clause>) -> bool {
        others
            .into_iter()
            .any(|other| other != self && other.subsumes(self))
    }

    /// The unit clauses of the negation of each literal of the clause.
    ///
    /// Used to seed the set of support from a goal.
    /// Note, the negation of a clause is the *conjunction* of these units only when the clause is read as a disjunction, and so the result is only the negation of a goal when the goal is a unit clause.
    pub fn negate_all(&self) -> BTreeSet<Clause> {
        self.literals
            .iter()
            .map(|literal| Clause::from(literal.negate()))
            .collect()
    }

    /// The clause with the given literal removed, consuming the clause.
    pub(crate) fn without(mut self, literal: &Literal) -> Self {
        self.literals.remove(literal);
        self
    }

    /// Adds every literal of `other` to the clause, consuming the clause.
    pub(crate) fn union(mut self, other: Clause) -> Self {
        self.literals.extend(other.literals);
        self
    }
}

impl From<Literal> for Clause {
    fn from(literal: Literal) -> Self {
        Clause {
            literals: BTreeSet::from([literal]),
        }
    }
}

impl From<Vec<Literal>> for Clause {
    fn from(literals: Vec<Literal>) -> Self {
        literals.into_iter().collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause {
            literals: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "NIL");
        }

        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " ∨ {literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{cell::Cell, label::Label};

    fn atom(label: Label) -> Literal {
        Literal::new(label, Cell::new(0, 0), false)
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);
        let c = atom(Label::Safe).negate();

        let one = Clause::from(vec![a, b, c]);
        let other = Clause::from(vec![c, a, b, b]);
        assert_eq!(one, other);

        let mut set = std::collections::HashSet::new();
        set.insert(one);
        assert!(set.contains(&other));
    }

    #[test]
    fn empty_is_distinct() {
        let empty = Clause::empty();
        assert!(empty.is_empty());
        assert_ne!(empty, Clause::from(atom(Label::Safe)));
        assert_eq!(format!("{empty}"), "NIL");
    }

    #[test]
    fn redundancy() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison);

        let unit = Clause::from(a);
        let binary = Clause::from(vec![a, b]);
        let others = vec![unit.clone(), binary.clone()];

        assert!(binary.is_redundant(&others));
        // A clause does not make itself redundant.
        assert!(!unit.is_redundant(&others));
        assert!(!binary.is_redundant(&[binary.clone()]));
    }

    #[test]
    fn negate_all_gives_units() {
        let a = atom(Label::Wumpus);
        let b = atom(Label::Poison).negate();

        let negations = Clause::from(vec![a, b]).negate_all();
        assert_eq!(negations.len(), 2);
        assert!(negations.contains(&Clause::from(a.negate())));
        assert!(negations.contains(&Clause::from(b.negate())));
        assert!(negations.iter().all(|clause| clause.is_unit()));
    }

    #[test]
    fn tautology() {
        let a = atom(Label::Teleporter);
        let b = atom(Label::WumpusStench);

        assert!(Clause::from(vec![a, a.negate(), b]).is_tautology());
        assert!(!Clause::from(vec![a, b.negate()]).is_tautology());
    }
}
