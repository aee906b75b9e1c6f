//! Literals are atoms paired with a polarity.
//!
//! Here, an atom is a [label](Label) at a [cell](Cell), and so a literal states that some predicate does (or does not) hold at some location.
//!
//! ```rust
//! # use pacard::structures::{cell::Cell, label::Label, literal::Literal};
//! let stench = Literal::new(Label::WumpusStench, Cell::new(2, 3), false);
//!
//! assert!(!stench.is_negated());
//! assert!(stench.negate().is_negated());
//! assert_eq!(stench.negate().negate(), stench);
//!
//! assert_eq!(format!("{stench}"), "s(2, 3)");
//! assert_eq!(format!("{}", stench.negate()), "~s(2, 3)");
//! ```
//!
//! Literals are ordered by the [rank](Cell::rank) of their cell.
//! Literals with the same cell are ordered by label and then polarity, so the ordering is total and agrees with equality.

use crate::structures::{cell::Cell, label::Label};

/// A label at a cell, possibly negated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    label: Label,
    cell: Cell,
    negated: bool,
}

impl Literal {
    pub fn new(label: Label, cell: Cell, negated: bool) -> Self {
        Literal {
            label,
            cell,
            negated,
        }
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            label: self.label,
            cell: self.cell,
            negated: !self.negated,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Whether the literal is the negation of `other`.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.label == other.label && self.cell == other.cell && self.negated != other.negated
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cell
            .cmp(&other.cell)
            .then(self.label.cmp(&other.label))
            .then(self.negated.cmp(&other.negated))
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.negated {
            true => write!(f, "~{}{}", self.label, self.cell),
            false => write!(f, "{}{}", self.label, self.cell),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_fresh() {
        let wumpus = Literal::new(Label::Wumpus, Cell::new(1, 1), false);
        let not_wumpus = wumpus.negate();

        assert!(!wumpus.is_negated());
        assert!(not_wumpus.is_negated());
        assert_eq!(wumpus.label(), not_wumpus.label());
        assert_eq!(wumpus.cell(), not_wumpus.cell());

        assert!(wumpus.is_complement_of(&not_wumpus));
        assert!(!wumpus.is_complement_of(&wumpus));
    }

    #[test]
    fn order_follows_rank() {
        let low = Literal::new(Label::WumpusStench, Cell::new(0, 5), true);
        let high = Literal::new(Label::Wumpus, Cell::new(1, 0), false);

        assert!(low < high);

        let same_cell = Literal::new(Label::Poison, Cell::new(0, 5), false);
        assert_ne!(low.cmp(&same_cell), std::cmp::Ordering::Equal);
        assert_eq!(low.cmp(&same_cell), same_cell.cmp(&low).reverse());
    }

    #[test]
    fn hash_agrees_with_equality() {
        let mut set = std::collections::HashSet::new();
        let glow = Literal::new(Label::TeleporterGlow, Cell::new(4, 2), false);

        assert!(set.insert(glow));
        assert!(!set.insert(Literal::new(Label::TeleporterGlow, Cell::new(4, 2), false)));
        assert!(set.insert(glow.negate()));
    }
}
