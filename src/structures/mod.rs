//! Key structures, such as literals and clauses.
//!
//! # Formulas
//!
//! A formula is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! Formulas do not have a structure of their own, and are represented by a [BTreeSet](std::collections::BTreeSet) of clauses.
//! An ordered set is used so iteration over a formula, and so the order of any derivation, is deterministic.
//!
//! # Atoms
//!
//! Each atom pairs a [label] with a [cell], and so each atom states some fact about a specific location in a world.
//! For example, 'the wumpus is at (3, 2)' or 'a stench is sensed at (0, 1)'.
//! A [literal] is an atom together with a flag for whether the atom is negated.

pub mod belief;
pub mod cell;
pub mod clause;
pub mod label;
pub mod literal;
