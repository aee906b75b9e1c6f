//! Error types used in the library.
//!
//! - Failure to prove a goal is not an error, and is instead reported by [resolve](crate::procedures::resolution::Resolver::resolve) returning `Ok(false)`.
//! - Errors during resolution are limited to goals which cannot be negated as a set of unit clauses.
//! - Errors during exploration note the agent has run out of cells to visit, or that a world has offered a cell the agent cannot rank.
//! - Errors during parsing note some issue with the layout of a [cave](crate::world::cave).
//!
//! Names of the error enums overlap with the parts of the library they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::cell::Cell;

/// A wrapper around each kind of error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Resolution(ResolutionError),
    Exploration(ExplorationError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolution(e) => write!(f, "Resolution error: {e:?}"),
            Self::Exploration(e) => write!(f, "Exploration error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
        }
    }
}

/// Errors when setting up a resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The goal has more than one literal.
    ///
    /// Negating a disjunction of literals gives a conjunction of literals, and seeding the set of support with each negated literal as a unit clause would instead test each disjunct separately.
    NonUnitGoal,

    /// The goal is the empty clause.
    EmptyGoal,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

/// Noted errors during exploration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExplorationError {
    /// No cell remains to be visited, and no goal has been reached.
    FrontierExhausted,

    /// A cell outside of the grid limit, whose rank may not be unique.
    CellOutOfBounds(Cell),
}

impl From<ExplorationError> for ErrorKind {
    fn from(e: ExplorationError) -> Self {
        ErrorKind::Exploration(e)
    }
}

/// Errors when parsing the layout of a cave.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The layout has no rows.
    Empty,

    /// The layout is wider or taller than the grid limit.
    TooLarge,

    /// An unrecognised character, with the (zero-indexed) line and column of the character.
    UnknownTile(char, usize, usize),

    /// No start was found.
    MissingStart,

    /// More than one start was found, with the line of the second start.
    DuplicateStart(usize),

    /// No exit was found.
    MissingExit,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
