//! Procedures of the prover and the agent.
//!
//! - [resolution] decides entailment between a set of clauses and a unit goal.
//! - [encode] turns what is sensed and known around a cell into clauses.
//! - [explore] walks a world, using the two above to decide where it is safe to step.

pub mod encode;
pub mod explore;
pub mod resolution;
