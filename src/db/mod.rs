/*!
Databases for holding information relevant to a resolution.

Every clause seen during a resolution, whether a premise, a clause of the set of support, or a resolvent, is stored once in a [clause database](clause::ClauseDB).
Elsewhere, clauses are referred to by [keys](ClauseKey), so sets of clauses and pairs of resolved clauses are cheap to copy and compare.
*/

pub mod clause;
mod keys;
pub use keys::ClauseKey;
