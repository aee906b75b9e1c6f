/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for following a derivation or the choices made by the agent.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the removal of redundant clauses
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [encoding](crate::procedures::encode) percepts as clauses
    pub const ENCODING: &str = "encoding";

    /// Logs related to [exploration](crate::procedures::explore)
    pub const EXPLORATION: &str = "exploration";

    /// Logs related to the [frontier](crate::generic::frontier)
    pub const FRONTIER: &str = "frontier";

    /// Logs related to a [world](crate::world)
    pub const WORLD: &str = "world";
}
