/// The index to a clause in a clause database.
pub type ClauseIndex = usize;

/// A key to access a clause stored in the clause database.
///
/// Keys are handed out in the order clauses are stored, and so the order of keys is the order in which clauses were first seen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClauseKey(pub(super) ClauseIndex);

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
