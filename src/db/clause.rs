/*!
A database of clauses.

The database is append only, and a clause is stored at most once.
Storing a clause which is already present returns the key of the stored copy.

```rust
# use pacard::db::clause::ClauseDB;
# use pacard::structures::{cell::Cell, clause::Clause, label::Label, literal::Literal};
let mut clause_db = ClauseDB::default();
let unit = Clause::from(Literal::new(Label::Safe, Cell::new(0, 0), false));

let (key, fresh) = clause_db.store(unit.clone());
assert!(fresh);
assert_eq!(clause_db.store(unit.clone()), (key, false));
assert_eq!(clause_db.get(key), &unit);
```
*/

use std::collections::HashMap;

use crate::{db::keys::ClauseKey, misc::log::targets, structures::clause::Clause};

/// A database of clauses.
#[derive(Default)]
pub struct ClauseDB {
    /// Each stored clause, indexed by the index of its key.
    clauses: Vec<Clause>,

    /// A map from each stored clause to its key.
    keys: HashMap<Clause, ClauseKey>,
}

impl ClauseDB {
    /// Stores a clause, returning the key to the clause together with whether the clause was fresh to the database.
    pub fn store(&mut self, clause: Clause) -> (ClauseKey, bool) {
        if let Some(key) = self.keys.get(&clause) {
            return (*key, false);
        }

        let key = ClauseKey(self.clauses.len());
        log::trace!(target: targets::CLAUSE_DB, "Stored {clause} at {key}");

        self.keys.insert(clause.clone(), key);
        self.clauses.push(clause);
        (key, true)
    }

    /// The clause stored at `key`.
    ///
    /// Keys are only issued by the database and the database never removes a clause, so any key issued by the database is valid.
    pub fn get(&self, key: ClauseKey) -> &Clause {
        &self.clauses[key.0]
    }

    /// A count of stored clauses.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }
}
