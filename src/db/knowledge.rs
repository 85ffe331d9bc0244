/*!
The knowledge base, an append-only sequence of clauses.

Clauses are stored in the order they are added and are never removed or revised, matching the irreversible nature of information revealed during a game.
Duplicate clauses are tolerated.

Clauses relevant only to a single query are not stored.
Instead, a query is made over an [overlay](KnowledgeBase::with_assumption), chaining the stored clauses with the query clause without mutating the knowledge base.

```rust
# use clue_sat::db::knowledge::KnowledgeBase;
# use clue_sat::structures::literal::{CLiteral, Literal};
let mut knowledge = KnowledgeBase::default();
knowledge.store(vec![CLiteral::new(1, true), CLiteral::new(2, true)]);

let assumption = vec![CLiteral::new(1, false)];
assert_eq!(knowledge.with_assumption(&assumption).count(), 2);
assert_eq!(knowledge.clause_count(), 1);
```
*/

use crate::{
    misc::log::targets::{self},
    structures::clause::{CClause, Clause},
};

#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    clauses: Vec<CClause>,
}

impl KnowledgeBase {
    /// Appends a clause.
    ///
    /// The clause should be non-empty, as the empty clause is unsatisfiable.
    pub fn store(&mut self, clause: CClause) {
        debug_assert!(!clause.is_empty());
        log::trace!(target: targets::KNOWLEDGE, "Stored: {}", clause.as_string());
        self.clauses.push(clause);
    }

    /// The stored clauses, in the order stored.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The stored clauses followed by the given clause, without storing the given clause.
    pub fn with_assumption<'a>(
        &'a self,
        assumption: &'a CClause,
    ) -> impl Iterator<Item = &'a CClause> + Clone {
        self.clauses.iter().chain(std::iter::once(assumption))
    }
}
