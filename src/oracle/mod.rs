/*!
Satisfiability oracles.

An [Oracle] answers whether a collection of clauses has a satisfying valuation, and nothing more.
How this is done is a matter for the oracle.
The [Otter] oracle hands the clauses to a fresh [otter_sat](https://docs.rs/otter_sat) context, though an external process would do as well.

Oracles are required to be:
- Deterministic, for a fixed collection of clauses.
- Free of side effects on the clauses given, which are only borrowed.

Failure to determine satisfiability (e.g. from running out of time) is returned as an [OracleError](crate::types::err::OracleError), and is never to be read as either answer.

# Example

```rust
# use clue_sat::oracle::{Oracle, Otter};
# use clue_sat::structures::literal::{CLiteral, Literal};
let p = CLiteral::new(1, true);
let q = CLiteral::new(2, true);

let formula = vec![vec![p, q], vec![-p], vec![-q, p]];
assert_eq!(Otter::default().is_satisfiable(&formula), Ok(false));

let formula = vec![vec![p, q], vec![-p]];
assert_eq!(Otter::default().is_satisfiable(&formula), Ok(true));
```
*/

mod otter;
pub use otter::Otter;

use crate::{structures::clause::CClause, types::err::{self}};

/// Something which determines the satisfiability of a collection of clauses.
pub trait Oracle {
    /// Whether the conjunction of the given clauses is satisfiable.
    fn is_satisfiable<'c, I>(&self, clauses: I) -> Result<bool, err::OracleError>
    where
        I: IntoIterator<Item = &'c CClause>;
}
