//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use clue_sat::structures::literal::{CLiteral, Literal};
//! # use clue_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true), CLiteral::new(41, false), CLiteral::new(3, false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "23 -41 -3");
//! assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![23, 41, 3]);
//!
//! let mut some_valuation = vec![Some(false); 42];
//! assert_eq!(clause.value_on(&some_valuation), Some(true));
//!
//! some_valuation[41] = Some(true);
//! some_valuation[3] = Some(true);
//! assert_eq!(clause.value_on(&some_valuation), Some(false));
//!
//! some_valuation[23] = None;
//! assert_eq!(clause.value_on(&some_valuation), None);
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The canonical representation of a clause.
pub type CClause = Vec<CLiteral>;

/// The clause trait.
pub trait Clause {
    /// A string of the literals in the clause, in integer form and separated by a space.
    fn as_string(&self) -> String;

    /// An iterator over all literals in the clause, in the order given.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The value of the clause on a (partial) valuation, indexed by atom.
    ///
    /// - Some(true), if some literal is true on the valuation.
    /// - Some(false), if every literal is false on the valuation.
    /// - None, otherwise.
    fn value_on(&self, valuation: &[Option<bool>]) -> Option<bool> {
        let mut undetermined = false;
        for literal in self.literals() {
            match valuation.get(literal.atom() as usize).copied().flatten() {
                Some(value) if value == literal.polarity() => return Some(true),
                Some(_) => {}
                None => undetermined = true,
            }
        }
        match undetermined {
            true => None,
            false => Some(false),
        }
    }
}

impl Clause for [CLiteral] {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.as_slice().as_string()
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}
