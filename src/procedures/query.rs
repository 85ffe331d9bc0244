/*!
Queries, on whether some entity holds some card.

# Overview

Let *L* be the literal asserting the entity holds the card.
Two calls are made to the oracle:

- A: whether the knowledge base together with the unit clause *L* is satisfiable.
- B: whether the knowledge base together with the unit clause ¬*L* is satisfiable.

And:

| A     | B     | Answer                                   |
|-------|-------|------------------------------------------|
| sat   | sat   | [Unknown](Answer::Unknown)               |
| sat   | unsat | [True](Answer::True)                     |
| unsat | sat   | [False](Answer::False)                   |
| unsat | unsat | [ContradictoryKnowledgeBase](err::QueryError::ContradictoryKnowledgeBase) |

A single call cannot distinguish a forced fact from a merely possible fact, and so both calls are always made.

Each call is made over an [overlay](crate::db::knowledge::KnowledgeBase::with_assumption) of the knowledge base, and the knowledge base is only borrowed.
So, nothing from one call is seen by the other, and a query has no effect on later queries.

Errors from the oracle are returned as they are, and never read as an answer.
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::GenericReasoner,
    reports::Answer,
    structures::{
        entity::CardIndex,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl<O: Oracle> GenericReasoner<O> {
    /// Whether the named entity holds the named card, given the knowledge base.
    pub fn query(&self, entity: &str, card: &str) -> Result<Answer, err::ErrorKind> {
        let entity_index = self.registry.entity_index(entity)?;
        let card_index = self.registry.card_index(card)?;
        self.query_indices(entity_index, card_index)
    }

    /// Whether the entity at the given index holds the card at the given index, given the knowledge base.
    ///
    /// Indices are assumed to be within the registry.
    pub(crate) fn query_indices(
        &self,
        entity_index: usize,
        card_index: CardIndex,
    ) -> Result<Answer, err::ErrorKind> {
        let literal = self.encoder.holds(entity_index, card_index);
        let answer = self.query_literal(literal)?;

        log::debug!(target: targets::QUERY, "{literal} ({entity_index}, {card_index}): {answer:?}");

        Ok(answer)
    }

    /// Whether the literal is forced, impossible, or unknown, given the knowledge base.
    ///
    /// Fails if the atom of the literal does not [encode](crate::db::encoder) some entity holding some card.
    pub fn query_literal(&self, literal: CLiteral) -> Result<Answer, err::ErrorKind> {
        self.ensure_initialized()?;

        if self.encoder.entity_and_card(literal.atom()).is_none() {
            return Err(err::RegistryError::UnknownAtom(literal.atom()).into());
        }

        let asserted = vec![literal];
        let with_literal = self
            .oracle
            .is_satisfiable(self.knowledge.with_assumption(&asserted))?;

        let denied = vec![literal.negate()];
        let with_negation = self
            .oracle
            .is_satisfiable(self.knowledge.with_assumption(&denied))?;

        match (with_literal, with_negation) {
            (true, true) => Ok(Answer::Unknown),
            (true, false) => Ok(Answer::True),
            (false, true) => Ok(Answer::False),
            (false, false) => {
                log::error!(target: targets::QUERY, "The knowledge base is unsatisfiable");
                Err(err::QueryError::ContradictoryKnowledgeBase.into())
            }
        }
    }

    /// Answers to every query, indexed first by card and then by entity.
    pub fn query_all(&self) -> Result<Vec<Vec<Answer>>, err::ErrorKind> {
        let mut grid = Vec::with_capacity(self.registry.card_count());
        for card in 0..self.registry.card_count() {
            let mut row = Vec::with_capacity(self.registry.entity_count());
            for entity in 0..self.registry.entity_count() {
                row.push(self.query_indices(entity, card)?);
            }
            grid.push(row);
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod query_tests {
    use std::cell::RefCell;

    use crate::{
        config::Config,
        oracle::{Oracle, Otter},
        reasoner::{GenericReasoner, Reasoner},
        structures::clause::CClause,
    };

    use super::*;

    /// An oracle which always fails.
    struct Unreachable;

    impl Oracle for Unreachable {
        fn is_satisfiable<'c, I>(&self, _clauses: I) -> Result<bool, err::OracleError>
        where
            I: IntoIterator<Item = &'c CClause>,
        {
            Err(err::OracleError::Failure("unreachable".to_string()))
        }
    }

    /// An oracle which notes the size of each formula it is given.
    struct Noting {
        inner: Otter,
        sizes: RefCell<Vec<usize>>,
    }

    impl Oracle for Noting {
        fn is_satisfiable<'c, I>(&self, clauses: I) -> Result<bool, err::OracleError>
        where
            I: IntoIterator<Item = &'c CClause>,
        {
            let clauses = clauses.into_iter().collect::<Vec<_>>();
            self.sizes.borrow_mut().push(clauses.len());
            self.inner.is_satisfiable(clauses)
        }
    }

    #[test]
    fn oracle_failure_is_returned() {
        let mut reasoner = GenericReasoner::with_oracle(Config::default(), Unreachable).unwrap();
        assert!(reasoner.initialize().is_ok());

        assert_eq!(
            reasoner.query("sc", "wh"),
            Err(err::ErrorKind::Oracle(err::OracleError::Failure(
                "unreachable".to_string()
            )))
        );
    }

    #[test]
    fn two_calls_over_the_same_knowledge() {
        let oracle = Noting {
            inner: Otter::default(),
            sizes: RefCell::default(),
        };
        let mut reasoner = GenericReasoner::with_oracle(Config::default(), oracle).unwrap();
        assert!(reasoner.initialize().is_ok());
        let count = reasoner.clause_count();

        assert_eq!(reasoner.query("sc", "wh"), Ok(Answer::Unknown));
        assert_eq!(reasoner.query("sc", "wh"), Ok(Answer::Unknown));

        assert_eq!(*reasoner.oracle.sizes.borrow(), vec![count + 1; 4]);
        assert_eq!(reasoner.clause_count(), count);
    }

    #[test]
    fn contradiction_is_reported() {
        let mut reasoner = Reasoner::from_config(Config::default()).unwrap();
        assert!(reasoner.initialize().is_ok());
        assert!(reasoner.record_hand("sc", &["kn"]).is_ok());
        assert!(reasoner.record_hand("mu", &["kn"]).is_ok());

        assert_eq!(
            reasoner.query("wh", "ha"),
            Err(err::ErrorKind::Query(
                err::QueryError::ContradictoryKnowledgeBase
            ))
        );
    }

    #[test]
    fn unknown_names() {
        let mut reasoner = Reasoner::from_config(Config::default()).unwrap();
        assert!(reasoner.initialize().is_ok());

        assert_eq!(
            reasoner.query("zz", "wh"),
            Err(err::ErrorKind::Registry(err::RegistryError::UnknownEntity(
                "zz".to_string()
            )))
        );
        assert_eq!(
            reasoner.query("sc", "zz"),
            Err(err::ErrorKind::Registry(err::RegistryError::UnknownCard(
                "zz".to_string()
            )))
        );
    }

    #[test]
    fn literals_outside_the_encoding() {
        let mut reasoner = Reasoner::from_config(Config::default()).unwrap();
        assert!(reasoner.initialize().is_ok());

        for atom in [0, 148, 500] {
            assert_eq!(
                reasoner.query_literal(CLiteral::new(atom, true)),
                Err(err::ErrorKind::Registry(err::RegistryError::UnknownAtom(atom)))
            );
        }

        let held = reasoner.encoder().holds(0, 0);
        assert_eq!(reasoner.query_literal(held), Ok(Answer::Unknown));
        assert_eq!(reasoner.query_literal(-held), Ok(Answer::Unknown));
    }

    #[test]
    fn grid_of_answers() {
        let mut reasoner = Reasoner::from_config(Config::default()).unwrap();
        assert!(reasoner.initialize().is_ok());
        assert!(reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());

        let grid = reasoner.query_all().unwrap();
        assert_eq!(grid.len(), 21);
        assert!(grid.iter().all(|row| row.len() == 7));

        let li = reasoner.registry().card_index("li").unwrap();
        assert_eq!(grid[li][0], Answer::True);
        assert!(grid[li][1..].iter().all(|answer| *answer == Answer::False));
    }
}
