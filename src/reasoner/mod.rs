/*!
The reasoner --- to which game events are recorded and within which queries are made.

Strictly, a [GenericReasoner] and a [Reasoner].

The generic reasoner is generic over the [oracle](crate::oracle) used to answer queries.
A [Reasoner] uses the [Otter] oracle, backed by the otter_sat solver, and is built with [from_config](Reasoner::from_config) alone.

A reasoner is built from a [registry](crate::db::registry) of players and cards, and holds a [knowledge base](crate::db::knowledge) of clauses.
The procedures which add to the knowledge base, and the query procedure which reads from it, are documented in [procedures](crate::procedures).

# Example
```rust
# use clue_sat::config::Config;
# use clue_sat::reasoner::Reasoner;
# use clue_sat::reports::Answer;
let mut the_reasoner = Reasoner::from_config(Config::default()).unwrap();
assert!(the_reasoner.initialize().is_ok());

assert!(the_reasoner.record_hand("sc", &["wh", "li", "st"]).is_ok());

assert_eq!(the_reasoner.query("sc", "wh"), Ok(Answer::True));
assert_eq!(the_reasoner.query("mu", "wh"), Ok(Answer::False));
assert_eq!(the_reasoner.query("sc", "ro"), Ok(Answer::Unknown));
```
*/

mod specific;
pub use specific::Reasoner;

use crate::{
    config::Config,
    db::{encoder::Encoder, knowledge::KnowledgeBase, registry::Registry},
    oracle::Oracle,
    structures::{clause::CClause, entity::CardIndex},
    types::err::{self},
};

#[cfg(doc)]
use crate::oracle::Otter;

/// The state of a reasoner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReasonerState {
    /// The game axioms have not been added, and no event may be recorded.
    Uninitialized,

    /// The game axioms have been added.
    Ready,
}

impl std::fmt::Display for ReasonerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "Uninitialized"),
            Self::Ready => write!(f, "Ready"),
        }
    }
}

pub struct GenericReasoner<O: Oracle> {
    /// The configuration of the reasoner.
    pub(crate) config: Config,

    pub(crate) registry: Registry,

    pub(crate) encoder: Encoder,

    pub(crate) knowledge: KnowledgeBase,

    pub(crate) oracle: O,

    pub(crate) state: ReasonerState,
}

impl<O: Oracle> GenericReasoner<O> {
    /// Creates a reasoner from some given configuration and oracle.
    ///
    /// Fails if some option of the configuration is out of bounds, or if the registry of the configuration is invalid.
    pub fn with_oracle(config: Config, oracle: O) -> Result<Self, err::ErrorKind> {
        config.check()?;
        let registry = Registry::from_config(&config.registry)?;
        let encoder = Encoder::new(&registry);

        Ok(GenericReasoner {
            config,
            registry,
            encoder,
            knowledge: KnowledgeBase::default(),
            oracle,
            state: ReasonerState::Uninitialized,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    pub fn state(&self) -> ReasonerState {
        self.state
    }

    /// The clauses of the knowledge base, in the order added.
    pub fn clauses(&self) -> &[CClause] {
        self.knowledge.clauses()
    }

    pub fn clause_count(&self) -> usize {
        self.knowledge.clause_count()
    }

    pub(crate) fn ensure_initialized(&self) -> Result<(), err::StateError> {
        match self.state {
            ReasonerState::Ready => Ok(()),
            ReasonerState::Uninitialized => Err(err::StateError::Uninitialized),
        }
    }

    /// Stores a unit clause denying each given card to the entity at the given index.
    pub(crate) fn store_denials(&mut self, entity_index: usize, cards: &[CardIndex]) {
        for card in cards {
            let clause = vec![self.encoder.lacks(entity_index, *card)];
            self.knowledge.store(clause);
        }
    }
}
