/*!
The rules of the game, as clauses.

Three families of clauses are added:

- Coverage: each card is held by some entity (the case file included).
  For each card *c*, the clause *e₁c* ∨ … ∨ *eₙc* ∨ *cf·c*.
- Exclusion: no card is held by two entities.
  For each card and each (unordered) pair of distinct entities, the clause ¬*e c* ∨ ¬*e' c*.
- The case file holds exactly one card of each category.
  For each category, one clause requiring at least one card of the category, and for each (unordered) pair of cards in the category a clause requiring not both.

No clause is added regarding how many cards a player holds.
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::{GenericReasoner, ReasonerState},
    structures::entity::{Category, Entity},
    types::err::{self},
};

impl<O: Oracle> GenericReasoner<O> {
    /// Adds the rules of the game to the knowledge base.
    ///
    /// May be called once only, and before any event is recorded.
    pub fn initialize(&mut self) -> Result<(), err::ErrorKind> {
        if self.state == ReasonerState::Ready {
            return Err(err::StateError::AlreadyInitialized.into());
        }

        let encoder = self.encoder;
        let entity_count = self.registry.entity_count();

        for card in 0..self.registry.card_count() {
            let coverage = (0..entity_count)
                .map(|entity| encoder.holds(entity, card))
                .collect();
            self.knowledge.store(coverage);

            for entity in 0..entity_count {
                for other in entity + 1..entity_count {
                    let exclusion = vec![encoder.lacks(entity, card), encoder.lacks(other, card)];
                    self.knowledge.store(exclusion);
                }
            }
        }

        let case_file = self.registry.index_of(Entity::CaseFile);
        for category in Category::ALL {
            let cards = self.registry.cards_of(category).collect::<Vec<_>>();

            let some_card = cards
                .iter()
                .map(|card| encoder.holds(case_file, *card))
                .collect();
            self.knowledge.store(some_card);

            for (position, card) in cards.iter().enumerate() {
                for other in &cards[position + 1..] {
                    let not_both = vec![encoder.lacks(case_file, *card), encoder.lacks(case_file, *other)];
                    self.knowledge.store(not_both);
                }
            }
        }

        self.state = ReasonerState::Ready;
        log::info!(target: targets::KNOWLEDGE, "Initialized with {} clauses", self.knowledge.clause_count());
        Ok(())
    }
}
