/*!
Accusations, and whether they were correct.

- If the accusation is correct, the case file holds each of the three cards.
- Otherwise, the case file does not hold all three cards, recorded as the clause ¬*cf·c₁* ∨ ¬*cf·c₂* ∨ ¬*cf·c₃*.

Regardless of correctness, the accuser holds none of the three cards.
No further constraint on the hand of the accuser is added.
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::GenericReasoner,
    structures::{clause::CClause, entity::Entity},
    types::err::{self},
};

impl<O: Oracle> GenericReasoner<O> {
    /// Records an accusation of three cards by the accuser, and whether the accusation was correct.
    pub fn record_accusation(
        &mut self,
        accuser: &str,
        cards: [&str; 3],
        is_correct: bool,
    ) -> Result<(), err::ErrorKind> {
        self.ensure_initialized()?;

        let accuser_index = self.registry.player_index(accuser)?;
        let mut accused = [0; 3];
        for (index, card) in cards.iter().enumerate() {
            accused[index] = self.registry.card_index(card)?;
        }

        log::info!(target: targets::KNOWLEDGE,
            "Accusation by {accuser}: {} {} {}, correct: {is_correct}",
            cards[0], cards[1], cards[2]
        );

        let case_file = self.registry.index_of(Entity::CaseFile);
        match is_correct {
            true => {
                for card in accused {
                    let clause = vec![self.encoder.holds(case_file, card)];
                    self.knowledge.store(clause);
                }
            }

            false => {
                let clause: CClause = accused
                    .iter()
                    .map(|card| self.encoder.lacks(case_file, *card))
                    .collect();
                self.knowledge.store(clause);
            }
        }

        self.store_denials(accuser_index, &accused);
        Ok(())
    }
}
