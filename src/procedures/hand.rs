//! Cards seen in the hand of a player.
//!
//! For each card a player is known to hold, a unit clause asserting the player holds the card.
//!
//! The clauses are committed permanently.
//! If the cards conflict with earlier events, the knowledge base becomes unsatisfiable, and this is found by a later [query](crate::procedures::query).

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::GenericReasoner,
    types::err::{self},
};

impl<O: Oracle> GenericReasoner<O> {
    /// Records that the given player holds each of the given cards.
    pub fn record_hand(&mut self, player: &str, cards: &[&str]) -> Result<(), err::ErrorKind> {
        self.ensure_initialized()?;

        let player_index = self.registry.player_index(player)?;
        let cards = cards
            .iter()
            .map(|card| self.registry.card_index(card))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(target: targets::KNOWLEDGE, "Hand of {player}: {} cards", cards.len());

        for card in cards {
            let clause = vec![self.encoder.holds(player_index, card)];
            self.knowledge.store(clause);
        }
        Ok(())
    }
}
