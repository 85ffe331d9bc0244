/*!
Suggestions, and their refutation.

On a suggestion of three cards, players are asked in turn order, starting from the player after the suggester, whether they may refute the suggestion by showing one of the cards.

- If no player refutes the suggestion, then every player other than the suggester holds none of the cards.
- If some player refutes the suggestion, then every player asked before the refuter holds none of the cards.
  And:
  + If the card shown is known, the refuter holds that card.
  + Otherwise, the refuter holds at least one of the three cards, recorded as a single clause of three literals.

Nothing is recorded about the suggester, who may suggest cards they hold.

Turn order is cyclic, so the players asked before the refuter may wrap past the last player to the first.
If the refuter is recorded as the suggester, every other player is taken to have been asked first.
*/

use crate::{
    misc::log::targets::{self},
    oracle::Oracle,
    reasoner::GenericReasoner,
    structures::clause::CClause,
    types::err::{self},
};

impl<O: Oracle> GenericReasoner<O> {
    /// Records a suggestion of three cards by the suggester, the player who refuted the suggestion (if any), and the card shown (if seen).
    ///
    /// A shown card is only meaningful with a refuter, and is otherwise checked but ignored.
    pub fn record_suggestion(
        &mut self,
        suggester: &str,
        cards: [&str; 3],
        refuter: Option<&str>,
        shown: Option<&str>,
    ) -> Result<(), err::ErrorKind> {
        self.ensure_initialized()?;

        let suggester_index = self.registry.player_index(suggester)?;
        let mut suggested = [0; 3];
        for (index, card) in cards.iter().enumerate() {
            suggested[index] = self.registry.card_index(card)?;
        }
        let refuter_index = match refuter {
            Some(refuter) => Some(self.registry.player_index(refuter)?),
            None => None,
        };
        let shown_index = match shown {
            Some(shown) => Some(self.registry.card_index(shown)?),
            None => None,
        };

        log::info!(target: targets::KNOWLEDGE,
            "Suggestion by {suggester}: {} {} {}, refuted by {}",
            cards[0], cards[1], cards[2], refuter.unwrap_or("none")
        );

        match refuter_index {
            None => {
                if shown_index.is_some() {
                    log::warn!(target: targets::KNOWLEDGE, "A card was shown without a refuter, and is ignored");
                }

                for player in 0..self.registry.player_count() {
                    if player != suggester_index {
                        self.store_denials(player, &suggested);
                    }
                }
            }

            Some(refuter_index) => {
                let mut asked = self.registry.successor(suggester_index);
                while asked != refuter_index {
                    self.store_denials(asked, &suggested);
                    asked = self.registry.successor(asked);
                }

                match shown_index {
                    Some(shown_index) => {
                        if !suggested.contains(&shown_index) {
                            log::warn!(target: targets::KNOWLEDGE, "The shown card was not suggested");
                        }

                        let clause = vec![self.encoder.holds(refuter_index, shown_index)];
                        self.knowledge.store(clause);
                    }

                    None => {
                        let clause: CClause = suggested
                            .iter()
                            .map(|card| self.encoder.holds(refuter_index, *card))
                            .collect();
                        self.knowledge.store(clause);
                    }
                }
            }
        }
        Ok(())
    }
}
