/*!
The encoder, naming each (entity, card) pair with an atom.

The encoder is the single source of truth for numbering.
With *c* cards, the pair of the entity at index *e* and card at index *k* is named by the atom *e·c + k + 1*.
So, with *n* players the atoms are exactly 1..=(n+1)·c, and each atom names exactly one pair.

```rust
# use clue_sat::config::RegistryConfig;
# use clue_sat::db::{encoder::Encoder, registry::Registry};
let registry = Registry::from_config(&RegistryConfig::default()).unwrap();
let encoder = Encoder::new(&registry);

assert_eq!(encoder.variable_id(0, 0), 1);
assert_eq!(encoder.variable_id(6, 20), 147);
assert_eq!(encoder.entity_and_card(147), Some((6, 20)));
```
*/

use crate::{
    db::registry::Registry,
    structures::{
        atom::Atom,
        entity::CardIndex,
        literal::{CLiteral, Literal},
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoder {
    entity_count: usize,
    card_count: usize,
}

impl Encoder {
    pub fn new(registry: &Registry) -> Self {
        Encoder {
            entity_count: registry.entity_count(),
            card_count: registry.card_count(),
        }
    }

    /// A count of all atoms, which is also the greatest atom.
    pub fn atom_count(&self) -> usize {
        self.entity_count * self.card_count
    }

    /// The atom naming the pair of the entity and card at the given indices.
    pub fn variable_id(&self, entity_index: usize, card: CardIndex) -> Atom {
        (entity_index * self.card_count + card + 1) as Atom
    }

    /// The literal asserting the entity at the given index holds the card.
    pub fn holds(&self, entity_index: usize, card: CardIndex) -> CLiteral {
        CLiteral::new(self.variable_id(entity_index, card), true)
    }

    /// The literal denying the entity at the given index holds the card.
    pub fn lacks(&self, entity_index: usize, card: CardIndex) -> CLiteral {
        CLiteral::new(self.variable_id(entity_index, card), false)
    }

    /// The (entity, card) indices named by an atom, if the atom names some pair.
    pub fn entity_and_card(&self, atom: Atom) -> Option<(usize, CardIndex)> {
        let atom = atom as usize;
        match 0 < atom && atom <= self.atom_count() {
            true => Some(((atom - 1) / self.card_count, (atom - 1) % self.card_count)),
            false => None,
        }
    }
}
