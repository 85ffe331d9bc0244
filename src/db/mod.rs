/*!
Databases holding the data a reasoner works over.

- The [registry] of players and cards, fixed when a reasoner is built.
- The [encoder], naming each (entity, card) pair with an atom.
- The [knowledge base](knowledge), an append-only store of clauses.

The registry and encoder are never revised after a reasoner is built, while the knowledge base only grows.
*/

pub mod encoder;
pub mod knowledge;
pub mod registry;
