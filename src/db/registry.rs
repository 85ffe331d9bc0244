/*!
The registry of players, the case file, and cards.

Names are resolved to indices here, and only here.
Each lookup fails with a [RegistryError](crate::types::err::RegistryError) when given a name outside the registry, rather than coercing the name to something else.
Likewise, each lookup by index returns `None` when given an index outside the registry.

Entities are indexed by turn order, with the case file following the last player.
Cards are indexed suspects first, then weapons, then rooms.

```rust
# use clue_sat::config::RegistryConfig;
# use clue_sat::db::registry::Registry;
# use clue_sat::structures::entity::{Category, Entity};
let registry = Registry::from_config(&RegistryConfig::default()).unwrap();

assert_eq!(registry.entity_index("sc"), Ok(0));
assert_eq!(registry.entity_index("cf"), Ok(6));
assert_eq!(registry.entity("cf"), Ok(Entity::CaseFile));

assert_eq!(registry.card_index("mu"), Ok(0));
assert_eq!(registry.category_of(registry.card_index("st").unwrap()), Some(Category::Room));
assert!(registry.card_index("xx").is_err());
assert_eq!(registry.card_name(21), None);
```
*/

use std::collections::HashMap;

use crate::{
    config::RegistryConfig,
    misc::log::targets::{self},
    structures::entity::{CardIndex, Category, Entity, PlayerIndex},
    types::err::{self},
};

#[derive(Clone, Debug)]
pub struct Registry {
    case_file: String,

    /// Players, in turn order.
    players: Vec<String>,

    cards: Vec<String>,

    /// The category of each card, indexed by card.
    categories: Vec<Category>,

    entity_indices: HashMap<String, usize>,

    card_indices: HashMap<String, CardIndex>,
}

impl Registry {
    /// Builds a registry from the given names.
    ///
    /// Fails if there are no players, some category has no cards, or some name is given twice.
    /// Players and the case file share one namespace, and cards another, so a suspect may share the name of a player.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, err::RegistryError> {
        if config.players.is_empty() {
            return Err(err::RegistryError::NoPlayers);
        }

        let mut entity_indices = HashMap::default();
        for (index, name) in config
            .players
            .iter()
            .chain(std::iter::once(&config.case_file))
            .enumerate()
        {
            if entity_indices.insert(name.clone(), index).is_some() {
                return Err(err::RegistryError::DuplicateName(name.clone()));
            }
        }

        let mut cards = Vec::default();
        let mut categories = Vec::default();
        for (category, names) in [
            (Category::Suspect, &config.suspects),
            (Category::Weapon, &config.weapons),
            (Category::Room, &config.rooms),
        ] {
            if names.is_empty() {
                return Err(err::RegistryError::EmptyCategory(category));
            }
            cards.extend(names.iter().cloned());
            categories.extend(std::iter::repeat(category).take(names.len()));
        }

        let mut card_indices = HashMap::default();
        for (index, name) in cards.iter().enumerate() {
            if card_indices.insert(name.clone(), index).is_some() {
                return Err(err::RegistryError::DuplicateName(name.clone()));
            }
        }

        log::info!(target: targets::REGISTRY, "{} players and {} cards", config.players.len(), cards.len());

        Ok(Registry {
            case_file: config.case_file.clone(),
            players: config.players.clone(),
            cards,
            categories,
            entity_indices,
            card_indices,
        })
    }

    /// A count of players, excluding the case file.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// A count of entities, including the case file.
    pub fn entity_count(&self) -> usize {
        self.players.len() + 1
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The names of the players, in turn order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// The names of the cards, in index order.
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    pub fn case_file(&self) -> &str {
        &self.case_file
    }

    /// Each entity, in index order: the players in turn order, then the case file.
    pub fn entities(&self) -> impl Iterator<Item = Entity> {
        (0..self.players.len())
            .map(Entity::Player)
            .chain(std::iter::once(Entity::CaseFile))
    }

    /// The index of the entity with the given name.
    pub fn entity_index(&self, name: &str) -> Result<usize, err::RegistryError> {
        match self.entity_indices.get(name) {
            Some(index) => Ok(*index),
            None => Err(err::RegistryError::UnknownEntity(name.to_string())),
        }
    }

    /// The entity with the given name.
    pub fn entity(&self, name: &str) -> Result<Entity, err::RegistryError> {
        let index = self.entity_index(name)?;
        self.entity_at(index)
            .ok_or_else(|| err::RegistryError::UnknownEntity(name.to_string()))
    }

    /// The player with the given name, failing if the name is that of the case file.
    pub fn player_index(&self, name: &str) -> Result<PlayerIndex, err::RegistryError> {
        match self.entity(name)? {
            Entity::Player(index) => Ok(index),
            Entity::CaseFile => Err(err::RegistryError::NotAPlayer(name.to_string())),
        }
    }

    /// The index of the card with the given name.
    pub fn card_index(&self, name: &str) -> Result<CardIndex, err::RegistryError> {
        match self.card_indices.get(name) {
            Some(index) => Ok(*index),
            None => Err(err::RegistryError::UnknownCard(name.to_string())),
        }
    }

    /// The index of an entity.
    pub fn index_of(&self, entity: Entity) -> usize {
        match entity {
            Entity::Player(index) => index,
            Entity::CaseFile => self.players.len(),
        }
    }

    /// The entity at an index, if any.
    ///
    /// The case file is at the index following the last player.
    pub fn entity_at(&self, index: usize) -> Option<Entity> {
        match index.cmp(&self.players.len()) {
            std::cmp::Ordering::Less => Some(Entity::Player(index)),
            std::cmp::Ordering::Equal => Some(Entity::CaseFile),
            std::cmp::Ordering::Greater => None,
        }
    }

    pub fn entity_name(&self, entity: Entity) -> Option<&str> {
        match entity {
            Entity::Player(index) => self.players.get(index).map(String::as_str),
            Entity::CaseFile => Some(&self.case_file),
        }
    }

    pub fn card_name(&self, card: CardIndex) -> Option<&str> {
        self.cards.get(card).map(String::as_str)
    }

    /// The category of a card, if the index is that of a card in the registry.
    pub fn category_of(&self, card: CardIndex) -> Option<Category> {
        self.categories.get(card).copied()
    }

    /// The cards of a category, in index order.
    pub fn cards_of(&self, category: Category) -> impl Iterator<Item = CardIndex> + '_ {
        self.categories
            .iter()
            .enumerate()
            .filter(move |(_, c)| **c == category)
            .map(|(card, _)| card)
    }

    /// The player following the given player in turn order, wrapping from the last player to the first.
    pub fn successor(&self, player: PlayerIndex) -> PlayerIndex {
        (player + 1) % self.players.len()
    }
}

#[cfg(test)]
mod registry_tests {
    use super::*;

    #[test]
    fn standard_game() {
        let registry = Registry::from_config(&RegistryConfig::default()).unwrap();

        assert_eq!(registry.player_count(), 6);
        assert_eq!(registry.entity_count(), 7);
        assert_eq!(registry.card_count(), 21);

        assert_eq!(registry.cards_of(Category::Suspect).count(), 6);
        assert_eq!(registry.cards_of(Category::Weapon).count(), 6);
        assert_eq!(registry.cards_of(Category::Room).count(), 9);

        assert_eq!(registry.card_index("kn"), Ok(6));
        assert_eq!(registry.category_of(6), Some(Category::Weapon));
        assert_eq!(registry.cards().len(), 21);

        let entities = registry.entities().collect::<Vec<_>>();
        assert_eq!(entities.len(), 7);
        assert!(entities[..6].iter().all(|entity| !entity.is_case_file()));
        assert!(entities[6].is_case_file());
        assert_eq!(registry.entity_name(entities[6]), Some(registry.case_file()));
    }

    #[test]
    fn unknown_names() {
        let registry = Registry::from_config(&RegistryConfig::default()).unwrap();

        assert_eq!(
            registry.entity_index("zz"),
            Err(err::RegistryError::UnknownEntity("zz".to_string()))
        );
        assert_eq!(
            registry.card_index("cf"),
            Err(err::RegistryError::UnknownCard("cf".to_string()))
        );
        assert_eq!(
            registry.player_index("cf"),
            Err(err::RegistryError::NotAPlayer("cf".to_string()))
        );
    }

    #[test]
    fn indices_outside_the_registry() {
        let registry = Registry::from_config(&RegistryConfig::default()).unwrap();

        assert_eq!(registry.entity_at(5), Some(Entity::Player(5)));
        assert_eq!(registry.entity_at(6), Some(Entity::CaseFile));
        assert_eq!(registry.entity_at(7), None);
        assert_eq!(registry.entity_at(1000), None);

        assert_eq!(registry.entity_name(Entity::Player(0)), Some("sc"));
        assert_eq!(registry.entity_name(Entity::Player(6)), None);

        assert_eq!(registry.card_name(20), Some("st"));
        assert_eq!(registry.card_name(99), None);
        assert_eq!(registry.category_of(99), None);
    }

    #[test]
    fn turn_order_wraps() {
        let registry = Registry::from_config(&RegistryConfig::default()).unwrap();

        assert_eq!(registry.successor(0), 1);
        assert_eq!(registry.successor(5), 0);
    }

    #[test]
    fn invalid_configs() {
        let mut config = RegistryConfig::default();
        config.players.push("mu".to_string());
        assert_eq!(
            Registry::from_config(&config).err(),
            Some(err::RegistryError::DuplicateName("mu".to_string()))
        );

        let mut config = RegistryConfig::default();
        config.case_file = "sc".to_string();
        assert!(Registry::from_config(&config).is_err());

        let mut config = RegistryConfig::default();
        config.weapons.clear();
        assert_eq!(
            Registry::from_config(&config).err(),
            Some(err::RegistryError::EmptyCategory(Category::Weapon))
        );

        let mut config = RegistryConfig::default();
        config.players.clear();
        assert_eq!(
            Registry::from_config(&config).err(),
            Some(err::RegistryError::NoPlayers)
        );
    }
}
