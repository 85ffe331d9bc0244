//! Entities, who may hold cards, and the categories cards belong to.
//!
//! An entity is either one of the players, identified by their position in turn order, or the case file.
//! The case file is a pseudo-player holding the solution: one suspect, one weapon, and one room.

/// The position of a player in turn order, from 0.
pub type PlayerIndex = usize;

/// The position of a card in the registry, from 0.
///
/// Cards are indexed suspects first, then weapons, then rooms.
pub type CardIndex = usize;

/// Something which may hold a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    /// A player, by position in turn order.
    Player(PlayerIndex),

    /// The case file.
    CaseFile,
}

impl Entity {
    /// Whether the entity is the case file.
    pub fn is_case_file(&self) -> bool {
        matches!(self, Entity::CaseFile)
    }
}

/// The (disjoint) categories of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Suspect,
    Weapon,
    Room,
}

impl Category {
    /// Each category, in the order cards are indexed.
    pub const ALL: [Category; 3] = [Category::Suspect, Category::Weapon, Category::Room];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suspect => write!(f, "suspect"),
            Self::Weapon => write!(f, "weapon"),
            Self::Room => write!(f, "room"),
        }
    }
}
