//! Error types used in the library.
//!
//! - Registry errors follow from a name outside the configured players or cards.
//!   These are caller bugs, and are returned before any clause is added.
//! - Oracle errors are returned by an [oracle](crate::oracle) and are passed to the caller of a query unchanged.
//! - A query error notes the knowledge base is inconsistent, rather than some fact being false.
//!
//! Names of the error enums overlap with corresponding structures.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::{atom::Atom, entity::Category};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Oracle(OracleError),
    Query(QueryError),
    Registry(RegistryError),
    State(StateError),
}

/// Errors when revising a configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of the named option.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors from an oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// Satisfiability could not be determined within the time allowed.
    TimeUp,

    /// The oracle failed, or could not be reached.
    Failure(String),
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors noted when answering a query.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QueryError {
    /// The knowledge base is unsatisfiable with the literal and with its negation.
    /// So, the recorded events contradict one another and no answer is meaningful.
    ContradictoryKnowledgeBase,
}

impl From<QueryError> for ErrorKind {
    fn from(e: QueryError) -> Self {
        ErrorKind::Query(e)
    }
}

/// Errors in the registry of players and cards.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistryError {
    /// A name which is neither a player nor the case file.
    UnknownEntity(String),

    /// A name which is not a card.
    UnknownCard(String),

    /// An atom which does not encode a pair of an entity and a card.
    UnknownAtom(Atom),

    /// The case file, where a player is required.
    NotAPlayer(String),

    /// A name given twice when building a registry.
    DuplicateName(String),

    /// A category without any cards.
    EmptyCategory(Category),

    /// A registry requires at least one player.
    NoPlayers,
}

impl From<RegistryError> for ErrorKind {
    fn from(e: RegistryError) -> Self {
        ErrorKind::Registry(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// Events were recorded, or a query made, before the game axioms were added.
    Uninitialized,

    /// The game axioms have already been added.
    AlreadyInitialized,

    /// A lock guarding a reasoner was poisoned by a panic elsewhere.
    Poisoned,
}

impl From<StateError> for ErrorKind {
    fn from(e: StateError) -> Self {
        ErrorKind::State(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfBounds(name)) => {
                write!(f, "Value out of bounds for {name}")
            }

            Self::Oracle(OracleError::TimeUp) => write!(f, "The oracle ran out of time"),
            Self::Oracle(OracleError::Failure(reason)) => write!(f, "Oracle failure: {reason}"),

            Self::Query(QueryError::ContradictoryKnowledgeBase) => {
                write!(f, "The knowledge base is contradictory")
            }

            Self::Registry(e) => match e {
                RegistryError::UnknownEntity(name) => write!(f, "Unknown entity: {name}"),
                RegistryError::UnknownCard(name) => write!(f, "Unknown card: {name}"),
                RegistryError::UnknownAtom(atom) => write!(f, "Unknown atom: {atom}"),
                RegistryError::NotAPlayer(name) => write!(f, "Not a player: {name}"),
                RegistryError::DuplicateName(name) => write!(f, "Duplicate name: {name}"),
                RegistryError::EmptyCategory(category) => write!(f, "No cards for {category}"),
                RegistryError::NoPlayers => write!(f, "No players"),
            },

            Self::State(e) => match e {
                StateError::Uninitialized => write!(f, "The reasoner has not been initialized"),
                StateError::AlreadyInitialized => {
                    write!(f, "The reasoner has already been initialized")
                }
                StateError::Poisoned => write!(f, "A lock on the reasoner was poisoned"),
            },
        }
    }
}

impl std::error::Error for ErrorKind {}
