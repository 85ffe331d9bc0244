//! Abstract elements of a game and of a formula, and their representation.
//!
//! - [Entities](entity) and [categories](entity::Category) are the elements of a game.
//! - [Atoms](atom), [literals](literal) and [clauses](clause) are the elements of a formula.
//!
//! The two are connected by the [encoder](crate::db::encoder), which names each fact about a game with an atom.

pub mod atom;
pub mod clause;
pub mod entity;
pub mod literal;
