//! A library for deducing who holds which card in a game of Clue, by reduction to propositional satisfiability.
//!
//! clue_sat records the events of a game as clauses over atoms of the form *entity holds card*, where an entity is a player or the case file.
//! Whether some entity holds some card is then decided by two calls to a satisfiability oracle: one with the fact asserted, and one with the fact denied.
//!
//! # Orientation
//!
//! The library is designed around the structure of a [reasoner].
//!
//! A reasoner is built from a [configuration](crate::config), which names the players and cards of the game, and an [oracle].
//! Internally, a reasoner holds:
//! - A [registry](crate::db::registry) of the players, the case file, and the cards.
//! - An [encoder](crate::db::encoder), from pairs of entities and cards to atoms.
//! - A [knowledge base](crate::db::knowledge) of clauses, to which clauses are only ever added.
//!
//! Useful starting points, then, may be:
//! - The [procedures], for the events which may be recorded and for how a query is answered.
//! - The [structures], for literals and clauses.
//! - The [session], for sharing a reasoner between threads and answering batches of queries in parallel.
//!
//! # Example
//!
//! ```rust
//! # use clue_sat::config::Config;
//! # use clue_sat::reasoner::Reasoner;
//! # use clue_sat::reports::Answer;
//! let mut the_reasoner = Reasoner::from_config(Config::default()).unwrap();
//! assert!(the_reasoner.initialize().is_ok());
//!
//! // Scarlet holds the wrench, the library, and the study.
//! assert!(the_reasoner.record_hand("sc", &["wr", "li", "st"]).is_ok());
//!
//! // Scarlet suggests Green with the rope in the hall, and Mustard shows Scarlet the rope.
//! assert!(the_reasoner
//!     .record_suggestion("sc", ["gr", "ro", "ha"], Some("mu"), Some("ro"))
//!     .is_ok());
//!
//! // Green suggests Plum with the knife in the lounge, and no one refutes.
//! assert!(the_reasoner
//!     .record_suggestion("gr", ["pl", "kn", "lo"], None, None)
//!     .is_ok());
//!
//! assert_eq!(the_reasoner.query("mu", "ro"), Ok(Answer::True));
//! assert_eq!(the_reasoner.query("cf", "ro"), Ok(Answer::False));
//! assert_eq!(the_reasoner.query("wh", "kn"), Ok(Answer::False));
//! assert_eq!(the_reasoner.query("cf", "kn"), Ok(Answer::Unknown));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - The events of a game can be followed with `RUST_LOG=knowledge=info …` or,
//! - Each answer to a query can be found with `RUST_LOG=query=debug …`

pub mod procedures;

pub mod config;
pub mod reasoner;
pub mod structures;
pub mod types;

pub mod db;
pub mod oracle;

pub mod reports;
pub mod session;

pub mod misc;
