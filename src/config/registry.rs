//! Names of the players, the case file, and the cards of a game.
//!
//! The default is the standard game, with six players and twenty-one cards.
//! Players are listed in turn order.

/// The names used to build a [Registry](crate::db::registry::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// The name of the case file.
    pub case_file: String,

    /// The players, in turn order.
    pub players: Vec<String>,

    pub suspects: Vec<String>,

    pub weapons: Vec<String>,

    pub rooms: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            case_file: "cf".to_string(),
            players: owned(&["sc", "mu", "wh", "gr", "pe", "pl"]),
            suspects: owned(&["mu", "pl", "gr", "pe", "sc", "wh"]),
            weapons: owned(&["kn", "ca", "re", "ro", "pi", "wr"]),
            rooms: owned(&["ha", "lo", "di", "ki", "ba", "co", "bi", "li", "st"]),
        }
    }
}
