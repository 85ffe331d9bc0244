/*!
Configuration of a reasoner.

All configuration for a reasoner is contained within a [Config].
The names of players and cards are given by the [registry](RegistryConfig), and the remaining options are passed to the [oracle](crate::oracle::Otter).

Options are best revised through [set](ConfigOption::set), which refuses a value out of bounds.
Values may also be written directly, and so every option is [checked](Config::check) again when an oracle is built from a configuration.

```rust
# use clue_sat::config::Config;
let mut config = Config::default();
assert_eq!(config.registry.players.len(), 6);

assert!(config.polarity_lean.set(0.25).is_ok());
assert!(config.polarity_lean.set(2.0).is_err());

config.polarity_lean.value = 2.0;
assert!(config.check().is_err());
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod registry;
pub use registry::RegistryConfig;

mod rng;
pub use rng::PolarityLean;

use crate::types::err::{self};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The names of players and cards.
    pub registry: RegistryConfig,

    /// The probability of assigning positive polarity to an atom when freely choosing a value for the atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The time limit for a single call to an oracle, if any.
    pub time_limit: ConfigOption<Option<std::time::Duration>>,
}

impl Config {
    /// Checks each option is within its bounds.
    pub fn check(&self) -> Result<(), err::ConfigError> {
        self.polarity_lean.check()?;
        self.time_limit.check()?;
        Ok(())
    }
}

impl Default for Config {
    /// The default reasoner is configured to provide deterministic results on the standard game.
    ///
    /// Nearly every fact about a game is false, and so decisions lean to false.
    fn default() -> Self {
        Config {
            registry: RegistryConfig::default(),

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: None,
                max: Some(std::time::Duration::MAX),
                value: None,
            },
        }
    }
}
