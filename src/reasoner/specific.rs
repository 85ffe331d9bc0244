use crate::{
    config::Config,
    oracle::Otter,
    types::err::{self},
};

use super::GenericReasoner;

/// A reasoner which uses [Otter] as an oracle.
pub type Reasoner = GenericReasoner<Otter>;

impl Reasoner {
    /// Creates a reasoner from some given configuration, with an oracle configured by the same.
    ///
    /// Fails if some option of the configuration is out of bounds, or if the registry is invalid.
    pub fn from_config(config: Config) -> Result<Self, err::ErrorKind> {
        let oracle = Otter::from_config(&config)?;
        Self::with_oracle(config, oracle)
    }
}
