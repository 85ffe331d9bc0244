use crate::types::err::{self};

/// A named configuration value, with bounds.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    fn within_bounds(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }

    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        match self.within_bounds(&value) {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(err::ConfigError::OutOfBounds(self.name)),
        }
    }

    /// Checks the current value of the option is within the bounds of the option.
    ///
    /// A value may be out of bounds if written directly, rather than through [set](ConfigOption::set).
    pub fn check(&self) -> Result<(), err::ConfigError> {
        match self.within_bounds(&self.value) {
            true => Ok(()),
            false => Err(err::ConfigError::OutOfBounds(self.name)),
        }
    }
}
