use std::collections::{HashMap, hash_map::Entry};

use tracing::trace;

use crate::{
    ast::Location,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// The variable store of an evaluation session.
///
/// Maps each declared identifier to its current value. Variables are only
/// ever created through [`Memory::declare`] and changed through
/// [`Memory::write`]; nothing removes them. A failed `declare` or `write`
/// leaves the store exactly as it was.
#[derive(Debug, Default, Clone)]
pub struct Memory {
    variables: HashMap<String, f64>,
}

impl Memory {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Introduces a new variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::AlreadyDeclared` if `name` already exists.
    ///
    /// # Example
    /// ```
    /// use reckon::{ast::Location, interpreter::memory::Memory};
    ///
    /// let mut memory = Memory::new();
    /// memory.declare("x", 1.0, Location::default()).unwrap();
    /// assert!(memory.declare("x", 2.0, Location::default()).is_err());
    /// assert_eq!(memory.read("x", Location::default()).unwrap(), 1.0);
    /// ```
    pub fn declare(&mut self, name: &str, value: f64, location: Location) -> EvalResult<()> {
        match self.variables.entry(name.to_string()) {
            Entry::Occupied(_) => Err(RuntimeError::AlreadyDeclared { name: name.to_string(),
                                                                      location }),
            Entry::Vacant(slot) => {
                trace!(variable = name, value, "declare");
                slot.insert(value);
                Ok(())
            },
        }
    }

    /// Overwrites the value of an existing variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::Undeclared` if `name` does not exist.
    pub fn write(&mut self, name: &str, value: f64, location: Location) -> EvalResult<()> {
        let slot = self.variables
                       .get_mut(name)
                       .ok_or_else(|| RuntimeError::Undeclared { name: name.to_string(),
                                                                 location })?;
        trace!(variable = name, old = *slot, value, "write");
        *slot = value;
        Ok(())
    }

    /// Returns the value of an existing variable.
    ///
    /// # Errors
    /// Returns `RuntimeError::Undeclared` if `name` does not exist.
    pub fn read(&self, name: &str, location: Location) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::Undeclared { name: name.to_string(),
                                                      location })
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
