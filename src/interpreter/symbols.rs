use std::collections::HashMap;

/// The flat mapping from variable name to current integer value.
///
/// One table exists per pass over a line; nothing survives between lines.
/// Names enter the table through [`SymbolTable::declare`] in the full grammar
/// and through [`SymbolTable::set`] in the arithmetic grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    values: HashMap<String, i64>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with value 0. Re-declaring resets the value to 0.
    pub fn declare(&mut self, name: &str) {
        self.values.insert(name.to_string(), 0);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the value of a declared variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }

    /// Returns the value of `name`, reading unknown names as 0.
    #[must_use]
    pub fn get_or_zero(&self, name: &str) -> i64 {
        self.get(name).unwrap_or(0)
    }

    /// Stores `value` into an already declared variable.
    ///
    /// # Returns
    /// `false`, leaving the table untouched, if `name` was never declared.
    pub fn assign(&mut self, name: &str, value: i64) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Stores `value` under `name`, creating the variable if needed.
    pub fn set(&mut self, name: &str, value: i64) {
        self.values.insert(name.to_string(), value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}
