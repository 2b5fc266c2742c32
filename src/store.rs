use std::collections::HashMap;

use crate::error::{Error, Result};

/// Maps each assigned variable name to its last assigned value.
#[derive(Debug, Clone, Default)]
pub struct Variables {
    values: HashMap<String, f64>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Result<f64> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| Error::UndefinedVariable(name.to_string()))
    }

    pub fn set(&mut self, name: &str, value: f64) {
        tracing::debug!(name, value, "assign");
        self.values.insert(name.to_string(), value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
