//! Backend capability reporting.

use serde::Serialize;
use std::collections::BTreeMap;

/// A single capability value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CapValue {
    /// Boolean flag, e.g. `is_simulated`.
    Bool(bool),
    /// Integer quantity, e.g. a flip budget.
    Int(u64),
    /// Floating-point quantity, e.g. a noise parameter.
    Float(f64),
    /// Free-form text, e.g. a device identifier.
    Text(String),
}

impl From<bool> for CapValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u64> for CapValue {
    fn from(v: u64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for CapValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for CapValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Named capability values describing a backend.
///
/// Purely descriptive; the solve path never branches on these.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Capabilities(BTreeMap<String, CapValue>);

impl Capabilities {
    /// Creates an empty capability set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a capability, builder style.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<CapValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Looks up a capability by name.
    pub fn get(&self, name: &str) -> Option<&CapValue> {
        self.0.get(name)
    }

    /// Iterates over all capabilities in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CapValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
