use super::{Comparison, Condition};
use qbrecord_core::Value;

/// Field name to condition entries, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conditions {
    entries: Vec<(String, Condition)>,
}

impl Conditions {
    pub fn new() -> Conditions {
        Conditions::default()
    }

    pub fn with(mut self, name: impl Into<String>, condition: impl Into<Condition>) -> Self {
        self.entries.push((name.into(), condition.into()));
        self
    }

    pub fn eq(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with(name, Condition::eq(value))
    }

    pub fn one_of<T: Into<Value>>(
        self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        self.with(name, Condition::one_of(values))
    }

    pub fn compare(self, name: impl Into<String>, comparison: Comparison) -> Self {
        self.with(name, comparison)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition)> {
        self.entries
            .iter()
            .map(|(name, condition)| (name.as_str(), condition))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Condition)> for Conditions {
    fn from_iter<I: IntoIterator<Item = (K, Condition)>>(iter: I) -> Self {
        Conditions {
            entries: iter
                .into_iter()
                .map(|(name, condition)| (name.into(), condition))
                .collect(),
        }
    }
}
