mod comparator;
pub use comparator::Comparator;

mod condition;
pub use condition::{Comparison, Condition, Operand};

mod conditions;
pub use conditions::Conditions;

mod json;

/// A query over one table, expressed with field names.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// A query string already written in the service's grammar. Field names
    /// in it are replaced by their FIDs when compiled.
    Raw(String),

    /// Every entry must hold
    And(Conditions),

    /// Any single entry of any group may hold
    AnyOf(Vec<Conditions>),
}

impl Filter {
    pub fn raw(query: impl Into<String>) -> Filter {
        Filter::Raw(query.into())
    }

    pub fn any_of(groups: impl IntoIterator<Item = Conditions>) -> Filter {
        Filter::AnyOf(groups.into_iter().collect())
    }

    /// A filter matching the record whose `name` field equals `value`.
    pub fn eq(name: impl Into<String>, value: impl Into<qbrecord_core::Value>) -> Filter {
        Filter::And(Conditions::new().eq(name, value))
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Filter::Raw(_))
    }
}

impl From<Conditions> for Filter {
    fn from(value: Conditions) -> Self {
        Filter::And(value)
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Raw(value.to_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Raw(value)
    }
}
