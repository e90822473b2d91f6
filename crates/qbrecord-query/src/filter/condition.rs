use super::Comparator;
use qbrecord_core::Value;

/// What one field must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// The field equals the value
    Eq(Value),

    /// The field equals any of the values
    In(Vec<Value>),

    /// Every comparison holds
    Compare(Comparison),
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    One(Value),

    /// Matches if the comparison holds for any value
    Many(Vec<Value>),
}

/// Comparator to operand pairs, all of which must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comparison {
    pub(crate) ops: Vec<(Comparator, Operand)>,
}

impl Condition {
    pub fn eq(value: impl Into<Value>) -> Condition {
        Condition::Eq(value.into())
    }

    pub fn one_of<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Condition {
        Condition::In(values.into_iter().map(Into::into).collect())
    }
}

impl Comparison {
    pub fn new() -> Comparison {
        Comparison::default()
    }

    pub fn op(mut self, comparator: impl Into<Comparator>, value: impl Into<Value>) -> Self {
        self.ops.push((comparator.into(), Operand::One(value.into())));
        self
    }

    pub fn op_any<T: Into<Value>>(
        mut self,
        comparator: impl Into<Comparator>,
        values: impl IntoIterator<Item = T>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        self.ops.push((comparator.into(), Operand::Many(values)));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Comparator, &Operand)> {
        self.ops.iter().map(|(comparator, operand)| (comparator, operand))
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl From<Comparison> for Condition {
    fn from(value: Comparison) -> Self {
        Condition::Compare(value)
    }
}
