use super::{And, Clause, Formatter, Or, ToQuery};
use crate::{Comparator, Condition, Operand};

use qbrecord_core::{schema::Fid, Error, Result, Value};

/// One field name and the condition it must satisfy.
pub(super) struct Entry<'a> {
    pub(super) name: &'a str,
    pub(super) condition: &'a Condition,
}

/// One comparator applied to one field.
struct Comparison<'a> {
    fid: Fid,
    comparator: &'a Comparator,
    operand: &'a Operand,
}

/// The same comparator applied to each value, joined by `OR`.
struct AnyOf<'a> {
    fid: Fid,
    comparator: &'a Comparator,
    values: &'a [Value],
}

impl ToQuery for Entry<'_> {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        let fid = f.serializer.fid(self.name)?;

        match self.condition {
            Condition::Eq(value) => {
                let comparator = Comparator::equals();
                fmt!(f, Clause { fid, comparator: &comparator, value });
            }
            Condition::In(values) => {
                let comparator = Comparator::equals();
                fmt!(f, AnyOf { fid, comparator: &comparator, values });
            }
            Condition::Compare(comparison) => {
                if comparison.is_empty() {
                    return Err(Error::invalid_argument(format!(
                        "no comparators given for `{}`",
                        self.name
                    )));
                }

                let terms = comparison
                    .iter()
                    .map(|(comparator, operand)| Comparison {
                        fid,
                        comparator,
                        operand,
                    });
                fmt!(f, And(terms));
            }
        }

        Ok(())
    }
}

impl ToQuery for Comparison<'_> {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        match self.operand {
            Operand::One(value) => fmt!(f, Clause {
                fid: self.fid,
                comparator: self.comparator,
                value,
            }),
            Operand::Many(values) => fmt!(f, AnyOf {
                fid: self.fid,
                comparator: self.comparator,
                values,
            }),
        }

        Ok(())
    }
}

impl ToQuery for AnyOf<'_> {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::invalid_argument(format!(
                "empty value list for FID {}",
                self.fid
            )));
        }

        let clauses = self.values.iter().map(|value| Clause {
            fid: self.fid,
            comparator: self.comparator,
            value,
        });
        fmt!(f, Or(clauses));
        Ok(())
    }
}
