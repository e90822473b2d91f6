use super::{condition::Entry, And, Formatter, Or, ToQuery};
use crate::{Conditions, Filter};

use qbrecord_core::Result;

impl ToQuery for &Filter {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        match self {
            Filter::Raw(query) => fmt!(f, super::raw::Raw(query)),
            Filter::And(conditions) => fmt!(f, And(entries(conditions))),
            // Every entry of every group is its own branch
            Filter::AnyOf(groups) => fmt!(f, Or(groups.iter().flat_map(entries))),
        }

        Ok(())
    }
}

fn entries(conditions: &Conditions) -> impl Iterator<Item = Entry<'_>> {
    conditions
        .iter()
        .map(|(name, condition)| Entry { name, condition })
}
