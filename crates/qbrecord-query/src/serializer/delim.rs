use super::{Formatter, ToQuery};
use qbrecord_core::Result;

/// Joined by `AND`
pub(super) struct And<L>(pub(super) L);

/// Joined by `OR`
pub(super) struct Or<L>(pub(super) L);

pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

impl<L> ToQuery for And<L>
where
    L: IntoIterator,
    L::Item: ToQuery,
{
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, Delimited(self.0, "AND"));
        Ok(())
    }
}

impl<L> ToQuery for Or<L>
where
    L: IntoIterator,
    L::Item: ToQuery,
{
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        fmt!(f, Delimited(self.0, "OR"));
        Ok(())
    }
}

impl<L, I> ToQuery for Delimited<L>
where
    L: IntoIterator<Item = I>,
    I: ToQuery,
{
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
        Ok(())
    }
}
