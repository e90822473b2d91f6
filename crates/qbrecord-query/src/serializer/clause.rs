use super::{Formatter, ToQuery};
use crate::Comparator;

use qbrecord_core::{schema::Fid, Error, Result, Value};

/// A single `{'<fid>'.<CMP>.'<value>'}` term.
pub(super) struct Clause<'a> {
    pub(super) fid: Fid,
    pub(super) comparator: &'a Comparator,
    pub(super) value: &'a Value,
}

impl ToQuery for Clause<'_> {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        if !self.comparator.is_valid() {
            return Err(Error::invalid_argument(format!(
                "invalid comparator `{}` for FID {}",
                self.comparator, self.fid
            )));
        }

        fmt!(f, "{'" self.fid "'." self.comparator.as_str() ".'" self.value "'}");
        Ok(())
    }
}
