use super::{Formatter, ToQuery};
use crate::parse::{self, FieldRef};

use qbrecord_core::Result;

/// A query string already in the grammar. Field names used as left operands
/// are replaced by their FIDs; everything else is copied unchanged.
pub(super) struct Raw<'a>(pub(super) &'a str);

impl ToQuery for Raw<'_> {
    fn to_query(self, f: &mut Formatter<'_>) -> Result<()> {
        let query = parse::parse(self.0)?;
        let mut pos = 0;

        for clause in query.clauses() {
            let span = &clause.field_span;

            match &clause.field {
                FieldRef::Fid(_) => continue,
                FieldRef::Name(name) => {
                    let fid = f.serializer.fid(name)?;
                    fmt!(f, &self.0[pos..span.start] fid);
                }
            }

            pos = span.end;
        }

        fmt!(f, &self.0[pos..]);
        Ok(())
    }
}
