use crate::{eval, table::Table};

use qbrecord_core::{driver::operation::Query, schema::Fid, Error, RawRow, Result};
use serde_json::Value as Json;
use std::cmp::Ordering;

/// How query results are projected, sorted and paged.
#[derive(Debug, Default)]
pub(crate) struct View {
    /// FIDs returned for each record; every stored FID when empty
    clist: Vec<Fid>,

    /// FIDs to sort by, most significant first
    slist: Vec<Fid>,

    descending: bool,

    /// Records to skip (`skp-N`)
    skip: usize,

    /// Maximum records to return (`num-N`)
    num: Option<usize>,
}

impl View {
    pub(crate) fn parse(query: &Query) -> Result<View> {
        let mut view = View {
            clist: fids("clist", &query.clist)?,
            ..View::default()
        };

        if let Some(slist) = &query.slist {
            view.slist = fids("slist", slist)?;
        }

        for directive in query.options.iter().flat_map(|options| options.split('.')) {
            if let Some(n) = directive.strip_prefix("num-") {
                view.num = Some(count(directive, n)?);
            } else if let Some(n) = directive.strip_prefix("skp-") {
                view.skip = count(directive, n)?;
            } else if directive == "sortorder-D" {
                view.descending = true;
            } else if directive == "sortorder-A" {
                view.descending = false;
            } else {
                log::trace!("ignoring query option `{directive}`");
            }
        }

        Ok(view)
    }

    pub(crate) fn apply(&self, table: &Table, record_ids: &[u64]) -> Vec<RawRow> {
        let mut records: Vec<_> = record_ids
            .iter()
            .filter_map(|record_id| table.records.get(record_id))
            .collect();

        if !self.slist.is_empty() {
            records.sort_by(|lhs, rhs| {
                self.slist
                    .iter()
                    .map(|fid| {
                        let lhs = lhs.get(fid).map(eval::text).unwrap_or_default();
                        let rhs = rhs.get(fid).map(eval::text).unwrap_or_default();
                        eval::compare(&lhs, &rhs)
                    })
                    .find(|ordering| *ordering != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        if self.descending {
            records.reverse();
        }

        records
            .into_iter()
            .skip(self.skip)
            .take(self.num.unwrap_or(usize::MAX))
            .map(|record| -> RawRow {
                if self.clist.is_empty() {
                    return record
                        .iter()
                        .map(|(fid, value)| (fid.to_string(), value.clone()))
                        .collect();
                }

                // Fields never written come back as null
                self.clist
                    .iter()
                    .map(|fid| {
                        let value = record.get(fid).cloned().unwrap_or(Json::Null);
                        (fid.to_string(), value)
                    })
                    .collect()
            })
            .collect()
    }
}

fn fids(option: &str, list: &str) -> Result<Vec<Fid>> {
    if list.trim().is_empty() {
        return Ok(vec![]);
    }

    list.split('.')
        .map(|component| {
            component.parse().map_err(|_| {
                Error::invalid_argument(format!("{option} entry `{component}` is not a FID"))
            })
        })
        .collect()
}

fn count(directive: &str, n: &str) -> Result<usize> {
    n.parse()
        .map_err(|_| Error::invalid_argument(format!("invalid query option `{directive}`")))
}
