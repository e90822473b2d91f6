use super::Operation;

#[derive(Debug, Clone)]
pub struct Query {
    pub table: String,

    /// Which records to return
    pub source: Source,

    /// Dot-separated FIDs to return for each row
    pub clist: String,

    /// Dot-separated FIDs to sort by
    pub slist: Option<String>,

    /// Free-form service directives such as `num-10.skp-20.sortorder-D`
    pub options: Option<String>,
}

/// Selects the records an operation applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Every record in the table
    All,

    /// Records matching a compiled query string
    Query(String),

    /// Records returned by a saved report
    Qid(u64),
}

impl Query {
    pub fn new(table: impl Into<String>, source: Source, clist: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            source,
            clist: clist.into(),
            slist: None,
            options: None,
        }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
