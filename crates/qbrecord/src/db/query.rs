use super::Db;
use crate::{decode, Filter, Model, QueryOptions, Result, Value};

use qbrecord_core::driver::operation::{Query, Source};

impl Db {
    /// Find the record whose primary key equals `key`.
    pub async fn find<M: Model>(&self, key: impl Into<Value>) -> Result<Option<M>> {
        let pk = &M::schema().primary_key().name;
        self.first(Filter::eq(pk.as_str(), key)).await
    }

    /// Every record matching `filter`.
    pub async fn all<M: Model>(&self, filter: impl Into<Filter>) -> Result<Vec<M>> {
        self.all_with(filter, &QueryOptions::new()).await
    }

    /// Every record matching `filter`, with field lists and directives from
    /// `options`. Without a `clist` every declared field is returned; with one,
    /// fields the model cannot load from `Null` are added to it.
    pub async fn all_with<M: Model>(
        &self,
        filter: impl Into<Filter>,
        options: &QueryOptions,
    ) -> Result<Vec<M>> {
        let schema = M::schema();
        let query = qbrecord_query::compile(&filter.into(), schema)?;
        let options = options.build(schema)?;

        let clist = match options.clist() {
            Some(clist) => with_required_fields::<M>(clist),
            None => schema.clist().to_string(),
        };

        let mut op = Query::new(schema.table_id(), super::source(query), clist);
        op.slist = options.slist().map(str::to_string);
        op.options = options.options().map(str::to_string);

        self.query(op).await
    }

    /// The first record matching `filter`.
    pub async fn first<M: Model>(&self, filter: impl Into<Filter>) -> Result<Option<M>> {
        let options = QueryOptions::new().options("num-1");
        let records = self.all_with(filter, &options).await?;
        Ok(records.into_iter().next())
    }

    /// Records returned by the saved report `qid`.
    pub async fn qid<M: Model>(&self, qid: u64) -> Result<Vec<M>> {
        let schema = M::schema();
        let op = Query::new(schema.table_id(), Source::Qid(qid), schema.clist());
        self.query(op).await
    }

    async fn query<M: Model>(&self, op: Query) -> Result<Vec<M>> {
        let schema = M::schema();
        let rows = self.exec(op).await?.rows.into_values()?;

        rows.iter()
            .map(|raw| M::load(decode(raw, schema)?))
            .collect()
    }
}

/// Append the model's required fields missing from a caller-supplied clist.
fn with_required_fields<M: Model>(clist: &str) -> String {
    let mut fids: Vec<String> = clist
        .split('.')
        .filter(|fid| !fid.is_empty())
        .map(str::to_string)
        .collect();

    for field in M::schema().fields() {
        let fid = field.fid.to_string();

        if M::is_required(&field.name) && !fids.contains(&fid) {
            log::trace!("adding required field `{}` to clist", field.name);
            fids.push(fid);
        }
    }

    fids.join(".")
}
