use super::Db;
use crate::{encode, Error, Filter, Model, Result, Row, TableSchema};

use qbrecord_core::driver::operation::{
    AddRecord, DeleteRecord, EditRecord, PurgeRecords, Source,
};

impl Db {
    /// Save a new record and return it with its record id set.
    ///
    /// Fails if the record already has a record id.
    pub async fn create<M: Model>(&self, mut record: M) -> Result<M> {
        if let Some(id) = record.record_id() {
            return Err(Error::invalid_argument(format!(
                "cannot create a record that already has record id {id}"
            )));
        }

        self.save(&mut record).await?;
        Ok(record)
    }

    /// Edit the record if it has a record id, otherwise add it and store the
    /// new record id on it.
    pub async fn save<M: Model>(&self, record: &mut M) -> Result<()> {
        let schema = M::schema();

        // Without a record id a saved record could never be edited again
        if schema.record_id_field().is_none() {
            return Err(Error::invalid_argument(format!(
                "cannot save records of `{}` without a record id field (FID 3)",
                schema.table_id()
            )));
        }

        let payload = encode(&*record, schema)?;
        let table = schema.table_id().to_string();

        match record.record_id() {
            Some(record_id) => {
                let op = EditRecord {
                    table,
                    record_id,
                    payload,
                };

                if !self.exec(op).await?.rows.into_success()? {
                    return Err(qbrecord_core::err!(
                        "record {record_id} on `{}` was not updated",
                        schema.table_id()
                    ));
                }
            }
            None => {
                let record_id = self
                    .exec(AddRecord { table, payload })
                    .await?
                    .rows
                    .into_record_id()?;

                log::debug!("added record {record_id} to `{}`", schema.table_id());
                record.set_record_id(record_id)?;
            }
        }

        Ok(())
    }

    /// Delete the record, returning its record id when the service deleted
    /// it. Records that were never saved return `None`.
    pub async fn delete<M: Model>(&self, record: &M) -> Result<Option<u64>> {
        let Some(record_id) = record.record_id() else {
            return Ok(None);
        };

        let op = DeleteRecord {
            table: M::schema().table_id().to_string(),
            record_id,
        };

        let deleted = self.exec(op).await?.rows.into_success()?;
        Ok(deleted.then_some(record_id))
    }

    /// Assign every value in `attributes` and save. Returns `false` without
    /// saving when `attributes` is empty.
    pub async fn update_attributes<M: Model>(&self, record: &mut M, attributes: Row) -> Result<bool> {
        if attributes.is_empty() {
            return Ok(false);
        }

        record.assign_attributes(attributes)?;
        self.save(record).await?;
        Ok(true)
    }

    /// Delete every record matching `filter`, returning how many were deleted.
    ///
    /// A filter that selects nothing in particular is rejected; use
    /// [`Db::purge_all`] to empty a table.
    pub async fn purge<M: Model>(&self, filter: impl Into<Filter>) -> Result<u64> {
        let schema = M::schema();
        let query = qbrecord_query::compile(&filter.into(), schema)?;

        if query.is_empty() {
            return Err(Error::invalid_argument(format!(
                "purge filter on `{}` is empty; use purge_all to delete every record",
                schema.table_id()
            )));
        }

        self.purge_source(schema, Source::Query(query)).await
    }

    /// Delete every record in the model's table.
    pub async fn purge_all<M: Model>(&self) -> Result<u64> {
        self.purge_source(M::schema(), Source::All).await
    }

    async fn purge_source(&self, schema: &TableSchema, source: Source) -> Result<u64> {
        let op = PurgeRecords {
            table: schema.table_id().to_string(),
            source,
        };

        self.exec(op).await?.rows.into_count()
    }
}
