use crate::{Record, Records};

use quickbase_core::{
    driver::{operation, SchemaFragment, Transport},
    query::Query,
    schema::{Column, ColumnId, Columns},
    Error, Result, Value,
};

use std::sync::Arc;

/// A handle to one remote table: its schema cache, its record working set,
/// and the transport used to reach the service.
///
/// Not thread-safe. Every remote interaction is a blocking round trip on the
/// calling thread; callers sharing a table across threads must serialize
/// access externally.
#[derive(Debug)]
pub struct Table {
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) dbid: String,
    pub(crate) name: Option<String>,
    pub(crate) columns: Columns,
    pub(crate) records: Records,

    /// The column serving as the record's effective primary identity:
    /// the schema's declared key, or the record-id column when none is.
    pub(crate) key_fid: Option<ColumnId>,
    pub(crate) key_cidx: Option<usize>,
}

impl Table {
    pub fn new(transport: Arc<dyn Transport>, dbid: impl Into<String>) -> Table {
        Table {
            transport,
            dbid: dbid.into(),
            name: None,
            columns: Columns::new(),
            records: Records::new(),
            key_fid: None,
            key_cidx: None,
        }
    }

    pub fn dbid(&self) -> &str {
        &self.dbid
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn columns(&self) -> &Columns {
        &self.columns
    }

    /// Mutable access to the schema cache, for queueing choice edits.
    pub fn columns_mut(&mut self) -> &mut Columns {
        &mut self.columns
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Splits the table into its schema cache and a mutable working set, so
    /// records can be edited against the current schema.
    pub fn parts_mut(&mut self) -> (&Columns, &mut Records) {
        (&self.columns, &mut self.records)
    }

    pub fn key_fid(&self) -> Option<ColumnId> {
        self.key_fid
    }

    pub fn key_column_index(&self) -> Option<usize> {
        self.key_cidx
    }

    /// Appends an empty `New` record to the working set and returns its index.
    pub fn new_record(&mut self) -> usize {
        self.records.push(Record::new());
        self.records.len() - 1
    }

    /// Writes a field on a record in the working set.
    pub fn set_value(
        &mut self,
        record: usize,
        column: impl Into<ColumnId>,
        value: impl Into<Value>,
    ) -> Result<()> {
        let id = column.into();
        let (columns, records) = (&self.columns, &mut self.records);
        let record = records
            .get_mut(record)
            .ok_or_else(|| Error::validation(format!("no record at index {record}")))?;
        record.set(columns, id, value)
    }

    /// Clears a field on a record in the working set.
    pub fn clear_value(&mut self, record: usize, column: impl Into<ColumnId>) -> Result<()> {
        let id = column.into();
        let (columns, records) = (&self.columns, &mut self.records);
        let record = records
            .get_mut(record)
            .ok_or_else(|| Error::validation(format!("no record at index {record}")))?;
        record.clear_field(columns, id)
    }

    /// Reads a field from a record in the working set.
    pub fn value(&self, record: usize, column: impl Into<ColumnId>) -> Result<Option<Value>> {
        let rec = self
            .records
            .get(record)
            .ok_or_else(|| Error::validation(format!("no record at index {record}")))?;
        rec.get(&self.columns, column.into())
    }

    /// Removes a record from the working set. The remote delete is issued
    /// eagerly, here; the next `accept_changes` pass only drops the tracking
    /// entry.
    pub fn delete_record(&mut self, index: usize) -> Result<()> {
        let record = self
            .records
            .get(index)
            .ok_or_else(|| Error::validation(format!("no record at index {index}")))?;

        if let Some(record_id) = record.record_id() {
            self.transport
                .execute(
                    operation::DeleteRecord {
                        dbid: self.dbid.clone(),
                        record_id,
                    }
                    .into(),
                )?
                .expect_ok()?;
            let mut record = self.records.remove_at(index);
            record.mark_deleted();
            record.mark_unclean();
            self.records.track_removed(record);
        } else {
            // Never committed; nothing on the server to delete.
            self.records.remove_at(index);
        }
        Ok(())
    }

    /// Refetches the table schema and rebuilds the schema cache.
    pub fn refresh_columns(&mut self) -> Result<()> {
        let schema = self
            .transport
            .execute(
                operation::GetSchema {
                    dbid: self.dbid.clone(),
                }
                .into(),
            )?
            .into_schema()?;
        self.load_schema_fragment(schema)
    }

    /// Counts the records matching a filter, without fetching them.
    pub fn query_count(&self, filter: &Query) -> Result<u64> {
        self.transport
            .execute(
                operation::QueryCount {
                    dbid: self.dbid.clone(),
                    query: Some(filter.to_string()),
                    qid: None,
                }
                .into(),
            )?
            .into_count()
    }

    /// Counts the records a saved query matches.
    pub fn query_count_saved(&self, qid: u32) -> Result<u64> {
        self.transport
            .execute(
                operation::QueryCount {
                    dbid: self.dbid.clone(),
                    query: None,
                    qid: Some(qid),
                }
                .into(),
            )?
            .into_count()
    }

    /// The server's total record count for the table.
    pub fn server_record_count(&self) -> Result<u64> {
        self.transport
            .execute(
                operation::GetNumRecords {
                    dbid: self.dbid.clone(),
                }
                .into(),
            )?
            .into_count()
    }

    /// Deletes every record in the table and clears the working set.
    pub fn purge_records(&mut self) -> Result<()> {
        self.purge(None, None)
    }

    /// Deletes the records matching a filter and clears the working set.
    pub fn purge_matching(&mut self, filter: &Query) -> Result<()> {
        self.purge(Some(filter.to_string()), None)
    }

    /// Deletes the records a saved query matches and clears the working set.
    pub fn purge_saved(&mut self, qid: u32) -> Result<()> {
        self.purge(None, Some(qid))
    }

    fn purge(&mut self, query: Option<String>, qid: Option<u32>) -> Result<()> {
        self.transport
            .execute(
                operation::PurgeRecords {
                    dbid: self.dbid.clone(),
                    query,
                    qid,
                }
                .into(),
            )?
            .expect_ok()?;
        self.records.clear();
        Ok(())
    }

    /// Drops the working set and schema cache without touching the server.
    pub fn clear(&mut self) {
        self.records.clear();
        self.columns.clear();
    }

    /// Replaces the schema cache from a response fragment and recomputes the
    /// key column.
    pub(crate) fn load_schema_fragment(&mut self, schema: SchemaFragment) -> Result<()> {
        self.columns.clear();
        for descriptor in schema.fields {
            self.columns.push(Column::from_descriptor(descriptor))?;
        }
        self.columns.validate_composites()?;
        self.key_fid = schema
            .key_fid
            .or_else(|| self.columns.record_id_column().map(|column| column.id));
        self.key_cidx = self.key_fid.and_then(|id| self.columns.position(id));
        Ok(())
    }

    /// Appends the records of one response page to the working set, in
    /// server response order.
    pub(crate) fn load_records(
        &mut self,
        fragments: Vec<quickbase_core::driver::RecordFragment>,
    ) -> Result<()> {
        for fragment in fragments {
            let record = Record::from_fragment(&self.columns, fragment)?;
            self.records.push(record);
        }
        Ok(())
    }
}
