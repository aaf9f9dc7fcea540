//! The change reconciler.
//!
//! `accept_changes` turns the working set's pending inserts, updates, and
//! uncertain records into the minimum necessary remote write calls, then
//! assigns server-issued identities back onto the local records.

use crate::{RecordState, Table};

use quickbase_core::{
    driver::{operation, Operation},
    payload,
    schema::{ColumnId, FieldType},
    Error, Result,
};

impl Table {
    /// Reconciles the working set with the server.
    ///
    /// Inserts and updates go through one bulk tabular upload when the schema
    /// has no file-typed column, and through individual calls otherwise.
    /// Records flagged unclean are processed individually, last. A fault
    /// propagates immediately and leaves the working set partially
    /// reconciled: records already confirmed keep their new state, the rest
    /// keep their pre-call state.
    pub fn accept_changes(&mut self) -> Result<()> {
        // Deletes were issued eagerly when the records left the working set;
        // only the tracking entries remain.
        self.records.flush_removed();

        self.reconcile_column_choices()?;

        let mut to_insert = Vec::new();
        let mut to_update = Vec::new();
        let mut unclean = Vec::new();
        for (index, record) in self.records.iter().enumerate() {
            if record.is_unclean() {
                unclean.push(index);
                continue;
            }
            match record.state() {
                RecordState::New => to_insert.push(index),
                RecordState::Modified => to_update.push(index),
                _ => {}
            }
        }

        let has_file_column = self.columns.has_file_column();
        if !has_file_column && to_insert.len() + to_update.len() > 0 {
            self.bulk_upload(&to_insert, &to_update)?;
        } else {
            for &index in to_insert.iter().chain(&to_update) {
                self.commit_record(index)?;
            }
        }

        for &index in &unclean {
            self.commit_record(index)?;
        }
        Ok(())
    }

    /// One bulk tabular call carrying every insert row then every update row.
    /// The server answers with one identity per inserted row, in request
    /// order.
    fn bulk_upload(&mut self, to_insert: &[usize], to_update: &[usize]) -> Result<()> {
        let projection = self.bulk_projection();
        let clist = projection
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");

        let mut rows = Vec::with_capacity(to_insert.len() + to_update.len());
        for &index in to_insert.iter().chain(to_update) {
            if let Some(record) = self.records.get(index) {
                rows.push(record.csv_row(&self.columns, &projection));
            }
        }

        tracing::debug!(
            inserts = to_insert.len(),
            updates = to_update.len(),
            "bulk tabular upload"
        );

        let record_ids = self
            .transport
            .execute(
                operation::ImportTable {
                    dbid: self.dbid.clone(),
                    clist,
                    rows: payload::csv_block(&rows),
                    time_in_utc: true,
                }
                .into(),
            )?
            .into_imported()?;

        if record_ids.len() < to_insert.len() {
            return Err(Error::invalid_response("one record id per inserted row"));
        }
        for (&index, &record_id) in to_insert.iter().zip(&record_ids) {
            if let Some(record) = self.records.get_mut(index) {
                record.finalize_insert(record_id);
            }
        }
        for &index in to_update {
            if let Some(record) = self.records.get_mut(index) {
                record.finalize();
            }
        }
        Ok(())
    }

    /// The bulk upload's column projection: every column the server accepts a
    /// direct value for, plus the key column even when it would otherwise be
    /// excluded.
    fn bulk_projection(&self) -> Vec<ColumnId> {
        self.columns
            .iter()
            .filter(|column| {
                let plain = !column.is_virtual
                    && !column.is_lookup
                    && !column.is_summary
                    && column.role.is_none();
                match self.key_fid {
                    Some(key) => plain || column.id == key,
                    None => plain || column.ty == FieldType::RecordId,
                }
            })
            .map(|column| column.id)
            .collect()
    }

    /// Applies one record's pending change as an individual write call.
    fn commit_record(&mut self, index: usize) -> Result<()> {
        let Some(record) = self.records.get(index) else {
            return Ok(());
        };

        match record.state() {
            RecordState::New => {
                let fields = record.insert_fields(&self.columns);
                let record_id = self
                    .transport
                    .execute(
                        operation::AddRecord {
                            dbid: self.dbid.clone(),
                            fields,
                        }
                        .into(),
                    )?
                    .into_added()?;
                if let Some(record) = self.records.get_mut(index) {
                    record.finalize_insert(record_id);
                }
            }
            RecordState::Modified => {
                let Some(record_id) = record.record_id() else {
                    return Err(Error::validation(
                        "modified record has no server identity",
                    ));
                };
                let fields = record.updated_fields();
                self.transport
                    .execute(
                        operation::EditRecord {
                            dbid: self.dbid.clone(),
                            record_id,
                            fields,
                        }
                        .into(),
                    )?
                    .expect_ok()?;
                if let Some(record) = self.records.get_mut(index) {
                    record.finalize();
                }
            }
            // Only the pending flag was uncertain; nothing to send.
            _ => {
                if let Some(record) = self.records.get_mut(index) {
                    record.finalize();
                }
            }
        }
        Ok(())
    }

    /// Flushes choice edits queued on columns, one call per direction per
    /// column.
    fn reconcile_column_choices(&mut self) -> Result<()> {
        let mut ops: Vec<Operation> = Vec::new();
        for column in self.columns.iter_mut() {
            if !column.has_pending_choice_edits() {
                continue;
            }
            let (adds, removes) = column.take_pending_choice_edits();
            if !adds.is_empty() {
                ops.push(
                    operation::FieldAddChoices {
                        dbid: self.dbid.clone(),
                        fid: column.id,
                        choices: adds,
                    }
                    .into(),
                );
            }
            if !removes.is_empty() {
                ops.push(
                    operation::FieldRemoveChoices {
                        dbid: self.dbid.clone(),
                        fid: column.id,
                        choices: removes,
                    }
                    .into(),
                );
            }
        }
        for op in ops {
            self.transport.execute(op)?.expect_ok()?;
        }
        Ok(())
    }
}
