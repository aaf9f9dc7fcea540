mod add_record;
pub use add_record::AddRecord;

mod delete_record;
pub use delete_record::DeleteRecord;

mod edit_record;
pub use edit_record::EditRecord;

mod field_add_choices;
pub use field_add_choices::FieldAddChoices;

mod field_remove_choices;
pub use field_remove_choices::FieldRemoveChoices;

mod get_num_records;
pub use get_num_records::GetNumRecords;

mod get_schema;
pub use get_schema::GetSchema;

mod import_table;
pub use import_table::ImportTable;

mod purge_records;
pub use purge_records::PurgeRecords;

mod query;
pub use query::Query;

mod query_count;
pub use query_count::QueryCount;

/// One logical remote call.
#[derive(Debug, Clone)]
pub enum Operation {
    /// Execute a filtered/sorted read against the table.
    Query(Query),

    /// Count the records a filter matches, without fetching them.
    QueryCount(QueryCount),

    /// Fetch the table schema.
    GetSchema(GetSchema),

    /// Fetch the table's total record count.
    GetNumRecords(GetNumRecords),

    /// Bulk tabular upload of insert and update rows.
    ImportTable(ImportTable),

    /// Insert a single record.
    AddRecord(AddRecord),

    /// Update a single record by its server identity.
    EditRecord(EditRecord),

    /// Delete a single record by its server identity.
    DeleteRecord(DeleteRecord),

    /// Delete every record a filter matches.
    PurgeRecords(PurgeRecords),

    /// Add values to a column's choice set.
    FieldAddChoices(FieldAddChoices),

    /// Remove values from a column's choice set.
    FieldRemoveChoices(FieldRemoveChoices),
}

impl Operation {
    /// The table the operation targets.
    pub fn dbid(&self) -> &str {
        use Operation::*;

        match self {
            Query(op) => &op.dbid,
            QueryCount(op) => &op.dbid,
            GetSchema(op) => &op.dbid,
            GetNumRecords(op) => &op.dbid,
            ImportTable(op) => &op.dbid,
            AddRecord(op) => &op.dbid,
            EditRecord(op) => &op.dbid,
            DeleteRecord(op) => &op.dbid,
            PurgeRecords(op) => &op.dbid,
            FieldAddChoices(op) => &op.dbid,
            FieldRemoveChoices(op) => &op.dbid,
        }
    }
}
