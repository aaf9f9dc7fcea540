use super::Operation;

use crate::schema::ColumnId;

#[derive(Debug, Clone)]
pub struct AddRecord {
    /// Table to insert into.
    pub dbid: String,

    /// Wire-form field values, one per populated column.
    pub fields: Vec<(ColumnId, String)>,
}

impl From<AddRecord> for Operation {
    fn from(value: AddRecord) -> Self {
        Self::AddRecord(value)
    }
}
