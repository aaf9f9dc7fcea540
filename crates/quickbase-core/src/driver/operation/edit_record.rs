use super::Operation;

use crate::schema::ColumnId;

#[derive(Debug, Clone)]
pub struct EditRecord {
    /// Table holding the record.
    pub dbid: String,

    /// Server identity of the record to update.
    pub record_id: u32,

    /// Wire-form values for the fields being changed.
    pub fields: Vec<(ColumnId, String)>,
}

impl From<EditRecord> for Operation {
    fn from(value: EditRecord) -> Self {
        Self::EditRecord(value)
    }
}
