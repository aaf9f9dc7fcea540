use super::Operation;

#[derive(Debug, Clone)]
pub struct DeleteRecord {
    /// Table holding the record.
    pub dbid: String,

    /// Server identity of the record to delete.
    pub record_id: u32,
}

impl From<DeleteRecord> for Operation {
    fn from(value: DeleteRecord) -> Self {
        Self::DeleteRecord(value)
    }
}
