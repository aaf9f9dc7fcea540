use super::Operation;

#[derive(Debug, Clone)]
pub struct PurgeRecords {
    /// Table to purge.
    pub dbid: String,

    /// Filter expression. `None` purges every record.
    pub query: Option<String>,

    /// Saved query id, used instead of an ad-hoc filter.
    pub qid: Option<u32>,
}

impl From<PurgeRecords> for Operation {
    fn from(value: PurgeRecords) -> Self {
        Self::PurgeRecords(value)
    }
}
