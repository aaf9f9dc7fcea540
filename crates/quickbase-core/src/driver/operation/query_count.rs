use super::Operation;

#[derive(Debug, Clone)]
pub struct QueryCount {
    /// Table to query.
    pub dbid: String,

    /// Filter expression. `None` counts all records.
    pub query: Option<String>,

    /// Saved query id, used instead of an ad-hoc filter.
    pub qid: Option<u32>,
}

impl From<QueryCount> for Operation {
    fn from(value: QueryCount) -> Self {
        Self::QueryCount(value)
    }
}
