use super::Operation;

#[derive(Debug, Clone)]
pub struct Query {
    /// Table to query.
    pub dbid: String,

    /// Filter expression. `None` matches all records.
    pub query: Option<String>,

    /// Dotted column projection list, or `a` for all columns.
    pub clist: Option<String>,

    /// Dotted sort column list.
    pub slist: Option<String>,

    /// Dotted options string (paging directives and other server options).
    pub options: Option<String>,

    /// Saved query id, used instead of an ad-hoc filter.
    pub qid: Option<u32>,

    /// Request the structured response format.
    pub fmt_structured: bool,
}

impl Query {
    pub fn new(dbid: impl Into<String>) -> Query {
        Query {
            dbid: dbid.into(),
            query: None,
            clist: None,
            slist: None,
            options: None,
            qid: None,
            fmt_structured: true,
        }
    }
}

impl From<Query> for Operation {
    fn from(value: Query) -> Self {
        Self::Query(value)
    }
}
