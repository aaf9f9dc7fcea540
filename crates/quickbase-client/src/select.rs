use quickbase_core::{
    driver::operation,
    query::Query,
    schema::{ColumnId, RECORD_ID_COLUMN},
};

/// Builder for a filtered/sorted read against a table.
#[derive(Debug, Clone, Default)]
pub struct Select {
    filter: Option<Query>,
    columns: Vec<ColumnId>,
    sort: Vec<ColumnId>,
    options: Option<String>,
    qid: Option<u32>,
}

impl Select {
    /// Selects every record.
    pub fn all() -> Select {
        Select::default()
    }

    /// Selects the records matching a filter expression.
    pub fn filtered(filter: Query) -> Select {
        Select {
            filter: Some(filter),
            ..Select::default()
        }
    }

    /// Runs a query saved on the server.
    pub fn saved(qid: u32) -> Select {
        Select {
            qid: Some(qid),
            ..Select::default()
        }
    }

    /// Restricts the column projection. The record-id column is always
    /// included, first.
    pub fn columns<I, C>(mut self, columns: I) -> Select
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnId>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Sorts by the given columns, in order.
    pub fn sort_by<I, C>(mut self, columns: I) -> Select
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnId>,
    {
        self.sort = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Passes a raw dotted options string (paging directives and other
    /// server options).
    pub fn options(mut self, options: impl Into<String>) -> Select {
        self.options = Some(options.into());
        self
    }

    pub(crate) fn into_operation(self, dbid: &str) -> operation::Query {
        let mut op = operation::Query::new(dbid);
        op.query = self.filter.map(|f| f.to_string());
        op.qid = self.qid;
        op.clist = Some(column_list(&self.columns));
        op.slist = if self.sort.is_empty() {
            None
        } else {
            Some(dotted(&self.sort))
        };
        op.options = self.options;
        op
    }
}

/// An explicit projection is seeded with the record-id column so every
/// returned record carries its identity; an empty one asks for all columns.
fn column_list(columns: &[ColumnId]) -> String {
    if columns.is_empty() {
        return "a".to_string();
    }
    let mut list = vec![RECORD_ID_COLUMN];
    list.extend(columns.iter().filter(|id| **id != RECORD_ID_COLUMN));
    dotted(&list)
}

fn dotted(columns: &[ColumnId]) -> String {
    columns
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}
