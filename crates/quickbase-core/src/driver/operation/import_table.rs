use super::Operation;

#[derive(Debug, Clone)]
pub struct ImportTable {
    /// Table to import into.
    pub dbid: String,

    /// Dotted column-id projection naming the fields each row carries.
    pub clist: String,

    /// The CSV block: one row per record, CRLF row separators.
    pub rows: String,

    /// Interpret timestamps in the block as UTC.
    pub time_in_utc: bool,
}

impl From<ImportTable> for Operation {
    fn from(value: ImportTable) -> Self {
        Self::ImportTable(value)
    }
}
