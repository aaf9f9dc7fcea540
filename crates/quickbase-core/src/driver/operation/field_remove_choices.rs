use super::Operation;

use crate::schema::ColumnId;

#[derive(Debug, Clone)]
pub struct FieldRemoveChoices {
    /// Table holding the column.
    pub dbid: String,

    /// The choice-constrained column.
    pub fid: ColumnId,

    /// Choices to remove.
    pub choices: Vec<String>,
}

impl From<FieldRemoveChoices> for Operation {
    fn from(value: FieldRemoveChoices) -> Self {
        Self::FieldRemoveChoices(value)
    }
}
