use super::Operation;

use crate::schema::ColumnId;

#[derive(Debug, Clone)]
pub struct FieldAddChoices {
    /// Table holding the column.
    pub dbid: String,

    /// The choice-constrained column.
    pub fid: ColumnId,

    /// Choices to add.
    pub choices: Vec<String>,
}

impl From<FieldAddChoices> for Operation {
    fn from(value: FieldAddChoices) -> Self {
        Self::FieldAddChoices(value)
    }
}
