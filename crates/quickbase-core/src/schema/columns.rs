use super::{Column, ColumnId, FieldType};
use crate::{Error, Result};

/// A table's schema cache: the ordered collection of column descriptors,
/// rebuilt from each query response that carries schema.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Columns {
    items: Vec<Column>,
}

impl Columns {
    pub fn new() -> Columns {
        Columns::default()
    }

    /// Appends a column. Column ids are unique within a table.
    pub fn push(&mut self, column: Column) -> Result<()> {
        if self.get(column.id).is_some() {
            return Err(Error::validation(format!(
                "duplicate column id {} in table schema",
                column.id
            )));
        }
        self.items.push(column);
        Ok(())
    }

    pub fn get(&self, id: ColumnId) -> Option<&Column> {
        self.items.iter().find(|column| column.id == id)
    }

    pub fn get_mut(&mut self, id: ColumnId) -> Option<&mut Column> {
        self.items.iter_mut().find(|column| column.id == id)
    }

    /// Positional index of the column with the given id.
    pub fn position(&self, id: ColumnId) -> Option<usize> {
        self.items.iter().position(|column| column.id == id)
    }

    /// The first column declared with the record-id type, if any.
    pub fn record_id_column(&self) -> Option<&Column> {
        self.items.iter().find(|column| column.ty == FieldType::RecordId)
    }

    pub fn has_file_column(&self) -> bool {
        self.items.iter().any(|column| column.ty == FieldType::File)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Checks that every composite sub-column reference resolves to a column
    /// in this collection. Called after a schema rebuild completes, since
    /// composites may reference columns that appear later in the response.
    pub fn validate_composites(&self) -> Result<()> {
        for column in &self.items {
            for (part, target) in &column.composites {
                if self.get(*target).is_none() {
                    return Err(Error::validation(format!(
                        "column {} composite part `{part}` references unknown column {target}",
                        column.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Columns {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
