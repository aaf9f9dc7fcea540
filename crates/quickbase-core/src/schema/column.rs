use super::FieldType;
use crate::driver::FieldDescriptor;

use indexmap::IndexMap;
use std::fmt;

/// The column id of the built-in Record#ID column.
pub const RECORD_ID_COLUMN: ColumnId = ColumnId(3);

/// Uniquely identifies a column within a table.
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct ColumnId(pub u32);

impl fmt::Debug for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ColumnId({})", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, fmt)
    }
}

impl From<u32> for ColumnId {
    fn from(value: u32) -> Self {
        ColumnId(value)
    }
}

/// A column descriptor in a table's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Uniquely identifies the column in the table.
    pub id: ColumnId,

    /// Display name of the column.
    pub label: String,

    /// The declared column type.
    pub ty: FieldType,

    /// Role tag assigned by the server, if any. Role-tagged columns are
    /// excluded from the bulk write projection.
    pub role: Option<String>,

    /// True if the column's value is computed server-side by a formula.
    pub is_virtual: bool,

    /// True if the column's value is looked up through a relationship.
    pub is_lookup: bool,

    /// True if the column aggregates values from a child table.
    pub is_summary: bool,

    /// True if the column does not appear by default in reports.
    pub hidden: bool,

    /// True if the column's text value may contain HTML.
    pub allow_html: bool,

    /// True if callers may introduce choices outside the declared choice set.
    pub allow_new_choices: bool,

    /// Allowed values for choice-constrained types.
    pub choices: Vec<String>,

    /// For composite types, maps a semantic sub-part name (for address:
    /// street, street2, city, region, postal, country) to the id of the
    /// column holding that part.
    pub composites: IndexMap<String, ColumnId>,

    // Choice edits queued locally until the next accept_changes pass.
    pending_choice_adds: Vec<String>,
    pending_choice_removes: Vec<String>,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, label: impl Into<String>, ty: FieldType) -> Column {
        Column {
            id: id.into(),
            label: label.into(),
            ty,
            role: None,
            is_virtual: false,
            is_lookup: false,
            is_summary: false,
            hidden: false,
            allow_html: false,
            allow_new_choices: false,
            choices: vec![],
            composites: IndexMap::new(),
            pending_choice_adds: vec![],
            pending_choice_removes: vec![],
        }
    }

    /// Builds a column from a schema response fragment.
    pub fn from_descriptor(desc: FieldDescriptor) -> Column {
        let mut column = Column::new(desc.id, desc.label, desc.ty);
        column.role = desc.role;
        column.is_virtual = desc.is_virtual;
        column.is_lookup = desc.is_lookup;
        column.is_summary = desc.is_summary;
        column.hidden = desc.hidden;
        column.allow_html = desc.allow_html;
        column.allow_new_choices = desc.allow_new_choices;
        column.choices = desc.choices;
        column.composites = desc.composites.into_iter().collect();
        column
    }

    /// Looks up the column id holding the given composite sub-part.
    pub fn composite(&self, part: &str) -> Option<ColumnId> {
        self.composites.get(part).copied()
    }

    /// Queues a choice to be added to the column's choice set on the next
    /// `accept_changes` pass.
    pub fn add_choice(&mut self, choice: impl Into<String>) {
        let choice = choice.into();
        if !self.choices.contains(&choice) {
            self.choices.push(choice.clone());
            self.pending_choice_adds.push(choice);
        }
    }

    /// Queues a choice to be removed from the column's choice set on the next
    /// `accept_changes` pass.
    pub fn remove_choice(&mut self, choice: &str) {
        if let Some(pos) = self.choices.iter().position(|c| c == choice) {
            self.choices.remove(pos);
            self.pending_choice_removes.push(choice.to_string());
        }
    }

    pub fn has_pending_choice_edits(&self) -> bool {
        !self.pending_choice_adds.is_empty() || !self.pending_choice_removes.is_empty()
    }

    /// Takes the queued choice edits, leaving the queues empty.
    pub fn take_pending_choice_edits(&mut self) -> (Vec<String>, Vec<String>) {
        (
            std::mem::take(&mut self.pending_choice_adds),
            std::mem::take(&mut self.pending_choice_removes),
        )
    }
}
