use quickbase_core::Value;

/// A single typed value belonging to one record and one column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Field {
    pub(crate) value: Option<Value>,
    pub(crate) update: bool,
}

impl Field {
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// True if the value changed since the record was last reconciled.
    pub fn is_dirty(&self) -> bool {
        self.update
    }
}
