use crate::Field;

use quickbase_core::{
    driver::RecordFragment,
    payload,
    schema::{ColumnId, Columns, FieldType},
    value::{Address, Value},
    Error, Result,
};

use indexmap::IndexMap;

/// Lifecycle state of a record in the working set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordState {
    /// In sync with the server.
    #[default]
    Unchanged,

    /// Created locally; has no server identity until reconciled.
    New,

    /// Has a server identity but carries local field changes.
    Modified,

    /// Removed from the working set; its remote delete was issued eagerly.
    Deleted,
}

/// One record of a table: a server identity (absent until the first commit)
/// and a mapping from column id to field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    record_id: Option<u32>,
    fields: IndexMap<ColumnId, Field>,
    state: RecordState,
    unclean: bool,
}

impl Record {
    /// Creates an empty record in the `New` state.
    pub fn new() -> Record {
        Record {
            record_id: None,
            fields: IndexMap::new(),
            state: RecordState::New,
            unclean: false,
        }
    }

    /// Builds a record from a query response fragment, coercing each wire
    /// value into the representation its column type dictates.
    pub fn from_fragment(columns: &Columns, fragment: RecordFragment) -> Result<Record> {
        let mut record_id = fragment.record_id;
        let mut fields = IndexMap::with_capacity(fragment.fields.len());

        for (id, raw) in fragment.fields {
            let column = columns.get(id).ok_or_else(|| {
                Error::validation(format!("record references column {id} missing from schema"))
            })?;
            if column.ty == FieldType::RecordId && record_id.is_none() {
                record_id = raw.parse().ok();
            }
            let value = Value::from_wire(column.ty, &raw)?;
            fields.insert(
                id,
                Field {
                    value,
                    update: false,
                },
            );
        }

        Ok(Record {
            record_id,
            fields,
            state: RecordState::Unchanged,
            unclean: false,
        })
    }

    /// The server-assigned identity, absent for records not yet committed.
    pub fn record_id(&self) -> Option<u32> {
        self.record_id
    }

    pub fn state(&self) -> RecordState {
        self.state
    }

    /// True while the record's committed state is uncertain pending
    /// reconciliation.
    pub fn is_unclean(&self) -> bool {
        self.unclean
    }

    pub fn field(&self, id: ColumnId) -> Option<&Field> {
        self.fields.get(&id)
    }

    /// Reads a field value. Composite columns assemble their value from the
    /// sub-columns named in the column's composite map.
    pub fn get(&self, columns: &Columns, id: ColumnId) -> Result<Option<Value>> {
        let column = columns
            .get(id)
            .ok_or_else(|| Error::validation(format!("unknown column {id}")))?;

        if column.ty != FieldType::Address {
            return Ok(self.fields.get(&id).and_then(|field| field.value.clone()));
        }

        let mut address = Address::default();
        for part in Address::part_names() {
            let sub = column.composite(part).ok_or_else(|| {
                Error::validation(format!(
                    "address column {id} has no composite mapping for `{part}`"
                ))
            })?;
            let text = match self.fields.get(&sub).and_then(|field| field.value.as_ref()) {
                Some(Value::Text(s)) => s.clone(),
                Some(other) => other.to_wire(),
                None => String::new(),
            };
            match part {
                "street" => address.line1 = text,
                "street2" => address.line2 = text,
                "city" => address.city = text,
                "region" => address.region = text,
                "postal" => address.postal = text,
                _ => address.country = text,
            }
        }
        Ok(Some(Value::Address(address)))
    }

    /// Writes a field value.
    ///
    /// Setting a field to the value it already holds is a no-op; otherwise
    /// the field is flagged for upload and an `Unchanged` record becomes
    /// `Modified`. Address values are scattered onto the sub-columns named in
    /// the composite map; the composite column itself stores nothing.
    pub fn set(
        &mut self,
        columns: &Columns,
        id: ColumnId,
        value: impl Into<Value>,
    ) -> Result<()> {
        self.set_opt(columns, id, Some(value.into()))
    }

    /// Clears a field value, flagging the field for upload if it held one.
    pub fn clear_field(&mut self, columns: &Columns, id: ColumnId) -> Result<()> {
        self.set_opt(columns, id, None)
    }

    fn set_opt(&mut self, columns: &Columns, id: ColumnId, value: Option<Value>) -> Result<()> {
        let column = columns
            .get(id)
            .ok_or_else(|| Error::validation(format!("unknown column {id}")))?;

        if column.ty == FieldType::Address {
            let Some(value) = value else { return Ok(()) };
            value.expect_type(column.ty)?;
            let Value::Address(address) = value else {
                unreachable!();
            };
            let parts: Vec<(ColumnId, String)> = address
                .parts()
                .into_iter()
                .map(|(name, part)| {
                    column
                        .composite(name)
                        .map(|sub| (sub, part.to_string()))
                        .ok_or_else(|| {
                            Error::validation(format!(
                                "address column {id} has no composite mapping for `{name}`"
                            ))
                        })
                })
                .collect::<Result<_>>()?;
            for (sub, part) in parts {
                self.set_opt(columns, sub, Some(Value::Text(part)))?;
            }
            return Ok(());
        }

        if let Some(value) = &value {
            value.expect_type(column.ty)?;
        }

        let field = self.fields.entry(id).or_default();
        if field.value == value {
            return Ok(());
        }
        field.value = value;
        field.update = true;
        if self.state == RecordState::Unchanged {
            self.state = RecordState::Modified;
        }
        Ok(())
    }

    /// One CSV row for the bulk upload, fields ordered per the projection.
    /// The record-id column renders the server identity (empty for inserts).
    pub(crate) fn csv_row(&self, columns: &Columns, projection: &[ColumnId]) -> String {
        let values = projection.iter().map(|id| {
            if columns.get(*id).is_some_and(|c| c.ty == FieldType::RecordId) {
                return self.record_id.map(|rid| rid.to_string()).unwrap_or_default();
            }
            self.fields
                .get(id)
                .and_then(|field| field.value.as_ref())
                .map(Value::to_wire)
                .unwrap_or_default()
        });
        payload::csv_row(values.collect::<Vec<_>>())
    }

    /// Wire-form values for a single-record insert: every populated field
    /// whose column the server will accept a value for.
    pub(crate) fn insert_fields(&self, columns: &Columns) -> Vec<(ColumnId, String)> {
        self.fields
            .iter()
            .filter_map(|(id, field)| {
                let column = columns.get(*id)?;
                if column.is_virtual
                    || column.is_lookup
                    || column.is_summary
                    || column.ty == FieldType::RecordId
                    || column.ty.is_composite()
                {
                    return None;
                }
                let value = field.value.as_ref()?;
                Some((*id, value.to_wire()))
            })
            .collect()
    }

    /// Wire-form values for a single-record update: only the fields flagged
    /// since the last reconcile. A cleared field uploads as empty.
    pub(crate) fn updated_fields(&self) -> Vec<(ColumnId, String)> {
        self.fields
            .iter()
            .filter(|(_, field)| field.update)
            .map(|(id, field)| {
                let wire = field.value.as_ref().map(Value::to_wire).unwrap_or_default();
                (*id, wire)
            })
            .collect()
    }

    /// Marks the record reconciled, assigning the server identity handed back
    /// for its insert.
    pub(crate) fn finalize_insert(&mut self, record_id: u32) {
        self.record_id = Some(record_id);
        self.finalize();
    }

    /// Marks the record reconciled: `Unchanged`, clean, no dirty fields.
    pub(crate) fn finalize(&mut self) {
        self.state = RecordState::Unchanged;
        self.unclean = false;
        for field in self.fields.values_mut() {
            field.update = false;
        }
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.state = RecordState::Deleted;
    }

    /// Flags the record's committed state as uncertain. It will be
    /// re-applied individually on the next `accept_changes` pass.
    pub fn mark_unclean(&mut self) {
        self.unclean = true;
    }
}
