use crate::{Error, Result};

use std::fmt;

/// The declared type of a QuickBase column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Empty,
    Text,
    MultiText,
    Float,
    Currency,
    Percent,
    Rating,
    Checkbox,
    Date,
    Timestamp,
    TimeOfDay,
    Duration,
    Email,
    Phone,
    Url,
    File,
    Address,
    RecordId,
}

impl FieldType {
    /// The `field_type` name the server uses for this type.
    pub fn wire_name(self) -> &'static str {
        use FieldType::*;

        match self {
            Empty => "empty",
            Text => "text",
            MultiText => "multitext",
            Float => "float",
            Currency => "currency",
            Percent => "percent",
            Rating => "rating",
            Checkbox => "checkbox",
            Date => "date",
            Timestamp => "timestamp",
            TimeOfDay => "timeofday",
            Duration => "duration",
            Email => "email",
            Phone => "phonenumber",
            Url => "url",
            File => "file",
            Address => "address",
            RecordId => "recordid",
        }
    }

    /// Parses a server `field_type` name.
    pub fn from_wire_name(name: &str) -> Result<FieldType> {
        use FieldType::*;

        Ok(match name {
            "empty" => Empty,
            "text" => Text,
            "multitext" => MultiText,
            "float" => Float,
            "currency" => Currency,
            "percent" => Percent,
            "rating" => Rating,
            "checkbox" => Checkbox,
            "date" => Date,
            "timestamp" => Timestamp,
            "timeofday" => TimeOfDay,
            "duration" => Duration,
            "email" => Email,
            "phonenumber" => Phone,
            "url" => Url,
            "file" => File,
            "address" => Address,
            "recordid" => RecordId,
            _ => return Err(Error::validation(format!("unknown field type `{name}`"))),
        })
    }

    /// Composite types store no value of their own; their fields delegate to
    /// sub-columns.
    pub fn is_composite(self) -> bool {
        matches!(self, FieldType::Address)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
