mod address;
pub use address::Address;

use crate::{schema::FieldType, Error, Result};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Timelike, Utc};
use std::fmt;

/// A single typed field value.
///
/// One variant per storage representation a column type dictates. Text-like
/// column types (text, multitext, email, phone, url, file, recordid) all use
/// the `Text` variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Float(f64),
    Currency(f64),
    Percent(f64),
    Rating(f64),
    Checkbox(bool),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    TimeOfDay(NaiveTime),
    Duration(TimeDelta),
    Address(Address),
}

impl Value {
    /// Decodes a wire-form value into the representation the column type
    /// dictates. An empty wire value decodes to `None`.
    pub fn from_wire(ty: FieldType, raw: &str) -> Result<Option<Value>> {
        use FieldType::*;

        if raw.is_empty() {
            return Ok(None);
        }

        Ok(Some(match ty {
            Date => Value::Date(epoch_millis_to_datetime(raw)?.date_naive()),
            Timestamp => Value::Timestamp(epoch_millis_to_datetime(raw)?),
            TimeOfDay => {
                let ms = parse_millis(raw)?;
                let time = NaiveTime::from_num_seconds_from_midnight_opt(
                    (ms / 1000) as u32,
                    ((ms % 1000) * 1_000_000) as u32,
                )
                .ok_or_else(|| {
                    Error::type_conversion(format!("`{raw}` is out of range for timeofday"))
                })?;
                Value::TimeOfDay(time)
            }
            Duration => Value::Duration(TimeDelta::milliseconds(parse_millis(raw)?)),
            Checkbox => Value::Checkbox(raw == "1" || raw == "true"),
            Percent => Value::Percent(parse_float(ty, raw)?),
            Rating => Value::Rating(parse_float(ty, raw)?),
            Float => Value::Float(parse_float(ty, raw)?),
            Currency => Value::Currency(parse_float(ty, raw)?),
            // Composite columns store no value; sub-columns carry the data.
            Address => return Ok(None),
            Empty | Text | MultiText | Email | Phone | Url | File | RecordId => {
                Value::Text(raw.to_string())
            }
        }))
    }

    /// Encodes the value into its wire form.
    pub fn to_wire(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Float(v) | Value::Currency(v) => v.to_string(),
            // The server hands percentages back as fractions; send them as
            // whole percents, rounded to dodge its round-trip bug.
            Value::Percent(v) => {
                let scaled = (v * 100.0 * 1_000_000.0).round() / 1_000_000.0;
                scaled.to_string()
            }
            Value::Rating(v) => v.to_string(),
            Value::Checkbox(v) => if *v { "1" } else { "0" }.to_string(),
            Value::Date(d) => d
                .and_time(NaiveTime::MIN)
                .and_utc()
                .timestamp_millis()
                .to_string(),
            Value::Timestamp(ts) => ts.timestamp_millis().to_string(),
            Value::TimeOfDay(t) => {
                let ms = t.num_seconds_from_midnight() as i64 * 1000
                    + (t.nanosecond() / 1_000_000) as i64;
                ms.to_string()
            }
            Value::Duration(d) => d.num_milliseconds().to_string(),
            Value::Address(_) => String::new(),
        }
    }

    /// Checks that this value is representable in the given column type.
    pub fn expect_type(&self, ty: FieldType) -> Result<()> {
        use FieldType::*;

        let ok = match self {
            Value::Text(_) => matches!(
                ty,
                Empty | Text | MultiText | Email | Phone | Url | File | RecordId
            ),
            Value::Float(_) => ty == Float,
            Value::Currency(_) => ty == Currency,
            Value::Percent(_) => ty == Percent,
            Value::Rating(v) => ty == Rating && (0.0..=5.0).contains(v),
            Value::Checkbox(_) => ty == Checkbox,
            Value::Date(_) => ty == Date,
            Value::Timestamp(_) => ty == Timestamp,
            Value::TimeOfDay(_) => ty == TimeOfDay,
            Value::Duration(_) => ty == Duration,
            Value::Address(_) => ty == Address,
        };

        if ok {
            Ok(())
        } else {
            Err(Error::type_conversion(format!(
                "cannot store a {} value in a `{ty}` column",
                self.variant_name()
            )))
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Text(_) => "text",
            Value::Float(_) => "float",
            Value::Currency(_) => "currency",
            Value::Percent(_) => "percent",
            Value::Rating(_) => "rating",
            Value::Checkbox(_) => "checkbox",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::TimeOfDay(_) => "timeofday",
            Value::Duration(_) => "duration",
            Value::Address(_) => "address",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn parse_millis(raw: &str) -> Result<i64> {
    raw.parse::<i64>()
        .map_err(|_| Error::type_conversion(format!("`{raw}` is not a millisecond count")))
}

fn parse_float(ty: FieldType, raw: &str) -> Result<f64> {
    raw.parse::<f64>()
        .map_err(|_| Error::type_conversion(format!("`{raw}` is not a valid `{ty}` value")))
}

fn epoch_millis_to_datetime(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(parse_millis(raw)?)
        .ok_or_else(|| Error::type_conversion(format!("`{raw}` is out of range for a timestamp")))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Address(a) => fmt::Display::fmt(a, f),
            other => f.write_str(&other.to_wire()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Checkbox(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl From<NaiveTime> for Value {
    fn from(value: NaiveTime) -> Self {
        Value::TimeOfDay(value)
    }
}

impl From<TimeDelta> for Value {
    fn from(value: TimeDelta) -> Self {
        Value::Duration(value)
    }
}

impl From<Address> for Value {
    fn from(value: Address) -> Self {
        Value::Address(value)
    }
}
