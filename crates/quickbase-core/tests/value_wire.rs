use quickbase_core::{schema::FieldType, Value};

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta};
use pretty_assertions::assert_eq;

#[test]
fn dates_travel_as_epoch_milliseconds() {
    let value = Value::from_wire(FieldType::Date, "1577923200000")
        .unwrap()
        .unwrap();
    assert_eq!(
        value,
        Value::Date(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap())
    );
    assert_eq!(value.to_wire(), "1577923200000");
}

#[test]
fn timestamps_keep_sub_second_precision() {
    let value = Value::from_wire(FieldType::Timestamp, "1577923230500")
        .unwrap()
        .unwrap();
    assert_eq!(
        value,
        Value::Timestamp(DateTime::from_timestamp_millis(1577923230500).unwrap())
    );
    assert_eq!(value.to_wire(), "1577923230500");
}

#[test]
fn time_of_day_is_milliseconds_since_midnight() {
    let value = Value::from_wire(FieldType::TimeOfDay, "3661500")
        .unwrap()
        .unwrap();
    assert_eq!(
        value,
        Value::TimeOfDay(NaiveTime::from_hms_milli_opt(1, 1, 1, 500).unwrap())
    );
    assert_eq!(value.to_wire(), "3661500");
}

#[test]
fn durations_are_millisecond_counts() {
    let value = Value::from_wire(FieldType::Duration, "90000")
        .unwrap()
        .unwrap();
    assert_eq!(value, Value::Duration(TimeDelta::seconds(90)));
    assert_eq!(value.to_wire(), "90000");
}

#[test]
fn checkbox_accepts_both_wire_spellings() {
    for raw in ["1", "true"] {
        let value = Value::from_wire(FieldType::Checkbox, raw).unwrap().unwrap();
        assert_eq!(value, Value::Checkbox(true));
    }
    let value = Value::from_wire(FieldType::Checkbox, "0").unwrap().unwrap();
    assert_eq!(value, Value::Checkbox(false));

    assert_eq!(Value::Checkbox(true).to_wire(), "1");
    assert_eq!(Value::Checkbox(false).to_wire(), "0");
}

#[test]
fn percentages_arrive_as_fractions_and_leave_as_whole_percents() {
    let value = Value::from_wire(FieldType::Percent, "0.155").unwrap().unwrap();
    assert_eq!(value, Value::Percent(0.155));
    assert_eq!(value.to_wire(), "15.5");
}

#[test]
fn outgoing_percentages_round_to_six_places() {
    assert_eq!(Value::Percent(0.123456789).to_wire(), "12.345679");
}

#[test]
fn empty_wire_values_decode_to_none() {
    assert_eq!(Value::from_wire(FieldType::Float, "").unwrap(), None);
    assert_eq!(Value::from_wire(FieldType::Text, "").unwrap(), None);
}

#[test]
fn composite_columns_carry_no_direct_value() {
    assert_eq!(Value::from_wire(FieldType::Address, "ignored").unwrap(), None);
}

#[test]
fn malformed_numerics_fail_decoding() {
    let err = Value::from_wire(FieldType::Date, "yesterday").unwrap_err();
    assert!(err.is_type_conversion());
    let err = Value::from_wire(FieldType::Float, "1.2.3").unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn text_values_fit_every_text_like_column() {
    let value = Value::Text("x".to_string());
    for ty in [
        FieldType::Text,
        FieldType::MultiText,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Url,
        FieldType::File,
        FieldType::RecordId,
    ] {
        value.expect_type(ty).unwrap();
    }
    assert!(value.expect_type(FieldType::Checkbox).unwrap_err().is_type_conversion());
}

#[test]
fn ratings_are_bounded() {
    Value::Rating(4.5).expect_type(FieldType::Rating).unwrap();
    assert!(Value::Rating(6.0)
        .expect_type(FieldType::Rating)
        .unwrap_err()
        .is_type_conversion());
}
