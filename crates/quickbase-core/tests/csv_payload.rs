use quickbase_core::payload::{csv_block, csv_field, csv_row};

use pretty_assertions::assert_eq;

#[test]
fn plain_fields_pass_through_unquoted() {
    assert_eq!(csv_field("alpha"), "alpha");
    assert_eq!(csv_field(""), "");
}

#[test]
fn delimiters_force_quoting() {
    assert_eq!(csv_field("a,b"), "\"a,b\"");
    assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
}

#[test]
fn embedded_quotes_are_doubled() {
    assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn rows_join_fields_with_commas() {
    assert_eq!(csv_row(["1", "a,b", ""]), "1,\"a,b\",");
}

#[test]
fn blocks_join_rows_with_crlf() {
    let rows = vec!["1,a".to_string(), "2,b".to_string()];
    assert_eq!(csv_block(&rows), "1,a\r\n2,b");
}
