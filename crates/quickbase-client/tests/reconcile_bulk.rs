mod support;

use support::*;

use quickbase_client::{
    driver::{Operation, Response},
    schema::{ColumnId, FieldType},
    RecordState, Select, Table,
};

use pretty_assertions::assert_eq;

fn loaded_table(transport: &std::sync::Arc<MockTransport>) -> Table {
    transport.push_ok(page(
        basic_schema(),
        vec![
            record(1, &[(6, "alpha")]),
            record(2, &[(6, "beta")]),
        ],
    ));
    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();
    table
}

#[test]
fn inserts_and_updates_go_through_one_bulk_call() {
    let transport = MockTransport::new();
    let mut table = loaded_table(&transport);

    table.set_value(0, 6u32, "alpha2").unwrap();
    table.set_value(1, 7u32, "note").unwrap();
    for name in ["n1", "n2", "n3"] {
        let index = table.new_record();
        table.set_value(index, 6u32, name).unwrap();
    }

    transport.push_ok(Response::Imported {
        record_ids: vec![11, 12, 13],
    });
    table.accept_changes().unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    let Operation::ImportTable(op) = &calls[1] else {
        panic!("expected a bulk import, got {:?}", calls[1]);
    };
    assert_eq!(op.clist, "3.6.7");
    assert!(op.time_in_utc);

    // Insert rows first (no identity), then update rows keyed by identity.
    assert_eq!(
        op.rows,
        ",n1,\r\n,n2,\r\n,n3,\r\n1,alpha2,\r\n2,beta,note"
    );

    // Server identities land on the inserts in row order.
    let rids: Vec<_> = table.records().iter().map(|r| r.record_id()).collect();
    assert_eq!(
        rids,
        vec![Some(1), Some(2), Some(11), Some(12), Some(13)]
    );
    assert!(table
        .records()
        .iter()
        .all(|r| r.state() == RecordState::Unchanged && !r.is_unclean()));
}

#[test]
fn updates_alone_still_reconcile_through_the_bulk_call() {
    let transport = MockTransport::new();
    let mut table = loaded_table(&transport);

    table.set_value(0, 6u32, "renamed").unwrap();

    transport.push_ok(Response::Imported { record_ids: vec![] });
    table.accept_changes().unwrap();

    assert_eq!(transport.call_count(), 2);
    assert_eq!(table.records().get(0).unwrap().state(), RecordState::Unchanged);
}

#[test]
fn short_identity_list_is_a_fault() {
    let transport = MockTransport::new();
    let mut table = loaded_table(&transport);

    let index = table.new_record();
    table.set_value(index, 6u32, "n1").unwrap();

    transport.push_ok(Response::Imported { record_ids: vec![] });
    let err = table.accept_changes().unwrap_err();

    assert!(err.is_invalid_response());
    // The record keeps its pending state for a later retry.
    assert_eq!(table.records().get(index).unwrap().state(), RecordState::New);
}

#[test]
fn row_fields_are_csv_quoted() {
    let transport = MockTransport::new();
    let mut table = loaded_table(&transport);

    let index = table.new_record();
    table.set_value(index, 6u32, "Smith, \"Jo\"").unwrap();

    transport.push_ok(Response::Imported { record_ids: vec![20] });
    table.accept_changes().unwrap();

    let calls = transport.calls();
    let Operation::ImportTable(op) = &calls[1] else {
        panic!("expected a bulk import");
    };
    assert_eq!(op.rows, ",\"Smith, \"\"Jo\"\"\",");
}

#[test]
fn projection_excludes_derived_columns_but_keeps_the_key() {
    let transport = MockTransport::new();
    let mut formula = field(8, "Total", FieldType::Float);
    formula.is_virtual = true;
    let mut external_key = field(9, "External Key", FieldType::Text);
    external_key.role = Some("foreignkey".to_string());
    let mut fragment = schema(vec![
        field(3, "Record ID#", FieldType::RecordId),
        field(6, "Name", FieldType::Text),
        formula,
        external_key,
    ]);
    fragment.key_fid = Some(ColumnId(9));
    transport.push_ok(page(fragment, vec![]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();
    assert_eq!(table.key_fid(), Some(ColumnId(9)));

    let index = table.new_record();
    table.set_value(index, 6u32, "n1").unwrap();
    table.set_value(index, 9u32, "K-100").unwrap();

    transport.push_ok(Response::Imported { record_ids: vec![30] });
    table.accept_changes().unwrap();

    let calls = transport.calls();
    let Operation::ImportTable(op) = &calls[1] else {
        panic!("expected a bulk import");
    };
    // The virtual column is dropped; the role-tagged key column stays.
    assert_eq!(op.clist, "3.6.9");
    assert_eq!(op.rows, ",n1,K-100");
}
