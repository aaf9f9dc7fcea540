mod support;

use support::*;

use quickbase_client::{
    driver::{Operation, Response},
    schema::FieldType,
    Error, RecordState, Select, Table,
};

fn file_schema() -> quickbase_client::driver::SchemaFragment {
    schema(vec![
        field(3, "Record ID#", FieldType::RecordId),
        field(6, "Name", FieldType::Text),
        field(9, "Attachment", FieldType::File),
    ])
}

#[test]
fn a_file_column_forces_per_record_calls() {
    let transport = MockTransport::new();
    transport.push_ok(page(file_schema(), vec![record(1, &[(6, "alpha")])]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();

    table.set_value(0, 6u32, "alpha2").unwrap();
    for name in ["n1", "n2"] {
        let index = table.new_record();
        table.set_value(index, 6u32, name).unwrap();
    }

    transport.push_ok(Response::Added { record_id: 10 });
    transport.push_ok(Response::Added { record_id: 11 });
    transport.push_ok(Response::Ok);
    table.accept_changes().unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls
        .iter()
        .all(|op| !matches!(op, Operation::ImportTable(_))));

    // Inserts first, then updates.
    assert!(matches!(calls[1], Operation::AddRecord(_)));
    assert!(matches!(calls[2], Operation::AddRecord(_)));
    match &calls[3] {
        Operation::EditRecord(op) => {
            assert_eq!(op.record_id, 1);
            assert_eq!(op.fields, vec![(6u32.into(), "alpha2".to_string())]);
        }
        other => panic!("expected an individual update, got {other:?}"),
    }

    let rids: Vec<_> = table.records().iter().map(|r| r.record_id()).collect();
    assert_eq!(rids, vec![Some(1), Some(10), Some(11)]);
    assert!(table
        .records()
        .iter()
        .all(|r| r.state() == RecordState::Unchanged));
}

#[test]
fn unclean_unchanged_record_settles_without_a_call() {
    let transport = MockTransport::new();
    transport.push_ok(page(basic_schema(), vec![record(1, &[(6, "alpha")])]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();

    let (_, records) = table.parts_mut();
    records.get_mut(0).unwrap().mark_unclean();

    table.accept_changes().unwrap();

    assert_eq!(transport.call_count(), 1);
    let record = table.records().get(0).unwrap();
    assert_eq!(record.state(), RecordState::Unchanged);
    assert!(!record.is_unclean());
}

#[test]
fn unclean_records_are_applied_individually_after_the_bulk_call() {
    let transport = MockTransport::new();
    transport.push_ok(page(basic_schema(), vec![]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();

    let clean = table.new_record();
    table.set_value(clean, 6u32, "clean").unwrap();
    let doubted = table.new_record();
    table.set_value(doubted, 6u32, "doubted").unwrap();
    let (_, records) = table.parts_mut();
    records.get_mut(doubted).unwrap().mark_unclean();

    transport.push_ok(Response::Imported { record_ids: vec![20] });
    transport.push_ok(Response::Added { record_id: 21 });
    table.accept_changes().unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 3);
    assert!(matches!(calls[1], Operation::ImportTable(_)));
    assert!(matches!(calls[2], Operation::AddRecord(_)));

    let rids: Vec<_> = table.records().iter().map(|r| r.record_id()).collect();
    assert_eq!(rids, vec![Some(20), Some(21)]);
}

#[test]
fn queued_choice_edits_flush_before_record_changes() {
    let transport = MockTransport::new();
    transport.push_ok(page(basic_schema(), vec![]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();

    table
        .columns_mut()
        .get_mut(6u32.into())
        .unwrap()
        .add_choice("red");
    let index = table.new_record();
    table.set_value(index, 6u32, "red").unwrap();

    transport.push_ok(Response::Ok);
    transport.push_ok(Response::Imported { record_ids: vec![40] });
    table.accept_changes().unwrap();

    let calls = transport.calls();
    assert_eq!(calls.len(), 3);
    match &calls[1] {
        Operation::FieldAddChoices(op) => {
            assert_eq!(op.fid, 6u32.into());
            assert_eq!(op.choices, vec!["red".to_string()]);
        }
        other => panic!("expected a choice flush, got {other:?}"),
    }
    assert!(matches!(calls[2], Operation::ImportTable(_)));

    // The queue drains; a second pass sends nothing.
    table.accept_changes().unwrap();
    assert_eq!(transport.call_count(), 3);
}

#[test]
fn an_empty_working_set_reconciles_without_calls() {
    let transport = MockTransport::new();
    let mut table = Table::new(transport.clone(), "bq1");
    table.accept_changes().unwrap();
    assert_eq!(transport.call_count(), 0);
}

#[test]
fn a_fault_leaves_later_records_pending() {
    let transport = MockTransport::new();
    transport.push_ok(page(file_schema(), vec![]));

    let mut table = Table::new(transport.clone(), "bq1");
    table.query(Select::all()).unwrap();

    let first = table.new_record();
    table.set_value(first, 6u32, "n1").unwrap();
    let second = table.new_record();
    table.set_value(second, 6u32, "n2").unwrap();

    transport.push_ok(Response::Added { record_id: 10 });
    transport.push_err(Error::transport_message("connection reset"));
    let err = table.accept_changes().unwrap_err();

    assert!(err.is_transport());
    assert_eq!(table.records().get(first).unwrap().record_id(), Some(10));
    assert_eq!(
        table.records().get(first).unwrap().state(),
        RecordState::Unchanged
    );
    assert_eq!(table.records().get(second).unwrap().state(), RecordState::New);
}
