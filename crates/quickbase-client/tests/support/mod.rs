#![allow(dead_code)]

use quickbase_client::{
    driver::{FieldDescriptor, Operation, Page, RecordFragment, Response, SchemaFragment},
    schema::FieldType,
    Error, Result, Transport,
};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A scripted transport: hands back queued responses in order and records
/// every operation it was asked to execute.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<Response>>>,
    log: Mutex<Vec<Operation>>,
}

impl MockTransport {
    pub fn new() -> Arc<MockTransport> {
        Arc::new(MockTransport::default())
    }

    pub fn push_ok(&self, response: Response) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_err(&self, err: Error) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.log.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}

impl Transport for MockTransport {
    fn execute(&self, op: Operation) -> Result<Response> {
        self.log.lock().unwrap().push(op);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::transport_message("mock transport script exhausted")))
    }
}

pub fn field(id: u32, label: &str, ty: FieldType) -> FieldDescriptor {
    FieldDescriptor::new(id, label, ty)
}

pub fn schema(fields: Vec<FieldDescriptor>) -> SchemaFragment {
    SchemaFragment {
        fields,
        key_fid: None,
    }
}

/// Record#ID (3) plus two text columns (6, 7).
pub fn basic_schema() -> SchemaFragment {
    schema(vec![
        field(3, "Record ID#", FieldType::RecordId),
        field(6, "Name", FieldType::Text),
        field(7, "Notes", FieldType::Text),
    ])
}

pub fn record(record_id: u32, fields: &[(u32, &str)]) -> RecordFragment {
    RecordFragment {
        record_id: Some(record_id),
        fields: fields
            .iter()
            .map(|(id, value)| ((*id).into(), value.to_string()))
            .collect(),
    }
}

pub fn page(schema: SchemaFragment, records: Vec<RecordFragment>) -> Response {
    Response::Page(Page { schema, records })
}
