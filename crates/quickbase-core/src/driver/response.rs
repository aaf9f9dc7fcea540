use crate::{
    schema::{ColumnId, FieldType},
    Error, Result,
};

/// A parsed response document from the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// A query page: field descriptors plus matching records.
    Page(Page),

    /// A count-only result (`numMatches` / `num_records`).
    Count(u64),

    /// A bare schema, from a schema fetch.
    Schema(SchemaFragment),

    /// Result of a bulk tabular upload: one server-assigned record id per
    /// inserted row, in request order.
    Imported { record_ids: Vec<u32> },

    /// Result of a single-record insert.
    Added { record_id: u32 },

    /// Success with no payload the client cares about.
    Ok,
}

/// The schema portion of a response: ordered field descriptors and the
/// table's declared key column, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemaFragment {
    pub fields: Vec<FieldDescriptor>,
    pub key_fid: Option<ColumnId>,
}

/// One `<field>` node of a schema response, already parsed by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub id: ColumnId,
    pub label: String,
    pub ty: FieldType,
    pub role: Option<String>,
    pub is_virtual: bool,
    pub is_lookup: bool,
    pub is_summary: bool,
    pub hidden: bool,
    pub allow_html: bool,
    pub allow_new_choices: bool,
    pub choices: Vec<String>,
    pub composites: Vec<(String, ColumnId)>,
}

impl FieldDescriptor {
    pub fn new(id: impl Into<ColumnId>, label: impl Into<String>, ty: FieldType) -> Self {
        FieldDescriptor {
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
            composites: vec![],
        }
    }
}

/// One `<record>` node of a query response: the server identity plus
/// wire-form values keyed by column id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFragment {
    pub record_id: Option<u32>,
    pub fields: Vec<(ColumnId, String)>,
}

/// A query page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub schema: SchemaFragment,
    pub records: Vec<RecordFragment>,
}

impl Response {
    pub fn into_page(self) -> Result<Page> {
        match self {
            Response::Page(page) => Ok(page),
            _ => Err(Error::invalid_response("a query page")),
        }
    }

    pub fn into_count(self) -> Result<u64> {
        match self {
            Response::Count(count) => Ok(count),
            _ => Err(Error::invalid_response("a match count")),
        }
    }

    pub fn into_schema(self) -> Result<SchemaFragment> {
        match self {
            Response::Schema(schema) => Ok(schema),
            Response::Page(page) => Ok(page.schema),
            _ => Err(Error::invalid_response("a table schema")),
        }
    }

    pub fn into_imported(self) -> Result<Vec<u32>> {
        match self {
            Response::Imported { record_ids } => Ok(record_ids),
            _ => Err(Error::invalid_response("an import result")),
        }
    }

    pub fn into_added(self) -> Result<u32> {
        match self {
            Response::Added { record_id } => Ok(record_id),
            _ => Err(Error::invalid_response("an added record id")),
        }
    }

    pub fn expect_ok(self) -> Result<()> {
        match self {
            Response::Ok => Ok(()),
            _ => Err(Error::invalid_response("an empty success")),
        }
    }
}
