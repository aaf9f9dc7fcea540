mod request;
pub use request::{Auth, Request};

mod response;
pub use response::{FieldDescriptor, Page, RecordFragment, Response, SchemaFragment};

pub mod operation;
pub use operation::Operation;

use crate::Result;

use std::fmt::Debug;

/// The transport collaborator: issues one blocking HTTP POST per logical
/// remote call and returns the parsed response document, or a fault already
/// classified into this crate's error taxonomy.
///
/// The client never inspects raw wire bytes; everything it branches on comes
/// through [`Response`] and [`crate::Error`].
pub trait Transport: Debug + Send + Sync + 'static {
    fn execute(&self, op: Operation) -> Result<Response>;
}
