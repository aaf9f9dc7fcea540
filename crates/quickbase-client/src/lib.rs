mod engine;

mod field;
pub use field::Field;

mod record;
pub use record::{Record, RecordState};

mod records;
pub use records::Records;

mod select;
pub use select::Select;

mod table;
pub use table::Table;

pub use quickbase_core::{
    driver::{self, Transport},
    payload,
    query::{Comparison, Query, QueryOptions},
    schema, value, Error, Result, Value,
};
