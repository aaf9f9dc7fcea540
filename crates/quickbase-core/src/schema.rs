mod column;
pub use column::{Column, ColumnId, RECORD_ID_COLUMN};

mod columns;
pub use columns::Columns;

mod field_type;
pub use field_type::FieldType;
