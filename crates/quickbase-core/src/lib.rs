mod error;
pub use error::Error;

pub mod driver;
pub use driver::Transport;

pub mod payload;

pub mod query;

pub mod schema;

pub mod value;
pub use value::Value;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
