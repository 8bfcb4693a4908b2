pub mod deposited;
pub mod document;
pub mod error;
pub mod io;

pub use deposited::{derive, generate, GenerateReport};
pub use document::{FieldSpec, SchemaDocument};
pub use error::SchemaError;
pub use io::{read_schema, write_schema};
