pub mod interpreter;

pub use interpreter::{interpret, InterpretedQuery, QueryError};
