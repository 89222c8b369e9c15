pub mod record;
pub mod repository;

pub use record::StringRecord;
pub use repository::{StoreError, StringRepository};
