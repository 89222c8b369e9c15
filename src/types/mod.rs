pub mod identifiers;

pub use identifiers::StringId;
