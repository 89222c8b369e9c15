pub mod engine;
pub mod params;

pub use params::{FilterError, StringFilter};
