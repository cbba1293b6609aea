pub mod convert;
pub mod types;

pub use types::*;
