//! Configuration for text construction.

pub mod options;
pub use options::{Delimiter, ParseOptions};
