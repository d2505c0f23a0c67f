//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, StatusChoice};
pub use global::GlobalOptions;
