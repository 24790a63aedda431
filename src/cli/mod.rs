//! CLI command implementations

pub mod commands;

pub use commands::{convert, report_error, ConvertOptions};
