//! sheetsplit - split a multi-sheet spreadsheet into per-sheet files
//!
//! This library loads a workbook, optionally strips fully blank rows and
//! columns from every sheet, optionally escapes cell text for LaTeX
//! embedding, and writes one output file per sheet.
//!
//! # Features
//!
//! - Reads .xlsx, .xlsm, .xlsb, .xls and .ods workbooks
//! - Semicolon-delimited, unquoted csv output (plus tsv and xlsx)
//! - Blank-row/column filtering with a literal whitespace-only-text rule
//! - LaTeX-friendly quote/brace escaping for delimiter-split consumers
//!
//! # Example
//!
//! ```no_run
//! use sheetsplit::{export, filter, reader};
//! use std::path::Path;
//!
//! let mut book = reader::load_workbook("report.xlsx")?;
//! filter::filter_empty(&mut book);
//!
//! let paths = export::export(&book, Path::new("out"), "csv")?;
//! for path in &paths {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), sheetsplit::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod filter;
pub mod latex;
pub mod reader;
pub mod types;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use export::OutputFormat;
pub use types::{CellValue, Sheet, Workbook};
