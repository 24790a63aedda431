use std::path::PathBuf;
use thiserror::Error;

pub type ConvertResult<T> = Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to load spreadsheet: {0}")]
    Load(String),

    #[error("Data source doesn't contain a single sheet")]
    EmptyWorkbook,

    #[error("Given output directory \"{}\" is not actually a directory", .0.display())]
    InvalidOutputDir(PathBuf),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to write sheet: {0}")]
    Write(String),
}
