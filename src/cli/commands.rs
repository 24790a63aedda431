use crate::error::ConvertResult;
use crate::{export, filter, latex, reader};
use colored::Colorize;
use std::path::PathBuf;

/// Per-invocation configuration, built once from the parsed arguments.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Path to the source spreadsheet file
    pub input: PathBuf,
    /// Destination directory for per-sheet outputs
    pub out_dir: PathBuf,
    /// Strip fully blank rows and columns before export
    pub filter_empty: bool,
    /// Apply the LaTeX-friendly escaping transform before export
    pub latex: bool,
    /// Output format and file extension, e.g. "csv"
    pub output_format: String,
    /// Echo each written path on its own stdout line
    pub print_exported_files: bool,
}

/// Execute one conversion: load, filter, escape, export.
///
/// Returns the written paths in sheet order. Nothing is printed to stdout
/// unless `print_exported_files` is set.
pub fn convert(options: &ConvertOptions) -> ConvertResult<Vec<PathBuf>> {
    let mut book = reader::load_workbook(&options.input)?;

    if options.filter_empty {
        filter::filter_empty(&mut book);
    }

    if options.latex {
        latex::escape_workbook(&mut book);
    }

    let exported = export::export(&book, &options.out_dir, &options.output_format)?;

    if options.print_exported_files {
        for path in &exported {
            println!("{}", path.display());
        }
    }

    Ok(exported)
}

/// Print an error message to stderr with the standard prefix. Embedded
/// newlines are indented so multi-line messages read as one report.
pub fn report_error(message: &str) {
    eprintln!(
        "{} {}",
        "[ERROR]:".red().bold(),
        message.replace('\n', "\n  ")
    );
}
