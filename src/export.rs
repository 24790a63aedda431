//! Per-sheet export - directory handling plus the format-specific writers.

use crate::error::{ConvertError, ConvertResult};
use crate::types::{CellValue, Sheet, Workbook};
use csv::{QuoteStyle, WriterBuilder};
use rust_xlsxwriter::Workbook as XlsxWorkbook;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported output formats. The format string doubles as the file
/// extension of every exported sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Semicolon-delimited, unquoted text (the default)
    Csv,
    /// Tab-delimited text with the writer's default behavior
    Tsv,
    /// One single-sheet Excel workbook per sheet
    Xlsx,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "xlsx" => Ok(OutputFormat::Xlsx),
            _ => Err(ConvertError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export every sheet of the workbook to `output_dir`, one file per sheet in
/// workbook order, named `<sheet_name>.<output_format>`.
///
/// The directory is created (with parents) when missing; an existing
/// non-directory entry at that path is an error, as is a workbook without a
/// single sheet - both are checked before anything touches the disk. Returns
/// the absolute, symlink-resolved paths of the written files. Files already
/// written are left in place if a later sheet fails.
pub fn export(
    book: &Workbook,
    output_dir: &Path,
    output_format: &str,
) -> ConvertResult<Vec<PathBuf>> {
    if book.is_empty() {
        return Err(ConvertError::EmptyWorkbook);
    }

    let format: OutputFormat = output_format.parse()?;

    if output_dir.exists() && !output_dir.is_dir() {
        return Err(ConvertError::InvalidOutputDir(output_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;
    let resolved_dir = fs::canonicalize(output_dir)?;

    let mut exported = Vec::with_capacity(book.sheets.len());

    for sheet in &book.sheets {
        let path = resolved_dir.join(format!("{}.{}", sheet.name, format.extension()));

        match format {
            OutputFormat::Csv => write_csv(sheet, &path)?,
            OutputFormat::Tsv => write_tsv(sheet, &path)?,
            OutputFormat::Xlsx => write_xlsx(sheet, &path)?,
        }

        exported.push(path);
    }

    Ok(exported)
}

/// The delimited-text format: semicolon-delimited, never quoted, UTF-8. The
/// escape character is a space so that a delimiter occurring inside a field
/// degrades to a harmless extra space instead of a backslash, which would be
/// meaningful in LaTeX output.
fn write_csv(sheet: &Sheet, path: &Path) -> ConvertResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .double_quote(false)
        .escape(b' ')
        .from_path(path)
        .map_err(|e| ConvertError::Write(e.to_string()))?;
    write_rows(sheet, &mut writer)
}

/// Tab-delimited text with the csv writer's default quoting behavior.
fn write_tsv(sheet: &Sheet, path: &Path) -> ConvertResult<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|e| ConvertError::Write(e.to_string()))?;
    write_rows(sheet, &mut writer)
}

fn write_rows<W: io::Write>(sheet: &Sheet, writer: &mut csv::Writer<W>) -> ConvertResult<()> {
    for row in &sheet.rows {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .map_err(|e| ConvertError::Write(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// A single-sheet .xlsx workbook carrying the sheet under its own name.
fn write_xlsx(sheet: &Sheet, path: &Path) -> ConvertResult<()> {
    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet.name.as_str())
        .map_err(|e| ConvertError::Write(e.to_string()))?;

    for (row_idx, row) in sheet.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let (r, c) = (row_idx as u32, col_idx as u16);
            match cell {
                CellValue::Text(s) => {
                    worksheet
                        .write_string(r, c, s.as_str())
                        .map_err(|e| ConvertError::Write(e.to_string()))?;
                }
                CellValue::Number(n) => {
                    worksheet
                        .write_number(r, c, *n)
                        .map_err(|e| ConvertError::Write(e.to_string()))?;
                }
                CellValue::Boolean(b) => {
                    worksheet
                        .write_boolean(r, c, *b)
                        .map_err(|e| ConvertError::Write(e.to_string()))?;
                }
                CellValue::Empty => {}
            }
        }
    }

    workbook
        .save(path)
        .map_err(|e| ConvertError::Write(e.to_string()))?;
    Ok(())
}
