//! Spreadsheet loader - turns an on-disk workbook into the in-memory model.

use crate::error::{ConvertError, ConvertResult};
use crate::types::{CellValue, Sheet, Workbook};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Load a workbook from disk.
///
/// The format is detected from the file itself, so .xlsx, .xlsm, .xlsb, .xls
/// and .ods inputs all work. Sheets are loaded fully into memory, in workbook
/// order, before any transform runs.
pub fn load_workbook<P: AsRef<Path>>(path: P) -> ConvertResult<Workbook> {
    let mut source =
        open_workbook_auto(path.as_ref()).map_err(|e| ConvertError::Load(e.to_string()))?;

    let sheet_names = source.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());

    for name in sheet_names {
        let range = source
            .worksheet_range(&name)
            .map_err(|e| ConvertError::Load(e.to_string()))?;
        sheets.push(Sheet::new(name, convert_range(&range)));
    }

    Ok(Workbook::new(sheets))
}

/// Convert a used-cell range into a rectangular grid. Cells the range does
/// not cover come back as `Empty`, so every row has the same width.
fn convert_range(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let (height, width) = range.get_size();
    let mut rows = Vec::with_capacity(height);

    for row in 0..height {
        let mut cells = Vec::with_capacity(width);
        for col in 0..width {
            let cell = match range.get((row, col)) {
                Some(data) => convert_cell(data),
                None => CellValue::Empty,
            };
            cells.push(cell);
        }
        rows.push(cells);
    }

    rows
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        // Serial date value; the converter does not render dates specially
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Error cells stay visible in the output instead of vanishing
        Data::Error(e) => CellValue::Text(e.to_string()),
        Data::Empty => CellValue::Empty,
    }
}
