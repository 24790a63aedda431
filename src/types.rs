use std::fmt;

//==============================================================================
// Cell values
//==============================================================================

/// A single cell value.
///
/// The source library hands back dynamically typed cells; this closed enum is
/// everything the converter distinguishes. `Empty` is the loader's explicit
/// empty marker and is distinct from `Text("")`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Empty,
}

impl CellValue {
    /// Whether this cell counts as blank for row/column filtering.
    ///
    /// Only whitespace-only text is blank. Numbers (including 0), booleans
    /// (including false) and the explicit `Empty` marker are not.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => {
                // Integral values print without a trailing ".0"
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Empty => Ok(()),
        }
    }
}

//==============================================================================
// Sheets
//==============================================================================

/// One named 2-D grid of cells.
///
/// Invariant: the grid is rectangular - every row has `width()` cells. The
/// loader pads short rows and the filter removes whole rows/columns, so the
/// invariant holds throughout.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(|row| row.len()).unwrap_or(0)
    }

    /// Remove every row for which the predicate returns true. Single pass
    /// over the current grid.
    pub fn delete_rows_matching<F>(&mut self, predicate: F)
    where
        F: Fn(&[CellValue]) -> bool,
    {
        self.rows.retain(|row| !predicate(row));
    }

    /// Remove every column for which the predicate returns true when applied
    /// to the column's cells top to bottom. Single pass over the current
    /// grid; remaining cells compact leftward. A sheet losing all columns
    /// drops its now zero-width rows so it ends up 0x0.
    pub fn delete_columns_matching<F>(&mut self, predicate: F)
    where
        F: Fn(&[CellValue]) -> bool,
    {
        let width = self.width();
        let keep: Vec<bool> = (0..width)
            .map(|col| {
                let column: Vec<CellValue> =
                    self.rows.iter().map(|row| row[col].clone()).collect();
                !predicate(&column)
            })
            .collect();

        if keep.iter().all(|&k| k) {
            return;
        }

        for row in &mut self.rows {
            let mut col = 0;
            row.retain(|_| {
                let kept = keep[col];
                col += 1;
                kept
            });
        }

        if self.width() == 0 {
            self.rows.clear();
        }
    }

    /// Apply a transform to every cell in place.
    pub fn map_cells<F>(&mut self, mut transform: F)
    where
        F: FnMut(&mut CellValue),
    {
        for row in &mut self.rows {
            for cell in row {
                transform(cell);
            }
        }
    }
}

//==============================================================================
// Workbooks
//==============================================================================

/// An ordered collection of named sheets.
///
/// Sheet names are unique within a workbook; the spreadsheet formats the
/// loader accepts already enforce this, so it is not re-checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(sheets: Vec<Sheet>) -> Self {
        Self { sheets }
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_classification() {
        assert!(CellValue::Text(String::new()).is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(CellValue::Text("\t\n".to_string()).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
        assert!(!CellValue::Text(" x ".to_string()).is_blank());

        // Only whitespace-only text is blank
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Boolean(false).is_blank());
        assert!(!CellValue::Empty.is_blank());
    }

    #[test]
    fn test_display_integral_numbers() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(-3.0).to_string(), "-3");
        assert_eq!(CellValue::Number(3.25).to_string(), "3.25");
        assert_eq!(CellValue::Boolean(true).to_string(), "true");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_delete_columns_compacts() {
        let blank = CellValue::Text(String::new());
        let mut sheet = Sheet::new(
            "s",
            vec![
                vec![
                    CellValue::Number(1.0),
                    blank.clone(),
                    CellValue::Number(2.0),
                ],
                vec![
                    CellValue::Number(3.0),
                    blank.clone(),
                    CellValue::Number(4.0),
                ],
            ],
        );

        sheet.delete_columns_matching(|col| col.iter().all(CellValue::is_blank));

        assert_eq!(sheet.width(), 2);
        assert_eq!(sheet.rows[0][1], CellValue::Number(2.0));
        assert_eq!(sheet.rows[1][1], CellValue::Number(4.0));
    }

    #[test]
    fn test_delete_all_columns_yields_empty_sheet() {
        let blank = CellValue::Text(" ".to_string());
        let mut sheet = Sheet::new("s", vec![vec![blank.clone()], vec![blank]]);

        sheet.delete_columns_matching(|_| true);

        assert_eq!(sheet.height(), 0);
        assert_eq!(sheet.width(), 0);
    }

    #[test]
    fn test_workbook_lookup() {
        let book = Workbook::new(vec![
            Sheet::new("Sheet1", vec![]),
            Sheet::new("Sheet2", vec![]),
        ]);

        assert_eq!(book.sheet_names(), vec!["Sheet1", "Sheet2"]);
        assert!(book.get_sheet("Sheet2").is_some());
        assert!(book.get_sheet("Sheet3").is_none());
    }
}
