//! Blank-row/column filter.

use crate::types::{CellValue, Workbook};

/// Strip fully blank rows and fully blank columns from every sheet.
///
/// Two single passes per sheet: first every row whose cells are all blank is
/// removed, then every column whose cells are all blank. Deliberately not a
/// fixed point: a row that becomes all-blank only once its blank columns are
/// gone stays in the output. A second call on the result removes nothing.
pub fn filter_empty(book: &mut Workbook) {
    for sheet in &mut book.sheets {
        sheet.delete_rows_matching(all_blank);
        sheet.delete_columns_matching(all_blank);
    }
}

fn all_blank(cells: &[CellValue]) -> bool {
    cells.iter().all(CellValue::is_blank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sheet;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> CellValue {
        CellValue::Text(s.to_string())
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<CellValue>> {
        rows.iter()
            .map(|row| row.iter().map(|s| text(s)).collect())
            .collect()
    }

    #[test]
    fn test_removes_blank_rows_and_columns() {
        let mut book = Workbook::new(vec![Sheet::new(
            "data",
            grid(&[
                &["a", "", "b"],
                &["  ", " ", "\t"],
                &["c", "", "d"],
            ]),
        )]);

        filter_empty(&mut book);

        let sheet = &book.sheets[0];
        assert_eq!(sheet.rows, grid(&[&["a", "b"], &["c", "d"]]));
    }

    #[test]
    fn test_zero_and_false_keep_their_rows() {
        let mut book = Workbook::new(vec![Sheet::new(
            "data",
            vec![
                vec![CellValue::Number(0.0), text("")],
                vec![CellValue::Boolean(false), text("")],
                vec![text(" "), text("")],
            ],
        )]);

        filter_empty(&mut book);

        let sheet = &book.sheets[0];
        assert_eq!(sheet.height(), 2);
        assert_eq!(sheet.width(), 1);
        assert_eq!(sheet.rows[0][0], CellValue::Number(0.0));
        assert_eq!(sheet.rows[1][0], CellValue::Boolean(false));
    }

    #[test]
    fn test_fully_blank_sheet_becomes_empty() {
        let mut book = Workbook::new(vec![Sheet::new(
            "blank",
            grid(&[&["", " "], &["\t", ""]]),
        )]);

        filter_empty(&mut book);

        assert_eq!(book.sheets[0].height(), 0);
        assert_eq!(book.sheets[0].width(), 0);
    }

    #[test]
    fn test_partially_blank_rows_and_columns_kept() {
        // Every row and every column holds at least one non-blank cell, so
        // the grid comes through untouched.
        let mut book = Workbook::new(vec![Sheet::new(
            "data",
            grid(&[
                &["a", "", "b"],
                &["", "x", ""],
            ]),
        )]);

        filter_empty(&mut book);

        let sheet = &book.sheets[0];
        assert_eq!(sheet.height(), 2);
        assert_eq!(sheet.width(), 3);
    }

    #[test]
    fn test_second_call_is_a_fixed_point() {
        let mut book = Workbook::new(vec![Sheet::new(
            "data",
            grid(&[
                &["a", "", "b"],
                &["", "", ""],
                &["c", " ", "d"],
            ]),
        )]);

        filter_empty(&mut book);
        let once = book.clone();
        filter_empty(&mut book);

        assert_eq!(book, once);
    }

    #[test]
    fn test_all_sheets_filtered_independently() {
        let mut book = Workbook::new(vec![
            Sheet::new("one", grid(&[&["a"], &[""]])),
            Sheet::new("two", grid(&[&["", "b"]])),
        ]);

        filter_empty(&mut book);

        assert_eq!(book.sheets[0].rows, grid(&[&["a"]]));
        assert_eq!(book.sheets[1].rows, grid(&[&["b"]]));
    }
}
