//! LaTeX-friendly cell escaping.
//!
//! The escaped output is meant to be embedded as fields of a
//! semicolon-delimited, unquoted export that a LaTeX package later splits on
//! `;`. Double quotes become apostrophes, braces get backslash-escaped, and
//! any field still containing a delimiter or a brace is wrapped in one outer
//! brace pair so the downstream split treats it as a single group.

use crate::types::{CellValue, Workbook};

/// Escape one string for LaTeX embedding.
///
/// Pure transform:
/// 1. `"` -> `'`
/// 2. `{` -> `\{`, `}` -> `\}`
/// 3. wrap the whole result in an unescaped `{ }` pair if it contains a
///    semicolon or an escaped brace.
///
/// Step 2 must run before the step-3 check, which inspects the escaped text.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push('\''),
            '{' => escaped.push_str("\\{"),
            '}' => escaped.push_str("\\}"),
            _ => escaped.push(c),
        }
    }

    if escaped.contains(';') || escaped.contains("\\{") || escaped.contains("\\}") {
        format!("{{{}}}", escaped)
    } else {
        escaped
    }
}

/// Apply [`escape_text`] to every textual cell of every sheet. Non-textual
/// cells pass through unchanged.
pub fn escape_workbook(book: &mut Workbook) {
    for sheet in &mut book.sheets {
        sheet.map_cells(|cell| {
            if let CellValue::Text(s) = cell {
                *s = escape_text(s);
            }
        });
    }
}
