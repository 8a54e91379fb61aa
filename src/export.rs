//! Clipboard-style serializations of selected table rows
//!
//! Rows are picked by index into the full color table. Each format is built
//! from the row's raw `r, g, b` values and canonical hex only:
//!
//! - `hex`: `#aabbcc, #112233`
//! - `py`:  `[[170,187,204], [17,34,51]]`
//! - `r`:   `c(c(170,187,204),c(17,34,51))`

use std::fmt;
use std::str::FromStr;

use color_histogram::TableRow;
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Output format for copied colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormat {
    /// Comma-separated hex strings
    #[default]
    Hex,
    /// Python nested list of RGB triples
    Py,
    /// R vector of `c(r,g,b)` vectors
    R,
}

impl CopyFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CopyFormat::Hex => "hex",
            CopyFormat::Py => "py",
            CopyFormat::R => "r",
        }
    }

    /// Serialize rows in this format.
    pub fn render(&self, rows: &[&TableRow]) -> String {
        match self {
            CopyFormat::Hex => rows
                .iter()
                .map(|row| row.hex.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            CopyFormat::Py => {
                let inner = rows
                    .iter()
                    .map(|row| format!("[{},{},{}]", row.r, row.g, row.b))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("[{inner}]")
            }
            CopyFormat::R => {
                let inner = rows
                    .iter()
                    .map(|row| format!("c({},{},{})", row.r, row.g, row.b))
                    .collect::<Vec<_>>()
                    .join(",");
                format!("c({inner})")
            }
        }
    }
}

impl fmt::Display for CopyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CopyFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(CopyFormat::Hex),
            "py" | "python" => Ok(CopyFormat::Py),
            "r" => Ok(CopyFormat::R),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// Pick rows by index and serialize them.
///
/// Out-of-range indices are skipped.
///
/// # Errors
///
/// - [`ExportError::NoSelection`] if `selected` is empty
/// - [`ExportError::NoValidRows`] if no index falls inside `table`
pub fn format_selection(
    table: &[TableRow],
    selected: &[usize],
    format: CopyFormat,
) -> Result<String, ExportError> {
    if selected.is_empty() {
        return Err(ExportError::NoSelection);
    }

    let rows: Vec<&TableRow> = selected.iter().filter_map(|&i| table.get(i)).collect();
    if rows.is_empty() {
        return Err(ExportError::NoValidRows);
    }

    if rows.len() < selected.len() {
        tracing::debug!(
            selected = selected.len(),
            valid = rows.len(),
            "Skipped out-of-range rows"
        );
    }

    Ok(format.render(&rows))
}

/// Parse a comma-separated index list such as `"0,2, 5"`.
pub fn parse_selection(s: &str) -> Result<Vec<usize>, std::num::ParseIntError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_histogram::{ColorRecord, Rgb};
    use pretty_assertions::assert_eq;

    fn table() -> Vec<TableRow> {
        [
            Rgb::new(170, 187, 204),
            Rgb::new(17, 34, 51),
            Rgb::new(0, 0, 0),
        ]
        .iter()
        .map(|&c| TableRow::from(&ColorRecord::new(c, 1, 33.33)))
        .collect()
    }

    #[test]
    fn test_hex_format() {
        let out = format_selection(&table(), &[0, 1], CopyFormat::Hex).unwrap();
        assert_eq!(out, "#aabbcc, #112233");
    }

    #[test]
    fn test_py_format() {
        let out = format_selection(&table(), &[0, 1], CopyFormat::Py).unwrap();
        assert_eq!(out, "[[170,187,204], [17,34,51]]");
    }

    #[test]
    fn test_r_format() {
        let out = format_selection(&table(), &[0, 1], CopyFormat::R).unwrap();
        assert_eq!(out, "c(c(170,187,204),c(17,34,51))");
    }

    #[test]
    fn test_selection_order_is_kept() {
        let out = format_selection(&table(), &[2, 0], CopyFormat::Hex).unwrap();
        assert_eq!(out, "#000000, #aabbcc");
    }

    #[test]
    fn test_out_of_range_rows_skipped() {
        let out = format_selection(&table(), &[7, 1], CopyFormat::Hex).unwrap();
        assert_eq!(out, "#112233");
    }

    #[test]
    fn test_empty_selection() {
        assert_eq!(
            format_selection(&table(), &[], CopyFormat::Hex),
            Err(ExportError::NoSelection)
        );
    }

    #[test]
    fn test_no_valid_rows() {
        assert_eq!(
            format_selection(&table(), &[3, 99], CopyFormat::R),
            Err(ExportError::NoValidRows)
        );
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("hex".parse::<CopyFormat>().unwrap(), CopyFormat::Hex);
        assert_eq!("PY".parse::<CopyFormat>().unwrap(), CopyFormat::Py);
        assert_eq!(" r ".parse::<CopyFormat>().unwrap(), CopyFormat::R);
        assert_eq!(
            "csv".parse::<CopyFormat>(),
            Err(ExportError::UnknownFormat("csv".to_string()))
        );
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("0,2, 5").unwrap(), vec![0, 2, 5]);
        assert_eq!(parse_selection("").unwrap(), Vec::<usize>::new());
        assert!(parse_selection("1,x").is_err());
    }
}
