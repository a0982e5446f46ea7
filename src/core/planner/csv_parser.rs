//! CSV parser for curriculum plan files
//!
//! ```text
//! name,kind,range
//! Juz Amma,memorization,78:1-114:*
//! "Al-Baqarah, first page",review,2:1-5
//! ```
//!
//! Rows are validated as they are read. A bad row is collected with its line
//! number and never reaches the export.

use crate::core::catalog::SurahCatalog;
use crate::core::error::ParseError;
use crate::core::models::{ContentRange, PlanKind};
use crate::core::planner::notation::parse_range;
use std::error::Error;
use std::fs;
use std::path::Path;

/// A validated row of a plan file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRow {
    /// 1-based line number in the source file
    pub line: usize,
    /// Plan name
    pub name: String,
    /// Memorization or review
    pub kind: PlanKind,
    /// Assigned range
    pub range: ContentRange,
}

/// Result of reading a plan file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanFile {
    /// Rows that passed validation, in file order
    pub rows: Vec<PlanRow>,
    /// Rows that failed, each as [`ParseError::AtLine`]
    pub rejected: Vec<ParseError>,
}

/// Column positions resolved from the header line
struct Columns {
    name: usize,
    kind: usize,
    range: usize,
}

/// Parse a plan CSV file
///
/// # Arguments
/// * `catalog` - Surah catalog used to validate every range
/// * `path` - Path to the CSV file
///
/// # Errors
/// Returns an error if the file cannot be read or has no usable header.
/// Invalid rows do not fail the whole file; they land in [`PlanFile::rejected`].
pub fn parse_plans_csv<P: AsRef<Path>>(
    catalog: &SurahCatalog,
    path: P,
) -> Result<PlanFile, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_plans_str(catalog, &content)?)
}

/// Parse plan CSV content already in memory
///
/// # Errors
/// Returns [`ParseError::MissingColumn`] (at its line) if the header lacks a
/// required column, or [`ParseError::Empty`] if there is no header at all.
pub fn parse_plans_str(catalog: &SurahCatalog, content: &str) -> Result<PlanFile, ParseError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !is_skippable(line));

    let (header_line, header) = lines.next().ok_or(ParseError::Empty)?;
    let columns = resolve_columns(&parse_csv_line(header)).map_err(|e| e.at_line(header_line))?;

    let mut file = PlanFile::default();
    for (line_no, line) in lines {
        match parse_row(catalog, line_no, line, &columns) {
            Ok(row) => file.rows.push(row),
            Err(err) => file.rejected.push(err.at_line(line_no)),
        }
    }
    Ok(file)
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

fn resolve_columns(headers: &[String]) -> Result<Columns, ParseError> {
    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseError::MissingColumn {
                column: name.to_string(),
            })
    };
    Ok(Columns {
        name: find("name")?,
        kind: find("kind")?,
        range: find("range")?,
    })
}

fn parse_row(
    catalog: &SurahCatalog,
    line: usize,
    text: &str,
    columns: &Columns,
) -> Result<PlanRow, ParseError> {
    let fields = parse_csv_line(text);
    let field = |idx: usize, column: &str| {
        fields
            .get(idx)
            .filter(|f| !f.is_empty())
            .ok_or_else(|| ParseError::MissingColumn {
                column: column.to_string(),
            })
    };

    let name = field(columns.name, "name")?.clone();
    let kind_text = field(columns.kind, "kind")?;
    let kind = kind_text
        .parse::<PlanKind>()
        .map_err(|_| ParseError::UnknownPlanKind {
            value: kind_text.clone(),
        })?;
    let range = parse_range(catalog, field(columns.range, "range")?)?;

    Ok(PlanRow {
        line,
        name,
        kind,
        range,
    })
}

/// Split a CSV line into trimmed fields, honoring double quotes (`""` escapes a quote)
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RangeError;

    #[test]
    fn test_parse_csv_line() {
        let fields = parse_csv_line(r#"Juz Amma, memorization ,78:1-114:*"#);
        assert_eq!(fields, vec!["Juz Amma", "memorization", "78:1-114:*"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let fields = parse_csv_line(r#""Al-Baqarah, ""page one""",review,2:1-5"#);
        assert_eq!(fields[0], r#"Al-Baqarah, "page one""#);
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_parse_plans_str() {
        let content = "\
# term one
name,kind,range

Juz Amma,memorization,78:1-114:*
Ayat al-Kursi,review,2:255
";
        let file = parse_plans_str(SurahCatalog::standard(), content).unwrap();
        assert!(file.rejected.is_empty());
        assert_eq!(file.rows.len(), 2);
        assert_eq!(file.rows[0].line, 4);
        assert_eq!(file.rows[0].kind, PlanKind::Memorization);
        assert_eq!(file.rows[1].name, "Ayat al-Kursi");
        assert_eq!(file.rows[1].range.to_string(), "2:255-255");
    }

    #[test]
    fn test_columns_in_any_order() {
        let content = "range,Name,KIND\n1,Al-Fatihah,review\n";
        let file = parse_plans_str(SurahCatalog::standard(), content).unwrap();
        assert_eq!(file.rows[0].name, "Al-Fatihah");
    }

    #[test]
    fn test_rejected_rows_keep_line_numbers() {
        let content = "\
name,kind,range
Good,review,1
Backwards,review,5:1-2:*
Odd,homework,1
Blank,review,
";
        let file = parse_plans_str(SurahCatalog::standard(), content).unwrap();
        assert_eq!(file.rows.len(), 1);
        assert_eq!(
            file.rejected,
            vec![
                ParseError::from(RangeError::DescendingSurahs {
                    start_surah: 5,
                    end_surah: 2
                })
                .at_line(3),
                ParseError::UnknownPlanKind {
                    value: "homework".to_string()
                }
                .at_line(4),
                ParseError::MissingColumn {
                    column: "range".to_string()
                }
                .at_line(5),
            ]
        );
    }

    #[test]
    fn test_missing_header_column() {
        let err = parse_plans_str(SurahCatalog::standard(), "name,range\nx,1\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingColumn {
                column: "kind".to_string()
            }
            .at_line(1)
        );
        assert_eq!(
            parse_plans_str(SurahCatalog::standard(), "\n# nothing\n"),
            Err(ParseError::Empty)
        );
    }
}
