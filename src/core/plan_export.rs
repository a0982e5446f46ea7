//! Export curriculum plans with their computed verse columns

use crate::core::catalog::SurahCatalog;
use crate::core::error::RangeError;
use crate::core::formatter::Language;
use crate::core::models::CurriculumPlan;
use crate::core::planner::PlanFile;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header row of exported plan files
pub const EXPORT_HEADER: &str = "name,kind,range,total_verses,surah_count,display";

/// Totals for one export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanExportSummary {
    /// Plans written to the output
    pub exported: usize,
    /// Input rows left out because they failed validation
    pub rejected: usize,
    /// Sum of verse counts across exported plans
    pub total_verses: u64,
}

/// Build plans from every validated row of a plan file
///
/// # Errors
/// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
pub fn build_plans(
    catalog: &SurahCatalog,
    file: &PlanFile,
    language: Language,
) -> Result<Vec<CurriculumPlan>, RangeError> {
    file.rows
        .iter()
        .map(|row| CurriculumPlan::new(catalog, row.name.clone(), row.kind, row.range, language))
        .collect()
}

/// Write plans as CSV to any writer
///
/// # Errors
/// Returns an error if writing fails
pub fn write_plans_csv<W: Write>(
    writer: &mut W,
    plans: &[CurriculumPlan],
) -> Result<u64, std::io::Error> {
    writeln!(writer, "{EXPORT_HEADER}")?;
    let mut total_verses = 0;
    for plan in plans {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            csv_field(&plan.name),
            plan.kind,
            plan.range(),
            plan.total_verses(),
            plan.cache().summary.surah_count(),
            csv_field(plan.display()),
        )?;
        total_verses += u64::from(plan.total_verses());
    }
    writer.flush()?;
    Ok(total_verses)
}

/// Export plans to a CSV file
///
/// # Arguments
/// * `plans` - Plans to write
/// * `rejected` - Number of input rows that were left out, reported in the summary
/// * `output_path` - Destination file (created or truncated)
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn export_plans_csv<P: AsRef<Path>>(
    plans: &[CurriculumPlan],
    rejected: usize,
    output_path: P,
) -> Result<PlanExportSummary, Box<dyn Error>> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    let total_verses = write_plans_csv(&mut writer, plans)?;
    Ok(PlanExportSummary {
        exported: plans.len(),
        rejected,
        total_verses,
    })
}

/// Quote a field when it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::planner::parse_plans_str;

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a, b"), "\"a, b\"");
        assert_eq!(csv_field("say \"x\""), "\"say \"\"x\"\"\"");
    }

    #[test]
    fn test_write_plans_csv() {
        let catalog = SurahCatalog::standard();
        let file = parse_plans_str(
            catalog,
            "name,kind,range\nOpening,review,1\nBridge,memorization,1:5-2:10\n",
        )
        .unwrap();
        let plans = build_plans(catalog, &file, Language::English).unwrap();

        let mut out = Vec::new();
        let total = write_plans_csv(&mut out, &plans).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(total, 7 + 13);
        assert_eq!(lines[0], EXPORT_HEADER);
        assert_eq!(lines[1], "Opening,review,1:1-7,7,1,Surah Al-Fatihah (complete)");
        assert_eq!(
            lines[2],
            "Bridge,memorization,1:5-2:10,13,2,From Surah Al-Fatihah verse 5 to Surah Al-Baqarah verse 10"
        );
    }
}
