//! Planner command handler

use quran_range::config::Config;
use quran_range::core::plan_export::{build_plans, export_plans_csv};
use quran_range::core::planner::parse_plans_csv;
use quran_range::core::SurahCatalog;
use quran_range::{error, info, warn};
use std::path::{Path, PathBuf};

/// Run the planner command for one or more plan files.
///
/// # Arguments
/// * `catalog` - Surah catalog
/// * `input_files` - Paths to input CSV files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `config` - Configuration containing display language and default output directory
/// * `verbose` - Whether to list every exported plan
///
/// # Returns
/// `true` if every file was exported without rejected rows
pub fn run(
    catalog: &SurahCatalog,
    input_files: &[PathBuf],
    output_files: &[PathBuf],
    config: &Config,
    verbose: bool,
) -> bool {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return false;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return false;
    }

    let mut all_clean = true;
    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        match export_single(catalog, input_file, output_file, config, verbose) {
            Ok(clean) => all_clean &= clean,
            Err(err) => {
                error!("Planner failed for {}: {err}", input_file.display());
                eprintln!("{err}");
                all_clean = false;
            }
        }
    }
    all_clean
}

/// Export one file. Returns `Ok(false)` when some rows were rejected.
fn export_single(
    catalog: &SurahCatalog,
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<bool, String> {
    let plan_file = parse_plans_csv(catalog, input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;
    info!(
        "Loaded {} plans from {}",
        plan_file.rows.len(),
        input_file.display()
    );

    for rejected in &plan_file.rejected {
        warn!("{}: {rejected}", input_file.display());
        eprintln!("✗ {}: {rejected}", input_file.display());
    }

    let plans = build_plans(catalog, &plan_file, config.language())
        .map_err(|e| format!("✗ Failed to compute plans for {}: {e}", input_file.display()))?;

    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let out_dir = PathBuf::from(&config.paths.out_dir);
        std::fs::create_dir_all(&out_dir).map_err(|e| {
            format!(
                "✗ Failed to create output directory {}: {e}",
                out_dir.display()
            )
        })?;

        let stem = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("plans");
        out_dir.join(format!("{stem}_w_verses.csv"))
    };

    let summary = export_plans_csv(&plans, plan_file.rejected.len(), &final_output_path)
        .map_err(|e| {
            format!(
                "✗ Failed to export plans to {}: {e}",
                final_output_path.display()
            )
        })?;

    println!(
        "✓ {} plans ({} verses) exported to: {}",
        summary.exported,
        summary.total_verses,
        final_output_path.display()
    );
    info!("Exported plans to: {}", final_output_path.display());

    if verbose {
        for plan in &plans {
            println!(
                "  {} [{}] {} = {} verses",
                plan.name,
                plan.kind,
                plan.display(),
                plan.total_verses()
            );
        }
    }

    Ok(summary.rejected == 0)
}
