//! Range command handler

use quran_range::core::planner::parse_range;
use quran_range::core::{recompute, Language, SurahCatalog};
use quran_range::{debug, verbose};

/// Validate, count and describe one range.
///
/// # Errors
/// Returns a printable message if the range cannot be parsed or is invalid.
pub fn run(
    catalog: &SurahCatalog,
    text: &str,
    language: Language,
    show_summary: bool,
    done: Option<u32>,
) -> Result<(), String> {
    let range = parse_range(catalog, text).map_err(|e| format!("✗ Invalid range '{text}': {e}"))?;
    debug!("Parsed '{text}' as {range}");

    let derived = recompute(catalog, &range, language).map_err(|e| format!("✗ {e}"))?;
    verbose!("Range: {range}");

    println!("{}", derived.formatted_text);
    println!("Total verses: {}", derived.total_verses);

    if show_summary {
        println!();
        for segment in &derived.summary.segments {
            let marker = if segment.whole_surah { " (whole)" } else { "" };
            println!(
                "  {:>3} {}: {}-{} = {}{marker}",
                segment.surah_number,
                segment.name,
                segment.from_verse,
                segment.to_verse,
                segment.verse_count_in_segment
            );
        }
    }

    if let Some(done) = done {
        println!(
            "Progress: {done}/{} ({:.1}%)",
            derived.total_verses,
            derived.summary.percent_complete(done)
        );
    }
    Ok(())
}
