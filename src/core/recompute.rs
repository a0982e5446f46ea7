//! Derived values that owning records cache next to their raw range fields
//!
//! Records call [`recompute`] every time their range changes and store the
//! result whole; nothing edits the cached values independently.

use crate::core::catalog::SurahCatalog;
use crate::core::counter::count_range;
use crate::core::error::RangeError;
use crate::core::formatter::{format_range, Language};
use crate::core::models::ContentRange;
use crate::core::summarizer::{summarize_range, RangeSummary};

/// Everything derived from a range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeDerivatives {
    /// Verse count of the range
    pub total_verses: u32,
    /// Per-surah breakdown
    pub summary: RangeSummary,
    /// Display text
    pub formatted_text: String,
    /// Language the text was rendered in
    pub language: Language,
}

/// Count, summarize and format a validated range in one pass.
///
/// # Errors
/// Returns [`RangeError::ZeroLengthDerivedRange`] if a derived count comes out
/// non-positive.
pub fn recompute(
    catalog: &SurahCatalog,
    range: &ContentRange,
    language: Language,
) -> Result<RangeDerivatives, RangeError> {
    let total_verses = count_range(catalog, range)?;
    let summary = summarize_range(catalog, range)?;
    debug_assert_eq!(summary.total_verses, total_verses);
    let formatted_text = format_range(catalog, range, language)?;

    Ok(RangeDerivatives {
        total_verses,
        summary,
        formatted_text,
        language,
    })
}
