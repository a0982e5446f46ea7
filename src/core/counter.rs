//! Verse counting
//!
//! Counts always re-validate their input, so a count is never produced for a
//! malformed range and is never zero or negative.

use crate::core::catalog::SurahCatalog;
use crate::core::error::RangeError;
use crate::core::models::{ContentRange, MultiSurahRange, SingleSurahRange};
use crate::core::validator::{validate_multi_surah, validate_single_surah};

/// Count the verses of a single-surah range: `end_verse - start_verse + 1`.
///
/// # Errors
/// Returns the validation error if the range is malformed.
pub fn count_single_surah(
    catalog: &SurahCatalog,
    surah: u32,
    start_verse: u32,
    end_verse: u32,
) -> Result<u32, RangeError> {
    validate_single_surah(catalog, surah, start_verse, end_verse)?;
    span_len(start_verse, end_verse)
}

/// Count the verses of a range that may cross surah boundaries.
///
/// The tail of the start surah, every interior surah in full, and the head of
/// the end surah (all of it when `end_verse` is `None`).
///
/// # Errors
/// Returns the validation error if the range is malformed.
pub fn count_multi_surah(
    catalog: &SurahCatalog,
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
) -> Result<u32, RangeError> {
    validate_multi_surah(catalog, start_surah, start_verse, end_surah, end_verse)?;
    count_validated(catalog, start_surah, start_verse, end_surah, end_verse)
}

/// Count a range already held as a validated value object.
///
/// # Errors
/// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
pub fn count_range(catalog: &SurahCatalog, range: &ContentRange) -> Result<u32, RangeError> {
    match range {
        ContentRange::Single(single) => count_single(single),
        ContentRange::Multi(multi) => count_multi(catalog, multi),
    }
}

fn count_single(range: &SingleSurahRange) -> Result<u32, RangeError> {
    span_len(range.start_verse(), range.end_verse())
}

fn count_multi(catalog: &SurahCatalog, range: &MultiSurahRange) -> Result<u32, RangeError> {
    count_validated(
        catalog,
        range.start_surah(),
        range.start_verse(),
        range.end_surah(),
        range.end_verse(),
    )
}

fn count_validated(
    catalog: &SurahCatalog,
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
) -> Result<u32, RangeError> {
    let end_count = catalog.verse_count(end_surah)?;
    let last_verse = end_verse.unwrap_or(end_count);

    if start_surah == end_surah {
        return span_len(start_verse, last_verse);
    }

    let head = span_len(start_verse, catalog.verse_count(start_surah)?)?;
    let interior = catalog.verses_between(start_surah + 1, end_surah - 1)?;
    let tail = span_len(1, last_verse)?;
    Ok(head + interior + tail)
}

/// Inclusive length of `start..=end`, refusing anything not positive.
pub(crate) fn span_len(start: u32, end: u32) -> Result<u32, RangeError> {
    let count = i64::from(end) - i64::from(start) + 1;
    if count <= 0 {
        return Err(RangeError::ZeroLengthDerivedRange { count });
    }
    u32::try_from(count).map_err(|_| RangeError::ZeroLengthDerivedRange { count })
}
