//! Per-surah breakdown of a range, for progress displays

use crate::core::catalog::SurahCatalog;
use crate::core::counter::span_len;
use crate::core::error::RangeError;
use crate::core::models::ContentRange;
use crate::core::validator::validate_multi_surah;

/// The part of a range that falls inside one surah
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSegment {
    /// Surah number
    pub surah_number: u32,
    /// Arabic surah name
    pub name: &'static str,
    /// First verse of the segment
    pub from_verse: u32,
    /// Last verse of the segment (inclusive)
    pub to_verse: u32,
    /// `to_verse - from_verse + 1`
    pub verse_count_in_segment: u32,
    /// Whether the segment covers every verse of the surah
    pub whole_surah: bool,
}

/// A range broken into ordered per-surah segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeSummary {
    /// One segment per surah touched, in canonical order
    pub segments: Vec<RangeSegment>,
    /// Sum of the segment counts
    pub total_verses: u32,
}

impl RangeSummary {
    /// Number of surahs the range touches
    #[must_use]
    pub fn surah_count(&self) -> usize {
        self.segments.len()
    }

    /// Share of the range completed, as a percentage in `0.0..=100.0`.
    ///
    /// `verses_done` above the total is clamped.
    #[must_use]
    pub fn percent_complete(&self, verses_done: u32) -> f64 {
        if self.total_verses == 0 {
            return 0.0;
        }
        let done = f64::from(verses_done.min(self.total_verses));
        (done / f64::from(self.total_verses)) * 100.0
    }
}

/// Break a range into per-surah segments.
///
/// The segment counts always add up to the range's verse count.
///
/// # Errors
/// Returns the validation error if the range is malformed.
pub fn summarize(
    catalog: &SurahCatalog,
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
) -> Result<RangeSummary, RangeError> {
    validate_multi_surah(catalog, start_surah, start_verse, end_surah, end_verse)?;

    let mut segments = Vec::new();
    let mut total_verses = 0;
    for surah in start_surah..=end_surah {
        let reference = catalog.lookup(surah)?;
        let from_verse = if surah == start_surah { start_verse } else { 1 };
        let to_verse = match end_verse {
            Some(v) if surah == end_surah => v,
            _ => reference.verse_count,
        };
        let verse_count_in_segment = span_len(from_verse, to_verse)?;
        total_verses += verse_count_in_segment;
        segments.push(RangeSegment {
            surah_number: surah,
            name: reference.name,
            from_verse,
            to_verse,
            verse_count_in_segment,
            whole_surah: from_verse == 1 && to_verse == reference.verse_count,
        });
    }

    Ok(RangeSummary {
        segments,
        total_verses,
    })
}

/// Break a validated range into per-surah segments.
///
/// # Errors
/// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
pub fn summarize_range(
    catalog: &SurahCatalog,
    range: &ContentRange,
) -> Result<RangeSummary, RangeError> {
    match range {
        ContentRange::Single(single) => summarize(
            catalog,
            single.surah(),
            single.start_verse(),
            single.surah(),
            Some(single.end_verse()),
        ),
        ContentRange::Multi(multi) => summarize(
            catalog,
            multi.start_surah(),
            multi.start_verse(),
            multi.end_surah(),
            multi.end_verse(),
        ),
    }
}
