//! Error types for the verse-range engine and its input boundary.

use thiserror::Error;

use crate::core::catalog::SURAH_COUNT;

/// A range that does not fit the surah catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Surah number outside `1..=114`.
    #[error("surah {surah} is outside 1..={}", SURAH_COUNT)]
    SurahOutOfRange { surah: u32 },

    /// Verse number outside the bounds of its surah.
    #[error("verse {verse} is outside 1..={verse_count} of surah {surah}")]
    VerseOutOfRange {
        surah: u32,
        verse: u32,
        verse_count: u32,
    },

    /// End surah comes before start surah.
    #[error("range runs backwards: surah {start_surah} comes after surah {end_surah}")]
    DescendingSurahs { start_surah: u32, end_surah: u32 },

    /// Start verse comes after end verse inside one surah.
    #[error("range runs backwards in surah {surah}: verse {start_verse} comes after verse {end_verse}")]
    ReversedVerses {
        surah: u32,
        start_verse: u32,
        end_verse: u32,
    },

    /// A validated range produced a non-positive count. Engine bug, not user input.
    #[error("validated range produced a verse count of {count}")]
    ZeroLengthDerivedRange { count: i64 },
}

/// Coarse classification of [`RangeError`], used by callers that only care
/// which field to flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeErrorKind {
    /// Surah number not in the catalog
    SurahOutOfRange,
    /// Verse number not in its surah
    VerseOutOfRange,
    /// Start after end, either by surah or by verse
    RangeOrder,
    /// Internal consistency failure
    ZeroLengthDerivedRange,
}

impl RangeError {
    /// The error class this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> RangeErrorKind {
        match self {
            Self::SurahOutOfRange { .. } => RangeErrorKind::SurahOutOfRange,
            Self::VerseOutOfRange { .. } => RangeErrorKind::VerseOutOfRange,
            Self::DescendingSurahs { .. } | Self::ReversedVerses { .. } => {
                RangeErrorKind::RangeOrder
            }
            Self::ZeroLengthDerivedRange { .. } => RangeErrorKind::ZeroLengthDerivedRange,
        }
    }

    /// Whether this error points at user input rather than at the engine.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        !matches!(self, Self::ZeroLengthDerivedRange { .. })
    }
}

/// Errors raised while reading ranges from text (CLI arguments, plan files).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Nothing to parse.
    #[error("empty range")]
    Empty,

    /// Text does not follow the `S`, `S:A`, `S:A-B`, `S:A-E:B` or `S:A-E:*` notation.
    #[error("malformed range '{text}': {reason}")]
    Malformed { text: String, reason: String },

    /// Well-formed notation describing an invalid range.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// A plan file row is missing a required column.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// A plan file row names a plan kind that does not exist.
    #[error("unknown plan kind '{value}' (expected memorization or review)")]
    UnknownPlanKind { value: String },

    /// Any of the above, located in a file.
    #[error("line {line}: {source}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    pub(crate) fn malformed(text: &str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// Attach a 1-based line number.
    #[must_use]
    pub fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_ordering_errors() {
        let descending = RangeError::DescendingSurahs {
            start_surah: 5,
            end_surah: 2,
        };
        let reversed = RangeError::ReversedVerses {
            surah: 2,
            start_verse: 5,
            end_verse: 3,
        };
        assert_eq!(descending.kind(), RangeErrorKind::RangeOrder);
        assert_eq!(reversed.kind(), RangeErrorKind::RangeOrder);
    }

    #[test]
    fn test_display_messages() {
        let err = RangeError::SurahOutOfRange { surah: 115 };
        assert_eq!(err.to_string(), "surah 115 is outside 1..=114");

        let err = RangeError::VerseOutOfRange {
            surah: 1,
            verse: 8,
            verse_count: 7,
        };
        assert_eq!(err.to_string(), "verse 8 is outside 1..=7 of surah 1");
    }

    #[test]
    fn test_zero_length_is_not_input_error() {
        assert!(!RangeError::ZeroLengthDerivedRange { count: 0 }.is_input_error());
        assert!(RangeError::SurahOutOfRange { surah: 0 }.is_input_error());
    }

    #[test]
    fn test_parse_error_at_line() {
        let err = ParseError::from(RangeError::SurahOutOfRange { surah: 0 }).at_line(4);
        assert_eq!(err.to_string(), "line 4: surah 0 is outside 1..=114");
    }
}
