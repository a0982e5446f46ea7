//! Range value objects
//!
//! Constructors validate against the catalog, so holding one of these types
//! means the range is well-formed. Fields are private for the same reason.

use std::fmt;

use crate::core::catalog::SurahCatalog;
use crate::core::error::RangeError;
use crate::core::validator::{validate_multi_surah, validate_single_surah};

/// A verse span confined to one surah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleSurahRange {
    surah: u32,
    start_verse: u32,
    end_verse: u32,
}

impl SingleSurahRange {
    /// Create a validated single-surah range.
    ///
    /// # Errors
    /// Returns the validation error if the range is malformed.
    pub fn new(
        catalog: &SurahCatalog,
        surah: u32,
        start_verse: u32,
        end_verse: u32,
    ) -> Result<Self, RangeError> {
        validate_single_surah(catalog, surah, start_verse, end_verse)?;
        Ok(Self {
            surah,
            start_verse,
            end_verse,
        })
    }

    /// Every verse of `surah`.
    ///
    /// # Errors
    /// Returns [`RangeError::SurahOutOfRange`] if the surah does not exist.
    pub fn whole_surah(catalog: &SurahCatalog, surah: u32) -> Result<Self, RangeError> {
        let verse_count = catalog.verse_count(surah)?;
        Self::new(catalog, surah, 1, verse_count)
    }

    /// Surah number
    #[must_use]
    pub const fn surah(&self) -> u32 {
        self.surah
    }

    /// First verse
    #[must_use]
    pub const fn start_verse(&self) -> u32 {
        self.start_verse
    }

    /// Last verse (inclusive)
    #[must_use]
    pub const fn end_verse(&self) -> u32 {
        self.end_verse
    }
}

/// A verse span from one surah to the same or a later surah
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiSurahRange {
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
}

impl MultiSurahRange {
    /// Create a validated multi-surah range. `end_verse == None` runs to the
    /// last verse of `end_surah`.
    ///
    /// # Errors
    /// Returns the validation error if the range is malformed.
    pub fn new(
        catalog: &SurahCatalog,
        start_surah: u32,
        start_verse: u32,
        end_surah: u32,
        end_verse: Option<u32>,
    ) -> Result<Self, RangeError> {
        validate_multi_surah(catalog, start_surah, start_verse, end_surah, end_verse)?;
        Ok(Self {
            start_surah,
            start_verse,
            end_surah,
            end_verse,
        })
    }

    /// Surah the range starts in
    #[must_use]
    pub const fn start_surah(&self) -> u32 {
        self.start_surah
    }

    /// First verse in the start surah
    #[must_use]
    pub const fn start_verse(&self) -> u32 {
        self.start_verse
    }

    /// Surah the range ends in
    #[must_use]
    pub const fn end_surah(&self) -> u32 {
        self.end_surah
    }

    /// Last verse in the end surah, `None` for "through the end"
    #[must_use]
    pub const fn end_verse(&self) -> Option<u32> {
        self.end_verse
    }

    /// Whether start and end fall in the same surah
    #[must_use]
    pub const fn is_single_surah(&self) -> bool {
        self.start_surah == self.end_surah
    }
}

impl From<SingleSurahRange> for MultiSurahRange {
    fn from(range: SingleSurahRange) -> Self {
        Self {
            start_surah: range.surah,
            start_verse: range.start_verse,
            end_surah: range.surah,
            end_verse: Some(range.end_verse),
        }
    }
}

/// Either range shape, as stored on a curriculum plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentRange {
    /// Confined to one surah
    Single(SingleSurahRange),
    /// May cross surah boundaries
    Multi(MultiSurahRange),
}

impl ContentRange {
    /// Surah the range starts in
    #[must_use]
    pub const fn start_surah(&self) -> u32 {
        match self {
            Self::Single(r) => r.surah(),
            Self::Multi(r) => r.start_surah(),
        }
    }

    /// Surah the range ends in
    #[must_use]
    pub const fn end_surah(&self) -> u32 {
        match self {
            Self::Single(r) => r.surah(),
            Self::Multi(r) => r.end_surah(),
        }
    }

    /// The same range in multi-surah form
    #[must_use]
    pub fn as_multi(&self) -> MultiSurahRange {
        match self {
            Self::Single(r) => (*r).into(),
            Self::Multi(r) => *r,
        }
    }
}

impl From<SingleSurahRange> for ContentRange {
    fn from(range: SingleSurahRange) -> Self {
        Self::Single(range)
    }
}

impl From<MultiSurahRange> for ContentRange {
    fn from(range: MultiSurahRange) -> Self {
        Self::Multi(range)
    }
}

/// Compact notation: `S:A-B`, `S:A-E:B`, or `S:A-E:*` for an open end.
impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(r) => write!(f, "{}:{}-{}", r.surah, r.start_verse, r.end_verse),
            Self::Multi(r) => {
                write!(f, "{}:{}-{}:", r.start_surah, r.start_verse, r.end_surah)?;
                match r.end_verse {
                    Some(v) => write!(f, "{v}"),
                    None => write!(f, "*"),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static SurahCatalog {
        SurahCatalog::standard()
    }

    #[test]
    fn test_single_range_creation() {
        let range = SingleSurahRange::new(catalog(), 2, 1, 5).unwrap();
        assert_eq!(range.surah(), 2);
        assert_eq!(range.start_verse(), 1);
        assert_eq!(range.end_verse(), 5);
    }

    #[test]
    fn test_whole_surah() {
        let range = SingleSurahRange::whole_surah(catalog(), 36).unwrap();
        assert_eq!(range.end_verse(), 83);
        assert!(SingleSurahRange::whole_surah(catalog(), 0).is_err());
    }

    #[test]
    fn test_invalid_ranges_are_not_constructed() {
        assert!(SingleSurahRange::new(catalog(), 2, 5, 3).is_err());
        assert!(MultiSurahRange::new(catalog(), 5, 1, 2, None).is_err());
    }

    #[test]
    fn test_single_into_multi() {
        let single = SingleSurahRange::new(catalog(), 18, 1, 10).unwrap();
        let multi = ContentRange::from(single).as_multi();
        assert!(multi.is_single_surah());
        assert_eq!(multi.end_verse(), Some(10));
    }

    #[test]
    fn test_display_notation() {
        let single: ContentRange = SingleSurahRange::new(catalog(), 2, 1, 5).unwrap().into();
        assert_eq!(single.to_string(), "2:1-5");

        let multi: ContentRange = MultiSurahRange::new(catalog(), 1, 5, 2, Some(10))
            .unwrap()
            .into();
        assert_eq!(multi.to_string(), "1:5-2:10");

        let open: ContentRange = MultiSurahRange::new(catalog(), 78, 1, 114, None)
            .unwrap()
            .into();
        assert_eq!(open.to_string(), "78:1-114:*");
        assert_eq!(open.start_surah(), 78);
        assert_eq!(open.end_surah(), 114);
    }
}
