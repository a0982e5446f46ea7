//! Range validation
//!
//! Pure predicates over raw integers. Every other component calls these before
//! computing, so a range that passes here can always be counted, formatted and
//! summarized.

use crate::core::catalog::SurahCatalog;
use crate::core::error::RangeError;

/// Validate a range confined to one surah.
///
/// Checks, in order: the surah exists, `1 <= start_verse`,
/// `end_verse <= verse_count(surah)`, `start_verse <= end_verse`.
///
/// # Errors
/// - [`RangeError::SurahOutOfRange`] if `surah` is not in the catalog
/// - [`RangeError::VerseOutOfRange`] if a verse falls outside the surah
/// - [`RangeError::ReversedVerses`] if `start_verse > end_verse`
pub fn validate_single_surah(
    catalog: &SurahCatalog,
    surah: u32,
    start_verse: u32,
    end_verse: u32,
) -> Result<(), RangeError> {
    let verse_count = catalog.verse_count(surah)?;

    if start_verse == 0 {
        return Err(RangeError::VerseOutOfRange {
            surah,
            verse: start_verse,
            verse_count,
        });
    }
    if end_verse > verse_count {
        return Err(RangeError::VerseOutOfRange {
            surah,
            verse: end_verse,
            verse_count,
        });
    }
    if start_verse > end_verse {
        return Err(RangeError::ReversedVerses {
            surah,
            start_verse,
            end_verse,
        });
    }
    Ok(())
}

/// Validate a range that may span several consecutive surahs.
///
/// `end_verse == None` means "through the last verse of `end_surah`".
///
/// Checks, in order: both surahs exist, `start_surah <= end_surah`, the start
/// verse fits its surah, the end verse (when given) fits its surah, and for a
/// same-surah range `start_verse <= end_verse`.
///
/// # Errors
/// - [`RangeError::SurahOutOfRange`] if either surah is not in the catalog
/// - [`RangeError::DescendingSurahs`] if `start_surah > end_surah`
/// - [`RangeError::VerseOutOfRange`] if a verse falls outside its surah
/// - [`RangeError::ReversedVerses`] if a same-surah range runs backwards
pub fn validate_multi_surah(
    catalog: &SurahCatalog,
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
) -> Result<(), RangeError> {
    let start_count = catalog.verse_count(start_surah)?;
    let end_count = catalog.verse_count(end_surah)?;

    if start_surah > end_surah {
        return Err(RangeError::DescendingSurahs {
            start_surah,
            end_surah,
        });
    }

    check_verse(start_surah, start_verse, start_count)?;
    if let Some(end_verse) = end_verse {
        check_verse(end_surah, end_verse, end_count)?;

        if start_surah == end_surah && start_verse > end_verse {
            return Err(RangeError::ReversedVerses {
                surah: start_surah,
                start_verse,
                end_verse,
            });
        }
    }
    Ok(())
}

const fn check_verse(surah: u32, verse: u32, verse_count: u32) -> Result<(), RangeError> {
    if verse == 0 || verse > verse_count {
        Err(RangeError::VerseOutOfRange {
            surah,
            verse,
            verse_count,
        })
    } else {
        Ok(())
    }
}
