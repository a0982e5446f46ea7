//! Compact range notation used by the CLI and plan files
//!
//! | text        | meaning                                 |
//! |-------------|-----------------------------------------|
//! | `S`         | every verse of surah `S`                |
//! | `S:A`       | verse `A` of surah `S`                  |
//! | `S:A-B`     | verses `A..=B` of surah `S`             |
//! | `S:A-E:B`   | surah `S` verse `A` to surah `E` verse `B` |
//! | `S:A-E:*`   | surah `S` verse `A` to the end of surah `E` |

use crate::core::catalog::SurahCatalog;
use crate::core::error::ParseError;
use crate::core::models::{ContentRange, MultiSurahRange, SingleSurahRange};

/// Parse and validate a range written in compact notation.
///
/// # Errors
/// - [`ParseError::Empty`] for blank input
/// - [`ParseError::Malformed`] if the text does not follow the notation
/// - [`ParseError::Range`] if the notation describes an invalid range
pub fn parse_range(catalog: &SurahCatalog, text: &str) -> Result<ContentRange, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (start, end) = match trimmed.split_once('-') {
        Some((start, end)) => (start.trim(), Some(end.trim())),
        None => (trimmed, None),
    };

    let (surah, start_verse) = match start.split_once(':') {
        Some((s, v)) => (number(trimmed, s)?, Some(number(trimmed, v)?)),
        None => (number(trimmed, start)?, None),
    };

    let range: ContentRange = match (start_verse, end) {
        (None, None) => SingleSurahRange::whole_surah(catalog, surah)?.into(),
        (None, Some(_)) => {
            return Err(ParseError::malformed(
                trimmed,
                "a range needs a start verse (S:A-...)",
            ))
        }
        (Some(verse), None) => SingleSurahRange::new(catalog, surah, verse, verse)?.into(),
        (Some(verse), Some(end)) => match end.split_once(':') {
            None => SingleSurahRange::new(catalog, surah, verse, number(trimmed, end)?)?.into(),
            Some((end_surah, "*")) => {
                MultiSurahRange::new(catalog, surah, verse, number(trimmed, end_surah)?, None)?
                    .into()
            }
            Some((end_surah, end_verse)) => MultiSurahRange::new(
                catalog,
                surah,
                verse,
                number(trimmed, end_surah)?,
                Some(number(trimmed, end_verse)?),
            )?
            .into(),
        },
    };
    Ok(range)
}

fn number(text: &str, part: &str) -> Result<u32, ParseError> {
    part.trim()
        .parse::<u32>()
        .map_err(|_| ParseError::malformed(text, format!("'{}' is not a number", part.trim())))
}
