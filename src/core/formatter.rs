//! Human-readable range descriptions
//!
//! Output is a pure function of the catalog, the range and the [`Language`].
//! Callers cache the text, so the same range must always render to the same
//! bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::catalog::{SurahCatalog, SurahReference};
use crate::core::error::RangeError;
use crate::core::models::ContentRange;
use crate::core::validator::{validate_multi_surah, validate_single_surah};

/// Display language for formatted ranges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Arabic surah names and phrasing
    #[default]
    Arabic,
    /// Transliterated surah names with English phrasing
    English,
}

impl Language {
    const fn surah_name(self, surah: &SurahReference) -> &'static str {
        match self {
            Self::Arabic => surah.name,
            Self::English => surah.english_name,
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Self::Arabic),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("Unknown language: {s}")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => write!(f, "arabic"),
            Self::English => write!(f, "english"),
        }
    }
}

/// Describe a single-surah range.
///
/// A range covering every verse of the surah names only the surah.
///
/// # Errors
/// Returns the validation error if the range is malformed.
pub fn format_single_surah(
    catalog: &SurahCatalog,
    surah: u32,
    start_verse: u32,
    end_verse: u32,
    language: Language,
) -> Result<String, RangeError> {
    validate_single_surah(catalog, surah, start_verse, end_verse)?;
    let reference = catalog.lookup(surah)?;
    Ok(single_phrase(reference, start_verse, end_verse, language))
}

/// Describe a range that may cross surah boundaries.
///
/// A start at verse 1 reads as "from the beginning of", an end at the last
/// verse (or `None`) reads as "to the end of". A same-surah range renders
/// exactly like [`format_single_surah`].
///
/// # Errors
/// Returns the validation error if the range is malformed.
pub fn format_multi_surah(
    catalog: &SurahCatalog,
    start_surah: u32,
    start_verse: u32,
    end_surah: u32,
    end_verse: Option<u32>,
    language: Language,
) -> Result<String, RangeError> {
    validate_multi_surah(catalog, start_surah, start_verse, end_surah, end_verse)?;
    let start = catalog.lookup(start_surah)?;
    let end = catalog.lookup(end_surah)?;
    Ok(multi_phrase(start, start_verse, end, end_verse, language))
}

/// Describe a validated range.
///
/// # Errors
/// Only if the catalog no longer contains a surah the range refers to.
pub fn format_range(
    catalog: &SurahCatalog,
    range: &ContentRange,
    language: Language,
) -> Result<String, RangeError> {
    match range {
        ContentRange::Single(single) => {
            let reference = catalog.lookup(single.surah())?;
            Ok(single_phrase(
                reference,
                single.start_verse(),
                single.end_verse(),
                language,
            ))
        }
        ContentRange::Multi(multi) => {
            let start = catalog.lookup(multi.start_surah())?;
            let end = catalog.lookup(multi.end_surah())?;
            Ok(multi_phrase(
                start,
                multi.start_verse(),
                end,
                multi.end_verse(),
                language,
            ))
        }
    }
}

fn single_phrase(
    surah: &SurahReference,
    start_verse: u32,
    end_verse: u32,
    language: Language,
) -> String {
    let name = language.surah_name(surah);
    let whole = start_verse == 1 && end_verse == surah.verse_count;
    match (language, whole) {
        (Language::Arabic, true) => format!("سورة {name} كاملة"),
        (Language::Arabic, false) => {
            format!("سورة {name} من الآية {start_verse} إلى الآية {end_verse}")
        }
        (Language::English, true) => format!("Surah {name} (complete)"),
        (Language::English, false) => format!("Surah {name}, verses {start_verse}-{end_verse}"),
    }
}

fn multi_phrase(
    start: &SurahReference,
    start_verse: u32,
    end: &SurahReference,
    end_verse: Option<u32>,
    language: Language,
) -> String {
    if start.number == end.number {
        return single_phrase(
            start,
            start_verse,
            end_verse.unwrap_or(end.verse_count),
            language,
        );
    }

    let start_name = language.surah_name(start);
    let end_name = language.surah_name(end);
    let to_end = end_verse.is_none_or(|v| v == end.verse_count);

    let head = match (language, start_verse == 1) {
        (Language::Arabic, true) => format!("من أول سورة {start_name}"),
        (Language::Arabic, false) => format!("من سورة {start_name} الآية {start_verse}"),
        (Language::English, true) => format!("From the beginning of Surah {start_name}"),
        (Language::English, false) => format!("From Surah {start_name} verse {start_verse}"),
    };
    let tail = match (language, end_verse) {
        (Language::Arabic, Some(v)) if !to_end => format!("إلى سورة {end_name} الآية {v}"),
        (Language::Arabic, _) => format!("إلى آخر سورة {end_name}"),
        (Language::English, Some(v)) if !to_end => format!("to Surah {end_name} verse {v}"),
        (Language::English, _) => format!("to the end of Surah {end_name}"),
    };
    format!("{head} {tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static SurahCatalog {
        SurahCatalog::standard()
    }

    #[test]
    fn test_whole_surah() {
        assert_eq!(
            format_single_surah(catalog(), 1, 1, 7, Language::Arabic).unwrap(),
            "سورة الفاتحة كاملة"
        );
        assert_eq!(
            format_single_surah(catalog(), 112, 1, 4, Language::English).unwrap(),
            "Surah Al-Ikhlas (complete)"
        );
    }

    #[test]
    fn test_partial_surah() {
        assert_eq!(
            format_single_surah(catalog(), 2, 1, 5, Language::Arabic).unwrap(),
            "سورة البقرة من الآية 1 إلى الآية 5"
        );
        assert_eq!(
            format_single_surah(catalog(), 2, 255, 257, Language::English).unwrap(),
            "Surah Al-Baqarah, verses 255-257"
        );
    }

    #[test]
    fn test_multi_partial_both_ends() {
        assert_eq!(
            format_multi_surah(catalog(), 1, 5, 2, Some(10), Language::Arabic).unwrap(),
            "من سورة الفاتحة الآية 5 إلى سورة البقرة الآية 10"
        );
        assert_eq!(
            format_multi_surah(catalog(), 1, 5, 2, Some(10), Language::English).unwrap(),
            "From Surah Al-Fatihah verse 5 to Surah Al-Baqarah verse 10"
        );
    }

    #[test]
    fn test_multi_open_end_matches_explicit_last_verse() {
        let open = format_multi_surah(catalog(), 78, 1, 114, None, Language::Arabic).unwrap();
        let explicit =
            format_multi_surah(catalog(), 78, 1, 114, Some(6), Language::Arabic).unwrap();
        assert_eq!(open, "من أول سورة النبأ إلى آخر سورة الناس");
        assert_eq!(open, explicit);
    }

    #[test]
    fn test_multi_same_surah_uses_single_phrase() {
        assert_eq!(
            format_multi_surah(catalog(), 67, 1, 67, None, Language::English).unwrap(),
            format_single_surah(catalog(), 67, 1, 30, Language::English).unwrap()
        );
    }

    #[test]
    fn test_formatting_rejects_invalid() {
        assert_eq!(
            format_multi_surah(catalog(), 5, 1, 2, None, Language::Arabic),
            Err(RangeError::DescendingSurahs {
                start_surah: 5,
                end_surah: 2
            })
        );
        assert!(format_single_surah(catalog(), 1, 0, 3, Language::Arabic).is_err());
    }

    #[test]
    fn test_deterministic() {
        let a = format_multi_surah(catalog(), 2, 142, 3, Some(92), Language::Arabic);
        let b = format_multi_surah(catalog(), 2, 142, 3, Some(92), Language::Arabic);
        assert_eq!(a, b);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("Arabic".parse::<Language>(), Ok(Language::Arabic));
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert!("french".parse::<Language>().is_err());
        assert_eq!(Language::English.to_string(), "english");
    }
}
