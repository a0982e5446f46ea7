//! Integration tests for the verse-range engine over the whole catalog

use quran_range::core::counter::{count_multi_surah, count_range, count_single_surah};
use quran_range::core::formatter::{format_multi_surah, format_single_surah};
use quran_range::core::models::{CurriculumPlan, Grade, PlanKind, RecitationSession};
use quran_range::core::summarizer::summarize;
use quran_range::core::validator::{validate_multi_surah, validate_single_surah};
use quran_range::core::{
    recompute, ContentRange, Language, MultiSurahRange, RangeError, RangeErrorKind,
    SingleSurahRange, SurahCatalog, SURAH_COUNT,
};
use std::collections::HashSet;

fn catalog() -> &'static SurahCatalog {
    SurahCatalog::standard()
}

#[test]
fn test_catalog_counts_and_names() {
    let catalog = catalog();
    let mut names = HashSet::new();

    for surah in 1..=SURAH_COUNT {
        assert!(catalog.verse_count(surah).unwrap() > 0, "surah {surah}");
        assert!(names.insert(catalog.name(surah).unwrap()), "surah {surah}");
    }
    assert_eq!(names.len(), 114);

    for surah in [0, 115, 200, u32::MAX] {
        assert_eq!(
            catalog.lookup(surah).unwrap_err(),
            RangeError::SurahOutOfRange { surah }
        );
    }
}

#[test]
fn test_whole_surah_identity() {
    let catalog = catalog();
    for surah in 1..=SURAH_COUNT {
        let count = catalog.verse_count(surah).unwrap();
        assert_eq!(count_single_surah(catalog, surah, 1, count).unwrap(), count);
        assert_eq!(
            count_multi_surah(catalog, surah, 1, surah, Some(count)).unwrap(),
            count
        );
        assert_eq!(
            count_multi_surah(catalog, surah, 1, surah, None).unwrap(),
            count
        );
    }
}

#[test]
fn test_full_span_additivity() {
    let catalog = catalog();
    for start in 1..SURAH_COUNT {
        let mut expected = catalog.verse_count(start).unwrap();
        for end in start + 1..=SURAH_COUNT {
            expected += catalog.verse_count(end).unwrap();
            assert_eq!(
                count_multi_surah(catalog, start, 1, end, None).unwrap(),
                expected,
                "{start}:1-{end}:*"
            );
        }
    }
}

#[test]
fn test_whole_quran() {
    let catalog = catalog();
    assert_eq!(
        count_multi_surah(catalog, 1, 1, SURAH_COUNT, None).unwrap(),
        6236
    );
    assert_eq!(catalog.total_verses(), 6236);
}

#[test]
fn test_malformed_single_ranges_rejected() {
    let catalog = catalog();
    for surah in 1..=SURAH_COUNT {
        let count = catalog.verse_count(surah).unwrap();

        let zero = validate_single_surah(catalog, surah, 0, count).unwrap_err();
        assert_eq!(zero.kind(), RangeErrorKind::VerseOutOfRange);

        let past_end = validate_single_surah(catalog, surah, 1, count + 1).unwrap_err();
        assert_eq!(past_end.kind(), RangeErrorKind::VerseOutOfRange);

        if count >= 2 {
            let reversed = validate_single_surah(catalog, surah, count, count - 1).unwrap_err();
            assert_eq!(reversed.kind(), RangeErrorKind::RangeOrder);
        }
    }
}

#[test]
fn test_descending_multi_rejected() {
    let err = validate_multi_surah(catalog(), 5, 1, 2, None).unwrap_err();
    assert_eq!(err.kind(), RangeErrorKind::RangeOrder);
    assert_eq!(
        err,
        RangeError::DescendingSurahs {
            start_surah: 5,
            end_surah: 2
        }
    );
}

#[test]
fn test_concrete_examples() {
    let catalog = catalog();
    assert_eq!(count_multi_surah(catalog, 1, 5, 2, Some(10)).unwrap(), 13);
    assert_eq!(count_single_surah(catalog, 2, 1, 5).unwrap(), 5);
    assert_eq!(count_multi_surah(catalog, 78, 1, 114, None).unwrap(), 564);
}

#[test]
fn test_formatting_is_deterministic() {
    let catalog = catalog();
    for language in [Language::Arabic, Language::English] {
        for surah in 1..=SURAH_COUNT {
            let count = catalog.verse_count(surah).unwrap();
            let first = format_single_surah(catalog, surah, 1, count, language).unwrap();
            let second = format_single_surah(catalog, surah, 1, count, language).unwrap();
            assert_eq!(first, second);
        }
        let first = format_multi_surah(catalog, 2, 3, 5, Some(4), language).unwrap();
        let second = format_multi_surah(catalog, 2, 3, 5, Some(4), language).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_formatting_templates() {
    let catalog = catalog();
    assert_eq!(
        format_single_surah(catalog, 1, 1, 7, Language::Arabic).unwrap(),
        "سورة الفاتحة كاملة"
    );
    assert_eq!(
        format_single_surah(catalog, 2, 1, 5, Language::English).unwrap(),
        "Surah Al-Baqarah, verses 1-5"
    );
    assert_eq!(
        format_multi_surah(catalog, 78, 1, 114, None, Language::English).unwrap(),
        "From the beginning of Surah An-Naba to the end of Surah An-Nas"
    );
    assert!(format_multi_surah(catalog, 3, 1, 2, None, Language::Arabic).is_err());
}

#[test]
fn test_segments_match_counts_for_every_pair() {
    let catalog = catalog();
    for start in 1..=SURAH_COUNT {
        for end in start..=SURAH_COUNT {
            let summary = summarize(catalog, start, 1, end, None).unwrap();
            let count = count_multi_surah(catalog, start, 1, end, None).unwrap();
            let sum: u32 = summary
                .segments
                .iter()
                .map(|s| s.verse_count_in_segment)
                .sum();

            assert_eq!(sum, count);
            assert_eq!(summary.total_verses, count);
            assert_eq!(summary.surah_count(), (end - start + 1) as usize);
            assert!(summary.segments.iter().all(|s| s.whole_surah));
        }
    }
}

#[test]
fn test_partial_segments() {
    let summary = summarize(catalog(), 104, 3, 113, Some(2)).unwrap();
    let first = &summary.segments[0];
    let last = summary.segments.last().unwrap();

    assert_eq!((first.surah_number, first.from_verse, first.to_verse), (104, 3, 9));
    assert!(!first.whole_surah);
    assert_eq!((last.surah_number, last.from_verse, last.to_verse), (113, 1, 2));
    assert!(!last.whole_surah);
    assert_eq!(summary.total_verses, 51 - 2 - 3);
}

#[test]
fn test_plan_recomputes_on_change() {
    let catalog = catalog();
    let juz_amma: ContentRange = MultiSurahRange::new(catalog, 78, 1, 114, None)
        .unwrap()
        .into();
    let mut plan = CurriculumPlan::new(
        catalog,
        "Juz Amma".to_string(),
        PlanKind::Memorization,
        juz_amma,
        Language::English,
    )
    .unwrap();

    assert_eq!(plan.total_verses(), 564);
    assert_eq!(plan.cache().summary.surah_count(), 37);

    let fatihah = SingleSurahRange::whole_surah(catalog, 1).unwrap().into();
    plan.set_range(catalog, fatihah, Language::English).unwrap();

    assert_eq!(plan.total_verses(), 7);
    assert_eq!(plan.display(), "Surah Al-Fatihah (complete)");
    assert!(plan.is_fresh(catalog));
    assert_eq!(*plan.cache(), recompute(catalog, &fatihah, Language::English).unwrap());
}

#[test]
fn test_session_records_derived_values() {
    let catalog = catalog();
    let range = MultiSurahRange::new(catalog, 1, 5, 2, Some(10)).unwrap();
    let session = RecitationSession::record(
        catalog,
        "Maryam".to_string(),
        range,
        Some(Grade::VeryGood),
        Language::Arabic,
    )
    .unwrap();

    assert_eq!(session.total_verses(), 13);
    assert!(!session.needs_repeat());
    assert_eq!(count_range(catalog, &ContentRange::Multi(range)).unwrap(), 13);
}
