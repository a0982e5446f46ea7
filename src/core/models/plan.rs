//! Curriculum plan model

use std::fmt;
use std::str::FromStr;

use crate::core::catalog::SurahCatalog;
use crate::core::error::RangeError;
use crate::core::formatter::Language;
use crate::core::models::ContentRange;
use crate::core::recompute::{recompute, RangeDerivatives};
use crate::debug;

/// What a plan assigns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanKind {
    /// New material to memorize
    Memorization,
    /// Previously memorized material to revise
    Review,
}

impl FromStr for PlanKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memorization" | "memorize" | "hifz" => Ok(Self::Memorization),
            "review" | "revision" => Ok(Self::Review),
            _ => Err(format!("Unknown plan kind: {s}")),
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memorization => write!(f, "memorization"),
            Self::Review => write!(f, "review"),
        }
    }
}

/// An assignment expressed as a verse range, with its derived values cached.
///
/// The range is the source of truth. The cache is rebuilt by every call that
/// changes the range and is never edited on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurriculumPlan {
    /// Plan name (e.g., "Juz Amma, first term")
    pub name: String,

    /// Memorization or review
    pub kind: PlanKind,

    range: ContentRange,
    cache: RangeDerivatives,
}

impl CurriculumPlan {
    /// Create a plan and compute its cached values
    ///
    /// # Arguments
    /// * `catalog` - Surah catalog
    /// * `name` - Plan name
    /// * `kind` - Memorization or review
    /// * `range` - Validated range assigned by the plan
    /// * `language` - Language for the display text
    ///
    /// # Errors
    /// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
    pub fn new(
        catalog: &SurahCatalog,
        name: String,
        kind: PlanKind,
        range: ContentRange,
        language: Language,
    ) -> Result<Self, RangeError> {
        let cache = recompute(catalog, &range, language)?;
        Ok(Self {
            name,
            kind,
            range,
            cache,
        })
    }

    /// Replace the range and rebuild the cache.
    ///
    /// On error the plan is left unchanged.
    ///
    /// # Errors
    /// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
    pub fn set_range(
        &mut self,
        catalog: &SurahCatalog,
        range: ContentRange,
        language: Language,
    ) -> Result<(), RangeError> {
        let cache = recompute(catalog, &range, language)?;
        debug!(
            "Plan '{}': range {} -> {} ({} verses)",
            self.name, self.range, range, cache.total_verses
        );
        self.range = range;
        self.cache = cache;
        Ok(())
    }

    /// The assigned range
    #[must_use]
    pub const fn range(&self) -> &ContentRange {
        &self.range
    }

    /// Cached derived values
    #[must_use]
    pub const fn cache(&self) -> &RangeDerivatives {
        &self.cache
    }

    /// Cached verse count
    #[must_use]
    pub const fn total_verses(&self) -> u32 {
        self.cache.total_verses
    }

    /// Cached display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.cache.formatted_text
    }

    /// Whether the cache still matches a fresh computation from the range
    #[must_use]
    pub fn is_fresh(&self, catalog: &SurahCatalog) -> bool {
        recompute(catalog, &self.range, self.cache.language).is_ok_and(|c| c == self.cache)
    }

    /// Percentage of the plan completed after `verses_done` verses
    #[must_use]
    pub fn progress(&self, verses_done: u32) -> f64 {
        self.cache.summary.percent_complete(verses_done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{MultiSurahRange, SingleSurahRange};

    fn juz_amma(catalog: &SurahCatalog) -> ContentRange {
        MultiSurahRange::new(catalog, 78, 1, 114, None)
            .unwrap()
            .into()
    }

    #[test]
    fn test_plan_creation() {
        let catalog = SurahCatalog::standard();
        let plan = CurriculumPlan::new(
            catalog,
            "Juz Amma".to_string(),
            PlanKind::Memorization,
            juz_amma(catalog),
            Language::Arabic,
        )
        .unwrap();

        assert_eq!(plan.name, "Juz Amma");
        assert_eq!(plan.total_verses(), 564);
        assert_eq!(plan.display(), "من أول سورة النبأ إلى آخر سورة الناس");
        assert_eq!(plan.cache().summary.surah_count(), 37);
        assert!(plan.is_fresh(catalog));
    }

    #[test]
    fn test_set_range_rebuilds_cache() {
        let catalog = SurahCatalog::standard();
        let mut plan = CurriculumPlan::new(
            catalog,
            "Al-Mulk".to_string(),
            PlanKind::Review,
            SingleSurahRange::whole_surah(catalog, 67).unwrap().into(),
            Language::English,
        )
        .unwrap();
        assert_eq!(plan.total_verses(), 30);

        let shorter = SingleSurahRange::new(catalog, 67, 1, 10).unwrap().into();
        plan.set_range(catalog, shorter, Language::English).unwrap();

        assert_eq!(plan.range(), &shorter);
        assert_eq!(plan.total_verses(), 10);
        assert_eq!(plan.display(), "Surah Al-Mulk, verses 1-10");
        assert!(plan.is_fresh(catalog));
    }

    #[test]
    fn test_progress() {
        let catalog = SurahCatalog::standard();
        let plan = CurriculumPlan::new(
            catalog,
            "Al-Baqarah opening".to_string(),
            PlanKind::Memorization,
            SingleSurahRange::new(catalog, 2, 1, 20).unwrap().into(),
            Language::Arabic,
        )
        .unwrap();
        assert!((plan.progress(5) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plan_kind_parse() {
        assert_eq!("Memorization".parse::<PlanKind>(), Ok(PlanKind::Memorization));
        assert_eq!("review".parse::<PlanKind>(), Ok(PlanKind::Review));
        assert!("homework".parse::<PlanKind>().is_err());
        assert_eq!(PlanKind::Review.to_string(), "review");
    }
}
