//! Recitation session model

use std::fmt;
use std::str::FromStr;

use crate::core::catalog::SurahCatalog;
use crate::core::counter::count_range;
use crate::core::error::RangeError;
use crate::core::formatter::{format_range, Language};
use crate::core::models::{ContentRange, MultiSurahRange};
use crate::debug;

/// Instructor's assessment of a recitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// Must be recited again
    Repeat,
    /// Passed with several mistakes
    Acceptable,
    /// Passed with few mistakes
    Good,
    /// Passed with one or two slips
    VeryGood,
    /// No mistakes
    Excellent,
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "repeat" => Ok(Self::Repeat),
            "acceptable" => Ok(Self::Acceptable),
            "good" => Ok(Self::Good),
            "very good" => Ok(Self::VeryGood),
            "excellent" => Ok(Self::Excellent),
            _ => Err(format!("Unknown grade: {s}")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Repeat => "repeat",
            Self::Acceptable => "acceptable",
            Self::Good => "good",
            Self::VeryGood => "very good",
            Self::Excellent => "excellent",
        };
        write!(f, "{label}")
    }
}

/// A logged recitation of a range by one student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecitationSession {
    /// Student name or identifier
    pub student: String,

    /// Grade, if the session has been assessed
    pub grade: Option<Grade>,

    range: MultiSurahRange,
    total_verses: u32,
    display: String,
}

impl RecitationSession {
    /// Log a session, computing its verse total and display text
    ///
    /// # Errors
    /// Only [`RangeError::ZeroLengthDerivedRange`], which indicates an engine bug.
    pub fn record(
        catalog: &SurahCatalog,
        student: String,
        range: MultiSurahRange,
        grade: Option<Grade>,
        language: Language,
    ) -> Result<Self, RangeError> {
        let content = ContentRange::Multi(range);
        let total_verses = count_range(catalog, &content)?;
        let display = format_range(catalog, &content, language)?;
        debug!("Recorded session for {student}: {content} ({total_verses} verses)");
        Ok(Self {
            student,
            grade,
            range,
            total_verses,
            display,
        })
    }

    /// Recited range
    #[must_use]
    pub const fn range(&self) -> &MultiSurahRange {
        &self.range
    }

    /// Cached verse count
    #[must_use]
    pub const fn total_verses(&self) -> u32 {
        self.total_verses
    }

    /// Cached display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether the student must recite the range again
    #[must_use]
    pub fn needs_repeat(&self) -> bool {
        self.grade == Some(Grade::Repeat)
    }
}
