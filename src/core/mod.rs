//! Core verse-range engine.
//!
//! Leaves first: [`catalog`] holds the 114 surahs, [`validator`] gates every
//! range, [`counter`], [`formatter`] and [`summarizer`] compute on validated
//! ranges, and [`recompute`] bundles them for the records that cache results.

pub mod catalog;
pub mod config;
pub mod counter;
pub mod error;
pub mod formatter;
pub mod models;
pub mod plan_export;
pub mod planner;
pub mod recompute;
pub mod summarizer;
pub mod validator;

pub use catalog::{SurahCatalog, SurahReference, SURAH_COUNT};
pub use error::{ParseError, RangeError, RangeErrorKind};
pub use formatter::Language;
pub use models::{ContentRange, MultiSurahRange, SingleSurahRange};
pub use recompute::{recompute, RangeDerivatives};
pub use summarizer::{RangeSegment, RangeSummary};
