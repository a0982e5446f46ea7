//! Data models for `quran-range`

pub mod plan;
pub mod range;
pub mod session;

pub use plan::{CurriculumPlan, PlanKind};
pub use range::{ContentRange, MultiSurahRange, SingleSurahRange};
pub use session::{Grade, RecitationSession};
