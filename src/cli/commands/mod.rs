//! CLI command handlers for `quranrange`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod planner;
pub mod range;
pub mod surahs;
