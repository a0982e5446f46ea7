//! Shared library for `quran-range`
//! Contains the verse-range engine, configuration, and logging used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;

/// Returns the current version of the `quran-range` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
