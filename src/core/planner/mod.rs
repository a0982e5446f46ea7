//! Input boundary: range notation and plan files

pub mod csv_parser;
pub mod notation;

pub use csv_parser::{parse_plans_csv, parse_plans_str, PlanFile, PlanRow};
pub use notation::parse_range;
