//! Statistics module
//!
//! Read-side aggregation over recorded transactions. Totals are recomputed
//! from the rows on every call, so the same window always reports the same
//! numbers no matter how often it is asked.

mod service;

pub use service::{MonthlySummary, StatsService};
