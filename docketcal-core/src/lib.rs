//! Core types and calendar engine for the docketcal ecosystem.
//!
//! This crate provides everything shared between the docketcal CLI and any
//! other front-end for a judge's hearing calendar:
//! - `Case` and related types for case records fetched from the backend
//! - `date_key` for local calendar-date parsing (no timezone translation)
//! - `judge` for the loose judge-name matching policy
//! - `schedule` for bucketing hearings by day
//! - `month` for month-grid construction and navigation
//!
//! The engine modules are pure: they take a case list and answer queries,
//! performing no I/O and holding no state between invocations.

pub mod case;
pub mod config;
pub mod date_key;
pub mod error;
pub mod judge;
pub mod month;
pub mod schedule;
pub mod summary;

// Re-export the main types at crate root for convenience
pub use case::{Case, CaseStatus};
pub use error::{DocketError, DocketResult};
pub use month::{DayCell, MonthGrid, YearMonth};
pub use schedule::{HearingIndex, assigned_cases};
pub use summary::CaseSummary;
