// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conflicts;
mod current;
mod departments;
mod error;
mod filter;
mod store;
mod summary;
mod types;
mod validation;
mod weekly;

#[cfg(test)]
mod tests;

pub use conflicts::{
    ConflictEntry, ConflictPeer, conflicting_departments, conflicting_employees, detect_conflicts,
};
pub use current::{CurrentLeaveSummary, on_leave_at, remaining_days, summarize_current, upcoming_leave};
pub use departments::{
    DepartmentRequestStats, DepartmentStat, department_occupancy, department_request_stats,
    records_by_department,
};
pub use filter::LeaveFilter;
pub use store::RecordStore;
pub use summary::{SummaryMetrics, summary_metrics};
pub use weekly::{WeekAttendee, WeekBucket, WeeklySummary, summarize_weeks, week_start_for, weekly_occupancy};

// Re-export public types
pub use error::DomainError;
pub use types::{ApprovalStatus, DateSpan, Department, LeaveRecord, iso_date};
pub use validation::{parse_leave_date, validate_department, validate_record_fields};
