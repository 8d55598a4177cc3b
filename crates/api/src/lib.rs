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
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cache;
mod dashboard;
mod error;
mod ingest;
mod table;

#[cfg(test)]
mod tests;

pub use cache::{DEFAULT_CAPACITY, DashboardCache};
pub use dashboard::{DashboardReport, UPCOMING_LIMIT, build_dashboard};
pub use error::ApiError;
pub use ingest::{
    CoercionWarning, IngestConfig, IngestReport, RejectedRow, RowError, ingest_csv, ingest_file,
    ingest_reader, ingest_records, ingest_rows, ingest_workbook,
};
pub use table::{
    CONFLICT_MARKER, DepartmentRow, LeaveRow, TableRow, WeeklyRow, conflict_banner, format_date,
    format_departments, format_leave_rows, format_table, format_weekly,
};
