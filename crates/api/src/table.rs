// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Display-ready rows.
//!
//! Everything here maps aggregated results to plain structures with
//! preformatted text. No styling or layout is applied.

use leave_board_domain::{
    ConflictEntry, DepartmentRequestStats, DepartmentStat, LeaveRecord, WeekBucket,
    conflicting_departments, conflicting_employees, remaining_days,
};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};
use time::Date;
use time::macros::format_description;

/// Marker shown next to employees involved in a conflict.
pub const CONFLICT_MARKER: &str = "⚠️";

/// One row of the main leave table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    /// Whether the employee appears in any conflict.
    pub conflict: bool,
    /// The employee's name.
    pub employee: String,
    /// The employee's department.
    pub department: String,
    /// First day of leave, `YYYY-MM-DD`.
    pub start: String,
    /// Last day of leave, `YYYY-MM-DD`.
    pub end: String,
    /// Requested days, if stated.
    pub requested_days: Option<f64>,
    /// Approval label (`Sí` / `No`).
    pub status: String,
}

impl TableRow {
    /// The conflict marker, or an empty string.
    #[must_use]
    pub const fn marker(&self) -> &'static str {
        if self.conflict { CONFLICT_MARKER } else { "" }
    }
}

/// One row of the weekly occupancy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyRow {
    /// `Semana YYYY-MM-DD`.
    pub label: String,
    /// The Monday opening the week, `YYYY-MM-DD`.
    pub week_start: String,
    /// Employees away that week.
    pub occupancy: usize,
}

/// One row of the consolidated department table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRow {
    /// The department.
    pub department: String,
    /// Distinct employees in the department.
    pub total_employees: usize,
    /// Distinct employees away now.
    pub on_leave_now: usize,
    /// Share away now, rounded to one decimal.
    pub percentage: f64,
    /// Requests with stated days, across the whole store.
    pub request_count: usize,
    /// Mean requested days, rounded to one decimal; `0.0` when unknown.
    pub mean_requested_days: f64,
}

/// One row listing a request relative to a reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRow {
    /// The employee's name.
    pub employee: String,
    /// The employee's department.
    pub department: String,
    /// First day of leave, `YYYY-MM-DD`.
    pub start: String,
    /// Last day of leave, `YYYY-MM-DD`.
    pub end: String,
    /// Requested days, if stated.
    pub requested_days: Option<f64>,
    /// Days from the reference date until the last day of leave.
    pub remaining_days: i64,
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Builds the main leave table.
///
/// Records sharing the same employee, start and end collapse into the
/// first of them; input order is otherwise kept. Rows are flagged when the
/// employee's name appears in any conflict entry.
///
/// # Arguments
///
/// * `records` - The records to display
/// * `conflicts` - Conflicts detected over the same records
#[must_use]
pub fn format_table(records: &[LeaveRecord], conflicts: &[ConflictEntry]) -> Vec<TableRow> {
    let flagged: BTreeSet<&str> = conflicting_employees(conflicts);
    let mut seen: HashSet<(&str, Date, Date)> = HashSet::new();

    records
        .iter()
        .filter(|r| seen.insert((r.employee_name.as_str(), r.start(), r.end())))
        .map(|r| TableRow {
            conflict: flagged.contains(r.employee_name.as_str()),
            employee: r.employee_name.clone(),
            department: r.department.name().to_string(),
            start: format_date(r.start()),
            end: format_date(r.end()),
            requested_days: r.requested_days,
            status: r.approval_status.as_str().to_string(),
        })
        .collect()
}

/// Warning line naming every department with a conflict.
///
/// Returns `None` when there are no conflicts.
#[must_use]
pub fn conflict_banner(conflicts: &[ConflictEntry]) -> Option<String> {
    let departments: Vec<String> = conflicting_departments(conflicts)
        .into_iter()
        .map(|d| d.name().to_string())
        .collect();

    if departments.is_empty() {
        return None;
    }

    Some(format!(
        "{CONFLICT_MARKER} Conflictos detectados en: {}",
        departments.join(", ")
    ))
}

/// Builds the weekly occupancy table.
#[must_use]
pub fn format_weekly(buckets: &[WeekBucket]) -> Vec<WeeklyRow> {
    buckets
        .iter()
        .map(|b| {
            let week_start: String = format_date(b.week_start);
            WeeklyRow {
                label: format!("Semana {week_start}"),
                week_start,
                occupancy: b.occupancy,
            }
        })
        .collect()
}

/// Joins occupancy and request statistics into one table.
///
/// Rows follow `stats`. Departments without request statistics report zero
/// requests and `0.0` mean days.
#[must_use]
pub fn format_departments(
    stats: &[DepartmentStat],
    request_stats: &[DepartmentRequestStats],
) -> Vec<DepartmentRow> {
    let requests: HashMap<&str, &DepartmentRequestStats> = request_stats
        .iter()
        .map(|s| (s.department.name(), s))
        .collect();

    stats
        .iter()
        .map(|stat| {
            let request: Option<&&DepartmentRequestStats> = requests.get(stat.department.name());
            DepartmentRow {
                department: stat.department.name().to_string(),
                total_employees: stat.total_employees,
                on_leave_now: stat.on_leave_now,
                percentage: round_one_decimal(stat.percentage),
                request_count: request.map_or(0, |r| r.request_count),
                mean_requested_days: round_one_decimal(
                    request
                        .and_then(|r| r.mean_requested_days)
                        .unwrap_or(0.0),
                ),
            }
        })
        .collect()
}

/// Lists records with the days left relative to `reference_date`.
#[must_use]
pub fn format_leave_rows(records: &[LeaveRecord], reference_date: Date) -> Vec<LeaveRow> {
    records
        .iter()
        .map(|r| LeaveRow {
            employee: r.employee_name.clone(),
            department: r.department.name().to_string(),
            start: format_date(r.start()),
            end: format_date(r.end()),
            requested_days: r.requested_days,
            remaining_days: remaining_days(r, reference_date),
        })
        .collect()
}
