// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One-shot assembly of every dashboard view.

use crate::table::{
    DepartmentRow, LeaveRow, TableRow, WeeklyRow, conflict_banner, format_departments,
    format_leave_rows, format_table, format_weekly,
};
use leave_board_domain::{
    ConflictEntry, CurrentLeaveSummary, Department, DepartmentRequestStats, DepartmentStat,
    LeaveFilter, LeaveRecord, RecordStore, SummaryMetrics, WeekBucket, WeeklySummary,
    department_occupancy, department_request_stats, detect_conflicts, iso_date, on_leave_at,
    records_by_department, summarize_current, summarize_weeks, summary_metrics, upcoming_leave,
    weekly_occupancy,
};
use serde::Serialize;
use std::collections::BTreeMap;
use time::Date;
use tracing::debug;

/// Number of upcoming requests listed.
pub const UPCOMING_LIMIT: usize = 10;

/// Every view derived from one store, filter and reference date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    /// The day treated as "today".
    #[serde(with = "iso_date")]
    pub reference_date: Date,
    /// The filter that produced `records`.
    pub filter: LeaveFilter,
    /// Records passing the filter.
    pub records: Vec<LeaveRecord>,
    /// Headline figures over `records`.
    pub summary: SummaryMetrics,
    /// Approved same-department overlaps in `records`.
    pub conflicts: Vec<ConflictEntry>,
    /// Conflict warning, when any conflict exists.
    pub conflict_banner: Option<String>,
    /// The main leave table.
    pub table: Vec<TableRow>,
    /// Weekly occupancy buckets.
    pub weeks: Vec<WeekBucket>,
    /// Weekly occupancy table.
    pub weekly_rows: Vec<WeeklyRow>,
    /// Weekly occupancy metrics.
    pub weekly_summary: WeeklySummary,
    /// Approved records covering the reference date.
    pub current: Vec<LeaveRecord>,
    /// Headcount and share away per department.
    pub department_stats: Vec<DepartmentStat>,
    /// Request counts per department, over the whole store.
    pub department_requests: Vec<DepartmentRequestStats>,
    /// Leave records per department, over the whole store.
    pub records_by_department: BTreeMap<Department, usize>,
    /// Records in `current` per department.
    pub on_leave_by_department: BTreeMap<Department, usize>,
    /// Consolidated department table.
    pub department_rows: Vec<DepartmentRow>,
    /// Metrics over `current`.
    pub current_summary: CurrentLeaveSummary,
    /// `current` with days remaining.
    pub current_rows: Vec<LeaveRow>,
    /// Next approved requests starting after the reference date.
    pub upcoming: Vec<LeaveRow>,
}

/// Builds the full dashboard.
///
/// The filter is applied once and most views work on the filtered records.
/// The department views do not: headcounts compare the whole store against
/// the filtered records currently on leave, and request statistics and the
/// per-department record distribution cover the whole store.
///
/// # Arguments
///
/// * `store` - The loaded records
/// * `filter` - The selection to apply
/// * `reference_date` - The day treated as "today"
#[must_use]
pub fn build_dashboard(
    store: &RecordStore,
    filter: &LeaveFilter,
    reference_date: Date,
) -> DashboardReport {
    let records: Vec<LeaveRecord> = filter.apply(store.records());
    debug!(
        total = store.len(),
        kept = records.len(),
        "Applied filter"
    );

    let conflicts: Vec<ConflictEntry> = detect_conflicts(&records);
    let weeks: Vec<WeekBucket> = weekly_occupancy(&records);
    let current: Vec<LeaveRecord> = on_leave_at(&records, reference_date);
    let department_stats: Vec<DepartmentStat> =
        department_occupancy(store.records(), &current);
    let department_requests: Vec<DepartmentRequestStats> =
        department_request_stats(store.records());
    let upcoming: Vec<LeaveRecord> = upcoming_leave(&records, reference_date, UPCOMING_LIMIT);

    debug!(
        conflicts = conflicts.len(),
        weeks = weeks.len(),
        on_leave = current.len(),
        "Aggregated dashboard"
    );

    DashboardReport {
        reference_date,
        filter: filter.clone(),
        summary: summary_metrics(&records),
        conflict_banner: conflict_banner(&conflicts),
        table: format_table(&records, &conflicts),
        weekly_rows: format_weekly(&weeks),
        weekly_summary: summarize_weeks(&weeks),
        department_rows: format_departments(&department_stats, &department_requests),
        current_summary: summarize_current(&current, reference_date),
        current_rows: format_leave_rows(&current, reference_date),
        records_by_department: records_by_department(store.records()),
        on_leave_by_department: records_by_department(&current),
        upcoming: format_leave_rows(&upcoming, reference_date),
        records,
        conflicts,
        weeks,
        current,
        department_stats,
        department_requests,
    }
}
