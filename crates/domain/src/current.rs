// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Queries relative to a reference date.
//!
//! "Today" is always passed in by the caller. Nothing in this module reads
//! the system clock.

use crate::types::LeaveRecord;
use serde::Serialize;
use std::collections::BTreeSet;
use time::Date;

/// Headline figures for the employees away on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct CurrentLeaveSummary {
    /// Number of approved requests covering the day.
    pub on_leave: usize,
    /// Number of distinct departments among them.
    pub departments_affected: usize,
    /// Mean of the days left until each request ends.
    pub mean_remaining_days: Option<f64>,
}

/// Approved records whose interval covers `reference_date`.
#[must_use]
pub fn on_leave_at(records: &[LeaveRecord], reference_date: Date) -> Vec<LeaveRecord> {
    records
        .iter()
        .filter(|r| r.is_approved() && r.span.contains(reference_date))
        .cloned()
        .collect()
}

/// Approved records starting after `reference_date`, soonest first.
///
/// # Arguments
///
/// * `records` - The records to search
/// * `reference_date` - The day considered "today"
/// * `limit` - Maximum number of records returned
#[must_use]
pub fn upcoming_leave(
    records: &[LeaveRecord],
    reference_date: Date,
    limit: usize,
) -> Vec<LeaveRecord> {
    let mut upcoming: Vec<LeaveRecord> = records
        .iter()
        .filter(|r| r.is_approved() && r.start() > reference_date)
        .cloned()
        .collect();
    upcoming.sort_by_key(LeaveRecord::start);
    upcoming.truncate(limit);
    upcoming
}

/// Whole days from `reference_date` until the record's last day.
///
/// Negative when the leave already ended.
#[must_use]
pub fn remaining_days(record: &LeaveRecord, reference_date: Date) -> i64 {
    (record.end() - reference_date).whole_days()
}

/// Summarizes the approved records covering `reference_date`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_current(records: &[LeaveRecord], reference_date: Date) -> CurrentLeaveSummary {
    let current: Vec<LeaveRecord> = on_leave_at(records, reference_date);
    if current.is_empty() {
        return CurrentLeaveSummary::default();
    }

    let departments: BTreeSet<&str> = current.iter().map(|r| r.department.name()).collect();
    let remaining_total: i64 = current
        .iter()
        .map(|r| remaining_days(r, reference_date))
        .sum();

    CurrentLeaveSummary {
        on_leave: current.len(),
        departments_affected: departments.len(),
        mean_remaining_days: Some(remaining_total as f64 / current.len() as f64),
    }
}
