// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Department-level occupancy and request statistics.
//!
//! The department universe is always taken from the full record set, so a
//! department with nobody currently away still gets a row.

use crate::types::{Department, LeaveRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Share of a department's workforce currently on leave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentStat {
    /// The department.
    pub department: Department,
    /// Distinct employee names in the department across the full record set.
    pub total_employees: usize,
    /// Distinct employee names of the department in the current subset.
    pub on_leave_now: usize,
    /// `on_leave_now / total_employees * 100`.
    pub percentage: f64,
}

/// Request volume and mean requested days for a department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRequestStats {
    /// The department.
    pub department: Department,
    /// Number of the department's requests with a stated `requested_days`.
    pub request_count: usize,
    /// Mean of the stated requested days, skipping missing values.
    pub mean_requested_days: Option<f64>,
}

fn distinct_names_by_department(records: &[LeaveRecord]) -> BTreeMap<&Department, BTreeSet<&str>> {
    let mut names: BTreeMap<&Department, BTreeSet<&str>> = BTreeMap::new();
    for record in records {
        names
            .entry(&record.department)
            .or_default()
            .insert(record.employee_name.as_str());
    }
    names
}

/// Computes the percentage of each department currently on leave.
///
/// # Arguments
///
/// * `all_records` - The full, unfiltered record set; fixes the department universe
/// * `current` - The records of employees currently on leave
///
/// # Returns
///
/// One `DepartmentStat` per department present in `all_records`, ordered by
/// department name. Departments absent from `current` report zero.
///
/// When `current` is a subset of `all_records` every percentage lies in
/// `[0, 100]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn department_occupancy(
    all_records: &[LeaveRecord],
    current: &[LeaveRecord],
) -> Vec<DepartmentStat> {
    let totals: BTreeMap<&Department, BTreeSet<&str>> = distinct_names_by_department(all_records);
    let away: BTreeMap<&Department, BTreeSet<&str>> = distinct_names_by_department(current);

    totals
        .into_iter()
        .map(|(department, names)| {
            let total_employees: usize = names.len();
            let on_leave_now: usize = away.get(department).map_or(0, BTreeSet::len);
            // Sourced from all_records, so every department has a name
            let percentage: f64 = if total_employees == 0 {
                0.0
            } else {
                on_leave_now as f64 / total_employees as f64 * 100.0
            };

            DepartmentStat {
                department: department.clone(),
                total_employees,
                on_leave_now,
                percentage,
            }
        })
        .collect()
}

/// Counts requests and averages requested days per department.
///
/// Only requests with a stated `requested_days` are counted or averaged.
/// A department whose requests all lack a value still gets a row, with a
/// count of zero and no mean.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn department_request_stats(records: &[LeaveRecord]) -> Vec<DepartmentRequestStats> {
    let mut grouped: BTreeMap<&Department, Vec<f64>> = BTreeMap::new();
    for record in records {
        let days: &mut Vec<f64> = grouped.entry(&record.department).or_default();
        if let Some(value) = record.requested_days {
            days.push(value);
        }
    }

    grouped
        .into_iter()
        .map(|(department, days)| DepartmentRequestStats {
            department: department.clone(),
            request_count: days.len(),
            mean_requested_days: if days.is_empty() {
                None
            } else {
                Some(days.iter().sum::<f64>() / days.len() as f64)
            },
        })
        .collect()
}

/// Number of records per department, in department order.
///
/// Over the full set this is the general distribution of leave records;
/// over the current subset it is who is away now, per department.
#[must_use]
pub fn records_by_department(records: &[LeaveRecord]) -> BTreeMap<Department, usize> {
    let mut counts: BTreeMap<Department, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.department.clone()).or_default() += 1;
    }
    counts
}
