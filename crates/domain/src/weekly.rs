// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Week-bucketed occupancy.
//!
//! Weeks run Monday through Sunday. A record is counted in every week its
//! interval touches, so the per-week counts are a headcount, not a partition
//! of the input records.

use crate::types::{DateSpan, Department, LeaveRecord, iso_date};
use serde::Serialize;
use time::{Date, Duration};

/// An employee counted in a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekAttendee {
    /// The employee's name.
    pub employee: String,
    /// The employee's department.
    pub department: Department,
}

/// Occupancy for one Monday-to-Sunday week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    /// The Monday opening the week.
    #[serde(with = "iso_date")]
    pub week_start: Date,
    /// Number of records overlapping the week.
    pub occupancy: usize,
    /// The records overlapping the week, in input order.
    pub on_leave: Vec<WeekAttendee>,
}

impl WeekBucket {
    /// The Sunday closing the week.
    #[must_use]
    pub fn week_end(&self) -> Date {
        week_end_for(self.week_start)
    }
}

/// Headline figures over a sequence of weeks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct WeeklySummary {
    /// Highest occupancy of any week.
    pub peak_occupancy: usize,
    /// Mean occupancy across all weeks.
    pub mean_occupancy: f64,
    /// Number of weeks with at least one employee away.
    pub weeks_with_leave: usize,
}

/// Returns the Monday on or before `date`.
#[must_use]
pub fn week_start_for(date: Date) -> Date {
    let offset: i64 = i64::from(date.weekday().number_days_from_monday());
    date.checked_sub(Duration::days(offset))
        .unwrap_or(Date::MIN)
}

fn week_end_for(week_start: Date) -> Date {
    week_start
        .checked_add(Duration::days(6))
        .unwrap_or(Date::MAX)
}

/// Counts, for every week of the input's span, the records away that week.
///
/// # Arguments
///
/// * `records` - The records to aggregate; no approval filtering is applied
///
/// # Returns
///
/// Buckets in ascending `week_start` order, from the Monday on or before the
/// earliest start date through the week containing the latest end date.
/// Empty input yields an empty vector.
#[must_use]
pub fn weekly_occupancy(records: &[LeaveRecord]) -> Vec<WeekBucket> {
    let Some(earliest) = records.iter().map(LeaveRecord::start).min() else {
        return Vec::new();
    };
    let Some(latest) = records.iter().map(LeaveRecord::end).max() else {
        return Vec::new();
    };

    let mut buckets: Vec<WeekBucket> = Vec::new();
    let mut week_start: Date = week_start_for(earliest);

    while week_start <= latest {
        let week: DateSpan = DateSpan::new(week_start, week_end_for(week_start))
            .unwrap_or_else(|_| DateSpan::single_day(week_start));

        let on_leave: Vec<WeekAttendee> = records
            .iter()
            .filter(|r| r.span.overlaps(&week))
            .map(|r| WeekAttendee {
                employee: r.employee_name.clone(),
                department: r.department.clone(),
            })
            .collect();

        buckets.push(WeekBucket {
            week_start,
            occupancy: on_leave.len(),
            on_leave,
        });

        match week_start.checked_add(Duration::weeks(1)) {
            Some(next) => week_start = next,
            None => break,
        }
    }

    buckets
}

/// Summarizes a sequence of week buckets.
///
/// An empty sequence yields an all-zero summary.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_weeks(buckets: &[WeekBucket]) -> WeeklySummary {
    if buckets.is_empty() {
        return WeeklySummary::default();
    }

    let total: usize = buckets.iter().map(|b| b.occupancy).sum();

    WeeklySummary {
        peak_occupancy: buckets.iter().map(|b| b.occupancy).max().unwrap_or(0),
        mean_occupancy: total as f64 / buckets.len() as f64,
        weeks_with_leave: buckets.iter().filter(|b| b.occupancy > 0).count(),
    }
}
