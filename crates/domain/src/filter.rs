// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Predicate-based subsetting of leave records.

use crate::store::RecordStore;
use crate::types::{ApprovalStatus, DateSpan, Department, LeaveRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Selection criteria applied to a record set.
///
/// A record is kept when its department and approval status are both
/// selected and, if a date range is set, its whole interval lies inside
/// that range. A record that only partially overlaps the range is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LeaveFilter {
    /// Departments to keep.
    pub departments: BTreeSet<Department>,
    /// Approval statuses to keep.
    pub statuses: BTreeSet<ApprovalStatus>,
    /// Optional range every kept record must fit inside.
    pub date_range: Option<DateSpan>,
}

impl LeaveFilter {
    /// Creates a filter from explicit selections.
    #[must_use]
    pub const fn new(
        departments: BTreeSet<Department>,
        statuses: BTreeSet<ApprovalStatus>,
        date_range: Option<DateSpan>,
    ) -> Self {
        Self {
            departments,
            statuses,
            date_range,
        }
    }

    /// Builds the filter that selects everything in `store`.
    ///
    /// All departments and statuses present are selected, and the date
    /// range is the store's own bounds, so applying it keeps every record.
    #[must_use]
    pub fn everything(store: &RecordStore) -> Self {
        Self {
            departments: store.departments(),
            statuses: store.approval_statuses(),
            date_range: store.date_bounds(),
        }
    }

    /// Returns whether a single record passes the filter.
    #[must_use]
    pub fn matches(&self, record: &LeaveRecord) -> bool {
        self.departments.contains(&record.department)
            && self.statuses.contains(&record.approval_status)
            && self
                .date_range
                .is_none_or(|range| range.encloses(&record.span))
    }

    /// Applies the filter, preserving input order.
    ///
    /// Empty input yields empty output. Empty department or status
    /// selections select nothing.
    #[must_use]
    pub fn apply(&self, records: &[LeaveRecord]) -> Vec<LeaveRecord> {
        if records.is_empty() {
            return Vec::new();
        }

        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}
