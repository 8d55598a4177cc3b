// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Immutable record store.
//!
//! The store is built once per loaded file and is read-only afterwards.
//! Cloning a store shares the underlying records.

use crate::types::{ApprovalStatus, DateSpan, Department, LeaveRecord};
use std::collections::BTreeSet;
use std::sync::Arc;

/// The full set of leave records loaded for a session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Arc<[LeaveRecord]>,
}

impl RecordStore {
    /// Creates a store that owns `records`.
    #[must_use]
    pub fn new(records: Vec<LeaveRecord>) -> Self {
        Self {
            records: Arc::from(records),
        }
    }

    /// Returns every record, in load order.
    #[must_use]
    pub fn records(&self) -> &[LeaveRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct departments present in the store, sorted.
    #[must_use]
    pub fn departments(&self) -> BTreeSet<Department> {
        self.records.iter().map(|r| r.department.clone()).collect()
    }

    /// Distinct approval statuses present in the store, sorted.
    #[must_use]
    pub fn approval_statuses(&self) -> BTreeSet<ApprovalStatus> {
        self.records.iter().map(|r| r.approval_status).collect()
    }

    /// The span from the earliest start date to the latest end date.
    ///
    /// Returns `None` for an empty store.
    #[must_use]
    pub fn date_bounds(&self) -> Option<DateSpan> {
        let earliest = self.records.iter().map(LeaveRecord::start).min()?;
        let latest = self.records.iter().map(LeaveRecord::end).max()?;
        DateSpan::new(earliest, latest).ok()
    }
}

impl From<Vec<LeaveRecord>> for RecordStore {
    fn from(records: Vec<LeaveRecord>) -> Self {
        Self::new(records)
    }
}
