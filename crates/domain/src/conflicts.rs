// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scheduling-conflict detection.
//!
//! Two approved requests conflict when they belong to the same department
//! and their intervals overlap, touching endpoints included.
//!
//! ## Invariants
//!
//! - Only approved records are subjects or partners of a conflict
//! - Records in different departments never conflict
//! - Conflicts are symmetric: if A lists B then B lists A
//! - Every record with at least one overlapping peer yields exactly one entry
//!
//! The scan is pairwise within each department. Departments are processed
//! independently, so the cost is the sum of the squared department sizes.

use crate::types::{Department, LeaveRecord, iso_date};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use time::Date;

/// A request that overlaps the subject of a `ConflictEntry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictPeer {
    /// The overlapping employee.
    pub employee: String,
    /// First day of the overlapping request.
    #[serde(with = "iso_date")]
    pub start: Date,
    /// Last day of the overlapping request.
    #[serde(with = "iso_date")]
    pub end: Date,
}

/// All approved peers whose leave overlaps one approved request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictEntry {
    /// The employee owning the request.
    pub employee: String,
    /// The department shared with every peer.
    pub department: Department,
    /// Overlapping requests, in start-date order.
    pub peers: Vec<ConflictPeer>,
}

impl ConflictEntry {
    /// Short human-readable summary naming every peer.
    #[must_use]
    pub fn tooltip(&self) -> String {
        let names: Vec<&str> = self.peers.iter().map(|p| p.employee.as_str()).collect();
        format!("Conflicto con: {}", names.join(", "))
    }
}

/// Detects overlapping approved leave within each department.
///
/// # Arguments
///
/// * `records` - The record set to inspect
///
/// # Returns
///
/// One `ConflictEntry` per approved record that overlaps at least one other
/// approved record of its department. Departments appear in ascending name
/// order; within a department entries follow start-date order.
///
/// Empty input, single-record input, or input with no approved records
/// yields an empty vector.
#[must_use]
pub fn detect_conflicts(records: &[LeaveRecord]) -> Vec<ConflictEntry> {
    let mut by_department: BTreeMap<&Department, Vec<&LeaveRecord>> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_approved()) {
        by_department
            .entry(&record.department)
            .or_default()
            .push(record);
    }

    let mut conflicts: Vec<ConflictEntry> = Vec::new();

    for (department, mut members) in by_department {
        // Stable: equal start dates keep their input order
        members.sort_by_key(|r| r.start());

        for (i, current) in members.iter().enumerate() {
            let peers: Vec<ConflictPeer> = members
                .iter()
                .enumerate()
                .filter(|(j, other)| *j != i && other.span.overlaps(&current.span))
                .map(|(_, other)| ConflictPeer {
                    employee: other.employee_name.clone(),
                    start: other.start(),
                    end: other.end(),
                })
                .collect();

            if !peers.is_empty() {
                conflicts.push(ConflictEntry {
                    employee: current.employee_name.clone(),
                    department: department.clone(),
                    peers,
                });
            }
        }
    }

    conflicts
}

/// Distinct departments that have at least one conflict, sorted.
#[must_use]
pub fn conflicting_departments(conflicts: &[ConflictEntry]) -> BTreeSet<Department> {
    conflicts
        .iter()
        .filter(|c| !c.peers.is_empty())
        .map(|c| c.department.clone())
        .collect()
}

/// Names of every employee that is the subject of a conflict.
#[must_use]
pub fn conflicting_employees(conflicts: &[ConflictEntry]) -> BTreeSet<&str> {
    conflicts.iter().map(|c| c.employee.as_str()).collect()
}
