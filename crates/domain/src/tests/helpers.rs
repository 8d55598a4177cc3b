// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApprovalStatus, DateSpan, Department, LeaveRecord};
use time::Date;

pub fn create_test_record(
    name: &str,
    department: &str,
    start: Date,
    end: Date,
    status: ApprovalStatus,
) -> LeaveRecord {
    LeaveRecord::new(
        String::from(name),
        Department::new(department),
        DateSpan::new(start, end).unwrap(),
        Some(7.0),
        status,
    )
}

pub fn approved(name: &str, department: &str, start: Date, end: Date) -> LeaveRecord {
    create_test_record(name, department, start, end, ApprovalStatus::Approved)
}

pub fn not_approved(name: &str, department: &str, start: Date, end: Date) -> LeaveRecord {
    create_test_record(name, department, start, end, ApprovalStatus::NotApproved)
}

pub fn with_days(mut record: LeaveRecord, days: Option<f64>) -> LeaveRecord {
    record.requested_days = days;
    record
}
