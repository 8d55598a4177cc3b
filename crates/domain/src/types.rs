// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::Serialize;
use std::str::FromStr;
use time::Date;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Approval state of a leave request.
///
/// Only approved requests take part in conflict detection and count as
/// "currently on leave".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ApprovalStatus {
    /// The request was approved (`Sí`).
    Approved,
    /// The request was not approved (`No`).
    NotApproved,
}

impl FromStr for ApprovalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Sí" => Ok(Self::Approved),
            "No" => Ok(Self::NotApproved),
            other => Err(DomainError::InvalidApprovalStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ApprovalStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 2] = [Self::Approved, Self::NotApproved];

    /// Converts this status to the label used in the source spreadsheet.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Sí",
            Self::NotApproved => "No",
        }
    }

    /// Returns whether this status is `Approved`.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// Represents a department identifier.
///
/// Departments are case-sensitive: `Marketing` and `marketing` are two
/// different departments. Surrounding whitespace is trimmed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Department {
    name: String,
}

impl Department {
    /// Creates a new `Department`.
    ///
    /// # Arguments
    ///
    /// * `name` - The department name (surrounding whitespace is removed)
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }

    /// Returns the department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// An inclusive range of calendar days.
///
/// Both bounds belong to the span, so a span that starts and ends on the
/// same day covers one day. A span can never end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateSpan {
    #[serde(with = "iso_date")]
    start: Date,
    #[serde(with = "iso_date")]
    end: Date,
}

impl DateSpan {
    /// Creates a new `DateSpan`.
    ///
    /// # Arguments
    ///
    /// * `start` - The first day of the span
    /// * `end` - The last day of the span
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvertedDateRange` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a span covering exactly one day.
    #[must_use]
    pub const fn single_day(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first day of the span.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day of the span.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Inclusive-bound overlap: touching endpoints count as overlapping.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Returns whether `date` falls within the span, bounds included.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns whether `other` lies entirely within this span.
    #[must_use]
    pub fn encloses(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Number of calendar days covered, both bounds included.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }
}

impl std::fmt::Display for DateSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.start, self.end)
    }
}

/// A single vacation request.
///
/// Records are immutable once loaded. The same employee may own several
/// records; `employee_name` is not an identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaveRecord {
    /// Opaque identifier from the source file, if the file carried one.
    pub id: Option<String>,
    /// The employee's name.
    pub employee_name: String,
    /// The employee's department.
    pub department: Department,
    /// The days the employee is away.
    pub span: DateSpan,
    /// Days requested, as stated in the source. May differ from the span.
    pub requested_days: Option<f64>,
    /// Whether the request was approved.
    pub approval_status: ApprovalStatus,
}

impl LeaveRecord {
    /// Creates a new `LeaveRecord` without a source identifier.
    ///
    /// # Arguments
    ///
    /// * `employee_name` - The employee's name
    /// * `department` - The employee's department
    /// * `span` - The leave interval
    /// * `requested_days` - Days requested, if known
    /// * `approval_status` - Whether the request was approved
    #[must_use]
    pub const fn new(
        employee_name: String,
        department: Department,
        span: DateSpan,
        requested_days: Option<f64>,
        approval_status: ApprovalStatus,
    ) -> Self {
        Self {
            id: None,
            employee_name,
            department,
            span,
            requested_days,
            approval_status,
        }
    }

    /// Attaches the identifier carried by the source row.
    #[must_use]
    pub fn with_id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the first day of leave.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.span.start()
    }

    /// Returns the last day of leave.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.span.end()
    }

    /// Returns whether the request was approved.
    #[must_use]
    pub const fn is_approved(&self) -> bool {
        self.approval_status.is_approved()
    }
}
