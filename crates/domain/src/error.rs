// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while constructing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A leave interval ends before it starts.
    InvertedDateRange {
        /// The first day of the interval.
        start: Date,
        /// The last day of the interval.
        end: Date,
    },
    /// Approval status is not one of the recognized labels.
    InvalidApprovalStatus(String),
    /// Department identifier is empty or outside the known catalog.
    InvalidDepartment(String),
    /// Employee name is empty or invalid.
    InvalidEmployeeName(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedDateRange { start, end } => {
                write!(f, "Leave ends on {end}, before it starts on {start}")
            }
            Self::InvalidApprovalStatus(value) => {
                write!(
                    f,
                    "Invalid approval status '{value}' (must be 'Sí' or 'No')"
                )
            }
            Self::InvalidDepartment(msg) => write!(f, "Invalid department: {msg}"),
            Self::InvalidEmployeeName(msg) => write!(f, "Invalid employee name: {msg}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
