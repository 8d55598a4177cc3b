// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Department, LeaveRecord};
use std::collections::BTreeSet;
use time::Date;
use time::macros::format_description;

/// Parses a calendar date as written in the spreadsheet export.
///
/// Accepts `YYYY-MM-DD`, optionally followed by a time of day separated by
/// a space or `T` (`2024-07-01 00:00:00`). The time part is discarded.
///
/// # Arguments
///
/// * `value` - The raw cell text
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the date part is not a valid
/// `YYYY-MM-DD` calendar date. Locale forms such as `01/07/2024` are
/// rejected rather than guessed.
pub fn parse_leave_date(value: &str) -> Result<Date, DomainError> {
    let trimmed: &str = value.trim();
    let date_part: &str = trimmed
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);

    Date::parse(date_part, format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: trimmed.to_string(),
            error: e.to_string(),
        }
    })
}

/// Validates that a record's basic field constraints are met.
///
/// The date span is validated when it is constructed, so only the text
/// fields are checked here.
///
/// # Errors
///
/// Returns an error if:
/// - The employee name is empty
/// - The department is empty
pub fn validate_record_fields(record: &LeaveRecord) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if record.employee_name.trim().is_empty() {
        return Err(DomainError::InvalidEmployeeName(String::from(
            "Employee name cannot be empty",
        )));
    }

    // Rule: department must not be empty
    if record.department.name().is_empty() {
        return Err(DomainError::InvalidDepartment(String::from(
            "Department cannot be empty",
        )));
    }

    Ok(())
}

/// Validates a department against a closed catalog.
///
/// When no catalog is configured every non-empty department is accepted.
///
/// # Errors
///
/// Returns `DomainError::InvalidDepartment` if a catalog is given and the
/// department is not part of it.
pub fn validate_department(
    department: &Department,
    catalog: Option<&BTreeSet<Department>>,
) -> Result<(), DomainError> {
    match catalog {
        Some(known) if !known.contains(department) => Err(DomainError::InvalidDepartment(
            format!("'{department}' is not a known department"),
        )),
        _ => Ok(()),
    }
}
