// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ingestion of the vacation spreadsheet.
//!
//! The spreadsheet is read either from its CSV export or from the workbook
//! itself (first sheet, first row as header). Missing columns are fatal.
//! Rows that cannot become a valid `LeaveRecord` are quarantined with the
//! reasons attached, and a non-numeric `Días` value is nulled with a
//! warning. Neither stops the load.

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto_from_rs};
use csv::StringRecord;
use leave_board_domain::{
    ApprovalStatus, DateSpan, Department, DomainError, LeaveRecord, RecordStore,
    parse_leave_date, validate_department, validate_record_fields,
};
use std::collections::{BTreeSet, HashMap};
use std::io::Cursor;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use time::macros::date;
use time::{Date, Duration};
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Optional column carrying the source identifier.
const ID_HEADER: &str = "ID";
const NAME_HEADER: &str = "Nombre";
const DEPARTMENT_HEADER: &str = "Departamento";
const START_HEADER: &str = "Fecha inicio vacaciones";
const END_HEADER: &str = "Fecha fin vacaciones";
const DAYS_HEADER: &str = "Días";
const STATUS_HEADER: &str = "Aprobado";

/// Required column headers, as written in the spreadsheet.
const REQUIRED_HEADERS: &[&str] = &[
    NAME_HEADER,
    DEPARTMENT_HEADER,
    START_HEADER,
    END_HEADER,
    DAYS_HEADER,
    STATUS_HEADER,
];

/// File extensions read as workbooks rather than CSV.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Day zero of the spreadsheet serial date system.
const SERIAL_EPOCH: Date = date!(1899 - 12 - 30);

/// Largest serial a spreadsheet can hold (9999-12-31).
const MAX_SERIAL: f64 = 2_958_465.0;

/// Settings that control how rows are validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestConfig {
    /// Closed department catalog. When set, rows naming any other
    /// department are quarantined.
    pub known_departments: Option<BTreeSet<Department>>,
}

impl IngestConfig {
    /// Restricts departments to `known`.
    #[must_use]
    pub fn with_known_departments<I>(known: I) -> Self
    where
        I: IntoIterator<Item = Department>,
    {
        Self {
            known_departments: Some(known.into_iter().collect()),
        }
    }
}

/// Why a row was quarantined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// A required cell is empty.
    #[error("{field}: required field is missing or empty")]
    MissingValue { field: &'static str },

    /// A cell holds a value that cannot be accepted.
    #[error("{field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: DomainError,
    },

    /// The row itself could not be read.
    #[error("CSV parse error: {0}")]
    Malformed(String),
}

/// A row that was left out of the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The employee name, if the row carried one.
    pub employee_name: Option<String>,
    /// Every problem found on the row.
    pub errors: Vec<RowError>,
}

/// A value that was replaced by "missing" during loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionWarning {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The column holding the value.
    pub field: &'static str,
    /// The raw text that failed to convert.
    pub value: String,
}

impl std::fmt::Display for CoercionWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: {} value '{}' is not numeric; treated as missing",
            self.row_number, self.field, self.value
        )
    }
}

/// Outcome of loading a spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// The accepted records.
    pub store: RecordStore,
    /// Rows left out, with reasons.
    pub rejected: Vec<RejectedRow>,
    /// Values nulled during loading.
    pub warnings: Vec<CoercionWarning>,
}

impl IngestReport {
    /// Number of rows seen, accepted or not.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.store.len() + self.rejected.len()
    }
}

/// Normalizes a header for whitespace- and case-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Maps each required header to its column, or lists the missing ones.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();

    // First occurrence wins when a header repeats
    for (idx, header) in headers.iter().enumerate() {
        header_map.entry(normalize_header(header)).or_insert(idx);
    }

    let missing: Vec<String> = REQUIRED_HEADERS
        .iter()
        .filter(|required| !header_map.contains_key(&normalize_header(required)))
        .map(|required| String::from(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::MissingFields { fields: missing });
    }

    Ok(header_map)
}

/// Parses a requested-days cell.
///
/// Empty cells are simply missing. Anything that is not a finite number is
/// also treated as missing, and reported.
fn parse_requested_days(raw: Option<&str>) -> Result<Option<f64>, String> {
    match raw {
        None => Ok(None),
        Some(text) => match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(text.to_string()),
        },
    }
}

/// Returns the trimmed, non-empty text of a named column.
fn cell<'r>(
    record: &'r StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'r str> {
    header_map
        .get(&normalize_header(name))
        .and_then(|&idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Like [`cell`], recording an error when the value is absent.
fn required_cell<'r>(
    record: &'r StringRecord,
    header_map: &HashMap<String, usize>,
    field: &'static str,
    errors: &mut Vec<RowError>,
) -> Option<&'r str> {
    let value: Option<&str> = cell(record, header_map, field);
    if value.is_none() {
        errors.push(RowError::MissingValue { field });
    }
    value
}

/// Converts a date cell, recording an error when it does not parse.
fn date_cell(field: &'static str, raw: Option<&str>, errors: &mut Vec<RowError>) -> Option<Date> {
    match parse_leave_date(raw?) {
        Ok(date) => Some(date),
        Err(reason) => {
            errors.push(RowError::InvalidValue { field, reason });
            None
        }
    }
}

/// Parses one row into a `LeaveRecord`.
///
/// Returns every problem on the row at once rather than stopping at the
/// first, so the quarantine report is complete.
fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    config: &IngestConfig,
    row_number: usize,
    warnings: &mut Vec<CoercionWarning>,
) -> Result<LeaveRecord, Vec<RowError>> {
    let mut errors: Vec<RowError> = Vec::new();

    let name: Option<&str> = required_cell(record, header_map, NAME_HEADER, &mut errors);
    let department: Option<&str> =
        required_cell(record, header_map, DEPARTMENT_HEADER, &mut errors);
    let start_raw: Option<&str> = required_cell(record, header_map, START_HEADER, &mut errors);
    let end_raw: Option<&str> = required_cell(record, header_map, END_HEADER, &mut errors);
    let status_raw: Option<&str> = required_cell(record, header_map, STATUS_HEADER, &mut errors);

    let start: Option<Date> = date_cell(START_HEADER, start_raw, &mut errors);
    let end: Option<Date> = date_cell(END_HEADER, end_raw, &mut errors);

    let status: Option<ApprovalStatus> = match status_raw.map(ApprovalStatus::from_str) {
        Some(Ok(status)) => Some(status),
        Some(Err(reason)) => {
            errors.push(RowError::InvalidValue {
                field: STATUS_HEADER,
                reason,
            });
            None
        }
        None => None,
    };

    let span: Option<DateSpan> = match (start, end) {
        (Some(start), Some(end)) => match DateSpan::new(start, end) {
            Ok(span) => Some(span),
            Err(reason) => {
                errors.push(RowError::InvalidValue {
                    field: END_HEADER,
                    reason,
                });
                None
            }
        },
        _ => None,
    };

    let department: Option<Department> = department.map(Department::new);
    if let Some(department) = &department
        && let Err(reason) = validate_department(department, config.known_departments.as_ref())
    {
        errors.push(RowError::InvalidValue {
            field: DEPARTMENT_HEADER,
            reason,
        });
    }

    let requested_days: Option<f64> =
        match parse_requested_days(cell(record, header_map, DAYS_HEADER)) {
            Ok(days) => days,
            Err(value) => {
                warnings.push(CoercionWarning {
                    row_number,
                    field: DAYS_HEADER,
                    value,
                });
                None
            }
        };

    // Every required value is present once no error was recorded
    let (true, Some(name), Some(department), Some(span), Some(status)) =
        (errors.is_empty(), name, department, span, status)
    else {
        return Err(errors);
    };

    let mut leave: LeaveRecord =
        LeaveRecord::new(String::from(name), department, span, requested_days, status);
    if let Some(id) = cell(record, header_map, ID_HEADER) {
        leave = leave.with_id(String::from(id));
    }

    validate_record_fields(&leave).map_err(|reason| {
        vec![RowError::InvalidValue {
            field: NAME_HEADER,
            reason,
        }]
    })?;

    Ok(leave)
}

/// Loads records from a header row and a sequence of data rows.
///
/// This is the entry point for any row source. CSV input goes through
/// [`ingest_reader`], which feeds this function.
///
/// # Errors
///
/// Returns `ApiError::MissingFields` if any required column is absent.
pub fn ingest_records<I>(
    headers: &StringRecord,
    rows: I,
    config: &IngestConfig,
) -> Result<IngestReport, ApiError>
where
    I: IntoIterator<Item = Result<StringRecord, csv::Error>>,
{
    let header_map: HashMap<String, usize> = validate_headers(headers)?;

    let mut records: Vec<LeaveRecord> = Vec::new();
    let mut rejected: Vec<RejectedRow> = Vec::new();
    let mut warnings: Vec<CoercionWarning> = Vec::new();

    for (idx, result) in rows.into_iter().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!(row_number, "Quarantined unreadable row: {e}");
                rejected.push(RejectedRow {
                    row_number,
                    employee_name: None,
                    errors: vec![RowError::Malformed(e.to_string())],
                });
                continue;
            }
        };

        let mut row_warnings: Vec<CoercionWarning> = Vec::new();
        match parse_row(&record, &header_map, config, row_number, &mut row_warnings) {
            Ok(leave) => {
                for warning in &row_warnings {
                    warn!("{warning}");
                }
                warnings.append(&mut row_warnings);
                records.push(leave);
            }
            Err(errors) => {
                let employee_name: Option<String> =
                    cell(&record, &header_map, NAME_HEADER).map(String::from);

                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                warn!(row_number, "Quarantined row: {}", reasons.join("; "));

                rejected.push(RejectedRow {
                    row_number,
                    employee_name,
                    errors,
                });
            }
        }
    }

    info!(
        accepted = records.len(),
        rejected = rejected.len(),
        warnings = warnings.len(),
        "Loaded leave records"
    );

    Ok(IngestReport {
        store: RecordStore::new(records),
        rejected,
        warnings,
    })
}

/// Loads records from in-memory rows.
///
/// # Errors
///
/// Returns `ApiError::MissingFields` if any required column is absent.
pub fn ingest_rows<H, R>(
    headers: &[H],
    rows: Vec<Vec<R>>,
    config: &IngestConfig,
) -> Result<IngestReport, ApiError>
where
    H: AsRef<str>,
    R: AsRef<str>,
{
    let header_record: StringRecord = headers.iter().collect();
    let data = rows
        .into_iter()
        .map(|row| Ok(row.iter().collect::<StringRecord>()));

    ingest_records(&header_record, data, config)
}

/// Loads records from CSV data.
///
/// # Errors
///
/// Returns an error if:
/// - The header row cannot be read
/// - Any required column is absent
pub fn ingest_reader<R: std::io::Read>(
    reader: R,
    config: &IngestConfig,
) -> Result<IngestReport, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();

    debug!(columns = headers.len(), "Read CSV header row");

    ingest_records(&headers, reader.records(), config)
}

/// Loads records from CSV text.
///
/// # Errors
///
/// See [`ingest_reader`].
pub fn ingest_csv(csv_content: &str, config: &IngestConfig) -> Result<IngestReport, ApiError> {
    ingest_reader(csv_content.as_bytes(), config)
}

/// Converts a spreadsheet serial date to a calendar day, dropping any time
/// of day.
fn serial_to_date(serial: f64) -> Option<Date> {
    if !serial.is_finite() || !(0.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }

    // Bounded above, so the cast is exact
    #[allow(clippy::cast_possible_truncation)]
    let days: i64 = serial.floor() as i64;
    SERIAL_EPOCH.checked_add(Duration::days(days))
}

/// Renders a workbook cell as the text a CSV export would carry.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) | Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Float(value) => value.to_string(),
        Data::Int(value) => value.to_string(),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => serial_to_date(value.as_f64())
            .map_or_else(|| value.as_f64().to_string(), crate::table::format_date),
        Data::Error(e) => e.to_string(),
    }
}

/// Loads records from the first sheet of a workbook held in memory.
///
/// Any format `calamine` recognizes is accepted. Date cells become
/// `YYYY-MM-DD`, and blank rows are skipped.
///
/// # Errors
///
/// Returns an error if:
/// - The data is not a readable workbook or has no sheet
/// - Any required column is absent from the first row
pub fn ingest_workbook(bytes: Vec<u8>, config: &IngestConfig) -> Result<IngestReport, ApiError> {
    let mut workbook: Sheets<Cursor<Vec<u8>>> = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ApiError::InvalidWorkbook {
            reason: e.to_string(),
        })?;

    let range: Range<Data> = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ApiError::InvalidWorkbook {
            reason: String::from("workbook has no sheets"),
        })?
        .map_err(|e| ApiError::InvalidWorkbook {
            reason: e.to_string(),
        })?;

    let mut rows = range.rows();
    let headers: StringRecord = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    debug!(columns = headers.len(), "Read workbook header row");

    let data: Vec<Result<StringRecord, csv::Error>> = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| Ok(row.iter().map(cell_text).collect()))
        .collect();

    ingest_records(&headers, data, config)
}

/// True when `path` names a workbook rather than a CSV export.
fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            WORKBOOK_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Loads records from a file on disk.
///
/// Workbook extensions (`.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods`) go
/// through [`ingest_workbook`]; anything else is read as CSV.
///
/// # Errors
///
/// Returns `ApiError::Io` if the file cannot be opened, otherwise see
/// [`ingest_reader`] and [`ingest_workbook`].
pub fn ingest_file(path: &Path, config: &IngestConfig) -> Result<IngestReport, ApiError> {
    info!("Reading leave records from {}", path.display());

    if is_workbook(path) {
        return ingest_workbook(std::fs::read(path)?, config);
    }

    let file: std::fs::File = std::fs::File::open(path)?;
    ingest_reader(std::io::BufReader::new(file), config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    const HEADER: &str = "ID,Nombre,Departamento,Fecha inicio vacaciones,Fecha fin vacaciones,Días,Aprobado";

    fn csv_with(rows: &[&str]) -> String {
        let mut content: String = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        content
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("Nombre"), "nombre");
        assert_eq!(normalize_header("  Días  "), "días");
        assert_eq!(
            normalize_header("\u{feff}FECHA INICIO VACACIONES"),
            "fecha inicio vacaciones"
        );
    }

    #[test]
    fn test_missing_required_headers() {
        let csv: &str = "Nombre,Departamento\nAlice,Marketing\n";
        let result: Result<IngestReport, ApiError> = ingest_csv(csv, &IngestConfig::default());

        match result {
            Err(ApiError::MissingFields { fields }) => {
                assert_eq!(
                    fields,
                    vec![
                        String::from("Fecha inicio vacaciones"),
                        String::from("Fecha fin vacaciones"),
                        String::from("Días"),
                        String::from("Aprobado"),
                    ]
                );
            }
            other => panic!("Expected MissingFields error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_csv_all_fields() {
        let csv: String = csv_with(&[
            "1,Alice,Marketing,2024-07-01,2024-07-10,8,Sí",
            "2,Bob,Ventas,2024-07-05 00:00:00,2024-07-12 00:00:00,6.5,No",
        ]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.total_rows(), 2);
        assert!(report.rejected.is_empty());
        assert!(report.warnings.is_empty());

        let alice: &LeaveRecord = &report.store.records()[0];
        assert_eq!(alice.id.as_deref(), Some("1"));
        assert_eq!(alice.employee_name, "Alice");
        assert_eq!(alice.department, Department::new("Marketing"));
        assert_eq!(alice.start(), date!(2024 - 07 - 01));
        assert_eq!(alice.end(), date!(2024 - 07 - 10));
        assert_eq!(alice.requested_days, Some(8.0));
        assert_eq!(alice.approval_status, ApprovalStatus::Approved);

        let bob: &LeaveRecord = &report.store.records()[1];
        assert_eq!(bob.start(), date!(2024 - 07 - 05));
        assert_eq!(bob.requested_days, Some(6.5));
        assert_eq!(bob.approval_status, ApprovalStatus::NotApproved);
    }

    #[test]
    fn test_id_column_is_optional() {
        let csv: &str = "Nombre,Departamento,Fecha inicio vacaciones,Fecha fin vacaciones,Días,Aprobado\n\
                         Alice,Marketing,2024-07-01,2024-07-10,8,Sí\n";

        let report: IngestReport = ingest_csv(csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.len(), 1);
        assert_eq!(report.store.records()[0].id, None);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let csv: &str = "Aprobado,Extra,Días,Fecha fin vacaciones,Fecha inicio vacaciones,Departamento,Nombre\n\
                         Sí,ignored,3,2024-07-03,2024-07-01,RRHH,Carla\n";

        let report: IngestReport = ingest_csv(csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.len(), 1);
        assert_eq!(report.store.records()[0].employee_name, "Carla");
    }

    #[test]
    fn test_non_numeric_days_become_missing_with_warning() {
        let csv: String = csv_with(&["1,Alice,Marketing,2024-07-01,2024-07-10,ocho,Sí"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.len(), 1);
        assert_eq!(report.store.records()[0].requested_days, None);
        assert_eq!(
            report.warnings,
            vec![CoercionWarning {
                row_number: 1,
                field: "Días",
                value: String::from("ocho"),
            }]
        );
    }

    #[test]
    fn test_empty_days_are_missing_without_warning() {
        let csv: String = csv_with(&["1,Alice,Marketing,2024-07-01,2024-07-10,,Sí"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.records()[0].requested_days, None);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_non_finite_days_are_coerced() {
        let csv: String = csv_with(&["1,Alice,Marketing,2024-07-01,2024-07-10,NaN,Sí"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.records()[0].requested_days, None);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_unknown_status_is_quarantined() {
        let csv: String = csv_with(&["1,Alice,Marketing,2024-07-01,2024-07-10,8,Maybe"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert!(report.store.is_empty());
        assert_eq!(report.rejected.len(), 1);

        let row: &RejectedRow = &report.rejected[0];
        assert_eq!(row.row_number, 1);
        assert_eq!(row.employee_name.as_deref(), Some("Alice"));
        assert!(row.errors.iter().any(|e| e.to_string().contains("Aprobado")));
    }

    #[test]
    fn test_inverted_range_is_quarantined() {
        let csv: String = csv_with(&["1,Alice,Marketing,2024-07-10,2024-07-01,8,Sí"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert!(report.store.is_empty());
        assert_eq!(
            report.rejected[0].errors,
            vec![RowError::InvalidValue {
                field: "Fecha fin vacaciones",
                reason: DomainError::InvertedDateRange {
                    start: date!(2024 - 07 - 10),
                    end: date!(2024 - 07 - 01),
                },
            }]
        );
    }

    #[test]
    fn test_bad_date_and_missing_name_reported_together() {
        let csv: String = csv_with(&["1,,Marketing,not-a-date,2024-07-10,8,Sí"]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        let errors: &[RowError] = &report.rejected[0].errors;
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&RowError::MissingValue { field: "Nombre" }));
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().starts_with("Fecha inicio vacaciones"))
        );
    }

    #[test]
    fn test_department_catalog_quarantines_unknown_departments() {
        let csv: String = csv_with(&[
            "1,Alice,Marketing,2024-07-01,2024-07-10,8,Sí",
            "2,Bob,marketing,2024-07-01,2024-07-10,8,Sí",
        ]);
        let config: IngestConfig = IngestConfig::with_known_departments([Department::new(
            "Marketing",
        )]);

        let report: IngestReport = ingest_csv(&csv, &config).unwrap();
        assert_eq!(report.store.len(), 1);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].row_number, 2);
    }

    #[test]
    fn test_short_row_is_quarantined_as_malformed() {
        let csv: String = csv_with(&[
            "1,Alice,Marketing,2024-07-01,2024-07-10,8,Sí",
            "2,Bob,Ventas",
        ]);

        let report: IngestReport = ingest_csv(&csv, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.len(), 1);
        assert!(matches!(report.rejected[0].errors[0], RowError::Malformed(_)));
    }

    #[test]
    fn test_header_only_file_yields_empty_store() {
        let report: IngestReport = ingest_csv(&csv_with(&[]), &IngestConfig::default()).unwrap();
        assert!(report.store.is_empty());
        assert_eq!(report.total_rows(), 0);
    }

    #[test]
    fn test_ingest_rows_from_memory() {
        let headers: Vec<&str> = vec![
            "Nombre",
            "Departamento",
            "Fecha inicio vacaciones",
            "Fecha fin vacaciones",
            "Días",
            "Aprobado",
        ];
        let rows: Vec<Vec<&str>> = vec![vec![
            "Alice",
            "Marketing",
            "2024-07-01",
            "2024-07-10",
            "8",
            "Sí",
        ]];

        let report: IngestReport = ingest_rows(&headers, rows, &IngestConfig::default()).unwrap();
        assert_eq!(report.store.len(), 1);
    }

    #[test]
    fn test_serial_to_date() {
        assert_eq!(serial_to_date(45474.0), Some(date!(2024 - 07 - 01)));
        assert_eq!(serial_to_date(45483.75), Some(date!(2024 - 07 - 10)));
        assert_eq!(serial_to_date(0.0), Some(date!(1899 - 12 - 30)));
        assert_eq!(serial_to_date(-1.0), None);
        assert_eq!(serial_to_date(f64::NAN), None);
        assert_eq!(serial_to_date(3_000_000.0), None);
    }

    #[test]
    fn test_cell_text_matches_csv_export() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String(String::from("Sí"))), "Sí");
        assert_eq!(cell_text(&Data::Float(8.5)), "8.5");
        assert_eq!(cell_text(&Data::Float(10.0)), "10");
        assert_eq!(cell_text(&Data::Int(3)), "3");
        assert_eq!(
            cell_text(&Data::DateTimeIso(String::from("2024-07-01T00:00:00"))),
            "2024-07-01T00:00:00"
        );
    }

    #[test]
    fn test_is_workbook_by_extension() {
        assert!(is_workbook(Path::new("vacaciones.xlsx")));
        assert!(is_workbook(Path::new("VACACIONES.XLSX")));
        assert!(is_workbook(Path::new("vacaciones.ods")));
        assert!(!is_workbook(Path::new("vacaciones.csv")));
        assert!(!is_workbook(Path::new("vacaciones")));
    }

    #[test]
    fn test_ingest_file_reads_xlsx_fixture() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/vacaciones.xlsx");
        let report: IngestReport = ingest_file(&path, &IngestConfig::default()).unwrap();

        assert_eq!(report.total_rows(), 4);
        assert_eq!(report.store.len(), 3);

        let alice: &LeaveRecord = &report.store.records()[0];
        assert_eq!(alice.id.as_deref(), Some("1"));
        assert_eq!(alice.employee_name, "Alice");
        assert_eq!(alice.start(), date!(2024 - 07 - 01));
        assert_eq!(alice.end(), date!(2024 - 07 - 10));
        assert_eq!(alice.requested_days, Some(10.0));
        assert_eq!(alice.approval_status, ApprovalStatus::Approved);

        let bob: &LeaveRecord = &report.store.records()[1];
        assert_eq!(bob.start(), date!(2024 - 07 - 05));
        assert_eq!(bob.end(), date!(2024 - 07 - 12));
        assert_eq!(bob.requested_days, Some(8.5));

        // Text date cell alongside a serial date cell
        let charlie: &LeaveRecord = &report.store.records()[2];
        assert_eq!(charlie.start(), date!(2024 - 07 - 01));
        assert_eq!(charlie.end(), date!(2024 - 07 - 08));
        assert_eq!(charlie.requested_days, None);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].value, "pendiente");

        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].row_number, 4);
        assert_eq!(report.rejected[0].employee_name.as_deref(), Some("Dario"));
    }

    #[test]
    fn test_ingest_workbook_rejects_non_workbook_bytes() {
        let result: Result<IngestReport, ApiError> =
            ingest_workbook(b"Nombre,Departamento\n".to_vec(), &IngestConfig::default());
        assert!(matches!(result, Err(ApiError::InvalidWorkbook { .. })));
    }

    #[test]
    fn test_ingest_file_missing_workbook_is_io_error() {
        let result: Result<IngestReport, ApiError> = ingest_file(
            Path::new("/definitely/not/here/vacaciones.xlsx"),
            &IngestConfig::default(),
        );
        assert!(matches!(result, Err(ApiError::Io { .. })));
    }

    #[test]
    fn test_ingest_file_missing_is_io_error() {
        let result: Result<IngestReport, ApiError> = ingest_file(
            Path::new("/definitely/not/here/vacaciones.csv"),
            &IngestConfig::default(),
        );
        assert!(matches!(result, Err(ApiError::Io { .. })));
    }
}
