// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

/// API-level errors.
///
/// These are fatal: when one is returned no partial result exists.
/// Problems confined to a single row or value are reported through the
/// ingest report instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// One or more required columns are absent from the input.
    MissingFields {
        /// The display names of every missing column.
        fields: Vec<String>,
    },
    /// The input is not readable as CSV.
    InvalidCsvFormat {
        /// A human-readable description of the problem.
        reason: String,
    },
    /// The input is not a readable workbook.
    InvalidWorkbook {
        /// A human-readable description of the problem.
        reason: String,
    },
    /// The input could not be read.
    Io {
        /// A description of the I/O failure.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "Missing required columns: {}", fields.join(", "))
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::InvalidWorkbook { reason } => write!(f, "Invalid workbook: {reason}"),
            Self::Io { message } => write!(f, "I/O error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}
