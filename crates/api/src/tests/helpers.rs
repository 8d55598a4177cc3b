// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures.

use crate::{IngestConfig, IngestReport, ingest_csv};

pub const HEADER: &str =
    "ID,Nombre,Departamento,Fecha inicio vacaciones,Fecha fin vacaciones,Días,Aprobado";

/// Builds CSV text from data lines under the standard header.
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut content: String = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

/// Loads CSV rows with the default configuration.
pub fn load(rows: &[&str]) -> IngestReport {
    ingest_csv(&csv_with_rows(rows), &IngestConfig::default()).unwrap()
}

/// The three-person sample used across tests.
pub fn team_rows() -> Vec<&'static str> {
    vec![
        "1,Alice,Marketing,2024-07-01,2024-07-10,10,Sí",
        "2,Bob,Marketing,2024-07-05,2024-07-12,8,Sí",
        "3,Charlie,Sales,2024-07-01,2024-07-08,8,Sí",
    ]
}
