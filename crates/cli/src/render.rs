// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text and JSON output for each view.

use std::io::{self, Write};

use leave_board_api::{DashboardReport, LeaveRow, TableRow, WeeklyRow};
use serde_json::json;

use crate::View;

/// Selects the JSON document for a view.
///
/// # Errors
///
/// Returns an error if a value cannot be serialized.
pub fn json(view: View, report: &DashboardReport) -> serde_json::Result<serde_json::Value> {
    match view {
        View::Table => Ok(json!({
            "conflict_banner": report.conflict_banner,
            "rows": report.table,
        })),
        View::Conflicts => serde_json::to_value(&report.conflicts),
        View::Weekly => Ok(json!({
            "summary": report.weekly_summary,
            "rows": report.weekly_rows,
        })),
        View::Departments => Ok(json!({
            "rows": report.department_rows,
            "records_by_department": report.records_by_department,
            "on_leave_by_department": report.on_leave_by_department,
        })),
        View::Current => Ok(json!({
            "summary": report.current_summary,
            "on_leave": report.current_rows,
            "upcoming": report.upcoming,
        })),
        View::Summary => Ok(json!({
            "summary": report.summary,
            "on_leave": report.current.len(),
        })),
        View::Report => serde_json::to_value(report),
    }
}

/// Writes a view as aligned plain text.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn text<W: Write>(out: &mut W, view: View, report: &DashboardReport) -> io::Result<()> {
    match view {
        View::Table => table(out, report),
        View::Conflicts => conflicts(out, report),
        View::Weekly => weekly(out, report),
        View::Departments => departments(out, report),
        View::Current => current(out, report),
        View::Summary => summary(out, report),
        View::Report => {
            summary(out, report)?;
            writeln!(out)?;
            table(out, report)?;
            writeln!(out)?;
            conflicts(out, report)?;
            writeln!(out)?;
            weekly(out, report)?;
            writeln!(out)?;
            departments(out, report)?;
            writeln!(out)?;
            current(out, report)
        }
    }
}

fn days(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("-"), |d| format!("{d:.1}"))
}

fn summary<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    let metrics = &report.summary;
    writeln!(out, "Empleados filtrados:   {}", metrics.total_requests)?;
    writeln!(out, "Días promedio:         {}", days(metrics.mean_requested_days))?;
    writeln!(out, "Porcentaje aprobados:  {:.1}%", metrics.approved_percentage)?;
    writeln!(out, "En vacaciones:         {}", report.current.len())
}

fn table<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    if let Some(banner) = &report.conflict_banner {
        writeln!(out, "{banner}")?;
    }
    writeln!(
        out,
        "{:<3}{:<24}{:<18}{:<12}{:<12}{:>6}  Aprobado",
        "", "Nombre", "Departamento", "Inicio", "Fin", "Días"
    )?;
    for row in &report.table {
        table_row(out, row)?;
    }
    Ok(())
}

fn table_row<W: Write>(out: &mut W, row: &TableRow) -> io::Result<()> {
    writeln!(
        out,
        "{:<3}{:<24}{:<18}{:<12}{:<12}{:>6}  {}",
        row.marker(),
        row.employee,
        row.department,
        row.start,
        row.end,
        days(row.requested_days),
        row.status
    )
}

fn conflicts<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    if report.conflicts.is_empty() {
        return writeln!(out, "Sin conflictos");
    }
    for entry in &report.conflicts {
        writeln!(
            out,
            "{} ({}): {}",
            entry.employee,
            entry.department,
            entry.tooltip()
        )?;
    }
    Ok(())
}

fn weekly<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    let metrics = &report.weekly_summary;
    writeln!(out, "Máximo empleados/semana:   {}", metrics.peak_occupancy)?;
    writeln!(out, "Promedio empleados/semana: {:.1}", metrics.mean_occupancy)?;
    writeln!(out, "Semanas con vacaciones:    {}", metrics.weeks_with_leave)?;
    for row in &report.weekly_rows {
        weekly_row(out, row)?;
    }
    Ok(())
}

fn weekly_row<W: Write>(out: &mut W, row: &WeeklyRow) -> io::Result<()> {
    writeln!(out, "{:<20}{:>4}", row.label, row.occupancy)
}

fn departments<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    if report.current.is_empty() {
        writeln!(out, "No hay empleados actualmente en vacaciones")?;
        writeln!(out, "Distribución General por Departamento:")?;
        for (department, count) in &report.records_by_department {
            writeln!(out, "{:<18}{:>8}", department.name(), count)?;
        }
        return Ok(());
    }

    writeln!(
        out,
        "{:<18}{:>8}{:>8}{:>8}{:>12}{:>8}",
        "Departamento", "Total", "Ahora", "%", "Solicitudes", "Días"
    )?;
    for row in &report.department_rows {
        writeln!(
            out,
            "{:<18}{:>8}{:>8}{:>8.1}{:>12}{:>8.1}",
            row.department,
            row.total_employees,
            row.on_leave_now,
            row.percentage,
            row.request_count,
            row.mean_requested_days
        )?;
    }

    writeln!(out, "En vacaciones por departamento:")?;
    for (department, count) in &report.on_leave_by_department {
        writeln!(out, "{:<18}{:>8}", department.name(), count)?;
    }
    Ok(())
}

fn leave_rows<W: Write>(out: &mut W, rows: &[LeaveRow], with_remaining: bool) -> io::Result<()> {
    for row in rows {
        write!(
            out,
            "{:<24}{:<18}{:<12}{:<12}{:>6}",
            row.employee,
            row.department,
            row.start,
            row.end,
            days(row.requested_days)
        )?;
        if with_remaining {
            write!(out, "{:>6}", row.remaining_days)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn current<W: Write>(out: &mut W, report: &DashboardReport) -> io::Result<()> {
    writeln!(out, "Fecha actual: {}", leave_board_api::format_date(report.reference_date))?;

    if report.current.is_empty() {
        writeln!(out, "No hay empleados actualmente en vacaciones")?;
        writeln!(out, "Próximas vacaciones:")?;
        if report.upcoming.is_empty() {
            return writeln!(out, "No hay vacaciones programadas próximamente");
        }
        return leave_rows(out, &report.upcoming, false);
    }

    let metrics = &report.current_summary;
    writeln!(out, "Total en vacaciones:      {}", metrics.on_leave)?;
    writeln!(out, "Departamentos afectados:  {}", metrics.departments_affected)?;
    writeln!(
        out,
        "Días restantes promedio:  {}",
        metrics
            .mean_remaining_days
            .map_or_else(|| String::from("-"), |d| format!("{d:.0}"))
    )?;
    leave_rows(out, &report.current_rows, true)
}
