// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # leave-board
//!
//! Loads the vacation spreadsheet export and prints one view of the
//! dashboard: the leave table, conflicts, weekly occupancy, department
//! figures, who is away now, or everything at once.
//!
//! Logs go to stderr so that `--format json` output on stdout can be piped.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use leave_board_api::{DashboardReport, IngestConfig, IngestReport, build_dashboard, ingest_file};
use leave_board_domain::{
    ApprovalStatus, DateSpan, Department, LeaveFilter, RecordStore, parse_leave_date,
};
use time::{Date, OffsetDateTime};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(args.log_level().into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(
    name = "leave-board",
    version,
    about = "Vacation dashboard for a spreadsheet of leave requests",
    styles = clap_cargo::style::CLAP_STYLING
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Leave table with conflict markers
    #[command(visible_alias = "t")]
    Table(ViewArgs),

    /// Overlapping approved leave within a department
    #[command(visible_alias = "c")]
    Conflicts(ViewArgs),

    /// Employees away per week
    #[command(visible_alias = "w")]
    Weekly(ViewArgs),

    /// Headcount, share away and requests per department
    #[command(visible_alias = "d")]
    Departments(ViewArgs),

    /// Who is away on the reference date and who leaves next
    #[command(visible_alias = "now")]
    Current(ViewArgs),

    /// Headline figures
    #[command(visible_alias = "s")]
    Summary(ViewArgs),

    /// Every view
    #[command(visible_alias = "r")]
    Report(ViewArgs),
}

/// Which part of the dashboard to print.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum View {
    Table,
    Conflicts,
    Weekly,
    Departments,
    Current,
    Summary,
    Report,
}

impl Command {
    fn run(self) -> Result<()> {
        let (view, args): (View, ViewArgs) = match self {
            Self::Table(args) => (View::Table, args),
            Self::Conflicts(args) => (View::Conflicts, args),
            Self::Weekly(args) => (View::Weekly, args),
            Self::Departments(args) => (View::Departments, args),
            Self::Current(args) => (View::Current, args),
            Self::Summary(args) => (View::Summary, args),
            Self::Report(args) => (View::Report, args),
        };

        let dashboard: DashboardReport = args.load()?;

        let stdout: std::io::Stdout = std::io::stdout();
        let mut out: std::io::StdoutLock<'_> = stdout.lock();
        match args.format {
            OutputFormat::Text => render::text(&mut out, view, &dashboard)?,
            OutputFormat::Json => {
                let value: serde_json::Value = render::json(view, &dashboard)?;
                serde_json::to_writer_pretty(&mut out, &value)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Aligned plain-text tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Options shared by every view.
#[derive(Clone, Debug, clap::Args)]
struct ViewArgs {
    /// Vacation spreadsheet: a workbook (.xlsx, .ods, ...) or its CSV export
    #[arg(short, long, value_name = "FILE")]
    file: PathBuf,

    /// Keep only this department (repeatable; default: all)
    #[arg(short, long = "department", value_name = "NAME")]
    departments: Vec<String>,

    /// Keep only this approval status (repeatable; default: all)
    #[arg(short, long = "status", value_name = "STATUS", value_parser = parse_status)]
    statuses: Vec<ApprovalStatus>,

    /// Keep only leave starting on or after this date
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "to")]
    from: Option<Date>,

    /// Keep only leave ending on or before this date
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date, requires = "from")]
    to: Option<Date>,

    /// Day treated as today (default: current UTC date)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    today: Option<Date>,

    /// Reject rows naming any department not listed (repeatable)
    #[arg(long = "known-department", value_name = "NAME")]
    known_departments: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ViewArgs {
    fn ingest_config(&self) -> IngestConfig {
        if self.known_departments.is_empty() {
            IngestConfig::default()
        } else {
            IngestConfig::with_known_departments(
                self.known_departments.iter().map(|d| Department::new(d)),
            )
        }
    }

    fn leave_filter(&self, store: &RecordStore) -> Result<LeaveFilter> {
        let mut filter: LeaveFilter = LeaveFilter::everything(store);

        if !self.departments.is_empty() {
            filter.departments = self.departments.iter().map(|d| Department::new(d)).collect();
        }
        if !self.statuses.is_empty() {
            filter.statuses = self.statuses.iter().copied().collect();
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            filter.date_range = Some(DateSpan::new(from, to).wrap_err("Invalid --from/--to range")?);
        }

        Ok(filter)
    }

    fn reference_date(&self) -> Date {
        self.today
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }

    fn load(&self) -> Result<DashboardReport> {
        let report: IngestReport = ingest_file(&self.file, &self.ingest_config())
            .wrap_err_with(|| format!("Failed to load {}", self.file.display()))?;

        for rejected in &report.rejected {
            let reasons: Vec<String> = rejected.errors.iter().map(ToString::to_string).collect();
            warn!(
                "Skipped row {} ({}): {}",
                rejected.row_number,
                rejected.employee_name.as_deref().unwrap_or("unnamed"),
                reasons.join("; ")
            );
        }

        let filter: LeaveFilter = self.leave_filter(&report.store)?;
        let reference_date: Date = self.reference_date();
        info!(
            rows = report.total_rows(),
            accepted = report.store.len(),
            %reference_date,
            "Building dashboard"
        );

        Ok(build_dashboard(&report.store, &filter, reference_date))
    }
}

fn parse_date(value: &str) -> std::result::Result<Date, String> {
    parse_leave_date(value).map_err(|e| e.to_string())
}

fn parse_status(value: &str) -> std::result::Result<ApprovalStatus, String> {
    match value.trim().to_lowercase().as_str() {
        "approved" => Ok(ApprovalStatus::Approved),
        "not-approved" => Ok(ApprovalStatus::NotApproved),
        _ => value.parse::<ApprovalStatus>().map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn view_args(args: &[&str]) -> ViewArgs {
        let mut argv: Vec<&str> = vec!["leave-board", "table", "--file", "leave.csv"];
        argv.extend_from_slice(args);
        match Args::try_parse_from(argv).unwrap().command {
            Command::Table(view) => view,
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn test_file_is_required() {
        assert!(Args::try_parse_from(["leave-board", "summary"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let view: ViewArgs = view_args(&[]);
        assert_eq!(view.file, PathBuf::from("leave.csv"));
        assert!(view.departments.is_empty());
        assert!(view.statuses.is_empty());
        assert_eq!(view.from, None);
        assert_eq!(view.format, OutputFormat::Text);
        assert_eq!(view.ingest_config(), IngestConfig::default());
    }

    #[test]
    fn test_repeatable_filters() {
        let view: ViewArgs = view_args(&[
            "-d",
            "Marketing",
            "--department",
            "Ventas",
            "--status",
            "Sí",
            "--status",
            "not-approved",
        ]);
        assert_eq!(view.departments, vec!["Marketing", "Ventas"]);
        assert_eq!(
            view.statuses,
            vec![ApprovalStatus::Approved, ApprovalStatus::NotApproved]
        );
    }

    #[test]
    fn test_status_aliases() {
        assert_eq!(parse_status("approved"), Ok(ApprovalStatus::Approved));
        assert_eq!(parse_status("No"), Ok(ApprovalStatus::NotApproved));
        assert!(parse_status("maybe").is_err());
    }

    #[test]
    fn test_date_range_needs_both_ends() {
        let argv = ["leave-board", "weekly", "--file", "x.csv", "--from", "2024-07-01"];
        assert!(Args::try_parse_from(argv).is_err());

        let view: ViewArgs = view_args(&["--from", "2024-07-01", "--to", "2024-07-31"]);
        assert_eq!(view.from, Some(date!(2024 - 07 - 01)));
        assert_eq!(view.to, Some(date!(2024 - 07 - 31)));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let argv = ["leave-board", "current", "--file", "x.csv", "--today", "July 4th"];
        assert!(Args::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_today_overrides_clock() {
        let view: ViewArgs = view_args(&["--today", "2024-07-06"]);
        assert_eq!(view.reference_date(), date!(2024 - 07 - 06));
    }

    #[test]
    fn test_filter_defaults_to_whole_store() {
        let view: ViewArgs = view_args(&[]);
        let store: RecordStore = RecordStore::default();
        let filter: LeaveFilter = view.leave_filter(&store).unwrap();
        assert_eq!(filter, LeaveFilter::everything(&store));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let view: ViewArgs = view_args(&["--from", "2024-07-31", "--to", "2024-07-01"]);
        assert!(view.leave_filter(&RecordStore::default()).is_err());
    }

    #[test]
    fn test_known_departments_build_catalog() {
        let view: ViewArgs = view_args(&["--known-department", "Marketing"]);
        assert_eq!(
            view.ingest_config(),
            IngestConfig::with_known_departments([Department::new("Marketing")])
        );
    }

    #[test]
    fn test_json_format_flag() {
        let view: ViewArgs = view_args(&["--format", "json"]);
        assert_eq!(view.format, OutputFormat::Json);
    }
}
