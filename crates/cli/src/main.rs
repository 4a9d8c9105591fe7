// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! dutybook operational CLI: database setup, lookup seeding,
//! bank-holiday sync, and month-end reporting.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod holidays;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::eyre::Result;
use dutybook_domain::{DayType, Month, MonthlyReport, SeniorityTier, Staff};
use dutybook_persistence::Persistence;
use holidays::FeedSource;
use std::path::PathBuf;
use tracing::info;

/// Minimum days between holiday syncs unless forced.
const SYNC_INTERVAL_DAYS: i64 = 30;

/// dutybook - on-call rota and timesheet tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the `SQLite` database file.
    #[arg(short, long, default_value = "dutybook.db")]
    database: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Create the database file and bring its schema up to date.
    Init,
    /// Seed the stock task types and work modes.
    Seed,
    /// Onboard a staff member.
    AddStaff {
        /// Unique assignment identifier (e.g. JD001).
        assignment_id: String,
        /// The person's display name.
        name: String,
        /// Seniority tier: trainee, oncall, or senior.
        #[arg(long, default_value = "trainee")]
        seniority: String,
        /// Hex display color for the rota calendar.
        #[arg(long, default_value = Staff::DEFAULT_COLOR)]
        color: String,
    },
    /// Refresh the bank-holiday cache from a snapshot or the GOV.UK
    /// feed.
    SyncHolidays {
        /// Which feed source to consult.
        #[arg(long, value_enum, default_value = "auto")]
        source: FeedSource,
        /// Path to the snapshot file.
        #[arg(long, default_value = "data/bank-holidays.json")]
        snapshot: PathBuf,
        /// Region division within the feed.
        #[arg(long, default_value = holidays::DEFAULT_REGION)]
        region: String,
        /// Sync even if the cache was refreshed recently.
        #[arg(long)]
        force: bool,
    },
    /// Print the monthly claim report.
    Report {
        /// The year (e.g. 2025).
        year: u16,
        /// The month number (1-12).
        month: u8,
    },
    /// Print per-staff sign-off status for a month.
    SignoffStatus {
        /// The year (e.g. 2025).
        year: u16,
        /// The month number (1-12).
        month: u8,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(cli.verbosity.log_level_filter().to_string())
            }),
        )
        .init();

    let mut persistence = Persistence::new_with_file(&cli.database)?;

    match cli.command {
        CliCommand::Init => {
            // Opening the database has already run the migrations.
            info!(database = %cli.database.display(), "Database initialized");
            println!("Database ready at {}", cli.database.display());
        }
        CliCommand::Seed => seed_lookups(&mut persistence)?,
        CliCommand::AddStaff {
            assignment_id,
            name,
            seniority,
            color,
        } => {
            let tier: SeniorityTier = seniority.parse()?;
            let member = Staff::new(&assignment_id, name, tier, color);
            let staff_id = persistence.create_staff(&member)?;
            println!("Added {} (id {staff_id})", member.assignment_id());
        }
        CliCommand::SyncHolidays {
            source,
            snapshot,
            region,
            force,
        } => sync_holidays(&mut persistence, source, &snapshot, &region, force)?,
        CliCommand::Report { year, month } => {
            let month = Month::new(year, month)?;
            let report = persistence.monthly_report(month)?;
            print_report(&report);
            if let Some(signoff) = persistence.get_report_signoff(month)? {
                println!(
                    "Report signed off at {} ({} staff, {} hours, {} claims at signing)",
                    signoff.signed_off_at(),
                    signoff.staff_count(),
                    signoff.total_hours(),
                    signoff.total_claims()
                );
            }
        }
        CliCommand::SignoffStatus { year, month } => {
            let month = Month::new(year, month)?;
            print_signoff_status(&mut persistence, month)?;
        }
    }

    Ok(())
}

/// The stock lookup rows a fresh deployment starts with.
fn seed_lookups(persistence: &mut Persistence) -> Result<()> {
    let task_types = [
        ("Telephone advice", "secondary"),
        ("Lab attendance", "primary"),
        ("Crossmatch", "danger"),
        ("Component issue", "info"),
        ("Admin", "light"),
    ];
    let work_modes = [
        ("WFH", "primary"),
        ("Lab", "success"),
        ("Senior cover", "warning"),
    ];

    for (name, color) in task_types {
        persistence.seed_task_type(name, color)?;
    }
    for (name, color) in work_modes {
        persistence.seed_work_mode(name, color)?;
    }

    println!(
        "Seeded {} task types and {} work modes",
        task_types.len(),
        work_modes.len()
    );
    Ok(())
}

fn sync_holidays(
    persistence: &mut Persistence,
    source: FeedSource,
    snapshot: &std::path::Path,
    region: &str,
    force: bool,
) -> Result<()> {
    // Skip quiet re-syncs: the dataset changes a handful of times a
    // year.
    if !force {
        if let Some(last) = persistence.latest_holiday_update()? {
            let age_days = (chrono::Local::now().naive_local() - last).num_days();
            if age_days < SYNC_INTERVAL_DAYS {
                println!("Last sync was {age_days} days ago. Use --force to override.");
                return Ok(());
            }
        }
    }

    let holidays = holidays::load_holidays(source, snapshot, region)?;
    let stats = persistence.upsert_bank_holidays(&holidays)?;
    println!(
        "Synced {} bank holidays (created {}, updated {})",
        holidays.len(),
        stats.created,
        stats.updated
    );
    Ok(())
}

fn print_report(report: &MonthlyReport) {
    println!("Monthly report - {}", report.month);

    if report.staff_reports.is_empty() {
        println!("  No records for this month.");
        return;
    }

    for staff_report in &report.staff_reports {
        let lock = if staff_report.is_signed_off {
            "signed off"
        } else {
            "open"
        };
        println!(
            "  {} - {} ({} blocks, {lock})",
            staff_report.staff.assignment_id(),
            staff_report.staff.name(),
            staff_report.block_count
        );
        for day_type in DayType::all() {
            let bucket = staff_report.breakdown.get(day_type);
            if bucket.hours.is_zero() && bucket.claims.is_zero() {
                continue;
            }
            println!(
                "    {:<12} hours {:>8}  claims {:>8}",
                day_type.as_str(),
                bucket.hours,
                bucket.claims
            );
        }
        println!(
            "    {:<12} hours {:>8}  claims {:>8}",
            "Total", staff_report.total_hours, staff_report.total_claims
        );
    }

    println!(
        "  Grand total: {} hours, {} claims",
        report.grand_total_hours, report.grand_total_claims
    );
    if let Some(summary) = &report.signoff_summary {
        println!(
            "  Sign-offs: {}/{} staff signed off ({} pending)",
            summary.signed_off_count, summary.total_staff, summary.pending_count
        );
    }
}

fn print_signoff_status(persistence: &mut Persistence, month: Month) -> Result<()> {
    let summaries = persistence.staff_month_summaries(month)?;
    println!("Sign-off status - {month}");

    if summaries.is_empty() {
        println!("  No records for this month.");
        return Ok(());
    }

    for summary in &summaries {
        match &summary.signoff {
            Some(signoff) => println!(
                "  {} - {} blocks, {} hours, {} claims - signed off at {}",
                summary.staff.assignment_id(),
                summary.block_count,
                summary.total_hours,
                summary.total_claims,
                signoff.signed_off_at()
            ),
            None => println!(
                "  {} - {} blocks, {} hours, {} claims - pending",
                summary.staff.assignment_id(),
                summary.block_count,
                summary.total_hours,
                summary.total_claims
            ),
        }
    }
    Ok(())
}
