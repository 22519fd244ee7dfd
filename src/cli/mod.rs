pub mod board;
pub mod demo;
pub mod dues;
pub mod init;
pub mod payments;
pub mod roster;
pub mod status;
pub mod summary;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};

use crate::error::{Result, TesoreroError};
use crate::models::{month_from_name, DueStatus, Member};
use crate::settings::{get_data_dir, load_settings};
use crate::snapshot::Snapshot;

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Month argument: a number or a Spanish month name.
pub(crate) fn parse_month(arg: &str) -> Result<u32> {
    if let Ok(n) = arg.parse::<u32>() {
        return Ok(n);
    }
    month_from_name(arg).ok_or_else(|| TesoreroError::UnknownMonth(arg.to_string()))
}

pub(crate) fn parse_status(arg: &str) -> Result<DueStatus> {
    match arg.to_lowercase().as_str() {
        "paid" | "pagado" => Ok(DueStatus::Paid),
        "pending" | "pendiente" => Ok(DueStatus::Pending),
        "overdue" | "vencido" => Ok(DueStatus::Overdue),
        other => Err(TesoreroError::Other(format!(
            "Unknown status filter: {other} (expected paid, pending or overdue)"
        ))),
    }
}

pub(crate) fn load_snapshot() -> Result<Snapshot> {
    Snapshot::load(&get_data_dir())
}

/// Prepend the club name as a header line if configured.
pub(crate) fn with_header(club: &str, body: String) -> String {
    if club.is_empty() {
        body
    } else {
        format!("{club}\n{body}")
    }
}

/// The member a command acts for: the --member flag, or the configured email.
pub(crate) fn resolve_member<'a>(
    snapshot: &'a Snapshot,
    flag: Option<&str>,
) -> Result<&'a Member> {
    let email = match flag {
        Some(e) => e.to_string(),
        None => load_settings().member_email,
    };
    if email.is_empty() {
        return Err(TesoreroError::Other(
            "No member email: pass --member or set one with `tesorero init --member-email`"
                .to_string(),
        ));
    }
    snapshot
        .member_by_email(&email)
        .ok_or(TesoreroError::UnknownMember(email))
}

#[derive(Parser)]
#[command(
    name = "tesorero",
    about = "Dues and membership tracking CLI for motorcycle clubs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Tesorero: choose a data directory for table snapshots.
    Init {
        /// Path for snapshot data (default: ~/Documents/tesorero)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Email the dues, payments and summary commands default to
        #[arg(long = "member-email")]
        member_email: Option<String>,
        /// Club name shown on report headers
        #[arg(long = "club-name")]
        club_name: Option<String>,
    },
    /// Member roster, with optional search.
    Roster {
        /// Filter by name, nickname or bike make
        #[arg(long)]
        search: Option<String>,
    },
    /// A member's dues for one year, with totals and status filters.
    Dues {
        /// Member email (default: the configured member)
        #[arg(long)]
        member: Option<String>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// Status filter, repeatable: paid, pending, overdue
        #[arg(long = "status")]
        statuses: Vec<String>,
        /// Show every row regardless of status
        #[arg(long)]
        all: bool,
    },
    /// Payment status board: the whole year, or one month with --month.
    Board {
        /// Year (default: latest year with dues)
        #[arg(long)]
        year: Option<i32>,
        /// Month number or Spanish name (e.g. 3 or marzo)
        #[arg(long)]
        month: Option<String>,
    },
    /// A member's payment history, newest first.
    Payments {
        /// Member email (default: the configured member)
        #[arg(long)]
        member: Option<String>,
    },
    /// Club-wide stats: members, collections, your own standing.
    Summary {
        /// Member email for the personal stats (default: the configured member)
        #[arg(long)]
        member: Option<String>,
        /// Year (default: current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Write a sample snapshot to explore Tesorero.
    Demo,
    /// Show settings, data directory and snapshot row counts.
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_accepts_numbers_and_names() {
        assert_eq!(parse_month("3").unwrap(), 3);
        assert_eq!(parse_month("marzo").unwrap(), 3);
        assert_eq!(parse_month("DICIEMBRE").unwrap(), 12);
        assert!(parse_month("brumario").is_err());
    }

    #[test]
    fn test_parse_status_both_languages() {
        assert_eq!(parse_status("paid").unwrap(), DueStatus::Paid);
        assert_eq!(parse_status("Vencido").unwrap(), DueStatus::Overdue);
        assert_eq!(parse_status("pendiente").unwrap(), DueStatus::Pending);
        assert!(parse_status("limbo").is_err());
    }
}
