use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::engine::{self, DueIndicator, MonthStatus};
use crate::error::Result;
use crate::models::{DueStatus, Member, MonthlyDue, Payment, KIND_MONTHLY_DUES};

// ---------------------------------------------------------------------------
// Member dues view
// ---------------------------------------------------------------------------

pub struct DuesSummary {
    pub total_paid: f64,
    pub total_outstanding: f64,
    pub paid_count: usize,
    pub total_count: usize,
}

/// Totals over obligation rows by stored status. Legacy rows without a status
/// count as outstanding.
pub fn dues_summary(dues: &[MonthlyDue]) -> DuesSummary {
    let total_paid = dues
        .iter()
        .filter(|d| d.status == Some(DueStatus::Paid))
        .map(|d| d.amount)
        .sum();
    let total_outstanding = dues
        .iter()
        .filter(|d| d.status != Some(DueStatus::Paid))
        .map(|d| d.amount)
        .sum();
    let paid_count = dues
        .iter()
        .filter(|d| d.status == Some(DueStatus::Paid))
        .count();
    DuesSummary {
        total_paid,
        total_outstanding,
        paid_count,
        total_count: dues.len(),
    }
}

pub struct DueRow {
    pub month: u32,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<DateTime<Utc>>,
    pub indicator: DueIndicator,
}

pub struct MemberDuesReport {
    pub rows: Vec<DueRow>,
    pub summary: DuesSummary,
    pub paid_count: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
}

/// One member's obligations for a year. `statuses` filters rows by stored
/// status; an empty filter keeps everything. Summary and per-status counts
/// always cover the whole year.
pub fn get_member_dues(
    member: &Member,
    payments: &[Payment],
    dues: &[MonthlyDue],
    year: i32,
    statuses: &[DueStatus],
    reference: NaiveDate,
) -> MemberDuesReport {
    let mut year_dues: Vec<&MonthlyDue> = dues
        .iter()
        .filter(|d| d.member_id == member.id && d.year == year)
        .collect();
    year_dues.sort_by_key(|d| d.month);

    let count_status = |s: DueStatus| year_dues.iter().filter(|d| d.status == Some(s)).count();
    let paid_count = count_status(DueStatus::Paid);
    let pending_count = count_status(DueStatus::Pending);
    let overdue_count = count_status(DueStatus::Overdue);

    let all: Vec<MonthlyDue> = year_dues.iter().map(|d| (*d).clone()).collect();
    let summary = dues_summary(&all);

    let rows = year_dues
        .iter()
        .filter(|d| statuses.is_empty() || d.status.map_or(false, |s| statuses.contains(&s)))
        .map(|d| DueRow {
            month: d.month,
            amount: d.amount,
            due_date: d.due_date,
            paid_date: d.paid_date,
            indicator: engine::resolve_due(d, payments, &member.email, reference),
        })
        .collect();

    MemberDuesReport {
        rows,
        summary,
        paid_count,
        pending_count,
        overdue_count,
    }
}

// ---------------------------------------------------------------------------
// Payment status board
// ---------------------------------------------------------------------------

pub struct MemberYearRow {
    pub name: String,
    pub nickname: Option<String>,
    pub payments_count: usize,
    pub total_paid: f64,
    pub months: [MonthStatus; 12],
}

/// Year view: per member, dues-payment count and total plus all twelve month
/// classifications. Payments are scoped to the year by transaction date, the
/// same range the remote fetch would apply.
pub fn get_year_board(
    members: &[Member],
    payments: &[Payment],
    dues: &[MonthlyDue],
    year: i32,
    reference: NaiveDate,
) -> Result<Vec<MemberYearRow>> {
    let in_year: Vec<Payment> = payments_in_year(payments, year)
        .into_iter()
        .cloned()
        .collect();
    let mut rows = Vec::with_capacity(members.len());
    for member in sorted_by_name(members) {
        let payments_count = in_year
            .iter()
            .filter(|p| p.is_dues() && p.registered_email == member.email)
            .count();
        rows.push(MemberYearRow {
            name: member.full_name(),
            nickname: member.nickname.clone(),
            payments_count,
            total_paid: engine::total_dues_paid(&in_year, &member.email, None),
            months: engine::classify_year(member, &in_year, dues, year, reference)?,
        });
    }
    Ok(rows)
}

pub struct MonthRollRow {
    pub name: String,
    pub nickname: Option<String>,
    pub paid: bool,
    pub frozen: bool,
}

pub struct MonthBoard {
    pub rows: Vec<MonthRollRow>,
    pub paid_count: usize,
    pub active_count: usize,
    pub frozen_count: usize,
}

/// Month view: who has settled the given month, who is suspended. Active
/// excludes frozen members.
pub fn get_month_board(
    members: &[Member],
    payments: &[Payment],
    dues: &[MonthlyDue],
    month: u32,
    year: i32,
) -> Result<MonthBoard> {
    engine::validate_period(month, year)?;
    let in_year: Vec<Payment> = payments_in_year(payments, year)
        .into_iter()
        .cloned()
        .collect();
    let rows: Vec<MonthRollRow> = sorted_by_name(members)
        .into_iter()
        .map(|m| MonthRollRow {
            name: m.full_name(),
            nickname: m.nickname.clone(),
            paid: engine::has_paid_month(&in_year, &m.email, month, year),
            frozen: engine::is_month_frozen(dues, m.id, month, year),
        })
        .collect();
    let paid_count = rows.iter().filter(|r| r.paid).count();
    let frozen_count = rows.iter().filter(|r| r.frozen).count();
    let active_count = rows.len() - frozen_count;
    Ok(MonthBoard {
        rows,
        paid_count,
        active_count,
        frozen_count,
    })
}

// ---------------------------------------------------------------------------
// Club summary
// ---------------------------------------------------------------------------

pub struct DashboardStats {
    pub total_members: usize,
    pub collected_year: f64,
    pub my_overdue: usize,
    pub next_due_date: Option<NaiveDate>,
}

/// Headline numbers: club size, dues collected over the year, and the calling
/// member's own standing (overdue count and next due date, across all years).
pub fn get_dashboard(
    members: &[Member],
    payments: &[Payment],
    dues: &[MonthlyDue],
    me: Option<&Member>,
    year: i32,
) -> DashboardStats {
    let collected_year = payments
        .iter()
        .filter(|p| p.date.year() == year)
        .filter(|p| {
            p.payment_type.as_deref() == Some(KIND_MONTHLY_DUES)
                || (p.applies_to_month.is_some() && p.applies_to_year == Some(year))
        })
        .map(|p| p.amount)
        .sum();

    let (my_overdue, next_due_date) = match me {
        Some(member) => {
            let mine: Vec<&MonthlyDue> =
                dues.iter().filter(|d| d.member_id == member.id).collect();
            let overdue = mine
                .iter()
                .filter(|d| d.status == Some(DueStatus::Overdue))
                .count();
            let next = mine
                .iter()
                .filter(|d| {
                    matches!(d.status, Some(DueStatus::Pending) | Some(DueStatus::Overdue))
                })
                .map(|d| d.due_date)
                .min();
            (overdue, next)
        }
        None => (0, None),
    };

    DashboardStats {
        total_members: members.len(),
        collected_year,
        my_overdue,
        next_due_date,
    }
}

// ---------------------------------------------------------------------------
// Roster and history
// ---------------------------------------------------------------------------

/// Case-insensitive roster search over name, nickname, and bike make.
pub fn search_members(members: &[Member], term: &str) -> Vec<Member> {
    let needle = term.trim().to_lowercase();
    let mut found: Vec<Member> = members
        .iter()
        .filter(|m| {
            if needle.is_empty() {
                return true;
            }
            let hay = |s: &str| s.to_lowercase().contains(&needle);
            hay(&m.first_name)
                || hay(&m.last_name)
                || m.nickname.as_deref().map_or(false, hay)
                || m.bike_make.as_deref().map_or(false, hay)
        })
        .cloned()
        .collect();
    found.sort_by(|a, b| {
        (a.first_name.as_str(), a.last_name.as_str())
            .cmp(&(b.first_name.as_str(), b.last_name.as_str()))
    });
    found
}

/// A member's payment history, newest first.
pub fn payments_for_member(payments: &[Payment], email: &str) -> Vec<Payment> {
    let mut mine: Vec<Payment> = payments
        .iter()
        .filter(|p| p.registered_email == email)
        .cloned()
        .collect();
    mine.sort_by(|a, b| b.date.cmp(&a.date));
    mine
}

/// Years with provisioned dues, newest first.
pub fn get_available_years(dues: &[MonthlyDue]) -> Vec<i32> {
    let mut years: Vec<i32> = dues.iter().map(|d| d.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

fn payments_in_year(payments: &[Payment], year: i32) -> Vec<&Payment> {
    payments.iter().filter(|p| p.date.year() == year).collect()
}

fn sorted_by_name(members: &[Member]) -> Vec<&Member> {
    let mut sorted: Vec<&Member> = members.iter().collect();
    sorted.sort_by(|a, b| {
        (a.first_name.as_str(), a.last_name.as_str())
            .cmp(&(b.first_name.as_str(), b.last_name.as_str()))
    });
    sorted
}

// ---------------------------------------------------------------------------
