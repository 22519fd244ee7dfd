use chrono::{Datelike, NaiveDate};

use crate::error::{Result, TesoreroError};
use crate::models::{month_name, DueStatus, Member, MonthlyDue, Payment};

/// Dues fall due on the 6th calendar day of their month.
pub const DUE_DAY: u32 = 6;
/// A month shows as "due soon" within this many days before its due date.
pub const DUE_SOON_WINDOW_DAYS: i64 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStatus {
    Paid,
    Frozen,
    Overdue,
    DueSoon,
    Pending,
}

/// Row-level status for a single obligation record, with day counts for
/// display. A stored status is authoritative; legacy rows without one are
/// derived from payment matching and the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueIndicator {
    Paid,
    Frozen,
    Overdue { days_late: i64 },
    DueSoon { days_left: i64 },
    Pending,
}

pub fn validate_period(month: u32, year: i32) -> Result<()> {
    if !(1..=12).contains(&month) || year < 1 {
        return Err(TesoreroError::InvalidPeriod { month, year });
    }
    Ok(())
}

pub fn due_date_for(month: u32, year: i32) -> Result<NaiveDate> {
    validate_period(month, year)?;
    NaiveDate::from_ymd_opt(year, month, DUE_DAY)
        .ok_or(TesoreroError::InvalidPeriod { month, year })
}

/// Whole days from `reference` until `due_date`; negative once past due.
pub fn days_until_due(due_date: NaiveDate, reference: NaiveDate) -> i64 {
    (due_date - reference).num_days()
}

/// Whether a single payment record settles the given member-month.
///
/// The structured pair decides when complete; the free-text month label is
/// only consulted for rows that lack it, must not mention "mora" (late fees),
/// and only counts within the year the payment was made.
pub fn payment_covers_month(p: &Payment, email: &str, month: u32, year: i32) -> bool {
    if !(1..=12).contains(&month) || !p.is_dues() || p.registered_email != email {
        return false;
    }
    if p.applies_to_month.is_some() && p.applies_to_year.is_some() {
        return p.applies_to_month == Some(month) && p.applies_to_year == Some(year);
    }
    let label = p.paid_month_label.as_deref().unwrap_or("").to_lowercase();
    label.contains(&month_name(month).to_lowercase())
        && !label.contains("mora")
        && p.date.year() == year
}

pub fn has_paid_month(payments: &[Payment], email: &str, month: u32, year: i32) -> bool {
    payments
        .iter()
        .any(|p| payment_covers_month(p, email, month, year))
}

/// Total of a member's dues payments, optionally restricted to payments made
/// within one year. Fines and other concepts never count.
pub fn total_dues_paid(payments: &[Payment], email: &str, year: Option<i32>) -> f64 {
    payments
        .iter()
        .filter(|p| p.is_dues() && p.registered_email == email)
        .filter(|p| year.map_or(true, |y| p.date.year() == y))
        .map(|p| p.amount)
        .sum()
}

fn due_record<'a>(
    dues: &'a [MonthlyDue],
    member_id: i64,
    month: u32,
    year: i32,
) -> Option<&'a MonthlyDue> {
    dues.iter()
        .find(|d| d.member_id == member_id && d.month == month && d.year == year)
}

pub fn is_month_frozen(dues: &[MonthlyDue], member_id: i64, month: u32, year: i32) -> bool {
    due_record(dues, member_id, month, year)
        .map(|d| d.is_frozen)
        .unwrap_or(false)
}

/// Classify one month of a member's year. First match wins:
/// paid, frozen, overdue, due soon, pending.
pub fn classify_month(
    member: &Member,
    payments: &[Payment],
    dues: &[MonthlyDue],
    month: u32,
    year: i32,
    reference: NaiveDate,
) -> Result<MonthStatus> {
    let due_date = due_date_for(month, year)?;
    if has_paid_month(payments, &member.email, month, year) {
        return Ok(MonthStatus::Paid);
    }
    if is_month_frozen(dues, member.id, month, year) {
        return Ok(MonthStatus::Frozen);
    }
    if due_date < reference {
        return Ok(MonthStatus::Overdue);
    }
    let days = days_until_due(due_date, reference);
    if days > 0 && days <= DUE_SOON_WINDOW_DAYS {
        return Ok(MonthStatus::DueSoon);
    }
    Ok(MonthStatus::Pending)
}

pub fn classify_year(
    member: &Member,
    payments: &[Payment],
    dues: &[MonthlyDue],
    year: i32,
    reference: NaiveDate,
) -> Result<[MonthStatus; 12]> {
    let mut months = [MonthStatus::Pending; 12];
    for (i, slot) in months.iter_mut().enumerate() {
        *slot = classify_month(member, payments, dues, i as u32 + 1, year, reference)?;
    }
    Ok(months)
}

/// Status of a single obligation row. A stored `pending` never re-derives to
/// overdue; a frozen row is never overdue or due soon.
pub fn resolve_due(
    due: &MonthlyDue,
    payments: &[Payment],
    email: &str,
    reference: NaiveDate,
) -> DueIndicator {
    let paid = due.status == Some(DueStatus::Paid)
        || (due.status.is_none() && has_paid_month(payments, email, due.month, due.year));
    if paid {
        return DueIndicator::Paid;
    }
    if due.is_frozen {
        return DueIndicator::Frozen;
    }
    let days = days_until_due(due.due_date, reference);
    match due.status {
        Some(DueStatus::Overdue) => DueIndicator::Overdue {
            days_late: days.abs(),
        },
        None if due.due_date < reference => DueIndicator::Overdue {
            days_late: days.abs(),
        },
        _ => {
            if days > 0 && days <= DUE_SOON_WINDOW_DAYS {
                DueIndicator::DueSoon { days_left: days }
            } else {
                DueIndicator::Pending
            }
        }
    }
}

// ---------------------------------------------------------------------------
