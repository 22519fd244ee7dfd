use chrono::{Datelike, NaiveDate};

use crate::engine::{DueIndicator, MonthStatus};
use crate::models::month_name;

/// Format a float as a sol amount with thousands separators: S/. 1,234.56
pub fn money(val: f64) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-S/. {with_commas}.{dec_part}")
    } else {
        format!("S/. {with_commas}.{dec_part}")
    }
}

/// dd/mm/yyyy, the club's locale convention.
pub fn date_short(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// "6 de junio de 2024"
pub fn date_long(date: NaiveDate) -> String {
    format!(
        "{} de {} de {}",
        date.day(),
        month_name(date.month()).to_lowercase(),
        date.year()
    )
}

/// Status label for a single obligation row, with day counts.
pub fn indicator_label(indicator: DueIndicator) -> String {
    match indicator {
        DueIndicator::Paid => "Pagado".to_string(),
        DueIndicator::Frozen => "Congelado".to_string(),
        DueIndicator::Overdue { days_late } => format!("Vencido ({days_late} días)"),
        DueIndicator::DueSoon { days_left } => format!("Próximo vencimiento ({days_left} días)"),
        DueIndicator::Pending => "Pendiente".to_string(),
    }
}

/// Board cell for one month: a mark for settled/suspended/late months, the
/// three-letter month abbreviation otherwise.
pub fn month_cell(status: MonthStatus, month: u32) -> String {
    match status {
        MonthStatus::Paid => "✓".to_string(),
        MonthStatus::Frozen => "❄".to_string(),
        MonthStatus::Overdue => "✗".to_string(),
        MonthStatus::DueSoon => "!".to_string(),
        MonthStatus::Pending => month_name(month).chars().take(3).collect(),
    }
}
