use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{current_year, load_snapshot, parse_status, resolve_member, today, with_header};
use crate::engine::DueIndicator;
use crate::error::Result;
use crate::fmt::{date_short, indicator_label, money};
use crate::models::{month_name, DueStatus};
use crate::reports::{self, MemberDuesReport};
use crate::settings::load_settings;

pub fn run(member: Option<&str>, year: Option<i32>, statuses: &[String], all: bool) -> Result<()> {
    let snapshot = load_snapshot()?;
    let me = resolve_member(&snapshot, member)?;
    let year = year.unwrap_or_else(current_year);

    // Default filter mirrors the app's initial chips: what still needs paying.
    let filter: Vec<DueStatus> = if all {
        Vec::new()
    } else if statuses.is_empty() {
        vec![DueStatus::Overdue, DueStatus::Pending]
    } else {
        statuses
            .iter()
            .map(|s| parse_status(s))
            .collect::<Result<_>>()?
    };

    let report = reports::get_member_dues(
        me,
        &snapshot.payments,
        &snapshot.dues,
        year,
        &filter,
        today(),
    );
    let club = load_settings().club_name;
    println!(
        "{}",
        with_header(&club, format_dues(&me.full_name(), year, &report))
    );
    Ok(())
}

fn colored_label(indicator: DueIndicator) -> String {
    let label = indicator_label(indicator);
    match indicator {
        DueIndicator::Paid => label.green().to_string(),
        DueIndicator::Frozen => label.cyan().to_string(),
        DueIndicator::Overdue { .. } => label.red().to_string(),
        DueIndicator::DueSoon { .. } => label.yellow().to_string(),
        DueIndicator::Pending => label,
    }
}

fn format_dues(name: &str, year: i32, report: &MemberDuesReport) -> String {
    let mut out = format!("Cuotas de {name} ({year})\n\n");

    if report.summary.total_count == 0 {
        out.push_str(&format!("Sin cuotas registradas para {year}."));
        return out;
    }

    out.push_str(&format!(
        "Total pagado: {}   Por pagar: {}   Cuotas pagadas: {} / {}\n",
        money(report.summary.total_paid).green(),
        money(report.summary.total_outstanding).red(),
        report.summary.paid_count,
        report.summary.total_count
    ));
    out.push_str(&format!(
        "Pagado: {}   Pendiente: {}   Vencido: {}\n",
        report.paid_count, report.pending_count, report.overdue_count
    ));

    if report.rows.is_empty() {
        out.push_str("\nSin cuotas para el filtro elegido.");
        return out;
    }

    let mut table = Table::new();
    table.set_header(vec!["Mes", "Monto", "Vence", "Estado"]);
    for row in &report.rows {
        let mut estado = colored_label(row.indicator);
        if row.indicator == DueIndicator::Paid {
            if let Some(paid) = row.paid_date {
                estado = format!("{estado} ({})", date_short(paid.date_naive()));
            }
        }
        table.add_row(vec![
            Cell::new(month_name(row.month)),
            Cell::new(money(row.amount)),
            Cell::new(date_short(row.due_date)),
            Cell::new(estado),
        ]);
    }
    out.push_str(&format!("\n{table}"));
    out
}
