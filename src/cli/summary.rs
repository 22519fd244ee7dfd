use colored::Colorize;

use crate::cli::{current_year, load_snapshot, resolve_member, with_header};
use crate::error::Result;
use crate::fmt::{date_long, money};
use crate::models::Member;
use crate::reports::{self, DashboardStats};
use crate::settings::load_settings;

pub fn run(member: Option<&str>, year: Option<i32>) -> Result<()> {
    let snapshot = load_snapshot()?;
    let year = year.unwrap_or_else(current_year);
    // An explicit --member must resolve; otherwise fall back to the configured
    // member when there is one, or show only the club-wide numbers.
    let me = match member {
        Some(_) => Some(resolve_member(&snapshot, member)?),
        None => resolve_member(&snapshot, None).ok(),
    };
    let stats = reports::get_dashboard(
        &snapshot.members,
        &snapshot.payments,
        &snapshot.dues,
        me,
        year,
    );
    let club = load_settings().club_name;
    println!("{}", with_header(&club, format_summary(year, me, &stats)));
    Ok(())
}

fn format_summary(year: i32, me: Option<&Member>, stats: &DashboardStats) -> String {
    let mut out = format!("Resumen del año {year}\n\n");
    out.push_str(&format!("Miembros:             {}\n", stats.total_members));
    out.push_str(&format!(
        "Recaudado en el año:  {}\n",
        money(stats.collected_year).green()
    ));

    if let Some(member) = me {
        out.push_str(&format!("\nSituación de {}:\n", member.full_name()));
        let overdue = if stats.my_overdue > 0 {
            stats.my_overdue.to_string().red().to_string()
        } else {
            stats.my_overdue.to_string()
        };
        out.push_str(&format!("Cuotas vencidas:      {overdue}\n"));
        match stats.next_due_date {
            Some(date) => {
                out.push_str(&format!("Próximo vencimiento:  {}\n", date_long(date)))
            }
            None => out.push_str("Sin cuotas por vencer.\n"),
        }
    }
    out
}
