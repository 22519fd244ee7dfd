use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{current_year, load_snapshot, parse_month, today, with_header};
use crate::engine::MonthStatus;
use crate::error::Result;
use crate::fmt::{money, month_cell};
use crate::models::{month_name, MONTH_NAMES};
use crate::reports::{self, MemberYearRow, MonthBoard};
use crate::settings::load_settings;

pub fn run(year: Option<i32>, month: Option<&str>) -> Result<()> {
    let snapshot = load_snapshot()?;
    let year = year.unwrap_or_else(|| {
        reports::get_available_years(&snapshot.dues)
            .first()
            .copied()
            .unwrap_or_else(current_year)
    });
    let club = load_settings().club_name;

    let body = match month {
        Some(arg) => {
            let month = parse_month(arg)?;
            let board = reports::get_month_board(
                &snapshot.members,
                &snapshot.payments,
                &snapshot.dues,
                month,
                year,
            )?;
            format_month_board(month, year, &board)
        }
        None => {
            let rows = reports::get_year_board(
                &snapshot.members,
                &snapshot.payments,
                &snapshot.dues,
                year,
                today(),
            )?;
            format_year_board(year, &rows)
        }
    };
    println!("{}", with_header(&club, body));
    Ok(())
}

fn colored_cell(status: MonthStatus, month: u32) -> String {
    let cell = month_cell(status, month);
    match status {
        MonthStatus::Paid => cell.green().to_string(),
        MonthStatus::Frozen => cell.cyan().to_string(),
        MonthStatus::Overdue => cell.red().to_string(),
        MonthStatus::DueSoon => cell.yellow().to_string(),
        MonthStatus::Pending => cell.dimmed().to_string(),
    }
}

fn format_year_board(year: i32, rows: &[MemberYearRow]) -> String {
    if rows.is_empty() {
        return "No members found.".to_string();
    }

    let mut table = Table::new();
    let mut header = vec!["Miembro".to_string(), "Pagos".to_string(), "Total".to_string()];
    header.extend(
        MONTH_NAMES
            .iter()
            .map(|m| m.chars().take(3).collect::<String>()),
    );
    table.set_header(header);

    for row in rows {
        let name = match &row.nickname {
            Some(nick) => format!("{} \"{nick}\"", row.name),
            None => row.name.clone(),
        };
        let mut cells = vec![
            Cell::new(name),
            Cell::new(row.payments_count),
            Cell::new(money(row.total_paid)),
        ];
        for (i, status) in row.months.iter().enumerate() {
            cells.push(Cell::new(colored_cell(*status, i as u32 + 1)));
        }
        table.add_row(cells);
    }

    format!(
        "Estado de Pagos ({year})\n{table}\n{} pagado   {} congelado   {} vencido   {} por vencer",
        "✓".green(),
        "❄".cyan(),
        "✗".red(),
        "!".yellow()
    )
}

fn format_month_board(month: u32, year: i32, board: &MonthBoard) -> String {
    if board.rows.is_empty() {
        return "No members found.".to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["Miembro", "Estado"]);
    for row in &board.rows {
        let name = match &row.nickname {
            Some(nick) => format!("{} \"{nick}\"", row.name),
            None => row.name.clone(),
        };
        let estado = if row.paid {
            "Pagó".green().to_string()
        } else if row.frozen {
            "Congelado".cyan().to_string()
        } else {
            "No pagó".red().to_string()
        };
        table.add_row(vec![Cell::new(name), Cell::new(estado)]);
    }

    format!(
        "Estado de {} {year}: {} de {} miembros pagaron ({} congelados)\n{table}",
        month_name(month),
        board.paid_count,
        board.active_count,
        board.frozen_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Member;
    use chrono::NaiveDate;

    fn member(id: i64, first: &str, email: &str) -> Member {
        Member {
            id,
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: "Rojas".to_string(),
            nickname: Some("Moto".to_string()),
            position: None,
            phone: None,
            blood_type: None,
            bike_make: None,
            bike_model: None,
        }
    }

    #[test]
    fn test_format_year_board_headers_and_legend() {
        let members = vec![member(1, "Ana", "ana@club.pe")];
        let rows = reports::get_year_board(
            &members,
            &[],
            &[],
            2024,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();
        let out = format_year_board(2024, &rows);
        assert!(out.contains("Estado de Pagos (2024)"));
        assert!(out.contains("Ana Rojas \"Moto\""));
        assert!(out.contains("Ene"));
        assert!(out.contains("Dic"));
        assert!(out.contains("pagado"));
    }

    #[test]
    fn test_format_month_board_counts_line() {
        let members = vec![
            member(1, "Ana", "ana@club.pe"),
            member(2, "Beto", "beto@club.pe"),
        ];
        let board = reports::get_month_board(&members, &[], &[], 6, 2024).unwrap();
        let out = format_month_board(6, 2024, &board);
        assert!(out.contains("Estado de Junio 2024: 0 de 2 miembros pagaron (0 congelados)"));
        assert!(out.contains("No pagó"));
    }
}
