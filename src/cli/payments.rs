use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::{load_snapshot, resolve_member, with_header};
use crate::error::Result;
use crate::fmt::{date_short, money};
use crate::models::{Payment, KIND_ADVANCE, KIND_MONTHLY_DUES};
use crate::reports;
use crate::settings::load_settings;

pub fn run(member: Option<&str>) -> Result<()> {
    let snapshot = load_snapshot()?;
    let member = resolve_member(&snapshot, member)?;
    let payments = reports::payments_for_member(&snapshot.payments, &member.email);
    let club = load_settings().club_name;
    println!(
        "{}",
        with_header(&club, format_payments(&member.full_name(), &payments))
    );
    Ok(())
}

fn kind_badge(payment: &Payment) -> &'static str {
    match payment.payment_type.as_deref() {
        Some(KIND_MONTHLY_DUES) => "Cuota",
        Some(KIND_ADVANCE) => "Adelanto",
        _ => "Otro",
    }
}

fn payment_title(payment: &Payment) -> String {
    payment
        .concept
        .as_deref()
        .or(payment.paid_month_label.as_deref())
        .unwrap_or("Pago")
        .to_string()
}

fn format_payments(name: &str, payments: &[Payment]) -> String {
    if payments.is_empty() {
        return format!("Pagos de {name}\n\nSin pagos registrados.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        "Fecha",
        "Concepto",
        "Tipo",
        "Monto",
        "Comentario",
        "Voucher",
    ]);
    for p in payments {
        table.add_row(vec![
            Cell::new(date_short(p.date.date_naive())),
            Cell::new(payment_title(p)),
            Cell::new(kind_badge(p)),
            Cell::new(money(p.amount).green().to_string()),
            Cell::new(p.comment.as_deref().unwrap_or("")),
            Cell::new(if p.voucher.is_some() { "✓" } else { "" }),
        ]);
    }

    let total: f64 = payments.iter().map(|p| p.amount).sum();
    format!(
        "Pagos de {name}\n{table}\nTotal registrado: {}",
        money(total).green()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, MonthlyDue};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn member() -> Member {
        Member {
            id: 7,
            email: "lobo@club.pe".to_string(),
            first_name: "Carlos".to_string(),
            last_name: "Quispe".to_string(),
            nickname: Some("Lobo".to_string()),
            position: Some("Tesorero".to_string()),
            phone: None,
            blood_type: None,
            bike_make: None,
            bike_model: None,
        }
    }

    fn due(month: u32) -> MonthlyDue {
        MonthlyDue {
            id: month as i64,
            member_id: 7,
            month,
            year: 2024,
            amount: 100.0,
            due_date: NaiveDate::from_ymd_opt(2024, month, 6).unwrap(),
            status: None,
            paid_date: None,
            payment_id: None,
            is_frozen: false,
        }
    }

    #[test]
    fn test_kind_badges() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        let dues = Payment::for_monthly_due(&member(), &due(6), now);
        assert_eq!(kind_badge(&dues), "Cuota");

        let mut advance = Payment::for_monthly_due(&member(), &due(12), now);
        advance.payment_type = Some(KIND_ADVANCE.to_string());
        assert_eq!(kind_badge(&advance), "Adelanto");

        let other = Payment::other_concept(&member(), "Multa", 50.0, None, now);
        assert_eq!(kind_badge(&other), "Otro");
    }

    #[test]
    fn test_title_prefers_concept_over_month_label() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        let dues = Payment::for_monthly_due(&member(), &due(6), now);
        assert_eq!(payment_title(&dues), "Junio");

        let other = Payment::other_concept(&member(), "Multa", 50.0, None, now);
        assert_eq!(payment_title(&other), "Multa");

        let mut bare = other.clone();
        bare.concept = None;
        assert_eq!(payment_title(&bare), "Pago");
    }

    #[test]
    fn test_format_lists_total() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        let payments = vec![
            Payment::for_monthly_due(&member(), &due(6), now),
            Payment::other_concept(&member(), "Multa", 50.0, Some("Llegó tarde"), now),
        ];
        let out = format_payments("Carlos Quispe", &payments);
        assert!(out.contains("Pagos de Carlos Quispe"));
        assert!(out.contains("Multa"));
        assert!(out.contains("Llegó tarde"));
        assert!(out.contains("S/. 150.00"));
    }

    #[test]
    fn test_format_empty_history() {
        let out = format_payments("Carlos Quispe", &[]);
        assert!(out.contains("Sin pagos registrados."));
    }
}
