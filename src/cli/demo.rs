use chrono::{Datelike, Local, NaiveDate, TimeZone, Utc};

use crate::error::Result;
use crate::models::{
    month_name, voucher_path, DueStatus, Member, MonthlyDue, Payment, KIND_ADVANCE,
    KIND_MONTHLY_DUES,
};
use crate::settings::{get_data_dir, settings_file_exists};
use crate::snapshot::{snapshot_exists, Snapshot};

const DUES_AMOUNT: f64 = 100.0;

struct DemoMember {
    first: &'static str,
    last: &'static str,
    nickname: &'static str,
    position: &'static str,
    phone: &'static str,
    blood: &'static str,
    bike_make: &'static str,
    bike_model: &'static str,
    email: &'static str,
}

const DEMO_MEMBERS: &[DemoMember] = &[
    DemoMember { first: "Ana", last: "Torres", nickname: "Chispa", position: "Presidente", phone: "987654321", blood: "O+", bike_make: "Yamaha", bike_model: "MT-07", email: "ana@rutalibre.pe" },
    DemoMember { first: "Carlos", last: "Quispe", nickname: "Lobo", position: "Tesorero", phone: "912345678", blood: "A+", bike_make: "Honda", bike_model: "Africa Twin", email: "carlos@rutalibre.pe" },
    DemoMember { first: "Beto", last: "Ramos", nickname: "Trueno", position: "Sargento de Armas", phone: "955443322", blood: "B-", bike_make: "Harley-Davidson", bike_model: "Iron 883", email: "beto@rutalibre.pe" },
    DemoMember { first: "Lucía", last: "Mendoza", nickname: "Gata", position: "Secretaria", phone: "944556677", blood: "O-", bike_make: "Kawasaki", bike_model: "Z650", email: "lucia@rutalibre.pe" },
    DemoMember { first: "Marco", last: "Silva", nickname: "Oso", position: "Capitán de Ruta", phone: "933221100", blood: "AB+", bike_make: "BMW", bike_model: "G 310 GS", email: "marco@rutalibre.pe" },
    DemoMember { first: "Rosa", last: "Huamán", nickname: "Colibrí", position: "Miembro", phone: "966778899", blood: "A-", bike_make: "Suzuki", bike_model: "V-Strom 650", email: "rosa@rutalibre.pe" },
    DemoMember { first: "Diego", last: "Paredes", nickname: "Rayo", position: "Miembro", phone: "977889900", blood: "O+", bike_make: "KTM", bike_model: "Duke 390", email: "diego@rutalibre.pe" },
];

/// Build a full club year as of `today`: twelve dues per member, past months
/// mostly settled with a few skips, one member on frozen leave, one with
/// legacy rows that predate the structured columns, one advance payment and
/// one fine. Deterministic for a given `today`.
fn build_snapshot(today: NaiveDate) -> Snapshot {
    let year = today.year();
    let members: Vec<Member> = DEMO_MEMBERS
        .iter()
        .enumerate()
        .map(|(i, m)| Member {
            id: i as i64 + 1,
            email: m.email.to_string(),
            first_name: m.first.to_string(),
            last_name: m.last.to_string(),
            nickname: Some(m.nickname.to_string()),
            position: Some(m.position.to_string()),
            phone: Some(m.phone.to_string()),
            blood_type: Some(m.blood.to_string()),
            bike_make: Some(m.bike_make.to_string()),
            bike_model: Some(m.bike_model.to_string()),
        })
        .collect();

    let mut payments: Vec<Payment> = Vec::new();
    let mut dues: Vec<MonthlyDue> = Vec::new();
    let mut next_due_id: i64 = 1;
    let mut next_payment_id: i64 = 1;

    for (i, member) in members.iter().enumerate() {
        for m in 1..=12u32 {
            let mut due = MonthlyDue {
                id: next_due_id,
                member_id: member.id,
                month: m,
                year,
                amount: DUES_AMOUNT,
                due_date: demo_date(year, m, 6),
                status: Some(DueStatus::Pending),
                paid_date: None,
                payment_id: None,
                is_frozen: false,
            };
            next_due_id += 1;

            // Rosa takes the second half of the year off.
            let on_leave = i == 5 && m >= 7;
            // Diego's first quarter predates the structured columns.
            let legacy = i == 6 && m <= 3;

            if on_leave {
                due.is_frozen = true;
            } else if legacy {
                due.status = None;
            } else if m < today.month() {
                if (i + m as usize) % 3 != 0 {
                    let day = 2 + ((i + m as usize) % 4) as u32;
                    let minute = ((i * 7 + m as usize) % 60) as u32;
                    let paid_at = Utc
                        .with_ymd_and_hms(year, m, day, 10, minute, 0)
                        .unwrap();
                    let mut payment = Payment::for_monthly_due(member, &due, paid_at);
                    payment.id = Some(next_payment_id);
                    if (i + m as usize) % 5 == 0 {
                        payment.voucher = Some(voucher_path(member.id, paid_at, "jpg"));
                    }
                    due.status = Some(DueStatus::Paid);
                    due.paid_date = Some(paid_at);
                    due.payment_id = Some(next_payment_id);
                    next_payment_id += 1;
                    payments.push(payment);
                } else {
                    due.status = Some(DueStatus::Overdue);
                }
            }
            dues.push(due);
        }
    }

    // Marco paid December ahead of schedule.
    let marco = &members[4];
    if let Some(pos) = dues
        .iter()
        .position(|d| d.member_id == marco.id && d.month == 12)
    {
        let paid_at = Utc
            .with_ymd_and_hms(year, today.month(), 3, 16, 20, 0)
            .unwrap();
        let mut payment = Payment::for_monthly_due(marco, &dues[pos], paid_at);
        payment.id = Some(next_payment_id);
        payment.payment_type = Some(KIND_ADVANCE.to_string());
        payment.comment = Some(format!("Adelanto cuota Diciembre {year}"));
        dues[pos].status = Some(DueStatus::Paid);
        dues[pos].paid_date = Some(paid_at);
        dues[pos].payment_id = Some(next_payment_id);
        next_payment_id += 1;
        payments.push(payment);
    }

    // Diego's legacy rows: a January payment identified only by its label,
    // and a March late fee that must not count as the March dues.
    let diego = &members[6];
    payments.push(Payment {
        id: Some(next_payment_id),
        member_id: diego.id,
        date: Utc.with_ymd_and_hms(year, 1, 9, 15, 30, 0).unwrap(),
        amount: DUES_AMOUNT,
        paid_month_label: Some("Cuota Enero".to_string()),
        concept: None,
        comment: None,
        registered_email: diego.email.clone(),
        income_type: Some("Cuota".to_string()),
        payment_type: Some(KIND_MONTHLY_DUES.to_string()),
        applies_to_month: None,
        applies_to_year: None,
        voucher: None,
    });
    next_payment_id += 1;
    payments.push(Payment {
        id: Some(next_payment_id),
        member_id: diego.id,
        date: Utc.with_ymd_and_hms(year, 3, 18, 11, 0, 0).unwrap(),
        amount: 20.0,
        paid_month_label: Some("Mora Marzo".to_string()),
        concept: None,
        comment: Some("Recargo por pago tardío".to_string()),
        registered_email: diego.email.clone(),
        income_type: Some("Cuota".to_string()),
        payment_type: Some(KIND_MONTHLY_DUES.to_string()),
        applies_to_month: None,
        applies_to_year: None,
        voucher: None,
    });
    next_payment_id += 1;

    // One fine outside the dues cycle.
    let carlos = &members[1];
    let multa_at = Utc.with_ymd_and_hms(year, 4, 21, 18, 45, 0).unwrap();
    let mut multa = Payment::other_concept(
        carlos,
        "Multa",
        50.0,
        Some("Multa por falta a reunión"),
        multa_at,
    );
    multa.id = Some(next_payment_id);
    payments.push(multa);

    Snapshot {
        members,
        payments,
        dues,
    }
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn run() -> Result<()> {
    if !settings_file_exists() {
        eprintln!("No settings found. Run `tesorero init` first.");
        std::process::exit(1);
    }

    let data_dir = get_data_dir();
    if snapshot_exists(&data_dir) {
        println!(
            "A snapshot already exists in {}.",
            data_dir.display()
        );
        println!("Remove its JSON files to reload the demo data.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let snapshot = build_snapshot(today);
    snapshot.write(&data_dir)?;

    println!("Demo data loaded!");
    println!("  Members:       {}", snapshot.members.len());
    println!("  Payments:      {}", snapshot.payments.len());
    println!("  Monthly dues:  {}", snapshot.dues.len());
    println!();
    println!("Try these next:");
    println!("  tesorero board");
    println!(
        "  tesorero board --month {}",
        month_name(today.month()).to_lowercase()
    );
    println!("  tesorero dues --member diego@rutalibre.pe --all");
    println!("  tesorero summary --member carlos@rutalibre.pe");

    Ok(())
}
