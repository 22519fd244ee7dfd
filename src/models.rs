use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// The hosted store keeps its legacy Spanish column names; serde renames bind
// them to the English field names used throughout the code.

pub const KIND_MONTHLY_DUES: &str = "cuota_mensual";
pub const KIND_ADVANCE: &str = "pago_adelantado";
pub const KIND_OTHER: &str = "otro_concepto";

pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Spanish month name for a 1-based month; empty string outside 1-12.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// Case-insensitive lookup of a month number from its Spanish name.
pub fn month_from_name(name: &str) -> Option<u32> {
    let needle = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|m| m.to_lowercase() == needle)
        .map(|i| i as u32 + 1)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub email: String,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    #[serde(rename = "apodo")]
    pub nickname: Option<String>,
    #[serde(rename = "puesto")]
    pub position: Option<String>,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "tipo_sangre")]
    pub blood_type: Option<String>,
    #[serde(rename = "marca_moto")]
    pub bike_make: Option<String>,
    #[serde(rename = "modelo")]
    pub bike_model: Option<String>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Assigned by the store; `None` until inserted.
    pub id: Option<i64>,
    pub member_id: i64,
    #[serde(rename = "fecha")]
    pub date: DateTime<Utc>,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "mes_pagado")]
    pub paid_month_label: Option<String>,
    #[serde(rename = "concepto_pago")]
    pub concept: Option<String>,
    #[serde(rename = "comentario")]
    pub comment: Option<String>,
    #[serde(rename = "email_registro")]
    pub registered_email: String,
    #[serde(rename = "tipo_ingreso")]
    pub income_type: Option<String>,
    pub payment_type: Option<String>,
    pub applies_to_month: Option<u32>,
    pub applies_to_year: Option<i32>,
    pub voucher: Option<String>,
}

impl Payment {
    /// The row a voucher submission against a monthly due inserts.
    pub fn for_monthly_due(member: &Member, due: &MonthlyDue, now: DateTime<Utc>) -> Payment {
        Payment {
            id: None,
            member_id: member.id,
            date: now,
            amount: due.amount,
            paid_month_label: Some(month_name(due.month).to_string()),
            concept: None,
            comment: Some(format!("Cuota {} {}", month_name(due.month), due.year)),
            registered_email: member.email.clone(),
            income_type: Some("Cuota".to_string()),
            payment_type: Some(KIND_MONTHLY_DUES.to_string()),
            applies_to_month: Some(due.month),
            applies_to_year: Some(due.year),
            voucher: None,
        }
    }

    /// An ad-hoc payment outside the dues cycle (fines, late fees, extras).
    pub fn other_concept(
        member: &Member,
        concept: &str,
        amount: f64,
        comment: Option<&str>,
        now: DateTime<Utc>,
    ) -> Payment {
        Payment {
            id: None,
            member_id: member.id,
            date: now,
            amount,
            paid_month_label: None,
            concept: Some(concept.to_string()),
            comment: comment.map(|c| c.to_string()),
            registered_email: member.email.clone(),
            income_type: Some("Otro".to_string()),
            payment_type: Some(KIND_OTHER.to_string()),
            applies_to_month: None,
            applies_to_year: None,
            voucher: None,
        }
    }

    /// A payment counts toward monthly dues when tagged as such, or when it
    /// carries the complete structured month/year pair.
    pub fn is_dues(&self) -> bool {
        self.payment_type.as_deref() == Some(KIND_MONTHLY_DUES)
            || (self.applies_to_month.is_some() && self.applies_to_year.is_some())
    }
}

/// Storage object path a voucher upload would use.
pub fn voucher_path(member_id: i64, now: DateTime<Utc>, ext: &str) -> String {
    format!("vouchers/{}_{}.{}", member_id, now.timestamp_millis(), ext)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DueStatus {
    Pending,
    Overdue,
    Paid,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyDue {
    pub id: i64,
    pub member_id: i64,
    pub month: u32,
    pub year: i32,
    pub amount: f64,
    pub due_date: NaiveDate,
    /// Absent on legacy rows; derived at display time when missing.
    pub status: Option<DueStatus>,
    pub paid_date: Option<DateTime<Utc>>,
    pub payment_id: Option<i64>,
    #[serde(default)]
    pub is_frozen: bool,
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

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
            bike_make: Some("Honda".to_string()),
            bike_model: None,
        }
    }

    fn due() -> MonthlyDue {
        MonthlyDue {
            id: 1,
            member_id: 7,
            month: 6,
            year: 2024,
            amount: 100.0,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 6).unwrap(),
            status: None,
            paid_date: None,
            payment_id: None,
            is_frozen: false,
        }
    }

    #[test]
    fn month_names_round_trip() {
        assert_eq!(month_name(1), "Enero");
        assert_eq!(month_name(12), "Diciembre");
        assert_eq!(month_name(0), "");
        assert_eq!(month_name(13), "");
        assert_eq!(month_from_name("marzo"), Some(3));
        assert_eq!(month_from_name("  SEPTIEMBRE "), Some(9));
        assert_eq!(month_from_name("thermidor"), None);
    }

    #[test]
    fn member_decodes_spanish_columns() {
        let raw = r#"{
            "id": 3,
            "email": "ana@club.pe",
            "nombre": "Ana",
            "apellido": "Torres",
            "apodo": "Chispa",
            "puesto": "Presidente",
            "telefono": "999111222",
            "tipo_sangre": "O+",
            "marca_moto": "Yamaha",
            "modelo": "MT-07"
        }"#;
        let m: Member = serde_json::from_str(raw).unwrap();
        assert_eq!(m.first_name, "Ana");
        assert_eq!(m.nickname.as_deref(), Some("Chispa"));
        assert_eq!(m.bike_make.as_deref(), Some("Yamaha"));
        assert_eq!(m.full_name(), "Ana Torres");
    }

    #[test]
    fn payment_decodes_legacy_row_without_structured_fields() {
        let raw = r#"{
            "id": 88,
            "member_id": 3,
            "fecha": "2024-01-09T15:30:00Z",
            "monto": 100,
            "mes_pagado": "Enero",
            "email_registro": "ana@club.pe"
        }"#;
        let p: Payment = serde_json::from_str(raw).unwrap();
        assert_eq!(p.amount, 100.0);
        assert_eq!(p.paid_month_label.as_deref(), Some("Enero"));
        assert_eq!(p.payment_type, None);
        assert_eq!(p.applies_to_month, None);
        assert!(!p.is_dues());
    }

    #[test]
    fn due_decodes_with_defaults() {
        let raw = r#"{
            "id": 5,
            "member_id": 3,
            "month": 2,
            "year": 2024,
            "amount": 100,
            "due_date": "2024-02-06"
        }"#;
        let d: MonthlyDue = serde_json::from_str(raw).unwrap();
        assert_eq!(d.status, None);
        assert!(!d.is_frozen);
        assert_eq!(d.due_date, NaiveDate::from_ymd_opt(2024, 2, 6).unwrap());
    }

    #[test]
    fn dues_builder_fills_structured_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        let p = Payment::for_monthly_due(&member(), &due(), now);
        assert_eq!(p.id, None);
        assert_eq!(p.amount, 100.0);
        assert_eq!(p.paid_month_label.as_deref(), Some("Junio"));
        assert_eq!(p.comment.as_deref(), Some("Cuota Junio 2024"));
        assert_eq!(p.payment_type.as_deref(), Some(KIND_MONTHLY_DUES));
        assert_eq!(p.applies_to_month, Some(6));
        assert_eq!(p.applies_to_year, Some(2024));
        assert_eq!(p.registered_email, "lobo@club.pe");
        assert!(p.is_dues());
    }

    #[test]
    fn other_concept_builder_stays_out_of_dues() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let p = Payment::other_concept(&member(), "Mora", 20.0, Some("Mora Marzo"), now);
        assert_eq!(p.payment_type.as_deref(), Some(KIND_OTHER));
        assert_eq!(p.income_type.as_deref(), Some("Otro"));
        assert!(!p.is_dues());
    }

    #[test]
    fn voucher_path_uses_millis() {
        let now = Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap();
        assert_eq!(
            voucher_path(7, now, "jpg"),
            format!("vouchers/7_{}.jpg", now.timestamp_millis())
        );
    }

    #[test]
    fn due_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DueStatus::Overdue).unwrap(), "\"overdue\"");
        let s: DueStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(s, DueStatus::Paid);
    }
}
