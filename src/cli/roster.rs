use comfy_table::{Cell, Table};

use crate::cli::{load_snapshot, with_header};
use crate::error::Result;
use crate::models::Member;
use crate::reports;
use crate::settings::load_settings;

pub fn run(search: Option<&str>) -> Result<()> {
    let snapshot = load_snapshot()?;
    let members = reports::search_members(&snapshot.members, search.unwrap_or(""));
    if members.is_empty() {
        println!("No members found.");
        return Ok(());
    }
    let club = load_settings().club_name;
    println!("{}", with_header(&club, format_roster(&members)));
    Ok(())
}

fn format_roster(members: &[Member]) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Miembro", "Apodo", "Puesto", "Moto", "Sangre", "Teléfono", "Email",
    ]);
    for m in members {
        let bike = match (m.bike_make.as_deref(), m.bike_model.as_deref()) {
            (Some(make), Some(model)) => format!("{make} {model}"),
            (Some(make), None) => make.to_string(),
            (None, Some(model)) => model.to_string(),
            (None, None) => String::new(),
        };
        table.add_row(vec![
            Cell::new(m.full_name()),
            Cell::new(m.nickname.as_deref().unwrap_or("")),
            Cell::new(m.position.as_deref().unwrap_or("Miembro")),
            Cell::new(bike),
            Cell::new(m.blood_type.as_deref().unwrap_or("")),
            Cell::new(m.phone.as_deref().unwrap_or("")),
            Cell::new(&m.email),
        ]);
    }
    format!("Miembros ({})\n{table}", members.len())
}
