use crate::error::Result;
use crate::settings::load_settings;
use crate::snapshot::{snapshot_exists, Snapshot};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);

    let club = if settings.club_name.is_empty() {
        "(not set)"
    } else {
        &settings.club_name
    };
    let member = if settings.member_email.is_empty() {
        "(not set)"
    } else {
        &settings.member_email
    };
    println!("Club:       {club}");
    println!("Member:     {member}");
    println!("Data dir:   {}", data_dir.display());

    if snapshot_exists(&data_dir) {
        let snapshot = Snapshot::load(&data_dir)?;
        println!();
        println!("Members:       {}", snapshot.members.len());
        println!("Payments:      {}", snapshot.payments.len());
        println!("Monthly dues:  {}", snapshot.dues.len());
    } else {
        println!();
        println!("No snapshot found. Copy your table exports into the data");
        println!("directory, or run `tesorero demo` to explore with sample data.");
    }

    Ok(())
}
