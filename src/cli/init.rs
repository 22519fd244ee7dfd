use crate::error::Result;
use crate::settings::{load_settings, save_settings, settings_file_exists, shellexpand_path};

pub fn run(
    data_dir: Option<&str>,
    member_email: Option<&str>,
    club_name: Option<&str>,
) -> Result<()> {
    let fresh = !settings_file_exists();
    let mut settings = load_settings();

    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(dir);
    }
    if let Some(email) = member_email {
        settings.member_email = email.to_string();
    }
    if let Some(name) = club_name {
        settings.club_name = name.to_string();
    }

    std::fs::create_dir_all(&settings.data_dir)?;
    save_settings(&settings)?;

    println!("Data dir: {}", settings.data_dir);
    if !settings.member_email.is_empty() {
        println!("Member:   {}", settings.member_email);
    }
    if !settings.club_name.is_empty() {
        println!("Club:     {}", settings.club_name);
    }
    if fresh {
        println!();
        println!("Tesorero is ready. Copy your table exports (members.json,");
        println!("payments.json, monthly_dues.json) into the data directory,");
        println!("or run `tesorero demo` to explore with sample data.");
    }
    Ok(())
}
