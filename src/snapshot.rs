use std::path::Path;

use crate::error::{Result, TesoreroError};
use crate::models::{Member, MonthlyDue, Payment};

pub const MEMBERS_FILE: &str = "members.json";
pub const PAYMENTS_FILE: &str = "payments.json";
pub const DUES_FILE: &str = "monthly_dues.json";

/// In-memory copy of the hosted store's tables, read from JSON exports in the
/// data directory. A table whose file is missing loads as empty; a file that
/// exists but does not parse is an error.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub payments: Vec<Payment>,
    pub dues: Vec<MonthlyDue>,
}

impl Snapshot {
    pub fn load(dir: &Path) -> Result<Snapshot> {
        Ok(Snapshot {
            members: load_table(&dir.join(MEMBERS_FILE))?,
            payments: load_table(&dir.join(PAYMENTS_FILE))?,
            dues: load_table(&dir.join(DUES_FILE))?,
        })
    }

    pub fn write(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        write_table(&dir.join(MEMBERS_FILE), &self.members)?;
        write_table(&dir.join(PAYMENTS_FILE), &self.payments)?;
        write_table(&dir.join(DUES_FILE), &self.dues)?;
        Ok(())
    }

    pub fn member_by_email(&self, email: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.email == email)
    }
}

/// Whether a snapshot has been written to the directory.
pub fn snapshot_exists(dir: &Path) -> bool {
    dir.join(MEMBERS_FILE).exists()
}

fn load_table<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| TesoreroError::Snapshot(format!("{}: {e}", path.display())))
}

fn write_table<T: serde::Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}
