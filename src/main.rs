mod cli;
mod engine;
mod error;
mod fmt;
mod models;
mod reports;
mod settings;
mod snapshot;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init {
            data_dir,
            member_email,
            club_name,
        } => cli::init::run(data_dir.as_deref(), member_email.as_deref(), club_name.as_deref()),
        Commands::Roster { search } => cli::roster::run(search.as_deref()),
        Commands::Dues {
            member,
            year,
            statuses,
            all,
        } => cli::dues::run(member.as_deref(), year, &statuses, all),
        Commands::Board { year, month } => cli::board::run(year, month.as_deref()),
        Commands::Payments { member } => cli::payments::run(member.as_deref()),
        Commands::Summary { member, year } => cli::summary::run(member.as_deref(), year),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
