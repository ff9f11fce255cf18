// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::error;

use theatre_importer::application::commands::{database_stats, import_file, ImportKind};
use theatre_importer::application::{exit_code, AppState};
use theatre_importer::db::DATABASE_PATH_ENV;
use theatre_importer::error::AppError;

/// Import plays, casts and theatres into the theatre database
#[derive(Parser, Debug)]
#[command(name = "theatre-importer", version, about)]
struct Cli {
    /// SQLite database file
    #[arg(short, long, global = true, env = DATABASE_PATH_ENV)]
    database: Option<PathBuf>,

    /// Import into a throwaway in-memory database
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import an XML file with a <Plays> root
    Plays { file: PathBuf },
    /// Import an XML file with a <Casts> root
    Casts { file: PathBuf },
    /// Import a JSON array of theatres with their tickets
    Theatres { file: PathBuf },
    /// Print row counts per table
    Stats,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:#}", err);
            let code = err.downcast_ref::<AppError>().map(exit_code).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    // 1. INFRASTRUCTURE, REPOSITORIES, SERVICES
    let state = AppState::open(cli.database.as_deref(), cli.dry_run)?;

    // 2. DISPATCH
    let (kind, file) = match cli.command {
        Command::Plays { file } => (ImportKind::Plays, file),
        Command::Casts { file } => (ImportKind::Casts, file),
        Command::Theatres { file } => (ImportKind::Theatres, file),
        Command::Stats => return Ok(database_stats(&state)?.to_string()),
    };

    let report = import_file(&state, kind, &file)
        .with_context(|| format!("Failed to import {} from {}", kind, file.display()))?;

    Ok(report)
}
