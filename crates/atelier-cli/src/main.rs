use std::io::Read;
use std::path::Path;

use clap::Parser;
use eyre::Result;

use atelier_cli::cli::{Cli, Command};
use atelier_cli::commands;
use atelier_cli::config;
use atelier_cli::state::AppState;
use atelier_core::models::WorkRecord;
use atelier_core::reconcile::{ImportOutcome, ImportStrategy};
use atelier_storage::store::JsonFileStore;
use atelier_storage::transfer;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let mut cfg = config::load_or_default(&config_path)?;
    if let Some(data) = &cli.data {
        cfg.data_path = data.clone();
    }

    let mut state = AppState::open(JsonFileStore::new(&cfg.data_path))?;

    match cli.command {
        Command::List(args) => {
            let works = commands::list(&state, &args.query());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&works)?);
            } else if works.is_empty() {
                println!("No works found.");
            } else {
                for work in works {
                    print_work(work);
                }
            }
        }
        Command::Add(args) => {
            let created = commands::add(&mut state, args.into_new_work())?;
            println!("Work added: {} ({})", created.title, created.id);
        }
        Command::Edit(args) => {
            let updated = commands::edit(&mut state, &args.id, args.patch())?;
            println!("Work updated: {} ({})", updated.title, updated.id);
        }
        Command::Delete { id } => {
            let removed = commands::delete(&mut state, &id)?;
            println!("Deleted {}. Run `atelier undo` to restore it.", removed.title);
        }
        Command::Undo => match commands::undo(&mut state)? {
            Some(restored) => println!("Restored {}", restored.title),
            None => println!("Nothing to undo."),
        },
        Command::Bulk(args) => {
            let input = read_input(&args.input)?;
            let report = commands::bulk(&mut state, &input, args.dry_run)?;

            for invalid in &report.parsed.invalid {
                println!("  skipped: {}  ({})", invalid.line, invalid.reason);
            }
            if args.dry_run {
                println!(
                    "{} valid, {} invalid (dry run, nothing saved)",
                    report.parsed.valid.len(),
                    report.parsed.invalid.len()
                );
            } else {
                println!(
                    "Added {} works, skipped {} lines",
                    report.created.len(),
                    report.parsed.invalid.len()
                );
            }
        }
        Command::Export(args) => {
            let path = commands::export(&state, &args.out, &cfg.export_filename)?;
            println!("Exported {} works to {}", state.catalog.len(), path.display());
        }
        Command::Import(args) => {
            let outcome = commands::import_file(&mut state, &args.file, args.strategy())?;
            print_import(&outcome);
        }
        Command::Seed(args) => {
            let url = args
                .url
                .or(cfg.seed_url.clone())
                .ok_or_else(|| eyre::eyre!("no seed URL configured; pass --url"))?;
            let outcome = commands::seed(&mut state, &url)?;
            println!("Added {} seed works", outcome.imported);
        }
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(transfer::read_text_file(path)?)
}

fn print_work(work: &WorkRecord) {
    println!("{}  [{}]  {}", work.id, work.work_type, work.title);
    println!("    {}", work.drive_url);
    if let Some(description) = &work.description {
        println!("    {description}");
    }
}

fn print_import(outcome: &ImportOutcome) {
    let noun = if outcome.imported == 1 { "work" } else { "works" };
    match outcome.strategy {
        ImportStrategy::Merge => println!(
            "Merged {} {noun}; catalog now has {}",
            outcome.imported, outcome.total
        ),
        ImportStrategy::Replace => println!("Replaced catalog with {} {noun}", outcome.imported),
    }
}
