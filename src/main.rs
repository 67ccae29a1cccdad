//! mockmail - Prints the sample accounts and mails as JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mockmail::config::Settings;
use mockmail::FixtureSet;

#[derive(Parser)]
#[command(name = "mockmail")]
#[command(about = "Sample accounts and mails for an email client prototype", long_about = None)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixture document to use instead of the built-in data
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Print the whole fixture document
    Dump,
    /// Print the accounts
    Accounts,
    /// Print the inboxes
    Inboxes,
    /// Print the mails
    Mails,
    /// Check the fixtures and report counts
    Validate,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = match cli.config.clone().or_else(Settings::default_path) {
        Some(path) => Settings::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => settings.logging.filter().with_context(|| {
            format!("invalid logging.level {:?}", settings.logging.level)
        })?,
    };

    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let fixtures = FixtureSet::from_settings(cli.fixtures.as_deref(), &settings.fixtures)
        .context("failed to load fixtures")?;
    let pretty = settings.output.pretty && !cli.compact;

    match cli.cmd.unwrap_or(Command::Dump) {
        Command::Dump => println!("{}", fixtures.to_json(pretty)?),
        Command::Accounts => print_json(&fixtures.accounts, pretty)?,
        Command::Inboxes => print_json(&fixtures.inboxes, pretty)?,
        Command::Mails => print_json(&fixtures.mails, pretty)?,
        Command::Validate => {
            fixtures.validate().context("fixtures are invalid")?;
            println!(
                "ok: {} accounts, {} inboxes, {} mails",
                fixtures.accounts.len(),
                fixtures.inboxes.len(),
                fixtures.mails.len()
            );
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
