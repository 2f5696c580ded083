mod cli;

use custbook::commands::{self, Listing};
use custbook::{config, demo};
use custbook_db::models::Customer;
use custbook_db::store::{close_store, open_store};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, StoreCommand};
use std::path::{Path, PathBuf};
use std::io::Write;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "custbook=debug,custbook_db=debug".to_string()
        } else {
            "custbook=info,custbook_db=info".to_string()
        }
    });

    // Logs go to stderr; stdout carries the tables.
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Store(StoreCommand::Demo)) {
        Commands::Version => {
            println!("custbook {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Store(command) => run_store_command(command, cli.config.as_deref(), cli.database),
    }
}

/// Load config, open the store, run one command against it, and close it.
fn run_store_command(
    command: StoreCommand,
    config_path: Option<&Path>,
    database: Option<PathBuf>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(path) = database {
        config.database.path = path;
    }
    config::validate_config(&config)?;

    let db_path = config.database.path.clone();
    tracing::debug!("Opening store at {}", db_path.display());

    // An unusable store is reported, not escalated.
    let conn = match open_store(&db_path) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!("Failed to open store {}: {}", db_path.display(), e);
            eprintln!("The error '{}' occurred", e);
            return Ok(());
        }
    };

    let width = config.display.column_width;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        StoreCommand::Demo => {
            writeln!(out, "Connection to {} successful", db_path.display())?;
            demo::run_demo(&conn, &config.display, &mut out)?
        }
        StoreCommand::List { limit, desc } => {
            let listing = match (limit, desc) {
                (Some(n), _) => Listing::First(n),
                (None, true) => Listing::LastNameDesc,
                (None, false) => Listing::All,
            };
            commands::list(&conn, listing, width, &mut out)?
        }
        StoreCommand::Add {
            first_name,
            last_name,
            email,
        } => commands::add(&conn, &Customer::new(first_name, last_name, email), &mut out)?,
        StoreCommand::Show { id } => commands::show(&conn, id, &mut out)?,
        StoreCommand::Find { last_name, email } => commands::find(
            &conn,
            last_name.as_deref(),
            email.as_deref(),
            width,
            &mut out,
        )?,
        StoreCommand::Update {
            id,
            first_name,
            last_name,
            email,
        } => {
            let customer = Customer::new(first_name, last_name, email).with_id(id);
            commands::update(&conn, &customer, &mut out)?
        }
        StoreCommand::Remove { id } => commands::remove(&conn, id, &mut out)?,
        StoreCommand::Drop => commands::drop_table(&conn, &mut out)?,
    }

    drop(out);
    close_store(conn)?;

    Ok(())
}
