use clap::{Parser, Subcommand};
use custbook_common::CustomerId;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "custbook")]
#[command(author, version, about = "Customer records on an embedded SQLite store")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// SQLite file to use (overrides the config file)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Runs the demo walkthrough when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Store(StoreCommand),

    /// Display version information
    Version,
}

/// Subcommands that work on an open store.
#[derive(Subcommand)]
pub enum StoreCommand {
    /// Run the CRUD walkthrough: create, insert, query, update, delete, drop
    Demo,

    /// List stored customers in storage order
    List {
        /// Only the first N customers
        #[arg(short, long, conflicts_with = "desc")]
        limit: Option<usize>,

        /// Order by last name, descending
        #[arg(long)]
        desc: bool,
    },

    /// Insert one customer
    Add {
        first_name: String,
        last_name: String,
        email: String,
    },

    /// Show one customer by row id
    Show { id: CustomerId },

    /// Find customers by last name and/or email pattern
    Find {
        /// Exact, case-sensitive last name
        #[arg(long)]
        last_name: Option<String>,

        /// SQL LIKE pattern, e.g. '%@aol.de'
        #[arg(long)]
        email: Option<String>,
    },

    /// Overwrite all fields of one customer
    Update {
        id: CustomerId,
        first_name: String,
        last_name: String,
        email: String,
    },

    /// Delete one customer by row id
    Remove { id: CustomerId },

    /// Drop the customers table and all its rows
    Drop,
}
