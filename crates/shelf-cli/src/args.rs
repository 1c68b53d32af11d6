use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BookCommands, ReserveArgs, StatusArgs, UserCommands};

/// Console library catalogue manager
///
/// Shelf keeps books, patrons, and reservations in a SQLite database. Run it
/// without a subcommand for the interactive numbered menu, or use the
/// subcommands below from scripts.
#[derive(Parser)]
#[command(version, about, name = "shelf")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/shelf/library.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print query results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shelf CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage books
    #[command(alias = "b")]
    Book {
        #[command(subcommand)]
        command: BookCommands,
    },
    /// Manage patrons
    #[command(alias = "u")]
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Record a reservation of a book by a patron
    #[command(alias = "r")]
    Reserve(ReserveArgs),
    /// Look up reservation status by LB<id>, LU<id>, LR<id>, or title
    #[command(alias = "s")]
    Status(StatusArgs),
    /// Start the interactive menu (the default)
    Menu,
}
