//! Shelf CLI Application
//!
//! Command-line interface for the shelf library catalogue. Without a
//! subcommand it starts the interactive numbered menu.

mod args;
mod cli;
mod menu;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use shelf_core::CatalogueBuilder;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let catalogue = CatalogueBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open catalogue")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Shelf started");

    let mut cli = Cli::new(catalogue, renderer, json);
    let result = match command {
        Some(Book { command }) => cli.handle_book_command(command),
        Some(User { command }) => cli.handle_user_command(command),
        Some(Reserve(args)) => cli.reserve(args),
        Some(Status(args)) => cli.reservation_status(args),
        Some(Menu) | None => cli.run_menu(),
    };

    result?;
    cli.close()
}
