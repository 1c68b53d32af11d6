//! Subcommand definitions and their handlers.
//!
//! Argument structs carry the clap derives and convert into the plain
//! parameter structs of `shelf_core::params` with `From`, so clap never
//! reaches the core crate:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalogue
//! ```

use std::io;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil::Date, Zoned};
use log::debug;
use serde::Serialize;
use shelf_core::{
    display::{BOOK_NOT_FOUND, RESERVATION_NOT_FOUND},
    params::{AddBook, AddUser, Id, ReserveBook, UpdateBook},
    BookDetails, Catalogue, CreateResult, DeleteResult, UpdateResult, Users,
};

use crate::{menu::Menu, renderer::TerminalRenderer};

/// Add a new book to the catalogue
#[derive(Args)]
pub struct AddBookArgs {
    #[arg(help = "Title of the book")]
    pub title: String,
    #[arg(help = "Author of the book")]
    pub author: String,
    #[arg(help = "ISBN of the book (not validated)")]
    pub isbn: String,
    #[arg(
        short,
        long,
        default_value = "available",
        help = "Initial status, e.g. available or reserved"
    )]
    pub status: String,
}

impl From<AddBookArgs> for AddBook {
    fn from(val: AddBookArgs) -> Self {
        AddBook {
            title: val.title,
            author: val.author,
            isbn: val.isbn,
            status: val.status,
        }
    }
}

/// Identify a single book
#[derive(Args)]
pub struct BookIdArgs {
    #[arg(help = "Unique identifier of the book")]
    pub id: u64,
}

impl From<BookIdArgs> for Id {
    fn from(val: BookIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change a book's status
///
/// Reports success even when no book has the given id.
#[derive(Args)]
pub struct UpdateBookArgs {
    #[arg(help = "Unique identifier of the book to update")]
    pub id: u64,
    #[arg(help = "New status text")]
    pub status: String,
}

impl From<UpdateBookArgs> for UpdateBook {
    fn from(val: UpdateBookArgs) -> Self {
        UpdateBook {
            id: val.id,
            status: val.status,
        }
    }
}

#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a new book
    #[command(alias = "a")]
    Add(AddBookArgs),
    /// Show a book and its current reservation
    #[command(alias = "s")]
    Show(BookIdArgs),
    /// List every book in the catalogue
    #[command(alias = "l")]
    List,
    /// Change a book's status
    #[command(alias = "u")]
    Update(UpdateBookArgs),
    /// Delete a book and its reservations
    #[command(alias = "d")]
    Delete(BookIdArgs),
}

/// Register a new patron
#[derive(Args)]
pub struct AddUserArgs {
    #[arg(help = "Patron name")]
    pub name: String,
    #[arg(help = "Patron email address")]
    pub email: String,
}

impl From<AddUserArgs> for AddUser {
    fn from(val: AddUserArgs) -> Self {
        AddUser {
            name: val.name,
            email: val.email,
        }
    }
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new patron
    #[command(alias = "a")]
    Add(AddUserArgs),
    /// List every patron
    #[command(alias = "l")]
    List,
}

/// Record a reservation
///
/// Neither id is checked, and the book's status is left as it is; use
/// `book update` to change it.
#[derive(Args)]
pub struct ReserveArgs {
    #[arg(help = "Book being reserved")]
    pub book_id: u64,
    #[arg(help = "Patron making the reservation")]
    pub user_id: u64,
    #[arg(short, long, help = "Reservation date as YYYY-MM-DD (defaults to today)")]
    pub date: Option<Date>,
}

impl From<ReserveArgs> for ReserveBook {
    fn from(val: ReserveArgs) -> Self {
        ReserveBook {
            book_id: val.book_id,
            user_id: val.user_id,
            date: val.date.unwrap_or_else(|| Zoned::now().date()),
        }
    }
}

/// Look up reservation status
#[derive(Args)]
pub struct StatusArgs {
    #[arg(help = "LB<book id>, LU<user id>, LR<reservation id>, or an exact title")]
    pub key: String,
}

/// Handler that runs subcommands against an open catalogue.
pub struct Cli {
    catalogue: Catalogue,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(catalogue: Catalogue, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            catalogue,
            renderer,
            json,
        }
    }

    /// Closes the catalogue connection.
    pub fn close(self) -> Result<()> {
        self.catalogue
            .close()
            .context("Failed to close catalogue database")
    }

    /// Prints `value` as JSON in `--json` mode, otherwise renders `markdown`.
    fn output<T: Serialize>(&self, value: &T, markdown: &str) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
            Ok(())
        } else {
            self.renderer.render(markdown)
        }
    }

    pub fn handle_book_command(&mut self, command: BookCommands) -> Result<()> {
        match command {
            BookCommands::Add(args) => {
                let book = self
                    .catalogue
                    .add_book(&args.into())
                    .context("Failed to add book")?;
                let markdown = CreateResult::new(book.clone()).to_string();
                self.output(&book, &markdown)
            }
            BookCommands::Show(args) => {
                let detail = self
                    .catalogue
                    .find_book(&args.into())
                    .context("Failed to look up book")?;
                let markdown = detail
                    .as_ref()
                    .map_or_else(|| format!("{BOOK_NOT_FOUND}\n"), ToString::to_string);
                self.output(&detail, &markdown)
            }
            BookCommands::List => {
                let books = self
                    .catalogue
                    .find_all_books()
                    .context("Failed to list books")?;
                let markdown = BookDetails(books.clone()).to_string();
                self.output(&books, &markdown)
            }
            BookCommands::Update(args) => {
                let params: UpdateBook = args.into();
                let changed = self
                    .catalogue
                    .update_book(&params)
                    .context("Failed to update book")?;
                debug!("Update of book {} changed {changed} rows", params.id);
                let result = UpdateResult::new(params.id, params.status);
                self.output(&changed, &result.to_string())
            }
            BookCommands::Delete(args) => {
                let params: Id = args.into();
                let removed = self
                    .catalogue
                    .delete_book(&params)
                    .context("Failed to delete book")?;
                debug!("Delete of book {} removed {removed} rows", params.id);
                self.output(&removed, &DeleteResult::new(params.id).to_string())
            }
        }
    }

    pub fn handle_user_command(&mut self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Add(args) => {
                let user = self
                    .catalogue
                    .add_user(&args.into())
                    .context("Failed to add user")?;
                let markdown = CreateResult::new(user.clone()).to_string();
                self.output(&user, &markdown)
            }
            UserCommands::List => {
                let users = self
                    .catalogue
                    .list_users()
                    .context("Failed to list users")?;
                let markdown = Users(users.clone()).to_string();
                self.output(&users, &markdown)
            }
        }
    }

    pub fn reserve(&mut self, args: ReserveArgs) -> Result<()> {
        let reservation = self
            .catalogue
            .reserve_book(&args.into())
            .context("Failed to record reservation")?;
        let markdown = CreateResult::new(reservation.clone()).to_string();
        self.output(&reservation, &markdown)
    }

    pub fn reservation_status(&mut self, args: StatusArgs) -> Result<()> {
        let view = self
            .catalogue
            .find_reservation_status(&args.key)
            .context("Failed to look up reservation status")?;
        let markdown = view
            .as_ref()
            .map_or_else(|| format!("{RESERVATION_NOT_FOUND}\n"), ToString::to_string);
        self.output(&view, &markdown)
    }

    /// Runs the interactive menu on stdin/stdout until exit or end of input.
    pub fn run_menu(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(
            &mut self.catalogue,
            &self.renderer,
            stdin.lock(),
            stdout.lock(),
        )
        .run()
    }
}
