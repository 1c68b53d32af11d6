//! Interactive numbered menu.
//!
//! Options 1 to 7 map to add, find by id, reservation status, list all,
//! update, delete, and exit. Each option prompts for exactly the values the
//! matching catalogue operation takes. Bad input prints an error and returns
//! to the menu without touching the store. End of input behaves like exit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::info;
use shelf_core::{
    display::{BOOK_NOT_FOUND, RESERVATION_NOT_FOUND},
    params::{parse_id, AddBook, Id, UpdateBook},
    BookDetails, Catalogue, CreateResult, DeleteResult, OperationStatus, UpdateResult,
};

use crate::renderer::TerminalRenderer;

const MENU: &str = "\
Library Management System
1. Add a new book to the database
2. Find a book's detail based on BookID
3. Find a book's reservation status
4. Find all the books in the database
5. Modify/update book details based on BookID
6. Delete a book based on its BookID
7. Exit
";

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    AddBook,
    FindBook,
    ReservationStatus,
    ListBooks,
    UpdateBook,
    DeleteBook,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::FindBook),
            "3" => Some(Self::ReservationStatus),
            "4" => Some(Self::ListBooks),
            "5" => Some(Self::UpdateBook),
            "6" => Some(Self::DeleteBook),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop should keep going after an option.
enum Flow {
    Continue,
    Exit,
}

/// The interactive session over a borrowed catalogue.
pub struct Menu<'a, R, W> {
    catalogue: &'a mut Catalogue,
    renderer: &'a TerminalRenderer,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(
        catalogue: &'a mut Catalogue,
        renderer: &'a TerminalRenderer,
        input: R,
        output: W,
    ) -> Self {
        Self {
            catalogue,
            renderer,
            input,
            output,
        }
    }

    /// Runs until option 7 or end of input.
    pub fn run(&mut self) -> Result<()> {
        info!("Interactive menu started");

        loop {
            write!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice (1-7): ")? else {
                break;
            };

            let flow = match Choice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    self.show(&OperationStatus::failure("Invalid choice. Please try again."))?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
            writeln!(self.output)?;
        }

        info!("Interactive menu finished");
        Ok(())
    }

    fn dispatch(&mut self, choice: Choice) -> Result<Flow> {
        // `None` from a handler means input ran out mid-prompt.
        let completed = match choice {
            Choice::AddBook => self.add_book()?,
            Choice::FindBook => self.find_book()?,
            Choice::ReservationStatus => self.reservation_status()?,
            Choice::ListBooks => self.list_books()?,
            Choice::UpdateBook => self.update_book()?,
            Choice::DeleteBook => self.delete_book()?,
            Choice::Exit => {
                self.show(&OperationStatus::success("Exiting the program..."))?;
                return Ok(Flow::Exit);
            }
        };

        Ok(match completed {
            Some(()) => Flow::Continue,
            None => Flow::Exit,
        })
    }

    fn add_book(&mut self) -> Result<Option<()>> {
        let Some(title) = self.prompt("Enter the title: ")? else {
            return Ok(None);
        };
        let Some(author) = self.prompt("Enter the author: ")? else {
            return Ok(None);
        };
        let Some(isbn) = self.prompt("Enter the ISBN: ")? else {
            return Ok(None);
        };
        let Some(status) = self.prompt("Enter the status: ")? else {
            return Ok(None);
        };

        let book = self
            .catalogue
            .add_book(&AddBook {
                title,
                author,
                isbn,
                status,
            })
            .context("Failed to add book")?;
        self.show(&CreateResult::new(book))?;
        Ok(Some(()))
    }

    fn find_book(&mut self) -> Result<Option<()>> {
        let Some(id) = self.prompt_book_id()? else {
            return Ok(None);
        };
        let Some(id) = id else {
            return Ok(Some(()));
        };

        match self
            .catalogue
            .find_book(&Id { id })
            .context("Failed to look up book")?
        {
            Some(detail) => self.show(&detail)?,
            None => self.show(&BOOK_NOT_FOUND)?,
        }
        Ok(Some(()))
    }

    fn reservation_status(&mut self) -> Result<Option<()>> {
        let Some(key) = self.prompt("Enter the BookID, Title, UserID, or ReservationID: ")? else {
            return Ok(None);
        };

        match self
            .catalogue
            .find_reservation_status(&key)
            .context("Failed to look up reservation status")?
        {
            Some(view) => self.show(&view)?,
            None => self.show(&RESERVATION_NOT_FOUND)?,
        }
        Ok(Some(()))
    }

    fn list_books(&mut self) -> Result<Option<()>> {
        let books = self
            .catalogue
            .find_all_books()
            .context("Failed to list books")?;
        self.show(&BookDetails(books))?;
        Ok(Some(()))
    }

    fn update_book(&mut self) -> Result<Option<()>> {
        let Some(id) = self.prompt_book_id()? else {
            return Ok(None);
        };
        let Some(id) = id else {
            return Ok(Some(()));
        };
        let Some(status) = self.prompt("Enter the new status: ")? else {
            return Ok(None);
        };

        self.catalogue
            .update_book(&UpdateBook {
                id,
                status: status.clone(),
            })
            .context("Failed to update book")?;
        self.show(&UpdateResult::new(id, status))?;
        Ok(Some(()))
    }

    fn delete_book(&mut self) -> Result<Option<()>> {
        let Some(id) = self.prompt_book_id()? else {
            return Ok(None);
        };
        let Some(id) = id else {
            return Ok(Some(()));
        };

        self.catalogue
            .delete_book(&Id { id })
            .context("Failed to delete book")?;
        self.show(&DeleteResult::new(id))?;
        Ok(Some(()))
    }

    /// Prompts for a BookID.
    ///
    /// The outer `Option` is `None` at end of input; the inner one is `None`
    /// when the text was not an id, after the error has been shown.
    fn prompt_book_id(&mut self) -> Result<Option<Option<u64>>> {
        let Some(text) = self.prompt("Enter the BookID: ")? else {
            return Ok(None);
        };

        match parse_id("BookID", &text) {
            Ok(id) => Ok(Some(Some(id))),
            Err(e) => {
                self.show(&OperationStatus::failure(e.to_string()))?;
                Ok(Some(None))
            }
        }
    }

    /// Writes a prompt and reads one line without its line ending.
    ///
    /// Returns `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn show(&mut self, value: &dyn std::fmt::Display) -> Result<()> {
        let mut markdown = value.to_string();
        if !markdown.ends_with('\n') {
            markdown.push('\n');
        }
        self.renderer.render_to(&mut self.output, &markdown)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use shelf_core::CatalogueBuilder;

    use super::*;

    fn run_session(catalogue: &mut Catalogue, script: &str) -> String {
        let renderer = TerminalRenderer::new(false);
        let mut output = Vec::new();
        Menu::new(catalogue, &renderer, Cursor::new(script), &mut output)
            .run()
            .expect("Menu session failed");
        String::from_utf8(output).expect("Invalid UTF-8")
    }

    fn seeded_catalogue() -> Catalogue {
        let catalogue = CatalogueBuilder::new().in_memory().build().unwrap();
        catalogue
            .add_book(&AddBook {
                title: "Emma".to_string(),
                author: "Jane Austen".to_string(),
                isbn: "978-0141439587".to_string(),
                status: "available".to_string(),
            })
            .unwrap();
        catalogue
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1"), Some(Choice::AddBook));
        assert_eq!(Choice::parse(" 7 "), Some(Choice::Exit));
        assert_eq!(Choice::parse("8"), None);
        assert_eq!(Choice::parse("add"), None);
    }

    #[test]
    fn test_exit_option() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "7\n");

        assert!(output.starts_with("Library Management System\n"));
        assert!(output.contains("Enter your choice (1-7): "));
        assert!(output.contains("Exiting the program..."));
    }

    #[test]
    fn test_end_of_input_exits() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "");
        assert!(output.contains("Enter your choice (1-7): "));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "9\n7\n");

        assert!(output.contains("Error: Invalid choice. Please try again."));
        assert_eq!(output.matches("Library Management System").count(), 2);
    }

    #[test]
    fn test_add_book_option() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(
            &mut catalogue,
            "1\nPersuasion\nJane Austen\n978-0141439686\navailable\n7\n",
        );

        assert!(output.contains("Book added successfully with ID: 2"));
        let detail = catalogue.find_book(&Id { id: 2 }).unwrap().unwrap();
        assert_eq!(detail.book.title, "Persuasion");
        assert_eq!(detail.book.isbn, "978-0141439686");
    }

    #[test]
    fn test_find_book_option() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "2\n1\n2\n99\n7\n");

        assert!(output.contains("# 1. Emma"));
        assert!(output.contains("Not reserved by anyone."));
        assert!(output.contains("Book not found."));
    }

    #[test]
    fn test_non_numeric_book_id_does_not_mutate() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "6\nabc\n5\nxyz\n7\n");

        assert!(output.contains("Error: Invalid input for field 'BookID'"));
        let detail = catalogue.find_book(&Id { id: 1 }).unwrap().unwrap();
        assert_eq!(detail.book.status, "available");
    }

    #[test]
    fn test_reservation_status_option() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "3\nEmma\n3\nLR4\n7\n");

        assert!(output.contains("## Reservation Status"));
        assert!(output.contains("- Title: Emma"));
        assert!(output.contains("No matching reservation found."));
    }

    #[test]
    fn test_list_update_delete_options() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "5\n1\nreserved\n4\n6\n1\n4\n7\n");

        assert!(output.contains("Book details updated successfully!"));
        assert!(output.contains("- Status: reserved"));
        assert!(output.contains("Book deleted successfully!"));
        assert!(output.contains("No books found in the database."));
        assert!(catalogue.find_all_books().unwrap().is_empty());
    }

    #[test]
    fn test_update_unknown_book_reports_success() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "5\n42\nlost\n7\n");
        assert!(output.contains("Book details updated successfully!"));
    }

    #[test]
    fn test_end_of_input_mid_prompt() {
        let mut catalogue = seeded_catalogue();
        let output = run_session(&mut catalogue, "1\nHalf a book\n");

        assert!(output.contains("Enter the author: "));
        assert_eq!(catalogue.find_all_books().unwrap().len(), 1);
    }
}
