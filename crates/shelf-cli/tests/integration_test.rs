//! Integration tests for the interactive menu
//!
//! These drive the binary over stdin and check that menu output uses the same
//! Display implementations as the core crate, and that changes made from the
//! menu are visible to later subcommand runs.

use assert_cmd::Command;
use predicates::prelude::*;
use shelf_core::{display::CreateResult, params::AddBook, CatalogueBuilder};
use tempfile::TempDir;

/// Run the menu with `script` on stdin and capture its output
fn run_menu(temp_dir: &TempDir, script: &str) -> String {
    let db_path = temp_dir.path().join("library.db");
    let output = Command::cargo_bin("shelf")
        .expect("Failed to find shelf binary")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .write_stdin(script)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).expect("Invalid UTF-8 in menu output")
}

#[test]
fn test_menu_lists_options() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_menu(&temp_dir, "7\n");

    assert!(output.contains("Library Management System"));
    assert!(output.contains("1. Add a new book to the database"));
    assert!(output.contains("6. Delete a book based on its BookID"));
    assert!(output.contains("7. Exit"));
    assert!(output.contains("Exiting the program..."));
}

#[test]
fn test_menu_add_matches_direct_display() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_menu(&temp_dir, "1\nEmma\nJane Austen\n123\navailable\n7\n");

    let catalogue = CatalogueBuilder::new().in_memory().build().unwrap();
    let book = catalogue
        .add_book(&AddBook {
            title: "Emma".to_string(),
            author: "Jane Austen".to_string(),
            isbn: "123".to_string(),
            status: "available".to_string(),
        })
        .unwrap();
    let direct = CreateResult::new(book).to_string();

    assert!(output.contains(&direct));
}

#[test]
fn test_menu_changes_persist() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    run_menu(
        &temp_dir,
        "1\nEmma\nJane Austen\n123\navailable\n5\n1\nreserved\n7\n",
    );

    Command::cargo_bin("shelf")
        .expect("Failed to find shelf binary")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("library.db"))
        .args(["book", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Emma"))
        .stdout(predicate::str::contains("- Status: reserved"));
}

#[test]
fn test_menu_full_session() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_menu(
        &temp_dir,
        "1\nEmma\nJane Austen\n123\navailable\n\
         1\nDune\nFrank Herbert\n456\navailable\n\
         4\n3\nLB1\n3\nDune\n6\n1\n2\n1\n7\n",
    );

    assert!(output.contains("Book added successfully with ID: 2"));
    assert!(output.contains("# 1. Emma"));
    assert!(output.contains("# 2. Dune"));
    assert!(output.contains("No matching reservation found."));
    assert!(output.contains("- Title: Dune"));
    assert!(output.contains("Book deleted successfully!"));
    assert!(output.contains("Book not found."));
}

#[test]
fn test_menu_rejects_bad_input() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_menu(&temp_dir, "0\nabc\n2\nfive\n7\n");

    assert_eq!(
        output
            .matches("Error: Invalid choice. Please try again.")
            .count(),
        2
    );
    assert!(output.contains("'five' is not a valid id"));
}

#[test]
fn test_menu_exits_at_end_of_input() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let output = run_menu(&temp_dir, "4\n");

    assert!(output.contains("No books found in the database."));
    assert!(!output.contains("Exiting the program..."));
}

#[test]
fn test_menu_subcommand() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");

    Command::cargo_bin("shelf")
        .expect("Failed to find shelf binary")
        .arg("--no-color")
        .arg("--database-file")
        .arg(temp_dir.path().join("library.db"))
        .arg("menu")
        .write_stdin("7\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exiting the program..."));
}
