//! End-to-end tests of the `book-catalog` binary against a temporary
//! catalog file.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn book_catalog(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("book-catalog").expect("binary should build");
    cmd.arg("--data-file").arg(data_file);
    cmd
}

fn add(data_file: &Path, title: &str, author: &str, year: &str) {
    book_catalog(data_file)
        .args(["add", "--title", title, "--author", author, "--year", year])
        .assert()
        .success();
}

#[test]
fn test_add_creates_file() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");

    book_catalog(&data_file)
        .args(["add", "--title", "Book", "--author", "Author", "--year", "2021"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "ID: 1, Title: Book, Author: Author, Year: 2021, Status: available",
        ))
        .stdout(predicate::str::contains("Book added successfully!"));

    let raw = std::fs::read_to_string(&data_file).unwrap();
    assert_eq!(
        raw,
        "[\n    {\n        \"id\": 1,\n        \"title\": \"Book\",\n        \"author\": \"Author\",\n        \"year\": \"2021\",\n        \"status\": \"available\"\n    }\n]"
    );
}

#[test]
fn test_add_rejects_empty_title() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");

    book_catalog(&data_file)
        .args(["add", "--title", "  ", "--author", "Author", "--year", "2021"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Title must not be empty"));
    assert!(!data_file.exists());
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");

    book_catalog(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout("The library is empty.\n");
}

#[test]
fn test_list_in_insertion_order() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Первая", "Автор", "2020");
    add(&data_file, "Second", "Author", "2021");

    book_catalog(&data_file)
        .arg("list")
        .assert()
        .success()
        .stdout(
            "ID: 1, Title: Первая, Author: Автор, Year: 2020, Status: available\n\
             ID: 2, Title: Second, Author: Author, Year: 2021, Status: available\n",
        );
}

#[test]
fn test_list_json() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Dune", "Frank Herbert", "1965");

    let output = book_catalog(&data_file)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["id"], 1);
    assert_eq!(parsed[0]["title"], "Dune");
    assert_eq!(parsed[0]["status"], "available");
}

#[test]
fn test_search_by_author() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Dune", "Frank Herbert", "1965");
    add(&data_file, "Emma", "Jane Austen", "1815");

    book_catalog(&data_file)
        .args(["search", "--by", "author", "FRANK HERBERT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Dune"))
        .stdout(predicate::str::contains("Emma").not());
}

#[test]
fn test_search_no_match() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Dune", "Frank Herbert", "1965");

    book_catalog(&data_file)
        .args(["search", "Nonexistent"])
        .assert()
        .success()
        .stdout("No books found with title 'Nonexistent'.\n");

    book_catalog(&data_file)
        .args(["--format", "json", "search", "--by", "year", "2000"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_status_then_delete() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Dune", "Frank Herbert", "1965");

    book_catalog(&data_file)
        .args(["status", "1", "checked-out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: checked-out"));

    let raw = std::fs::read_to_string(&data_file).unwrap();
    assert!(raw.contains("\"status\": \"checked-out\""));

    book_catalog(&data_file)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout("Book \"Dune\" deleted successfully!\n");

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "[]");
}

#[test]
fn test_missing_id_fails_without_writing() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    add(&data_file, "Dune", "Frank Herbert", "1965");
    let before = std::fs::read_to_string(&data_file).unwrap();

    book_catalog(&data_file)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book with ID 2 not found"));

    book_catalog(&data_file)
        .args(["status", "2", "available"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Book with ID 2 not found"));

    assert_eq!(std::fs::read_to_string(&data_file).unwrap(), before);
}

#[test]
fn test_invalid_arguments() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");

    book_catalog(&data_file)
        .args(["delete", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ID 'one'"));

    book_catalog(&data_file)
        .args(["status", "1", "lost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid status 'lost'"));
}

#[test]
fn test_malformed_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    std::fs::write(&data_file, r#"[{"id": 1, "title": "No author"}]"#).unwrap();

    book_catalog(&data_file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field"));
}

#[test]
fn test_legacy_status_labels_load() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");
    std::fs::write(
        &data_file,
        r#"[
    {"id": 1, "title": "Книга 1", "author": "Автор 1", "year": "2020", "status": "в наличии"},
    {"id": 2, "title": "Книга 2", "author": "Автор 2", "year": "2021", "status": "выдана"}
]"#,
    )
    .unwrap();

    book_catalog(&data_file)
        .args(["--format", "tsv", "list"])
        .assert()
        .success()
        .stdout(
            "id\ttitle\tauthor\tyear\tstatus\n\
             1\tКнига 1\tАвтор 1\t2020\tavailable\n\
             2\tКнига 2\tАвтор 2\t2021\tchecked-out\n",
        );
}

#[test]
fn test_interactive_menu() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("library.json");

    book_catalog(&data_file)
        .write_stdin("1\nDune\nFrank Herbert\n1965\n4\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book added successfully!"))
        .stdout(predicate::str::contains("Exiting."));

    let raw = std::fs::read_to_string(&data_file).unwrap();
    assert!(raw.contains("\"title\": \"Dune\""));
}
