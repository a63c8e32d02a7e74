use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("contact-book").unwrap();
    cmd.env("CONTACTS_PATH", dir.path().join("contacts.json"));
    cmd
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet"));
}

#[test]
fn listing_shows_one_line_per_contact() {
    let dir = TempDir::new().unwrap();

    for (name, phone) in [
        ("Alice", "555-1234"),
        ("Bob", "555-5678"),
        ("Carol", "555-0000"),
    ] {
        cmd(&dir)
            .args(["add", "--name", name, "--phone", phone])
            .assert()
            .success();
    }

    let output = cmd(&dir).args(["list"]).assert().success().get_output().stdout.clone();

    let listing = String::from_utf8_lossy(&output);
    let lines: Vec<_> = listing.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(listing.contains("Alice: 555-1234"));
    assert!(listing.contains("Bob: 555-5678"));
    assert!(listing.contains("Carol: 555-0000"));
}

#[test]
fn corrupt_contact_file_is_a_hard_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("contacts.json"), "not a valid object").unwrap();

    cmd(&dir)
        .args(["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact file is corrupt"));
}
