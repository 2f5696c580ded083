//! CLI end-to-end tests
//!
//! Tests for the custbook command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the custbook binary, with logging kept quiet
#[allow(deprecated)]
fn custbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("custbook").unwrap();
    cmd.env("RUST_LOG", "error");
    cmd
}

fn db_cmd(db: &Path) -> Command {
    let mut cmd = custbook_cmd();
    cmd.arg("--database").arg(db);
    cmd
}

#[test]
fn test_cli_help_flag() {
    custbook_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("custbook"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_flag() {
    custbook_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("custbook"));
}

#[test]
fn test_cli_version_command_does_not_create_store() {
    let temp = tempdir().unwrap();
    custbook_cmd()
        .current_dir(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("custbook "));
    assert!(!temp.path().join("database.db").exists());
}

#[test]
fn test_cli_no_args_runs_demo_in_working_dir() {
    let temp = tempdir().unwrap();
    custbook_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection to database.db successful"))
        .stdout(predicate::str::contains("Table 'customers' dropped"));
    assert!(temp.path().join("database.db").exists());
}

#[test]
fn test_cli_demo_command() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("demo.db");
    db_cmd(&db)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetching the rest of customers in the database:"))
        .stdout(predicate::str::contains("Customer 1 deleted"));
}

#[test]
fn test_cli_unopenable_store_exits_cleanly() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("missing").join("dir").join("customers.db");
    db_cmd(&db)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("successful").not())
        .stderr(predicate::str::contains("The error"));
}

#[test]
fn test_cli_add_show_list() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("customers.db");

    db_cmd(&db)
        .args(["add", "Max", "Mustermann", "mmuster@aol.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer #1 Max Mustermann mmuster@aol.de"));

    db_cmd(&db)
        .args(["add", "Erika", "Mustermann", "emuster@aol.de"])
        .assert()
        .success();

    db_cmd(&db)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout("#2 Erika Mustermann emuster@aol.de\n");

    db_cmd(&db)
        .args(["list", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Max"))
        .stdout(predicate::str::contains("Erika").not())
        .stdout(predicate::str::contains("1 of 2 customers"));
}

#[test]
fn test_cli_show_missing_is_success() {
    let temp = tempdir().unwrap();
    db_cmd(&temp.path().join("customers.db"))
        .args(["show", "42"])
        .assert()
        .success()
        .stdout("Customer 42 not found\n");
}

#[test]
fn test_cli_update_and_remove() {
    let temp = tempdir().unwrap();
    let db = temp.path().join("customers.db");

    db_cmd(&db)
        .args(["add", "Tobi", "Wobi", "twobi@aol.de"])
        .assert()
        .success();

    db_cmd(&db)
        .args(["update", "1", "Tobias", "Wobbel", "twobbel@aol.de"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer updated to #1 Tobias Wobbel"));

    db_cmd(&db)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout("Customer 1 deleted\n");

    db_cmd(&db)
        .args(["remove", "1"])
        .assert()
        .success()
        .stdout("Customer 1 not found, nothing deleted\n");
}

#[test]
fn test_cli_find_without_filters_fails() {
    let temp = tempdir().unwrap();
    db_cmd(&temp.path().join("customers.db"))
        .arg("find")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--last-name"));
}

#[test]
fn test_cli_invalid_id() {
    let temp = tempdir().unwrap();
    db_cmd(&temp.path().join("customers.db"))
        .args(["show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_with_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    let db = temp.path().join("configured.db");

    fs::write(
        &config_file,
        format!(
            "[database]\npath = {:?}\n\n[display]\ncolumn_width = 10\n",
            db.to_string_lossy()
        ),
    )
    .unwrap();

    custbook_cmd()
        .arg("--config")
        .arg(&config_file)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    ID | First Name | Last Name  | Email",
        ));
    assert!(db.exists());
}

#[test]
fn test_cli_invalid_config() {
    let temp = tempdir().unwrap();
    let config_file = temp.path().join("config.toml");
    fs::write(&config_file, "[display]\ncolumn_width = 1\n").unwrap();

    custbook_cmd()
        .arg("--config")
        .arg(&config_file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("column_width"));
}

#[test]
fn test_cli_no_args_keeps_added_customers() {
    let temp = tempdir().unwrap();

    custbook_cmd()
        .current_dir(temp.path())
        .args(["add", "Ada", "Lovelace", "ada@x.org"])
        .assert()
        .success();

    custbook_cmd()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("already holds 1 customers"))
        .stdout(predicate::str::contains("Table 'customers' dropped").not());

    custbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada"))
        .stdout(predicate::str::contains("1 of 1 customers"));
}

#[test]
fn test_cli_reads_config_from_working_dir() {
    let temp = tempdir().unwrap();
    fs::write(
        temp.path().join("custbook.toml"),
        "[database]\npath = \"local.db\"\n\n[display]\ncolumn_width = 10\n",
    )
    .unwrap();

    custbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "    ID | First Name | Last Name  | Email",
        ));
    assert!(temp.path().join("local.db").exists());
    assert!(!temp.path().join("database.db").exists());
}
