use predicates::str::contains;
use std::fs;

mod common;
use common::{populate_entries, setup_test_store, temp_out, tt};

#[test]
fn init_creates_an_empty_store_slot() {
    let store = setup_test_store("init_slot");

    tt().args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(fs::read_to_string(&store).unwrap(), "[]");
}

#[test]
fn operations_land_in_the_audit_log() {
    let store = setup_test_store("audit_ops");
    populate_entries(&store);

    tt().args(["--store", &store, "clear", "--yes"])
        .assert()
        .success();

    tt().args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Audit log"))
        .stdout(contains("add"))
        .stdout(contains("clear"));
}

#[test]
fn log_print_on_missing_log_is_friendly() {
    let store = setup_test_store("audit_missing");

    tt().args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("audit log is empty"));
}

#[test]
fn backup_copies_the_store_slot() {
    let store = setup_test_store("backup_copy");
    populate_entries(&store);
    let out = temp_out("backup_copy", "json");

    tt().args(["--store", &store, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let original = fs::read_to_string(&store).unwrap();
    let copy = fs::read_to_string(&out).unwrap();
    assert_eq!(original, copy);
}

#[test]
fn compressed_backup_replaces_the_plain_copy() {
    let store = setup_test_store("backup_zip");
    populate_entries(&store);
    let out = temp_out("backup_zip", "json");
    let zipped = std::path::Path::new(&out).with_extension("zip");
    fs::remove_file(&zipped).ok();

    tt().args(["--store", &store, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(zipped.exists());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn backup_without_a_store_fails() {
    let store = setup_test_store("backup_nostore");
    let out = temp_out("backup_nostore", "json");

    tt().args(["--store", &store, "backup", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("not found"));
}
