use predicates::str::contains;
use std::fs;

mod common;
use common::{populate_entries, setup_test_store, temp_out, tt};

#[test]
fn export_csv_writes_all_entries_with_header() {
    let store = setup_test_store("export_csv");
    populate_entries(&store);
    let out = temp_out("export_csv", "csv");

    tt().args([
        "--store", &store, "export", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.starts_with("id,date,start,end,duration_secs,duration,description"));
    assert!(content.contains("2026-08-03"));
    assert!(content.contains("api work"));
    assert!(content.contains("5400")); // 09:00 → 10:30
    assert!(content.contains("code review"));
}

#[test]
fn export_json_round_trips_the_rows() {
    let store = setup_test_store("export_json");
    populate_entries(&store);
    let out = temp_out("export_json", "json");

    tt().args([
        "--store", &store, "export", "--format", "json", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("json written");
    let rows: Vec<serde_json::Value> = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["duration"], "01:00:00");
    assert_eq!(rows[1]["duration_secs"], 5400);
}

#[test]
fn export_honors_the_range_filter() {
    let store = setup_test_store("export_range");
    populate_entries(&store);
    let out = temp_out("export_range", "csv");

    tt().args([
        "--store",
        &store,
        "export",
        "--format",
        "csv",
        "--file",
        &out,
        "--range",
        "2026-08-04",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("code review"));
    assert!(!content.contains("api work"));
}

#[test]
fn export_with_empty_range_writes_nothing() {
    let store = setup_test_store("export_empty");
    populate_entries(&store);
    let out = temp_out("export_empty", "csv");

    tt().args([
        "--store", &store, "export", "--format", "csv", "--file", &out, "--range", "2020",
    ])
    .assert()
    .success()
    .stdout(contains("Nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn export_rejects_relative_paths() {
    let store = setup_test_store("export_relative");
    populate_entries(&store);

    tt().args([
        "--store",
        &store,
        "export",
        "--format",
        "csv",
        "--file",
        "relative.csv",
    ])
    .assert()
    .failure()
    .stderr(contains("absolute"));
}

#[test]
fn export_rejects_unknown_formats() {
    let store = setup_test_store("export_badfmt");

    tt().args([
        "--store", &store, "export", "--format", "xml", "--file", "/tmp/x.xml",
    ])
    .assert()
    .failure();
}

#[test]
fn export_force_overwrites_existing_files() {
    let store = setup_test_store("export_force");
    populate_entries(&store);
    let out = temp_out("export_force", "json");
    fs::write(&out, "stale").unwrap();

    tt().args([
        "--store", &store, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("api work"));
}
