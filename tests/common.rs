#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tt() -> Command {
    cargo_bin_cmd!("timetrack")
}

/// Create a unique test store path inside the system temp dir and remove
/// any leftovers of a previous run (store + timer checkpoint + audit log).
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timetrack.json", name));
    let store_path = path.to_string_lossy().to_string();

    fs::remove_file(&path).ok();
    fs::remove_file(path.with_extension("timer.json")).ok();
    fs::remove_file(path.with_extension("log")).ok();
    fs::remove_file(path.with_extension("json.tmp")).ok();

    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a couple of back-dated entries useful for many tests
pub fn populate_entries(store_path: &str) {
    tt()
        .args([
            "--store",
            store_path,
            "add",
            "2026-08-03",
            "--in",
            "09:00",
            "--out",
            "10:30",
            "-m",
            "api work",
        ])
        .assert()
        .success();

    tt()
        .args([
            "--store",
            store_path,
            "add",
            "2026-08-04",
            "--in",
            "14:00",
            "--out",
            "15:00",
            "-m",
            "code review",
        ])
        .assert()
        .success();
}

/// Read the ids currently in the store, most recent first.
pub fn store_ids(store_path: &str) -> Vec<String> {
    let content = fs::read_to_string(store_path).expect("read store");
    let entries: Vec<serde_json::Value> = serde_json::from_str(&content).expect("parse store");
    entries
        .iter()
        .map(|e| e["id"].as_str().expect("id").to_string())
        .collect()
}
