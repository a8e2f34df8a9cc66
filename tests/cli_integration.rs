//! Integration tests for the `pdx` CLI.
//!
//! Each test sets up a temp directory with a manifest and a config, runs
//! `pdx` as a subprocess, and checks stdout and the store files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Get the path to the built `pdx` binary.
fn pdx_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("pdx");
    path
}

/// Copy the fixture manifest and write a config pointing at it.
fn create_test_library(root: &Path) {
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/manifest.csv");
    fs::copy(&fixture, root.join("list.csv")).unwrap();

    let config_dir = root.join("config").join("paperdex");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"[source]
manifest = "list.csv"
base_url = "https://papers.example/files/"
"#,
    )
    .unwrap();
}

/// Run `pdx` with the given args in the given directory, returning (stdout, stderr, success).
fn run_pdx(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(pdx_bin())
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_DATA_HOME", dir.join("data"))
        .env_remove("PAPERDEX_LOG")
        .output()
        .expect("failed to run pdx");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

/// Run `pdx` expecting success, return stdout.
fn run_pdx_ok(dir: &Path, args: &[&str]) -> String {
    let (stdout, stderr, success) = run_pdx(dir, args);
    if !success {
        panic!(
            "pdx {:?} failed:\nstdout: {}\nstderr: {}",
            args, stdout, stderr
        );
    }
    stdout
}

fn run_pdx_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut all = args.to_vec();
    all.push("--json");
    let out = run_pdx_ok(dir, &all);
    serde_json::from_str(&out)
        .unwrap_or_else(|e| panic!("bad JSON from {:?}: {}\n{}", args, e, out))
}

// ---------------------------------------------------------------------------
// Browsing
// ---------------------------------------------------------------------------

#[test]
fn test_ls_root() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Home");
    assert_eq!(lines[1], "  0580/");
    assert_eq!(lines[2], "  0620/");
}

#[test]
fn test_ls_folder_lists_folders_then_files() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls", "0620"]);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "Home / 0620");
    assert_eq!(lines[1], "  2019/");
    assert!(lines[2].starts_with("  syllabus"));
    assert!(!out.contains("shown"));
}

#[test]
fn test_ls_shows_badges() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls", "0580/2023/w"]);
    let ms = out.lines().find(|l| l.contains("0580_w23_ms_42")).unwrap();
    let qp = out.lines().find(|l| l.contains("0580_w23_qp_42")).unwrap();
    assert!(ms.ends_with("MS"));
    assert!(qp.ends_with("QP"));
}

#[test]
fn test_ls_session_filter() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls", "0580/2021", "--session", "w"]);
    assert!(out.contains("0580_w_ms_11"));
    assert!(!out.contains("0580_s_qp_11"));
    assert!(out.contains("1 of 2 shown"));
}

#[test]
fn test_ls_year_filter_excludes_all() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(
        tmp.path(),
        &["ls", "0580/2021", "--year-min", "2022", "--year-max", "2025"],
    );
    assert!(out.contains("(no files match)"));
}

#[test]
fn test_ls_search() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls", "0620", "-s", "SYLL"]);
    assert!(out.contains("syllabus"));
    assert!(!out.contains("2019/"));
}

#[test]
fn test_ls_unknown_folder_is_empty_not_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["ls", "9999/nope"]);
    assert!(out.contains("Home / 9999 / nope"));
    assert!(out.contains("(no such folder)"));

    let json = run_pdx_json(tmp.path(), &["ls", "9999/nope"]);
    assert_eq!(json["found"], false);
    assert_eq!(json["entries"].as_array().unwrap().len(), 0);
}

#[test]
fn test_ls_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let json = run_pdx_json(tmp.path(), &["ls", "/0580/2023/w/", "--session", "winter"]);
    assert_eq!(json["address"], "0580/2023/w");
    assert_eq!(json["breadcrumbs"], serde_json::json!(["0580", "2023", "w"]));
    assert_eq!(json["found"], true);
    assert_eq!(json["filter"]["session"], "winter");
    assert_eq!(json["total"], 2);

    let entries = json["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["name"], "0580_w23_ms_42.pdf");
    assert_eq!(entries[0]["paper"], "mark_scheme");
    assert_eq!(
        entries[0]["url"],
        "https://papers.example/files/0580/2023/w/0580_w23_ms_42.pdf"
    );
    assert_eq!(entries[1]["paper"], "question_paper");
    assert_eq!(entries[1]["favorite"], false);
}

#[test]
fn test_bad_session_is_rejected() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let (_, stderr, success) = run_pdx(tmp.path(), &["ls", "--session", "autumn"]);
    assert!(!success);
    assert!(stderr.contains("autumn"));
}

// ---------------------------------------------------------------------------
// Integrity check
// ---------------------------------------------------------------------------

#[test]
fn test_check() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["check"]);
    assert!(out.contains("Manifest paths:  9"));
    assert!(out.contains("Files in tree:   9"));
    assert!(out.contains("Missing:         0"));
    assert!(out.contains("Malformed lines: 1"));
    assert!(out.contains("all manifest paths are in the tree"));
}

#[test]
fn test_check_json() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let json = run_pdx_json(tmp.path(), &["check"]);
    assert_eq!(json["missing"], 0);
    assert_eq!(json["files_in_tree"], 9);
    assert_eq!(json["malformed_lines"], 1);
}

#[test]
fn test_manifest_flag_overrides_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());
    fs::write(tmp.path().join("other.csv"), "x/y.pdf\nx/z.pdf\n").unwrap();

    let json = run_pdx_json(tmp.path(), &["check", "-m", "other.csv"]);
    assert_eq!(json["manifest_paths"], 2);
    assert_eq!(json["malformed_lines"], 0);
}

#[test]
fn test_missing_manifest_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let (_, stderr, success) = run_pdx(tmp.path(), &["ls", "--manifest", "absent.csv"]);
    assert!(!success);
    assert!(stderr.contains("absent.csv"));
}

#[test]
fn test_bad_config_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());
    fs::write(tmp.path().join("bad.toml"), "[source\nmanifest = ").unwrap();

    let (_, stderr, success) = run_pdx(tmp.path(), &["ls", "--config", "bad.toml"]);
    assert!(!success);
    assert!(stderr.contains("bad.toml"));
}

// ---------------------------------------------------------------------------
// URLs, favorites and recents
// ---------------------------------------------------------------------------

#[test]
fn test_url() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["url", "0620/syllabus.pdf"]);
    assert_eq!(out.trim(), "https://papers.example/files/0620/syllabus.pdf");

    // url never touches recents
    let json = run_pdx_json(tmp.path(), &["recent"]);
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[test]
fn test_url_rejects_folder_and_unknown() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let (_, stderr, success) = run_pdx(tmp.path(), &["url", "0580/2023"]);
    assert!(!success);
    assert!(stderr.contains("is a folder"));

    let (_, stderr, success) = run_pdx(tmp.path(), &["url", "0580/none.pdf"]);
    assert!(!success);
    assert!(stderr.contains("no such file"));
}

#[test]
fn test_open_records_recent() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    run_pdx_ok(tmp.path(), &["open", "0620/syllabus.pdf"]);
    run_pdx_ok(tmp.path(), &["open", "0580/2021/0580_w_ms_11.pdf"]);
    run_pdx_ok(tmp.path(), &["open", "0620/syllabus.pdf"]);

    let json = run_pdx_json(tmp.path(), &["recent"]);
    let recents = json.as_array().unwrap();
    assert_eq!(recents.len(), 2);
    assert_eq!(recents[0]["path"], "0620/syllabus.pdf");
    assert_eq!(recents[1]["name"], "0580_w_ms_11.pdf");
    assert!(recents[0]["accessedAt"].as_i64().unwrap() > 0);

    let stored = fs::read_to_string(tmp.path().join("data/paperdex/recent.json")).unwrap();
    assert!(stored.contains("accessedAt"));
}

#[test]
fn test_fav_toggle() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let out = run_pdx_ok(tmp.path(), &["fav", "0580/2023/w/0580_w23_qp_42.pdf"]);
    assert!(out.contains("added 0580/2023/w/0580_w23_qp_42.pdf"));

    let ls = run_pdx_ok(tmp.path(), &["ls", "0580/2023/w"]);
    let qp = ls.lines().find(|l| l.contains("0580_w23_qp_42")).unwrap();
    assert!(qp.ends_with('\u{2605}'));

    let favs = run_pdx_json(tmp.path(), &["favs"]);
    assert_eq!(favs[0]["name"], "0580_w23_qp_42.pdf");
    assert!(favs[0]["addedAt"].as_i64().unwrap() > 0);

    let json = run_pdx_json(tmp.path(), &["fav", "0580/2023/w/0580_w23_qp_42.pdf"]);
    assert_eq!(json["favorite"], false);
    let out = run_pdx_ok(tmp.path(), &["favs"]);
    assert!(out.contains("No favorites yet"));
}

#[test]
fn test_fav_rejects_folder() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());

    let (_, _, success) = run_pdx(tmp.path(), &["fav", "0580"]);
    assert!(!success);
    let out = run_pdx_ok(tmp.path(), &["favs"]);
    assert!(out.contains("No favorites yet"));
}

#[test]
fn test_stale_favorite_can_be_removed() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());
    let store = tmp.path().join("store");

    run_pdx_ok(
        tmp.path(),
        &["fav", "0620/syllabus.pdf", "--store-dir", store.to_str().unwrap()],
    );
    assert!(store.join("favorites.json").exists());

    // The path no longer exists in the manifest passed here
    fs::write(tmp.path().join("empty.csv"), "").unwrap();
    let out = run_pdx_ok(
        tmp.path(),
        &[
            "fav",
            "0620/syllabus.pdf",
            "-m",
            "empty.csv",
            "--store-dir",
            store.to_str().unwrap(),
        ],
    );
    assert!(out.contains("removed 0620/syllabus.pdf"));
}

#[test]
fn test_corrupt_store_is_tolerated() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_test_library(tmp.path());
    let store = tmp.path().join("data/paperdex");
    fs::create_dir_all(&store).unwrap();
    fs::write(store.join("favorites.json"), "{ not json").unwrap();

    let out = run_pdx_ok(tmp.path(), &["favs"]);
    assert!(out.contains("No favorites yet"));
}
