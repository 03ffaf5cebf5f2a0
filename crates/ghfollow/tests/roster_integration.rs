//! Integration tests for roster files on disk.

use ghfollow::UserRecord;
use ghfollow::roster::{RosterError, load_csv, save_csv};
use tempfile::TempDir;

fn users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("alice", "https://x/alice"),
        UserRecord::new("bob", "https://x/bob"),
    ]
}

#[test]
fn test_save_writes_exact_bytes() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("following.csv");

    let written = save_csv(&users(), &path).expect("save");

    assert_eq!(written, 2);
    let bytes = std::fs::read_to_string(&path).expect("read back");
    assert_eq!(bytes, "Username,URL\nalice,https://x/alice\nbob,https://x/bob");
}

#[test]
fn test_save_then_load_yields_same_records() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("members.csv");

    save_csv(&users(), &path).expect("save");
    let loaded = load_csv(&path).expect("load");

    assert_eq!(loaded, users());
}

#[test]
fn test_save_overwrites_existing_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("following.csv");
    std::fs::write(&path, "Username,URL\nstale,https://x/stale\nold,https://x/old\nmore,x")
        .expect("seed");

    save_csv(&users()[..1], &path).expect("save");

    assert_eq!(
        load_csv(&path).expect("load"),
        vec![UserRecord::new("alice", "https://x/alice")]
    );
}

#[test]
fn test_empty_export_loads_as_empty() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.csv");

    save_csv(&[], &path).expect("save");

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "Username,URL\n");
    assert!(load_csv(&path).expect("load").is_empty());
}

#[test]
fn test_load_hand_edited_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("edited.csv");
    std::fs::write(
        &path,
        "Username,URL\r\nalice,https://x/alice\r\n\r\ncarol\r\nbob,https://x/bob\r\n",
    )
    .expect("seed");

    let logins: Vec<String> = load_csv(&path)
        .expect("load")
        .into_iter()
        .map(|u| u.login)
        .collect();

    assert_eq!(logins, vec!["alice", "carol", "bob"]);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.csv");

    let err = load_csv(&path).expect_err("missing file should fail");

    assert!(matches!(err, RosterError::Read { .. }));
    assert_eq!(err.path(), path.as_path());
}
