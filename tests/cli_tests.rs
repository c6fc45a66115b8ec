use predicates::prelude::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;
use travelog::seed::Snapshot;

use test_helpers::base_travelog_command;

#[test]
#[serial]
fn test_places_lists_live_counts() {
    let mut cmd = base_travelog_command();
    cmd.arg("places");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[1] Paris (Île-de-France, FR)  2 entries  1 drafts"))
        .stdout(predicate::str::contains("[4] Santorini (South Aegean, GR)  0 entries"));
}

#[test]
#[serial]
fn test_places_search() {
    let mut cmd = base_travelog_command();
    cmd.args(["places", "--search", "tok", "--sort", "alphabet"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Tokyo"))
        .stdout(predicate::str::contains("Paris").not());
}

#[test]
#[serial]
fn test_invalid_sort_is_rejected() {
    let mut cmd = base_travelog_command();
    cmd.args(["places", "--sort", "random"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort mode"));
}

#[test]
#[serial]
fn test_drafts_and_empty_trash() {
    base_travelog_command()
        .arg("drafts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Draft: Seine River Walk"));

    base_travelog_command()
        .arg("trash")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trash is empty"));
}

#[test]
#[serial]
fn test_show_unknown_entry_fails() {
    let mut cmd = base_travelog_command();
    cmd.args(["show", "404"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found: 404"));
}

#[test]
#[serial]
fn test_export_then_reload_seed_file() {
    let output = base_travelog_command().arg("export").output().unwrap();
    assert!(output.status.success());
    let exported = String::from_utf8(output.stdout).unwrap();
    let snapshot: Snapshot = serde_json::from_str(&exported).unwrap();
    assert_eq!(snapshot.entries.len(), 5);

    let dir = tempdir().unwrap();
    let seed_path = dir.path().join("seed.json");
    let mut trimmed = snapshot;
    trimmed.entries.retain(|e| e.id != "1");
    fs::write(&seed_path, trimmed.to_json_pretty().unwrap()).unwrap();

    base_travelog_command()
        .arg("--seed")
        .arg(&seed_path)
        .arg("places")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Paris (Île-de-France, FR)  1 entries"));
}

#[test]
#[serial]
fn test_seed_file_from_environment() {
    let dir = tempdir().unwrap();
    let seed_path = dir.path().join("empty.json");
    fs::write(&seed_path, "{}").unwrap();

    base_travelog_command()
        .env("TRAVELOG_SEED_FILE", &seed_path)
        .arg("places")
        .assert()
        .success()
        .stdout(predicate::str::contains("No places found"));
}

#[test]
#[serial]
fn test_missing_seed_file_fails() {
    base_travelog_command()
        .args(["--seed", "/nonexistent/travelog/seed.json", "places"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
#[serial]
fn test_invalid_retention_fails() {
    base_travelog_command()
        .env("TRAVELOG_RETENTION_DAYS", "0")
        .arg("trash")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one day"));
}

#[test]
#[serial]
fn test_huge_retention_fails_cleanly() {
    base_travelog_command()
        .env("TRAVELOG_RETENTION_DAYS", "200000000000")
        .arg("trash")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot exceed 36500 days"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
#[serial]
fn test_shell_session_with_yes() {
    let script = "\
new --place 2
save --title 'Ramen night' --body 'Best bowl so far' --status published
delete 4
trash
restore 4
place 2
quit
";

    base_travelog_command()
        .arg("--yes")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved entry"))
        .stdout(predicate::str::contains("== Ramen night =="))
        .stdout(predicate::str::contains("Moved entry 4 to the trash"))
        .stdout(predicate::str::contains("30 days until permanent deletion"))
        .stdout(predicate::str::contains("Restored entry 4 as draft"))
        .stdout(predicate::str::contains("1 published, 1 drafts"));
}

#[test]
#[serial]
fn test_shell_prompts_before_purge() {
    let script = "delete 1\ny\npurge 1\n\nshow 1\n";

    base_travelog_command()
        .arg("shell")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete permanently: This cannot be undone."))
        .stdout(predicate::str::contains("Nothing deleted"))
        .stdout(predicate::str::contains("== First Day in Paris =="));
}

#[test]
#[serial]
fn test_json_logs_go_to_stderr() {
    base_travelog_command()
        .env("RUST_LOG", "info")
        .args(["--log-format", "json", "drafts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("== Drafts =="))
        .stderr(predicate::str::contains("\"correlation_id\""))
        .stderr(predicate::str::contains("Starting travelog"));
}
