use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use std::fs;

mod common;
use common::{init_with_data, rts, setup_test_data, setup_test_home};

fn list_json(home: &std::path::Path, data: &str) -> Vec<Value> {
    let output = rts(home)
        .args(["--data", data, "list", "--json"])
        .output()
        .expect("failed to run list --json");
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("list --json prints JSON");
    parsed.as_array().cloned().expect("JSON array")
}

#[test]
fn test_init_creates_empty_data_file() {
    let (home, data) = setup_test_data("init_empty");

    rts(&home)
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"))
        .stdout(contains("user, timeIn, hubstaffTime"));

    assert_eq!(fs::read_to_string(&data).unwrap().trim(), "[]");
    assert!(list_json(&home, &data).is_empty());
}

#[test]
fn test_add_and_list() {
    let (home, data) = setup_test_data("add_list");
    init_with_data(&home, &data);

    rts(&home)
        .args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("alice"))
        .stdout(contains("bob"))
        .stdout(contains("dentist"))
        .stdout(contains("2 log(s)"));

    let logs = list_json(&home, &data);
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0]["id"], 1);
    assert_eq!(logs[0]["timeOut"], "N/A");
    assert_eq!(logs[0]["hubstaffTime"], 8);
    assert_eq!(logs[1]["id"], 2);
    assert_eq!(logs[1]["hubstaffTime"], 7.5);
}

#[test]
fn test_add_missing_required_field_fails() {
    let (home, data) = setup_test_data("add_missing");
    init_with_data(&home, &data);

    rts(&home)
        .args(["--data", &data, "add", "user=carol", "timeIn=08:00"])
        .assert()
        .failure()
        .stderr(contains("hubstaffTime"));

    rts(&home)
        .args(["--data", &data, "add", "user"])
        .assert()
        .failure()
        .stderr(contains("FIELD=VALUE"));

    assert_eq!(list_json(&home, &data).len(), 2);
}

#[test]
fn test_show_existing_and_missing() {
    let (home, data) = setup_test_data("show");
    init_with_data(&home, &data);

    rts(&home)
        .args(["--data", &data, "show", "2"])
        .assert()
        .success()
        .stdout(contains("\"user\": \"bob\""))
        .stdout(contains("\"timeOut\": \"18:00\""));

    rts(&home)
        .args(["--data", &data, "show", "42"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_edit_updates_only_given_fields() {
    let (home, data) = setup_test_data("edit");
    init_with_data(&home, &data);

    rts(&home)
        .args(["--data", &data, "edit", "1", "remarks=late start", "id=9"])
        .assert()
        .success()
        .stdout(contains("Log 1 updated"))
        .stdout(contains("Ignoring unknown field(s): id"));

    let logs = list_json(&home, &data);
    assert_eq!(logs[0]["id"], 1);
    assert_eq!(logs[0]["user"], "alice");
    assert_eq!(logs[0]["remarks"], "late start");
    assert!(logs[0]["updatedAt"].is_string());
    assert!(logs[1].get("updatedAt").is_none());

    rts(&home)
        .args(["--data", &data, "edit", "5", "remarks=x"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    rts(&home)
        .args(["--data", &data, "edit", "1", "user="])
        .assert()
        .failure()
        .stderr(contains("user"));
}

#[test]
fn test_del_with_and_without_confirmation() {
    let (home, data) = setup_test_data("del");
    init_with_data(&home, &data);

    rts(&home)
        .args(["--data", &data, "del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));
    assert_eq!(list_json(&home, &data).len(), 2);

    rts(&home)
        .args(["--data", &data, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let logs = list_json(&home, &data);
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["id"], 2);

    rts(&home)
        .args(["--data", &data, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));

    // ids keep growing from the current maximum
    rts(&home)
        .args([
            "--data",
            &data,
            "add",
            "user=dave",
            "timeIn=07:00",
            "hubstaffTime=4",
        ])
        .assert()
        .success()
        .stdout(contains("Log 3 created"));
}

#[test]
fn test_tasks_preset_from_config_file() {
    let home = setup_test_home("tasks_preset");

    rts(&home)
        .args(["init", "--preset", "tasks"])
        .assert()
        .success()
        .stdout(contains("taskName, duration, date"));

    rts(&home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("taskName"))
        .stdout(contains("hubstaffTime").not());

    rts(&home)
        .args([
            "add",
            "taskName=code review",
            "duration=60",
            "date=2025-12-08",
        ])
        .assert()
        .success()
        .stdout(contains("\"duration\": 60"));

    rts(&home)
        .args(["add", "user=alice", "timeIn=09:00", "hubstaffTime=8"])
        .assert()
        .failure()
        .stderr(contains("taskName"));
}

#[test]
fn test_config_check() {
    let home = setup_test_home("config_check");

    rts(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));

    let conf_dir = home.join(".rtimesheet");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(
        conf_dir.join("rtimesheet.conf"),
        "bind: not-an-address\nfields:\n  - name: note\n",
    )
    .unwrap();

    rts(&home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stdout(contains("bind address"))
        .stdout(contains("at least one required field"));
}

#[test]
fn test_corrupt_data_file_is_reported() {
    let (home, data) = setup_test_data("corrupt");
    fs::write(&data, "[{ broken").unwrap();

    rts(&home)
        .args(["--data", &data, "list"])
        .assert()
        .failure()
        .stderr(contains("corrupt"));
}

#[test]
fn test_record_commands_warn_on_memory_storage() {
    let home = setup_test_home("memory_storage");
    let conf_dir = home.join(".rtimesheet");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("rtimesheet.conf"), "storage: memory\n").unwrap();

    rts(&home)
        .args(["add", "user=alice", "timeIn=09:00", "hubstaffTime=8"])
        .assert()
        .success()
        .stdout(contains("Log 1 created"))
        .stdout(contains("discarded when the command exits"));

    rts(&home)
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(contains("alice").not());
}
