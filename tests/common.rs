#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// rtimesheet command isolated from the user's real configuration.
pub fn rts(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rtimesheet");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("PORT")
        .env_remove("RUST_LOG");
    cmd
}

/// Create a fresh, empty directory under the system temp dir
pub fn setup_test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rtimesheet_tests");
    path.push(name);
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Test home plus the absolute path of its data file
pub fn setup_test_data(name: &str) -> (PathBuf, String) {
    let home = setup_test_home(name);
    let data = home.join("timelogs.json").to_string_lossy().to_string();
    (home, data)
}

/// Initialize an empty store and add two timesheet entries
pub fn init_with_data(home: &Path, data: &str) {
    rts(home)
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    rts(home)
        .args([
            "--data",
            data,
            "add",
            "user=alice",
            "timeIn=09:00",
            "hubstaffTime=8",
        ])
        .assert()
        .success();

    rts(home)
        .args([
            "--data",
            data,
            "add",
            "user=bob",
            "timeIn=10:30",
            "timeOut=18:00",
            "hubstaffTime=7.5",
            "remarks=dentist",
        ])
        .assert()
        .success();
}

/// Temporary output file path, removed if it already exists
pub fn temp_out(home: &Path, name: &str, ext: &str) -> String {
    let p = home.join(format!("{name}.{ext}"));
    fs::remove_file(&p).ok();
    p.to_string_lossy().to_string()
}
