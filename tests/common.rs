#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Command with ARBEIT_PATH pointing at the given data dir
pub fn arbeit(dir: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("arbeit");
    cmd.env("ARBEIT_PATH", dir);
    cmd
}

/// Create a unique test data dir inside the system temp dir and remove any
/// existing data file
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_arbeit", name));
    fs::create_dir_all(&path).unwrap();

    let data_file = path.join("arbeit.json");
    fs::remove_file(&data_file).ok();

    path.to_string_lossy().to_string()
}

/// Path of the data file inside a test data dir
pub fn data_file(dir: &str) -> PathBuf {
    PathBuf::from(dir).join("arbeit.json")
}

/// Seed a data file with complete days via the library API
pub fn seed_days(dir: &str, days: &[(&str, &str, &str)]) {
    let mut store = arbeit::store::Store::default();

    for (date, start, end) in days {
        let record = arbeit::models::DayRecord {
            start: Some(start.to_string()),
            end: Some(end.to_string()),
            breaks: vec![],
            comment: None,
        };
        store.replace(date, record);
    }

    store.save(&data_file(dir)).expect("seed data file");
}
