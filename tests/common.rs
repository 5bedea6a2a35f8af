#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bikeshare::config::Config;
use bikeshare::core::Dataset;
use bikeshare::models::{City, TripRecord};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEMOGRAPHIC_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";
pub const BASIC_HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type";

pub fn bike() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Create a unique, empty data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bikeshare_data", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path
}

pub fn write_csv(dir: &PathBuf, file: &str, header: &str, rows: &[&str]) {
    let mut content = String::from(header);
    content.push('\n');
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(dir.join(file), content).expect("write csv");
}

/// Three Chicago trips with hand-checked statistics:
/// two Monday-morning January rides A→B and one Saturday June ride C→D.
pub const CHICAGO_ROWS: [&str; 3] = [
    "0,2017-01-02 09:07:57,2017-01-02 10:07:57,3600,A,B,Subscriber,Male,1980.0",
    "1,2017-01-09 09:30:00,2017-01-10 10:31:01,90061,A,B,Customer,Female,1992.0",
    "2,2017-06-03 17:00:00,2017-06-03 17:01:01,61,C,D,Subscriber,Male,1992.0",
];

pub const WASHINGTON_ROWS: [&str; 3] = [
    "0,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber",
    "1,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Customer",
    "2,2017-05-30 01:02:59,2017-05-30 01:13:37,637.251,17th St & Massachusetts Ave NW,5th & K St NW,Subscriber",
];

/// Data dir with the Chicago and Washington fixtures.
pub fn setup_city_data(name: &str) -> PathBuf {
    let dir = setup_data_dir(name);
    write_csv(&dir, "chicago.csv", DEMOGRAPHIC_HEADER, &CHICAGO_ROWS);
    write_csv(&dir, "washington.csv", BASIC_HEADER, &WASHINGTON_ROWS);
    dir
}

/// `n` New York City trips, one per day starting 2017-01-01 (a Sunday).
pub fn write_nyc_rows(dir: &PathBuf, n: usize) {
    let rows: Vec<String> = (0..n)
        .map(|i| {
            format!(
                "{i},2017-01-{:02} 08:00:00,2017-01-{:02} 08:10:00,600,Station {i},Station {},Subscriber,Female,1990",
                i + 1,
                i + 1,
                i + 1
            )
        })
        .collect();
    let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    write_csv(dir, "new_york_city.csv", DEMOGRAPHIC_HEADER, &refs);
}

pub fn config_for(dir: &PathBuf) -> Config {
    Config {
        data_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// A config path that never exists, so the CLI runs on defaults
pub fn no_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_missing_bikeshare.conf", name));
    fs::remove_file(&path).ok();
    path.to_string_lossy().to_string()
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("timestamp")
}

pub fn trip(start: &str, duration: f64, from: &str, to: &str, user: &str) -> TripRecord {
    TripRecord::new(
        ts(start),
        None,
        from.to_string(),
        to.to_string(),
        duration,
        Some(user.to_string()),
        None,
        None,
    )
}

pub fn trip_with_demographics(
    start: &str,
    from: &str,
    to: &str,
    user: &str,
    gender: &str,
    year: f64,
) -> TripRecord {
    TripRecord::new(
        ts(start),
        None,
        from.to_string(),
        to.to_string(),
        60.0,
        Some(user.to_string()),
        Some(gender.to_string()),
        Some(year),
    )
}

/// Like `trip_with_demographics`, with a possibly blank birth year.
pub fn trip_with_birth_year(user: &str, gender: &str, year: Option<f64>) -> TripRecord {
    TripRecord::new(
        ts("2017-01-02 08:00:00"),
        None,
        "A".to_string(),
        "B".to_string(),
        60.0,
        Some(user.to_string()),
        Some(gender.to_string()),
        year,
    )
}

pub fn dataset(city: City, records: Vec<TripRecord>) -> Dataset {
    Dataset::new(city, records)
}
