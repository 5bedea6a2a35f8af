use bikeshare::config::{Config, MissingCategory};
use bikeshare::core::Session;
use bikeshare::errors::AppError;
use bikeshare::models::{City, DayFilter, DisplayMode, MonthFilter};
use chrono::Weekday;
use std::io::Cursor;

mod common;
use common::{config_for, setup_city_data, setup_data_dir, write_nyc_rows};

fn run_session(cfg: Config, script: &str) -> (Result<(), AppError>, String, usize) {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new(), cfg);
    let result = session.run();
    let offset = session.raw_offset();
    let out = String::from_utf8(session.into_output()).expect("utf8");
    (result, out, offset)
}

#[test]
fn test_prompt_selection_reprompts_until_valid() {
    let dir = setup_city_data("session_reprompt");
    let script = "Boston\nnEw YoRk CiTy\njan\nJan\nmonday\nMon\nraw\nFormat\n";
    let mut session = Session::new(Cursor::new(script), Vec::new(), config_for(&dir));

    let selection = session.prompt_selection().expect("selection");
    assert_eq!(selection.city, City::NewYorkCity);
    assert_eq!(selection.month, MonthFilter::Month(1));
    assert_eq!(selection.day, DayFilter::Day(Weekday::Mon));
    assert_eq!(selection.mode, DisplayMode::Format);

    let out = String::from_utf8(session.into_output()).expect("utf8");
    assert!(out.starts_with("Hello! Let's explore some US bikeshare data!"));
    assert!(out.contains(
        "\"Boston\" not recognised!, enter only Chicago, New York City or Washington: "
    ));
    assert!(out.contains(
        "\"jan\" not recognised! Enter only All, Jan, Feb, Mar, Apr, May, or Jun: "
    ));
    assert!(out.contains(
        "\"monday\" not recognised! Enter only All, Sun, Mon, Tue, Wed, Thu, Fri, Sat: "
    ));
    assert!(out.contains("\"raw\" not recognised! Enter only Raw or Format: "));
    assert!(out.contains(&"-".repeat(40)));
}

#[test]
fn test_raw_pages_of_five() {
    let dir = setup_data_dir("session_raw_pages");
    write_nyc_rows(&dir, 12);

    let (result, out, offset) = run_session(
        config_for(&dir),
        "New York City\nAll\nAll\nRaw\ny\ny\nn\n",
    );
    result.expect("session");

    assert_eq!(out.matches("Would you like to see more? [y]").count(), 3);
    for i in 0..12 {
        assert!(out.contains(&format!("Station {i} ")), "row {i} missing");
    }
    // third page holds rows 10 and 11 only
    let third = out.rsplit("Start Time").next().expect("third page");
    assert!(third.contains("Station 10 "));
    assert!(third.contains("Station 11 "));
    assert!(!third.contains("Station 9 "));
    assert_eq!(offset, 15);
    assert!(!out.contains("No more rows to display."));
    assert!(!out.contains("restart"));
}

#[test]
fn test_raw_display_ends_when_rows_run_out() {
    let dir = setup_data_dir("session_raw_exhausted");
    write_nyc_rows(&dir, 7);

    let (result, out, offset) = run_session(config_for(&dir), "New York City\nAll\nAll\nRaw\ny\ny\n");
    result.expect("session");

    assert_eq!(out.matches("Would you like to see more? [y]").count(), 2);
    assert!(out.ends_with("No more rows to display.\n"));
    assert_eq!(offset, 10);
}

#[test]
fn test_raw_page_size_follows_config() {
    let dir = setup_data_dir("session_raw_page_size");
    write_nyc_rows(&dir, 4);
    let cfg = Config {
        page_size: 2,
        ..config_for(&dir)
    };

    let (result, out, offset) = run_session(cfg, "New York City\nAll\nAll\nRaw\ny\nn\n");
    result.expect("session");
    assert_eq!(out.matches("Would you like to see more? [y]").count(), 2);
    assert_eq!(offset, 4);
}

#[test]
fn test_declining_more_rows_ends_program() {
    let dir = setup_data_dir("session_raw_decline");
    write_nyc_rows(&dir, 12);

    // anything but a lowercase "y" stops, trailing lines are never read
    let (result, out, offset) = run_session(
        config_for(&dir),
        "New York City\nAll\nAll\nRaw\nY\nChicago\n",
    );
    result.expect("session");
    assert_eq!(out.matches("Would you like to see more? [y]").count(), 1);
    assert_eq!(offset, 5);
}

#[test]
fn test_stats_then_restart_then_exit() {
    let dir = setup_city_data("session_restart");
    let script = "chicago\nJan\nMon\nFormat\ny\nWashington\nAll\nAll\nFormat\nno\n";

    let (result, out, _) = run_session(config_for(&dir), script);
    result.expect("session");

    assert_eq!(out.matches("Hello! Let's explore some US bikeshare data!").count(), 2);
    assert_eq!(out.matches("Would you like to restart? [y]").count(), 2);
    assert!(out.contains("The most common day of the week is: Monday"));
    assert!(out.contains("Gender and Birthday information are not available for Washington, sorry!"));
}

#[test]
fn test_empty_filter_aborts_pass_but_not_session() {
    let dir = setup_city_data("session_empty_filter");

    // no Chicago rides in February
    let (result, out, _) = run_session(config_for(&dir), "Chicago\nFeb\nAll\nFormat\nn\n");
    result.expect("session");

    // reported on the session output, then the restart prompt follows
    let aborted = out
        .find("Statistics pass aborted: Cannot compute statistics on 'month'")
        .expect("abort warning");
    let restart = out.find("Would you like to restart? [y]").expect("restart prompt");
    assert!(aborted < restart);
    assert!(!out.contains("The most common month"));
}

#[test]
fn test_missing_category_policy_zero_completes_pass() {
    let dir = setup_city_data("session_policy_zero");
    let cfg = Config {
        missing_category: MissingCategory::Zero,
        ..config_for(&dir)
    };

    // the single June ride is a Male Subscriber
    let (result, out, _) = run_session(cfg, "Chicago\nJun\nAll\nFormat\nn\n");
    result.expect("session");
    assert!(out.contains("Your filtered data shows a total of 0 Customers and 1 Subscribers"));
    assert!(out.contains("Your filtered data shows 1 Male users and 0 Female users"));
    assert!(!out.contains("Statistics pass aborted"));
}

#[test]
fn test_closed_input_is_an_error() {
    let dir = setup_city_data("session_eof");
    let (result, _, _) = run_session(config_for(&dir), "Chicago\nJan\n");
    assert!(matches!(result, Err(AppError::InputClosed)));
}

#[test]
fn test_missing_city_file_is_fatal() {
    let dir = setup_city_data("session_missing_file");
    let (result, _, _) = run_session(config_for(&dir), "New York City\nAll\nAll\nFormat\n");
    assert!(matches!(result, Err(AppError::Load { .. })));
}
