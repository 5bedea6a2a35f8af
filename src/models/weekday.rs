use crate::errors::{AppError, AppResult};
use chrono::Weekday;

const DAYS: [(&str, Weekday); 7] = [
    ("Sun", Weekday::Sun),
    ("Mon", Weekday::Mon),
    ("Tue", Weekday::Tue),
    ("Wed", Weekday::Wed),
    ("Thu", Weekday::Thu),
    ("Fri", Weekday::Fri),
    ("Sat", Weekday::Sat),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(Weekday),
}

impl DayFilter {
    /// Parse a prompt token (`All`, `Sun` … `Sat`); case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "All" {
            return Some(DayFilter::All);
        }
        DAYS.iter()
            .find(|(t, _)| *t == token)
            .map(|(_, d)| DayFilter::Day(*d))
    }

    /// Parse a canonical name (`all`, `Sunday` … `Saturday`); case-insensitive.
    pub fn from_name(name: &str) -> AppResult<Self> {
        if name.eq_ignore_ascii_case("all") {
            return Ok(DayFilter::All);
        }
        DAYS.iter()
            .map(|(_, d)| *d)
            .find(|d| weekday_name(*d).eq_ignore_ascii_case(name))
            .map(DayFilter::Day)
            .ok_or_else(|| AppError::UnknownDay(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(d) => weekday_name(*d),
        }
    }

    /// Compares by weekday name, ignoring case.
    pub fn matches(&self, day_name: &str) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(d) => weekday_name(*d).eq_ignore_ascii_case(day_name),
        }
    }
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
