use chrono::{Datelike, NaiveDateTime, Timelike};

use super::weekday::weekday_name;

/// One bikeshare trip with its calendar fields derived from `start_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub start_station: String,
    pub end_station: String,
    /// Seconds; fractional in some source files
    pub duration: f64,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    month: u32,
    day_of_week: &'static str,
    start_hour: u32,
}

impl TripRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: Option<String>,
        start_station: String,
        end_station: String,
        duration: f64,
        user_type: Option<String>,
        gender: Option<String>,
        birth_year: Option<f64>,
    ) -> Self {
        Self {
            month: start_time.month(),
            day_of_week: weekday_name(start_time.weekday()),
            start_hour: start_time.hour(),
            start_time,
            end_time,
            start_station,
            end_station,
            duration,
            user_type,
            gender,
            birth_year,
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day_of_week(&self) -> &'static str {
        self.day_of_week
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }
}
