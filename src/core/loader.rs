//! Dataset loader: reads one city's trip records and applies the
//! month / weekday filters.

use crate::errors::{AppError, AppResult};
use crate::models::{City, DayFilter, MonthFilter, TripRecord};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

const START_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// One CSV row as published; unknown columns are ignored.
#[derive(Debug, Deserialize)]
struct RawTrip {
    #[serde(rename = "Start Time")]
    start_time: String,
    #[serde(rename = "End Time", default)]
    end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(
        rename = "Birth Year",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    birth_year: Option<f64>,
}

/// Trip records of a single city, possibly narrowed by filters.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: City,
    records: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: City, records: Vec<TripRecord>) -> Self {
        Self { city, records }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows `[offset, offset + size)`, clamped to the data; empty past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[TripRecord] {
        let start = offset.min(self.records.len());
        let end = offset.saturating_add(size).min(self.records.len());
        &self.records[start..end]
    }
}

fn parse_start_time(s: &str) -> Option<NaiveDateTime> {
    START_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s.trim(), fmt).ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parses trip records from any CSV reader. `path` is only used in errors.
pub fn read_trips<R: std::io::Read>(reader: R, path: &Path) -> AppResult<Vec<TripRecord>> {
    let load_err = |reason: String| AppError::Load {
        path: path.to_path_buf(),
        reason,
    };

    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (i, row) in rdr.deserialize::<RawTrip>().enumerate() {
        let raw = row.map_err(|e| load_err(e.to_string()))?;
        let line = i + 2; // header is line 1

        let start_time = parse_start_time(&raw.start_time).ok_or_else(|| {
            load_err(format!("line {line}: invalid Start Time '{}'", raw.start_time))
        })?;

        if raw.trip_duration.is_nan() || raw.trip_duration < 0.0 {
            return Err(load_err(format!(
                "line {line}: invalid Trip Duration {}",
                raw.trip_duration
            )));
        }

        records.push(TripRecord::new(
            start_time,
            non_empty(raw.end_time),
            raw.start_station,
            raw.end_station,
            raw.trip_duration,
            non_empty(raw.user_type),
            non_empty(raw.gender),
            raw.birth_year,
        ));
    }

    Ok(records)
}

/// Load every record of `city` from its CSV file inside `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> AppResult<Dataset> {
    let path = data_dir.join(city.file_name());
    debug!(path = %path.display(), "opening trip data");

    let file = std::fs::File::open(&path).map_err(|e| AppError::Load {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let records = read_trips(file, &path)?;

    info!(city = city.name(), rows = records.len(), "trip data loaded");
    Ok(Dataset::new(city, records))
}

/// Returns a new dataset holding only the rows that match both filters.
pub fn apply_filters(data: &Dataset, month: MonthFilter, day: DayFilter) -> Dataset {
    let records: Vec<TripRecord> = data
        .records()
        .iter()
        .filter(|r| month.matches(r.month()) && day.matches(r.day_of_week()))
        .cloned()
        .collect();

    debug!(
        month = month.name(),
        day = day.name(),
        kept = records.len(),
        of = data.len(),
        "filters applied"
    );
    Dataset::new(data.city, records)
}

/// Load `city` and narrow it to the requested month and weekday names.
pub fn load_data(data_dir: &Path, city: &str, month: &str, day: &str) -> AppResult<Dataset> {
    let city = City::from_name(city)?;
    let month = MonthFilter::from_name(month)?;
    let day = DayFilter::from_name(day)?;

    let all = load_city(data_dir, city)?;
    Ok(apply_filters(&all, month, day))
}
