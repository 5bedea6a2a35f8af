use super::mode::{mode, mode_with_count};
use crate::core::Dataset;
use crate::errors::{AppError, AppResult};
use crate::utils::format_num;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularTrip {
    pub start: String,
    pub end: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start_station: String,
    pub end_station: String,
    pub trip: PopularTrip,
}

pub fn station_stats(data: &Dataset) -> AppResult<StationStats> {
    let rows = data.records();

    let start_station = mode(rows.iter().map(|r| r.start_station.as_str()))
        .ok_or(AppError::EmptyDataset("Start Station"))?;
    let end_station = mode(rows.iter().map(|r| r.end_station.as_str()))
        .ok_or(AppError::EmptyDataset("End Station"))?;

    let ((start, end), count) = mode_with_count(
        rows.iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    )
    .ok_or(AppError::EmptyDataset("Start Station / End Station"))?;

    Ok(StationStats {
        start_station: start_station.to_string(),
        end_station: end_station.to_string(),
        trip: PopularTrip {
            start: start.to_string(),
            end: end.to_string(),
            count,
        },
    })
}

pub fn render_station_stats<W: Write>(out: &mut W, stats: &StationStats) -> AppResult<()> {
    writeln!(
        out,
        "The most popular Start Station was: {}",
        stats.start_station
    )?;
    writeln!(out, "The most popular End Station was: {}", stats.end_station)?;
    writeln!(
        out,
        "The most popular trip started at {} and ended at {}, a total of {} times",
        stats.trip.start,
        stats.trip.end,
        format_num(stats.trip.count as i64)
    )?;
    Ok(())
}
