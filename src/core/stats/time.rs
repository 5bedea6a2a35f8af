use super::mode::mode;
use crate::core::Dataset;
use crate::errors::{AppError, AppResult};
use crate::models::month::month_display_name;
use crate::utils::format_hour;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub month: u32,
    pub day_of_week: &'static str,
    pub start_hour: u32,
}

pub fn time_stats(data: &Dataset) -> AppResult<TimeStats> {
    let rows = data.records();

    let month = mode(rows.iter().map(|r| r.month())).ok_or(AppError::EmptyDataset("month"))?;
    let day_of_week =
        mode(rows.iter().map(|r| r.day_of_week())).ok_or(AppError::EmptyDataset("day_of_week"))?;
    let start_hour =
        mode(rows.iter().map(|r| r.start_hour())).ok_or(AppError::EmptyDataset("start_hour"))?;

    Ok(TimeStats {
        month,
        day_of_week,
        start_hour,
    })
}

pub fn render_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> AppResult<()> {
    writeln!(
        out,
        "The most common month of the year is: {}",
        month_display_name(stats.month)
    )?;
    writeln!(out, "The most common day of the week is: {}", stats.day_of_week)?;
    writeln!(
        out,
        "The most common hour to start is: {}",
        format_hour(stats.start_hour)
    )?;
    Ok(())
}
