//! Statistics engine: four reports over a filtered dataset.
//!
//! Every report is a pure computation (`*_stats`) paired with a renderer
//! (`render_*`). `print_all` runs them in their fixed order, wrapping each in
//! a banner, its elapsed time and a separator line.

pub mod duration;
pub mod mode;
pub mod station;
pub mod time;
pub mod user;

pub use duration::{DurationStats, duration_stats, render_duration_stats};
pub use station::{PopularTrip, StationStats, render_station_stats, station_stats};
pub use time::{TimeStats, render_time_stats, time_stats};
pub use user::{Demographics, UserStats, render_user_stats, user_stats};

use crate::config::MissingCategory;
use crate::core::Dataset;
use crate::errors::AppResult;
use crate::ui::messages::separator;
use std::io::Write;
use std::time::Instant;
use tracing::debug;

fn timed<W, F>(out: &mut W, banner: &str, report: F) -> AppResult<()>
where
    W: Write,
    F: FnOnce(&mut W) -> AppResult<()>,
{
    writeln!(out, "\n{}\n", banner)?;
    let started = Instant::now();

    report(out)?;

    writeln!(
        out,
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    separator(out)?;
    Ok(())
}

/// Prints time, station, duration and user reports, stopping at the first
/// report that cannot be computed.
pub fn print_all<W: Write>(
    out: &mut W,
    data: &Dataset,
    policy: MissingCategory,
) -> AppResult<()> {
    debug!(rows = data.len(), "statistics pass started");

    timed(out, "Calculating The Most Frequent Times of Travel...", |o| {
        let stats = time_stats(data)?;
        render_time_stats(o, &stats)
    })?;

    timed(out, "Calculating The Most Popular Stations and Trip...", |o| {
        let stats = station_stats(data)?;
        render_station_stats(o, &stats)
    })?;

    timed(out, "Calculating Trip Duration...", |o| {
        render_duration_stats(o, &duration_stats(data))
    })?;

    timed(out, "Calculating User Stats...", |o| {
        let stats = user_stats(data, policy)?;
        render_user_stats(o, &stats, data.city.display_name())
    })?;

    Ok(())
}
