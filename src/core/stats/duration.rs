use crate::core::Dataset;
use crate::errors::AppResult;
use crate::utils::convert_seconds;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStats {
    /// Total below one second (no rows, or only zero-length trips)
    Unavailable,
    Totals { total: u64, mean: u64 },
}

pub fn duration_stats(data: &Dataset) -> DurationStats {
    let rows = data.records();
    let sum: f64 = rows.iter().map(|r| r.duration).sum();

    if sum < 1.0 {
        return DurationStats::Unavailable;
    }

    DurationStats::Totals {
        total: sum as u64,
        mean: (sum / rows.len() as f64) as u64,
    }
}

pub fn render_duration_stats<W: Write>(out: &mut W, stats: &DurationStats) -> AppResult<()> {
    match stats {
        DurationStats::Unavailable => {
            writeln!(out, "Unable to provide a total or mean travel time!")?;
        }
        DurationStats::Totals { total, mean } => {
            writeln!(out, "A total travel time of {}", convert_seconds(*total))?;
            writeln!(out, "An average travel time of {}", convert_seconds(*mean))?;
        }
    }
    Ok(())
}
