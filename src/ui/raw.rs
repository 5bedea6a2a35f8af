//! Tabular rendering of raw trip rows.

use crate::models::TripRecord;
use crate::utils::table::{Column, Table};

fn format_optional_f64(v: Option<f64>) -> String {
    match v {
        Some(x) if x.fract() == 0.0 => format!("{:.1}", x),
        Some(x) => x.to_string(),
        None => "NaN".to_string(),
    }
}

fn format_duration(secs: f64) -> String {
    if secs.fract() == 0.0 {
        format!("{}", secs as u64)
    } else {
        secs.to_string()
    }
}

/// Renders `rows`, numbering them from `first_index` (their position in the
/// filtered dataset). Demographic columns appear only when asked for.
pub fn render_rows(rows: &[TripRecord], first_index: usize, demographics: bool) -> String {
    let mut columns = vec![
        Column::right(""),
        Column::left("Start Time"),
        Column::left("End Time"),
        Column::right("Trip Duration"),
        Column::left("Start Station"),
        Column::left("End Station"),
        Column::left("User Type"),
    ];
    if demographics {
        columns.push(Column::left("Gender"));
        columns.push(Column::right("Birth Year"));
    }
    columns.push(Column::right("month"));
    columns.push(Column::left("day_of_week"));
    columns.push(Column::right("start_hour"));

    let mut table = Table::new(columns);

    for (i, r) in rows.iter().enumerate() {
        let mut row = vec![
            (first_index + i).to_string(),
            r.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            r.end_time.clone().unwrap_or_else(|| "NaN".into()),
            format_duration(r.duration),
            r.start_station.clone(),
            r.end_station.clone(),
            r.user_type.clone().unwrap_or_else(|| "NaN".into()),
        ];
        if demographics {
            row.push(r.gender.clone().unwrap_or_else(|| "NaN".into()));
            row.push(format_optional_f64(r.birth_year));
        }
        row.push(r.month().to_string());
        row.push(r.day_of_week().to_string());
        row.push(r.start_hour().to_string());

        table.add_row(row);
    }

    table.render()
}
