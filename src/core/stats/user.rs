use super::mode::{mode, value_counts};
use crate::config::MissingCategory;
use crate::core::Dataset;
use crate::errors::{AppError, AppResult};
use crate::utils::format_num;
use indexmap::IndexMap;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Demographics {
    pub male: u64,
    pub female: u64,
    pub earliest_birth_year: i64,
    pub latest_birth_year: i64,
    pub common_birth_year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserStats {
    pub customers: u64,
    pub subscribers: u64,
    /// `None` when the city publishes no gender / birth year columns
    pub demographics: Option<Demographics>,
}

fn category_count(
    counts: &IndexMap<&str, u64>,
    column: &'static str,
    label: &'static str,
    policy: MissingCategory,
) -> AppResult<u64> {
    match (counts.get(label), policy) {
        (Some(n), _) => Ok(*n),
        (None, MissingCategory::Zero) => Ok(0),
        (None, MissingCategory::Fail) => Err(AppError::MissingCategory { column, label }),
    }
}

fn demographics(data: &Dataset, policy: MissingCategory) -> AppResult<Demographics> {
    let rows = data.records();

    let genders = value_counts(rows.iter().filter_map(|r| r.gender.as_deref()));
    let male = category_count(&genders, "Gender", "Male", policy)?;
    let female = category_count(&genders, "Gender", "Female", policy)?;

    let years: Vec<f64> = rows
        .iter()
        .filter_map(|r| r.birth_year)
        .filter(|y| !y.is_nan())
        .collect();
    if years.is_empty() {
        return Err(AppError::EmptyDataset("Birth Year"));
    }

    let earliest = years.iter().copied().fold(f64::INFINITY, f64::min);
    let latest = years.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let common = mode(years.iter().map(|y| *y as i64)).ok_or(AppError::EmptyDataset("Birth Year"))?;

    Ok(Demographics {
        male,
        female,
        earliest_birth_year: earliest as i64,
        latest_birth_year: latest as i64,
        common_birth_year: common,
    })
}

pub fn user_stats(data: &Dataset, policy: MissingCategory) -> AppResult<UserStats> {
    let types = value_counts(data.records().iter().filter_map(|r| r.user_type.as_deref()));
    let customers = category_count(&types, "User Type", "Customer", policy)?;
    let subscribers = category_count(&types, "User Type", "Subscriber", policy)?;

    let demographics = if data.city.has_demographics() {
        Some(demographics(data, policy)?)
    } else {
        None
    };

    Ok(UserStats {
        customers,
        subscribers,
        demographics,
    })
}

pub fn render_user_stats<W: Write>(
    out: &mut W,
    stats: &UserStats,
    city_name: &str,
) -> AppResult<()> {
    writeln!(
        out,
        "Your filtered data shows a total of {} Customers and {} Subscribers",
        format_num(stats.customers as i64),
        format_num(stats.subscribers as i64)
    )?;

    match &stats.demographics {
        None => {
            writeln!(
                out,
                "\nGender and Birthday information are not available for {}, sorry!",
                city_name
            )?;
        }
        Some(d) => {
            writeln!(
                out,
                "Your filtered data shows {} Male users and {} Female users",
                format_num(d.male as i64),
                format_num(d.female as i64)
            )?;
            writeln!(
                out,
                "The earliest Birth Year filtered was: {}",
                d.earliest_birth_year
            )?;
            writeln!(
                out,
                "The most recent Birth Year found was: {}",
                d.latest_birth_year
            )?;
            writeln!(
                out,
                "The most common Birth Year found was: {}",
                d.common_birth_year
            )?;
        }
    }
    Ok(())
}
