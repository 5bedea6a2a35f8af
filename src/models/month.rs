use crate::errors::{AppError, AppResult};

/// Months covered by the published data, in calendar order.
pub const MONTH_NAMES: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

const MONTH_TOKENS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    /// 1-based month number, always within 1..=6
    Month(u32),
}

impl MonthFilter {
    /// Parse a prompt token (`All`, `Jan` … `Jun`); case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        if token == "All" {
            return Some(MonthFilter::All);
        }
        MONTH_TOKENS
            .iter()
            .position(|t| *t == token)
            .map(|i| MonthFilter::Month(i as u32 + 1))
    }

    /// Parse a canonical name (`all`, `january` … `june`); case-insensitive.
    pub fn from_name(name: &str) -> AppResult<Self> {
        let lower = name.to_lowercase();
        if lower == "all" {
            return Ok(MonthFilter::All);
        }
        MONTH_NAMES
            .iter()
            .position(|m| *m == lower)
            .map(|i| MonthFilter::Month(i as u32 + 1))
            .ok_or_else(|| AppError::UnknownMonth(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(n) => (*n as usize)
                .checked_sub(1)
                .and_then(|i| MONTH_NAMES.get(i))
                .copied()
                .unwrap_or("unknown"),
        }
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Month(n) => *n == month,
        }
    }
}

/// Full English month name for a month number, e.g. 6 → "June".
pub fn month_display_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
