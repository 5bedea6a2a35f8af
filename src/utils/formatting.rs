//! Formatting utilities used by the statistics reports.

const SECS_PER_DAY: u64 = 24 * 3600;
const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MIN: u64 = 60;

/// Formats a number with `,` between thousands, e.g. 56789 → "56,789".
pub fn format_num(num: i64) -> String {
    let digits = num.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if num < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders a number of seconds as its total plus a days/hours/minutes/seconds
/// breakdown, skipping every unit that would be zero.
///
/// es: 90061 → "90,061 Seconds or 1 Days, 1 Hours, 1 Minutes, 1 Seconds"
///     3600  → "3,600 Seconds or 1 Hours, "
///     59    → "59 Seconds"
pub fn convert_seconds(seconds: u64) -> String {
    let mut out = format!("{} Seconds", format_num(seconds as i64));
    let mut connector = " or ";
    let mut secs = seconds;

    for (size, label, separated) in [
        (SECS_PER_DAY, "Days", true),
        (SECS_PER_HOUR, "Hours", false),
        (SECS_PER_MIN, "Minutes", false),
    ] {
        let units = secs / size;
        if units == 0 {
            continue;
        }
        let value = if separated {
            format_num(units as i64)
        } else {
            units.to_string()
        };
        out.push_str(&format!("{connector}{value} {label}, "));
        connector = "";
        secs %= size;
    }

    // a bare remainder only follows a larger unit
    if secs > 0 && connector.is_empty() {
        out.push_str(&format!("{secs} Seconds"));
    }
    out
}

/// 12-hour rendering of an hour of day. Hour 0 prints "0 am" and hour 12
/// prints "0 pm"; existing reports depend on that wording.
pub fn format_hour(hour: u32) -> String {
    if hour < 12 {
        format!("{} am", hour)
    } else {
        format!("{} pm", hour - 12)
    }
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}
