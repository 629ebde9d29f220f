//! Display formatting for stats values.

use chrono::{DateTime, TimeZone, Utc};

/// Format a count with `,` thousands separators: `1234567` -> `"1,234,567"`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a timestamp as `Jan 15, 2024, 10:30 AM` in the time zone `tz`.
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}
