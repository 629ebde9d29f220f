//! Display-ready statistics.

use chrono::TimeZone;

use crate::format::{format_count, format_timestamp};
use crate::models::LinkStats;

/// Stats fields already formatted as the stats panel shows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsDisplay {
    pub original_url: String,
    pub visits: String,
    pub created_at: String,
}

impl StatsDisplay {
    /// Format `stats` with `created_at` rendered in the time zone `tz`.
    pub fn from_stats<Tz: TimeZone>(stats: &LinkStats, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            original_url: stats.original_url.clone(),
            visits: format_count(stats.visits_count),
            created_at: format_timestamp(&stats.created_at, tz),
        }
    }
}
