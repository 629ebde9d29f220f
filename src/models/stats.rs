use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Successful response of `GET /stats/{short_code}`.
///
/// The service also echoes `short_code`; unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkStats {
    pub original_url: String,
    pub visits_count: u64,
    #[serde(deserialize_with = "super::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_link_stats_with_offset() {
        let json = r#"{
            "original_url": "http://example.com",
            "visits_count": 42,
            "created_at": "2024-01-15T10:30:00Z"
        }"#;
        let stats: LinkStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.original_url, "http://example.com");
        assert_eq!(stats.visits_count, 42);
        assert_eq!(
            stats.created_at,
            Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_link_stats_naive_timestamp_is_utc() {
        let json = r#"{
            "short_code": "abc123",
            "original_url": "http://example.com",
            "visits_count": 0,
            "created_at": "2024-01-15T10:30:00.123456"
        }"#;
        let stats: LinkStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.visits_count, 0);
        assert_eq!(
            stats.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_link_stats_rejects_negative_visits() {
        let json = r#"{
            "original_url": "http://example.com",
            "visits_count": -1,
            "created_at": "2024-01-15T10:30:00Z"
        }"#;
        assert!(serde_json::from_str::<LinkStats>(json).is_err());
    }

    #[test]
    fn test_link_stats_rejects_garbage_timestamp() {
        let json = r#"{
            "original_url": "http://example.com",
            "visits_count": 1,
            "created_at": "yesterday"
        }"#;
        assert!(serde_json::from_str::<LinkStats>(json).is_err());
    }
}
