//! Non-interactive `shorten` and `stats` commands.
//!
//! These share validation and the typed API with the TUI but print to
//! stdout instead of driving a surface.

use chrono::TimeZone;

use crate::api::ShortenerApi;
use crate::error::ShortyResult;
use crate::models::{LinkStats, ShortLinkResult};
use crate::validate::validate_url;
use crate::view_state::StatsDisplay;

/// Validate `raw_url` and create a short link for it.
pub async fn shorten_once(api: &ShortenerApi, raw_url: &str) -> ShortyResult<ShortLinkResult> {
    let url = validate_url(raw_url)?;
    let result = api.create_short_link(&url).await?;
    tracing::info!("Created short code {}", result.short_code);
    Ok(result)
}

/// Fetch stats for `code`.
pub async fn stats_once(api: &ShortenerApi, code: &str) -> ShortyResult<LinkStats> {
    Ok(api.link_stats(code.trim()).await?)
}

/// Multi-line stats printout with `created_at` in the zone `tz`.
pub fn stats_report<Tz: TimeZone>(code: &str, stats: &LinkStats, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let display = StatsDisplay::from_stats(stats, tz);
    format!(
        "Short code:    {}\nOriginal URL:  {}\nVisits:        {}\nCreated:       {}",
        code, display.original_url, display.visits, display.created_at
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ClientConfig;
    use crate::error::ShortyError;
    use chrono::Utc;
    use std::sync::Arc;

    fn api(mock: &MockHttpClient) -> ShortenerApi {
        ShortenerApi::new(Arc::new(mock.clone()), ClientConfig::default())
    }

    #[tokio::test]
    async fn test_shorten_once_validates_first() {
        let mock = MockHttpClient::new();
        let err = shorten_once(&api(&mock), "   ").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(mock.request_count(), 0);
    }

    #[tokio::test]
    async fn test_stats_once_reports_rejection() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(
            404,
            serde_json::json!({"detail": "Short URL not found"}),
        ));
        let err = stats_once(&api(&mock), "nope").await.unwrap_err();
        assert!(matches!(err, ShortyError::Request(_)));
        assert_eq!(err.user_message(), "Short URL not found");
    }

    #[test]
    fn test_stats_report() {
        let stats = LinkStats {
            original_url: "http://example.com".to_string(),
            visits_count: 1500,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        };
        let report = stats_report("abc123", &stats, &Utc);
        assert!(report.contains("Short code:    abc123"));
        assert!(report.contains("Visits:        1,500"));
        assert!(report.contains("Created:       Jan 15, 2024, 10:30 AM"));
    }
}
