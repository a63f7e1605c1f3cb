//! Core library for the `wttrbar` waybar widget.
//!
//! This crate defines:
//! - The wttr.in j1 wire model and the waybar output document
//! - The weather-code glyph and chance-label tables
//! - Tooltip/text rendering
//! - The wttr.in HTTP client behind a [`SnapshotSource`] seam
//!
//! It is used by the `wttrbar` binary; everything observable funnels through
//! [`run`], which never fails: any error becomes the two-key failure
//! document so the bar always receives valid JSON.

use chrono::{Local, Timelike};

pub mod client;
pub mod error;
pub mod format;
pub mod glyphs;
pub mod model;

pub use client::{SnapshotSource, WttrClient};
pub use error::WttrError;
pub use model::{OutputDocument, WeatherSnapshot};

/// One widget refresh: fetch a snapshot and render it against the current
/// local hour. The error branch is taken exactly once, here.
pub async fn run(source: &dyn SnapshotSource) -> OutputDocument {
    match refresh(source, Local::now().hour()).await {
        Ok(doc) => doc,
        Err(err) => {
            tracing::warn!(%err, "refresh failed, emitting failure document");
            OutputDocument::failure(&err)
        }
    }
}

async fn refresh(source: &dyn SnapshotSource, hour: u32) -> Result<OutputDocument, WttrError> {
    let snapshot = source.fetch().await?;
    format::render(&snapshot, hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl SnapshotSource for Unreachable {
        async fn fetch(&self) -> Result<WeatherSnapshot, WttrError> {
            Err(WttrError::Missing("current_condition"))
        }
    }

    #[derive(Debug)]
    struct RateLimited;

    #[async_trait]
    impl SnapshotSource for RateLimited {
        async fn fetch(&self) -> Result<WeatherSnapshot, WttrError> {
            Err(WttrError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: "Sorry, we are running out of queries".to_string(),
            })
        }
    }

    #[derive(Debug)]
    struct Canned(serde_json::Value);

    #[async_trait]
    impl SnapshotSource for Canned {
        async fn fetch(&self) -> Result<WeatherSnapshot, WttrError> {
            Ok(serde_json::from_value(self.0.clone())?)
        }
    }

    #[tokio::test]
    async fn failing_source_degrades_to_failure_document() {
        let doc = run(&Unreachable).await;

        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["text"], "❌");
        assert!(
            obj["tooltip"]
                .as_str()
                .unwrap()
                .contains("response is missing current_condition")
        );
    }

    #[tokio::test]
    async fn non_success_status_degrades_to_failure_document() {
        let doc = run(&RateLimited).await;

        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["text"], "❌");

        let tooltip = obj["tooltip"].as_str().unwrap();
        assert!(tooltip.starts_with("wttr.in'e bağlanılamıyor\n"));
        assert!(tooltip.contains("503"));
        assert!(tooltip.contains("running out of queries"));
    }

    #[tokio::test]
    async fn valid_snapshot_yields_three_string_keys() {
        let source = Canned(json!({
            "current_condition": [{
                "FeelsLikeC": "5",
                "weatherCode": "113",
                "weatherDesc": [{"value": "Clear"}],
                "humidity": "40",
                "windspeedKmph": "10"
            }],
            "weather": [{"hourly": []}]
        }));

        let doc = run(&source).await;

        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        for key in ["text", "class", "tooltip"] {
            assert!(obj[key].is_string(), "{key} must be a string");
        }
        assert_eq!(obj["text"], "☀️ 5°C");
        assert_eq!(obj["class"], "Clear");
    }

    #[tokio::test]
    async fn unknown_code_routes_to_failure_document_not_panic() {
        let source = Canned(json!({
            "current_condition": [{
                "FeelsLikeC": "5",
                "weatherCode": "424242",
                "weatherDesc": [{"value": "???"}],
                "humidity": "40",
                "windspeedKmph": "10"
            }],
            "weather": [{"hourly": []}]
        }));

        let doc = run(&source).await;

        let value = serde_json::to_value(&doc).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["text"], "❌");
        assert!(obj["tooltip"].as_str().unwrap().contains("424242"));
    }
}
