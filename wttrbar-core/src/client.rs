use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;

use crate::error::WttrError;
use crate::model::WeatherSnapshot;

/// Fixed location the widget reports on.
pub const LOCATION: &str = "Istanbul";

/// Anything that can produce a [`WeatherSnapshot`].
///
/// The widget only ever talks to wttr.in, but the seam keeps the rendering
/// pipeline testable with canned snapshots.
#[async_trait]
pub trait SnapshotSource: Send + Sync + Debug {
    async fn fetch(&self) -> Result<WeatherSnapshot, WttrError>;
}

/// wttr.in j1 client. One GET per invocation, no timeout, no retry; the
/// host bar re-invokes the widget on a timer, so a failed refresh just
/// degrades this cycle's output.
#[derive(Debug, Clone)]
pub struct WttrClient {
    http: Client,
    url: String,
}

impl WttrClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            url: format!("https://wttr.in/{LOCATION}?format=j1"),
        }
    }
}

impl Default for WttrClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotSource for WttrClient {
    async fn fetch(&self) -> Result<WeatherSnapshot, WttrError> {
        let res = self.http.get(&self.url).send().await?;

        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, bytes = body.len(), "wttr.in responded");

        if !status.is_success() {
            return Err(WttrError::Status { status, body: truncate_body(&body) });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

// wttr.in error bodies are not ASCII-only; cut only on a char boundary.
fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut cut = MAX;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &body[..cut])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_fixed_location_in_j1_format() {
        let client = WttrClient::new();
        assert_eq!(client.url, "https://wttr.in/Istanbul?format=j1");
    }

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        let truncated = truncate_body(&long);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_body_backs_off_to_a_char_boundary() {
        // "é" straddles byte 200: cutting there would split the char.
        let body = format!("{}ééé", "x".repeat(199));
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(199)));

        // boundary exactly at 200 stays at 200
        let body = format!("{}éé", "x".repeat(200));
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(200)));
    }
}
