use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between the GET and the finished tooltip.
///
/// Callers never see this type escape [`crate::run`]; it exists so the
/// failure document can embed a useful description of the underlying cause.
#[derive(Debug, Error)]
pub enum WttrError {
    #[error("request to wttr.in failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("wttr.in returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse wttr.in JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is missing {0}")]
    Missing(&'static str),

    #[error("unknown weather code {0:?}")]
    UnknownCode(String),

    #[error("invalid numeric field {field}: {value:?}")]
    BadNumber { field: &'static str, value: String },
}
