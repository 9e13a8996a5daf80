use prodcat_core::Format;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure, or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The body did not parse as the format that was requested.
    #[error("{format} parse error: {message}")]
    Parse {
        format: Format,
        message: String,
        body: String,
    },

    /// The caller's cancellation signal fired before the exchange finished.
    #[error("request cancelled")]
    Cancelled,

    /// The id cannot be sent as a single `/products/{id}` path segment.
    #[error("invalid product id \"{id}\": {reason}")]
    InvalidId { id: String, reason: &'static str },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ClientError {
    /// `true` for a caller-initiated abort, which is not a failure and should
    /// not be shown to the user.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ClientError::Cancelled)
    }

    pub(crate) fn parse(format: Format, message: impl Into<String>, body: &str) -> Self {
        ClientError::Parse {
            format,
            message: message.into(),
            body: body.to_owned(),
        }
    }
}

/// A failed HTTP exchange: non-2xx status plus the response body untouched.
///
/// Truncating `body` for display is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub status_code: u16,
    /// `HTTP <code> <reason>`, e.g. `HTTP 404 Not Found`.
    pub message: String,
    pub body: String,
}

impl FetchError {
    #[must_use]
    pub fn new(status: StatusCode, body: String) -> Self {
        let code = status.as_u16();
        let message = match status.canonical_reason() {
            Some(reason) => format!("HTTP {code} {reason}"),
            None => format!("HTTP {code}"),
        };
        Self {
            status_code: code,
            message,
            body,
        }
    }
}

/// Passes a 2xx body through and turns anything else into a [`FetchError`].
///
/// # Errors
///
/// Returns [`FetchError`] when `status` is outside `200..=299`.
pub fn classify_response(status: StatusCode, body: String) -> Result<String, FetchError> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(FetchError::new(status, body))
    }
}
