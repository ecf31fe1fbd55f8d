use std::fmt::Display;

use thiserror::Error;

/// Top-level error type for the `thousandeyes-api` crate.
///
/// Covers client construction, transport, response status and JSON
/// transcoding failures. Nothing here is logged or retried internally;
/// every error is handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Construction ────────────────────────────────────────────────
    /// The configured token cannot be sent as a header value.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup error (unreadable or invalid CA certificate).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // ── Status ──────────────────────────────────────────────────────
    /// Response status outside the 2xx class.
    ///
    /// `message` is the server's `errorMessage` when the body carried one;
    /// `cause` records why no formatted message could be extracted.
    #[error("{}", status_message(.status, .message.as_deref(), .cause.as_deref()))]
    HttpStatus {
        status: u16,
        message: Option<String>,
        cause: Option<String>,
    },

    /// A 2xx status other than the one the operation expects.
    #[error("failed to {action}, response code {status}")]
    UnexpectedStatus { action: &'static str, status: u16 },

    // ── Data ────────────────────────────────────────────────────────
    /// Response body was not valid JSON or did not match the record shape.
    #[error("could not decode JSON response: {0}")]
    Decode(String),

    /// Request record could not be serialized.
    #[error("could not encode JSON request: {0}")]
    Encode(String),

    /// A single record was requested but the envelope held none.
    #[error("no {resource} returned in response")]
    EmptyResult { resource: &'static str },
}

fn status_message(status: impl Display, message: Option<&str>, cause: Option<&str>) -> String {
    match message {
        Some(message) => format!("{message}. HTTP response code: {status}"),
        None => format!(
            "Response did not contain formatted error: {}. HTTP response code: {status}",
            cause.unwrap_or("none")
        ),
    }
}

impl Error {
    /// Returns `true` for JSON encode/decode failures.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Encode(_))
    }

    /// Returns `true` if the server answered 404 or the envelope was empty.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::HttpStatus { status: 404, .. } | Self::EmptyResult { .. } => true,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// The HTTP status code behind this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_without_formatted_message() {
        let err = Error::HttpStatus {
            status: 400,
            message: None,
            cause: None,
        };
        assert_eq!(
            err.to_string(),
            "Response did not contain formatted error: none. HTTP response code: 400"
        );
    }

    #[test]
    fn status_error_reports_extraction_cause() {
        let err = Error::HttpStatus {
            status: 502,
            message: None,
            cause: Some("body is not JSON".into()),
        };
        assert_eq!(
            err.to_string(),
            "Response did not contain formatted error: body is not JSON. HTTP response code: 502"
        );
    }

    #[test]
    fn status_error_with_server_message() {
        let err = Error::HttpStatus {
            status: 403,
            message: Some("Insufficient permissions".into()),
            cause: None,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient permissions. HTTP response code: 403"
        );
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn classification_helpers() {
        assert!(Error::Decode("x".into()).is_conversion());
        assert!(Error::Encode("x".into()).is_conversion());
        assert!(Error::EmptyResult { resource: "agents" }.is_not_found());
        assert!(
            Error::HttpStatus {
                status: 404,
                message: None,
                cause: None
            }
            .is_not_found()
        );
        assert!(
            !Error::UnexpectedStatus {
                action: "delete role",
                status: 200
            }
            .is_not_found()
        );
    }
}
