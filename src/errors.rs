use serde::Deserialize;
use thiserror::Error;

/// Closed set of error identifiers returned by the Supadata API in the
/// `error` field of a 4xx/5xx response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "invalid-request")]
    InvalidRequest,
    #[serde(rename = "internal-error")]
    InternalError,
    #[serde(rename = "forbidden")]
    Forbidden,
    #[serde(rename = "unauthorized")]
    Unauthorized,
    #[serde(rename = "upgrade-required")]
    UpgradeRequired,
    #[serde(rename = "transcript-unavailable")]
    TranscriptUnavailable,
    #[serde(rename = "not-found")]
    NotFound,
    #[serde(rename = "limit-exceeded")]
    LimitExceeded,
}

impl ErrorCode {
    /// The identifier exactly as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "invalid-request",
            ErrorCode::InternalError => "internal-error",
            ErrorCode::Forbidden => "forbidden",
            ErrorCode::Unauthorized => "unauthorized",
            ErrorCode::UpgradeRequired => "upgrade-required",
            ErrorCode::TranscriptUnavailable => "transcript-unavailable",
            ErrorCode::NotFound => "not-found",
            ErrorCode::LimitExceeded => "limit-exceeded",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire shape of an API error body: `{error, message, details, documentationUrl}`.
///
/// Also embedded under the `error` key of a failed job-status response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ErrorCode,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default, rename = "documentationUrl")]
    pub documentation_url: Option<String>,
}

/// All errors that can occur when using the Supadata SDK.
#[derive(Error, Debug)]
pub enum SupadataError {
    /// The base URL or endpoint path could not be parsed into a valid URL.
    /// Detected locally, before any network I/O.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A transport-level HTTP error from reqwest (connect failure, timeout,
    /// DNS, TLS). Passed through unchanged.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 4xx/5xx response with a well-formed Supadata error body.
    ///
    /// Match on the `code` field to branch on the failure class
    /// (e.g. [`ErrorCode::Unauthorized`] vs [`ErrorCode::LimitExceeded`]).
    #[error("{code}: {message}")]
    Api {
        code: ErrorCode,
        message: String,
        details: Option<String>,
        documentation_url: Option<String>,
    },

    /// A 4xx/5xx response whose body was not a decodable error shape
    /// (e.g. an upstream gateway's plaintext error page).
    #[error("request failed with status {0}")]
    Status(u16),

    /// A 2xx response whose body did not match the expected success shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ApiErrorBody> for SupadataError {
    fn from(body: ApiErrorBody) -> Self {
        SupadataError::Api {
            code: body.error,
            message: body.message,
            details: body.details,
            documentation_url: body.documentation_url,
        }
    }
}

/// A convenience alias for `Result<T, SupadataError>`.
pub type Result<T> = std::result::Result<T, SupadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_round_trips_from_wire_name() {
        let codes = [
            ("invalid-request", ErrorCode::InvalidRequest),
            ("internal-error", ErrorCode::InternalError),
            ("forbidden", ErrorCode::Forbidden),
            ("unauthorized", ErrorCode::Unauthorized),
            ("upgrade-required", ErrorCode::UpgradeRequired),
            ("transcript-unavailable", ErrorCode::TranscriptUnavailable),
            ("not-found", ErrorCode::NotFound),
            ("limit-exceeded", ErrorCode::LimitExceeded),
        ];
        for (wire, expected) in codes {
            let parsed: ErrorCode = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(parsed.as_str(), wire);
        }
    }

    #[test]
    fn api_error_display_is_code_and_message() {
        let err = SupadataError::Api {
            code: ErrorCode::InvalidRequest,
            message: "Test error message".into(),
            details: Some("Some details".into()),
            documentation_url: None,
        };
        assert_eq!(err.to_string(), "invalid-request: Test error message");
    }

    #[test]
    fn status_error_display_is_literal() {
        assert_eq!(
            SupadataError::Status(502).to_string(),
            "request failed with status 502"
        );
    }

    #[test]
    fn error_body_tolerates_missing_optional_fields() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error":"not-found","message":"gone"}"#).unwrap();
        assert_eq!(body.error, ErrorCode::NotFound);
        assert_eq!(body.message, "gone");
        assert!(body.details.is_none());
        assert!(body.documentation_url.is_none());
    }
}
