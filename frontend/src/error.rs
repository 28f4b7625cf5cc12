//! Client-side failures.

use crate::model::ApiError;

/// Anything that can go wrong during one API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The base address is not usable as an HTTP URL prefix.
    #[error("invalid API base URL: {message}")]
    InvalidBaseUrl {
        /// Why the URL was rejected.
        message: String,
    },

    /// The request never produced a response.
    #[error("request failed: {message}")]
    Transport {
        /// Description of the connection or protocol failure.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("server responded with status {status}{}", describe(.payload.as_ref()))]
    Status {
        /// HTTP status code.
        status: u16,
        /// Error body, when the server sent a decodable one.
        payload: Option<ApiError>,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response body: {message}")]
    Decode {
        /// Decoder description of the mismatch.
        message: String,
    },
}

fn describe(payload: Option<&ApiError>) -> String {
    payload.map_or_else(String::new, |err| format!(": {} ({})", err.message, err.code))
}

impl ClientError {
    /// Create an invalid base URL error.
    pub fn invalid_base_url(message: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            message: message.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status error carrying the decoded payload, if any.
    #[must_use]
    pub fn status(status: u16, payload: Option<ApiError>) -> Self {
        Self::Status { status, payload }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Error code sent by the server, when the failure carried one.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Status {
                payload: Some(payload),
                ..
            } => Some(payload.code.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn status_errors_describe_the_payload() {
        let err = ClientError::status(
            404,
            Some(ApiError {
                code: "not_found".to_owned(),
                message: "user x not found".to_owned(),
                trace_id: None,
            }),
        );
        assert_eq!(
            err.to_string(),
            "server responded with status 404: user x not found (not_found)"
        );
        assert_eq!(err.api_code(), Some("not_found"));
    }

    #[rstest]
    fn status_errors_without_payload_show_only_the_status() {
        let err = ClientError::status(502, None);
        assert_eq!(err.to_string(), "server responded with status 502");
        assert_eq!(err.api_code(), None);
    }
}
