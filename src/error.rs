//! Client error taxonomy and the `{error, details}` failure shape.
//!
//! DESIGN
//! ======
//! Every public call resolves to `Result<T, ApiError>`. Callers that want the
//! flat JSON shape the web front end rendered as alerts convert through
//! [`Failure`], so `error` is always present and `details` carries whatever
//! structured body the server returned.

use serde::Serialize;
use serde_json::Value;

/// Message shown for every transport or body-parse failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error or invalid response.";

/// Which locally stored credential was absent when a call was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredential {
    /// No bearer token.
    Token,
    /// Token, role, or user id missing for a role-scoped call.
    Identity,
    /// Token or student id missing.
    StudentId,
    /// Token or teacher id missing.
    TeacherId,
    /// Reported without naming the credential (bulletins, profile writes).
    Generic,
}

impl MissingCredential {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Token => "Unauthorized access: No token found",
            Self::Identity => "Unauthorized access: Missing credentials",
            Self::StudentId => "Unauthorized access: No token or student ID found",
            Self::TeacherId => "Unauthorized access: No token or teacher ID found",
            Self::Generic => "Unauthorized access",
        }
    }
}

/// Errors produced by NEUDev client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Required credentials were not present; no request was sent.
    #[error("{}", .0.message())]
    Unauthorized(MissingCredential),

    /// Input rejected before any request was sent.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        details: Value,
    },

    /// The request never produced a response.
    #[error("Network error or invalid response.")]
    Transport(#[source] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Network error or invalid response.")]
    InvalidBody(#[source] serde_json::Error),

    /// A success body did not match the expected schema.
    #[error("malformed {expected} response: {source}")]
    Schema {
        expected: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A composite flow failed with a fixed user-facing message.
    #[error("{0}")]
    Operation(&'static str),

    /// A configuration value was missing or could not be parsed.
    #[error("config error: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "E_UNAUTHORIZED",
            Self::Validation(_) => "E_VALIDATION",
            Self::Status { .. } => "E_STATUS",
            Self::Transport(_) => "E_TRANSPORT",
            Self::InvalidBody(_) => "E_INVALID_BODY",
            Self::Schema { .. } => "E_SCHEMA",
            Self::Operation(_) => "E_OPERATION",
            Self::Config(_) => "E_CONFIG",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
        }
    }

    /// HTTP status of the backend response, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured server body attached to a status error.
    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        match self {
            Self::Status { details, .. } => Some(details),
            _ => None,
        }
    }

    /// Replace the generic status message with `fallback` when the server did
    /// not supply its own.
    #[must_use]
    pub(crate) fn or_message(self, fallback: &str) -> Self {
        match self {
            Self::Status { status, details, .. } if server_message(&details).is_none() => {
                Self::Status { status, message: fallback.to_owned(), details }
            }
            other => other,
        }
    }

    /// Flatten into the `{error, details}` shape.
    #[must_use]
    pub fn to_failure(&self) -> Failure {
        Failure { error: self.to_string(), details: self.details().cloned() }
    }
}

/// Serializable `{error, details?}` value.
///
/// `details` is omitted for local failures and present (possibly `null`) for
/// status errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for Failure {
    fn from(err: ApiError) -> Self {
        err.to_failure()
    }
}

/// `message` string carried by a server body, if any.
pub(crate) fn server_message(body: &Value) -> Option<&str> {
    body.get("message")?.as_str()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
