//! Request builder and response normalisation shared by every endpoint.
//!
//! DESIGN
//! ======
//! Endpoint methods never touch `reqwest` directly. They describe a call with
//! [`ApiRequest`] (method, path, optional bearer token, query, and body) and
//! let [`normalize_response`] collapse whatever comes back into either a JSON
//! value or an [`ApiError`]:
//!
//! - `204` is always `{"message": "Success"}`
//! - an empty 2xx body is also `{"message": "Success"}`, except for list
//!   endpoints, which read it as an empty list
//! - a non-2xx status carries the server `message` (or a generic status
//!   line) plus the whole body as `details`
//! - unreadable bodies and transport failures share one generic message

use std::time::Duration;

use reqwest::Method;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ApiError, server_message};
use crate::types::Message;

pub const SUCCESS_MESSAGE: &str = "Success";

/// Client for one NEUDev backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct NeuDevClient {
    http: reqwest::Client,
    base_url: String,
}

impl NeuDevClient {
    /// Build a client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    /// Build a client from `NEUDEV_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(&ClientConfig::from_env()?)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn request(&self, method: Method, path: String) -> ApiRequest<'_> {
        ApiRequest { client: self, method, path, token: None, query: Vec::new(), body: Body::Empty }
    }

    pub(crate) fn get(&self, path: String) -> ApiRequest<'_> {
        self.request(Method::GET, path)
    }

    pub(crate) fn post(&self, path: String) -> ApiRequest<'_> {
        self.request(Method::POST, path)
    }

    pub(crate) fn put(&self, path: String) -> ApiRequest<'_> {
        self.request(Method::PUT, path)
    }

    pub(crate) fn delete(&self, path: String) -> ApiRequest<'_> {
        self.request(Method::DELETE, path)
    }
}

enum Body {
    Empty,
    Json(Value),
    Form(reqwest::multipart::Form),
}

/// One pending backend call.
pub(crate) struct ApiRequest<'a> {
    client: &'a NeuDevClient,
    method: Method,
    path: String,
    token: Option<&'a str>,
    query: Vec<(&'static str, String)>,
    body: Body,
}

impl<'a> ApiRequest<'a> {
    pub(crate) fn bearer(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    pub(crate) fn query(mut self, pairs: Vec<(&'static str, String)>) -> Self {
        self.query = pairs;
        self
    }

    pub(crate) fn json(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(ApiError::InvalidBody)?;
        self.body = Body::Json(value);
        Ok(self)
    }

    pub(crate) fn form(mut self, form: reqwest::multipart::Form) -> Self {
        self.body = Body::Form(form);
        self
    }

    async fn dispatch(self) -> Result<(reqwest::Response, String), ApiError> {
        let url = format!("{}{}", self.client.base_url, self.path);
        tracing::debug!(method = %self.method, path = %self.path, authed = self.token.is_some(), "api request");

        let mut request = self
            .client
            .http
            .request(self.method, &url)
            .header(ACCEPT, "application/json");
        if let Some(token) = self.token {
            request = request.bearer_auth(token);
        }
        if !self.query.is_empty() {
            request = request.query(&self.query);
        }
        request = match self.body {
            Body::Empty => request,
            Body::Json(value) => request.json(&value),
            Body::Form(form) => request.multipart(form),
        };

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, path = %self.path, "network error");
            ApiError::Transport(e)
        })?;
        Ok((response, self.path))
    }

    /// Send and report only the status code. The body is never read.
    pub(crate) async fn send_status(self) -> Result<u16, ApiError> {
        let (response, _) = self.dispatch().await?;
        Ok(response.status().as_u16())
    }

    /// Send and normalise; `None` means the backend returned no data.
    async fn send_data(self) -> Result<Option<Value>, ApiError> {
        let (response, path) = self.dispatch().await?;
        let status = response.status().as_u16();
        if status == 204 {
            return Ok(None);
        }
        let text = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, path = %path, "response body read failed");
            ApiError::Transport(e)
        })?;

        let normalized = normalize_data(status, &text);
        if let Err(e) = &normalized {
            tracing::debug!(status, path = %path, error = %e, "api error response");
        }
        normalized
    }

    /// Send and normalise into a JSON value.
    pub(crate) async fn send_value(self) -> Result<Value, ApiError> {
        Ok(self.send_data().await?.unwrap_or_else(success_value))
    }

    /// Send and decode a typed success body.
    pub(crate) async fn send<T: DeserializeOwned>(self, expected: &'static str) -> Result<T, ApiError> {
        decode(self.send_value().await?, expected)
    }

    /// Send and decode a list; a reply without data is an empty list.
    pub(crate) async fn send_list<T: DeserializeOwned>(self, expected: &'static str) -> Result<Vec<T>, ApiError> {
        match self.send_data().await? {
            Some(value) => decode(value, expected),
            None => Ok(Vec::new()),
        }
    }

    /// Send and reduce the success body to its `message`.
    pub(crate) async fn send_ack(self) -> Result<Message, ApiError> {
        let value = self.send_value().await?;
        Ok(Message::new(server_message(&value).unwrap_or(SUCCESS_MESSAGE)))
    }
}

fn success_value() -> Value {
    serde_json::json!({ "message": SUCCESS_MESSAGE })
}

/// Collapse a status and raw body into the success value or an error.
///
/// # Errors
///
/// Returns [`ApiError::InvalidBody`] for non-JSON bodies and
/// [`ApiError::Status`] for non-2xx statuses.
pub fn normalize_response(status: u16, text: &str) -> Result<Value, ApiError> {
    Ok(normalize_data(status, text)?.unwrap_or_else(success_value))
}

fn normalize_data(status: u16, text: &str) -> Result<Option<Value>, ApiError> {
    if status == 204 {
        return Ok(None);
    }
    let data = if text.trim().is_empty() {
        None
    } else {
        Some(serde_json::from_str::<Value>(text).map_err(|e| {
            tracing::warn!(error = %e, status, "response body is not JSON");
            ApiError::InvalidBody(e)
        })?)
    };

    if !(200..300).contains(&status) {
        let details = data.unwrap_or(Value::Null);
        let message = server_message(&details)
            .map_or_else(|| format!("Request failed with status {status}"), ToOwned::to_owned);
        return Err(ApiError::Status { status, message, details });
    }

    Ok(data.filter(|v| !v.is_null()))
}

pub(crate) fn decode<T: DeserializeOwned>(value: Value, expected: &'static str) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|source| {
        tracing::warn!(error = %source, expected, "response does not match schema");
        ApiError::Schema { expected, source }
    })
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
