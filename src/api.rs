use crate::config::Config;
use crate::forms::{BookingSubmission, ContactSubmission};
use crate::i18n::Language;
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Default number of news items requested
pub const DEFAULT_NEWS_LIMIT: u32 = 4;

/// Default number of reviews requested
pub const DEFAULT_REVIEWS_LIMIT: u32 = 6;

/// Failure of a backend call.
///
/// Malformed JSON is not an error; it is treated as an empty payload.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (connect, timeout, body read)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The request body could not be encoded as JSON
    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backend answered with a non-success status
    #[error("{}", status_error_message(.status, .message))]
    Status {
        status: u16,
        /// The `message` field of the response body, if any
        message: Option<String>,
    },
}

impl ApiError {
    /// Message supplied by the backend, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            ApiError::Transport(_) | ApiError::Encode(_) => None,
        }
    }
}

fn status_error_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Request failed: {}", status),
    }
}

/// Options for a single backend request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Serialized as the JSON request body
    pub body: Option<Value>,
    /// Merged over the default `Content-Type: application/json`
    pub headers: HeaderMap,
    pub query: Vec<(&'static str, String)>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

/// The human-readable `message` of a success payload, if present.
pub fn response_message(payload: Option<&Value>) -> Option<String> {
    payload
        .and_then(|p| p.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Parse a response body; empty or malformed bodies yield `None`.
fn parse_payload(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(|value| !value.is_null())
}

/// HTTP/JSON client for the backend API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // A redirect is reported as a failed status, never followed
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request to `base_url + path`.
    ///
    /// Returns the parsed payload, or `None` when the body was empty or not
    /// valid JSON. A non-success status fails with the payload's `message`
    /// or `"Request failed: <status>"`.
    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers);

        debug!("{} {}", options.method, url);

        let mut builder = self.http.request(options.method, &url).headers(headers);
        if !options.query.is_empty() {
            builder = builder.query(&options.query);
        }
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| {
            warn!("Request to {} failed: {}", path, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;
        let payload = parse_payload(&text);

        if !status.is_success() {
            let message = response_message(payload.as_ref());
            warn!("Backend returned {} for {}", status, path);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(payload)
    }

    /// `GET /api/news?lang=<code>&limit=<n>`; `limit` defaults to 4.
    pub async fn news(
        &self,
        lang: Language,
        limit: Option<u32>,
    ) -> Result<Option<Value>, ApiError> {
        let options = RequestOptions::get()
            .with_query("lang", lang)
            .with_query("limit", limit.unwrap_or(DEFAULT_NEWS_LIMIT));
        self.request("/api/news", options).await
    }

    /// `POST /api/contact`
    pub async fn contact(&self, payload: &ContactSubmission) -> Result<Option<Value>, ApiError> {
        let body = serde_json::to_value(payload)?;
        self.request("/api/contact", RequestOptions::post(body))
            .await
    }

    /// `POST /api/booking`
    pub async fn booking(&self, payload: &BookingSubmission) -> Result<Option<Value>, ApiError> {
        let body = serde_json::to_value(payload)?;
        self.request("/api/booking", RequestOptions::post(body))
            .await
    }

    /// `GET /api/horses`
    pub async fn horses(&self) -> Result<Option<Value>, ApiError> {
        self.request("/api/horses", RequestOptions::get()).await
    }

    /// `GET /api/reviews?lang=<code>&limit=<n>`; `limit` defaults to 6.
    pub async fn reviews(
        &self,
        lang: Language,
        limit: Option<u32>,
    ) -> Result<Option<Value>, ApiError> {
        let options = RequestOptions::get()
            .with_query("lang", lang)
            .with_query("limit", limit.unwrap_or(DEFAULT_REVIEWS_LIMIT));
        self.request("/api/reviews", options).await
    }
}
