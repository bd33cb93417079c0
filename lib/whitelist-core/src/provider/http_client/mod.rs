//! Outbound HTTP port used by the GitHub identity provider.
//!
//! Only reads are needed, so the port carries no request body. Response
//! headers keep every field received, including repeated names.

pub mod reqwest_client;

use std::fmt::Display;
use std::sync::Arc;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &str) -> RequestBuilder;

    async fn fetch(&self, request: Request) -> Result<Response, Error>;
}

/// Header fields in arrival order. Names compare case-insensitively and may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// Replaces every field called `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.0.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.0.push((name.to_owned(), value.into()));
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    /// All values of `name` combined into one field value, as RFC 9110 §5.3 allows.
    pub fn get(&self, name: &str) -> Option<String> {
        let values = self
            .0
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>();

        (!values.is_empty()).then(|| values.join(", "))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy safe for logs: credentials are masked.
    pub fn redacted(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|(key, value)| {
                    if key.eq_ignore_ascii_case("authorization") {
                        (key.to_owned(), "<redacted>".to_string())
                    } else {
                        (key.to_owned(), value.to_owned())
                    }
                })
                .collect(),
        )
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("<None>");
        }
        write!(
            f,
            "{}",
            self.iter().map(|(k, v)| format!("{k}: {v}")).join("\n")
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `GET` request.
#[derive(Clone, Debug)]
pub struct Request {
    pub url: String,
    pub headers: Headers,
}

impl Request {
    fn for_logs(&self) -> Self {
        Self {
            url: self.url.clone(),
            headers: self.headers.redacted(),
        }
    }
}

#[derive(Debug)]
pub struct Response {
    pub body: Vec<u8>,
    pub headers: Headers,
    pub status: StatusCode,

    /// The request that produced this response, with credentials masked.
    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Other HTTP client error: {0}")]
    Other(String),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
}

impl Error {
    fn log_error(self, location: &std::panic::Location, request: &Request) -> Self {
        let debug_message = format!("\nGET {} - {self}", request.url);
        tracing::error!(%debug_message, %location);

        self
    }
}

impl Response {
    #[track_caller]
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_error() {
            let location = std::panic::Location::caller();
            Err(Error::StatusCodeIsError(self.status).log_error(location, &self.request))
        } else {
            Ok(self)
        }
    }

    pub fn header_get(&self, name: &str) -> Option<String> {
        self.headers.get(name)
    }

    /// The `Link` header, with relations from repeated fields merged.
    pub fn link(&self) -> Option<String> {
        self.header_get("link")
    }

    #[track_caller]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let location = std::panic::Location::caller();
        serde_json::from_slice(&self.body)
            .map_err(|error| Error::JsonError(error).log_error(location, &self.request))
    }

    #[track_caller]
    fn log_success(self) -> Self {
        let location = std::panic::Location::caller();
        let debug_message = format!("\nGET {} - HTTP {}", self.request.url, self.status);
        tracing::debug!(%debug_message, %location);
        log_request_headers(location, &self.request);

        let trace_response = format!(
            "\nResponse\nStatus: {}\nHeaders:\n{}\nBody:\n{}\n",
            self.status,
            self.headers,
            String::from_utf8_lossy(&self.body)
        );
        tracing::trace!(%trace_response, %location);

        self
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, url: &str) -> Self {
        Self {
            client,
            request: Request {
                url: url.to_string(),
                headers: Headers::default(),
            },
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request.headers.set(name, value);
        self
    }

    pub fn bearer_auth(mut self, token: &str) -> Self {
        self.request
            .headers
            .set("Authorization", format!("Bearer {token}"));
        self
    }

    pub async fn send(self) -> Result<Response, Error> {
        let location = std::panic::Location::caller();
        let logged = self.request.for_logs();

        self.client
            .fetch(self.request)
            .await
            .map(|response| response.log_success())
            .map_err(|e| {
                let error = e.log_error(location, &logged);
                log_request_headers(location, &logged);
                error
            })
    }
}

fn log_request_headers(location: &std::panic::Location, request: &Request) {
    let trace_request = format!("\nRequest\nHeaders:\n{}\n", request.headers);
    tracing::trace!(%trace_request, %location);
}
