// v6 API HTTP client
//
// Wraps `reqwest::Client` with bearer-token auth, `.json` path suffixing,
// account-group scoping and status checking. Resource accessors live in
// `endpoints/` as inherent methods so this module stays focused on
// transport mechanics.

use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Default v6 API endpoint.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.thousandeyes.com/v6";

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

// ── Configuration ────────────────────────────────────────────────────

/// Everything needed to build a `Client`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_endpoint: Url,
    pub auth_token: SecretString,
    /// Scopes every request to this account group (`aid` query parameter).
    pub account_group_id: Option<String>,
    pub transport: TransportConfig,
}

/// Status and fully buffered body of one response.
///
/// The body is immutable, so it can be parsed as many times as needed.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    /// Fail with `UnexpectedStatus` unless the status is exactly `expected`.
    pub fn expect_status(&self, expected: StatusCode, action: &'static str) -> Result<(), Error> {
        if self.status == expected {
            Ok(())
        } else {
            Err(Error::UnexpectedStatus {
                action,
                status: self.status.as_u16(),
            })
        }
    }
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the v6 REST API.
///
/// Each method performs a single request and awaits it; the client holds
/// no per-call state and may be shared freely.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    account_group_id: Option<String>,
}

impl Client {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a `ClientConfig`, injecting `Authorization: Bearer`.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(&format!(
            "Bearer {}",
            config.auth_token.expose_secret()
        ))
        .map_err(|e| Error::Authentication {
            message: format!("invalid auth token header value: {e}"),
        })?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);

        let http = config.transport.build_client_with_headers(headers)?;
        let mut client = Self::from_reqwest(config.api_endpoint.as_str(), http)?;
        client.account_group_id.clone_from(&config.account_group_id);
        Ok(client)
    }

    /// Wrap an existing `reqwest::Client` (caller manages auth headers).
    pub fn from_reqwest(api_endpoint: &str, http: reqwest::Client) -> Result<Self, Error> {
        // Validate once; paths are appended textually afterwards.
        let url = Url::parse(api_endpoint)?;
        Ok(Self {
            http,
            base_url: url.as_str().trim_end_matches('/').to_owned(),
            account_group_id: None,
        })
    }

    /// Scope subsequent requests to an account group.
    pub fn with_account_group(mut self, aid: impl Into<String>) -> Self {
        self.account_group_id = Some(aid.into());
        self
    }

    /// The API endpoint requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// `{base}{path}.json`, e.g. `/agents/5` → `https://…/v6/agents/5.json`.
    fn url(&self, path: &str) -> Result<Url, Error> {
        let mut url = Url::parse(&format!("{}{path}.json", self.base_url))?;
        if let Some(ref aid) = self.account_group_id {
            url.query_pairs_mut().append_pair("aid", aid);
        }
        Ok(url)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    /// Send a GET request; non-2xx statuses become `Error::HttpStatus`.
    pub async fn get(&self, path: &str) -> Result<RawResponse, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        Self::execute(self.http.get(url)).await
    }

    /// Send a POST request with an optional pre-encoded JSON body.
    pub async fn post(&self, path: &str, body: Option<Vec<u8>>) -> Result<RawResponse, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let mut builder = self.http.post(url);
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }
        Self::execute(builder).await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn execute(builder: reqwest::RequestBuilder) -> Result<RawResponse, Error> {
        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        if status.is_success() {
            Ok(RawResponse { status, body })
        } else {
            Err(status_error(status, &body))
        }
    }
}

/// Build an `HttpStatus` error, preferring the server's `errorMessage`.
fn status_error(status: StatusCode, body: &[u8]) -> Error {
    let (message, cause) = if body.is_empty() {
        (None, None)
    } else {
        match serde_json::from_slice::<ErrorResponse>(body) {
            Ok(parsed) => (parsed.error_message.filter(|m| !m.is_empty()), None),
            Err(e) => (None, Some(e.to_string())),
        }
    };

    Error::HttpStatus {
        status: status.as_u16(),
        message,
        cause,
    }
}
