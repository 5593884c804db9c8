//! Client layer: builds request URLs, drives the HTTP transport and maps
//! transport failures onto [`UnisenderError`].

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{ApiKey, ApiResponse, ValidationError};
use crate::transport::{Params, TransportError};

mod fields;
mod lists;
mod messages;
mod partners;
mod stats;
mod task;
mod templates;

pub use task::{DEFAULT_POLL_INTERVAL, PollConfig, TaskEndpoints};

/// Production endpoint; operation names are appended to it.
pub const DEFAULT_BASE_URL: &str = "https://api.unisender.com/ru/api/";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Decoder<T> = fn(&str) -> Result<ApiResponse<T>, TransportError>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post<'a>(
        &'a self,
        url: Url,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.post(url).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`UnisenderClient`].
///
/// Every variant raised by a remote call carries the operation name, so a
/// failure can be traced back to the call that produced it.
pub enum UnisenderError {
    /// HTTP client failure (DNS, TLS, timeouts, connection resets).
    #[error("{operation}: transport error: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// Non-2xx HTTP status. The body is kept when it is not blank.
    #[error("{operation}: unexpected HTTP status {status}")]
    HttpStatus {
        operation: &'static str,
        status: u16,
        body: Option<String>,
    },

    /// Unisender answered with an `error` member.
    #[error("{operation}: API error {code:?}: {message}")]
    Api {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    /// The body is not the expected envelope or payload.
    #[error("{operation}: parse error: {source}")]
    Parse {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// The configured base URL cannot be combined with an operation name.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An asynchronous task was not accepted with status `new`.
    #[error("{operation}: task submission rejected with status {status:?}")]
    SubmissionRejected {
        operation: &'static str,
        status: String,
    },

    /// A polled task reported a status other than `processing`/`completed`.
    #[error("{operation}: task {task_uuid} failed with status {status:?}")]
    PollingFailed {
        operation: &'static str,
        task_uuid: String,
        status: String,
    },

    /// A [`PollConfig`] guard stopped polling before the task finished.
    #[error("{operation}: task {task_uuid} unfinished after {attempts} polls")]
    PollTimeout {
        operation: &'static str,
        task_uuid: String,
        attempts: u32,
    },

    /// The cancellation token fired. `task_uuid` is `None` when the task was
    /// never accepted.
    #[error("{operation}: cancelled")]
    Cancelled {
        operation: &'static str,
        task_uuid: Option<String>,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Clone)]
/// Builder for [`UnisenderClient`].
pub struct UnisenderClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    poll: PollConfig,
}

impl UnisenderClientBuilder {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            poll: PollConfig::default(),
        }
    }

    /// Override the API root, e.g. `https://api.unisender.com/en/api/`.
    ///
    /// A trailing `/` is added when missing so operation names append cleanly.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        self.base_url = base_url;
        self
    }

    /// Set an HTTP client timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Interval and guards for asynchronous export tasks.
    pub fn poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn build(self) -> Result<UnisenderClient, UnisenderError> {
        Url::parse(&self.base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(|err| UnisenderError::Transport {
            operation: "build",
            source: Box::new(err),
        })?;

        Ok(UnisenderClient {
            api_key: self.api_key,
            base_url: self.base_url,
            poll: self.poll,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Unisender client.
///
/// Every method issues exactly one POST to `<base_url><operation>` with the
/// API key, `format=json` and the operation's parameters in the query string.
/// Nothing is cached and nothing is retried. The export helpers are the only
/// methods that issue more than one request, see [`UnisenderClient::run_export_task`].
pub struct UnisenderClient {
    api_key: ApiKey,
    base_url: String,
    poll: PollConfig,
    http: Arc<dyn HttpTransport>,
}

impl UnisenderClient {
    /// Create a client for the production endpoint with default polling.
    ///
    /// For more customization, use [`UnisenderClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            poll: PollConfig::default(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Create a client with the key taken from `UNISENDER_API_KEY`.
    pub fn from_env() -> Result<Self, UnisenderError> {
        Ok(Self::new(ApiKey::from_env()?))
    }

    pub fn builder(api_key: ApiKey) -> UnisenderClientBuilder {
        UnisenderClientBuilder::new(api_key)
    }

    pub fn poll_config(&self) -> &PollConfig {
        &self.poll
    }

    fn request_url(&self, operation: &str, params: &Params) -> Result<Url, UnisenderError> {
        let mut url = Url::parse(&self.base_url)?.join(operation)?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair(ApiKey::FIELD, self.api_key.as_str())
            .extend_pairs(params.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        Ok(url)
    }

    async fn send<T>(
        &self,
        operation: &'static str,
        params: Params,
        decode: Decoder<T>,
    ) -> Result<ApiResponse<T>, UnisenderError> {
        let url = self.request_url(operation, &params)?;
        tracing::debug!(operation, params = params.len(), "sending request");

        let response = self
            .http
            .post(url)
            .await
            .map_err(|source| UnisenderError::Transport { operation, source })?;

        if !(200..=299).contains(&response.status) {
            tracing::debug!(operation, status = response.status, "non-success status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(UnisenderError::HttpStatus {
                operation,
                status: response.status,
                body,
            });
        }

        let parsed = decode(&response.body).map_err(|err| match err {
            TransportError::Api { code, message } => UnisenderError::Api {
                operation,
                code,
                message,
            },
            source => UnisenderError::Parse { operation, source },
        })?;

        if !parsed.warnings.is_empty() {
            tracing::warn!(
                operation,
                warnings = parsed.warnings.len(),
                "response carries warnings"
            );
        }

        Ok(parsed)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{FakeTransport, assert_param, make_client};
    use super::*;
    use crate::transport::decode_value_response;

    #[tokio::test]
    async fn send_composes_url_and_query_in_order() {
        let transport = FakeTransport::new().respond(200, r#"{ "result": [] }"#);
        let client = make_client(transport.clone());

        let params = vec![
            ("title".to_owned(), "News & Offers".to_owned()),
            ("field_names[0]".to_owned(), "email".to_owned()),
        ];
        client
            .send("createList", params, decode_value_response)
            .await
            .unwrap();

        let urls = transport.urls();
        assert_eq!(urls.len(), 1);
        let url = &urls[0];
        assert_eq!(url.path(), "/api/createList");
        assert_eq!(
            url.query(),
            Some("format=json&api_key=test_key&title=News+%26+Offers&field_names%5B0%5D=email")
        );

        let query = transport.last_query();
        assert_eq!(query[0], ("format".to_owned(), "json".to_owned()));
        assert_eq!(query[1], ("api_key".to_owned(), "test_key".to_owned()));
        assert_param(&query, "title", "News & Offers");
    }

    #[tokio::test]
    async fn send_percent_encodes_reserved_characters() {
        let transport = FakeTransport::new().respond(200, r#"{ "result": {} }"#);
        let client = make_client(transport.clone());

        let params = vec![("search".to_owned(), "a=b&c".to_owned())];
        client
            .send("getContactCount", params, decode_value_response)
            .await
            .unwrap();

        let query = transport.last_query();
        assert_eq!(query.len(), 3);
        assert_param(&query, "search", "a=b&c");
    }

    #[tokio::test]
    async fn send_appends_nested_operation_names() {
        let transport = FakeTransport::new().respond(200, r#"{ "result": {} }"#);
        let client = make_client(transport.clone());

        client
            .send("async/getTaskResult", Params::new(), decode_value_response)
            .await
            .unwrap();
        assert_eq!(transport.operations(), vec!["async/getTaskResult"]);
    }

    #[tokio::test]
    async fn send_maps_non_success_http_status() {
        let transport = FakeTransport::new().respond(502, "bad gateway");
        let client = make_client(transport);

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        match err {
            UnisenderError::HttpStatus {
                operation,
                status,
                body,
            } => {
                assert_eq!(operation, "getLists");
                assert_eq!(status, 502);
                assert_eq!(body.as_deref(), Some("bad gateway"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_maps_blank_http_body_to_none() {
        let transport = FakeTransport::new().respond(503, "  ");
        let client = make_client(transport);

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::HttpStatus {
                status: 503,
                body: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn send_maps_error_envelope_to_api_error() {
        let json = r#"{ "error": "API key is invalid", "code": "invalid_api_key" }"#;
        let transport = FakeTransport::new().respond(200, json);
        let client = make_client(transport);

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        match err {
            UnisenderError::Api {
                operation,
                code,
                message,
            } => {
                assert_eq!(operation, "getLists");
                assert_eq!(code.as_deref(), Some("invalid_api_key"));
                assert_eq!(message, "API key is invalid");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn send_maps_missing_result_and_bad_json_to_parse_error() {
        let transport = FakeTransport::new()
            .respond(200, r#"{ "warnings": [] }"#)
            .respond(200, "{ not json }");
        let client = make_client(transport);

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::Parse {
                source: TransportError::MissingResult,
                ..
            }
        ));

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::Parse {
                source: TransportError::Json(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn send_maps_transport_failure() {
        let client = make_client(FakeTransport::new());

        let err = client
            .send("getLists", Params::new(), decode_value_response)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            UnisenderError::Transport {
                operation: "getLists",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn send_keeps_warnings() {
        let json = r#"{ "result": { "id": 1 }, "warnings": [ { "warning": "slow down" } ] }"#;
        let client = make_client(FakeTransport::new().respond(200, json));

        let response = client
            .send("createList", Params::new(), decode_value_response)
            .await
            .unwrap();
        assert_eq!(response.warnings.len(), 1);
        assert_eq!(response.result["id"], 1);
    }

    #[test]
    fn builder_normalizes_base_url_and_validates_it() {
        let key = ApiKey::new("key").unwrap();
        let client = UnisenderClient::builder(key.clone())
            .base_url("https://api.unisender.com/en/api")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://api.unisender.com/en/api/");

        let err = UnisenderClient::builder(key)
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, UnisenderError::InvalidUrl(_)));
    }

    #[test]
    fn builder_keeps_poll_config() {
        let poll = PollConfig {
            interval: Duration::from_secs(2),
            max_attempts: Some(5),
            max_wait: None,
        };
        let client = UnisenderClient::builder(ApiKey::new("key").unwrap())
            .poll_config(poll)
            .build()
            .unwrap();
        assert_eq!(client.poll_config(), &poll);
        assert_eq!(
            UnisenderClient::new(ApiKey::new("key").unwrap())
                .poll_config()
                .interval,
            DEFAULT_POLL_INTERVAL
        );
    }
}
