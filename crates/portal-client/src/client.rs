use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use portal_config::ApiConfig;
use portal_core::Envelope;
use reqwest::{Method, Url};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::error::ClientError;

/// Per-call knobs: query string, extra headers, cancellation.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub cancel: Option<CancellationToken>,
}

impl CallOptions {
    /// Options whose call is abandoned once `token` is cancelled.
    #[must_use]
    pub fn cancellable(token: CancellationToken) -> Self {
        Self {
            cancel: Some(token),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }
}

#[derive(Debug, Default)]
struct CallState {
    in_flight: AtomicUsize,
    last_error: Mutex<Option<String>>,
}

impl CallState {
    fn set_error(&self, error: Option<String>) {
        *self
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = error;
    }
}

/// Decrements the in-flight counter however the call ends, including when
/// the call future is dropped mid-flight.
struct InFlight<'a>(&'a CallState);

impl<'a> InFlight<'a> {
    fn enter(state: &'a CallState) -> Self {
        state.in_flight.fetch_add(1, Ordering::SeqCst);
        Self(state)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Envelope API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the busy/error
/// tracking.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    state: Arc<CallState>,
}

impl ApiClient {
    /// Build a client from the `[api]` config section.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the base URL does not parse, or
    /// `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            state: Arc::new(CallState::default()),
        })
    }

    /// Client with default settings pointed at `base_url`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::new`].
    pub fn with_base_url(base_url: &str) -> Result<Self, ClientError> {
        Self::new(&ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether any call made through this client (or its clones) is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Display text of the most recent failed call, cleared when the next
    /// call is dispatched.
    #[must_use]
    pub fn last_error(&self) -> Option<String> {
        self.state
            .last_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear_error(&self) {
        self.state.set_error(None);
    }

    /// Issue one request and decode the response envelope.
    ///
    /// One attempt, no retry. The busy flag is raised before dispatch and
    /// lowered on every exit path. A failure is recorded in
    /// [`Self::last_error`] and then returned; cancellations are not recorded.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Cancelled` if the options' token fires first,
    /// otherwise any transport, HTTP, or decode failure.
    pub async fn call<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: CallOptions,
    ) -> Result<Envelope, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let _in_flight = InFlight::enter(&self.state);
        self.clear_error();

        let result = match options.cancel.clone() {
            Some(token) => {
                tokio::select! {
                    biased;
                    () = token.cancelled() => Err(ClientError::Cancelled),
                    result = self.dispatch(method.clone(), path, body, &options) => result,
                }
            }
            None => self.dispatch(method.clone(), path, body, &options).await,
        };

        match &result {
            Ok(envelope) => {
                tracing::debug!(%method, path, status = %envelope.status, "received envelope");
            }
            Err(ClientError::Cancelled) => {
                tracing::debug!(%method, path, "request cancelled; discarding result");
            }
            Err(error) => {
                tracing::warn!(%method, path, %error, "request failed");
                self.state.set_error(Some(error.to_string()));
            }
        }

        result
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`Self::call`].
    pub async fn post<B>(
        &self,
        path: &str,
        body: &B,
        options: CallOptions,
    ) -> Result<Envelope, ClientError>
    where
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, Some(body), options).await
    }

    async fn dispatch<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        options: &CallOptions,
    ) -> Result<Envelope, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%method, %url, "dispatching request");

        let mut request = self.http.request(method, &url);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        // The backend sends envelopes with 4xx/5xx too; those are application
        // failures, not transport failures.
        match serde_json::from_slice::<Envelope>(&bytes) {
            Ok(envelope) => Ok(envelope),
            Err(error) if status.is_success() => Err(ClientError::Decode(error.to_string())),
            Err(_) => Err(ClientError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ClientError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|_| ClientError::InvalidUrl(raw.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}
