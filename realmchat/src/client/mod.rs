//! Realm Chat client, the primary entry point for the SDK.

mod contacts;
mod device;
mod messages;

use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::request::{Request, non_empty};
use crate::response;
use crate::transport::{HttpOptions, HttpTransport, Transport};
use crate::types::{Action, BASE_URL};

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

/// Initialize a `tracing` subscriber writing to stderr. Call at most once.
///
/// `level` is an `EnvFilter` directive such as `"debug"` or
/// `"realmchat=trace"`. `None` means `"info"`. Later calls are no-ops.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if another global subscriber is
/// already installed.
pub fn init_logger(level: Option<&str>) -> Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    let mut result = Ok(());
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::builder().parse_lossy(level.unwrap_or("info"));
        result = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .try_init()
            .map_err(|e| Error::InvalidArgument(format!("logger: {e}")));
    });
    result
}

/// A Realm Chat API client.
///
/// Each operation builds its own [`Request`], so a `Client` can be shared
/// between threads. Only the selected device identifier is kept between
/// calls, and changing it needs `&mut self`.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    base_url: String,
    device_id: Option<String>,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client for `api_key` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `api_key` is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Create a new [`ClientBuilder`].
    #[must_use]
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a prepared request.
    ///
    /// The operation methods are thin wrappers around this.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingParameter`] if the request needs a device and none
    ///   (or an empty one) is selected. Nothing is sent in that case.
    /// - [`Error::Api`] if the call fails or the API reports `result: false`.
    pub fn execute(&self, request: &Request) -> Result<Value> {
        let device = non_empty(self.device_id.as_deref());
        if request.requires_device() && device.is_none() {
            return Err(Error::missing_device());
        }

        let url = request.url(&self.base_url);
        let form = request.form(&self.api_key, device);
        let action = request.action().map_or("", Action::as_str);
        tracing::debug!(
            method = %request.method(),
            %url,
            action,
            fields = form.len(),
            "dispatching request"
        );

        let body = self
            .transport
            .send(request.method(), &url, &form)
            .inspect_err(|e| tracing::warn!(action, error = %e, "request failed"))?;
        response::normalize(body)
            .inspect_err(|e| tracing::warn!(action, error = %e, "API rejected request"))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("device_id", &self.device_id)
            .field("transport", &self.transport)
            .finish()
    }
}

/// Builder for constructing a [`Client`].
pub struct ClientBuilder {
    api_key: String,
    base_url: Option<String>,
    device_id: Option<String>,
    http: HttpOptions,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            device_id: None,
            http: HttpOptions::default(),
            transport: None,
        }
    }

    /// Override the API base URL (default: [`BASE_URL`]).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Select the device used by messaging and contact operations.
    #[must_use]
    pub fn device_id(mut self, id: impl Into<String>) -> Self {
        self.device_id = Some(id.into());
        self
    }

    /// Fail requests that take longer than `timeout`.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Whether to accept invalid TLS certificates (default: `true`).
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.http.accept_invalid_certs = accept;
        self
    }

    /// Use a custom [`Transport`] instead of [`HttpTransport`].
    ///
    /// Timeout and TLS settings only apply to the default transport.
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        let transport: Arc<dyn Transport> = Arc::new(transport);
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the API key is empty or the base
    /// URL is not an absolute `http`/`https` URL.
    pub fn build(self) -> Result<Client> {
        if self.api_key.trim().is_empty() {
            return Err(Error::InvalidArgument("API key must not be empty".into()));
        }
        let base_url = match self.base_url {
            Some(u) => parse_base_url(&u)?,
            None => BASE_URL.to_owned(),
        };
        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(self.http)),
        };
        Ok(Client {
            api_key: self.api_key,
            base_url,
            device_id: self.device_id,
            transport,
        })
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("device_id", &self.device_id)
            .field("http", &self.http)
            .field("transport", &self.transport)
            .finish()
    }
}

fn parse_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::InvalidArgument(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidArgument(format!(
            "base URL must use http or https, got {}",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}
