//! HTTP transport seam.
//!
//! [`Transport`] is the single point where a request leaves the process.
//! [`HttpTransport`] is the default, blocking implementation on top of a
//! [`ureq::Agent`].

use std::fmt;
use std::time::Duration;

use serde_json::Value;
use ureq::Agent;
use ureq::tls::TlsConfig;

use crate::error::{Error, Result};
use crate::types::Method;

/// Sends a form-encoded request and returns the parsed JSON body.
///
/// Implementations map connection failures and non-2xx statuses to
/// [`Error::Api`]. A body that is not JSON is also an [`Error::Api`].
pub trait Transport: Send + Sync + fmt::Debug {
    /// Send `form` to `url` with `method`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] on any transport or decoding failure.
    fn send(&self, method: Method, url: &str, form: &[(String, String)]) -> Result<Value>;
}

/// Options for [`HttpTransport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpOptions {
    /// Global per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Skip TLS certificate verification.
    ///
    /// On by default for parity with the API's reference client. Do not
    /// leave it on in production.
    pub accept_invalid_certs: bool,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            accept_invalid_certs: true,
        }
    }
}

/// Blocking `ureq` transport.
pub struct HttpTransport {
    agent: Agent,
    options: HttpOptions,
}

impl HttpTransport {
    /// Build an agent honoring `options`.
    #[must_use]
    pub fn new(options: HttpOptions) -> Self {
        let tls = TlsConfig::builder()
            .disable_verification(options.accept_invalid_certs)
            .build();
        let agent: Agent = Agent::config_builder()
            .timeout_global(options.timeout)
            .tls_config(tls)
            .build()
            .into();
        Self { agent, options }
    }

    /// Options the agent was built with.
    #[must_use]
    pub const fn options(&self) -> HttpOptions {
        self.options
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(HttpOptions::default())
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    fn send(&self, method: Method, url: &str, form: &[(String, String)]) -> Result<Value> {
        let pairs = form.iter().map(|(k, v)| (k.as_str(), v.as_str()));
        let mut response = match method {
            Method::Post => self
                .agent
                .post(url)
                .header("Accept", "application/json")
                .send_form(pairs)?,
            Method::Get => self
                .agent
                .get(url)
                .header("Accept", "application/json")
                .query_pairs(pairs)
                .call()?,
        };
        let body = response.body_mut().read_to_string()?;
        parse_body(&body)
    }
}

/// Decode a response body as JSON.
pub(crate) fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| Error::Api(format!("invalid JSON response: {e}")))
}
