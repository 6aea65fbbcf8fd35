//! Per-call request descriptors.
//!
//! Every operation builds a fresh [`Request`] and hands it to the dispatcher,
//! so no request state outlives the call that created it.

use serde_json::Value;

use crate::form;
use crate::types::{Action, Method};

/// Field names owned by the request envelope.
pub const RESERVED_KEYS: [&str; 3] = ["key", "action", "device"];

/// Ordered operation payload.
///
/// Insertion order is preserved on the wire. The first insertion of a key
/// wins; [`RESERVED_KEYS`] are rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    fields: Vec<(String, Value)>,
}

impl Payload {
    /// Create an empty payload.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Insert `key`. Returns `false` if the key is reserved or already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> bool {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            tracing::warn!(key = %key, "payload field uses a reserved name; ignored");
            return false;
        }
        if self.contains(&key) {
            return false;
        }
        self.fields.push((key, value.into()));
        true
    }

    /// Chaining form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert `key` only when `value` is present and non-empty.
    #[must_use]
    pub fn with_opt(self, key: &str, value: Option<&str>) -> Self {
        match non_empty(value) {
            Some(v) => self.with(key, v),
            None => self,
        }
    }

    /// Whether `key` has been inserted.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.iter().any(|(k, _)| k == key)
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the payload has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Immutable description of one API call.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    route: Option<&'static str>,
    action: Option<Action>,
    payload: Payload,
    requires_device: bool,
}

impl Request {
    /// A POST for `action` that needs a selected device.
    #[must_use]
    pub const fn post(action: Action) -> Self {
        Self::new(Method::Post, action)
    }

    /// A GET for `action` that needs a selected device. Fields travel as
    /// query parameters.
    #[must_use]
    pub const fn get(action: Action) -> Self {
        Self::new(Method::Get, action)
    }

    const fn new(method: Method, action: Action) -> Self {
        Self {
            method,
            route: None,
            action: Some(action),
            payload: Payload::new(),
            requires_device: true,
        }
    }

    /// Target `route` below the base URL.
    #[must_use]
    pub fn route(mut self, route: &'static str) -> Self {
        self.route = Some(route);
        self
    }

    /// Allow the request without a selected device.
    #[must_use]
    pub fn without_device(mut self) -> Self {
        self.requires_device = false;
        self
    }

    /// Replace the operation payload.
    #[must_use]
    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Action tag, if any.
    #[must_use]
    pub const fn action(&self) -> Option<Action> {
        self.action
    }

    /// Operation payload.
    #[must_use]
    pub const fn fields(&self) -> &Payload {
        &self.payload
    }

    /// Whether dispatch must fail without a selected device.
    #[must_use]
    pub const fn requires_device(&self) -> bool {
        self.requires_device
    }

    /// Target URL: `base` followed by the route suffix, if any.
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        match self.route {
            Some(route) => format!("{base}{route}"),
            None => base.to_owned(),
        }
    }

    /// Wire form: operation fields, then `key`, `action` and `device`.
    #[must_use]
    pub fn form(&self, api_key: &str, device: Option<&str>) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.payload.len() + RESERVED_KEYS.len());
        for (k, v) in self.payload.iter() {
            form::flatten_into(k, v, &mut out);
        }
        out.push(("key".into(), api_key.to_owned()));
        if let Some(action) = self.action {
            out.push(("action".into(), action.as_str().to_owned()));
        }
        if let Some(device) = non_empty(device) {
            out.push(("device".into(), device.to_owned()));
        }
        out
    }
}

/// `None` for absent or empty strings.
pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
