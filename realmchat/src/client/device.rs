//! Device registration and selection.

use serde_json::Value;

use crate::error::Result;
use crate::request::{Payload, Request};
use crate::types::{Action, DEVICE_ROUTE};

use super::Client;

impl Client {
    /// Register a new device called `name`.
    ///
    /// Does not need a selected device. The request goes to the `/device`
    /// route instead of the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`](crate::Error::Api) if the call fails or is
    /// rejected.
    pub fn register_device(&self, name: &str) -> Result<Value> {
        let request = Request::post(Action::AddDevice)
            .route(DEVICE_ROUTE)
            .without_device()
            .payload(Payload::new().with("name", name));
        self.execute(&request)
    }

    /// Select the device used by subsequent calls.
    pub fn set_device_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.device_id = Some(id.into());
        self
    }

    /// Value-returning form of [`set_device_id`](Self::set_device_id).
    #[must_use]
    pub fn with_device_id(mut self, id: impl Into<String>) -> Self {
        self.set_device_id(id);
        self
    }

    /// Currently selected device, if any.
    #[must_use]
    pub fn device_id(&self) -> Option<&str> {
        self.device_id.as_deref()
    }
}
