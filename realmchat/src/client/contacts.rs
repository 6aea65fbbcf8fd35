//! Chat and contact lookups for the selected device.

use serde_json::Value;

use crate::error::Result;
use crate::request::{Payload, Request};
use crate::types::Action;

use super::Client;

impl Client {
    /// Most recent chats of the selected device.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn recent_chats(&self) -> Result<Value> {
        self.execute(&Request::post(Action::RecentChats))
    }

    /// Contacts known to the selected device.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn contacts(&self) -> Result<Value> {
        self.execute(&Request::post(Action::GetContacts))
    }

    /// Check whether `number` can be messaged.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn check_number(&self, number: &str) -> Result<Value> {
        let request =
            Request::post(Action::CheckNumber).payload(Payload::new().with("number", number));
        self.execute(&request)
    }
}
