//! Text, image, button and template messages.
//!
//! Optional arguments that are `None` or empty are left out of the payload.

use serde_json::Value;

use crate::error::Result;
use crate::request::{Payload, Request, non_empty};
use crate::types::{Action, MessageType};

use super::Client;

impl Client {
    /// Send `message` to `number`.
    ///
    /// With a `file_url` the message is sent as `image`, otherwise as `text`.
    /// `file_name` is only sent together with a `file_url`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn send_message(
        &self,
        number: &str,
        message: &str,
        file_url: Option<&str>,
        file_name: Option<&str>,
    ) -> Result<Value> {
        let file_url = non_empty(file_url);
        let payload = Payload::new()
            .with("number", number)
            .with("message", message)
            .with("type", MessageType::for_file(file_url).as_str())
            .with_opt("fileUrl", file_url)
            .with_opt("fileName", file_url.and(file_name));
        self.execute(&Request::post(Action::SendMessage).payload(payload))
    }

    /// Send an interactive message with `buttons`.
    ///
    /// Each button is sent as-is; nested objects are form-encoded with
    /// bracket notation (`buttons[0][text]`).
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn send_button_message(
        &self,
        number: &str,
        buttons: &[Value],
        message: Option<&str>,
        file_url: Option<&str>,
    ) -> Result<Value> {
        let payload = Payload::new()
            .with("number", number)
            .with("buttons", buttons.to_vec())
            .with_opt("message", message)
            .with_opt("fileUrl", file_url);
        self.execute(&Request::post(Action::SendButtonMessage).payload(payload))
    }

    /// Send a template message.
    ///
    /// Templates share the `send-button-message` action with button messages.
    ///
    /// # Errors
    ///
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) without a
    /// selected device, [`Error::Api`](crate::Error::Api) on failure.
    pub fn send_template_message(
        &self,
        number: &str,
        templates: &[Value],
        message: &str,
        file_url: Option<&str>,
    ) -> Result<Value> {
        let payload = Payload::new()
            .with("number", number)
            .with("message", message)
            .with("templates", templates.to_vec())
            .with_opt("fileUrl", file_url);
        self.execute(&Request::post(Action::SendButtonMessage).payload(payload))
    }
}
