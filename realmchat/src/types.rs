//! SDK types: remote actions, HTTP methods and message kinds.

use std::fmt;

/// Fixed base URL of the Realm Chat API.
pub const BASE_URL: &str = "https://client.realm.chat/api/v1";

/// Route suffix used for device registration.
pub(crate) const DEVICE_ROUTE: &str = "/device";

/// HTTP method of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    /// Form fields are sent as query parameters.
    Get,
    /// Form fields are sent as an `application/x-www-form-urlencoded` body.
    #[default]
    Post,
}

impl Method {
    /// Upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote operation targeted by a request, sent as the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Register a new device.
    AddDevice,
    /// Plain text or image message.
    SendMessage,
    /// Button and template messages share this action.
    SendButtonMessage,
    /// Most recent chats of the device.
    RecentChats,
    /// Contact list of the device.
    GetContacts,
    /// Whether a phone number is reachable.
    CheckNumber,
}

impl Action {
    /// Wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddDevice => "add-device",
            Self::SendMessage => "send-message",
            Self::SendButtonMessage => "send-button-message",
            Self::RecentChats => "recent-chats",
            Self::GetContacts => "get-contacts",
            Self::CheckNumber => "check-number",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a `send-message` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    /// Text only.
    #[default]
    Text,
    /// Message carrying a file URL.
    Image,
}

impl MessageType {
    /// Wire name of the message type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// `Image` when a file URL accompanies the message, `Text` otherwise.
    #[must_use]
    pub const fn for_file(file_url: Option<&str>) -> Self {
        if file_url.is_some() {
            Self::Image
        } else {
            Self::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wire_names() {
        assert_eq!(Action::AddDevice.as_str(), "add-device");
        assert_eq!(Action::SendButtonMessage.to_string(), "send-button-message");
        assert_eq!(Action::GetContacts.as_str(), "get-contacts");
    }

    #[test]
    fn message_type_follows_file_url() {
        assert_eq!(MessageType::for_file(None), MessageType::Text);
        assert_eq!(
            MessageType::for_file(Some("https://x/y.png")),
            MessageType::Image
        );
    }
}
