//! Device registration and read-only lookups.

use realmchat::Client;
use serde_json::Value;

use super::DeviceCommand;
use crate::error::Result;

/// Run a `device` subcommand.
pub fn device(client: &Client, command: &DeviceCommand) -> Result<Value> {
    match command {
        DeviceCommand::Add { name } => Ok(client.register_device(name)?),
    }
}

/// Recent chats of the selected device.
pub fn chats(client: &Client) -> Result<Value> {
    Ok(client.recent_chats()?)
}

/// Contacts of the selected device.
pub fn contacts(client: &Client) -> Result<Value> {
    Ok(client.contacts()?)
}

/// Reachability of `number`.
pub fn check(client: &Client, number: &str) -> Result<Value> {
    Ok(client.check_number(number)?)
}
