//! Message sending commands: send, buttons, template.

use realmchat::Client;
use serde_json::Value;

use super::{ButtonsArgs, SendArgs, TemplateArgs};
use crate::error::{CliError, Result};

/// Send a text or image message.
pub fn send(client: &Client, args: &SendArgs) -> Result<Value> {
    Ok(client.send_message(
        &args.number,
        &args.message,
        args.file_url.as_deref(),
        args.file_name.as_deref(),
    )?)
}

/// Send a button message.
pub fn buttons(client: &Client, args: &ButtonsArgs) -> Result<Value> {
    let buttons = parse_array("buttons", &args.buttons)?;
    Ok(client.send_button_message(
        &args.number,
        &buttons,
        args.message.as_deref(),
        args.file_url.as_deref(),
    )?)
}

/// Send a template message.
pub fn template(client: &Client, args: &TemplateArgs) -> Result<Value> {
    let templates = parse_array("templates", &args.templates)?;
    Ok(client.send_template_message(
        &args.number,
        &templates,
        &args.message,
        args.file_url.as_deref(),
    )?)
}

/// Parse a non-empty JSON array argument.
pub fn parse_array(arg: &'static str, raw: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| CliError::Json {
        arg,
        reason: e.to_string(),
    })?;
    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        Value::Array(_) => Err(CliError::Json {
            arg,
            reason: "array must not be empty".into(),
        }),
        _ => Err(CliError::Json {
            arg,
            reason: "expected a JSON array".into(),
        }),
    }
}
