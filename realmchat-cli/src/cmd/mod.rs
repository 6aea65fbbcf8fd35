//! CLI argument definitions and subcommand routing.

pub mod config;
pub mod lookup;
pub mod message;

use clap::{Args, Parser, Subcommand};

/// Command-line client for the Realm Chat messaging API.
///
/// Settings are resolved from flags and environment first, then from the
/// selected profile (see `realmchat config`).
#[derive(Parser)]
#[command(name = "realmchat", version, about)]
pub struct Cli {
    /// Profile to read settings from.
    #[arg(short, long, global = true, default_value = "default")]
    pub profile: String,

    /// API key (overrides the profile).
    #[arg(long, env = "REALMCHAT_API_KEY", global = true, hide_env_values = true)]
    pub key: Option<String>,

    /// Device identifier (overrides the profile).
    #[arg(short, long, env = "REALMCHAT_DEVICE", global = true)]
    pub device: Option<String>,

    /// API base URL (overrides the profile).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Verify TLS certificates.
    #[arg(long, global = true)]
    pub verify_tls: bool,

    /// Log filter, e.g. `debug` or `realmchat=trace`.
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// One-shot operations.
#[derive(Subcommand)]
pub enum Command {
    /// Manage devices.
    #[command(subcommand)]
    Device(DeviceCommand),
    /// Send a text or image message.
    Send(SendArgs),
    /// Send a message with buttons.
    Buttons(ButtonsArgs),
    /// Send a template message.
    Template(TemplateArgs),
    /// List recent chats.
    Chats,
    /// List contacts.
    Contacts,
    /// Check whether a number can receive messages.
    Check {
        /// Phone number with country code.
        number: String,
    },
    /// Show or change profile settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Device subcommands.
#[derive(Subcommand)]
pub enum DeviceCommand {
    /// Register a new device.
    Add {
        /// Display name of the device.
        name: String,
    },
}

/// Arguments for the `send` subcommand.
#[derive(Args)]
pub struct SendArgs {
    /// Recipient phone number.
    pub number: String,
    /// Message text.
    pub message: String,
    /// URL of an image to attach.
    #[arg(long)]
    pub file_url: Option<String>,
    /// File name shown for the attachment.
    #[arg(long, requires = "file_url")]
    pub file_name: Option<String>,
}

/// Arguments for the `buttons` subcommand.
#[derive(Args)]
pub struct ButtonsArgs {
    /// Recipient phone number.
    pub number: String,
    /// Buttons as a JSON array, e.g. `[{"id":"1","text":"Yes"}]`.
    #[arg(long)]
    pub buttons: String,
    /// Message text.
    #[arg(long)]
    pub message: Option<String>,
    /// URL of an image to attach.
    #[arg(long)]
    pub file_url: Option<String>,
}

/// Arguments for the `template` subcommand.
#[derive(Args)]
pub struct TemplateArgs {
    /// Recipient phone number.
    pub number: String,
    /// Message text.
    pub message: String,
    /// Templates as a JSON array.
    #[arg(long)]
    pub templates: String,
    /// URL of an image to attach.
    #[arg(long)]
    pub file_url: Option<String>,
}

/// Profile configuration subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective profile settings.
    Show,
    /// Store the API key.
    SetKey {
        /// API key.
        key: String,
    },
    /// Store the default device identifier.
    SetDevice {
        /// Device identifier.
        id: String,
    },
    /// Store a custom API base URL.
    SetBaseUrl {
        /// Base URL.
        url: String,
    },
    /// Store the request timeout.
    SetTimeout {
        /// Timeout in seconds.
        secs: u64,
    },
}
