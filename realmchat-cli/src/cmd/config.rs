//! Profile configuration persistence and client construction.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use realmchat::Client;

use super::{Cli, ConfigCommand};
use crate::error::{CliError, Result};

/// Base directory for all profiles.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("realmchat")
}

/// Path of a profile's `profile.conf`.
pub fn profile_path(profile: &str) -> PathBuf {
    config_dir().join(profile).join("profile.conf")
}

/// Persistent per-profile settings stored as `key=value` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileConfig {
    pub api_key: Option<String>,
    pub device: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub verify_tls: bool,
}

impl ProfileConfig {
    /// Load a profile. A missing file yields the defaults.
    pub fn load(profile: &str) -> Result<Self> {
        Self::load_from(&profile_path(profile))
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|e| CliError::io("read config", e))?;
        Self::parse(&text)
    }

    /// Parse `key=value` lines. Blank lines and `#` comments are skipped,
    /// unknown keys are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut cfg = Self::default();
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((k, v)) = line.split_once('=') else {
                return Err(CliError::Config(format!(
                    "line {}: expected key=value",
                    n + 1
                )));
            };
            let v = v.trim();
            let value = (!v.is_empty()).then(|| v.to_owned());
            match k.trim() {
                "api_key" => cfg.api_key = value,
                "device" => cfg.device = value,
                "base_url" => cfg.base_url = value,
                "timeout_secs" => {
                    cfg.timeout_secs = value.map(|v| v.parse()).transpose().map_err(|e| {
                        CliError::Config(format!("line {}: timeout_secs: {e}", n + 1))
                    })?;
                }
                "verify_tls" => cfg.verify_tls = matches!(v, "true" | "1" | "yes"),
                _ => {}
            }
        }
        Ok(cfg)
    }

    /// Render as `key=value` lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut line = |k: &str, v: Option<&str>| {
            if let Some(v) = v {
                out.push_str(k);
                out.push('=');
                out.push_str(v);
                out.push('\n');
            }
        };
        line("api_key", self.api_key.as_deref());
        line("device", self.device.as_deref());
        line("base_url", self.base_url.as_deref());
        line("timeout_secs", self.timeout_secs.map(|t| t.to_string()).as_deref());
        if self.verify_tls {
            line("verify_tls", Some("true"));
        }
        out
    }

    /// Save a profile.
    pub fn save(&self, profile: &str) -> Result<()> {
        self.save_to(&profile_path(profile))
    }

    /// Save to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| CliError::io("create config dir", e))?;
        }
        fs::write(path, self.render()).map_err(|e| CliError::io("write config", e))
    }

    /// Apply command-line overrides on top of the stored settings.
    pub fn merged(mut self, cli: &Cli) -> Self {
        if cli.key.is_some() {
            self.api_key.clone_from(&cli.key);
        }
        if cli.device.is_some() {
            self.device.clone_from(&cli.device);
        }
        if cli.base_url.is_some() {
            self.base_url.clone_from(&cli.base_url);
        }
        if cli.timeout.is_some() {
            self.timeout_secs = cli.timeout;
        }
        self.verify_tls |= cli.verify_tls;
        self
    }

    /// Build a client from these settings.
    pub fn client(&self) -> Result<Client> {
        let key = self.api_key.as_deref().ok_or_else(|| {
            CliError::Config(
                "no API key: pass --key, set REALMCHAT_API_KEY or run `realmchat config set-key`"
                    .into(),
            )
        })?;
        let mut builder = Client::builder(key).accept_invalid_certs(!self.verify_tls);
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }
        if let Some(device) = &self.device {
            builder = builder.device_id(device);
        }
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build()?)
    }
}

/// Run a `config` subcommand against `profile`.
pub fn run(profile: &str, command: &ConfigCommand) -> Result<()> {
    let mut cfg = ProfileConfig::load(profile)?;
    match command {
        ConfigCommand::Show => {
            println!("Profile:     {profile}");
            println!("File:        {}", profile_path(profile).display());
            println!(
                "API key:     {}",
                cfg.api_key.as_deref().map_or_else(|| "(unset)".into(), mask)
            );
            println!("Device:      {}", cfg.device.as_deref().unwrap_or("(unset)"));
            println!(
                "Base URL:    {}",
                cfg.base_url.as_deref().unwrap_or(realmchat::BASE_URL)
            );
            println!(
                "Timeout:     {}",
                cfg.timeout_secs
                    .map_or_else(|| "none".into(), |t| format!("{t}s"))
            );
            println!("Verify TLS:  {}", cfg.verify_tls);
            return Ok(());
        }
        ConfigCommand::SetKey { key } => cfg.api_key = Some(key.clone()),
        ConfigCommand::SetDevice { id } => cfg.device = Some(id.clone()),
        ConfigCommand::SetBaseUrl { url } => {
            // Validate before persisting.
            Client::builder("probe").base_url(url).build()?;
            cfg.base_url = Some(url.clone());
        }
        ConfigCommand::SetTimeout { secs } => cfg.timeout_secs = Some(*secs),
    }
    cfg.save(profile)?;
    println!("Saved {}", profile_path(profile).display());
    Ok(())
}

/// Show only the last four characters of a secret.
pub fn mask(secret: &str) -> String {
    let tail: String = secret
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if secret.chars().count() <= 4 {
        "****".into()
    } else {
        format!("****{tail}")
    }
}
