//! User settings loaded from a JSON file.

use crate::core::Token;
use crate::logging::{DEFAULT_LOG_DIR, DEFAULT_NAME_FORMAT};
use crate::ui::core::binding::{Bindings, NavAction};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
    UnknownAction { key: Token, action: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read settings: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse settings: {}", e),
            ConfigError::UnknownAction { key, action } => {
                write!(f, "unknown action `{}` bound to `{}`", action, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::UnknownAction { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub keybindings: Vec<KeybindingRule>,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub width: u16,
    pub height: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}

/// Binds `key` to a navigation action name, or removes the binding when the
/// action is `none`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: Token,
    pub action: String,
}

impl KeybindingRule {
    pub fn new(key: impl Into<Token>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
    pub handlers: Vec<HandlerSettings>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            handlers: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HandlerSettings {
    File {
        #[serde(default = "default_log_dir")]
        dir: PathBuf,
        #[serde(
            default = "default_name_format",
            rename = "nameFormat",
            alias = "name_format"
        )]
        name_format: String,
        #[serde(default)]
        level: Option<String>,
    },
    Stream {
        #[serde(default)]
        target: StreamTarget,
        #[serde(default)]
        level: Option<String>,
    },
    Udp {
        host: String,
        port: u16,
        #[serde(default)]
        level: Option<String>,
    },
    Syslog {
        #[serde(default)]
        address: Option<String>,
        #[serde(default)]
        level: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    #[default]
    Stderr,
    Stdout,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_name_format() -> String {
    DEFAULT_NAME_FORMAT.to_string()
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Default bindings with the configured rules applied on top.
    pub fn bindings(&self) -> Result<Bindings, ConfigError> {
        let mut bindings = Bindings::with_defaults();
        apply_rules(&mut bindings, &self.keybindings)?;
        Ok(bindings)
    }
}

pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let settings = Settings::from_json(&text)?;
    tracing::debug!(
        path = %path.display(),
        keybindings = settings.keybindings.len(),
        handlers = settings.logging.handlers.len(),
        "settings loaded"
    );
    Ok(settings)
}

/// Applies every rule or none: the first unknown action leaves `bindings`
/// untouched.
pub fn apply_rules(bindings: &mut Bindings, rules: &[KeybindingRule]) -> Result<(), ConfigError> {
    let mut parsed = Vec::with_capacity(rules.len());
    for rule in rules {
        let action = match rule.action.trim().to_ascii_lowercase().as_str() {
            "none" | "unbind" | "" => None,
            name => Some(NavAction::parse(name).ok_or_else(|| ConfigError::UnknownAction {
                key: rule.key.clone(),
                action: rule.action.clone(),
            })?),
        };
        parsed.push((rule.key.clone(), action));
    }

    for (key, action) in parsed {
        match action {
            Some(action) => {
                bindings.bind(key, action);
            }
            None => {
                bindings.unbind(&key);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
