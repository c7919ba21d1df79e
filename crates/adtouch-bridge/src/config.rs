use serde::{Deserialize, Serialize};

/// Separator placed between messages of different origins in the panel text.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Configuration of the update notification panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Literal text inserted between two rendered notices.
    pub separator: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Configuration for the notification panel.
    pub notifications: NotificationsConfig,
}
