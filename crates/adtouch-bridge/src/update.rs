use serde::{Deserialize, Serialize};

/// Logical source of an update, e.g. `"app"` for the main application or
/// `"extension"` for the companion browser extension.
///
/// The set of origins is open: any tag the updater reports is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Origin(String);

impl Origin {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Origin {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Origin {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Payload of the updater's `update-available` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateAvailable {
    /// Which component has an update pending. The updater names this field
    /// `type`.
    #[serde(alias = "type")]
    pub origin: Origin,
    /// Text shown to the user in the notification panel.
    pub message: String,
    /// Version being advertised, when the updater knows it.
    #[serde(default)]
    pub version: Option<String>,
}

/// Payload of the updater's `update-installed` event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UpdateInstalled {
    /// Which component finished updating.
    #[serde(alias = "type")]
    pub origin: Origin,
}

/// Latest version advertised for one origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginVersion {
    pub origin: Origin,
    /// `None` until the updater reports a version for this origin.
    pub latest: Option<String>,
}
