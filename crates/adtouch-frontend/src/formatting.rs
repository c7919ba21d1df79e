use adtouch_bridge::{config::Config, panel::PanelState, update::OriginVersion};

/// Placeholder shown for an origin whose version has not been reported yet.
pub const VERSION_PLACEHOLDER: &str = "Loading...";

/// Draws the notification panel as a single console line.
pub fn format_panel(panel: &PanelState) -> String {
    if panel.visible {
        format!("[update] {} [x]", panel.text)
    } else {
        "[update] (hidden)".to_string()
    }
}

pub fn format_versions(versions: &[OriginVersion]) -> String {
    if versions.is_empty() {
        return "no updates reported yet".to_string();
    }

    versions
        .iter()
        .map(|entry| {
            format!(
                "{}: {}",
                entry.origin,
                entry.latest.as_deref().unwrap_or(VERSION_PLACEHOLDER)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_config(config: &Config) -> String {
    format!("separator: {:?}", config.notifications.separator)
}
