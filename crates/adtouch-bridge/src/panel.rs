/// Snapshot of the update notification panel as the display surface should
/// draw it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    /// Whether the panel is shown. True exactly when notices are pending.
    pub visible: bool,
    /// Combined text of every pending notice. Empty while hidden.
    pub text: String,
}

impl PanelState {
    /// State of a panel with nothing to show.
    pub fn hidden() -> Self {
        Self::default()
    }
}
