use adtouch_bridge::{config::DEFAULT_SEPARATOR, panel::PanelState, update::Origin};

/// A single pending update, identified by its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub origin: Origin,
    pub message: String,
}

/// What the display surface has to do after a mutation of the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// The panel was hidden and now has something to show.
    Shown,
    /// The last pending notice went away.
    Hidden,
    /// The panel stays visible with recomputed text.
    Rerendered,
    /// Nothing changed, the panel must not be touched.
    Unchanged,
}

impl PanelTransition {
    /// Whether the display surface needs a fresh [`PanelState`].
    pub fn is_change(self) -> bool {
        self != PanelTransition::Unchanged
    }
}

/// Ordered set of pending update notices backing the notification panel.
///
/// Notices keep the position of their first arrival; a later notice for the
/// same origin replaces the message in place.
#[derive(Debug, Clone)]
pub struct NotificationAggregator {
    notices: Vec<Notice>,
    separator: String,
}

impl Default for NotificationAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationAggregator {
    /// Creates an empty aggregator using the default `" | "` separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SEPARATOR)
    }

    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            notices: Vec::new(),
            separator: separator.into(),
        }
    }

    /// Records an available update, replacing the message if `origin` is
    /// already pending.
    pub fn record_available(
        &mut self,
        origin: Origin,
        message: impl Into<String>,
    ) -> PanelTransition {
        let message = message.into();
        let was_empty = self.notices.is_empty();

        match self.notices.iter_mut().find(|notice| notice.origin == origin) {
            Some(notice) => {
                log::debug!("Replacing pending notice for {origin}");
                notice.message = message;
            }
            None => {
                log::debug!("Adding pending notice for {origin}");
                self.notices.push(Notice { origin, message });
            }
        }

        if was_empty {
            PanelTransition::Shown
        } else {
            PanelTransition::Rerendered
        }
    }

    /// Drops the notice for `origin`. Installing an update that was never
    /// advertised is not an error and leaves the panel untouched.
    pub fn record_installed(&mut self, origin: &Origin) -> PanelTransition {
        let Some(index) = self
            .notices
            .iter()
            .position(|notice| &notice.origin == origin)
        else {
            log::debug!("No pending notice for {origin}, ignoring installation");
            return PanelTransition::Unchanged;
        };

        self.notices.remove(index);
        if self.notices.is_empty() {
            PanelTransition::Hidden
        } else {
            PanelTransition::Rerendered
        }
    }

    /// Clears every pending notice, as done by the panel's close control.
    pub fn dismiss_all(&mut self) -> PanelTransition {
        if self.notices.is_empty() {
            return PanelTransition::Unchanged;
        }

        log::debug!("Dismissing {} pending notice(s)", self.notices.len());
        self.notices.clear();
        PanelTransition::Hidden
    }

    /// Joins every pending message in arrival order. Empty when nothing is
    /// pending.
    pub fn render(&self) -> String {
        self.notices
            .iter()
            .map(|notice| notice.message.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    pub fn is_visible(&self) -> bool {
        !self.notices.is_empty()
    }

    pub fn panel_state(&self) -> PanelState {
        PanelState {
            visible: self.is_visible(),
            text: self.render(),
        }
    }

    #[cfg(test)]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const APP_MESSAGE: &str = "AutodartsTouch update available!";
    const EXTENSION_MESSAGE: &str = "Extension has an update!";

    #[test]
    fn installing_unknown_origin_on_empty_set_is_noop() {
        let mut aggregator = NotificationAggregator::new();

        let transition = aggregator.record_installed(&Origin::from("x"));

        assert_eq!(transition, PanelTransition::Unchanged);
        assert!(aggregator.is_empty());
        assert!(!aggregator.is_visible());
        assert_eq!(aggregator.panel_state(), PanelState::hidden());
    }

    #[test]
    fn same_origin_replaces_message() {
        let mut aggregator = NotificationAggregator::new();

        assert_eq!(
            aggregator.record_available("app".into(), "A"),
            PanelTransition::Shown
        );
        assert_eq!(
            aggregator.record_available("app".into(), "B"),
            PanelTransition::Rerendered
        );

        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.notices()[0].message, "B");
        assert_eq!(aggregator.render(), "B");
    }

    #[test]
    fn replaced_notice_keeps_its_position() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "A");
        aggregator.record_available("ext".into(), "B");
        aggregator.record_available("app".into(), "C");

        assert_eq!(aggregator.render(), "C | B");
    }

    #[test]
    fn renders_in_arrival_order() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "A");
        aggregator.record_available("ext".into(), "B");

        assert_eq!(aggregator.render(), "A | B");
    }

    #[test]
    fn installing_one_origin_keeps_the_others() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "A");
        aggregator.record_available("ext".into(), "B");

        let transition = aggregator.record_installed(&"ext".into());

        assert_eq!(transition, PanelTransition::Rerendered);
        assert_eq!(aggregator.render(), "A");
        assert!(aggregator.is_visible());
    }

    #[test]
    fn installing_last_notice_hides_panel() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "A");

        assert_eq!(
            aggregator.record_installed(&"app".into()),
            PanelTransition::Hidden
        );
        assert!(!aggregator.is_visible());
        assert_eq!(aggregator.render(), "");
    }

    #[test]
    fn dismiss_all_clears_everything() {
        for pending in 1..=4 {
            let mut aggregator = NotificationAggregator::new();
            for index in 0..pending {
                aggregator.record_available(Origin::new(format!("origin-{index}")), "update");
            }

            assert_eq!(aggregator.dismiss_all(), PanelTransition::Hidden);
            assert!(aggregator.is_empty());
            assert!(!aggregator.is_visible());
        }
    }

    #[test]
    fn dismiss_all_when_hidden_fires_nothing() {
        let mut aggregator = NotificationAggregator::new();
        assert_eq!(aggregator.dismiss_all(), PanelTransition::Unchanged);
    }

    #[test]
    fn installing_unknown_origin_while_visible_keeps_text() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "A");

        assert_eq!(
            aggregator.record_installed(&"extension".into()),
            PanelTransition::Unchanged
        );
        assert_eq!(aggregator.render(), "A");
    }

    #[test]
    fn custom_separator_is_used() {
        let mut aggregator = NotificationAggregator::with_separator(" / ");
        aggregator.record_available("app".into(), "A");
        aggregator.record_available("ext".into(), "B");

        assert_eq!(aggregator.render(), "A / B");
    }

    #[test]
    fn messages_are_not_escaped() {
        let mut aggregator = NotificationAggregator::new();
        aggregator.record_available("app".into(), "<b>v2 | beta</b>");

        assert_eq!(aggregator.render(), "<b>v2 | beta</b>");
    }

    #[test]
    fn panel_reopens_after_hide_and_repeated_install_is_noop() {
        let mut aggregator = NotificationAggregator::new();

        assert_eq!(
            aggregator.record_available("app".into(), ""),
            PanelTransition::Shown
        );
        assert_eq!(
            aggregator.panel_state(),
            PanelState {
                visible: true,
                text: String::new(),
            }
        );
        assert_eq!(
            aggregator.record_installed(&"app".into()),
            PanelTransition::Hidden
        );
        assert_eq!(
            aggregator.record_installed(&"app".into()),
            PanelTransition::Unchanged
        );
        assert_eq!(
            aggregator.record_available("app".into(), "A"),
            PanelTransition::Shown
        );
        assert_eq!(aggregator.render(), "A");
    }

    #[test]
    fn toolbar_scenario() {
        let mut aggregator = NotificationAggregator::new();

        assert_eq!(
            aggregator.record_available("app".into(), APP_MESSAGE),
            PanelTransition::Shown
        );
        assert_eq!(
            aggregator.panel_state(),
            PanelState {
                visible: true,
                text: APP_MESSAGE.to_string(),
            }
        );

        aggregator.record_available("extension".into(), EXTENSION_MESSAGE);
        assert_eq!(
            aggregator.render(),
            "AutodartsTouch update available! | Extension has an update!"
        );

        assert_eq!(aggregator.dismiss_all(), PanelTransition::Hidden);
        assert!(!aggregator.is_visible());

        aggregator.record_available("app".into(), APP_MESSAGE);
        aggregator.record_available("extension".into(), EXTENSION_MESSAGE);
        assert!(aggregator.is_visible());
        assert_eq!(aggregator.len(), 2);

        assert_eq!(
            aggregator.record_installed(&"extension".into()),
            PanelTransition::Rerendered
        );
        let text = aggregator.render();
        assert!(text.contains(APP_MESSAGE));
        assert!(!text.contains(EXTENSION_MESSAGE));
        assert!(aggregator.is_visible());
    }
}
